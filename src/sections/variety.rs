//! Character variety section - lowercase, uppercase, digits, special chars.

use super::{Finding, SectionContext, SectionOutcome};

const POINTS_PER_CLASS: i64 = 15;
const MIN_CLASSES: usize = 3;

/// Adds 15 points per character class present and flags passwords using
/// fewer than three classes.
pub fn character_variety_section(ctx: &SectionContext) -> SectionOutcome {
    let char_types = ctx.classes.count();
    let finding = (char_types < MIN_CLASSES).then(|| {
        Finding::new(
            "Limited character variety",
            "Include a mix of uppercase, lowercase, numbers, and special characters",
        )
    });

    SectionOutcome {
        delta: char_types as i64 * POINTS_PER_CLASS,
        finding,
    }
}
