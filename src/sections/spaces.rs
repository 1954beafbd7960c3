//! Spaces section - many systems reject passwords containing spaces.

use super::{Finding, SectionContext, SectionOutcome};

const SPACE_PENALTY: i64 = 15;

/// Penalizes a password containing a literal space character.
pub fn spaces_section(ctx: &SectionContext) -> SectionOutcome {
    if ctx.password.contains(' ') {
        return SectionOutcome::penalty(
            SPACE_PENALTY,
            Finding::new("Password contains spaces", "Avoid using spaces in passwords"),
        );
    }
    SectionOutcome::pass()
}
