//! Length section - rewards length and flags passwords below the minimum.

use super::{Finding, SectionContext, SectionOutcome};

const POINTS_PER_CHAR: i64 = 5;
const MAX_LENGTH_POINTS: i64 = 40;

/// Adds up to 40 points (5 per character) and reports passwords shorter than
/// the configured minimum.
pub fn length_section(ctx: &SectionContext) -> SectionOutcome {
    let length = ctx.length as i64;
    let points = length.saturating_mul(POINTS_PER_CHAR).min(MAX_LENGTH_POINTS);

    let min_length = ctx.rules.min_length;
    let finding = (ctx.length < min_length).then(|| {
        Finding::new(
            format!("Password is too short ({} characters)", ctx.length),
            format!("Use at least {} characters", min_length),
        )
    });

    SectionOutcome {
        delta: points,
        finding,
    }
}
