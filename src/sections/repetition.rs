//! Pattern sections - detects repeated and sequential characters.

use super::{Finding, SectionContext, SectionOutcome};

const REPETITION_PENALTY: i64 = 10;
const SEQUENCE_PENALTY: i64 = 10;
const MAX_RUN: usize = 3;

/// Flags a single character repeated three or more times in a row.
/// Runs of line breaks are not counted.
pub fn repetition_section(ctx: &SectionContext) -> SectionOutcome {
    let chars: Vec<char> = ctx.password.chars().collect();
    if chars.len() < MAX_RUN {
        return SectionOutcome::pass();
    }

    let repeated = chars
        .windows(MAX_RUN)
        .any(|w| w[0] != '\n' && w.iter().all(|&c| c == w[0]));

    if repeated {
        return SectionOutcome::penalty(
            REPETITION_PENALTY,
            Finding::new(
                "Contains repeated characters",
                "Avoid repeating the same character multiple times",
            ),
        );
    }
    SectionOutcome::pass()
}

/// Flags well-known ascending runs such as `123` or `abc`.
pub fn sequence_section(ctx: &SectionContext) -> SectionOutcome {
    let hit = ctx
        .rules
        .sequences
        .iter()
        .any(|seq| !seq.is_empty() && ctx.lowered.contains(seq.to_lowercase().as_str()));

    if hit {
        return SectionOutcome::penalty(
            SEQUENCE_PENALTY,
            Finding::new(
                "Contains sequential characters",
                "Avoid sequential characters like '123' or 'abc'",
            ),
        );
    }
    SectionOutcome::pass()
}
