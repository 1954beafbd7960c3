//! Word sections - common patterns, dictionary words and personal information.
//!
//! All comparisons are case-insensitive. Each category contributes at most
//! one penalty no matter how many of its entries match.

use super::{Finding, SectionContext, SectionOutcome};

const COMMON_PATTERN_PENALTY: i64 = 20;
const DICTIONARY_PENALTY: i64 = 15;
const PERSONAL_INFO_PENALTY: i64 = 20;

/// Flags any common pattern occurring anywhere in the password.
pub fn common_pattern_section(ctx: &SectionContext) -> SectionOutcome {
    let hit = ctx
        .rules
        .common_patterns
        .iter()
        .find(|pattern| ctx.lowered.contains(pattern.to_lowercase().as_str()));

    match hit {
        Some(_) => SectionOutcome::penalty(
            COMMON_PATTERN_PENALTY,
            Finding::new(
                "Contains common pattern or word",
                "Avoid common words or predictable patterns",
            ),
        ),
        None => SectionOutcome::pass(),
    }
}

/// Flags a dictionary word standing on its own, delimited by word boundaries.
pub fn dictionary_section(ctx: &SectionContext) -> SectionOutcome {
    let hit = ctx.dictionary.find_match(&ctx.lowered);

    match hit {
        Some(_) => SectionOutcome::penalty(
            DICTIONARY_PENALTY,
            Finding::new(
                "Contains dictionary word",
                "Avoid using common dictionary words",
            ),
        ),
        None => SectionOutcome::pass(),
    }
}

/// Flags any non-empty personal detail contained in the password.
pub fn personal_info_section(ctx: &SectionContext) -> SectionOutcome {
    let hit = ctx
        .personal_info
        .iter()
        .filter(|info| !info.is_empty())
        .find(|info| ctx.lowered.contains(info.to_lowercase().as_str()));

    match hit {
        Some(_) => SectionOutcome::penalty(
            PERSONAL_INFO_PENALTY,
            Finding::new(
                "Contains personal information",
                "Avoid using personal details like name or birthdate",
            ),
        ),
        None => SectionOutcome::pass(),
    }
}
