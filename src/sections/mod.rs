//! Password analysis sections
//!
//! Each section inspects one aspect of the password and reports a score
//! adjustment plus, when it found a problem, an issue and a recommendation.

mod length;
mod repetition;
mod spaces;
mod variety;
mod words;

pub use length::length_section;
pub use repetition::{repetition_section, sequence_section};
pub use spaces::spaces_section;
pub use variety::character_variety_section;
pub use words::{common_pattern_section, dictionary_section, personal_info_section};

use std::borrow::Cow;

use crate::charset::ClassPresence;
use crate::rules::{RuleTables, WordMatcher};

/// A detected problem and how to fix it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub issue: String,
    pub recommendation: String,
}

impl Finding {
    pub fn new(issue: impl Into<String>, recommendation: impl Into<String>) -> Self {
        Self {
            issue: issue.into(),
            recommendation: recommendation.into(),
        }
    }
}

/// Result of a section: points added to (or removed from) the running score
/// and the finding, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionOutcome {
    pub delta: i64,
    pub finding: Option<Finding>,
}

impl SectionOutcome {
    pub fn pass() -> Self {
        Self::default()
    }

    pub fn penalty(amount: i64, finding: Finding) -> Self {
        Self {
            delta: -amount,
            finding: Some(finding),
        }
    }
}

/// Everything a section may look at. Built once per analysis.
pub struct SectionContext<'a> {
    pub password: &'a str,
    pub lowered: String,
    pub length: usize,
    pub classes: ClassPresence,
    pub personal_info: &'a [String],
    pub rules: &'a RuleTables,
    pub dictionary: Cow<'a, WordMatcher>,
}

impl<'a> SectionContext<'a> {
    /// Builds a context, compiling the dictionary matcher from `rules`.
    pub fn new(password: &'a str, personal_info: &'a [String], rules: &'a RuleTables) -> Self {
        let dictionary = WordMatcher::new(&rules.dictionary_words);
        Self::build(password, personal_info, rules, Cow::Owned(dictionary))
    }

    /// Builds a context around a matcher compiled ahead of time.
    pub fn with_dictionary(
        password: &'a str,
        personal_info: &'a [String],
        rules: &'a RuleTables,
        dictionary: &'a WordMatcher,
    ) -> Self {
        Self::build(password, personal_info, rules, Cow::Borrowed(dictionary))
    }

    fn build(
        password: &'a str,
        personal_info: &'a [String],
        rules: &'a RuleTables,
        dictionary: Cow<'a, WordMatcher>,
    ) -> Self {
        Self {
            password,
            lowered: password.to_lowercase(),
            length: password.chars().count(),
            classes: ClassPresence::detect(password),
            personal_info,
            rules,
            dictionary,
        }
    }
}

pub type Section = fn(&SectionContext) -> SectionOutcome;

/// Sections in evaluation order. Issues are reported in this order too.
pub const SECTIONS: &[(&str, Section)] = &[
    ("spaces", spaces_section),
    ("length", length_section),
    ("variety", character_variety_section),
    ("common_pattern", common_pattern_section),
    ("dictionary", dictionary_section),
    ("personal_info", personal_info_section),
    ("repetition", repetition_section),
    ("sequence", sequence_section),
];

