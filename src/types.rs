//! Analysis input and output types.

use secrecy::SecretString;
use std::fmt;

/// Qualitative strength derived from the clamped score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    Invalid,
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    Excellent,
}

impl Strength {
    /// Maps a score in `[0, 100]` to a label. Never yields `Invalid`,
    /// which is reserved for empty input.
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => Strength::Excellent,
            70..=89 => Strength::Strong,
            50..=69 => Strength::Moderate,
            30..=49 => Strength::Weak,
            _ => Strength::VeryWeak,
        }
    }

    pub fn is_excellent(&self) -> bool {
        matches!(self, Strength::Excellent)
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Invalid => "Invalid",
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
            Strength::Excellent => "Excellent",
        };
        f.write_str(label)
    }
}

/// A password together with the personal details it should not contain.
#[derive(Debug)]
pub struct AnalysisRequest {
    pub password: SecretString,
    pub personal_info: Vec<String>,
}

impl AnalysisRequest {
    pub fn new(password: SecretString) -> Self {
        Self {
            password,
            personal_info: Vec::new(),
        }
    }

    pub fn with_personal_info<I, S>(mut self, info: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.personal_info.extend(info.into_iter().map(Into::into));
        self
    }
}

/// Outcome of a single analysis. All fields are always populated.
#[derive(Debug)]
pub struct AnalysisResult {
    pub score: u8,
    pub strength: Strength,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    /// Bits, rounded to two decimals.
    pub entropy: f64,
    /// Bits for the same length over the full 77-symbol alphabet, rounded to two decimals.
    pub max_entropy: f64,
    /// Replacement suggestion; `None` exactly when the strength is `Excellent`.
    pub generated_password: Option<SecretString>,
    pub has_spaces: bool,
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_strength_thresholds() {
        assert_eq!(Strength::from_score(100), Strength::Excellent);
        assert_eq!(Strength::from_score(90), Strength::Excellent);
        assert_eq!(Strength::from_score(89), Strength::Strong);
        assert_eq!(Strength::from_score(70), Strength::Strong);
        assert_eq!(Strength::from_score(69), Strength::Moderate);
        assert_eq!(Strength::from_score(50), Strength::Moderate);
        assert_eq!(Strength::from_score(49), Strength::Weak);
        assert_eq!(Strength::from_score(30), Strength::Weak);
        assert_eq!(Strength::from_score(29), Strength::VeryWeak);
        assert_eq!(Strength::from_score(0), Strength::VeryWeak);
    }

    #[test]
    fn test_strength_ordering_and_labels() {
        assert!(Strength::Invalid < Strength::VeryWeak);
        assert!(Strength::Strong < Strength::Excellent);
        assert_eq!(Strength::VeryWeak.to_string(), "Very Weak");
        assert_eq!(Strength::Excellent.to_string(), "Excellent");
    }

    #[test]
    fn test_request_builder() {
        let request = AnalysisRequest::new(SecretString::new("secret".to_string().into()))
            .with_personal_info(["Alice", "1990"]);
        assert_eq!(request.password.expose_secret(), "secret");
        assert_eq!(request.personal_info, vec!["Alice".to_string(), "1990".to_string()]);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(75.20231), 75.2);
        assert_eq!(round2(37.604), 37.6);
        assert_eq!(round2(0.0), 0.0);
    }
}
