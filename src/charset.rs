//! Character classes shared by entropy estimation and password generation.

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!@#$%^&*(),.?\":{}|<>";

/// Size of the universal alphabet: every class weight summed.
pub const MAX_CHARSET_SIZE: usize = 26 + 26 + 10 + 15;

/// The four character classes a password is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Special,
    ];

    /// Symbols that belong to the class. Never contains a space.
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    /// Contribution of the class to the charset size used for entropy.
    pub fn weight(self) -> usize {
        match self {
            CharClass::Lowercase => 26,
            CharClass::Uppercase => 26,
            CharClass::Digit => 10,
            CharClass::Special => 15,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }
}

/// Which classes occur at least once in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassPresence {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl ClassPresence {
    pub fn detect(password: &str) -> Self {
        let has = |class: CharClass| password.chars().any(|c| class.contains(c));
        Self {
            lowercase: has(CharClass::Lowercase),
            uppercase: has(CharClass::Uppercase),
            digit: has(CharClass::Digit),
            special: has(CharClass::Special),
        }
    }

    pub fn has(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Digit => self.digit,
            CharClass::Special => self.special,
        }
    }

    pub fn count(&self) -> usize {
        CharClass::ALL.iter().filter(|&&c| self.has(c)).count()
    }

    pub fn charset_size(&self) -> usize {
        CharClass::ALL
            .iter()
            .filter(|&&c| self.has(c))
            .map(|c| c.weight())
            .sum()
    }
}

/// Bits of entropy for `length` symbols drawn from `charset_size` symbols.
///
/// Equal to `log2(charset_size ^ length)`, computed without the power so long
/// inputs cannot overflow. Returns 0 for an empty charset.
pub fn entropy_bits(charset_size: usize, length: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_charset_matches_weights() {
        let total: usize = CharClass::ALL.iter().map(|c| c.weight()).sum();
        assert_eq!(total, MAX_CHARSET_SIZE);
        assert_eq!(MAX_CHARSET_SIZE, 77);
    }

    #[test]
    fn test_alphabets_have_no_space() {
        for class in CharClass::ALL {
            assert!(!class.alphabet().contains(&b' '));
        }
    }

    #[test]
    fn test_detect_all_classes() {
        let presence = ClassPresence::detect("aB3!");
        assert_eq!(presence.count(), 4);
        assert_eq!(presence.charset_size(), 77);
    }

    #[test]
    fn test_detect_ignores_non_ascii_and_unlisted_symbols() {
        let presence = ClassPresence::detect("éü_~ ");
        assert_eq!(presence.count(), 0);
        assert_eq!(presence.charset_size(), 0);
    }

    #[test]
    fn test_detect_lower_and_digit() {
        let presence = ClassPresence::detect("abc123");
        assert!(presence.lowercase && presence.digit);
        assert!(!presence.uppercase && !presence.special);
        assert_eq!(presence.charset_size(), 36);
    }

    #[test]
    fn test_entropy_bits() {
        assert_eq!(entropy_bits(0, 10), 0.0);
        assert!((entropy_bits(26, 1) - 26f64.log2()).abs() < 1e-9);
        assert!((entropy_bits(2, 8) - 8.0).abs() < 1e-9);
    }
}
