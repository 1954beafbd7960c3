//! Rule tables and their configuration.
//!
//! Defaults are built in. Extra common patterns and dictionary words can be
//! loaded from plain text files, one entry per line.

use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::charset::MAX_CHARSET_SIZE;

pub const PATTERNS_PATH_ENV: &str = "PWD_PATTERNS_PATH";
pub const DICTIONARY_PATH_ENV: &str = "PWD_DICTIONARY_PATH";

const DEFAULT_MIN_LENGTH: usize = 12;

const DEFAULT_COMMON_PATTERNS: &[&str] = &[
    "password", "admin", "user", "login", "1234", "qwerty", "abc", "letmein", "welcome", "monkey",
    "secret", "love", "god", "jesus", "admin123", "pass", "12345", "666", "777", "ilove",
];

const DEFAULT_DICTIONARY_WORDS: &[&str] = &[
    "apple", "house", "book", "tree", "sun", "moon", "star", "home", "work", "play", "dog", "cat",
    "bird", "fish", "game", "life",
];

const DEFAULT_SEQUENCES: &[&str] = &["123", "abc", "xyz"];

const GENERAL_TIPS: &[&str] = &[
    "Use at least 12 characters",
    "Include a mix of uppercase letters, lowercase letters, numbers, and special characters",
    "Avoid common words, phrases, or patterns (e.g., 'password', '1234')",
    "Avoid dictionary words (e.g., 'apple', 'house')",
    "Avoid personal information (e.g., name, birthdate)",
    "Use unique passwords for each account",
    "Consider using a password manager for secure storage",
    "Update passwords regularly but not too frequently",
    "Enable two-factor authentication where possible",
    "Avoid spaces in passwords",
];

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Word list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read word list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Word list file is empty: {0}")]
    EmptyFile(PathBuf),
}

/// Read-only rule configuration consulted by every analysis.
///
/// Pattern, dictionary and sequence entries are stored lowercase and are
/// scanned in order; only the first hit of each category is penalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTables {
    pub common_patterns: Vec<String>,
    pub dictionary_words: Vec<String>,
    pub sequences: Vec<String>,
    pub min_length: usize,
    pub max_charset_size: usize,
}

impl Default for RuleTables {
    fn default() -> Self {
        Self {
            common_patterns: to_owned_list(DEFAULT_COMMON_PATTERNS),
            dictionary_words: to_owned_list(DEFAULT_DICTIONARY_WORDS),
            sequences: to_owned_list(DEFAULT_SEQUENCES),
            min_length: DEFAULT_MIN_LENGTH,
            max_charset_size: MAX_CHARSET_SIZE,
        }
    }
}

impl RuleTables {
    /// Builds the default tables, extended by the files named in
    /// `PWD_PATTERNS_PATH` and `PWD_DICTIONARY_PATH` when those are set.
    ///
    /// # Errors
    ///
    /// Returns error if a configured file is missing, unreadable or empty.
    pub fn from_env() -> Result<Self, RulesError> {
        let mut rules = Self::default();
        if let Some(path) = path_from_env(PATTERNS_PATH_ENV) {
            rules = rules.with_patterns_from_path(path)?;
        }
        if let Some(path) = path_from_env(DICTIONARY_PATH_ENV) {
            rules = rules.with_dictionary_from_path(path)?;
        }
        Ok(rules)
    }

    /// Appends the common patterns listed in `path`.
    pub fn with_patterns_from_path<P: AsRef<Path>>(mut self, path: P) -> Result<Self, RulesError> {
        let words = load_word_list(path)?;
        merge(&mut self.common_patterns, words);
        Ok(self)
    }

    /// Appends the dictionary words listed in `path`.
    pub fn with_dictionary_from_path<P: AsRef<Path>>(
        mut self,
        path: P,
    ) -> Result<Self, RulesError> {
        let words = load_word_list(path)?;
        merge(&mut self.dictionary_words, words);
        Ok(self)
    }
}

/// Case-insensitive whole-word matcher, one `\bword\b` regex per entry,
/// tried in list order.
#[derive(Debug, Clone)]
pub struct WordMatcher {
    patterns: Vec<Regex>,
}

impl WordMatcher {
    /// Compiles `words`. Empty entries are skipped; an entry that cannot be
    /// compiled is logged and skipped as well.
    pub fn new(words: &[String]) -> Self {
        let patterns = words
            .iter()
            .filter(|w| !w.is_empty())
            .filter_map(|w| {
                let pattern = format!(r"\b{}\b", regex::escape(&w.to_lowercase()));
                match Regex::new(&pattern) {
                    Ok(re) => Some(re),
                    Err(_e) => {
                        #[cfg(feature = "tracing")]
                        tracing::error!("Skipping dictionary entry: {}", _e);
                        None
                    }
                }
            })
            .collect();
        Self { patterns }
    }

    /// Returns the first pattern matching `lowered`, which must already be
    /// lowercase.
    pub fn find_match(&self, lowered: &str) -> Option<&Regex> {
        self.patterns.iter().find(|re| re.is_match(lowered))
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.find_match(&text.to_lowercase()).is_some()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// General password hygiene advice, independent of any particular password.
pub fn general_tips() -> &'static [&'static str] {
    GENERAL_TIPS
}

fn path_from_env(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

/// Reads a word list: trimmed, lowercased, blank lines skipped, duplicates
/// dropped while keeping first-seen order.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>, RulesError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Word list loading FAILED: FileNotFound {:?}", path);
        return Err(RulesError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Word list loading FAILED: Empty file {:?}", path);
        return Err(RulesError::EmptyFile(path.to_path_buf()));
    }

    let mut words = Vec::new();
    for word in content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
    {
        if !words.contains(&word) {
            words.push(word);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Word list loaded: {} entries from {:?}", words.len(), path);

    Ok(words)
}

fn merge(target: &mut Vec<String>, extra: Vec<String>) {
    for word in extra {
        if !target.contains(&word) {
            target.push(word);
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn set_env(key: &str, value: &str) {
        // SAFETY: env mutation is confined to #[serial] tests
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        // SAFETY: env mutation is confined to #[serial] tests
        unsafe { std::env::remove_var(key); }
    }

    fn setup_with_tempfile(words: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for word in words {
            writeln!(temp_file, "{}", word).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    fn test_default_tables() {
        let rules = RuleTables::default();
        assert_eq!(rules.common_patterns.len(), 20);
        assert_eq!(rules.common_patterns[0], "password");
        assert_eq!(rules.dictionary_words.len(), 16);
        assert_eq!(rules.sequences, vec!["123", "abc", "xyz"]);
        assert_eq!(rules.min_length, 12);
        assert_eq!(rules.max_charset_size, 77);
    }

    fn matcher(words: &[&str]) -> WordMatcher {
        WordMatcher::new(&to_owned_list(words))
    }

    #[test]
    fn test_word_matcher_boundaries() {
        let m = matcher(&["sun"]);
        assert!(m.is_match("sun"));
        assert!(m.is_match("the SUN."));
        assert!(m.is_match("sunny sun"));
        assert!(!m.is_match("sunny"));
        assert!(!m.is_match("xsun"));
        assert!(!m.is_match("sun_"));
    }

    #[test]
    fn test_word_matcher_overlapping_occurrences() {
        let m = matcher(&["b-b"]);
        assert!(m.is_match("ab-b-b"));
        assert!(!m.is_match("ab-b-bc"));
    }

    #[test]
    fn test_word_matcher_escapes_metacharacters() {
        let m = matcher(&["a.b"]);
        assert!(m.is_match("x a.b y"));
        assert!(!m.is_match("x axb y"));
    }

    #[test]
    fn test_word_matcher_skips_empty_entries() {
        let m = matcher(&["", "moon"]);
        assert_eq!(m.len(), 1);
        assert!(matcher(&[""]).is_empty());
        assert!(!matcher(&[""]).is_match("anything"));
    }

    #[test]
    fn test_general_tips() {
        let tips = general_tips();
        assert_eq!(tips.len(), 10);
        assert!(tips.iter().any(|t| t.contains("two-factor")));
    }

    #[test]
    fn test_load_word_list_normalizes() {
        let temp_file = setup_with_tempfile(&["  Dragon ", "", "dragon", "SHADOW"]);
        let words = load_word_list(temp_file.path()).unwrap();
        assert_eq!(words, vec!["dragon", "shadow"]);
    }

    #[test]
    fn test_load_word_list_file_not_found() {
        let result = load_word_list("/nonexistent/path/patterns.txt");
        assert!(matches!(result, Err(RulesError::FileNotFound(_))));
    }

    #[test]
    fn test_load_word_list_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "  \n\n").expect("Failed to write");
        let result = load_word_list(temp_file.path());
        assert!(matches!(result, Err(RulesError::EmptyFile(_))));
    }

    #[test]
    fn test_with_patterns_skips_duplicates() {
        let temp_file = setup_with_tempfile(&["dragon", "password"]);
        let rules = RuleTables::default()
            .with_patterns_from_path(temp_file.path())
            .unwrap();
        assert_eq!(rules.common_patterns.len(), 21);
        assert_eq!(rules.common_patterns.last().map(String::as_str), Some("dragon"));
    }

    #[test]
    #[serial]
    fn test_from_env_without_variables() {
        remove_env(PATTERNS_PATH_ENV);
        remove_env(DICTIONARY_PATH_ENV);
        let rules = RuleTables::from_env().unwrap();
        assert_eq!(rules, RuleTables::default());
    }

    #[test]
    #[serial]
    fn test_from_env_with_files() {
        let patterns = setup_with_tempfile(&["dragon"]);
        let dictionary = setup_with_tempfile(&["river", "cloud"]);
        set_env(PATTERNS_PATH_ENV, patterns.path().to_str().unwrap());
        set_env(DICTIONARY_PATH_ENV, dictionary.path().to_str().unwrap());

        let rules = RuleTables::from_env().unwrap();
        assert!(rules.common_patterns.contains(&"dragon".to_string()));
        assert!(rules.dictionary_words.contains(&"river".to_string()));
        assert!(rules.dictionary_words.contains(&"cloud".to_string()));

        remove_env(PATTERNS_PATH_ENV);
        remove_env(DICTIONARY_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_missing_file() {
        set_env(PATTERNS_PATH_ENV, "/nonexistent/path/patterns.txt");
        let result = RuleTables::from_env();
        assert!(matches!(result, Err(RulesError::FileNotFound(_))));
        remove_env(PATTERNS_PATH_ENV);
    }
}
