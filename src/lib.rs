//! Password strength analysis library
//!
//! Scores a password against a set of heuristics (length, character variety,
//! common patterns, dictionary words, personal information, repetition,
//! sequences, entropy) and proposes a strong replacement when the result is
//! not already excellent.
//!
//! # Features
//!
//! - `async` (default): Enables cancellable analysis and channel delivery
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_PATTERNS_PATH`: Extra common patterns, one per line
//! - `PWD_DICTIONARY_PATH`: Extra dictionary words, one per line
//!
//! Both are read by [`RuleTables::from_env`]; [`RuleTables::default`] ignores them.
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_analyzer::{Analyzer, RuleTables, general_tips};
//! use secrecy::SecretString;
//!
//! let analyzer = Analyzer::new(RuleTables::from_env().expect("Failed to load rules"));
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let personal_info = vec!["Alice".to_string(), "1990".to_string()];
//! let result = analyzer.analyze(&password, &personal_info);
//!
//! println!("Strength: {} (Score: {}/100)", result.strength, result.score);
//! println!("Entropy: {} bits (max {})", result.entropy, result.max_entropy);
//! for issue in &result.issues {
//!     println!("- {}", issue);
//! }
//! if !result.strength.is_excellent() {
//!     for tip in general_tips() {
//!         println!("* {}", tip);
//!     }
//! }
//! ```

// Internal modules
mod charset;
mod evaluator;
mod generator;
mod rules;
mod sections;
mod types;

// Public API
pub use charset::{CharClass, ClassPresence, MAX_CHARSET_SIZE, entropy_bits};
pub use evaluator::Analyzer;
pub use generator::{
    GeneratorError, MIN_GENERATED_LENGTH, SUGGESTION_LENGTH, generate, generate_with_rng,
};
pub use rules::{
    DICTIONARY_PATH_ENV, PATTERNS_PATH_ENV, RuleTables, RulesError, WordMatcher, general_tips,
    load_word_list,
};
pub use types::{AnalysisRequest, AnalysisResult, Strength};

#[cfg(feature = "async")]
pub use evaluator::analyze_tx;
