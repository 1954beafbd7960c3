//! Strong password generator.
//!
//! Every generated password contains at least one character of each class in
//! [`CharClass::ALL`] and never a space, so it clears the variety check of the
//! analyzer by construction.

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::charset::CharClass;

/// Length of the replacement suggested by the analyzer.
pub const SUGGESTION_LENGTH: usize = 16;

/// Shortest length for which every class can be represented.
pub const MIN_GENERATED_LENGTH: usize = CharClass::ALL.len();

const _: () = assert!(SUGGESTION_LENGTH >= MIN_GENERATED_LENGTH);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Requested length {requested} is below the minimum of {minimum}")]
    LengthTooShort { requested: usize, minimum: usize },
}

/// Generates a password of `length` characters using the thread-local RNG.
///
/// # Errors
///
/// Returns [`GeneratorError::LengthTooShort`] when `length` is below
/// [`MIN_GENERATED_LENGTH`].
pub fn generate(length: usize) -> Result<String, GeneratorError> {
    generate_with_rng(&mut rand::thread_rng(), length)
}

/// Same as [`generate`], drawing from the given random source.
pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
) -> Result<String, GeneratorError> {
    if length < MIN_GENERATED_LENGTH {
        #[cfg(feature = "tracing")]
        tracing::error!("Password generation rejected: length {} too short", length);
        return Err(GeneratorError::LengthTooShort {
            requested: length,
            minimum: MIN_GENERATED_LENGTH,
        });
    }
    Ok(assemble(rng, length))
}

/// Builds the password. Callers guarantee `length >= MIN_GENERATED_LENGTH`.
pub(crate) fn assemble<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    let pool: Vec<u8> = CharClass::ALL
        .iter()
        .flat_map(|class| class.alphabet().iter().copied())
        .collect();

    let mut chars: Vec<u8> = CharClass::ALL
        .iter()
        .map(|class| pick(rng, class.alphabet()))
        .collect();
    chars.extend((MIN_GENERATED_LENGTH..length).map(|_| pick(rng, &pool)));

    chars.shuffle(rng);
    chars.into_iter().map(char::from).collect()
}

fn pick<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8]) -> u8 {
    alphabet[rng.gen_range(0..alphabet.len())]
}
