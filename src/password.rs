use std::collections::BTreeSet;

use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::errors::GenerationError;
use crate::generators::{CharClass, generate_from};

pub const MIN_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub excluded: BTreeSet<char>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
            excluded: BTreeSet::new(),
        }
    }
}

impl GenerationOptions {
    /// Lowercase first, then every optional class that is switched on.
    pub fn enabled_classes(&self) -> Vec<CharClass> {
        let mut classes = vec![CharClass::Lowercase];

        if self.include_uppercase {
            classes.push(CharClass::Uppercase);
        }

        if self.include_numbers {
            classes.push(CharClass::Digit);
        }

        if self.include_symbols {
            classes.push(CharClass::Symbol);
        }

        classes
    }
}

/// Builds the candidate alphabet for `options`.
///
/// Lowercase letters are always present; the optional classes follow in
/// uppercase, digit, symbol order. Excluded characters are removed by exact
/// match.
pub fn build_alphabet(options: &GenerationOptions) -> Result<Vec<char>, GenerationError> {
    let alphabet: Vec<char> = options
        .enabled_classes()
        .into_iter()
        .flat_map(|class| class.filtered(&options.excluded))
        .collect();

    if alphabet.is_empty() {
        return Err(GenerationError::EmptyAlphabet);
    }

    Ok(alphabet)
}

/// Generates a password with the thread-local RNG.
pub fn synthesize(options: &GenerationOptions) -> Result<String, GenerationError> {
    synthesize_with(options, &mut rand::rng())
}

/// Generates a password of exactly `options.length` characters, drawing from `rng`.
///
/// Every enabled optional class gets one reserved position, drawn from that
/// class's pool minus the exclusions. A class whose pool is emptied by the
/// exclusions reserves nothing. The rest is filled from the whole alphabet
/// and the result is shuffled.
pub fn synthesize_with<R: Rng>(
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<String, GenerationError> {
    if options.length < MIN_LENGTH {
        return Err(GenerationError::InvalidLength {
            requested: options.length,
            minimum: MIN_LENGTH,
        });
    }

    let alphabet = build_alphabet(options)?;
    debug!("alphabet has {} characters", alphabet.len());

    let mut chars: Vec<char> = Vec::with_capacity(options.length);

    for class in options.enabled_classes().into_iter().skip(1) {
        let pool = class.filtered(&options.excluded);
        match generate_from(&pool, rng) {
            Some(c) => chars.push(c),
            None => warn!("every {} character is excluded, none reserved", class.name()),
        }
    }

    if options.length < chars.len() {
        return Err(GenerationError::InvalidLength {
            requested: options.length,
            minimum: chars.len(),
        });
    }

    let fill = options.length - chars.len();
    chars.extend((0..fill).map(|_| alphabet[rng.random_range(0..alphabet.len())]));

    chars.shuffle(rng);

    Ok(chars.into_iter().collect())
}
