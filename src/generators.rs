use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::IndexedRandom;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// One of the four character classes a password is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// The fixed source pool of this class, before any exclusion.
    pub fn pool(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digit => "numbers",
            CharClass::Symbol => "symbols",
        }
    }

    /// Pool characters that survive `excluded`, in source order.
    pub fn filtered(self, excluded: &BTreeSet<char>) -> Vec<char> {
        self.pool().chars().filter(|c| !excluded.contains(c)).collect()
    }
}

pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}

/// Uniform pick from `pool`, `None` when the pool is empty.
pub fn generate_from<R: Rng>(pool: &[char], rng: &mut R) -> Option<char> {
    pool.choose(rng).copied()
}
