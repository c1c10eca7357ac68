//! Character pool assembly and uniform selection.

use rand::{CryptoRng, Rng};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// ASCII punctuation, no space.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// The characters eligible for selection.
///
/// Always starts with the lowercase alphabet; each enabled class is appended,
/// so the pool is never empty and only ever grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    pub fn new(include_upper: bool, include_numbers: bool, include_symbols: bool) -> Self {
        let mut chars: Vec<char> = Vec::with_capacity(
            LOWERCASE.len() + UPPERCASE.len() + DIGITS.len() + PUNCTUATION.len(),
        );

        chars.extend(LOWERCASE.chars());

        if include_upper {
            chars.extend(UPPERCASE.chars());
        }

        if include_numbers {
            chars.extend(DIGITS.chars());
        }

        if include_symbols {
            chars.extend(PUNCTUATION.chars());
        }

        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[cfg(test)]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Pick one character uniformly.
    ///
    /// `gen_range` rejects out-of-zone samples instead of reducing modulo the
    /// pool size, so every character is equally likely.
    #[inline]
    pub fn pick<R>(&self, rng: &mut R) -> char
    where
        R: Rng + CryptoRng,
    {
        let chars = self.chars();
        chars[rng.gen_range(0..chars.len())]
    }
}
