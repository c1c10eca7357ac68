//! Generation parameters.

use super::charset::CharacterPool;

/// Shortest password the slider allows.
pub const MIN_LENGTH: usize = 1;
/// Longest password the slider allows. The generator itself has no limit.
pub const MAX_LENGTH: usize = 60;

/// Everything that determines one generation call.
///
/// Built fresh from the controls at the moment of the generate action and
/// passed by value; nothing about it is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub include_upper: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl GenerationRequest {
    /// Any length is accepted; zero yields an empty password.
    pub fn new(
        length: usize,
        include_upper: bool,
        include_numbers: bool,
        include_symbols: bool,
    ) -> Self {
        Self {
            length,
            include_upper,
            include_numbers,
            include_symbols,
        }
    }

    pub fn pool(&self) -> CharacterPool {
        CharacterPool::new(
            self.include_upper,
            self.include_numbers,
            self.include_symbols,
        )
    }
}
