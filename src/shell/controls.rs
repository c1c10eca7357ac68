//! Toggle and slider state.

use crate::pass::{GenerationRequest, MAX_LENGTH, MIN_LENGTH};

/// Slider position on startup.
pub const DEFAULT_LENGTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub include_upper: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    length: usize,
}

impl Controls {
    pub fn new(
        length: usize,
        include_upper: bool,
        include_numbers: bool,
        include_symbols: bool,
    ) -> Self {
        Self {
            include_upper,
            include_numbers,
            include_symbols,
            length: length.clamp(MIN_LENGTH, MAX_LENGTH),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn set_length(&mut self, length: usize) {
        self.length = length.clamp(MIN_LENGTH, MAX_LENGTH);
    }

    /// Move the slider by `delta`, stopping at either end.
    pub fn step_length(&mut self, delta: isize) {
        let moved = self.length.saturating_add_signed(delta);
        self.set_length(moved);
    }

    pub fn toggle_upper(&mut self) {
        self.include_upper = !self.include_upper;
    }

    pub fn toggle_numbers(&mut self) {
        self.include_numbers = !self.include_numbers;
    }

    pub fn toggle_symbols(&mut self) {
        self.include_symbols = !self.include_symbols;
    }

    /// Snapshot the controls into a request.
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(
            self.length,
            self.include_upper,
            self.include_numbers,
            self.include_symbols,
        )
    }
}

/// Slider at 16, every optional class unchecked.
impl Default for Controls {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH, false, false, false)
    }
}
