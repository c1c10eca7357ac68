//! Interactive shell state machine.
//!
//! Idle until the first generate action; after that it displays the most
//! recent password. Copy never changes the state.

mod controls;

pub use controls::Controls;

use copypasta::ClipboardProvider;

use crate::clipboard::{self, ClipboardError};
use crate::pass::{self, GenerationRequest, Password};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Number of characters placed on the clipboard.
    Copied(usize),
    NothingToCopy,
}

#[derive(Debug)]
pub struct Shell {
    controls: Controls,
    displayed: Option<Password>,
}

impl Shell {
    pub fn new(controls: Controls) -> Self {
        Self {
            controls,
            displayed: None,
        }
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut Controls {
        &mut self.controls
    }

    pub fn displayed(&self) -> Option<&Password> {
        self.displayed.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.displayed.is_none()
    }

    /// Generate from the controls as they are right now and display the result.
    /// The previous password is dropped (and wiped).
    pub fn generate(&mut self) -> &Password {
        let GenerationRequest {
            length,
            include_upper,
            include_numbers,
            include_symbols,
        } = self.controls.request();
        self.displayed.insert(pass::generate(
            length,
            include_upper,
            include_numbers,
            include_symbols,
        ))
    }

    /// Copy the displayed password. Does nothing while idle or when the
    /// displayed password is empty.
    pub fn copy<C: ClipboardProvider>(
        &self,
        clipboard: &mut C,
    ) -> Result<CopyOutcome, ClipboardError> {
        match &self.displayed {
            Some(password) if !password.is_empty() => {
                clipboard::write(clipboard, password.as_str())?;
                Ok(CopyOutcome::Copied(password.len()))
            }
            _ => Ok(CopyOutcome::NothingToCopy),
        }
    }
}
