//! Password generation.

pub mod charset;
mod generate;
mod password;
mod request;

pub use generate::generate;
pub use password::Password;
pub use request::{GenerationRequest, MAX_LENGTH, MIN_LENGTH};
