//! User-facing rejections
//!
//! None of these are fatal. The `Display` text is what the status bar shows;
//! the session is left exactly as it was.

use crate::numbers::SMALL_THRESHOLD;
use crate::session::MAX_COUNT;
use thiserror::Error;

/// Count typed at the prompt could not be used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a valid positive number!")]
    NotANumber { input: String },

    #[error("Please enter a valid positive number!")]
    NotPositive { input: String },

    #[error("Please enter a number no larger than {}!", MAX_COUNT)]
    TooLarge { count: u64 },
}

/// Interaction on the sort screen was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Please select a value smaller or equal to {}.", SMALL_THRESHOLD)]
    ValueTooLarge { value: u32 },

    #[error("No value in that cell")]
    EmptyCell { index: usize },

    #[error("Already sorting")]
    AlreadySorting,
}
