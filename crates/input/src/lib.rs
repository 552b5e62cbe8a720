//! Player input module.
//!
//! Turns raw lines of text into validated [`crate::types::Code`] guesses.
//! Validation itself lives in `mastermind_types` (`Code::from_str`) so it can
//! be exercised without any reader; this crate adds the interactive
//! prompt/re-prompt loop as a [`crate::core::GuessSource`].

pub mod prompt;

pub use mastermind_core as core;
pub use mastermind_types as types;

pub use prompt::LinePrompt;
