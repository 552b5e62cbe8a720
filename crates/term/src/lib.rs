//! Terminal rendering module.
//!
//! Presentation for the game: the rules screen, one line per evaluated turn
//! (colored squares for the guess, red and white pegs for the feedback) and
//! the final message with the revealed secret.
//!
//! Goals:
//! - Keep `core` free of any terminal concerns
//! - Encode output into a buffer with crossterm commands, flush once per call
//! - Degrade to plain glyphs when colors are disabled (`NO_COLOR`, pipes)

pub mod palette;
pub mod renderer;

pub use mastermind_core as core;
pub use mastermind_types as types;

pub use renderer::{
    encode_code_into, encode_feedback_into, encode_outcome_into, encode_rules_into,
    encode_turn_into, Style, TerminalRenderer,
};
