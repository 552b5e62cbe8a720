//! Terminal Mastermind (workspace facade crate).
//!
//! The game is split across dedicated crates under `crates/`; this package
//! re-exports them as `mastermind::{core,input,term,types}` and owns the
//! runtime [`config`].

pub mod config;

pub use mastermind_core as core;
pub use mastermind_input as input;
pub use mastermind_term as term;
pub use mastermind_types as types;
