//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules of the game and nothing else. It has no
//! dependency on the terminal or on stdin, which makes it:
//!
//! - **Deterministic**: a seeded [`RandomColors`] or an explicit secret
//!   reproduces a game exactly
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: input and output are pluggable through traits
//!
//! # Module Structure
//!
//! - [`matcher`]: the two-pass exact/partial scoring rule
//! - [`rng`]: secret generation through an injectable [`ColorSource`]
//! - [`session`]: the [`GameSession`] state machine (turn counting, win/loss)
//! - [`game`]: collaborator traits and the [`play`] loop
//!
//! # Example
//!
//! ```
//! use mastermind_core::{GameSession, SessionState};
//! use mastermind_core::types::{Code, Feedback};
//!
//! let secret: Code = "1123".parse().unwrap();
//! let mut game = GameSession::with_secret(secret);
//!
//! let report = game.submit("3211".parse().unwrap()).unwrap();
//! assert_eq!(report.feedback, Feedback::new(0, 4));
//! assert_eq!(report.state, SessionState::AwaitingGuess);
//!
//! let report = game.submit(secret).unwrap();
//! assert_eq!(report.state, SessionState::Won);
//! assert_eq!(game.revealed_secret(), Some(secret));
//! ```

pub mod game;
pub mod matcher;
pub mod rng;
pub mod session;

pub use mastermind_types as types;

// Re-export commonly used types for convenience
pub use game::{play, GuessSource, TurnRenderer};
pub use matcher::evaluate;
pub use rng::{generate_secret, ColorSource, RandomColors};
pub use session::{GameSession, Outcome, OutcomeKind, SessionError, SessionState, TurnReport};
