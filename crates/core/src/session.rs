//! Game session - secret ownership, turn counting and termination
//!
//! ```text
//!             valid guess
//! AwaitingGuess ─────────► Evaluating ──exact == CODE_LEN──► Won
//!       ▲                      │
//!       │   turn < limit       │ turn == limit
//!       └──────────────────────┴─────────────────────────────► Lost
//! ```
//!
//! `Evaluating` only exists for the duration of [`GameSession::submit`].
//! `Won` and `Lost` are terminal; the secret is revealed only then.

use derive_more::{Display, Error};
use tracing::{debug, info};

use crate::matcher::evaluate;
use crate::rng::{generate_secret, ColorSource};
use crate::types::{Code, Feedback, TURN_LIMIT};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the next validated guess
    AwaitingGuess,
    /// A guess is being scored
    Evaluating,
    /// The secret was found
    Won,
    /// The turn limit was reached without finding the secret
    Lost,
}

impl SessionState {
    pub fn is_finished(&self) -> bool {
        matches!(self, SessionState::Won | SessionState::Lost)
    }
}

/// What happened on one evaluated turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// 1-based turn number
    pub turn: u32,
    pub guess: Code,
    pub feedback: Feedback,
    /// State after the turn
    pub state: SessionState,
}

/// Final label of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Win,
    Loss,
}

/// Terminal result: always carries the revealed secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub kind: OutcomeKind,
    /// Number of evaluated turns
    pub turns: u32,
    pub secret: Code,
}

impl Outcome {
    pub fn is_win(&self) -> bool {
        self.kind == OutcomeKind::Win
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    #[display("game already finished after {turns} turns")]
    Finished { turns: u32 },
}

/// One game of Mastermind
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Code,
    /// Turns evaluated so far
    turns: u32,
    state: SessionState,
}

impl GameSession {
    /// Start a game with a secret drawn from `source`
    pub fn new(source: &mut impl ColorSource) -> Self {
        let session = Self::with_secret(generate_secret(source));
        debug!("new session, secret generated");
        session
    }

    /// Start a game with a known secret
    pub fn with_secret(secret: Code) -> Self {
        Self {
            secret,
            turns: 0,
            state: SessionState::AwaitingGuess,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of guesses evaluated so far
    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn turns_remaining(&self) -> u32 {
        TURN_LIMIT - self.turns
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// The secret, once the game is over
    pub fn revealed_secret(&self) -> Option<Code> {
        self.is_finished().then_some(self.secret)
    }

    /// Final result, once the game is over
    pub fn outcome(&self) -> Option<Outcome> {
        let kind = match self.state {
            SessionState::Won => OutcomeKind::Win,
            SessionState::Lost => OutcomeKind::Loss,
            SessionState::AwaitingGuess | SessionState::Evaluating => return None,
        };
        Some(Outcome {
            kind,
            turns: self.turns,
            secret: self.secret,
        })
    }

    /// Score one validated guess and advance the state machine.
    ///
    /// Rejected without side effects once the game is finished.
    pub fn submit(&mut self, guess: Code) -> Result<TurnReport, SessionError> {
        if self.is_finished() {
            return Err(SessionError::Finished { turns: self.turns });
        }

        self.state = SessionState::Evaluating;
        self.turns += 1;
        let feedback = evaluate(&self.secret, &guess);

        self.state = if feedback.is_solved() {
            SessionState::Won
        } else if self.turns >= TURN_LIMIT {
            SessionState::Lost
        } else {
            SessionState::AwaitingGuess
        };

        debug!(
            turn = self.turns,
            %guess,
            exact = feedback.exact,
            partial = feedback.partial,
            state = ?self.state,
            "turn evaluated"
        );
        if let Some(outcome) = self.outcome() {
            info!(kind = ?outcome.kind, turns = outcome.turns, "game over");
        }

        Ok(TurnReport {
            turn: self.turns,
            guess,
            feedback,
            state: self.state,
        })
    }
}
