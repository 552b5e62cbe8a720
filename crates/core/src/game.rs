//! Game loop and the collaborator seams it drives.
//!
//! The core never touches stdin or the terminal directly. Input comes from a
//! [`GuessSource`] and all presentation goes through a [`TurnRenderer`];
//! both report I/O failures as `std::io::Error`.

use std::io;

use crate::session::{GameSession, Outcome, TurnReport};
use crate::types::Code;

/// Supplies validated guesses.
///
/// Implementations re-prompt on invalid input themselves; a returned `Code`
/// is always well-formed, so rejected input never costs a turn.
pub trait GuessSource {
    fn read_guess(&mut self) -> io::Result<Code>;
}

/// Presentation of the game. Must not influence game state.
pub trait TurnRenderer {
    fn render_rules(&mut self) -> io::Result<()>;
    fn render_turn(&mut self, report: &TurnReport) -> io::Result<()>;
    fn render_outcome(&mut self, outcome: &Outcome) -> io::Result<()>;
}

impl<T: GuessSource + ?Sized> GuessSource for &mut T {
    fn read_guess(&mut self) -> io::Result<Code> {
        (**self).read_guess()
    }
}

impl<T: TurnRenderer + ?Sized> TurnRenderer for &mut T {
    fn render_rules(&mut self) -> io::Result<()> {
        (**self).render_rules()
    }

    fn render_turn(&mut self, report: &TurnReport) -> io::Result<()> {
        (**self).render_turn(report)
    }

    fn render_outcome(&mut self, outcome: &Outcome) -> io::Result<()> {
        (**self).render_outcome(outcome)
    }
}

/// Play `session` to completion: rules, then one guess per turn until the
/// session is won or lost, then the outcome.
pub fn play(
    session: &mut GameSession,
    mut input: impl GuessSource,
    mut renderer: impl TurnRenderer,
) -> io::Result<Outcome> {
    renderer.render_rules()?;

    loop {
        if let Some(outcome) = session.outcome() {
            renderer.render_outcome(&outcome)?;
            return Ok(outcome);
        }

        let guess = input.read_guess()?;
        let report = session.submit(guess).map_err(io::Error::other)?;
        renderer.render_turn(&report)?;
    }
}
