//! TerminalRenderer: writes the game to a terminal.
//!
//! Every call encodes its output into a byte buffer with crossterm commands
//! and flushes it in one write. The `encode_*_into` functions do the encoding
//! without touching any writer, so they can be tested directly.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::{Outcome, OutcomeKind, TurnRenderer, TurnReport};
use crate::palette::{
    exact_peg_color, partial_peg_color, term_color, PEG, PLAIN_EXACT, PLAIN_PARTIAL, SQUARE,
};
use crate::types::{Code, Color, Feedback, Messages};

/// How codes and pegs are drawn.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub messages: &'static Messages,
    /// ANSI colors when true; digits and letters otherwise.
    pub color: bool,
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    style: Style,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(style: Style) -> Self {
        Self::new(io::stdout(), style)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, style: Style) -> Self {
        Self {
            out,
            style,
            buf: Vec::with_capacity(1024),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Clear the whole screen and home the cursor.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()
    }
}

impl<W: Write> TurnRenderer for TerminalRenderer<W> {
    fn render_rules(&mut self) -> io::Result<()> {
        self.buf.clear();
        encode_rules_into(self.style, &mut self.buf)?;
        self.flush_buf()
    }

    fn render_turn(&mut self, report: &TurnReport) -> io::Result<()> {
        self.buf.clear();
        encode_turn_into(self.style, &report.guess, report.feedback, &mut self.buf)?;
        self.flush_buf()
    }

    fn render_outcome(&mut self, outcome: &Outcome) -> io::Result<()> {
        self.buf.clear();
        encode_outcome_into(self.style, outcome, &mut self.buf)?;
        self.flush_buf()
    }
}

/// Title, rules paragraph and the numbered palette legend.
pub fn encode_rules_into(style: Style, out: &mut Vec<u8>) -> io::Result<()> {
    let m = style.messages;
    out.queue(Print(m.title))?;
    out.queue(Print('\n'))?;
    out.queue(Print(m.rules))?;
    out.queue(Print('\n'))?;

    for color in Color::ALL {
        out.queue(Print(format!("[{}]: ", color.index())))?;
        if style.color {
            out.queue(SetForegroundColor(term_color(color)))?;
            out.queue(Print(m.color_name(color)))?;
            out.queue(ResetColor)?;
        } else {
            out.queue(Print(m.color_name(color)))?;
        }
        out.queue(Print('\t'))?;
    }
    out.queue(Print('\n'))?;
    Ok(())
}

/// One slot per color, each padded with a space on both sides.
pub fn encode_code_into(style: Style, code: &Code, out: &mut Vec<u8>) -> io::Result<()> {
    for &color in code.iter() {
        if style.color {
            out.queue(Print(' '))?;
            out.queue(SetForegroundColor(term_color(color)))?;
            out.queue(Print(SQUARE))?;
            out.queue(ResetColor)?;
            out.queue(Print(' '))?;
        } else {
            out.queue(Print(format!("[{}]", color.index())))?;
        }
    }
    Ok(())
}

/// Pegs: all exact first, then all partial.
pub fn encode_feedback_into(style: Style, feedback: Feedback, out: &mut Vec<u8>) -> io::Result<()> {
    if style.color {
        for (count, color) in [
            (feedback.exact, exact_peg_color()),
            (feedback.partial, partial_peg_color()),
        ] {
            if count == 0 {
                continue;
            }
            out.queue(SetForegroundColor(color))?;
            for _ in 0..count {
                out.queue(Print(PEG))?;
            }
            out.queue(ResetColor)?;
        }
    } else {
        for _ in 0..feedback.exact {
            out.queue(Print(PLAIN_EXACT))?;
        }
        for _ in 0..feedback.partial {
            out.queue(Print(PLAIN_PARTIAL))?;
        }
    }
    Ok(())
}

/// `<guess> <indicators label> <pegs>` on one line.
pub fn encode_turn_into(
    style: Style,
    guess: &Code,
    feedback: Feedback,
    out: &mut Vec<u8>,
) -> io::Result<()> {
    encode_code_into(style, guess, out)?;
    out.queue(Print(format!(" {} ", style.messages.indicators)))?;
    encode_feedback_into(style, feedback, out)?;
    out.queue(Print('\n'))?;
    Ok(())
}

/// Win or loss message followed by the revealed secret.
pub fn encode_outcome_into(style: Style, outcome: &Outcome, out: &mut Vec<u8>) -> io::Result<()> {
    let label = match outcome.kind {
        OutcomeKind::Win => style.messages.win,
        OutcomeKind::Loss => style.messages.loss,
    };
    out.queue(Print(label))?;
    out.queue(Print('\n'))?;
    encode_code_into(style, &outcome.secret, out)?;
    out.queue(Print('\n'))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color::*, Lang};

    fn plain() -> Style {
        Style {
            messages: Lang::En.messages(),
            color: false,
        }
    }

    fn colored() -> Style {
        Style {
            messages: Lang::En.messages(),
            color: true,
        }
    }

    fn text(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_turn_line() {
        let guess = Code::new([Yellow, Blue, Blue, Magenta]);
        let s = text(|b| encode_turn_into(plain(), &guess, Feedback::new(1, 2), b));
        assert_eq!(s, "[1][2][2][6] Indicators: Xoo\n");
    }

    #[test]
    fn plain_turn_line_without_pegs() {
        let guess = Code::new([Green; 4]);
        let s = text(|b| encode_turn_into(plain(), &guess, Feedback::default(), b));
        assert_eq!(s, "[4][4][4][4] Indicators: \n");
    }

    #[test]
    fn colored_code_draws_one_square_per_slot() {
        let code = Code::new([Red, Red, White, Yellow]);
        let s = text(|b| encode_code_into(colored(), &code, b));
        assert_eq!(s.matches(SQUARE).count(), 4);
        // Every square is followed by a color reset.
        assert_eq!(s.matches("\u{1b}[0m").count(), 4);
    }

    #[test]
    fn colored_feedback_groups_pegs() {
        let s = text(|b| encode_feedback_into(colored(), Feedback::new(2, 1), b));
        assert_eq!(s.matches(PEG).count(), 3);
        let exact = s.find(PEG).unwrap();
        let reset = s.find("\u{1b}[0m").unwrap();
        assert!(exact < reset);
        assert_eq!(s[..reset].matches(PEG).count(), 2);
    }

    #[test]
    fn colored_feedback_empty_emits_nothing() {
        let s = text(|b| encode_feedback_into(colored(), Feedback::default(), b));
        assert!(s.is_empty());
    }

    #[test]
    fn rules_list_palette_in_order() {
        let s = text(|b| encode_rules_into(plain(), b));
        assert!(s.starts_with("MASTERMIND\n"));
        let legend = s.lines().last().unwrap();
        assert_eq!(
            legend,
            "[1]: Yellow\t[2]: Blue\t[3]: Red\t[4]: Green\t[5]: White\t[6]: Magenta\t"
        );
    }

    #[test]
    fn outcome_reveals_secret() {
        let secret = Code::new([White, Red, Green, Blue]);
        let outcome = Outcome {
            kind: OutcomeKind::Loss,
            turns: 10,
            secret,
        };
        let s = text(|b| encode_outcome_into(plain(), &outcome, b));
        assert_eq!(s, "You lost, the secret combination was:\n[5][3][4][2]\n");

        let won = Outcome {
            kind: OutcomeKind::Win,
            ..outcome
        };
        let s = text(|b| encode_outcome_into(plain(), &won, b));
        assert!(s.starts_with("Well done"));
    }

    #[test]
    fn renderer_flushes_each_call() {
        let mut r = TerminalRenderer::new(Vec::new(), plain());
        r.render_turn(&TurnReport {
            turn: 1,
            guess: Code::new([Yellow; 4]),
            feedback: Feedback::new(4, 0),
            state: crate::core::SessionState::Won,
        })
        .unwrap();
        r.clear_screen().unwrap();

        let out = String::from_utf8(r.into_inner()).unwrap();
        assert!(out.starts_with("[1][1][1][1] Indicators: XXXX\n"));
        assert!(out.ends_with("\u{1b}[2J\u{1b}[1;1H"));
    }
}
