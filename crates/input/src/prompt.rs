//! Line-based guess prompt.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::core::GuessSource;
use crate::types::{Code, GuessError, Messages};

/// Reads guesses one line at a time, re-prompting until a line parses.
///
/// Generic over reader and writer so tests can drive it with in-memory
/// buffers instead of a terminal.
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
    messages: &'static Messages,
    line: String,
    rejected: u32,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W, messages: &'static Messages) -> Self {
        Self {
            reader,
            writer,
            messages,
            line: String::with_capacity(16),
            rejected: 0,
        }
    }

    /// Total number of rejected lines so far
    pub fn rejected(&self) -> u32 {
        self.rejected
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Print the prompt and read one line without its terminator. `None` on
    /// end of input.
    fn next_line(&mut self) -> io::Result<Option<&str>> {
        self.writer.write_all(self.messages.prompt.as_bytes())?;
        self.writer.flush()?;

        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.line.trim_end_matches(['\r', '\n'])))
    }

    fn report(&mut self, err: &GuessError) -> io::Result<()> {
        self.rejected += 1;
        writeln!(self.writer, "{}: {}.", self.messages.invalid_input, err)
    }
}

impl<R: BufRead, W: Write> GuessSource for LinePrompt<R, W> {
    fn read_guess(&mut self) -> io::Result<Code> {
        loop {
            let parsed = match self.next_line()? {
                Some(line) => line.parse::<Code>(),
                None => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "input closed before the game ended",
                    ))
                }
            };

            match parsed {
                Ok(code) => return Ok(code),
                Err(err) => {
                    debug!(%err, "guess rejected");
                    self.report(&err)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color::*, Lang};
    use std::io::Cursor;

    fn prompt(input: &str) -> LinePrompt<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompt::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            Lang::En.messages(),
        )
    }

    #[test]
    fn test_reads_valid_guess() {
        let mut p = prompt("1234\n");
        let code = p.read_guess().unwrap();
        assert_eq!(code, Code::new([Yellow, Blue, Red, Green]));
        assert_eq!(p.rejected(), 0);

        let (_, out) = p.into_inner();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Enter four digits for your colors: "
        );
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut p = prompt("12\nabcd\n1279\n\n5566\n");
        let code = p.read_guess().unwrap();
        assert_eq!(code, Code::new([White, White, Magenta, Magenta]));
        assert_eq!(p.rejected(), 4);

        let (_, out) = p.into_inner();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Enter four digits").count(), 5);
        assert_eq!(out.matches("Invalid input").count(), 4);
        assert!(out.contains("expected 4 digits, got 2"));
        assert!(out.contains("character 1 ('a') is not a digit"));
        assert!(out.contains("digit 7 at position 3"));
    }

    #[test]
    fn test_consecutive_guesses_share_reader() {
        let mut p = prompt("1111\r\n2222\n");
        assert_eq!(p.read_guess().unwrap(), Code::new([Yellow; 4]));
        assert_eq!(p.read_guess().unwrap(), Code::new([Blue; 4]));
    }

    #[test]
    fn test_only_line_terminator_is_stripped() {
        let mut p = prompt(" 1234\n1234\t\n\t1234  \r\n4321\r\n");
        assert_eq!(p.read_guess().unwrap(), Code::new([Green, Red, Blue, Yellow]));
        assert_eq!(p.rejected(), 3);

        let (_, out) = p.into_inner();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("expected 4 digits, got 5").count(), 2);
        assert!(out.contains("expected 4 digits, got 7"));
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut p = prompt("6543");
        assert_eq!(
            p.read_guess().unwrap(),
            Code::new([Magenta, White, Green, Red])
        );
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut p = prompt("99\n");
        let err = p.read_guess().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(p.rejected(), 1);
    }

    #[test]
    fn test_french_prompt() {
        let mut p = LinePrompt::new(
            Cursor::new(b"x\n1111\n".to_vec()),
            Vec::new(),
            Lang::Fr.messages(),
        );
        p.read_guess().unwrap();
        let (_, out) = p.into_inner();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Veuillez saisir vos quatre chiffres"));
        assert!(out.contains("Votre saisie est incorrecte"));
    }
}
