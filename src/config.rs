//! Runtime configuration.
//!
//! Settings come from environment variables first, then command-line flags
//! override them. Difficulty (code length, turn limit) is fixed and not
//! configurable here.
//!
//! | Variable | Flag | Effect |
//! |----------|------|--------|
//! | `MASTERMIND_SEED` | `--seed <u64>` | reproducible secret |
//! | `MASTERMIND_LANG` | `--lang <en\|fr>` | text language |
//! | `NO_COLOR`, `MASTERMIND_NO_COLOR` | `--no-color` | plain glyphs |
//! | `MASTERMIND_NO_CLEAR` | `--no-clear` | keep the screen at startup |
//! | `MASTERMIND_LOG_PATH` | | write tracing logs to this file |
//! | `RUST_LOG` | | log filter, [`DEFAULT_LOG_FILTER`] when unset |

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::types::Lang;

pub const USAGE: &str = "\
Usage: mastermind [--seed <u64>] [--lang <en|fr>] [--no-color] [--no-clear]

Guess the secret combination of four colors in ten turns.
Type four digits (1-6), one per color, and press Enter.";

/// Filter used for the log file when `RUST_LOG` is unset or empty.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub lang: Lang,
    /// `None` means decide from whether stdout is a terminal.
    pub color: Option<bool>,
    pub clear_screen: bool,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            lang: Lang::En,
            color: None,
            clear_screen: true,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Play(Config),
    Help,
}

impl Config {
    /// Create from process environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup. Unparseable values fall back
    /// to defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let set = |key: &str| {
            var(key)
                .map(|v| !v.trim().is_empty() && v.trim() != "0")
                .unwrap_or(false)
        };

        let seed = var("MASTERMIND_SEED").and_then(|s| s.trim().parse().ok());

        let lang = var("MASTERMIND_LANG")
            .and_then(|s| Lang::from_str(&s))
            .unwrap_or_default();

        let color = if set("NO_COLOR") || set("MASTERMIND_NO_COLOR") {
            Some(false)
        } else {
            None
        };

        let log_path = var("MASTERMIND_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .map(PathBuf::from);

        let log_filter = var("RUST_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            seed,
            lang,
            color,
            clear_screen: !set("MASTERMIND_NO_CLEAR"),
            log_path,
            log_filter,
        }
    }

    /// Apply command-line flags (program name already stripped).
    pub fn with_args(mut self, args: &[String]) -> Result<Invocation> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    self.seed = Some(
                        v.parse::<u64>()
                            .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                    );
                }
                "--lang" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --lang"))?;
                    self.lang =
                        Lang::from_str(v).ok_or_else(|| anyhow!("unsupported --lang: {}", v))?;
                }
                "--no-color" => self.color = Some(false),
                "--no-clear" => self.clear_screen = false,
                "-h" | "--help" => return Ok(Invocation::Help),
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(Invocation::Play(self))
    }
}
