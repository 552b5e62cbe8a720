//! Player-facing text catalog.
//!
//! All strings shown to the player live here so the renderer and the input
//! prompt stay language-agnostic. English is the default; French is the
//! only other bundled language.

use crate::{Color, PALETTE_SIZE};

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Fr,
}

impl Lang {
    /// Parse a language tag (case-insensitive). Accepts `en`, `fr` and
    /// locale-style tags such as `fr_FR.UTF-8`.
    pub fn from_str(s: &str) -> Option<Self> {
        let tag = s.trim().to_lowercase();
        let primary = tag.split(['_', '-', '.']).next().unwrap_or("");
        match primary {
            "en" | "english" => Some(Lang::En),
            "fr" | "french" | "francais" | "français" => Some(Lang::Fr),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Lang::En => &EN,
            Lang::Fr => &FR,
        }
    }
}

/// One language's worth of player-facing strings.
#[derive(Debug)]
pub struct Messages {
    pub title: &'static str,
    /// Rules paragraph shown before the first turn.
    pub rules: &'static str,
    pub prompt: &'static str,
    pub invalid_input: &'static str,
    pub indicators: &'static str,
    /// Prefix for the revealed secret on a win.
    pub win: &'static str,
    /// Prefix for the revealed secret on a loss.
    pub loss: &'static str,
    color_names: [&'static str; PALETTE_SIZE],
}

impl Messages {
    pub fn color_name(&self, color: Color) -> &'static str {
        self.color_names[color.slot()]
    }
}

static EN: Messages = Messages {
    title: "MASTERMIND",
    rules: "Find the secret combination of four colors chosen by the computer.\n\
            Every color in the right position earns a red indicator.\n\
            Every color present but in the wrong position earns a white indicator.\n\
            Enter your guess using the digits of the available colors.",
    prompt: "Enter four digits for your colors: ",
    invalid_input: "Invalid input",
    indicators: "Indicators:",
    win: "Well done, the combination was indeed:",
    loss: "You lost, the secret combination was:",
    color_names: ["Yellow", "Blue", "Red", "Green", "White", "Magenta"],
};

static FR: Messages = Messages {
    title: "JEU DU MASTERMIND",
    rules: "Trouver la bonne combinaison de quatre couleurs secrètes que l'ordinateur a générée.\n\
            A chaque couleur bien positionnée, vous aurez en retour un indicateur rouge.\n\
            A chaque couleur présente mais mal positionnée, vous aurez en retour un indicateur blanc.\n\
            Entrez votre combinaison en utilisant les chiffres des couleurs disponibles.",
    prompt: "Veuillez saisir vos quatre chiffres pour les couleurs : ",
    invalid_input: "Votre saisie est incorrecte",
    indicators: "Indicateurs :",
    win: "Bravo, la combinaison était bien :",
    loss: "Perdu, la combinaison secrète était :",
    color_names: ["Jaune", "Bleu", "Rouge", "Vert", "Blanc", "Magenta"],
};
