//! Script detection for Latin and Devanagari text.
//!
//! Language labelling is purely script based: a query written in romanised
//! Hindi ("kya hai") is Latin text and is treated as such.

use serde::{Deserialize, Serialize};

/// Returns true for ASCII Latin letters.
pub fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns true for codepoints in the Devanagari block (U+0900..=U+097F).
pub fn is_devanagari(c: char) -> bool {
    matches!(c, '\u{0900}'..='\u{097F}')
}

/// Which scripts occur anywhere in a piece of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptProfile {
    /// At least one ASCII Latin letter is present.
    pub has_latin: bool,
    /// At least one Devanagari codepoint is present.
    pub has_devanagari: bool,
}

impl ScriptProfile {
    /// Scan the text once and record which scripts it contains.
    pub fn of(text: &str) -> Self {
        let mut profile = ScriptProfile::default();
        for c in text.chars() {
            profile.has_latin |= is_latin_letter(c);
            profile.has_devanagari |= is_devanagari(c);
            if profile.is_mixed() {
                break;
            }
        }
        profile
    }

    /// Both scripts are present, in any order and on any line.
    pub fn is_mixed(&self) -> bool {
        self.has_latin && self.has_devanagari
    }
}
