//! Key combination parsing and matching.
//!
//! Combos are written as `+`-joined tokens: zero or more modifiers followed
//! by one physical key code, e.g. `"KeyP"`, `"Ctrl+KeyZ"`,
//! `"Ctrl+Shift+KeyZ"`. A combo made only of modifiers (`"Shift"`) matches
//! on modifier state alone. `Option` is accepted as an alias for `Alt`.
//!
//! Matching is exact on modifiers: `"KeyE"` does not fire while Shift is
//! held.

use crate::input::KeyEvent;
use scribble_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyCombo {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
    /// Physical key code; `None` for a modifier-only combo.
    pub code: Option<String>,
}

impl KeyCombo {
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidKeyCombo(s.to_string());
        let mut combo = KeyCombo::default();
        let tokens: Vec<&str> = s.split('+').map(str::trim).collect();
        let last = tokens.len() - 1;

        for (i, token) in tokens.iter().enumerate() {
            let flag = match *token {
                "Ctrl" => &mut combo.ctrl,
                "Shift" => &mut combo.shift,
                "Alt" | "Option" => &mut combo.alt,
                "Meta" => &mut combo.meta,
                "" => return Err(invalid()),
                code if i == last => {
                    combo.code = Some(code.to_string());
                    continue;
                }
                _ => return Err(invalid()),
            };
            if *flag {
                // Same modifier twice.
                return Err(invalid());
            }
            *flag = true;
        }
        Ok(combo)
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        let modifiers = event.ctrl == self.ctrl
            && event.shift == self.shift
            && event.alt == self.alt
            && event.meta == self.meta;
        match &self.code {
            Some(code) => modifiers && event.code == *code,
            None => modifiers,
        }
    }
}

impl FromStr for KeyCombo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        KeyCombo::parse(s)
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<&str> = Vec::new();
        for (on, name) in [
            (self.ctrl, "Ctrl"),
            (self.shift, "Shift"),
            (self.alt, "Alt"),
            (self.meta, "Meta"),
        ] {
            if on {
                parts.push(name);
            }
        }
        if let Some(code) = &self.code {
            parts.push(code);
        }
        f.write_str(&parts.join("+"))
    }
}
