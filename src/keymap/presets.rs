//! Built-in keymaps.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Enter, Esc
    #[default]
    Standard,
    /// Standard plus j/k for lists
    Vim,
}

impl KeymapPreset {
    pub fn bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = common_bindings();
        if *self == KeymapPreset::Vim {
            bindings.extend([
                KeyBinding::new("k", Action::MoveUp),
                KeyBinding::new("j", Action::MoveDown),
            ]);
        }
        bindings
    }

    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
        }
    }
}

impl fmt::Display for KeymapPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeymapPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(KeymapPreset::Standard),
            "vim" => Ok(KeymapPreset::Vim),
            other => Err(format!("Unknown keymap preset: {}", other)),
        }
    }
}

fn common_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("tab", Action::NextField),
        KeyBinding::new("backtab", Action::PrevField),
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new("?", Action::Help),
        KeyBinding::new("f1", Action::Help),
        KeyBinding::new("ctrl+s", Action::Submit),
        KeyBinding::new("ctrl+g", Action::SuggestMeals),
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("delete", Action::DeleteChar),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_covers_core_actions() {
        let bindings = KeymapPreset::Standard.bindings();
        for action in [
            Action::MoveUp,
            Action::MoveDown,
            Action::Confirm,
            Action::Cancel,
            Action::Quit,
            Action::Help,
            Action::Submit,
            Action::SuggestMeals,
        ] {
            assert!(bindings.iter().any(|b| b.action == action), "{:?}", action);
        }
    }

    #[test]
    fn test_vim_adds_jk() {
        let bindings = KeymapPreset::Vim.bindings();
        assert!(bindings
            .iter()
            .any(|b| b.key == "j" && b.action == Action::MoveDown));
        assert!(bindings
            .iter()
            .any(|b| b.key == "k" && b.action == Action::MoveUp));
        assert!(!KeymapPreset::Standard
            .bindings()
            .iter()
            .any(|b| b.key == "j"));
    }

    #[test]
    fn test_preset_parsing() {
        assert_eq!("VIM".parse::<KeymapPreset>(), Ok(KeymapPreset::Vim));
        assert!("emacs".parse::<KeymapPreset>().is_err());
        let preset: KeymapPreset = serde_json::from_str("\"standard\"").unwrap();
        assert_eq!(preset, KeymapPreset::Standard);
    }
}
