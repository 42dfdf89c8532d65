//! Keyboard shortcuts: a preset keymap plus user overrides.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    #[serde(default)]
    pub preset: KeymapPreset,

    /// Checked before the preset. Overriding an action hides every preset
    /// binding for that action.
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    pub fn new(preset: KeymapPreset) -> Self {
        Self {
            preset,
            overrides: Vec::new(),
        }
    }

    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Resolve a key while a text field has focus.
    ///
    /// Printable characters without Ctrl/Alt are text, so they never resolve
    /// to an action even if a binding exists for them.
    pub fn get_action_while_typing(
        &self,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Option<Action> {
        if is_text_key(code, modifiers) {
            return None;
        }
        self.get_action(code, modifiers)
    }

    /// Overrides followed by the preset bindings they do not shadow.
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|preset| !self.overrides.iter().any(|o| o.action == preset.action)),
        );
        bindings
    }

    /// Display string of the first key bound to `action`.
    pub fn key_display(&self, action: Action) -> String {
        self.all_bindings()
            .into_iter()
            .find(|b| b.action == action)
            .map(|b| b.display())
            .unwrap_or_else(|| "unbound".to_string())
    }

    /// Override keys that do not parse. Reported once at startup.
    pub fn invalid_overrides(&self) -> Vec<&KeyBinding> {
        self.overrides.iter().filter(|b| b.parse().is_err()).collect()
    }
}

/// True for keys that insert a character into a text field.
pub fn is_text_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    matches!(code, KeyCode::Char(_))
        && !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
