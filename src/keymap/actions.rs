//! Semantic actions triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// Everything a key can ask the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Cursor to start of input
    Home,
    /// Cursor to end of input
    End,

    // Fields
    NextField,
    PrevField,

    // Selection
    Confirm,
    Cancel,

    // Global
    Quit,
    Help,

    /// Submit the prediction form from any field
    Submit,
    /// Plan meals around the predicted daily calories
    SuggestMeals,

    // Text editing
    Backspace,
    DeleteChar,
}

impl Action {
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Cursor left",
            Action::MoveRight => "Cursor right",
            Action::Home => "Start of input",
            Action::End => "End of input",
            Action::NextField => "Next field",
            Action::PrevField => "Previous field",
            Action::Confirm => "Confirm",
            Action::Cancel => "Cancel / Go back",
            Action::Quit => "Quit",
            Action::Help => "Show help",
            Action::Submit => "Predict & Save",
            Action::SuggestMeals => "Suggest meals",
            Action::Backspace => "Backspace",
            Action::DeleteChar => "Delete character",
        }
    }

    /// Group heading in the help overlay.
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp | Action::MoveDown | Action::NextField | Action::PrevField => {
                "Navigation"
            }
            Action::Confirm | Action::Cancel | Action::Submit | Action::SuggestMeals => "Actions",
            Action::Quit | Action::Help => "Global",
            Action::MoveLeft
            | Action::MoveRight
            | Action::Home
            | Action::End
            | Action::Backspace
            | Action::DeleteChar => "Text Editing",
        }
    }
}
