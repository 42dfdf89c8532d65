//! Application state management.
//!
//! All navigation and form state lives in a single [`ScreenController`].
//! Screens render from it and return actions; only the app mutates it.
//!
//! ```text
//!   Splash ──(timer)──▶ Login ──(login)──▶ Home ──(open form)──▶ Form
//!                         ▲                 │  ▲                  │
//!                         └────(logout)─────┘  └───(go home)──────┘
//! ```

pub mod controller;
pub mod screen;
pub mod splash;

pub use controller::{Credentials, ScreenController, SubmitStart};
pub use screen::ScreenState;
pub use splash::{SplashTimer, DEFAULT_SPLASH_DELAY};

use crate::error::{RequestError, ValidationError};
use crate::nutrition::{MealSuggestion, RecordId};

/// How a dialog should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// A modal message waiting to be dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub content: String,
    pub kind: DialogKind,
}

impl Dialog {
    pub fn new(title: impl Into<String>, content: impl Into<String>, kind: DialogKind) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            kind,
        }
    }

    pub fn info(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(title, content, DialogKind::Info)
    }

    /// Form rejected before anything was sent.
    pub fn validation(err: &ValidationError) -> Self {
        Self::new("Validation", err.to_string(), DialogKind::Warning)
    }

    /// Prediction stored by the service.
    pub fn saved(id: &RecordId) -> Self {
        Self::new("Saved ✅", format!("Record ID: {}", id), DialogKind::Success)
    }

    pub fn request_failed(err: &RequestError) -> Self {
        Self::new("Error", err.user_message(), DialogKind::Error)
    }

    /// One line per suggested meal.
    pub fn meal_plan(plan: &[MealSuggestion]) -> Self {
        if plan.is_empty() {
            return Self::new("Meal Plan", "No meals suggested.", DialogKind::Warning);
        }
        let content = plan
            .iter()
            .map(|meal| {
                format!(
                    "{}  {}: {:.0} kcal, {:.0} g",
                    meal.time, meal.meal_name, meal.calories, meal.mass
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        Self::new("Meal Plan", content, DialogKind::Success)
    }
}
