//! FitNourish - a terminal client for the FitNourish nutrition prediction
//! service.
//!
//! This library provides the screen flow (splash, login, home, prediction
//! form), form validation and the client for the prediction service.

// Core modules
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod keymap;
pub mod nutrition;
pub mod screens;
pub mod services;
pub mod state;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use config::Config;
pub use error::{RequestError, ValidationError};
pub use nutrition::{FormField, FormFields, Payload, PredictionResult};
pub use services::{HttpPredictionService, PredictionService};
pub use state::{ScreenController, ScreenState};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
