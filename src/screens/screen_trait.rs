//! Screen trait and associated types.
//!
//! Screens own only view state (focus, cursors, scroll). Everything the
//! navigation rules care about lives in the [`ScreenController`]; screens read
//! it through the contexts and ask for changes by returning a
//! [`ScreenAction`].

use crate::config::Config;
use crate::nutrition::FormField;
use crate::state::ScreenController;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::path::Path;

/// Read-only resources for rendering.
pub struct RenderContext<'a> {
    pub config: &'a Config,
    pub controller: &'a ScreenController,
    /// Frames drawn so far; drives spinners.
    pub frame_count: u64,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, controller: &'a ScreenController, frame_count: u64) -> Self {
        Self {
            config,
            controller,
            frame_count,
        }
    }

    /// Braille spinner glyph for the current frame.
    pub fn spinner(&self) -> &'static str {
        const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
        FRAMES[(self.frame_count % FRAMES.len() as u64) as usize]
    }
}

/// Read-only resources for event handling.
pub struct ScreenContext<'a> {
    pub config: &'a Config,
    pub config_path: &'a Path,
    pub controller: &'a ScreenController,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config, config_path: &'a Path, controller: &'a ScreenController) -> Self {
        Self {
            config,
            config_path,
            controller,
        }
    }
}

/// What a screen wants to happen after an event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScreenAction {
    #[default]
    None,
    SetUsername(String),
    SetPassword(String),
    Login,
    Logout,
    OpenForm,
    GoHome,
    UpdateField(FormField, String),
    /// Validate and send the prediction form.
    Submit,
    /// Ask for a meal plan matching the current result.
    SuggestMeals,
    ShowMessage {
        title: String,
        content: String,
    },
    ShowHelp,
    Quit,
}

/// A full-screen view.
pub trait Screen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// While true, printable keys are typed rather than mapped to actions.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Called when the screen becomes active. Pull controller state into the
    /// view here.
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }

    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}
