//! The active view.

/// One of the four views of the application.
///
/// Only one is active at a time. Transitions happen through explicit user
/// actions on the [`ScreenController`](super::ScreenController) or the timed
/// auto-transition out of [`ScreenState::Splash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenState {
    /// Branding shown at start-up.
    #[default]
    Splash,
    /// Credential entry.
    Login,
    /// Dashboard with quick actions.
    Home,
    /// Prediction form and result.
    Form,
}

impl ScreenState {
    /// Subtitle shown under the brand name in the header.
    pub fn subtitle(&self) -> &'static str {
        match self {
            ScreenState::Splash => "Intelligent Nutrition & Wellness Assistant",
            ScreenState::Login => "Secure Sign In",
            ScreenState::Home => "Your Health Dashboard",
            ScreenState::Form => "Nutrition Prediction",
        }
    }
}
