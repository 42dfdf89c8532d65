//! Screens of the application.
//!
//! Each screen implements [`Screen`]: it owns its view state, renders itself
//! and turns key events into a [`ScreenAction`] for the app to apply.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                     App                       │
//! │   match controller.screen() {                 │
//! │     Splash => splash.handle_event(...)        │
//! │     Login  => login.handle_event(...)         │
//! │     Home   => home.handle_event(...)          │
//! │     Form   => form.handle_event(...)          │
//! │   }                                           │
//! │        │ ScreenAction                         │
//! │        ▼                                      │
//! │   ScreenController (transition rules)         │
//! └──────────────────────────────────────────────┘
//! ```

pub mod form;
pub mod home;
pub mod login;
pub mod screen_trait;
pub mod splash;

pub use form::FormScreen;
pub use home::HomeScreen;
pub use login::LoginScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
pub use splash::SplashScreen;
