//! Screen controller: the state machine behind the four views.
//!
//! The controller is pure state. It never performs I/O: submitting the form
//! yields a [`Payload`] for the caller to send, and the caller reports the
//! outcome back through [`ScreenController::finish_submit`].

use super::splash::SplashTimer;
use super::{Dialog, ScreenState};
use crate::error::{RequestError, ValidationError};
use crate::nutrition::{FormField, FormFields, Payload, PredictionResult};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Username accepted by the demo login.
pub const DEMO_USERNAME: &str = "demo";
/// Password accepted by the demo login.
pub const DEMO_PASSWORD: &str = "1234";
/// Error shown after a rejected login.
pub const LOGIN_ERROR: &str = "Invalid username or password (Try demo / 1234)";

/// Login form contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: DEMO_USERNAME.to_string(),
            password: DEMO_PASSWORD.to_string(),
        }
    }
}

impl Credentials {
    /// Username trimmed, password compared exactly.
    pub fn is_valid(&self) -> bool {
        self.username.trim() == DEMO_USERNAME && self.password == DEMO_PASSWORD
    }
}

/// What happened when the user asked to submit the form.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStart {
    /// Validation passed; send this payload. The loading flag is now set.
    Ready(Payload),
    /// A request is already in flight; nothing changed.
    Busy,
    /// A rule failed; nothing was sent.
    Invalid(ValidationError),
    /// The form is not the active screen; nothing changed.
    Inactive,
}

/// Owns the active screen, login inputs, form values and last result.
#[derive(Debug, Clone)]
pub struct ScreenController {
    screen: ScreenState,
    splash: SplashTimer,
    credentials: Credentials,
    login_error: Option<String>,
    form: FormFields,
    result: Option<PredictionResult>,
    loading: bool,
}

impl ScreenController {
    /// Start on the splash screen with its timer armed.
    pub fn new(now: Instant, splash_delay: Duration) -> Self {
        Self {
            screen: ScreenState::Splash,
            splash: SplashTimer::start(now, splash_delay),
            credentials: Credentials::default(),
            login_error: None,
            form: FormFields::default(),
            result: None,
            loading: false,
        }
    }

    pub fn screen(&self) -> ScreenState {
        self.screen
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Time left on the splash screen, if the timer is still armed.
    pub fn splash_remaining(&self, now: Instant) -> Option<Duration> {
        self.splash.remaining(now)
    }

    /// Advance time. Moves Splash to Login once the delay has elapsed.
    ///
    /// Returns `true` if the screen changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.splash.fire(now) && self.screen == ScreenState::Splash {
            info!("Splash finished, showing login");
            self.screen = ScreenState::Login;
            return true;
        }
        false
    }

    /// Disarm the splash timer, e.g. when the app shuts down first.
    pub fn cancel_splash(&mut self) {
        self.splash.cancel();
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.credentials.username = username.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.credentials.password = password.into();
    }

    /// Check the credentials. On success moves to Home, otherwise records the
    /// login error and stays on Login.
    pub fn login(&mut self) -> bool {
        if self.screen != ScreenState::Login {
            return false;
        }
        self.login_error = None;
        if self.credentials.is_valid() {
            info!("Login succeeded");
            self.screen = ScreenState::Home;
            true
        } else {
            warn!("Login rejected for user {:?}", self.credentials.username);
            self.login_error = Some(LOGIN_ERROR.to_string());
            false
        }
    }

    /// Leave the dashboard and restore the login defaults.
    pub fn logout(&mut self) {
        if self.screen != ScreenState::Home {
            return;
        }
        info!("Logged out");
        self.screen = ScreenState::Login;
        self.login_error = None;
        self.credentials = Credentials::default();
    }

    /// Home → Form, dropping any stale result.
    pub fn open_form(&mut self) {
        if self.screen != ScreenState::Home {
            return;
        }
        self.result = None;
        self.screen = ScreenState::Form;
    }

    /// Form → Home. Nothing is submitted.
    pub fn go_home(&mut self) {
        if self.screen == ScreenState::Form {
            self.screen = ScreenState::Home;
        }
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.update(field, value);
    }

    /// Validate the form and, if it passes, raise the loading flag and hand
    /// back the payload to send.
    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.screen != ScreenState::Form {
            return SubmitStart::Inactive;
        }
        if self.loading {
            return SubmitStart::Busy;
        }
        match Payload::from_form(&self.form) {
            Ok(payload) => {
                self.loading = true;
                SubmitStart::Ready(payload)
            }
            Err(err) => {
                info!("Form rejected: {}", err);
                SubmitStart::Invalid(err)
            }
        }
    }

    /// Record the outcome of the request started by
    /// [`begin_submit`](Self::begin_submit) and return the dialog to show.
    pub fn finish_submit(&mut self, outcome: Result<PredictionResult, RequestError>) -> Dialog {
        self.loading = false;
        match outcome {
            Ok(result) => {
                info!("Prediction saved with id {}", result.saved_id);
                let dialog = Dialog::saved(&result.saved_id);
                self.result = Some(result);
                dialog
            }
            Err(err) => {
                warn!("Prediction failed: {}", err);
                Dialog::request_failed(&err)
            }
        }
    }
}
