//! Error kinds surfaced to the user by the prediction flow.

use crate::nutrition::FormField;
use thiserror::Error;

/// Fallback shown when the prediction service gives no usable message.
pub const GENERIC_REQUEST_FAILURE: &str = "Request failed";

/// A form or meal request rule violation. Blocks submission; the network is
/// never contacted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Age must be between 10 and 90")]
    AgeOutOfRange,
    #[error("Height must be between 120 and 220 cm")]
    HeightOutOfRange,
    #[error("Weight must be between 30 and 200 kg")]
    WeightOutOfRange,
    #[error("Goal must be \"Maintain\", \"Lose\", or \"Gain\"")]
    InvalidGoal,
    #[error("Steps must be 0–30000")]
    StepsOutOfRange,
    #[error("Active minutes must be 0–300")]
    ActiveMinutesOutOfRange,
    #[error("{} must be a number", .0.label())]
    NotANumber(FormField),
    #[error("Total calories must be greater than 0")]
    CaloriesNotPositive,
    #[error("Meals per day must be between 1 and 10")]
    MealsPerDayOutOfRange,
    #[error("Calorie ratios must be between 0 and 1")]
    RatioOutOfRange,
    #[error("Expected {expected} calorie ratios, one per meal, got {got}")]
    RatioCountMismatch { expected: u8, got: usize },
}

/// Failure of a call to the prediction service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The service answered with a non-success status.
    #[error("prediction service returned {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },
    /// The request never produced a response.
    #[error("could not reach prediction service: {0}")]
    Transport(String),
    /// The response body did not match the expected shape.
    #[error("unexpected response from prediction service: {0}")]
    Decode(String),
}

impl RequestError {
    /// Message suitable for an error dialog.
    ///
    /// Prefers the service's own `detail`, falling back to a generic text.
    pub fn user_message(&self) -> String {
        match self {
            RequestError::Status {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            RequestError::Status { status, .. } => {
                format!("{} (HTTP {})", GENERIC_REQUEST_FAILURE, status)
            }
            RequestError::Transport(msg) | RequestError::Decode(msg) if !msg.trim().is_empty() => {
                msg.clone()
            }
            _ => GENERIC_REQUEST_FAILURE.to_string(),
        }
    }
}
