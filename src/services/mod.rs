//! Service layer.
//!
//! Screens never talk to the network directly. The app hands a validated
//! payload to a [`PredictionService`] and feeds the outcome back into the
//! screen controller.

pub mod http;
pub mod prediction_service;

pub use http::HttpPredictionService;
pub use prediction_service::PredictionService;
