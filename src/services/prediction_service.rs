//! The prediction service seam.

use crate::error::RequestError;
use crate::nutrition::{
    HealthStatus, HistoryEntry, MealAnalysis, MealImage, MealSuggestion, MealSuggestionRequest,
    NutritionTargets, Payload, PredictionResult,
};
use async_trait::async_trait;

/// External collaborator that turns a [`Payload`] into nutrition targets and
/// plans meals around them.
///
/// The TUI uses [`predict_and_save`](PredictionService::predict_and_save) and
/// [`suggest_meals`](PredictionService::suggest_meals); the remaining
/// operations back the command-line surface.
#[async_trait]
pub trait PredictionService: Send + Sync {
    /// Run the model and persist the prediction.
    async fn predict_and_save(&self, payload: &Payload) -> Result<PredictionResult, RequestError>;

    /// Run the model without saving anything.
    async fn predict(&self, payload: &Payload) -> Result<NutritionTargets, RequestError>;

    /// Most recent saved predictions for a user.
    async fn history(&self, user_id: &str) -> Result<Vec<HistoryEntry>, RequestError>;

    /// Liveness probe.
    async fn health(&self) -> Result<HealthStatus, RequestError>;

    /// A day of meals adding up to the requested calories.
    async fn suggest_meals(
        &self,
        request: &MealSuggestionRequest,
    ) -> Result<Vec<MealSuggestion>, RequestError>;

    /// Ingredients and nutrients recognised in a meal photo.
    async fn analyze_meal(&self, image: MealImage) -> Result<MealAnalysis, RequestError>;
}
