//! Nutrition prediction domain: form inputs, validation, request payload,
//! service responses and meal planning.

pub mod form;
pub mod meal;
pub mod payload;
pub mod result;
pub mod validation;

pub use form::{FormField, FormFields, FormSection, SECTIONS};
pub use meal::{
    AnalyzedNutrient, DetectedIngredient, MealAnalysis, MealImage, MealNutrient, MealSuggestion,
    MealSuggestionRequest, DEFAULT_MEALS_PER_DAY,
};
pub use payload::{Numeric, Payload};
pub use result::{HealthStatus, HistoryEntry, NutritionTargets, PredictionResult, RecordId};
pub use validation::{parse_number, validate, GOALS};
