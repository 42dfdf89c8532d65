//! Meal plans and meal photo analysis.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Meals per day used when the caller does not pick a number.
pub const DEFAULT_MEALS_PER_DAY: u8 = 3;
/// Upper bound accepted by the meal planner.
pub const MAX_MEALS_PER_DAY: u8 = 10;

/// Body of `POST /api/suggest-meals`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealSuggestionRequest {
    pub total_calories: f64,
    pub meals_per_day: u8,
    /// Share of the daily calories per meal, one entry per meal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calorie_distribution_ratios: Option<Vec<f64>>,
    /// Keys `protein`, `carbs` and `fat`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_macro_ratios: Option<BTreeMap<String, f64>>,
}

impl MealSuggestionRequest {
    pub fn new(total_calories: f64, meals_per_day: u8) -> Self {
        Self {
            total_calories,
            meals_per_day,
            calorie_distribution_ratios: None,
            target_macro_ratios: None,
        }
    }

    /// Per-meal calorie shares. An empty list means "let the planner decide".
    pub fn with_ratios(mut self, ratios: Vec<f64>) -> Self {
        self.calorie_distribution_ratios = (!ratios.is_empty()).then_some(ratios);
        self
    }

    /// Same limits the planner enforces, checked before anything is sent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.total_calories.is_finite() && self.total_calories > 0.0) {
            return Err(ValidationError::CaloriesNotPositive);
        }
        if !(1..=MAX_MEALS_PER_DAY).contains(&self.meals_per_day) {
            return Err(ValidationError::MealsPerDayOutOfRange);
        }
        if let Some(ratios) = &self.calorie_distribution_ratios {
            if ratios.iter().any(|r| !(*r > 0.0 && *r <= 1.0)) {
                return Err(ValidationError::RatioOutOfRange);
            }
            if ratios.len() != usize::from(self.meals_per_day) {
                return Err(ValidationError::RatioCountMismatch {
                    expected: self.meals_per_day,
                    got: ratios.len(),
                });
            }
        }
        Ok(())
    }
}

/// A nutrient total of a suggested meal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MealNutrient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

/// One meal of a suggested plan.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MealSuggestion {
    pub meal_name: String,
    pub calories: f64,
    pub time: String,
    pub description: String,
    /// `data:image/jpeg;base64,...` or empty
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub nutrients: Vec<MealNutrient>,
    /// Grams
    pub mass: f64,
}

/// An ingredient recognised in a meal photo.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetectedIngredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    /// Model confidence, 0-100
    pub possibility: f64,
}

/// A nutrient estimate per 100 g, with its share of a daily reference value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalyzedNutrient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub percentage: f64,
}

/// Response of `POST /api/analyze-meal`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MealAnalysis {
    pub ingredients: Vec<DetectedIngredient>,
    pub nutrients: Vec<AnalyzedNutrient>,
    pub calories_per_100g: f64,
}

/// A photo to upload for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl MealImage {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// MIME type guessed from the file extension.
    pub fn mime(&self) -> &'static str {
        let ext = Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("jpg" | "jpeg") => "image/jpeg",
            Some("png") => "image/png",
            Some("webp") => "image/webp",
            Some("gif") => "image/gif",
            Some("bmp") => "image/bmp",
            _ => "application/octet-stream",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_json_omits_unset_ratios() {
        let json = serde_json::to_value(MealSuggestionRequest::new(2100.0, 3)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"total_calories": 2100.0, "meals_per_day": 3})
        );

        let json =
            serde_json::to_value(MealSuggestionRequest::new(1800.0, 2).with_ratios(vec![0.4, 0.6]))
                .unwrap();
        assert_eq!(
            json["calorie_distribution_ratios"],
            serde_json::json!([0.4, 0.6])
        );
    }

    #[test]
    fn test_request_limits() {
        assert_eq!(MealSuggestionRequest::new(2000.0, 3).validate(), Ok(()));
        assert_eq!(
            MealSuggestionRequest::new(0.0, 3).validate(),
            Err(ValidationError::CaloriesNotPositive)
        );
        assert_eq!(
            MealSuggestionRequest::new(f64::NAN, 3).validate(),
            Err(ValidationError::CaloriesNotPositive)
        );
        assert_eq!(
            MealSuggestionRequest::new(2000.0, 0).validate(),
            Err(ValidationError::MealsPerDayOutOfRange)
        );
        assert_eq!(
            MealSuggestionRequest::new(2000.0, 11).validate(),
            Err(ValidationError::MealsPerDayOutOfRange)
        );
        assert_eq!(
            MealSuggestionRequest::new(2000.0, 3)
                .with_ratios(vec![0.5, 0.5])
                .validate(),
            Err(ValidationError::RatioCountMismatch {
                expected: 3,
                got: 2
            })
        );
        assert_eq!(
            MealSuggestionRequest::new(2000.0, 2)
                .with_ratios(vec![0.0, 1.0])
                .validate(),
            Err(ValidationError::RatioOutOfRange)
        );
    }

    #[test]
    fn test_decode_suggestion_without_image() {
        let body = r#"[{
            "meal_name": "Breakfast", "calories": 630.5, "time": "08:00 AM",
            "description": "Ingredients oats, milk", "ingredients": ["oats", "milk"],
            "nutrients": [{"name": "Protein", "amount": 21.3, "unit": "g"}],
            "mass": 310
        }]"#;
        let plan: Vec<MealSuggestion> = serde_json::from_str(body).unwrap();
        assert_eq!(plan[0].meal_name, "Breakfast");
        assert_eq!(plan[0].image, "");
        assert_eq!(plan[0].nutrients[0].amount, 21.3);
        assert_eq!(plan[0].mass, 310.0);
    }

    #[test]
    fn test_image_mime_from_extension() {
        assert_eq!(MealImage::new("lunch.JPG", Vec::new()).mime(), "image/jpeg");
        assert_eq!(MealImage::new("plate.png", Vec::new()).mime(), "image/png");
        assert_eq!(
            MealImage::new("notes.txt", Vec::new()).mime(),
            "application/octet-stream"
        );
        assert_eq!(
            MealImage::new("noext", Vec::new()).mime(),
            "application/octet-stream"
        );
    }
}
