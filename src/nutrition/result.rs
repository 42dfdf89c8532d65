//! Responses returned by the prediction service.

use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;
use std::fmt;

/// Daily nutrition targets computed by the model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NutritionTargets {
    pub daily_kcal_need: f64,
    pub protein_g_per_day: f64,
    pub carbs_g_per_day: f64,
    pub fat_g_per_day: f64,
}

/// Identifier the service assigned to a saved prediction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// Result of `predict-and-save`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResult {
    #[serde(flatten)]
    pub targets: NutritionTargets,
    pub saved_id: RecordId,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// One row of `history/{user_id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryEntry {
    pub id: RecordId,
    pub user_id: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub targets: NutritionTargets,
}

impl HistoryEntry {
    /// `created_at` rendered as `YYYY-MM-DD HH:MM`, or the raw text when it
    /// is not a timestamp we recognise.
    pub fn created_display(&self) -> String {
        let Some(raw) = self.created_at.as_deref() else {
            return "-".to_string();
        };
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return ts.format("%Y-%m-%d %H:%M").to_string();
        }
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return ts.format("%Y-%m-%d %H:%M").to_string();
        }
        raw.to_string()
    }
}

/// Body of the service health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_prediction_result() {
        let body = r#"{
            "saved_id": 42,
            "user_id": "user_000042",
            "daily_kcal_need": 2150,
            "protein_g_per_day": 98.4,
            "carbs_g_per_day": 260.1,
            "fat_g_per_day": 71.0
        }"#;
        let result: PredictionResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.saved_id, RecordId::Number(42));
        assert_eq!(result.saved_id.to_string(), "42");
        assert_eq!(result.targets.daily_kcal_need, 2150.0);
        assert_eq!(result.targets.fat_g_per_day, 71.0);
        assert_eq!(result.user_id.as_deref(), Some("user_000042"));
    }

    #[test]
    fn test_missing_saved_id_is_rejected() {
        let body = r#"{"daily_kcal_need": 2000, "protein_g_per_day": 1,
            "carbs_g_per_day": 1, "fat_g_per_day": 1}"#;
        assert!(serde_json::from_str::<PredictionResult>(body).is_err());
    }

    #[test]
    fn test_history_timestamp_display() {
        let body = r#"[{
            "id": "a1", "user_id": "user_000001",
            "created_at": "2025-03-04T09:15:30.123456",
            "daily_kcal_need": 1900, "protein_g_per_day": 80.0,
            "carbs_g_per_day": 230.5, "fat_g_per_day": 60.2
        }]"#;
        let rows: Vec<HistoryEntry> = serde_json::from_str(body).unwrap();
        assert_eq!(rows[0].id.to_string(), "a1");
        assert_eq!(rows[0].created_display(), "2025-03-04 09:15");
    }
}
