//! Shared test utilities for workflow integration tests.
//!
//! Provides `FakePredictionService`, an in-memory [`PredictionService`] that
//! records every payload it receives and answers from a script, and `TestEnv`,
//! an isolated config directory with automatic cleanup via `TempDir`.

#![allow(dead_code)]

use async_trait::async_trait;
use fitnourish::nutrition::{
    HealthStatus, HistoryEntry, MealAnalysis, MealImage, MealNutrient, MealSuggestion,
    MealSuggestionRequest, NutritionTargets, Payload, PredictionResult, RecordId,
};
use fitnourish::{Config, PredictionService, RequestError};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::sync::Semaphore;

/// Scripted stand-in for the prediction service.
///
/// Answers are taken from the front of the script; once it is empty every
/// call succeeds with [`sample_result`]. When gated, each call waits for a
/// [`release`](Self::release) before answering.
pub struct FakePredictionService {
    calls: Mutex<Vec<Payload>>,
    meal_requests: Mutex<Vec<MealSuggestionRequest>>,
    script: Mutex<VecDeque<Result<PredictionResult, RequestError>>>,
    gate: Option<Semaphore>,
}

impl FakePredictionService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            meal_requests: Mutex::new(Vec::new()),
            script: Mutex::new(VecDeque::new()),
            gate: None,
        })
    }

    pub fn with_script(script: Vec<Result<PredictionResult, RequestError>>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            meal_requests: Mutex::new(Vec::new()),
            script: Mutex::new(script.into()),
            gate: None,
        })
    }

    /// Calls block until released.
    pub fn gated() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            meal_requests: Mutex::new(Vec::new()),
            script: Mutex::new(VecDeque::new()),
            gate: Some(Semaphore::new(0)),
        })
    }

    /// Let one blocked call answer.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub fn calls(&self) -> Vec<Payload> {
        self.calls.lock().unwrap().clone()
    }

    pub fn meal_requests(&self) -> Vec<MealSuggestionRequest> {
        self.meal_requests.lock().unwrap().clone()
    }

    async fn answer(&self, payload: &Payload) -> Result<PredictionResult, RequestError> {
        self.calls.lock().unwrap().push(payload.clone());
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
        let scripted = self.script.lock().unwrap().pop_front();
        scripted.unwrap_or_else(|| Ok(sample_result(1, 2000.0)))
    }
}

#[async_trait]
impl PredictionService for FakePredictionService {
    async fn predict_and_save(&self, payload: &Payload) -> Result<PredictionResult, RequestError> {
        self.answer(payload).await
    }

    async fn predict(&self, payload: &Payload) -> Result<NutritionTargets, RequestError> {
        self.answer(payload).await.map(|r| r.targets)
    }

    async fn history(&self, _user_id: &str) -> Result<Vec<HistoryEntry>, RequestError> {
        Ok(Vec::new())
    }

    async fn health(&self) -> Result<HealthStatus, RequestError> {
        Ok(HealthStatus {
            status: "ok".to_string(),
            message: None,
        })
    }

    async fn suggest_meals(
        &self,
        request: &MealSuggestionRequest,
    ) -> Result<Vec<MealSuggestion>, RequestError> {
        self.meal_requests.lock().unwrap().push(request.clone());
        Ok(sample_plan(request.total_calories))
    }

    async fn analyze_meal(&self, _image: MealImage) -> Result<MealAnalysis, RequestError> {
        Err(RequestError::Status {
            status: 503,
            detail: Some("ML model not available".to_string()),
        })
    }
}

/// Breakfast and dinner splitting `kcal` 40/60.
pub fn sample_plan(kcal: f64) -> Vec<MealSuggestion> {
    let meal = |name: &str, time: &str, share: f64| MealSuggestion {
        meal_name: name.to_string(),
        calories: (kcal * share).round(),
        time: time.to_string(),
        description: format!("{} plate", name),
        image: String::new(),
        ingredients: vec!["rice".to_string()],
        nutrients: vec![MealNutrient {
            name: "Protein".to_string(),
            amount: 30.0,
            unit: "g".to_string(),
        }],
        mass: 400.0,
    };
    vec![
        meal("Breakfast", "09:00 AM", 0.4),
        meal("Dinner", "07:00 PM", 0.6),
    ]
}

pub fn sample_result(id: i64, kcal: f64) -> PredictionResult {
    PredictionResult {
        targets: NutritionTargets {
            daily_kcal_need: kcal,
            protein_g_per_day: 120.0,
            carbs_g_per_day: 250.0,
            fat_g_per_day: 65.0,
        },
        saved_id: RecordId::Number(id),
        user_id: Some("demo".to_string()),
    }
}

/// An isolated config location.
pub struct TestEnv {
    _temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("fitnourish").join("config.toml");
        Self {
            _temp_dir: temp_dir,
            config_path,
        }
    }

    /// Defaults with the splash timer already expired.
    pub fn config(&self) -> Config {
        Config {
            splash_delay_ms: 0,
            ..Config::default()
        }
    }
}
