//! Request body sent to the prediction service.

use super::form::{FormField, FormFields};
use super::validation::{parse_number, validate};
use crate::error::ValidationError;
use serde::{Serialize, Serializer};

/// A number that serializes as a JSON integer when it has no fraction.
///
/// The service declares some fields as integers, so `25` must go out as
/// `25`, not `25.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Numeric(pub f64);

impl Serialize for Numeric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let n = self.0;
        if n.fract() == 0.0 && n.abs() < 9.0e15 {
            serializer.serialize_i64(n as i64)
        } else {
            serializer.serialize_f64(n)
        }
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// The record submitted to `predict-and-save`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payload {
    pub age: Numeric,
    pub gender: String,
    pub height_cm: Numeric,
    pub weight_kg: Numeric,
    pub goal: String,
    pub has_diabetes: Numeric,
    pub has_hypertension: Numeric,
    pub steps_per_day: Numeric,
    pub active_minutes: Numeric,
    pub calories_burned_active: Numeric,
    pub resting_heart_rate: Numeric,
    pub avg_heart_rate: Numeric,
    pub stress_score: Numeric,
}

impl Payload {
    /// Validate the form and map it to a payload.
    pub fn from_form(form: &FormFields) -> Result<Self, ValidationError> {
        validate(form)?;

        let num = |field: FormField| {
            parse_number(form.get(field))
                .map(Numeric)
                .ok_or(ValidationError::NotANumber(field))
        };

        Ok(Self {
            age: num(FormField::Age)?,
            gender: form.get(FormField::Gender).to_string(),
            height_cm: num(FormField::HeightCm)?,
            weight_kg: num(FormField::WeightKg)?,
            goal: form.get(FormField::Goal).to_string(),
            has_diabetes: num(FormField::HasDiabetes)?,
            has_hypertension: num(FormField::HasHypertension)?,
            steps_per_day: num(FormField::StepsPerDay)?,
            active_minutes: num(FormField::ActiveMinutes)?,
            calories_burned_active: num(FormField::CaloriesBurnedActive)?,
            resting_heart_rate: num(FormField::RestingHeartRate)?,
            avg_heart_rate: num(FormField::AvgHeartRate)?,
            stress_score: num(FormField::StressScore)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_form_maps_to_numbers() {
        let payload = Payload::from_form(&FormFields::default()).unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "age": 25,
                "gender": "Female",
                "height_cm": 160,
                "weight_kg": 60,
                "goal": "Maintain",
                "has_diabetes": 1,
                "has_hypertension": 1,
                "steps_per_day": 7500,
                "active_minutes": 60,
                "calories_burned_active": 400,
                "resting_heart_rate": 72,
                "avg_heart_rate": 92,
                "stress_score": 55
            })
        );
    }

    #[test]
    fn test_fractional_values_stay_floats() {
        let mut form = FormFields::default();
        form.update(FormField::WeightKg, " 61.5 ");
        let payload = Payload::from_form(&form).unwrap();
        assert_eq!(payload.weight_kg, Numeric(61.5));
        assert_eq!(serde_json::to_string(&payload.weight_kg).unwrap(), "61.5");
    }

    #[test]
    fn test_strings_pass_through_untrimmed() {
        let mut form = FormFields::default();
        form.update(FormField::Gender, "Male ");
        let payload = Payload::from_form(&form).unwrap();
        assert_eq!(payload.gender, "Male ");
    }

    #[test]
    fn test_invalid_form_yields_no_payload() {
        let mut form = FormFields::default();
        form.update(FormField::Age, "5");
        assert_eq!(
            Payload::from_form(&form),
            Err(ValidationError::AgeOutOfRange)
        );
    }
}
