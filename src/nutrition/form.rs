//! Form fields collected on the prediction screen.
//!
//! Every field is kept as the raw string the user typed. Conversion to
//! numbers happens only when the form is validated and mapped to a
//! [`Payload`](super::Payload).

use std::fmt;
use std::str::FromStr;

/// One of the thirteen inputs sent to the prediction service.
///
/// The declaration order is the display order and the payload order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Age,
    Gender,
    HeightCm,
    WeightKg,
    Goal,
    HasDiabetes,
    HasHypertension,
    StepsPerDay,
    ActiveMinutes,
    CaloriesBurnedActive,
    RestingHeartRate,
    AvgHeartRate,
    StressScore,
}

impl FormField {
    /// All fields in display order.
    pub const ALL: [FormField; 13] = [
        FormField::Age,
        FormField::Gender,
        FormField::HeightCm,
        FormField::WeightKg,
        FormField::Goal,
        FormField::HasDiabetes,
        FormField::HasHypertension,
        FormField::StepsPerDay,
        FormField::ActiveMinutes,
        FormField::CaloriesBurnedActive,
        FormField::RestingHeartRate,
        FormField::AvgHeartRate,
        FormField::StressScore,
    ];

    /// Wire name used by the prediction service.
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Age => "age",
            FormField::Gender => "gender",
            FormField::HeightCm => "height_cm",
            FormField::WeightKg => "weight_kg",
            FormField::Goal => "goal",
            FormField::HasDiabetes => "has_diabetes",
            FormField::HasHypertension => "has_hypertension",
            FormField::StepsPerDay => "steps_per_day",
            FormField::ActiveMinutes => "active_minutes",
            FormField::CaloriesBurnedActive => "calories_burned_active",
            FormField::RestingHeartRate => "resting_heart_rate",
            FormField::AvgHeartRate => "avg_heart_rate",
            FormField::StressScore => "stress_score",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Age => "Age",
            FormField::Gender => "Gender",
            FormField::HeightCm => "Height (cm)",
            FormField::WeightKg => "Weight (kg)",
            FormField::Goal => "Goal (Maintain/Lose/Gain)",
            FormField::HasDiabetes => "Diabetes (0/1)",
            FormField::HasHypertension => "Hypertension (0/1)",
            FormField::StepsPerDay => "Steps per day",
            FormField::ActiveMinutes => "Active minutes",
            FormField::CaloriesBurnedActive => "Active calories",
            FormField::RestingHeartRate => "Resting heart rate",
            FormField::AvgHeartRate => "Average heart rate",
            FormField::StressScore => "Stress score",
        }
    }

    /// Placeholder shown while the field is empty.
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Age => "e.g., 25",
            FormField::Gender => "Female / Male",
            FormField::HeightCm => "e.g., 160",
            FormField::WeightKg => "e.g., 60",
            FormField::Goal => "Maintain / Lose / Gain",
            FormField::HasDiabetes | FormField::HasHypertension => "0 or 1",
            FormField::StepsPerDay => "e.g., 7500",
            FormField::ActiveMinutes => "e.g., 60",
            FormField::CaloriesBurnedActive => "e.g., 400",
            FormField::RestingHeartRate => "e.g., 72",
            FormField::AvgHeartRate => "e.g., 92",
            FormField::StressScore => "e.g., 55",
        }
    }

    /// Helper line rendered under the input, if any.
    pub fn helper(&self) -> Option<&'static str> {
        match self {
            FormField::Goal => Some("Use: Maintain / Lose / Gain"),
            FormField::HasDiabetes | FormField::HasHypertension => Some("0 = No, 1 = Yes"),
            FormField::StressScore => Some("0–100 (higher = more stress)"),
            FormField::StepsPerDay => Some("Steps must be 0–30000"),
            _ => None,
        }
    }

    /// Value the form starts with.
    pub fn default_value(&self) -> &'static str {
        match self {
            FormField::Age => "25",
            FormField::Gender => "Female",
            FormField::HeightCm => "160",
            FormField::WeightKg => "60",
            FormField::Goal => "Maintain",
            FormField::HasDiabetes | FormField::HasHypertension => "1",
            FormField::StepsPerDay => "7500",
            FormField::ActiveMinutes => "60",
            FormField::CaloriesBurnedActive => "400",
            FormField::RestingHeartRate => "72",
            FormField::AvgHeartRate => "92",
            FormField::StressScore => "55",
        }
    }

    /// Whether the payload carries this field as a number.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, FormField::Gender | FormField::Goal)
    }

    /// Position in [`FormField::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next field, wrapping around.
    pub fn next(self) -> FormField {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field, wrapping around.
    pub fn prev(self) -> FormField {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .iter()
            .copied()
            .find(|f| f.key() == s.trim())
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}

/// A titled group of fields on the form screen.
#[derive(Debug, Clone, Copy)]
pub struct FormSection {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub fields: &'static [FormField],
}

/// Display grouping of the form.
pub const SECTIONS: [FormSection; 4] = [
    FormSection {
        title: "Profile",
        subtitle: "Basic details for calorie estimation",
        fields: &[
            FormField::Age,
            FormField::Gender,
            FormField::HeightCm,
            FormField::WeightKg,
            FormField::Goal,
        ],
    },
    FormSection {
        title: "Health Conditions",
        subtitle: "Multi-disease aware planning",
        fields: &[FormField::HasDiabetes, FormField::HasHypertension],
    },
    FormSection {
        title: "Daily Activity",
        subtitle: "Phone-based activity signals",
        fields: &[
            FormField::StepsPerDay,
            FormField::ActiveMinutes,
            FormField::CaloriesBurnedActive,
        ],
    },
    FormSection {
        title: "Smartwatch Snapshot",
        subtitle: "Heart rate + stress indicators",
        fields: &[
            FormField::RestingHeartRate,
            FormField::AvgHeartRate,
            FormField::StressScore,
        ],
    },
];

/// Raw string values for every [`FormField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    values: [String; 13],
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            values: FormField::ALL.map(|f| f.default_value().to_string()),
        }
    }
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field.
    pub fn get(&self, field: FormField) -> &str {
        &self.values[field.index()]
    }

    /// Replace the value of a single field.
    pub fn update(&mut self, field: FormField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Iterate `(field, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        FormField::ALL
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }
}
