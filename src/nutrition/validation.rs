//! Form validation rules.

use super::form::{FormField, FormFields};
use crate::error::ValidationError;

/// Accepted values of the goal field. Matched exactly.
pub const GOALS: [&str; 3] = ["Maintain", "Lose", "Gain"];

/// Read a form value as a number.
///
/// Surrounding whitespace is ignored and an empty value reads as `0`.
/// Returns `None` for anything that is not a finite decimal number.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    // Rust also accepts "inf"/"nan"; those are not numbers here.
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Required number inside `[min, max]`. Zero counts as missing.
fn required_in_range(raw: &str, min: f64, max: f64) -> bool {
    matches!(parse_number(raw), Some(n) if n != 0.0 && (min..=max).contains(&n))
}

/// Optional number inside `[min, max]`. Non-numeric text fails the range
/// check; it must never pass as "unknown".
fn in_range(raw: &str, min: f64, max: f64) -> bool {
    matches!(parse_number(raw), Some(n) if (min..=max).contains(&n))
}

/// Check the form, reporting the first violated rule.
pub fn validate(form: &FormFields) -> Result<(), ValidationError> {
    if !required_in_range(form.get(FormField::Age), 10.0, 90.0) {
        return Err(ValidationError::AgeOutOfRange);
    }
    if !required_in_range(form.get(FormField::HeightCm), 120.0, 220.0) {
        return Err(ValidationError::HeightOutOfRange);
    }
    if !required_in_range(form.get(FormField::WeightKg), 30.0, 200.0) {
        return Err(ValidationError::WeightOutOfRange);
    }
    if !GOALS.contains(&form.get(FormField::Goal)) {
        return Err(ValidationError::InvalidGoal);
    }
    if !in_range(form.get(FormField::StepsPerDay), 0.0, 30000.0) {
        return Err(ValidationError::StepsOutOfRange);
    }
    if !in_range(form.get(FormField::ActiveMinutes), 0.0, 300.0) {
        return Err(ValidationError::ActiveMinutesOutOfRange);
    }

    // The remaining numeric fields carry no range, only a format. Non-numeric
    // text is rejected here too, never skipped.
    if let Some(field) = FormField::ALL
        .iter()
        .copied()
        .filter(|f| f.is_numeric())
        .find(|f| parse_number(form.get(*f)).is_none())
    {
        return Err(ValidationError::NotANumber(field));
    }

    Ok(())
}
