//! Helpers shared by the CLI commands.
//!
//! - Output helpers: `print_success`, `print_error`, `print_warning`, `print_info`
//! - Form assembly: `parse_field_override`, `build_payload`
//! - Result formatting: `format_targets`, `format_history_row`, `format_meal`,
//!   `format_meal_analysis`

use crate::error::ValidationError;
use crate::nutrition::{
    FormField, FormFields, HistoryEntry, MealAnalysis, MealSuggestion, NutritionTargets, Payload,
};

// =============================================================================
// Output Helpers
// =============================================================================

/// Print a success message with a checkmark prefix.
pub fn print_success(msg: &str) {
    println!("\u{2713} {}", msg);
}

/// Print an error message with an X prefix to stderr.
pub fn print_error(msg: &str) {
    eprintln!("\u{2717} {}", msg);
}

/// Print a warning message with a warning sign prefix.
pub fn print_warning(msg: &str) {
    println!("\u{26A0}\u{FE0F} {}", msg);
}

/// Print an info message with an info sign prefix.
pub fn print_info(msg: &str) {
    println!("\u{2139}\u{FE0F} {}", msg);
}

// =============================================================================
// Form Assembly
// =============================================================================

/// Parse a `key=value` argument into a field override.
///
/// Used as a clap value parser, so the error is a plain string.
pub fn parse_field_override(arg: &str) -> Result<(FormField, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {:?}", arg))?;
    let field: FormField = key.parse()?;
    Ok((field, value.to_string()))
}

/// Default form with `overrides` applied in order, validated the same way
/// the form screen does it.
pub fn build_payload(overrides: &[(FormField, String)]) -> Result<Payload, ValidationError> {
    let mut form = FormFields::new();
    for (field, value) in overrides {
        form.update(*field, value.clone());
    }
    Payload::from_form(&form)
}

// =============================================================================
// Result Formatting
// =============================================================================

/// Multi-line summary of a set of targets, indented for terminal output.
pub fn format_targets(targets: &NutritionTargets) -> String {
    format!(
        "  Calories : {} kcal / day\n  Protein  : {} g/day\n  Carbs    : {} g/day\n  Fat      : {} g/day",
        targets.daily_kcal_need,
        targets.protein_g_per_day,
        targets.carbs_g_per_day,
        targets.fat_g_per_day,
    )
}

/// One line per saved prediction.
pub fn format_history_row(entry: &HistoryEntry) -> String {
    let t = &entry.targets;
    format!(
        "{:>6}  {:<16}  {:>7} kcal  P {:>5}  C {:>5}  F {:>5}",
        entry.id.to_string(),
        entry.created_display(),
        t.daily_kcal_need,
        t.protein_g_per_day,
        t.carbs_g_per_day,
        t.fat_g_per_day,
    )
}

/// A suggested meal: heading line, then ingredients and nutrients.
pub fn format_meal(meal: &MealSuggestion) -> String {
    let mut out = format!(
        "{}  {} ({:.0} kcal, {:.0} g)",
        meal.time, meal.meal_name, meal.calories, meal.mass
    );
    if !meal.description.is_empty() {
        out.push_str(&format!("\n  {}", meal.description));
    }
    if !meal.ingredients.is_empty() {
        out.push_str(&format!("\n  Ingredients: {}", meal.ingredients.join(", ")));
    }
    if !meal.nutrients.is_empty() {
        let nutrients: Vec<String> = meal
            .nutrients
            .iter()
            .map(|n| format!("{} {} {}", n.name, n.amount, n.unit))
            .collect();
        out.push_str(&format!("\n  Nutrients: {}", nutrients.join(", ")));
    }
    out
}

/// Calories, detected ingredients and nutrient estimates of a meal photo.
pub fn format_meal_analysis(analysis: &MealAnalysis) -> String {
    let mut out = format!("  Calories : {} kcal / 100 g", analysis.calories_per_100g);
    if !analysis.ingredients.is_empty() {
        out.push_str("\n  Ingredients:");
        for ingredient in &analysis.ingredients {
            out.push_str(&format!(
                "\n    {:<20} {:>6} {}  ({}%)",
                ingredient.name, ingredient.amount, ingredient.unit, ingredient.possibility
            ));
        }
    }
    if !analysis.nutrients.is_empty() {
        out.push_str("\n  Nutrients:");
        for nutrient in &analysis.nutrients {
            out.push_str(&format!(
                "\n    {:<20} {:>6} {}  ({}% of daily value)",
                nutrient.name, nutrient.amount, nutrient.unit, nutrient.percentage
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::{
        AnalyzedNutrient, DetectedIngredient, MealNutrient, Numeric, RecordId,
    };

    #[test]
    fn test_parse_field_override() {
        assert_eq!(
            parse_field_override("age=30").unwrap(),
            (FormField::Age, "30".to_string())
        );
        // Only the first '=' splits.
        assert_eq!(
            parse_field_override("goal=a=b").unwrap(),
            (FormField::Goal, "a=b".to_string())
        );
        assert!(parse_field_override("age").is_err());
        assert!(parse_field_override("shoe_size=44").is_err());
    }

    #[test]
    fn test_build_payload_uses_defaults() {
        let payload = build_payload(&[]).unwrap();
        assert_eq!(payload.age, Numeric(25.0));
        assert_eq!(payload.goal, "Maintain");
    }

    #[test]
    fn test_build_payload_applies_overrides_and_validates() {
        let payload = build_payload(&[(FormField::WeightKg, "72.5".to_string())]).unwrap();
        assert_eq!(payload.weight_kg, Numeric(72.5));

        assert_eq!(
            build_payload(&[(FormField::Age, "9".to_string())]),
            Err(ValidationError::AgeOutOfRange)
        );
    }

    #[test]
    fn test_format_targets() {
        let text = format_targets(&NutritionTargets {
            daily_kcal_need: 2000.0,
            protein_g_per_day: 120.0,
            carbs_g_per_day: 250.5,
            fat_g_per_day: 60.0,
        });
        assert!(text.contains("2000 kcal / day"));
        assert!(text.contains("250.5 g/day"));
    }

    #[test]
    fn test_format_history_row() {
        let entry = HistoryEntry {
            id: RecordId::Number(7),
            user_id: "demo".to_string(),
            created_at: Some("2024-05-01T08:30:00".to_string()),
            targets: NutritionTargets {
                daily_kcal_need: 1800.0,
                protein_g_per_day: 100.0,
                carbs_g_per_day: 200.0,
                fat_g_per_day: 55.0,
            },
        };
        let row = format_history_row(&entry);
        assert!(row.contains("2024-05-01 08:30"));
        assert!(row.contains("1800 kcal"));
    }

    #[test]
    fn test_format_meal() {
        let meal = MealSuggestion {
            meal_name: "Lunch".to_string(),
            calories: 705.6,
            time: "12:30 PM".to_string(),
            description: "Ingredients chicken, rice".to_string(),
            image: String::new(),
            ingredients: vec!["chicken".to_string(), "rice".to_string()],
            nutrients: vec![MealNutrient {
                name: "Protein".to_string(),
                amount: 42.5,
                unit: "g".to_string(),
            }],
            mass: 412.0,
        };
        assert_eq!(
            format_meal(&meal),
            "12:30 PM  Lunch (706 kcal, 412 g)\n  Ingredients chicken, rice\n  Ingredients: chicken, rice\n  Nutrients: Protein 42.5 g"
        );
    }

    #[test]
    fn test_format_meal_analysis() {
        let analysis = MealAnalysis {
            ingredients: vec![DetectedIngredient {
                name: "Rice".to_string(),
                amount: 54.9,
                unit: "g".to_string(),
                possibility: 70.2,
            }],
            nutrients: vec![AnalyzedNutrient {
                name: "Protein".to_string(),
                amount: 25.0,
                unit: "g".to_string(),
                percentage: 50.0,
            }],
            calories_per_100g: 310.0,
        };
        let text = format_meal_analysis(&analysis);
        assert!(text.starts_with("  Calories : 310 kcal / 100 g"));
        assert!(text.contains("Rice"));
        assert!(text.contains("(70.2%)"));
        assert!(text.contains("(50% of daily value)"));
    }
}
