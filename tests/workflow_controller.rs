//! The controller driven directly against a prediction service, the way the
//! app does it but without a terminal.

mod common;

use common::{sample_result, FakePredictionService};
use fitnourish::nutrition::Numeric;
use fitnourish::state::{DialogKind, SubmitStart};
use fitnourish::{FormField, PredictionService, RequestError, ScreenController, ScreenState};
use std::time::{Duration, Instant};

fn on_form() -> ScreenController {
    let start = Instant::now();
    let mut controller = ScreenController::new(start, Duration::from_millis(1400));
    assert!(!controller.tick(start + Duration::from_millis(1399)));
    assert!(controller.tick(start + Duration::from_millis(1400)));
    assert!(controller.login());
    controller.open_form();
    assert_eq!(controller.screen(), ScreenState::Form);
    controller
}

async fn submit(
    controller: &mut ScreenController,
    service: &dyn PredictionService,
) -> fitnourish::state::Dialog {
    match controller.begin_submit() {
        SubmitStart::Ready(payload) => {
            let outcome = service.predict_and_save(&payload).await;
            controller.finish_submit(outcome)
        }
        other => panic!("expected a payload, got {:?}", other),
    }
}

#[tokio::test]
async fn test_scenario_payload_is_fully_numeric() {
    let service = FakePredictionService::new();
    let mut controller = on_form();
    for (field, value) in [
        (FormField::Age, "25"),
        (FormField::HeightCm, "160"),
        (FormField::WeightKg, "60"),
        (FormField::Goal, "Maintain"),
        (FormField::StepsPerDay, "7500"),
        (FormField::ActiveMinutes, "60"),
    ] {
        controller.update_field(field, value);
    }

    let dialog = submit(&mut controller, service.as_ref()).await;
    assert_eq!(dialog.kind, DialogKind::Success);

    let calls = service.calls();
    assert_eq!(calls.len(), 1);
    let json = serde_json::to_value(&calls[0]).unwrap();
    assert_eq!(json["age"], serde_json::json!(25));
    assert_eq!(json["height_cm"], serde_json::json!(160));
    assert_eq!(json["has_diabetes"], serde_json::json!(1));
    assert_eq!(json["gender"], serde_json::json!("Female"));
    assert_eq!(json["stress_score"], serde_json::json!(55));
    assert_eq!(json.as_object().unwrap().len(), 13);
}

#[tokio::test]
async fn test_busy_controller_hands_out_no_second_payload() {
    let mut controller = on_form();
    let first = controller.begin_submit();
    assert!(matches!(first, SubmitStart::Ready(_)));
    assert_eq!(controller.begin_submit(), SubmitStart::Busy);

    let dialog = controller.finish_submit(Ok(sample_result(3, 2000.0)));
    assert_eq!(dialog.content, "Record ID: 3");
    assert!(matches!(controller.begin_submit(), SubmitStart::Ready(_)));
}

#[tokio::test]
async fn test_failure_then_success_replaces_result() {
    let service = FakePredictionService::with_script(vec![
        Err(RequestError::Transport("connection refused".to_string())),
        Ok(sample_result(9, 2222.0)),
    ]);
    let mut controller = on_form();

    let dialog = submit(&mut controller, service.as_ref()).await;
    assert_eq!(dialog.kind, DialogKind::Error);
    assert!(controller.result().is_none());
    assert!(!controller.is_loading());

    submit(&mut controller, service.as_ref()).await;
    let result = controller.result().unwrap();
    assert_eq!(result.targets.daily_kcal_need, 2222.0);
    assert_eq!(result.targets.protein_g_per_day, 120.0);
}

#[tokio::test]
async fn test_decimal_weight_is_sent_as_float() {
    let service = FakePredictionService::new();
    let mut controller = on_form();
    controller.update_field(FormField::WeightKg, "61.5");
    submit(&mut controller, service.as_ref()).await;
    assert_eq!(service.calls()[0].weight_kg, Numeric(61.5));
    let json = serde_json::to_value(&service.calls()[0]).unwrap();
    assert_eq!(json["weight_kg"], serde_json::json!(61.5));
}

#[test]
fn test_every_goal_other_than_the_three_is_rejected() {
    for goal in ["maintain", "LOSE", " Gain", "Bulk", ""] {
        let mut controller = on_form();
        controller.update_field(FormField::Goal, goal);
        assert!(
            matches!(controller.begin_submit(), SubmitStart::Invalid(_)),
            "goal {:?} should be rejected",
            goal
        );
        assert!(!controller.is_loading());
    }
}

#[test]
fn test_age_boundaries() {
    for (age, ok) in [("9", false), ("10", true), ("90", true), ("91", false)] {
        let mut controller = on_form();
        controller.update_field(FormField::Age, age);
        let accepted = matches!(controller.begin_submit(), SubmitStart::Ready(_));
        assert_eq!(accepted, ok, "age {}", age);
    }
}
