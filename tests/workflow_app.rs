//! End-to-end flows through the App with a fake prediction service.

mod common;

use common::{sample_result, FakePredictionService, TestEnv};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use fitnourish::app::App;
use fitnourish::nutrition::Numeric;
use fitnourish::state::controller::LOGIN_ERROR;
use fitnourish::state::DialogKind;
use fitnourish::styles::ThemeType;
use fitnourish::{Config, KeymapPreset, RequestError, ScreenState};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn key(app: &mut App, code: KeyCode) {
    app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .unwrap();
    app.update(Instant::now()).unwrap();
}

fn ctrl(app: &mut App, c: char) {
    app.handle_event(Event::Key(KeyEvent::new(
        KeyCode::Char(c),
        KeyModifiers::CONTROL,
    )))
    .unwrap();
    app.update(Instant::now()).unwrap();
}

/// Tick until a dialog appears or the deadline passes.
fn wait_for_dialog(app: &mut App) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while app.dialog().is_none() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
        app.update(Instant::now()).unwrap();
    }
    assert!(app.dialog().is_some(), "no dialog before deadline");
}

fn app_with(env: &TestEnv, service: Arc<FakePredictionService>) -> App {
    let mut app = App::new(env.config(), env.config_path.clone(), service).unwrap();
    app.update(Instant::now()).unwrap();
    app
}

/// Splash -> Login -> Home -> Form with the demo credentials.
fn open_form(app: &mut App) {
    assert_eq!(app.controller().screen(), ScreenState::Login);
    key(app, KeyCode::Enter); // username -> password
    key(app, KeyCode::Enter); // login
    assert_eq!(app.controller().screen(), ScreenState::Home);
    key(app, KeyCode::Enter); // first quick action
    assert_eq!(app.controller().screen(), ScreenState::Form);
}

#[test]
fn test_default_form_is_predicted_and_saved_once() {
    let env = TestEnv::new();
    let service = FakePredictionService::with_script(vec![Ok(sample_result(42, 2100.0))]);
    let mut app = app_with(&env, service.clone());
    open_form(&mut app);

    ctrl(&mut app, 's');
    wait_for_dialog(&mut app);

    let calls = service.calls();
    assert_eq!(calls.len(), 1);
    let payload = &calls[0];
    assert_eq!(payload.age, Numeric(25.0));
    assert_eq!(payload.height_cm, Numeric(160.0));
    assert_eq!(payload.weight_kg, Numeric(60.0));
    assert_eq!(payload.goal, "Maintain");
    assert_eq!(payload.steps_per_day, Numeric(7500.0));
    assert_eq!(payload.active_minutes, Numeric(60.0));

    let dialog = app.dialog().unwrap();
    assert_eq!(dialog.title, "Saved ✅");
    assert_eq!(dialog.content, "Record ID: 42");
    assert_eq!(dialog.kind, DialogKind::Success);
    assert!(!app.controller().is_loading());
    assert_eq!(
        app.controller().result().unwrap().targets.daily_kcal_need,
        2100.0
    );
}

#[test]
fn test_second_submit_while_loading_sends_nothing() {
    let env = TestEnv::new();
    let service = FakePredictionService::gated();
    let mut app = app_with(&env, service.clone());
    open_form(&mut app);

    ctrl(&mut app, 's');
    assert!(app.controller().is_loading());
    ctrl(&mut app, 's');
    assert!(app.dialog().is_none());

    service.release();
    wait_for_dialog(&mut app);
    assert_eq!(service.calls().len(), 1);
    assert!(!app.controller().is_loading());
}

#[test]
fn test_failed_request_keeps_previous_result() {
    let env = TestEnv::new();
    let service = FakePredictionService::with_script(vec![
        Ok(sample_result(1, 1900.0)),
        Err(RequestError::Status {
            status: 500,
            detail: Some("Nutrition model not available".to_string()),
        }),
    ]);
    let mut app = app_with(&env, service.clone());
    open_form(&mut app);

    ctrl(&mut app, 's');
    wait_for_dialog(&mut app);
    key(&mut app, KeyCode::Enter);
    assert!(app.dialog().is_none());

    ctrl(&mut app, 's');
    wait_for_dialog(&mut app);
    let dialog = app.dialog().unwrap();
    assert_eq!(dialog.title, "Error");
    assert_eq!(dialog.content, "Nutrition model not available");
    assert_eq!(dialog.kind, DialogKind::Error);

    assert!(!app.controller().is_loading());
    assert_eq!(
        app.controller().result().unwrap().targets.daily_kcal_need,
        1900.0
    );
    assert_eq!(service.calls().len(), 2);
}

#[test]
fn test_meal_plan_follows_predicted_calories() {
    let env = TestEnv::new();
    let service = FakePredictionService::with_script(vec![Ok(sample_result(5, 2000.0))]);
    let mut app = app_with(&env, service.clone());
    open_form(&mut app);

    // Nothing to plan around yet.
    ctrl(&mut app, 'g');
    assert_eq!(app.dialog().unwrap().title, "Meal Plan");
    assert_eq!(app.dialog().unwrap().kind, DialogKind::Info);
    key(&mut app, KeyCode::Enter);
    assert!(service.meal_requests().is_empty());

    ctrl(&mut app, 's');
    wait_for_dialog(&mut app);
    key(&mut app, KeyCode::Enter);

    ctrl(&mut app, 'g');
    wait_for_dialog(&mut app);
    let dialog = app.dialog().unwrap();
    assert_eq!(dialog.title, "Meal Plan");
    assert_eq!(dialog.kind, DialogKind::Success);
    assert_eq!(
        dialog.content,
        "09:00 AM  Breakfast: 800 kcal, 400 g\n07:00 PM  Dinner: 1200 kcal, 400 g"
    );

    let requests = service.meal_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].total_calories, 2000.0);
    assert_eq!(requests[0].meals_per_day, 3);
    assert_eq!(app.controller().screen(), ScreenState::Form);
}

#[test]
fn test_invalid_age_never_reaches_service() {
    let env = TestEnv::new();
    let service = FakePredictionService::new();
    let mut app = app_with(&env, service.clone());
    open_form(&mut app);

    // Age has focus: "25" -> "9"
    key(&mut app, KeyCode::Backspace);
    key(&mut app, KeyCode::Backspace);
    key(&mut app, KeyCode::Char('9'));
    assert_eq!(app.controller().form().get(fitnourish::FormField::Age), "9");

    ctrl(&mut app, 's');
    let dialog = app.dialog().unwrap();
    assert_eq!(dialog.title, "Validation");
    assert_eq!(dialog.content, "Age must be between 10 and 90");
    assert!(!app.controller().is_loading());

    // Give a stray request time to show up.
    std::thread::sleep(Duration::from_millis(20));
    assert!(service.calls().is_empty());
}

#[test]
fn test_dialog_captures_input_until_dismissed() {
    let env = TestEnv::new();
    let mut app = app_with(&env, FakePredictionService::new());
    open_form(&mut app);
    key(&mut app, KeyCode::Esc);
    assert_eq!(app.controller().screen(), ScreenState::Home);

    // History card
    key(&mut app, KeyCode::Down);
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.dialog().unwrap().title, "View History");

    // Navigation keys are swallowed while the dialog is up.
    key(&mut app, KeyCode::Up);
    key(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    assert!(app.dialog().is_some());

    key(&mut app, KeyCode::Esc);
    assert!(app.dialog().is_none());
    assert_eq!(app.controller().screen(), ScreenState::Home);
}

#[test]
fn test_form_values_survive_round_trip_home_but_result_does_not() {
    let env = TestEnv::new();
    let service = FakePredictionService::new();
    let mut app = app_with(&env, service.clone());
    open_form(&mut app);

    key(&mut app, KeyCode::Char('0')); // age "250"
    key(&mut app, KeyCode::Backspace); // age "25"
    key(&mut app, KeyCode::Backspace); // age "2"
    key(&mut app, KeyCode::Char('8')); // age "28"
    ctrl(&mut app, 's');
    wait_for_dialog(&mut app);
    key(&mut app, KeyCode::Enter);
    assert!(app.controller().result().is_some());

    key(&mut app, KeyCode::Esc);
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.controller().screen(), ScreenState::Form);
    assert!(app.controller().result().is_none());
    assert_eq!(app.controller().form().get(fitnourish::FormField::Age), "28");
}

#[test]
fn test_wrong_password_stays_on_login() {
    let env = TestEnv::new();
    let mut app = app_with(&env, FakePredictionService::new());

    key(&mut app, KeyCode::Tab); // password
    key(&mut app, KeyCode::Backspace);
    key(&mut app, KeyCode::Enter);

    assert_eq!(app.controller().screen(), ScreenState::Login);
    assert_eq!(
        app.controller().login_error(),
        Some(LOGIN_ERROR)
    );
}

#[test]
fn test_logout_resets_credentials() {
    let env = TestEnv::new();
    let mut app = app_with(&env, FakePredictionService::new());
    key(&mut app, KeyCode::Enter);
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.controller().screen(), ScreenState::Home);

    // Logout is the last card; Up wraps to it.
    key(&mut app, KeyCode::Up);
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.controller().screen(), ScreenState::Login);
    assert_eq!(app.controller().credentials().username, "demo");
    assert_eq!(app.controller().credentials().password, "1234");
    assert_eq!(app.controller().login_error(), None);
}

#[test]
fn test_help_overlay_switches_preset_and_saves() {
    let env = TestEnv::new();
    let mut app = app_with(&env, FakePredictionService::new());
    key(&mut app, KeyCode::Enter);
    key(&mut app, KeyCode::Enter);

    key(&mut app, KeyCode::Char('?'));
    assert!(app.is_help_shown());
    key(&mut app, KeyCode::Char('2'));
    assert!(app.is_help_shown());
    assert_eq!(app.config().keymap.preset, KeymapPreset::Vim);

    let saved = Config::load_or_create(&env.config_path).unwrap();
    assert_eq!(saved.keymap.preset, KeymapPreset::Vim);

    key(&mut app, KeyCode::Esc);
    assert!(!app.is_help_shown());
    assert_eq!(app.controller().screen(), ScreenState::Home);

    // Vim preset: j moves down on Home.
    key(&mut app, KeyCode::Char('j'));
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.dialog().unwrap().title, "View History");
}

#[test]
fn test_preset_switch_leaves_runtime_overrides_out_of_the_file() {
    let env = TestEnv::new();
    env.config().save(&env.config_path).unwrap();

    // What main does after loading: env and flags layered on top.
    let mut config = Config::load_or_create(&env.config_path).unwrap();
    config.apply_overrides(|key| match key {
        "FITNOURISH_API_URL" => Some("http://temporary:9999".to_string()),
        "NO_COLOR" => Some("1".to_string()),
        _ => None,
    });
    let mut app = App::new(config, env.config_path.clone(), FakePredictionService::new()).unwrap();
    app.update(Instant::now()).unwrap();
    key(&mut app, KeyCode::Enter);
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.controller().screen(), ScreenState::Home);

    key(&mut app, KeyCode::Char('?'));
    key(&mut app, KeyCode::Char('2'));
    assert_eq!(app.config().api_url, "http://temporary:9999");

    let saved = Config::load_or_create(&env.config_path).unwrap();
    assert_eq!(saved.keymap.preset, KeymapPreset::Vim);
    assert_eq!(saved.api_url, "http://127.0.0.1:8000");
    assert_eq!(saved.theme, ThemeType::Dark);
    assert_eq!(saved.splash_delay_ms, 0);
}

#[test]
fn test_quit_from_splash() {
    let env = TestEnv::new();
    let config = Config {
        splash_delay_ms: 60_000,
        ..env.config()
    };
    let mut app = App::new(config, env.config_path.clone(), FakePredictionService::new()).unwrap();
    app.update(Instant::now()).unwrap();
    assert_eq!(app.controller().screen(), ScreenState::Splash);

    key(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
    assert_eq!(app.controller().screen(), ScreenState::Splash);
}
