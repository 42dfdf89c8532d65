use crate::components::HelpOverlay;
use crate::config::Config;
use crate::error::RequestError;
use crate::keymap::KeymapPreset;
use crate::nutrition::{
    MealSuggestion, MealSuggestionRequest, PredictionResult, DEFAULT_MEALS_PER_DAY,
};
use crate::screens::{
    FormScreen, HomeScreen, LoginScreen, RenderContext, Screen, ScreenAction, ScreenContext,
    SplashScreen,
};
use crate::services::PredictionService;
use crate::state::{Dialog, ScreenController, ScreenState, SubmitStart};
use crate::tui::Tui;
use crate::widgets::DialogBox;
use anyhow::{Context, Result};
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::Frame;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{error, info, warn};

type Outcome = Result<PredictionResult, RequestError>;
type MealOutcome = Result<Vec<MealSuggestion>, RequestError>;

/// Main application state
pub struct App {
    config: Config,
    config_path: PathBuf,
    controller: ScreenController,
    service: Arc<dyn PredictionService>,
    runtime: Runtime,
    should_quit: bool,
    /// Track the last screen to call `on_enter` on transitions
    last_screen: Option<ScreenState>,
    splash: SplashScreen,
    login: LoginScreen,
    home: HomeScreen,
    form: FormScreen,
    dialog: Option<Dialog>,
    help_shown: bool,
    /// Outcome of the in-flight prediction request, if any
    pending: Option<oneshot::Receiver<Outcome>>,
    /// Outcome of the in-flight meal plan request, if any
    pending_meals: Option<oneshot::Receiver<MealOutcome>>,
    frame_count: u64,
}

impl App {
    pub fn new(
        config: Config,
        config_path: PathBuf,
        service: Arc<dyn PredictionService>,
    ) -> Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let controller = ScreenController::new(Instant::now(), config.splash_delay());
        Ok(Self {
            config,
            config_path,
            controller,
            service,
            runtime,
            should_quit: false,
            last_screen: None,
            splash: SplashScreen::new(),
            login: LoginScreen::new(),
            home: HomeScreen::new(),
            form: FormScreen::new(),
            dialog: None,
            help_shown: false,
            pending: None,
            pending_meals: None,
            frame_count: 0,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        info!("TUI started");

        let result = self.event_loop(&mut tui);

        self.controller.cancel_splash();
        tui.exit()?;
        info!("TUI stopped");
        result
    }

    fn event_loop(&mut self, tui: &mut Tui) -> Result<()> {
        loop {
            self.update(Instant::now())?;
            self.draw(tui)?;

            if self.should_quit {
                return Ok(());
            }

            if let Some(event) = tui.poll_event(Duration::from_millis(250))? {
                self.handle_event(event)?;
            }
        }
    }

    /// Advance timers, collect a finished request and run `on_enter` for a
    /// newly active screen.
    pub fn update(&mut self, now: Instant) -> Result<()> {
        self.controller.tick(now);
        self.poll_pending();

        let current = self.controller.screen();
        if self.last_screen != Some(current) {
            if let Some(previous) = self.last_screen {
                let ctx = ScreenContext::new(&self.config, &self.config_path, &self.controller);
                screen_for(
                    previous,
                    &mut self.splash,
                    &mut self.login,
                    &mut self.home,
                    &mut self.form,
                )
                .on_exit(&ctx)?;
            }
            let ctx = ScreenContext::new(&self.config, &self.config_path, &self.controller);
            screen_for(
                current,
                &mut self.splash,
                &mut self.login,
                &mut self.home,
                &mut self.form,
            )
            .on_enter(&ctx)?;
            self.last_screen = Some(current);
        }
        Ok(())
    }

    /// Feed finished requests into the controller and the dialog. Returns
    /// true when one was collected.
    pub fn poll_pending(&mut self) -> bool {
        let mut collected = false;
        if let Some(outcome) = take_finished(&mut self.pending) {
            self.dialog = Some(self.controller.finish_submit(outcome));
            collected = true;
        }
        // A meal plan waits until the current dialog is dismissed.
        if self.dialog.is_some() {
            return collected;
        }
        if let Some(outcome) = take_finished(&mut self.pending_meals) {
            self.dialog = Some(match outcome {
                Ok(plan) => {
                    info!("Meal plan with {} meals", plan.len());
                    Dialog::meal_plan(&plan)
                }
                Err(err) => {
                    warn!("Meal suggestion failed: {}", err);
                    Dialog::request_failed(&err)
                }
            });
            collected = true;
        }
        collected
    }

    fn draw(&mut self, tui: &mut Tui) -> Result<()> {
        self.frame_count = self.frame_count.wrapping_add(1);
        let mut render_result = Ok(());
        tui.terminal_mut().draw(|frame| {
            render_result = self.render(frame);
        })?;
        if let Err(e) = render_result {
            error!("Render failed: {:#}", e);
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) -> Result<()> {
        let area = frame.area();
        let ctx = RenderContext::new(&self.config, &self.controller, self.frame_count);
        screen_for(
            self.controller.screen(),
            &mut self.splash,
            &mut self.login,
            &mut self.home,
            &mut self.form,
        )
        .render(frame, area, &ctx)?;

        if self.help_shown {
            HelpOverlay::render(
                frame,
                area,
                &self.config.keymap,
                &self.config_path.display().to_string(),
            )?;
        }
        if let Some(dialog) = &self.dialog {
            frame.render_widget(DialogBox::from_dialog(dialog).footer("Enter: OK"), area);
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = &event {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }
            // A dialog captures all input until dismissed.
            if self.dialog.is_some() {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    self.dialog = None;
                }
                return Ok(());
            }
            if self.help_shown {
                if let Some(preset) = HelpOverlay::preset_for_key(key.code) {
                    self.switch_preset(preset);
                } else {
                    self.help_shown = false;
                }
                return Ok(());
            }
        }

        let ctx = ScreenContext::new(&self.config, &self.config_path, &self.controller);
        let action = screen_for(
            self.controller.screen(),
            &mut self.splash,
            &mut self.login,
            &mut self.home,
            &mut self.form,
        )
        .handle_event(event, &ctx)?;
        self.apply(action);
        Ok(())
    }

    fn switch_preset(&mut self, preset: KeymapPreset) {
        if self.config.keymap.preset == preset {
            return;
        }
        info!("Switching keymap preset to {}", preset);
        self.config.keymap.preset = preset;
        if let Err(e) = Config::save_keymap_preset(&self.config_path, preset) {
            warn!("Failed to save keymap preset: {:#}", e);
        }
    }

    fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::SetUsername(username) => self.controller.set_username(username),
            ScreenAction::SetPassword(password) => self.controller.set_password(password),
            ScreenAction::Login => {
                self.controller.login();
            }
            ScreenAction::Logout => self.controller.logout(),
            ScreenAction::OpenForm => self.controller.open_form(),
            ScreenAction::GoHome => self.controller.go_home(),
            ScreenAction::UpdateField(field, value) => self.controller.update_field(field, value),
            ScreenAction::Submit => self.submit(),
            ScreenAction::SuggestMeals => self.suggest_meals(),
            ScreenAction::ShowMessage { title, content } => {
                self.dialog = Some(Dialog::info(title, content));
            }
            ScreenAction::ShowHelp => self.help_shown = true,
            ScreenAction::Quit => {
                self.controller.cancel_splash();
                self.should_quit = true;
            }
        }
    }

    fn submit(&mut self) {
        match self.controller.begin_submit() {
            SubmitStart::Ready(payload) => {
                let service = Arc::clone(&self.service);
                let (tx, rx) = oneshot::channel();
                self.runtime.spawn(async move {
                    let outcome = service.predict_and_save(&payload).await;
                    let _ = tx.send(outcome);
                });
                self.pending = Some(rx);
            }
            SubmitStart::Invalid(err) => self.dialog = Some(Dialog::validation(&err)),
            SubmitStart::Busy | SubmitStart::Inactive => {}
        }
    }

    fn suggest_meals(&mut self) {
        if self.pending_meals.is_some() {
            return;
        }
        let Some(result) = self.controller.result() else {
            self.dialog = Some(Dialog::info(
                "Meal Plan",
                "Predict & Save first to get a daily calorie target.",
            ));
            return;
        };
        let request =
            MealSuggestionRequest::new(result.targets.daily_kcal_need, DEFAULT_MEALS_PER_DAY);
        if let Err(err) = request.validate() {
            self.dialog = Some(Dialog::validation(&err));
            return;
        }

        let service = Arc::clone(&self.service);
        let (tx, rx) = oneshot::channel();
        self.runtime.spawn(async move {
            let outcome = service.suggest_meals(&request).await;
            let _ = tx.send(outcome);
        });
        self.pending_meals = Some(rx);
    }

    pub fn controller(&self) -> &ScreenController {
        &self.controller
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn is_help_shown(&self) -> bool {
        self.help_shown
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Take a finished outcome out of `slot`. A task that dropped its sender
/// counts as a failed request.
fn take_finished<T>(
    slot: &mut Option<oneshot::Receiver<Result<T, RequestError>>>,
) -> Option<Result<T, RequestError>> {
    let rx = slot.as_mut()?;
    let outcome = match rx.try_recv() {
        Ok(outcome) => outcome,
        Err(TryRecvError::Empty) => return None,
        Err(TryRecvError::Closed) => {
            error!("Request task ended without a result");
            Err(RequestError::Transport(String::new()))
        }
    };
    *slot = None;
    Some(outcome)
}

/// Screen instance for a state. Takes the screens separately so the caller
/// can keep borrowing the rest of the app.
fn screen_for<'a>(
    state: ScreenState,
    splash: &'a mut SplashScreen,
    login: &'a mut LoginScreen,
    home: &'a mut HomeScreen,
    form: &'a mut FormScreen,
) -> &'a mut dyn Screen {
    match state {
        ScreenState::Splash => splash,
        ScreenState::Login => login,
        ScreenState::Home => home,
        ScreenState::Form => form,
    }
}
