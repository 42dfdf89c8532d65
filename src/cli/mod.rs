//! Command-line interface.
//!
//! Without a subcommand the binary launches the TUI. The subcommands talk to
//! the prediction service directly and print plain text.

mod common;
mod completions;

pub use common::*;

use crate::config::Config;
use crate::nutrition::{FormField, MealImage, MealSuggestionRequest, DEFAULT_MEALS_PER_DAY};
use crate::services::{HttpPredictionService, PredictionService};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use indoc::indoc;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing::{info, warn};

const AFTER_HELP: &str = indoc! {"
    Examples:
      fitnourish                                   Launch the TUI
      fitnourish check                             Probe the prediction service
      fitnourish predict -f age=30 -f goal=Lose    Predict and save with overrides
      fitnourish predict --no-save                 Predict without saving
      fitnourish history demo                      Show saved predictions
      fitnourish meals --calories 2100             Suggest three meals for 2100 kcal
      fitnourish analyze-meal lunch.jpg            Estimate nutrients from a photo

    Form fields: age, gender, height_cm, weight_kg, goal, has_diabetes,
    has_hypertension, steps_per_day, active_minutes, calories_burned_active,
    resting_heart_rate, avg_heart_rate, stress_score
"};

/// Personalised nutrition targets from your profile and activity
#[derive(Parser, Debug)]
#[command(
    name = "fitnourish",
    version,
    about = "Personalised nutrition targets from your profile and activity",
    long_about = None,
    after_help = AFTER_HELP
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the prediction service (overrides config and FITNOURISH_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that the prediction service is reachable
    Check,
    /// Predict daily calories and macros from the default form
    Predict {
        /// Override a form field, e.g. `-f age=30` (repeatable)
        #[arg(short, long = "field", value_name = "KEY=VALUE", value_parser = parse_field_override)]
        fields: Vec<(FormField, String)>,
        /// Only predict; do not save the result
        #[arg(long)]
        no_save: bool,
    },
    /// Show saved predictions for a user
    History {
        /// User whose history to show
        user_id: String,
    },
    /// Suggest a day of meals for a calorie target
    Meals {
        /// Total daily calories to plan for
        #[arg(long, value_name = "KCAL")]
        calories: f64,
        /// Number of meals (1-10)
        #[arg(long, default_value_t = DEFAULT_MEALS_PER_DAY)]
        meals_per_day: u8,
        /// Share of the calories for each meal, e.g. `--ratio 0.3 --ratio 0.7`
        #[arg(long = "ratio", value_name = "SHARE")]
        ratios: Vec<f64>,
    },
    /// Estimate ingredients and nutrients from a meal photo
    AnalyzeMeal {
        /// Image file to upload
        image: PathBuf,
    },
    /// Shows logs location and how to view them
    Logs,
    /// Configuration file location
    Config,
    /// Generate shell completions
    Completions {
        /// Target shell (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
}

/// How a subcommand ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Succeeded,
    Failed,
}

impl From<CommandStatus> for ExitCode {
    fn from(status: CommandStatus) -> Self {
        match status {
            CommandStatus::Succeeded => ExitCode::SUCCESS,
            CommandStatus::Failed => ExitCode::FAILURE,
        }
    }
}

impl Cli {
    /// Apply the global flags to a loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(url) = self.api_url.as_deref().filter(|u| !u.trim().is_empty()) {
            config.api_url = url.trim().to_string();
        }
        if self.no_colors {
            config.theme = crate::styles::ThemeType::NoColor;
        }
    }

    /// Execute a subcommand. Returns `None` when there is none and the TUI
    /// should start instead.
    ///
    /// Failures the user should see are printed and reported as
    /// [`CommandStatus::Failed`]; `Err` is left for broken plumbing.
    pub fn execute(&self, config: &Config) -> Result<Option<CommandStatus>> {
        let Some(command) = &self.command else {
            return Ok(None);
        };
        let status = match command {
            Commands::Check => Self::cmd_check(config)?,
            Commands::Predict { fields, no_save } => Self::cmd_predict(config, fields, *no_save)?,
            Commands::History { user_id } => Self::cmd_history(config, user_id)?,
            Commands::Meals {
                calories,
                meals_per_day,
                ratios,
            } => Self::cmd_meals(config, *calories, *meals_per_day, ratios)?,
            Commands::AnalyzeMeal { image } => Self::cmd_analyze_meal(config, image)?,
            Commands::Logs => Self::cmd_logs(),
            Commands::Config => Self::cmd_config(),
            Commands::Completions { shell } => {
                completions::generate(*shell)?;
                CommandStatus::Succeeded
            }
        };
        Ok(Some(status))
    }

    fn runtime() -> Result<Runtime> {
        Runtime::new().context("Failed to create tokio runtime")
    }

    fn cmd_check(config: &Config) -> Result<CommandStatus> {
        info!("CLI: check command executed");
        let service = HttpPredictionService::new(&config.api_url);
        match Self::runtime()?.block_on(service.health()) {
            Ok(health) => {
                print_success(&format!("{} is {}", service.base_url(), health.status));
                if let Some(message) = health.message {
                    print_info(&message);
                }
                Ok(CommandStatus::Succeeded)
            }
            Err(e) => {
                warn!("CLI check failed: {}", e);
                print_error(&format!("{}: {}", service.base_url(), e.user_message()));
                Ok(CommandStatus::Failed)
            }
        }
    }

    fn cmd_predict(
        config: &Config,
        fields: &[(FormField, String)],
        no_save: bool,
    ) -> Result<CommandStatus> {
        info!("CLI: predict command executed (save: {})", !no_save);
        let payload = match build_payload(fields) {
            Ok(payload) => payload,
            Err(e) => {
                print_error(&e.to_string());
                return Ok(CommandStatus::Failed);
            }
        };

        let service = HttpPredictionService::new(&config.api_url);
        let runtime = Self::runtime()?;
        let outcome = if no_save {
            runtime
                .block_on(service.predict(&payload))
                .map(|targets| (targets, None))
        } else {
            runtime
                .block_on(service.predict_and_save(&payload))
                .map(|result| (result.targets, Some(result.saved_id)))
        };

        match outcome {
            Ok((targets, saved_id)) => {
                match saved_id {
                    Some(id) => print_success(&format!("Saved prediction {}", id)),
                    None => print_success("Prediction (not saved)"),
                }
                println!("{}", format_targets(&targets));
                Ok(CommandStatus::Succeeded)
            }
            Err(e) => {
                warn!("CLI predict failed: {}", e);
                print_error(&e.user_message());
                Ok(CommandStatus::Failed)
            }
        }
    }

    fn cmd_history(config: &Config, user_id: &str) -> Result<CommandStatus> {
        info!("CLI: history command executed");
        let service = HttpPredictionService::new(&config.api_url);
        match Self::runtime()?.block_on(service.history(user_id)) {
            Ok(entries) if entries.is_empty() => {
                print_warning(&format!("No saved predictions for {}", user_id));
                Ok(CommandStatus::Succeeded)
            }
            Ok(entries) => {
                for entry in &entries {
                    println!("{}", format_history_row(entry));
                }
                Ok(CommandStatus::Succeeded)
            }
            Err(e) => {
                warn!("CLI history failed: {}", e);
                print_error(&e.user_message());
                Ok(CommandStatus::Failed)
            }
        }
    }

    fn cmd_meals(
        config: &Config,
        calories: f64,
        meals_per_day: u8,
        ratios: &[f64],
    ) -> Result<CommandStatus> {
        info!("CLI: meals command executed ({} meals)", meals_per_day);
        let request =
            MealSuggestionRequest::new(calories, meals_per_day).with_ratios(ratios.to_vec());
        if let Err(e) = request.validate() {
            print_error(&e.to_string());
            return Ok(CommandStatus::Failed);
        }

        let service = HttpPredictionService::new(&config.api_url);
        match Self::runtime()?.block_on(service.suggest_meals(&request)) {
            Ok(plan) if plan.is_empty() => {
                print_warning("No meals suggested");
                Ok(CommandStatus::Succeeded)
            }
            Ok(plan) => {
                print_success(&format!("{} meals for {} kcal", plan.len(), calories));
                for meal in &plan {
                    println!("{}", format_meal(meal));
                }
                Ok(CommandStatus::Succeeded)
            }
            Err(e) => {
                warn!("CLI meals failed: {}", e);
                print_error(&e.user_message());
                Ok(CommandStatus::Failed)
            }
        }
    }

    fn cmd_analyze_meal(config: &Config, image: &Path) -> Result<CommandStatus> {
        info!("CLI: analyze-meal command executed for {:?}", image);
        let bytes = match std::fs::read(image) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Could not read {:?}: {}", image, e);
                print_error(&format!("Could not read {}: {}", image.display(), e));
                return Ok(CommandStatus::Failed);
            }
        };
        let file_name = image
            .file_name()
            .map_or_else(|| "meal.jpg".to_string(), |n| n.to_string_lossy().into_owned());

        let service = HttpPredictionService::new(&config.api_url);
        match Self::runtime()?.block_on(service.analyze_meal(MealImage::new(file_name, bytes))) {
            Ok(analysis) => {
                print_success(&format!("Analyzed {}", image.display()));
                println!("{}", format_meal_analysis(&analysis));
                Ok(CommandStatus::Succeeded)
            }
            Err(e) => {
                warn!("CLI analyze-meal failed: {}", e);
                print_error(&e.user_message());
                Ok(CommandStatus::Failed)
            }
        }
    }

    fn cmd_logs() -> CommandStatus {
        let log_file = crate::utils::get_log_dir().join("fitnourish.log");
        println!("Logs are written to: {}", log_file.display());
        println!("View logs in real-time: tail -f {}", log_file.display());
        CommandStatus::Succeeded
    }

    fn cmd_config() -> CommandStatus {
        println!("{}", crate::utils::get_config_path().display());
        CommandStatus::Succeeded
    }
}
