// ABOUTME: Slim Bites CLI - computes a weight-loss plan from body metrics
// ABOUTME: Prints the plan as labeled text or JSON and inspects effective configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Daily targets only
//! slim-bites plan --weight 80 --height 175 --age 30 --desired-loss 5 --duration 10
//!
//! # With meal plan and weekly workouts, as JSON
//! slim-bites plan --weight 62 --height 165 --age 41 --gender female \
//!     --activity light --desired-loss 4 --duration 12 --detailed --format json
//!
//! # Show coefficients after SLIM_BITES_* overrides
//! slim-bites config
//! ```

use clap::{Parser, Subcommand};
use slim_bites::config::PlanConfig;
use slim_bites::errors::{AppError, AppResult};
use slim_bites::form::{PlanForm, PlanSession};
use slim_bites::formatters::{format_error, format_plan, OutputFormat};
use slim_bites::intelligence::{NutritionPlanner, PlanOptions};
use slim_bites::logging::LoggingConfig;
use std::process;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "slim-bites",
    version,
    about = "Slim Bites weight-loss planner",
    long_about = "Computes daily calorie, macronutrient, sleep, water, meal and workout targets from body metrics and a weight-loss goal."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute a plan
    Plan {
        /// Body weight in kilograms
        #[arg(long, default_value = "")]
        weight: String,

        /// Height in centimeters
        #[arg(long, default_value = "")]
        height: String,

        /// Age in whole years
        #[arg(long, default_value = "")]
        age: String,

        /// male or female
        #[arg(long, default_value = "male")]
        gender: String,

        /// sedentary, light, moderate, active or veryActive
        #[arg(long, default_value = "moderate")]
        activity: String,

        /// Kilograms to lose
        #[arg(long, default_value = "")]
        desired_loss: String,

        /// Weeks to reach the goal
        #[arg(long, default_value = "")]
        duration: String,

        /// Include the meal plan and exercise schedule
        #[arg(long)]
        detailed: bool,

        /// Output format
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Print the effective configuration as JSON
    Config,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().with_verbose(cli.verbose).init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let (result, format) = match cli.command {
        Command::Plan {
            weight,
            height,
            age,
            gender,
            activity,
            desired_loss,
            duration,
            detailed,
            format,
        } => {
            let form = PlanForm {
                weight,
                height,
                age,
                gender,
                activity_level: activity,
                desired_loss,
                duration,
            };
            let options = if detailed {
                PlanOptions::detailed()
            } else {
                PlanOptions::simple()
            };
            let format = OutputFormat::from_str_param(&format);
            (run_plan(form, options, format), format)
        }
        Command::Config => (run_config(), OutputFormat::Json),
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            let exit_code = e.code.exit_code();
            eprintln!("{}", format_error(e, format));
            process::exit(exit_code);
        }
    }
}

fn run_plan(form: PlanForm, options: PlanOptions, format: OutputFormat) -> AppResult<String> {
    let planner = NutritionPlanner::new(PlanConfig::global().nutrition.clone());
    let mut session = PlanSession::with_form(form, options);
    let plan = session.calculate(&planner)?;
    debug!(format = %format, "Rendering plan");
    format_plan(plan, format)
}

fn run_config() -> AppResult<String> {
    let config = PlanConfig::load().map_err(AppError::from)?;
    Ok(serde_json::to_string_pretty(&config)?)
}
