// ABOUTME: Output format abstraction for rendering plans and errors
// ABOUTME: Supports labeled text (default) and pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: Labeled lines ("Calories = 2161") followed by meal and workout tables
//! - **JSON**: Pretty-printed plan for scripting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use slim_bites::formatters::{format_plan, OutputFormat};
//! use slim_bites::intelligence::{compute_plan, PlanOptions};
//! use slim_bites::models::{ActivityLevel, Gender, PlanInputs};
//!
//! let inputs = PlanInputs {
//!     weight_kg: 80.0,
//!     height_cm: 175.0,
//!     age_years: 30,
//!     gender: Gender::Male,
//!     activity_level: ActivityLevel::Moderate,
//!     desired_loss_kg: 5.0,
//!     duration_weeks: 10,
//! };
//! if let Ok(plan) = compute_plan(&inputs, PlanOptions::detailed()) {
//!     if let Ok(text) = format_plan(&plan, OutputFormat::Text) {
//!         println!("{text}");
//!     }
//! }
//! ```

use slim_core::errors::{AppError, AppResult, ErrorResponse};
use slim_core::models::{Meal, Plan, WorkoutDay};
use std::fmt;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable labeled text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Render a plan in the requested format
///
/// # Errors
///
/// Returns a `SerializationError` if JSON serialization fails
pub fn format_plan(plan: &Plan, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(PlanReport(plan).to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(plan)?),
    }
}

/// Render an error in the requested format
///
/// JSON output is an [`ErrorResponse`]; if that cannot be serialized the text
/// form is returned instead.
#[must_use]
pub fn format_error(error: AppError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            let text = error.to_string();
            serde_json::to_string_pretty(&ErrorResponse::from(error)).unwrap_or(text)
        }
    }
}

/// Text rendering of a plan, laid out like the results panel of the form
struct PlanReport<'a>(&'a Plan);

impl fmt::Display for PlanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        writeln!(f, "Daily Plan:")?;
        writeln!(f, "Calories = {}", plan.daily_calories)?;
        writeln!(f, "Protein = {}g", plan.protein_grams)?;
        writeln!(f, "Carbs = {}g", plan.carb_grams)?;
        writeln!(f, "Fat = {}g", plan.fat_grams)?;
        writeln!(f, "Calorie Deficit = {}", plan.daily_calorie_deficit)?;
        writeln!(f, "Sleep = {} hours", plan.sleep_hours)?;
        writeln!(f, "Water Intake = {} liters", plan.water_intake_liters)?;
        writeln!(f, "Meal Frequency = {} meals/day", plan.meal_frequency)?;
        write!(f, "Workouts = {} times/week", plan.workout_frequency)?;

        if let Some(meals) = &plan.meal_plan {
            write_meal_table(f, meals)?;
        }
        if let Some(days) = &plan.exercise_schedule {
            write_schedule(f, days)?;
        }
        Ok(())
    }
}

fn write_meal_table(f: &mut fmt::Formatter<'_>, meals: &[Meal]) -> fmt::Result {
    writeln!(f)?;
    writeln!(f)?;
    writeln!(f, "Meal Plan:")?;
    write!(
        f,
        "{:<10} {:>8} {:>8} {:>8} {:>8}",
        "Meal", "Calories", "Protein", "Carbs", "Fat"
    )?;
    for meal in meals {
        write!(
            f,
            "\n{:<10} {:>8} {:>7}g {:>7}g {:>7}g",
            meal.name, meal.calories, meal.protein, meal.carbs, meal.fat
        )?;
    }
    Ok(())
}

fn write_schedule(f: &mut fmt::Formatter<'_>, days: &[WorkoutDay]) -> fmt::Result {
    writeln!(f)?;
    writeln!(f)?;
    write!(f, "Exercise Schedule:")?;
    for day in days {
        write!(f, "\n{}", day.day)?;
        for exercise in &day.exercises {
            write!(
                f,
                "\n  {:<24} {} x {:<3} rest {}s",
                exercise.name, exercise.sets, exercise.reps, exercise.rest_seconds
            )?;
        }
    }
    Ok(())
}
