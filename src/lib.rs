// ABOUTME: Main library entry point for the Slim Bites weight-loss planner
// ABOUTME: Computes daily calorie, macronutrient, and lifestyle targets from body metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Slim Bites
//!
//! A weight-loss planner. Given weight, height, age, sex, activity level and
//! a loss goal, it produces daily calorie and macronutrient targets plus
//! sleep, water, meal and workout recommendations. The detailed variant adds
//! a per-meal split and a weekly exercise schedule.
//!
//! ## Architecture
//!
//! - **Models** (`slim-core`): inputs, plan, meals, workouts, errors
//! - **Intelligence**: the pure calculation pipeline
//! - **Form**: raw field parsing and the caller-owned session
//! - **Formatters**: text and JSON rendering
//! - **Config**: coefficients with `SLIM_BITES_*` overrides
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use slim_bites::form::{PlanForm, PlanSession};
//! use slim_bites::intelligence::{NutritionPlanner, PlanOptions};
//!
//! let form = PlanForm {
//!     weight: "80".into(),
//!     height: "175".into(),
//!     age: "30".into(),
//!     desired_loss: "5".into(),
//!     duration: "10".into(),
//!     ..PlanForm::default()
//! };
//! let mut session = PlanSession::with_form(form, PlanOptions::simple());
//! if let Ok(plan) = session.calculate(&NutritionPlanner::default()) {
//!     println!("Calories = {}", plan.daily_calories);
//! }
//! ```

/// Planner configuration and environment overrides
pub mod config;

/// Unified error handling (re-exported from `slim-core`)
pub mod errors;

/// Raw form fields and plan session state
pub mod form;

/// Text and JSON output
pub mod formatters;

/// Plan calculation pipeline
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Domain models (re-exported from `slim-core`)
pub mod models {
    pub use slim_core::models::*;
}

/// Constants (re-exported from `slim-core`)
pub mod constants {
    pub use slim_core::constants::*;
}
