// ABOUTME: Configuration module for planner coefficients and lifestyle targets
// ABOUTME: Handles defaults, environment overrides, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Slim Bites planner
//!
//! - **Nutrition**: BMR coefficients, activity factors, deficit cap, macro split
//! - **Plan config**: Process-wide container loaded from `SLIM_BITES_*` variables
//! - **Error**: Validation and parse failures

/// Configuration error types
pub mod error;
/// Nutrition coefficients grouped by calculation step
pub mod nutrition;
/// Environment-loaded configuration container
pub mod plan_config;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, EnergyConfig, LifestyleConfig, MacronutrientConfig,
    MealPlanConfig, NutritionConfig,
};
pub use plan_config::{env_vars, PlanConfig};
