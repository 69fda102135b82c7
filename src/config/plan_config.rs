// ABOUTME: Planner configuration container with environment overrides and validation
// ABOUTME: Provides the process-wide configuration singleton used by the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner Configuration
//!
//! Environment-only configuration: defaults, then `SLIM_BITES_*` overrides,
//! then validation.

use crate::config::error::ConfigError;
use crate::config::nutrition::NutritionConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Global configuration singleton
static PLAN_CONFIG: OnceLock<PlanConfig> = OnceLock::new();

/// Environment variable names recognised by [`PlanConfig::load`]
pub mod env_vars {
    /// kcal released per kilogram of fat lost
    pub const KCAL_PER_KG_FAT: &str = "SLIM_BITES_KCAL_PER_KG_FAT";
    /// Deficit cap as a fraction of TDEE
    pub const MAX_DEFICIT_FRACTION: &str = "SLIM_BITES_MAX_DEFICIT_FRACTION";
    /// Protein grams per kilogram of body weight
    pub const PROTEIN_G_PER_KG: &str = "SLIM_BITES_PROTEIN_G_PER_KG";
    /// Share of calories from fat
    pub const FAT_CALORIE_FRACTION: &str = "SLIM_BITES_FAT_CALORIE_FRACTION";
    /// Recommended sleep hours
    pub const SLEEP_HOURS: &str = "SLIM_BITES_SLEEP_HOURS";
    /// Water liters per kilogram of body weight
    pub const WATER_LITERS_PER_KG: &str = "SLIM_BITES_WATER_LITERS_PER_KG";
    /// Meals per day
    pub const MEAL_FREQUENCY: &str = "SLIM_BITES_MEAL_FREQUENCY";

    /// Every override, in application order
    pub const ALL: [&str; 7] = [
        KCAL_PER_KG_FAT,
        MAX_DEFICIT_FRACTION,
        PROTEIN_G_PER_KG,
        FAT_CALORIE_FRACTION,
        SLEEP_HOURS,
        WATER_LITERS_PER_KG,
        MEAL_FREQUENCY,
    ];
}

/// Main planner configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Nutrition coefficients and lifestyle targets
    pub nutrition: NutritionConfig,
}

impl PlanConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLAN_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load plan config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(config = ?config, "Plan configuration loaded");
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val:?}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(ConfigError::EnvVar(e)),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let nutrition = &mut self.nutrition;

        Self::apply_env_var(env_vars::KCAL_PER_KG_FAT, &mut nutrition.energy.kcal_per_kg_fat)?;
        Self::apply_env_var(
            env_vars::MAX_DEFICIT_FRACTION,
            &mut nutrition.energy.max_deficit_fraction,
        )?;
        Self::apply_env_var(
            env_vars::PROTEIN_G_PER_KG,
            &mut nutrition.macronutrients.protein_g_per_kg,
        )?;
        Self::apply_env_var(
            env_vars::FAT_CALORIE_FRACTION,
            &mut nutrition.macronutrients.fat_calorie_fraction,
        )?;
        Self::apply_env_var(env_vars::SLEEP_HOURS, &mut nutrition.lifestyle.sleep_hours)?;
        Self::apply_env_var(
            env_vars::WATER_LITERS_PER_KG,
            &mut nutrition.lifestyle.water_liters_per_kg,
        )?;
        Self::apply_env_var(env_vars::MEAL_FREQUENCY, &mut nutrition.lifestyle.meal_frequency)?;

        Ok(self)
    }
}
