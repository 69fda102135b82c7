// ABOUTME: Nutrition configuration for energy, macronutrient, and lifestyle targets
// ABOUTME: Configures BMR coefficients, activity factors, deficit cap, and meal plan adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Plan Configuration
//!
//! Every coefficient the planner uses, grouped by the step of the calculation
//! that consumes it.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};
use slim_core::constants::energy::DEFAULT_KCAL_PER_KG_FAT;
use slim_core::models::ActivityLevel;

/// Fewest meals per day: Breakfast, Lunch and Dinner
pub const MIN_MEAL_FREQUENCY: u32 = 3;

/// Most meals per day
pub const MAX_MEAL_FREQUENCY: u32 = 8;

/// Hours in a day
const MAX_SLEEP_HOURS: u32 = 24;

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Lightly active: 1.375
    pub light: f64,
    /// Moderately active: 1.55
    pub moderate: f64,
    /// Active: 1.725
    pub active: f64,
    /// Very active: 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }

    /// Validate factors are finite, within 1.0..=2.5, and strictly ascending
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a factor is out of range or out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        let in_range = ActivityLevel::ALL.iter().all(|level| {
            let factor = self.factor_for(*level);
            factor.is_finite() && (1.0..=2.5).contains(&factor)
        });
        if !in_range {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        let ascending = ActivityLevel::ALL
            .windows(2)
            .all(|pair| self.factor_for(pair[0]) < self.factor_for(pair[1]));
        if !ascending {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }
        Ok(())
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

/// Energy balance configuration for the weight-loss deficit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// Energy released by losing one kilogram of body fat (7700 kcal)
    pub kcal_per_kg_fat: f64,
    /// Largest share of TDEE the daily deficit may remove (0.25)
    pub max_deficit_fraction: f64,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            kcal_per_kg_fat: DEFAULT_KCAL_PER_KG_FAT,
            max_deficit_fraction: 0.25,
        }
    }
}

/// Macronutrient split configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Protein per kilogram of body weight (2.2 g/kg)
    pub protein_g_per_kg: f64,
    /// Share of daily calories from fat (0.25)
    pub fat_calorie_fraction: f64,
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_g_per_kg: 2.2,
            fat_calorie_fraction: 0.25,
        }
    }
}

/// Fixed lifestyle recommendations attached to every plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleConfig {
    /// Sleep per night (hours)
    pub sleep_hours: u32,
    /// Water per kilogram of body weight (0.033 L/kg)
    pub water_liters_per_kg: f64,
    /// Meals per day
    pub meal_frequency: u32,
    /// Workouts per week for plans without a schedule
    pub simple_workout_frequency: u32,
    /// Workouts per week for plans with the detailed schedule
    pub detailed_workout_frequency: u32,
}

impl Default for LifestyleConfig {
    fn default() -> Self {
        Self {
            sleep_hours: 8,
            water_liters_per_kg: 0.033,
            meal_frequency: 4,
            simple_workout_frequency: 5,
            detailed_workout_frequency: 3,
        }
    }
}

/// Post-workout redistribution applied to the meal plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlanConfig {
    /// Index of the recovery meal (Dinner)
    pub post_workout_meal_index: usize,
    /// Protein moved into the recovery meal (grams)
    pub post_workout_protein_bonus_g: i64,
    /// Carbohydrates moved into the recovery meal (grams)
    pub post_workout_carb_bonus_g: i64,
}

impl Default for MealPlanConfig {
    fn default() -> Self {
        Self {
            post_workout_meal_index: 2,
            post_workout_protein_bonus_g: 5,
            post_workout_carb_bonus_g: 10,
        }
    }
}

/// Complete nutrition configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Deficit sizing and safety cap
    pub energy: EnergyConfig,
    /// Macronutrient split
    pub macronutrients: MacronutrientConfig,
    /// Sleep, water, meal and workout frequencies
    pub lifestyle: LifestyleConfig,
    /// Post-workout meal adjustment
    pub meal_plan: MealPlanConfig,
}

impl NutritionConfig {
    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bmr = &self.bmr;
        require_positive(
            bmr.msj_weight_coef,
            "BMR weight coefficient must be a finite number greater than 0",
        )?;
        require_positive(
            bmr.msj_height_coef,
            "BMR height coefficient must be a finite number greater than 0",
        )?;
        let offsets_finite = [
            bmr.msj_age_coef,
            bmr.msj_male_constant,
            bmr.msj_female_constant,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !offsets_finite {
            return Err(ConfigError::ValueOutOfRange(
                "BMR age coefficient and gender constants must be finite",
            ));
        }

        self.activity_factors.validate()?;

        require_positive(
            self.energy.kcal_per_kg_fat,
            "kcal_per_kg_fat must be a finite number greater than 0",
        )?;
        require_fraction(
            self.energy.max_deficit_fraction,
            "max_deficit_fraction must be in (0, 1]",
        )?;

        require_positive(
            self.macronutrients.protein_g_per_kg,
            "protein_g_per_kg must be a finite number greater than 0",
        )?;
        require_fraction(
            self.macronutrients.fat_calorie_fraction,
            "fat_calorie_fraction must be in (0, 1]",
        )?;

        let lifestyle = &self.lifestyle;
        require_positive(
            lifestyle.water_liters_per_kg,
            "water_liters_per_kg must be a finite number greater than 0",
        )?;
        if lifestyle.sleep_hours > MAX_SLEEP_HOURS {
            return Err(ConfigError::ValueOutOfRange("sleep_hours must be at most 24"));
        }
        // Breakfast, Lunch and Dinner are always present, and the
        // redistribution divides by meal_frequency - 1.
        if !(MIN_MEAL_FREQUENCY..=MAX_MEAL_FREQUENCY).contains(&lifestyle.meal_frequency) {
            return Err(ConfigError::ValueOutOfRange(
                "meal_frequency must be between 3 and 8",
            ));
        }
        if self.meal_plan.post_workout_meal_index >= lifestyle.meal_frequency as usize {
            return Err(ConfigError::InvalidRange(
                "post_workout_meal_index must be < meal_frequency",
            ));
        }

        Ok(())
    }
}

/// `Ok` when `value` is finite and strictly positive
fn require_positive(value: f64, message: &'static str) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange(message))
    }
}

/// `Ok` when `value` lies in (0, 1]
fn require_fraction(value: f64, message: &'static str) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange(message))
    }
}
