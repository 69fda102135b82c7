// ABOUTME: Nutrition plan calculator turning body metrics and a loss goal into daily targets
// ABOUTME: BMR, TDEE, capped calorie deficit, macronutrient split, and plan assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Plan Calculator
//!
//! A pure transformation from [`PlanInputs`] to [`Plan`]. Given the same
//! inputs and configuration it always produces an identical plan.
//!
//! 1. BMR with the Mifflin-St Jeor equation
//! 2. TDEE = BMR x activity factor
//! 3. Daily deficit = desired loss x 7700 kcal / days, capped at 25% of TDEE
//! 4. Daily calories = round(TDEE - deficit)
//! 5. Protein from body weight, fat as a share of calories, carbs as the remainder
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::nutrition::{
    ActivityFactorsConfig, BmrConfig, EnergyConfig, MacronutrientConfig, NutritionConfig,
};
use crate::intelligence::exercise_schedule::generate_exercise_schedule;
use crate::intelligence::meal_plan::generate_meal_plan;
use serde::{Deserialize, Serialize};
use slim_core::constants::energy::{KCAL_PER_GRAM_CARB, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use slim_core::constants::time::DAYS_PER_WEEK;
use slim_core::errors::AppResult;
use slim_core::models::{ActivityLevel, Gender, Plan, PlanInputs};
use tracing::{debug, warn};

/// Round half-way cases towards positive infinity
///
/// `2.5 -> 3`, `-2.5 -> -2`. Every rounded plan value goes through this, so
/// negative carbohydrate remainders round the same way positive ones do.
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Which plan variant to produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOptions {
    /// Attach the meal plan and weekly exercise schedule
    pub include_schedule_detail: bool,
}

impl PlanOptions {
    /// Daily targets only (5 workouts/week, no breakdown)
    #[must_use]
    pub const fn simple() -> Self {
        Self {
            include_schedule_detail: false,
        }
    }

    /// Daily targets plus meal plan and exercise schedule (3 workouts/week)
    #[must_use]
    pub const fn detailed() -> Self {
        Self {
            include_schedule_detail: true,
        }
    }
}

/// How the applied deficit was derived
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeficitBreakdown {
    /// Deficit needed to reach the goal in the requested time (kcal/day)
    pub requested: f64,
    /// Largest deficit allowed for this TDEE (kcal/day)
    pub max_allowed: f64,
    /// `min(requested, max_allowed)`
    pub applied: f64,
}

impl DeficitBreakdown {
    /// Whether the safety cap reduced the requested deficit
    #[must_use]
    pub fn is_capped(&self) -> bool {
        self.requested > self.max_allowed
    }
}

/// Daily macronutrient targets in whole grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Protein (grams)
    pub protein_g: i64,
    /// Carbohydrates (grams); may be negative
    pub carbs_g: i64,
    /// Fat (grams)
    pub fat_g: i64,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
#[must_use]
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    config.msj_weight_coef * weight_kg
        + config.msj_height_coef * height_cm
        + config.msj_age_coef * f64::from(age_years)
        + gender_constant
}

/// Calculate Total Daily Energy Expenditure (TDEE = BMR x activity factor)
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> f64 {
    bmr * config.factor_for(activity_level)
}

/// Size the daily deficit for a loss goal and cap it against TDEE
///
/// `requested = desired_loss_kg x kcal_per_kg_fat / (duration_weeks x 7)`
#[must_use]
pub fn calculate_safe_deficit(
    tdee: f64,
    desired_loss_kg: f64,
    duration_weeks: u32,
    config: &EnergyConfig,
) -> DeficitBreakdown {
    let total_deficit = desired_loss_kg * config.kcal_per_kg_fat;
    let requested = total_deficit / (f64::from(duration_weeks) * f64::from(DAYS_PER_WEEK));
    let max_allowed = tdee * config.max_deficit_fraction;

    DeficitBreakdown {
        requested,
        max_allowed,
        applied: requested.min(max_allowed),
    }
}

/// Split daily calories into protein, fat and carbohydrate grams
///
/// Protein depends only on body weight; fat is a fixed share of calories;
/// carbohydrates take whatever energy is left and are not clamped at zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn calculate_macros(
    weight_kg: f64,
    daily_calories: i64,
    config: &MacronutrientConfig,
) -> MacroTargets {
    let protein_g = round_half_up(weight_kg * config.protein_g_per_kg);
    let fat_g =
        round_half_up(daily_calories as f64 * config.fat_calorie_fraction / KCAL_PER_GRAM_FAT);

    let allocated =
        (protein_g as f64).mul_add(KCAL_PER_GRAM_PROTEIN, fat_g as f64 * KCAL_PER_GRAM_FAT);
    let carbs_g = round_half_up((daily_calories as f64 - allocated) / KCAL_PER_GRAM_CARB);

    MacroTargets {
        protein_g,
        carbs_g,
        fat_g,
    }
}

/// Daily water recommendation in liters, rounded to one decimal
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn calculate_water_intake(weight_kg: f64, liters_per_kg: f64) -> f64 {
    round_half_up(weight_kg * liters_per_kg * 10.0) as f64 / 10.0
}

/// Plan calculator bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct NutritionPlanner {
    config: NutritionConfig,
}

impl NutritionPlanner {
    /// Create a planner using the given coefficients
    #[must_use]
    pub const fn new(config: NutritionConfig) -> Self {
        Self { config }
    }

    /// Coefficients this planner computes with
    #[must_use]
    pub const fn config(&self) -> &NutritionConfig {
        &self.config
    }

    /// Compute a complete plan
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error if any input is non-finite or outside its domain.
    /// No partial plan is produced.
    pub fn compute(&self, inputs: &PlanInputs, options: PlanOptions) -> AppResult<Plan> {
        inputs.validate()?;
        let config = &self.config;

        let bmr = calculate_bmr(
            inputs.weight_kg,
            inputs.height_cm,
            inputs.age_years,
            inputs.gender,
            &config.bmr,
        );
        let tdee = calculate_tdee(bmr, inputs.activity_level, &config.activity_factors);
        let deficit = calculate_safe_deficit(
            tdee,
            inputs.desired_loss_kg,
            inputs.duration_weeks,
            &config.energy,
        );

        if deficit.is_capped() {
            warn!(
                requested = deficit.requested,
                max_allowed = deficit.max_allowed,
                "Requested deficit exceeds safety cap; applying cap"
            );
        }

        let daily_calories = round_half_up(tdee - deficit.applied);
        let macros = calculate_macros(inputs.weight_kg, daily_calories, &config.macronutrients);

        if macros.carbs_g < 0 {
            warn!(
                daily_calories,
                protein_g = macros.protein_g,
                fat_g = macros.fat_g,
                carbs_g = macros.carbs_g,
                "Protein and fat exceed the calorie target; carbohydrate remainder is negative"
            );
        }

        debug!(
            bmr,
            tdee,
            deficit = deficit.applied,
            daily_calories,
            detailed = options.include_schedule_detail,
            "Computed nutrition plan"
        );

        let lifestyle = &config.lifestyle;
        let (workout_frequency, meal_plan, exercise_schedule) = if options.include_schedule_detail {
            (
                lifestyle.detailed_workout_frequency,
                Some(generate_meal_plan(
                    daily_calories,
                    &macros,
                    lifestyle.meal_frequency,
                    &config.meal_plan,
                )),
                Some(generate_exercise_schedule()),
            )
        } else {
            (lifestyle.simple_workout_frequency, None, None)
        };

        Ok(Plan {
            bmr,
            tdee,
            daily_calories,
            protein_grams: macros.protein_g,
            carb_grams: macros.carbs_g,
            fat_grams: macros.fat_g,
            daily_calorie_deficit: round_half_up(deficit.applied),
            sleep_hours: lifestyle.sleep_hours,
            water_intake_liters: calculate_water_intake(
                inputs.weight_kg,
                lifestyle.water_liters_per_kg,
            ),
            meal_frequency: lifestyle.meal_frequency,
            workout_frequency,
            meal_plan,
            exercise_schedule,
        })
    }
}

/// Compute a plan with the default coefficients
///
/// # Errors
///
/// Returns an `InvalidInput` error if any input is non-finite or outside its domain
pub fn compute_plan(inputs: &PlanInputs, options: PlanOptions) -> AppResult<Plan> {
    NutritionPlanner::default().compute(inputs, options)
}
