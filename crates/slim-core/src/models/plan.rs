// ABOUTME: Computed nutrition and activity plan returned by the calculator
// ABOUTME: Plan, Meal, WorkoutDay, and Exercise definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::energy::{KCAL_PER_GRAM_CARB, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use serde::{Deserialize, Serialize};

/// Daily nutrition and activity plan
///
/// Produced whole by the calculator and never mutated afterwards; a new
/// calculation replaces the previous plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Basal Metabolic Rate (kcal/day, unrounded)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day, unrounded)
    pub tdee: f64,
    /// Target daily intake after the deficit (kcal)
    pub daily_calories: i64,
    /// Daily protein (grams)
    pub protein_grams: i64,
    /// Daily carbohydrates (grams); negative when protein and fat exceed the target
    pub carb_grams: i64,
    /// Daily fat (grams)
    pub fat_grams: i64,
    /// Applied daily deficit after the safety cap (kcal)
    pub daily_calorie_deficit: i64,
    /// Recommended sleep (hours/night)
    pub sleep_hours: u32,
    /// Recommended water intake (liters/day, one decimal)
    pub water_intake_liters: f64,
    /// Meals per day
    pub meal_frequency: u32,
    /// Workouts per week
    pub workout_frequency: u32,
    /// Per-meal breakdown (detailed plans only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_plan: Option<Vec<Meal>>,
    /// Weekly exercise schedule (detailed plans only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_schedule: Option<Vec<WorkoutDay>>,
}

impl Plan {
    /// Energy of the macronutrient split (protein×4 + carbs×4 + fat×9)
    #[must_use]
    pub fn macro_calories(&self) -> f64 {
        macro_energy(self.protein_grams, self.carb_grams, self.fat_grams)
    }

    /// Whether this plan carries the meal and exercise breakdown
    #[must_use]
    pub const fn is_detailed(&self) -> bool {
        self.meal_plan.is_some() && self.exercise_schedule.is_some()
    }
}

/// One meal of the daily meal plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    /// Breakfast, Lunch, Dinner, or "Snack N"
    pub name: String,
    /// Calories (kcal)
    pub calories: i64,
    /// Protein (grams)
    pub protein: i64,
    /// Carbohydrates (grams)
    pub carbs: i64,
    /// Fat (grams)
    pub fat: i64,
}

impl Meal {
    /// Energy of this meal's macronutrients
    #[must_use]
    pub fn macro_calories(&self) -> f64 {
        macro_energy(self.protein, self.carbs, self.fat)
    }
}

/// A training day in the weekly schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDay {
    /// Day of the week
    pub day: String,
    /// Exercises in order
    pub exercises: Vec<Exercise>,
}

/// A single prescribed exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Number of sets
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Rest between sets (seconds)
    pub rest_seconds: u32,
}

#[allow(clippy::cast_precision_loss)]
fn macro_energy(protein: i64, carbs: i64, fat: i64) -> f64 {
    (protein as f64).mul_add(
        KCAL_PER_GRAM_PROTEIN,
        (carbs as f64).mul_add(KCAL_PER_GRAM_CARB, fat as f64 * KCAL_PER_GRAM_FAT),
    )
}
