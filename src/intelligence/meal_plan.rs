// ABOUTME: Splits daily calorie and macronutrient targets into named meals
// ABOUTME: Applies the post-workout protein and carbohydrate shift to the recovery meal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal plan generation.
//!
//! Each daily total is divided evenly and rounded per meal. The rounding is
//! not reconciled afterwards, so meal sums can drift a few units from the
//! daily targets.

use crate::config::nutrition::MealPlanConfig;
use crate::intelligence::plan_calculator::{round_half_up, MacroTargets};
use slim_core::models::Meal;

/// Display name for the meal at `index`
///
/// Breakfast, Lunch, Dinner, then "Snack 1", "Snack 2", ...
#[must_use]
pub fn meal_name(index: usize) -> String {
    match index {
        0 => "Breakfast".to_owned(),
        1 => "Lunch".to_owned(),
        2 => "Dinner".to_owned(),
        n => format!("Snack {}", n - 2),
    }
}

#[allow(clippy::cast_precision_loss)]
fn per_meal(total: i64, meals: u32) -> i64 {
    round_half_up(total as f64 / f64::from(meals))
}

/// Build the daily meal plan
///
/// `meal_frequency` must be at least 2; configuration validation guarantees 3+.
#[must_use]
pub fn generate_meal_plan(
    daily_calories: i64,
    macros: &MacroTargets,
    meal_frequency: u32,
    config: &MealPlanConfig,
) -> Vec<Meal> {
    let calories = per_meal(daily_calories, meal_frequency);
    let protein = per_meal(macros.protein_g, meal_frequency);
    let carbs = per_meal(macros.carbs_g, meal_frequency);
    let fat = per_meal(macros.fat_g, meal_frequency);

    // Other meals give up their share of the recovery bonus.
    let other_meals = meal_frequency - 1;
    let protein_cut = per_meal(config.post_workout_protein_bonus_g, other_meals);
    let carb_cut = per_meal(config.post_workout_carb_bonus_g, other_meals);

    (0..meal_frequency as usize)
        .map(|index| {
            let (protein_shift, carb_shift) = if index == config.post_workout_meal_index {
                (
                    config.post_workout_protein_bonus_g,
                    config.post_workout_carb_bonus_g,
                )
            } else {
                (-protein_cut, -carb_cut)
            };

            Meal {
                name: meal_name(index),
                calories,
                protein: protein + protein_shift,
                carbs: carbs + carb_shift,
                fat,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_names_by_position() {
        assert_eq!(meal_name(0), "Breakfast");
        assert_eq!(meal_name(1), "Lunch");
        assert_eq!(meal_name(2), "Dinner");
        assert_eq!(meal_name(3), "Snack 1");
        assert_eq!(meal_name(5), "Snack 3");
    }

    #[test]
    fn test_recovery_meal_receives_bonus() {
        let macros = MacroTargets {
            protein_g: 176,
            carbs_g: 229,
            fat_g: 60,
        };
        let meals = generate_meal_plan(2161, &macros, 4, &MealPlanConfig::default());

        let dinner = &meals[2];
        assert_eq!(dinner.name, "Dinner");
        assert_eq!(dinner.protein, 44 + 5);
        assert_eq!(dinner.carbs, 57 + 10);

        // round(5 / 3) = 2, round(10 / 3) = 3
        for meal in meals.iter().filter(|m| m.name != "Dinner") {
            assert_eq!(meal.protein, 42);
            assert_eq!(meal.carbs, 54);
            assert_eq!(meal.calories, 540);
            assert_eq!(meal.fat, 15);
        }
    }
}
