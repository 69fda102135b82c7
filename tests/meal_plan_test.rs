// ABOUTME: Integration tests for meal plan generation
// ABOUTME: Meal naming, per-meal rounding, and post-workout redistribution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use slim_bites::config::nutrition::MealPlanConfig;
use slim_bites::intelligence::{compute_plan, generate_meal_plan, MacroTargets, PlanOptions};

mod common;
use common::reference_inputs;

const REFERENCE_MACROS: MacroTargets = MacroTargets {
    protein_g: 176,
    carbs_g: 229,
    fat_g: 60,
};

#[test]
fn test_four_meals_in_fixed_order() {
    let meals = generate_meal_plan(2161, &REFERENCE_MACROS, 4, &MealPlanConfig::default());
    let names: Vec<&str> = meals.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Breakfast", "Lunch", "Dinner", "Snack 1"]);
}

#[test]
fn test_reference_meal_values() {
    let meals = generate_meal_plan(2161, &REFERENCE_MACROS, 4, &MealPlanConfig::default());

    for meal in &meals {
        assert_eq!(meal.calories, 540);
        assert_eq!(meal.fat, 15);
    }
    let dinner = &meals[2];
    assert_eq!((dinner.protein, dinner.carbs), (49, 67));
    for index in [0, 1, 3] {
        assert_eq!((meals[index].protein, meals[index].carbs), (42, 54));
    }
}

#[test]
fn test_per_meal_rounding_is_not_reconciled() {
    let meals = generate_meal_plan(2161, &REFERENCE_MACROS, 4, &MealPlanConfig::default());

    let calories: i64 = meals.iter().map(|m| m.calories).sum();
    let protein: i64 = meals.iter().map(|m| m.protein).sum();
    let carbs: i64 = meals.iter().map(|m| m.carbs).sum();

    // 4 x 540 = 2160, one short of the daily target
    assert_eq!(calories, 2160);
    // 44 x 4 + 5 - 3 x 2
    assert_eq!(protein, 175);
    // 57 x 4 + 10 - 3 x 3
    assert_eq!(carbs, 229);
}

#[test]
fn test_five_meals_add_numbered_snacks() {
    let meals = generate_meal_plan(2500, &REFERENCE_MACROS, 5, &MealPlanConfig::default());
    assert_eq!(meals.len(), 5);
    assert_eq!(meals[3].name, "Snack 1");
    assert_eq!(meals[4].name, "Snack 2");

    // round(176 / 5) = 35, round(5 / 4) = 1
    assert_eq!(meals[2].protein, 40);
    assert_eq!(meals[0].protein, 34);
    // round(229 / 5) = 46, round(10 / 4) = 3
    assert_eq!(meals[2].carbs, 56);
    assert_eq!(meals[4].carbs, 43);
}

#[test]
fn test_custom_recovery_meal() {
    let config = MealPlanConfig {
        post_workout_meal_index: 1,
        ..MealPlanConfig::default()
    };
    let meals = generate_meal_plan(2161, &REFERENCE_MACROS, 4, &config);

    assert_eq!(meals[1].name, "Lunch");
    assert_eq!(meals[1].protein, 49);
    assert_eq!(meals[2].protein, 42);
}

#[test]
fn test_negative_carbs_flow_into_meals() {
    let macros = MacroTargets {
        protein_g: 440,
        carbs_g: -38,
        fat_g: 59,
    };
    let meals = generate_meal_plan(2139, &macros, 4, &MealPlanConfig::default());

    // round(-9.5) = -9
    assert_eq!(meals[2].carbs, -9 + 10);
    assert_eq!(meals[0].carbs, -9 - 3);
}

#[test]
fn test_detailed_plan_meals_match_generator() {
    let plan = compute_plan(&reference_inputs(), PlanOptions::detailed()).unwrap();
    let macros = MacroTargets {
        protein_g: plan.protein_grams,
        carbs_g: plan.carb_grams,
        fat_g: plan.fat_grams,
    };
    let expected = generate_meal_plan(
        plan.daily_calories,
        &macros,
        plan.meal_frequency,
        &MealPlanConfig::default(),
    );
    assert_eq!(plan.meal_plan.unwrap(), expected);
}
