// ABOUTME: Planning engine turning body metrics and a loss goal into a daily plan
// ABOUTME: Calculator, meal plan split, and fixed workout schedule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure, synchronous planning logic. Nothing here performs I/O.

/// Fixed weekly workout template
pub mod exercise_schedule;
/// Per-meal split with post-workout adjustment
pub mod meal_plan;
/// BMR, TDEE, deficit, macros, and plan assembly
pub mod plan_calculator;

pub use exercise_schedule::generate_exercise_schedule;
pub use meal_plan::{generate_meal_plan, meal_name};
pub use plan_calculator::{
    calculate_bmr, calculate_macros, calculate_safe_deficit, calculate_tdee,
    calculate_water_intake, compute_plan, round_half_up, DeficitBreakdown, MacroTargets,
    NutritionPlanner, PlanOptions,
};
