// ABOUTME: Core data models for the nutrition planner
// ABOUTME: Re-exports user inputs and computed plan types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Computed plan, meals, and workouts
pub mod plan;
/// User body metrics and goal
pub mod profile;

pub use plan::{Exercise, Meal, Plan, WorkoutDay};
pub use profile::{ActivityLevel, Gender, PlanInputs};
