// ABOUTME: Fixed three-day full-body workout template attached to detailed plans
// ABOUTME: Static reference data, identical for every user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use slim_core::models::{Exercise, WorkoutDay};

struct ExerciseTemplate {
    name: &'static str,
    sets: u32,
    reps: u32,
    rest_seconds: u32,
}

struct DayTemplate {
    day: &'static str,
    exercises: [ExerciseTemplate; 3],
}

const fn exercise(
    name: &'static str,
    sets: u32,
    reps: u32,
    rest_seconds: u32,
) -> ExerciseTemplate {
    ExerciseTemplate {
        name,
        sets,
        reps,
        rest_seconds,
    }
}

/// Training days: Monday, Wednesday, Friday
const WEEKLY_TEMPLATE: [DayTemplate; 3] = [
    DayTemplate {
        day: "Monday",
        exercises: [
            exercise("Goblet Squat", 3, 12, 60),
            exercise("Push-Up", 3, 10, 60),
            exercise("Dumbbell Row", 3, 12, 60),
        ],
    },
    DayTemplate {
        day: "Wednesday",
        exercises: [
            exercise("Walking Lunge", 3, 10, 60),
            exercise("Dumbbell Shoulder Press", 3, 10, 60),
            exercise("Glute Bridge", 3, 15, 45),
        ],
    },
    DayTemplate {
        day: "Friday",
        exercises: [
            exercise("Romanian Deadlift", 3, 10, 90),
            exercise("Incline Push-Up", 3, 12, 45),
            exercise("Mountain Climber", 3, 20, 30),
        ],
    },
];

/// Build the weekly exercise schedule
#[must_use]
pub fn generate_exercise_schedule() -> Vec<WorkoutDay> {
    WEEKLY_TEMPLATE
        .iter()
        .map(|template| WorkoutDay {
            day: template.day.to_owned(),
            exercises: template
                .exercises
                .iter()
                .map(|ex| Exercise {
                    name: ex.name.to_owned(),
                    sets: ex.sets,
                    reps: ex.reps,
                    rest_seconds: ex.rest_seconds,
                })
                .collect(),
        })
        .collect()
}
