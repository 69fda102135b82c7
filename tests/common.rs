// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging and the reference inputs used across suites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `slim_bites`

use slim_bites::form::PlanForm;
use slim_bites::models::{ActivityLevel, Gender, PlanInputs};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; tests are quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 80 kg, 175 cm, 30 y male, moderately active, losing 5 kg over 10 weeks
pub fn reference_inputs() -> PlanInputs {
    PlanInputs {
        weight_kg: 80.0,
        height_cm: 175.0,
        age_years: 30,
        gender: Gender::Male,
        activity_level: ActivityLevel::Moderate,
        desired_loss_kg: 5.0,
        duration_weeks: 10,
    }
}

/// The reference inputs as typed into the form
pub fn reference_form() -> PlanForm {
    PlanForm {
        weight: "80".into(),
        height: "175".into(),
        age: "30".into(),
        gender: "male".into(),
        activity_level: "moderate".into(),
        desired_loss: "5".into(),
        duration: "10".into(),
    }
}

/// Inputs with every field set explicitly
pub fn inputs(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    gender: Gender,
    activity_level: ActivityLevel,
    desired_loss_kg: f64,
    duration_weeks: u32,
) -> PlanInputs {
    PlanInputs {
        weight_kg,
        height_cm,
        age_years,
        gender,
        activity_level,
        desired_loss_kg,
        duration_weeks,
    }
}
