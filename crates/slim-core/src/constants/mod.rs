// ABOUTME: Application constants organized by domain
// ABOUTME: Physical energy conversions and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application-wide constants.
//!
//! Tunable coefficients (activity factors, protein ratio, deficit cap) live in
//! the planner configuration; only fixed physical conversions belong here.

/// Energy density of macronutrients and body fat
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARB: f64 = 4.0;

    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

    /// Default energy stored in one kilogram of body fat
    pub const DEFAULT_KCAL_PER_KG_FAT: f64 = 7700.0;
}

/// Calendar conversions
pub mod time {
    /// Days in a week
    pub const DAYS_PER_WEEK: u32 = 7;
}

/// Service names used in structured logging
pub mod service_names {
    /// Name of the planner service
    pub const SLIM_BITES: &str = "slim-bites";
}
