// ABOUTME: Body metrics and weight-loss goal supplied by the user
// ABOUTME: Gender, ActivityLevel, and validated PlanInputs definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender for the Mifflin-St Jeor constant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (+5 kcal constant)
    #[default]
    Male,
    /// Female (-161 kcal constant)
    Female,
}

impl Gender {
    /// Form label for this gender
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_field(
                "gender",
                format!("Unknown gender: {other:?} (expected male or female)"),
            )),
        }
    }
}

/// Activity level used to scale BMR into TDEE
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or a physical job
    VeryActive,
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Form label for this level
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "veryActive",
        }
    }

    /// Human-readable label as shown on the form
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::Light => "Lightly Active",
            Self::Moderate => "Moderately Active",
            Self::Active => "Active",
            Self::VeryActive => "Very Active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "veryactive" => Ok(Self::VeryActive),
            _ => Err(AppError::invalid_field(
                "activity_level",
                format!(
                    "Unknown activity level: {:?} (expected sedentary, light, moderate, active or veryActive)",
                    s.trim()
                ),
            )),
        }
    }
}

/// Validated inputs to the plan calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanInputs {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: u32,
    /// Gender for BMR calculation
    pub gender: Gender,
    /// Activity level for TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Kilograms the user wants to lose
    pub desired_loss_kg: f64,
    /// Weeks over which to lose it
    pub duration_weeks: u32,
}

impl PlanInputs {
    /// Check every field against its domain
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        require_positive("weight", self.weight_kg)?;
        require_positive("height", self.height_cm)?;

        if self.age_years == 0 {
            return Err(AppError::invalid_field("age", "age must be greater than 0"));
        }

        if !self.desired_loss_kg.is_finite() || self.desired_loss_kg < 0.0 {
            return Err(AppError::invalid_field(
                "desired_loss",
                format!(
                    "desired loss must be a finite number of at least 0, got {}",
                    self.desired_loss_kg
                ),
            ));
        }

        if self.duration_weeks == 0 {
            return Err(AppError::invalid_field(
                "duration",
                "duration must be at least 1 week",
            ));
        }

        Ok(())
    }
}

fn require_positive(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_field(
            field,
            format!("{field} must be a finite number greater than 0, got {value}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> PlanInputs {
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

    #[test]
    fn test_activity_level_accepts_form_and_snake_labels() {
        assert_eq!(
            "veryActive".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::VeryActive
        );
        assert_eq!(
            "very_active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::VeryActive
        );
        assert_eq!(" Light ".parse::<ActivityLevel>().unwrap(), ActivityLevel::Light);
        assert!("couch".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_activity_level_round_trips_through_label() {
        for level in ActivityLevel::ALL {
            assert_eq!(level.as_str().parse::<ActivityLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_gender_parse_is_case_insensitive() {
        assert_eq!("FEMALE".parse::<Gender>().unwrap(), Gender::Female);
        let err = "other".parse::<Gender>().unwrap_err();
        assert_eq!(err.field(), Some("gender"));
    }

    #[test]
    fn test_validate_accepts_zero_desired_loss() {
        let inputs = PlanInputs {
            desired_loss_kg: 0.0,
            ..reference()
        };
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_finite_weight() {
        let inputs = PlanInputs {
            weight_kg: f64::NAN,
            ..reference()
        };
        let err = inputs.validate().unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err.field(), Some("weight"));
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        let inputs = PlanInputs {
            duration_weeks: 0,
            ..reference()
        };
        assert_eq!(inputs.validate().unwrap_err().field(), Some("duration"));
    }
}
