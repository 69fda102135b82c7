// ABOUTME: Raw form fields and the caller-owned session holding the current plan
// ABOUTME: Parses untrusted strings into PlanInputs and replaces the plan atomically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Form state for the planner front end.
//!
//! [`PlanForm`] holds the seven fields exactly as typed. [`PlanSession`] owns
//! that form together with the last successfully computed plan; a failed
//! calculation leaves the previous plan in place.

use crate::intelligence::plan_calculator::{NutritionPlanner, PlanOptions};
use serde::{Deserialize, Serialize};
use serde_json::json;
use slim_core::errors::{AppError, AppResult};
use slim_core::models::{ActivityLevel, Gender, Plan, PlanInputs};
use tracing::{info, warn};

/// Raw, unvalidated form fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanForm {
    /// Weight (kg)
    pub weight: String,
    /// Height (cm)
    pub height: String,
    /// Age (years)
    pub age: String,
    /// `male` or `female`
    pub gender: String,
    /// `sedentary`, `light`, `moderate`, `active` or `veryActive`
    pub activity_level: String,
    /// Desired loss (kg)
    pub desired_loss: String,
    /// Duration (weeks)
    pub duration: String,
}

impl Default for PlanForm {
    fn default() -> Self {
        Self {
            weight: String::new(),
            height: String::new(),
            age: String::new(),
            gender: Gender::default().as_str().to_owned(),
            activity_level: ActivityLevel::default().as_str().to_owned(),
            desired_loss: String::new(),
            duration: String::new(),
        }
    }
}

impl PlanForm {
    /// Parse and validate every field
    ///
    /// Each field is trimmed and must parse completely: trailing text such as
    /// `80kg` is rejected, and age and duration must be whole numbers (`30.5`
    /// is rejected rather than truncated).
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error naming the first missing, unparseable,
    /// or out-of-domain field
    pub fn parse(&self) -> AppResult<PlanInputs> {
        let inputs = PlanInputs {
            weight_kg: parse_decimal("weight", &self.weight)?,
            height_cm: parse_decimal("height", &self.height)?,
            age_years: parse_whole("age", &self.age)?,
            gender: self.gender.parse()?,
            activity_level: self.activity_level.parse()?,
            desired_loss_kg: parse_decimal("desired_loss", &self.desired_loss)?,
            duration_weeks: parse_whole("duration", &self.duration)?,
        };
        inputs.validate()?;
        Ok(inputs)
    }
}

fn require_present<'a>(field: &str, raw: &'a str) -> AppResult<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(AppError::invalid_field(field, format!("{field} is required")))
    } else {
        Ok(trimmed)
    }
}

fn parse_decimal(field: &str, raw: &str) -> AppResult<f64> {
    let trimmed = require_present(field, raw)?;
    trimmed.parse::<f64>().map_err(|e| {
        AppError::invalid_field(field, format!("{field} must be a number, got {trimmed:?}"))
            .with_details(json!({ "raw": trimmed }))
            .with_source(e)
    })
}

fn parse_whole(field: &str, raw: &str) -> AppResult<u32> {
    let trimmed = require_present(field, raw)?;
    trimmed.parse::<u32>().map_err(|e| {
        AppError::invalid_field(
            field,
            format!("{field} must be a whole number, got {trimmed:?}"),
        )
        .with_details(json!({ "raw": trimmed }))
        .with_source(e)
    })
}

/// Caller-owned planner state: the form, the variant, and the current plan
#[derive(Debug, Clone, Default)]
pub struct PlanSession {
    form: PlanForm,
    options: PlanOptions,
    plan: Option<Plan>,
}

impl PlanSession {
    /// Empty session producing the given plan variant
    #[must_use]
    pub fn new(options: PlanOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Session pre-filled with form values
    #[must_use]
    pub const fn with_form(form: PlanForm, options: PlanOptions) -> Self {
        Self {
            form,
            options,
            plan: None,
        }
    }

    /// Current form values
    #[must_use]
    pub const fn form(&self) -> &PlanForm {
        &self.form
    }

    /// Mutable access for editing fields
    pub fn form_mut(&mut self) -> &mut PlanForm {
        &mut self.form
    }

    /// Plan variant produced by [`Self::calculate`]
    #[must_use]
    pub const fn options(&self) -> PlanOptions {
        self.options
    }

    /// Switch plan variant; takes effect on the next calculation
    pub fn set_options(&mut self, options: PlanOptions) {
        self.options = options;
    }

    /// Last successfully computed plan
    #[must_use]
    pub const fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    /// Parse the form and compute a new plan, replacing the current one
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error if the form does not parse; the current
    /// plan is left untouched
    pub fn calculate(&mut self, planner: &NutritionPlanner) -> AppResult<&Plan> {
        let computed = self
            .form
            .parse()
            .and_then(|inputs| planner.compute(&inputs, self.options));

        match computed {
            Ok(plan) => {
                info!(
                    daily_calories = plan.daily_calories,
                    detailed = plan.is_detailed(),
                    "Plan calculated"
                );
                Ok(&*self.plan.insert(plan))
            }
            Err(e) => {
                warn!(
                    field = e.field().unwrap_or("unknown"),
                    error = %e,
                    "Rejected plan input"
                );
                Err(e)
            }
        }
    }

    /// Restore the default form and discard the current plan
    pub fn reset(&mut self) {
        self.form = PlanForm::default();
        self.plan = None;
    }
}
