// ABOUTME: Core types and constants for the Slim Bites nutrition planner
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Slim Core
//!
//! Foundation crate providing shared types and constants for the Slim Bites
//! planner. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Physical constants and service names
//! - **models**: Plan inputs and the computed plan

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (inputs, plan, meals, workouts)
pub mod models;
