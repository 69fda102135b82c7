// ABOUTME: Error handling re-exports from slim-core
// ABOUTME: Keeps crate::errors paths stable for the binary and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use slim_core::errors::*;
