// ABOUTME: Core types and constants for the lifeplan goal-template engine
// ABOUTME: Foundation crate with error handling, goal data models, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Lifeplan Core
//!
//! Foundation crate providing shared types and constants for the lifeplan
//! goal-template engine. Nothing in here knows about templates or dates
//! arithmetic; it only defines the shapes that flow between the engine and
//! its callers.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: Generated goal instances, milestones, tasks, template parameters, user metrics
//! - **constants**: Recurrence intervals, suggestion defaults, and service names

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Plain data models produced and consumed by the engine
pub mod models;
