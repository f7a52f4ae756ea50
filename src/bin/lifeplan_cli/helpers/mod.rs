// ABOUTME: Re-exports helper modules for lifeplan-cli
// ABOUTME: Provides argument parsing and display formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod args;
pub mod display;
