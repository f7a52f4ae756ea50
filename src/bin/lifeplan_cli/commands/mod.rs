// ABOUTME: Re-exports command modules for lifeplan-cli
// ABOUTME: Provides access to template listing, suggestion, and generation commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod generate;
pub mod suggest;
pub mod templates;
