// ABOUTME: Lifeplan CLI - command-line front end for the goal-template engine
// ABOUTME: Lists templates, suggests parameters, and generates goals as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # List every template with its required parameters
//! lifeplan-cli templates
//!
//! # Suggested parameters for a bulking goal at 82 kg
//! lifeplan-cli suggest fitness.bulking --weight 82
//!
//! # Generate a running goal using suggested parameters, overriding the distance
//! lifeplan-cli generate fitness.runningGoal --start 2025-01-01 --end 2025-03-31 \
//!     --suggest --param distance=10K
//! ```

mod commands;
mod helpers;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use lifeplan::EngineConfig;
use lifeplan_core::models::{Gender, ParamValue, UserMetrics};
use tracing::debug;

use helpers::args::parse_param;

#[derive(Parser)]
#[command(
    name = "lifeplan-cli",
    about = "Goal template engine CLI",
    long_about = "List goal templates, suggest parameters from body metrics, and generate dated goals with milestones and recurring tasks."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List available goal templates
    Templates {
        /// Print summaries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Suggest parameters for a template
    Suggest {
        /// Template id (e.g. `fitness.bulking`)
        template_id: String,

        #[command(flatten)]
        metrics: MetricsArgs,
    },

    /// Generate a goal from a template
    Generate {
        /// Template id (e.g. `fitness.runningGoal`)
        template_id: String,

        /// Goal start date (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Goal target date (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,

        /// Template parameter as key=value (repeatable)
        #[arg(long = "param", value_parser = parse_param)]
        params: Vec<(String, ParamValue)>,

        /// Seed parameters from the suggestion engine before applying --param
        #[arg(long)]
        suggest: bool,

        #[command(flatten)]
        metrics: MetricsArgs,
    },
}

/// Body metrics fed to the suggestion engine
#[derive(Args)]
struct MetricsArgs {
    /// Body weight in kg
    #[arg(long)]
    weight: Option<f64>,

    /// Height in cm
    #[arg(long)]
    height: Option<f64>,

    /// Body fat percentage
    #[arg(long)]
    body_fat: Option<f64>,

    /// Age in years
    #[arg(long)]
    age: Option<u32>,

    /// Gender (male, female, other)
    #[arg(long)]
    gender: Option<Gender>,
}

impl From<MetricsArgs> for UserMetrics {
    fn from(args: MetricsArgs) -> Self {
        Self {
            weight: args.weight,
            height: args.height,
            body_fat: args.body_fat,
            age: args.age,
            gender: args.gender,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = EngineConfig::from_env();
    if cli.verbose {
        config.logging = config.logging.with_level("debug");
    }
    config.logging.init()?;
    config.validate().context("Invalid engine configuration")?;
    debug!("Lifeplan CLI");

    match cli.command {
        Command::Templates { json } => commands::templates::list(json)?,
        Command::Suggest {
            template_id,
            metrics,
        } => commands::suggest::run(&config, &template_id, &metrics.into())?,
        Command::Generate {
            template_id,
            start,
            end,
            params,
            suggest,
            metrics,
        } => {
            let request = commands::generate::GenerateRequest {
                template_id,
                start,
                end,
                params,
                suggest,
                metrics: metrics.into(),
            };
            commands::generate::run(&config, request)?;
        }
    }

    Ok(())
}
