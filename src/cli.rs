//! Command-line interface definitions and argument parsing

use anyhow::Context;
use chrono::{NaiveDateTime, Utc};
use clap::{Parser, ValueEnum};
use rfm_core::parse_purchase_date;
use std::path::PathBuf;

/// Score and segment customers from a CSV of purchase transactions
#[derive(Parser, Debug)]
#[command(name = "rfm-stats", author, version, about, long_about = None)]
pub struct Args {
    /// Path to the transactions CSV file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Reference time for recency, e.g. 2023-06-30 or 2023-06-30T12:00:00Z
    /// (defaults to the current UTC time)
    #[arg(short, long)]
    pub now: Option<String>,

    /// Path to a JSON pipeline configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Args {
    /// The run's reference time, captured once
    pub fn reference_time(&self) -> anyhow::Result<NaiveDateTime> {
        match &self.now {
            Some(now) => parse_purchase_date(now)
                .with_context(|| format!("invalid --now value '{now}'")),
            None => Ok(Utc::now().naive_utc()),
        }
    }
}
