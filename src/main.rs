use anyhow::{Context, Result};
use clap::Parser;
use rfm_stats::{read_csv, PipelineConfig, RfmOutput, RfmPipeline};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Args, OutputFormat};

fn print_customers(output: &RfmOutput) {
    println!(
        "{:<12} {:>8} {:>10} {:>14} {:>3} {:>3} {:>3} {:>5}  {:<11} Segment",
        "CustomerID", "Recency", "Frequency", "MonetaryValue", "R", "F", "M", "RFM", "Value"
    );
    for c in &output.customers {
        println!(
            "{:<12} {:>8} {:>10} {:>14.2} {:>3} {:>3} {:>3} {:>5}  {:<11} {}",
            c.customer_id().as_str(),
            c.metrics.recency,
            c.metrics.frequency,
            c.metrics.monetary,
            c.scores.recency_score(),
            c.scores.frequency_score(),
            c.scores.monetary_score(),
            c.scores.rfm_score(),
            c.value_segment.name(),
            c.label
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let now = args.reference_time()?;

    let config = match &args.config {
        Some(path) => PipelineConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    let pipeline = RfmPipeline::new(config)?;

    let records = read_csv(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    info!(rows = records.len(), %now, "loaded transactions");

    let output = pipeline.run(&records, now).context("RFM analysis failed")?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Text => {
            print_customers(&output);
            println!();
            print!("{}", output.report);
        }
    }
    Ok(())
}
