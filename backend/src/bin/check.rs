//! One-shot conditions check.
//!
//! ```bash
//! raybats-check              # configured fallback observer
//! raybats-check 28.76 -17.89 # explicit latitude and longitude
//! ```
//!
//! Prints the status line, the summary and the full JSON report.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use tracing_subscriber::EnvFilter;

use raybats::config::RaybatsConfig;
use raybats::models::Observer;
use raybats::services::ConditionsService;

fn parse_observer(args: &[String], fallback: Observer) -> Result<Observer> {
    match args {
        [] => Ok(fallback),
        [lat, lon] => {
            let lat: f64 = lat
                .parse()
                .with_context(|| format!("latitude {:?} is not a number", lat))?;
            let lon: f64 = lon
                .parse()
                .with_context(|| format!("longitude {:?} is not a number", lon))?;
            Ok(Observer::new(lat, lon)?)
        }
        _ => bail!("usage: raybats-check [LAT LON]"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RaybatsConfig::load().context("Failed to load configuration")?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let observer = parse_observer(&args, config.observer)?;

    let service = ConditionsService::from_config(&config)?;
    let report = service.evaluate(&observer, Utc::now()).await?;

    println!("{} (score {:.0})", report.status, report.score);
    println!("{}", report.summary);
    println!();
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
