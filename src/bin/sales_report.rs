//! sales-report: Sales metrics dashboard
//!
//! Loads the four e-commerce datasets, computes the dashboard metrics, and
//! prints the report to stdout.
//!
//! ## Configuration
//! - First argument (or `--config <path>`): YAML config file (optional)
//! - SALES_METRICS_CONFIG: YAML config file (optional)
//! - SALES_METRICS__DATA__DIR: directory holding the source CSV files
//! - SALES_METRICS__REPORT__LOCALE: `en` or `id`
//! - SALES_METRICS__REPORT__FORMAT: `text` or `json`
//! - SALES_METRICS_LOG: tracing filter (default: info)

use tracing::{error, info};

use sales_metrics::config::Config;
use sales_metrics::utils::bootstrap::{init_tracing, parse_config_path};
use sales_metrics::{pipeline, report};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config_path = parse_config_path();
    let config = Config::load(config_path.as_deref()).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!("Starting sales-report");

    let sales = pipeline::run(&config.data).map_err(|e| {
        error!("Pipeline failed: {}", e);
        e
    })?;

    let rendered = report::render(&sales, &config.report)?;
    println!("{}", rendered);

    Ok(())
}
