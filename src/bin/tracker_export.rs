//! Export the spending tracker and plan projections as CSV
//!
//! Writes monthly_spending.csv and plan_projections.csv to the output directory.
//! Accepts config via environment variables:
//!   SPENDSENSE_DATA_DIR, SPENDSENSE_MONTHS_BACK, SPENDSENSE_HORIZON_YEARS

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use spendsense::projection::project_plans;
use spendsense::{Config, Store};

#[derive(Parser)]
#[command(name = "tracker_export", about = "Export spending and projections to CSV")]
struct Args {
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Months of spending history to export
    #[arg(long)]
    months: Option<u32>,

    /// Projection horizon in years
    #[arg(long)]
    years: Option<f64>,

    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Serialize)]
struct SpendingRow {
    month_start: NaiveDate,
    label: String,
    total: f64,
    impulse: f64,
}

#[derive(Serialize)]
struct ProjectionCsvRow<'a> {
    plan_id: String,
    plan_name: &'a str,
    month: u32,
    contributions: f64,
    interest: f64,
    balance: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut config = Config::from_env();
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    let months = args.months.unwrap_or(config.months_back);
    let years = args.years.unwrap_or(config.horizon_years);

    let start = Instant::now();
    let today = Local::now().date_naive();
    let store = Store::open_at(&config.data_dir, today)
        .with_context(|| format!("Failed to open data directory {}", config.data_dir.display()))?;
    fs::create_dir_all(&args.out_dir)?;

    let spending_path = args.out_dir.join("monthly_spending.csv");
    let mut writer = csv::Writer::from_path(&spending_path)
        .with_context(|| format!("Unable to create {}", spending_path.display()))?;
    for bucket in store.state().spending_buckets(months, today) {
        writer.serialize(SpendingRow {
            month_start: bucket.month_start,
            label: bucket.label,
            total: bucket.total,
            impulse: bucket.subset,
        })?;
    }
    writer.flush()?;
    println!("Wrote {} months to {}", months, spending_path.display());

    let projections = project_plans(&store.state().plans, years);
    let projection_path = args.out_dir.join("plan_projections.csv");
    let mut writer = csv::Writer::from_path(&projection_path)
        .with_context(|| format!("Unable to create {}", projection_path.display()))?;
    for projection in &projections {
        let plan_id = projection.plan_id.to_string();
        for row in &projection.rows {
            writer.serialize(ProjectionCsvRow {
                plan_id: plan_id.clone(),
                plan_name: &projection.plan_name,
                month: row.month,
                contributions: row.contributions_to_date,
                interest: row.interest_to_date,
                balance: row.balance,
            })?;
        }
    }
    writer.flush()?;
    println!("Wrote {} plan projections to {}", projections.len(), projection_path.display());

    println!("\nSummary ({} years):", years);
    for projection in &projections {
        let summary = projection.summary();
        println!("  {:<20} Final Balance: ${:.2}", projection.plan_name, summary.final_balance);
    }
    println!("Completed in {:?}", start.elapsed());

    Ok(())
}
