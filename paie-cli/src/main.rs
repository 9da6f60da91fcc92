use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use paie_core::simulate_pay;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Run a payroll simulation from a JSON request document.
///
/// The request has the same shape as the web service's simulation endpoint
/// body:
///
///   {"employee_id": 1, "gross_salary": 20000, "overtime_hours": 10,
///    "overtime_rate": 1.5, "bonuses": 0, "allowances": 0, "deductions": 0,
///    "rates": {"cnss_employee": 4.29}}
///
/// Only employee_id and gross_salary are required; the rest defaults.
/// The computed breakdown is printed to stdout as JSON.
#[derive(Parser, Debug)]
#[command(name = "paie")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the JSON request file; reads stdin when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print the breakdown on a single line instead of pretty-printing
    #[arg(short, long, default_value_t = false)]
    compact: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so the JSON breakdown on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let args = Args::parse();

    let raw = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read request from stdin")?;
            buffer
        }
    };

    let body: serde_json::Value =
        serde_json::from_str(&raw).context("Request is not valid JSON")?;

    let result = simulate_pay(&body).context("Failed to compute simulation")?;
    info!(net_salary = %result.net_salary, "simulation computed");

    let rendered = if args.compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{rendered}");

    Ok(())
}
