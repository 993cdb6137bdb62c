//! gen-car-secret: record a car's secret and emit its header.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use ectf_secrets::cli::args::CarArgs;
use ectf_secrets::cli::print_car_summary;
use ectf_secrets::config::Config;
use ectf_secrets::env::Env;
use ectf_secrets::generate::generate_car_secret;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CarArgs::parse();

    let work_dir = std::env::current_dir().ok();
    let config = Config::load_or_default(work_dir.as_deref(), &Env::real());

    let request = args.request();
    let outcome = generate_car_secret(&request)
        .with_context(|| format!("failed to generate secrets for car {}", request.car_id))?;

    if !(args.quiet || config.quiet()) {
        print_car_summary(&request, &outcome);
    }

    Ok(())
}
