//! gen-fob-secret: emit a paired or unpaired fob header.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use ectf_secrets::cli::args::FobArgs;
use ectf_secrets::cli::print_fob_summary;
use ectf_secrets::config::Config;
use ectf_secrets::env::Env;
use ectf_secrets::generate::generate_fob_secret;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = FobArgs::parse();
    let request = args.validate().map_err(|e| anyhow::anyhow!("{e}"))?;

    let work_dir = std::env::current_dir().ok();
    let config = Config::load_or_default(work_dir.as_deref(), &Env::real());

    let outcome = generate_fob_secret(&request).context("failed to generate fob secrets")?;

    if !(args.quiet || config.quiet()) {
        print_fob_summary(&request, &outcome);
    }

    Ok(())
}
