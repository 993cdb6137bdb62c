//! Command-line surface shared by both generator binaries.
//!
//! Uses clap derive macros for argument definitions. Status lines go to
//! stderr so stdout stays clean inside build scripts.

pub mod args;

use std::io::Write;

use colored::Colorize;

use crate::generate::{CarOutcome, CarRequest, FobOutcome, FobRequest};

/// Print the summary of a car generator run to stderr.
pub fn print_car_summary(request: &CarRequest, outcome: &CarOutcome) {
    let action = if outcome.replaced { "replaced" } else { "stored" };
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(
        handle,
        "  {} car {} {} in {} {}",
        "✔".green().bold(),
        outcome.car_id.to_string().bold(),
        action,
        request.secret_file.display(),
        format!("({} car(s))", outcome.store_entries).dimmed(),
    );
    let _ = writeln!(
        handle,
        "  {} wrote {}",
        "✔".green().bold(),
        request.header_file.display(),
    );
    let _ = handle.flush();
}

/// Print the one-line summary of a fob generator run to stderr.
pub fn print_fob_summary(request: &FobRequest, outcome: &FobOutcome) {
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let label = match outcome {
        FobOutcome::Paired { car_id, .. } => format!("paired fob for car {}", car_id.to_string().bold()),
        FobOutcome::Unpaired => "unpaired fob".dimmed().to_string(),
    };
    let _ = writeln!(
        handle,
        "  {} wrote {} to {}",
        "✔".green().bold(),
        label,
        request.header_file().display(),
    );
    let _ = handle.flush();
}
