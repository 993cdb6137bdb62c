//! Clap argument types and validation for both generators.

use clap::Parser;
use std::path::PathBuf;

use crate::generate::{CarRequest, FobRequest};
use crate::models::CarId;

/// Generate the car secrets header and record the car's secret.
#[derive(Parser, Debug)]
#[command(name = "gen-car-secret", version = crate::constants::VERSION)]
pub struct CarArgs {
    /// Numeric identifier of the car (128-bit signed; the largest value,
    /// 2^127 - 1, has no secret).
    #[arg(long, allow_negative_numbers = true)]
    pub car_id: CarId,

    /// JSON secret store (created if missing).
    #[arg(long)]
    pub secret_file: PathBuf,

    /// Header file to write.
    #[arg(long)]
    pub header_file: PathBuf,

    /// Suppress the summary line on stderr.
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,
}

impl CarArgs {
    pub fn request(&self) -> CarRequest {
        CarRequest {
            car_id: self.car_id,
            secret_file: self.secret_file.clone(),
            header_file: self.header_file.clone(),
        }
    }
}

/// Generate the fob secrets header, paired with a car or blank.
#[derive(Parser, Debug)]
#[command(name = "gen-fob-secret", version = crate::constants::VERSION)]
pub struct FobArgs {
    /// Car the fob is paired with (ignored without --paired).
    #[arg(long, allow_negative_numbers = true, required_if_eq("paired", "true"))]
    pub car_id: Option<CarId>,

    /// Pairing PIN (ignored without --paired).
    #[arg(long, required_if_eq("paired", "true"))]
    pub pair_pin: Option<String>,

    /// JSON secret store written by gen-car-secret (ignored without --paired).
    #[arg(long, required_if_eq("paired", "true"))]
    pub secret_file: Option<PathBuf>,

    /// Header file to write.
    #[arg(long)]
    pub header_file: PathBuf,

    /// Build a fob that is already paired with --car-id.
    #[arg(long, default_value_t = false)]
    pub paired: bool,

    /// Suppress the summary line on stderr.
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,
}

impl FobArgs {
    /// Resolve the arguments into a request for the selected branch.
    ///
    /// Without `--paired`, the car id, PIN and store are dropped unread.
    pub fn validate(&self) -> Result<FobRequest, String> {
        let header_file = self.header_file.clone();
        if !self.paired {
            return Ok(FobRequest::Unpaired { header_file });
        }

        let car_id = self.car_id.ok_or("--paired requires --car-id")?;
        let pair_pin = self
            .pair_pin
            .clone()
            .ok_or("--paired requires --pair-pin")?;
        let secret_file = self
            .secret_file
            .clone()
            .ok_or("--paired requires --secret-file")?;

        Ok(FobRequest::Paired {
            car_id,
            pair_pin,
            secret_file,
            header_file,
        })
    }
}
