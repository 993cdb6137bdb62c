//! Fob secret generation: paired fobs copy the car's secret, unpaired fobs
//! get placeholders.

use std::path::PathBuf;

use crate::generate::GenerateError;
use crate::header::{FobHeader, write_header};
use crate::models::CarId;
use crate::store::SecretStore;

/// Inputs for one fob generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FobRequest {
    /// Fob shipped already paired with `car_id`.
    Paired {
        car_id: CarId,
        pair_pin: String,
        secret_file: PathBuf,
        header_file: PathBuf,
    },
    /// Blank fob; only the header is written.
    Unpaired { header_file: PathBuf },
}

impl FobRequest {
    pub fn header_file(&self) -> &std::path::Path {
        match self {
            FobRequest::Paired { header_file, .. } | FobRequest::Unpaired { header_file } => {
                header_file
            }
        }
    }
}

/// What a fob generator run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FobOutcome {
    Paired { car_id: CarId },
    Unpaired,
}

/// Write the fob header for `request`.
///
/// The store is only read, and only for a paired fob. A missing store or a
/// car with no recorded secret is an error.
pub fn generate_fob_secret(request: &FobRequest) -> Result<FobOutcome, GenerateError> {
    match request {
        FobRequest::Paired {
            car_id,
            pair_pin,
            secret_file,
            header_file,
        } => {
            let store = SecretStore::open_existing(secret_file)?;
            let car_secret = store.lookup(*car_id)?;

            let header = FobHeader::paired(*car_id, pair_pin.as_str(), car_secret);
            write_header(header_file, &header)?;

            Ok(FobOutcome::Paired { car_id: *car_id })
        }
        FobRequest::Unpaired { header_file } => {
            write_header(header_file, &FobHeader::unpaired())?;
            Ok(FobOutcome::Unpaired)
        }
    }
}
