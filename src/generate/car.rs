//! Car secret generation: derive, persist, emit `car_secrets.h`.

use std::path::PathBuf;

use crate::generate::GenerateError;
use crate::header::{CarHeader, write_header};
use crate::models::CarId;
use crate::store::SecretStore;

/// Inputs for one car generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarRequest {
    pub car_id: CarId,
    pub secret_file: PathBuf,
    pub header_file: PathBuf,
}

/// What a car generator run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarOutcome {
    pub car_id: CarId,
    /// `true` if the store already held a secret for this car.
    pub replaced: bool,
    /// Number of cars in the store after the run.
    pub store_entries: usize,
}

/// Derive the car's secret, record it in the store and write the car header.
///
/// The store is saved before the header is written, so a header on disk
/// always has a matching store entry.
pub fn generate_car_secret(request: &CarRequest) -> Result<CarOutcome, GenerateError> {
    let mut store = SecretStore::open(&request.secret_file)?;

    let secret = request
        .car_id
        .derive_secret()
        .ok_or(GenerateError::SecretOverflow(request.car_id))?;

    let replaced = store.insert(request.car_id, secret).is_some();
    store.save()?;

    write_header(&request.header_file, &CarHeader::new(request.car_id, secret))?;

    Ok(CarOutcome {
        car_id: request.car_id,
        replaced,
        store_entries: store.len(),
    })
}
