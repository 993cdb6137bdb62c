//! The two generator operations behind the binaries.
//!
//! Each takes a fully validated request and performs every file operation
//! for one invocation. Configuration never reaches them, so generated
//! contents depend only on the request and the secret store.

pub mod car;
pub mod fob;

use thiserror::Error;

use crate::header::HeaderError;
use crate::models::CarId;
use crate::store::StoreError;

pub use car::{CarOutcome, CarRequest, generate_car_secret};
pub use fob::{FobOutcome, FobRequest, generate_fob_secret};

/// Errors from a generator run.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Header(#[from] HeaderError),

    #[error("cannot derive a secret for car id {0}: value out of range")]
    SecretOverflow(CarId),
}
