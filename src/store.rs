//! JSON-backed secret store.
//!
//! Maps car identifiers (decimal strings) to integer secrets. The whole file
//! is read into memory, mutated, and written back atomically; key order is
//! preserved so diffs of the store stay readable.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use crate::atomic::write_atomic;
use crate::constants::STORE_INDENT;
use crate::models::CarId;

/// Errors from reading, querying or writing the secret store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("secret store {path} does not exist")]
    NotFound { path: PathBuf },

    #[error("failed to read secret store {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("secret store {path} is not a JSON object of integer secrets: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("car id {car_id} has no secret in {path}")]
    MissingCar { car_id: CarId, path: PathBuf },

    #[error("failed to serialize secret store: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write secret store {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// In-memory view of a secret store file.
#[derive(Debug, Clone)]
pub struct SecretStore {
    path: PathBuf,
    secrets: IndexMap<String, i128>,
}

impl SecretStore {
    /// Load the store at `path`, or start an empty one if the file is absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self {
                path,
                secrets: IndexMap::new(),
            });
        }
        Self::load(path)
    }

    /// Load the store at `path`, which must already exist.
    pub fn open_existing(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            return Err(StoreError::NotFound { path });
        }
        Self::load(path)
    }

    fn load(path: PathBuf) -> Result<Self, StoreError> {
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(source) => return Err(StoreError::Read { path, source }),
        };
        match serde_json::from_str(&content) {
            Ok(secrets) => Ok(Self { path, secrets }),
            Err(source) => Err(StoreError::Parse { path, source }),
        }
    }

    pub fn get(&self, car_id: CarId) -> Option<i128> {
        self.secrets.get(&car_id.key()).copied()
    }

    /// Like [`get`](Self::get), but a missing car is an error.
    pub fn lookup(&self, car_id: CarId) -> Result<i128, StoreError> {
        self.get(car_id).ok_or_else(|| StoreError::MissingCar {
            car_id,
            path: self.path.clone(),
        })
    }

    /// Insert or overwrite a car's secret, returning the previous one.
    ///
    /// An overwritten key keeps its original position.
    pub fn insert(&mut self, car_id: CarId, secret: i128) -> Option<i128> {
        self.secrets.insert(car_id.key(), secret)
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    /// Render the store as a 4-space indented JSON object (no trailing newline).
    pub fn to_json(&self) -> Result<Vec<u8>, StoreError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(STORE_INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.secrets.serialize(&mut ser)?;
        Ok(buf)
    }

    /// Write the whole store back to its path atomically.
    pub fn save(&self) -> Result<(), StoreError> {
        let json = self.to_json()?;
        write_atomic(&self.path, &json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
