//! Generated C headers: car secrets and fob secrets.

pub mod car;
pub mod fob;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::atomic::write_atomic;

pub use car::CarHeader;
pub use fob::FobHeader;

/// Errors while emitting a header file.
#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("failed to write header {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Trait for rendering a header artifact to its exact text.
pub trait HeaderTemplate {
    /// Render the full header, ending with `#endif\n`.
    fn render(&self) -> String;
}

/// Render `header` and replace the file at `path` with it.
pub fn write_header(path: &Path, header: &impl HeaderTemplate) -> Result<(), HeaderError> {
    write_atomic(path, header.render().as_bytes()).map_err(|source| HeaderError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CarId;

    #[test]
    fn write_header_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.h");
        std::fs::write(&path, "stale\n".repeat(100)).unwrap();

        let header = CarHeader::new(CarId(1), 2);
        write_header(&path, &header).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), header.render());
    }

    #[test]
    fn write_header_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("secrets.h");
        let err = write_header(&path, &FobHeader::unpaired()).unwrap_err();
        assert!(err.to_string().contains("secrets.h"), "got: {err}");
    }
}
