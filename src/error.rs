use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while reading input datasets.
///
/// `YearInference` and the open-time variants abort the whole run; the
/// per-variable variants only abort that variable's processing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("couldn't infer a 4-digit year from {0:?}")]
    YearInference(PathBuf),

    #[error("failed to open dataset {path:?}")]
    DatasetOpen {
        path: PathBuf,
        #[source]
        source: netcdf::Error,
    },

    #[error("missing coordinate variable '{name}' in {path:?}")]
    MissingCoordinate { name: String, path: PathBuf },

    #[error("empty coordinate arrays in {path:?}")]
    EmptyCoordinate { path: PathBuf },

    #[error("variable '{name}' in {path:?} has unsupported shape: {reason}")]
    InvalidShape {
        name: String,
        path: PathBuf,
        reason: String,
    },

    #[error("failed to read variable '{name}' from {path:?}")]
    VariableRead {
        name: String,
        path: PathBuf,
        #[source]
        source: netcdf::Error,
    },
}
