use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("Not able to find the file: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Not able to read the file: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input from {} is not a valid float in decimal format: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}
