use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::DatasetError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not read dataset at [{}]: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error
    },
    #[error("Could not write dataset to [{}]: {source}", path.display())]
    Write {
        path: PathBuf,
        source: io::Error
    },
    #[error("Dataset at [{}] is not valid JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error
    },
    #[error("Dataset at [{}] is malformed: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: DatasetError
    }
}
