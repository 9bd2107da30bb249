use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Dataset is not a JSON object")]
    NotAnObject,
    #[error("Dataset is missing the [{collection}] array")]
    MissingCollection {
        collection: &'static str
    },
    #[error("Dataset field [{collection}] is not an array")]
    NotAnArray {
        collection: &'static str
    },
    #[error("Dataset contains an invalid record: {0}")]
    InvalidRecord(#[from] serde_json::Error)
}

/// Why a single record could not be decoded.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Transaction has no usable [reference_number]")]
    MissingReference
}
