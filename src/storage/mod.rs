mod errors;
mod json_file_store;
#[cfg(test)]
mod tests;

use crate::models::Dataset;

pub use errors::StorageError;
pub use json_file_store::JsonFileStore;

/// Source of the input document and sink for the reconciled one.
pub trait DatasetStore: Send + Sync + 'static {
    fn load(&self) -> Result<Dataset, StorageError>;
    fn save(&self, dataset: &Dataset) -> Result<(), StorageError>;
}
