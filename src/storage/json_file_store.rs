use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::models::Dataset;
use crate::storage::{DatasetStore, StorageError};

/// Reads the dataset from one JSON file and writes the result to another.
pub struct JsonFileStore {
    input: PathBuf,
    output: PathBuf
}

impl JsonFileStore {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into()
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    fn write_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Write { path: self.output.clone(), source }
    }
}

impl DatasetStore for JsonFileStore {
    fn load(&self) -> Result<Dataset, StorageError> {
        let file = File::open(&self.input)
            .map_err(|source| StorageError::Read { path: self.input.clone(), source })?;

        let value: Value = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| StorageError::Json { path: self.input.clone(), source })?;

        let dataset = Dataset::from_value(value)
            .map_err(|source| StorageError::Malformed { path: self.input.clone(), source })?;

        debug!("Loaded [{}] transactions and [{}] payments from [{}]", dataset.transactions.len(), dataset.payments.len(), self.input.display());

        Ok(dataset)
    }

    fn save(&self, dataset: &Dataset) -> Result<(), StorageError> {
        //NOTE: The temporary file has to sit on the destination filesystem for persist to be an atomic rename
        let directory = self.output.parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let temporary = NamedTempFile::new_in(directory).map_err(|source| self.write_error(source))?;
        let mut writer = BufWriter::new(temporary);

        serde_json::to_writer_pretty(&mut writer, dataset)
            .map_err(|source| self.write_error(source.into()))?;
        writer.flush().map_err(|source| self.write_error(source))?;

        let temporary = writer.into_inner().map_err(|error| self.write_error(error.into_error()))?;
        temporary.persist(&self.output).map_err(|error| self.write_error(error.error))?;

        debug!("Saved [{}] transactions and [{}] payments to [{}]", dataset.transactions.len(), dataset.payments.len(), self.output.display());

        Ok(())
    }
}
