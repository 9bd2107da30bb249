use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::models::errors::DatasetError;
use crate::models::{ImportRecord, Payment, Transaction};

const TRANSACTIONS: &str = "transactions";
const PAYMENTS: &str = "payments";

/// The document exchanged with the loader and writer: two record collections
/// plus whatever other top-level fields the export carried (e.g. `total_budget`).
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub transactions: Vec<Transaction>,
    pub payments: Vec<Payment>,
    /// Every other top-level field, in document order. A loaded document keeps
    /// `null` placeholders under `transactions` and `payments` so both
    /// collections are written back where they were read.
    pub extra: Map<String, Value>
}

impl Dataset {
    /// Validates the document shape before decoding it.
    ///
    /// # Errors
    /// Returns `DatasetError` if the document is not an object, if either
    /// collection is missing or not an array, or if a record cannot be decoded.
    pub fn from_value(value: Value) -> Result<Self, DatasetError> {
        let Value::Object(mut document) = value else {
            return Err(DatasetError::NotAnObject)
        };

        let transactions = take_collection(&mut document, TRANSACTIONS)?;
        let payments = take_collection(&mut document, PAYMENTS)?;

        Ok(Self {
            transactions: serde_json::from_value(transactions)?,
            payments: serde_json::from_value(payments)?,
            extra: document
        })
    }

    /// Flattens the document into the records a create-call importer posts,
    /// all transactions first, then all payments.
    pub fn import_records(&self) -> impl Iterator<Item = ImportRecord<'_>> {
        self.transactions.iter().map(ImportRecord::Transaction)
            .chain(self.payments.iter().map(ImportRecord::Payment))
    }
}

fn take_collection(document: &mut Map<String, Value>, collection: &'static str) -> Result<Value, DatasetError> {
    match document.get_mut(collection) {
        Some(value @ Value::Array(_)) => Ok(value.take()),
        Some(_) => Err(DatasetError::NotAnArray { collection }),
        None => Err(DatasetError::MissingCollection { collection })
    }
}

impl Serialize for Dataset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut document = serializer.serialize_map(None)?;

        if !self.extra.contains_key(TRANSACTIONS) {
            document.serialize_entry(TRANSACTIONS, &self.transactions)?;
        }

        if !self.extra.contains_key(PAYMENTS) {
            document.serialize_entry(PAYMENTS, &self.payments)?;
        }

        for (key, value) in &self.extra {
            match key.as_str() {
                TRANSACTIONS => document.serialize_entry(key, &self.transactions)?,
                PAYMENTS => document.serialize_entry(key, &self.payments)?,
                _ => document.serialize_entry(key, value)?
            }
        }

        document.end()
    }
}
