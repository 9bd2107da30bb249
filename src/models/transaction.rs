use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::models::errors::RecordError;
use crate::types::{Monetary, TransactionRef};

const REFERENCE_NUMBER: &str = "reference_number";
const ID: &str = "id";
const AMOUNT: &str = "amount";
const INITIAL_PAYMENT: &str = "initial_payment";

/// A transaction as exported by the API.
///
/// The record is kept verbatim and is what gets serialized, so every field
/// (including ones the engine cannot read) leaves exactly as it came in.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Transaction {
    reference_number: String,
    id: Option<TransactionRef>,
    amount: Option<Monetary>,
    initial_payment: Option<Monetary>,
    record: Map<String, Value>
}

impl Transaction {
    /// Natural key of the transaction.
    pub fn reference_number(&self) -> &str {
        &self.reference_number
    }

    /// Originally persisted identifier, if the export carried one.
    pub fn id(&self) -> Option<TransactionRef> {
        self.id
    }

    /// Total amount, or `None` when the record holds something that is not an amount.
    pub fn amount(&self) -> Option<Monetary> {
        self.amount
    }

    /// Amount already paid up front. Missing, `null` and blank values count as zero;
    /// `None` means the record holds something that is not an amount.
    pub fn initial_payment(&self) -> Option<Monetary> {
        self.initial_payment
    }

    /// Raw value of a field as it appears in the record.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.record.get(field)
    }
}

impl TryFrom<Map<String, Value>> for Transaction {
    type Error = RecordError;

    fn try_from(record: Map<String, Value>) -> Result<Self, Self::Error> {
        let reference_number = match record.get(REFERENCE_NUMBER) {
            Some(Value::String(reference_number)) => reference_number.clone(),
            Some(Value::Number(reference_number)) => reference_number.to_string(),
            _ => return Err(RecordError::MissingReference)
        };

        let initial_payment = match record.get(INITIAL_PAYMENT) {
            None | Some(Value::Null) => Some(Monetary::new()),
            Some(Value::String(text)) if text.trim().is_empty() => Some(Monetary::new()),
            Some(value) => Monetary::from_json(value)
        };

        Ok(Self {
            reference_number,
            id: record.get(ID).and_then(Value::as_i64),
            amount: record.get(AMOUNT).and_then(Monetary::from_json),
            initial_payment,
            record
        })
    }
}

impl Serialize for Transaction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.record.serialize(serializer)
    }
}
