use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::types::{Monetary, TransactionRef};

const TRANSACTION_ID: &str = "transaction_id";
const AMOUNT_PAID: &str = "amount_paid";

/// A payment as exported by the API, loosely tied to a transaction through
/// `transaction_id`. Like [`Transaction`](crate::models::Transaction) it
/// serializes as its original record, with the engine's updates written in place.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Payment {
    transaction_id: Option<TransactionRef>,
    amount_paid: Monetary,
    record: Map<String, Value>
}

impl Payment {
    /// Foreign key to a transaction, under either identifier scheme. `None` when unassociated.
    pub fn transaction_id(&self) -> Option<TransactionRef> {
        self.transaction_id
    }

    /// Amount on the payment. Unreadable values read as zero since the engine overwrites them.
    pub fn amount_paid(&self) -> Monetary {
        self.amount_paid
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.record.get(field)
    }

    pub fn set_transaction_id(&mut self, transaction_id: TransactionRef) {
        self.transaction_id = Some(transaction_id);
        self.record.insert(TRANSACTION_ID.to_string(), Value::from(transaction_id));
    }

    pub fn set_amount_paid(&mut self, amount_paid: Monetary) {
        self.amount_paid = amount_paid;
        self.record.insert(AMOUNT_PAID.to_string(), amount_paid.to_json());
    }
}

impl From<Map<String, Value>> for Payment {
    fn from(record: Map<String, Value>) -> Self {
        Self {
            transaction_id: record.get(TRANSACTION_ID).and_then(Value::as_i64),
            amount_paid: record.get(AMOUNT_PAID).and_then(Monetary::from_json).unwrap_or_default(),
            record
        }
    }
}

impl Serialize for Payment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.record.serialize(serializer)
    }
}
