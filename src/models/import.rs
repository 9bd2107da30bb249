use serde::Serialize;

use crate::models::{Payment, Transaction};

/// One record of the output document as a downstream importer sends it.
/// Serializes to the bare record body, without any envelope.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum ImportRecord<'a> {
    Transaction(&'a Transaction),
    Payment(&'a Payment)
}

impl ImportRecord<'_> {
    /// Collection endpoint the record is created under.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ImportRecord::Transaction(_) => "transactions",
            ImportRecord::Payment(_) => "payments"
        }
    }
}
