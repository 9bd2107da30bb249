use std::collections::HashMap;

use tracing::warn;

use crate::models::Transaction;
use crate::types::TransactionRef;

/// Process-local identifiers for one reconciliation run.
///
/// Transaction at position `i` gets synthetic id `i + 1`. The ids live here,
/// never on the records, so nothing synthetic can leak into the output.
#[derive(Debug, Default)]
pub struct IdentityMap {
    by_position: Vec<TransactionRef>,
    by_reference: HashMap<String, TransactionRef>
}

impl IdentityMap {
    pub fn resolve(transactions: &[Transaction]) -> Self {
        let mut identity = Self {
            by_position: Vec::with_capacity(transactions.len()),
            by_reference: HashMap::with_capacity(transactions.len())
        };

        for (position, transaction) in transactions.iter().enumerate() {
            let synthetic_id = position as TransactionRef + 1;
            identity.by_position.push(synthetic_id);

            if let Some(previous) = identity.by_reference.insert(transaction.reference_number().to_string(), synthetic_id) {
                warn!("Duplicate reference number [{}]: synthetic id [{previous}] shadowed by [{synthetic_id}]", transaction.reference_number());
            }
        }

        identity
    }

    /// Synthetic id of the transaction at `position` in the original collection.
    pub fn at(&self, position: usize) -> Option<TransactionRef> {
        self.by_position.get(position).copied()
    }

    /// Synthetic id registered for a reference number.
    #[cfg(test)]
    pub fn lookup(&self, reference_number: &str) -> Option<TransactionRef> {
        self.by_reference.get(reference_number).copied()
    }
}
