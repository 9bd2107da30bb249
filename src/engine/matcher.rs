use std::collections::HashMap;

use tracing::trace;

use crate::models::Payment;
use crate::types::TransactionRef;

/// Working set of payments for one run, indexed by their current foreign key.
///
/// Payments leave the index once they are taken into a split, so a payment can
/// only ever be allocated to one transaction.
pub struct PaymentIndex {
    slots: Vec<Option<Payment>>,
    by_reference: HashMap<TransactionRef, Vec<usize>>
}

impl PaymentIndex {
    pub fn new(payments: Vec<Payment>) -> Self {
        let mut by_reference = HashMap::<TransactionRef, Vec<usize>>::new();

        for (slot, payment) in payments.iter().enumerate() {
            if let Some(reference) = payment.transaction_id() {
                by_reference.entry(reference).or_default().push(slot);
            }
        }

        Self {
            slots: payments.into_iter().map(Some).collect(),
            by_reference
        }
    }

    /// Collects the payments referencing a transaction under either identifier
    /// scheme and re-stamps them with the synthetic id.
    ///
    /// Returned slots keep the payments' original relative order. Matching the
    /// same transaction again yields the same slots.
    pub fn match_transaction(&mut self, synthetic_id: TransactionRef, original_id: Option<TransactionRef>) -> Vec<usize> {
        let mut matched = self.by_reference.remove(&synthetic_id).unwrap_or_default();

        if let Some(original_id) = original_id.filter(|id| *id != synthetic_id) {
            matched.extend(self.by_reference.remove(&original_id).unwrap_or_default());
        }

        matched.retain(|slot| self.slots[*slot].is_some());
        matched.sort_unstable();
        matched.dedup();

        for slot in &matched {
            if let Some(payment) = self.slots[*slot].as_mut() {
                payment.set_transaction_id(synthetic_id);
            }
        }

        trace!("Matched [{}] payments to synthetic id [{synthetic_id}]", matched.len());

        self.by_reference.insert(synthetic_id, matched.clone());

        matched
    }

    /// Removes a payment from the working set.
    pub fn take(&mut self, slot: usize) -> Option<Payment> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    /// Number of payments still available for matching.
    pub fn remaining(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
