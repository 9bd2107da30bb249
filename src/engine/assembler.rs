use serde_json::{Map, Value};

use crate::engine::matcher::PaymentIndex;
use crate::models::{Dataset, Payment, Transaction};
use crate::types::Monetary;

/// Collects allocated payments in processing order and builds the output document.
#[derive(Debug, Default)]
pub struct Assembler {
    payments: Vec<Payment>
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes each amount onto the payment in the matching slot and moves it
    /// into the output. Slot `i` always receives `amounts[i]`.
    pub fn apply(&mut self, index: &mut PaymentIndex, slots: &[usize], amounts: &[Monetary]) {
        for (slot, amount) in slots.iter().zip(amounts) {
            if let Some(mut payment) = index.take(*slot) {
                payment.set_amount_paid(*amount);
                self.payments.push(payment);
            }
        }
    }

    pub fn allocated(&self) -> usize {
        self.payments.len()
    }

    pub fn finish(self, transactions: Vec<Transaction>, extra: Map<String, Value>) -> Dataset {
        Dataset {
            transactions,
            payments: self.payments,
            extra
        }
    }
}
