use serde_json::Value;
use thiserror::Error;

use crate::types::{Monetary, MonetaryError};

/// Reasons a single transaction is left out of the allocated output.
///
/// None of these abort the batch; the engine logs them and moves on.
#[derive(Debug, Error)]
pub enum AllocationError {
    #[error("Residual [{residual}] is not positive, nothing to allocate")]
    NothingOwed {
        residual: Monetary
    },
    #[error("Field [{field}] holds [{value}], which is not a monetary amount")]
    UnreadableAmount {
        field: &'static str,
        value: Value
    },
    #[error("Not enough payments: [{matched}] matched, split needs at least [{required}]")]
    InsufficientPayments {
        matched: usize,
        required: usize
    },
    #[error("Split produced a negative remainder [{remainder}] for residual [{residual}]")]
    NegativeRemainder {
        residual: Monetary,
        remainder: Monetary
    },
    #[error("Split weights summed to zero across [{parts}] parts")]
    DegenerateWeights {
        parts: usize
    },
    #[error("Numeric overflow while allocating: {0}")]
    Overflow(#[from] MonetaryError)
}

impl AllocationError {
    /// Whether the skip points at inconsistent data rather than an expected policy outcome.
    pub fn is_fault(&self) -> bool {
        matches!(
            self,
            Self::UnreadableAmount { .. } | Self::NegativeRemainder { .. } | Self::DegenerateWeights { .. } | Self::Overflow(_)
        )
    }
}
