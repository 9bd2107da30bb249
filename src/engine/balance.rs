use serde_json::Value;

use crate::engine::errors::AllocationError;
use crate::models::Transaction;
use crate::types::{Monetary, MonetaryError};

/// Outstanding balance of a transaction after its initial payment, in cents.
///
/// # Errors
/// Returns `AllocationError::UnreadableAmount` when `amount` or `initial_payment`
/// is not a monetary value, `AllocationError::NothingOwed` when the residual is
/// zero or negative, or `AllocationError::Overflow` if the subtraction overflows.
pub fn residual(transaction: &Transaction) -> Result<Monetary, AllocationError> {
    let amount = transaction.amount().ok_or_else(|| unreadable(transaction, "amount"))?;
    let initial_payment = transaction.initial_payment().ok_or_else(|| unreadable(transaction, "initial_payment"))?;

    let residual = amount.checked_sub(initial_payment)
        .ok_or(MonetaryError::Overflow)?
        .rounded();

    if !residual.is_positive() {
        return Err(AllocationError::NothingOwed { residual })
    }

    Ok(residual)
}

fn unreadable(transaction: &Transaction, field: &'static str) -> AllocationError {
    AllocationError::UnreadableAmount {
        field,
        value: transaction.get(field).cloned().unwrap_or(Value::Null)
    }
}
