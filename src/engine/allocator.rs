use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::engine::errors::AllocationError;
use crate::types::{Monetary, MonetaryError};

pub const DEFAULT_MIN_PARTS: usize = 2;
pub const DEFAULT_MAX_PARTS: usize = 4;

/// Carves a residual into a random, proportionally weighted set of parts.
#[derive(Debug, Clone, Copy)]
pub struct SplitAllocator {
    min_parts: usize,
    max_parts: usize
}

impl Default for SplitAllocator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PARTS, DEFAULT_MAX_PARTS)
    }
}

impl SplitAllocator {
    /// The range is clamped so that at least one part is always requested.
    pub fn new(min_parts: usize, max_parts: usize) -> Self {
        let min_parts = min_parts.max(1);

        Self {
            min_parts,
            max_parts: max_parts.max(min_parts)
        }
    }

    /// Samples the split size and caps it by the payments available.
    ///
    /// # Errors
    /// Returns `AllocationError::InsufficientPayments` when the capped size falls
    /// below the minimum split. The split is never shrunk below the minimum to fit.
    pub fn plan<R: Rng>(&self, matched: usize, rng: &mut R) -> Result<usize, AllocationError> {
        let desired = rng.gen_range(self.min_parts..=self.max_parts);
        let parts = matched.min(desired);

        if parts < self.min_parts {
            return Err(AllocationError::InsufficientPayments { matched, required: self.min_parts })
        }

        Ok(parts)
    }

    /// Splits `residual` into `parts` amounts that add up to it exactly.
    ///
    /// Every slot but the last gets its rounded proportional share; the last slot
    /// takes whatever is left so rounding drift never leaks out of the split.
    ///
    /// # Errors
    /// Returns a fault if the random weights are degenerate, if the remainder
    /// comes out negative, or on arithmetic overflow.
    pub fn split<R: Rng>(&self, residual: Monetary, parts: usize, rng: &mut R) -> Result<Vec<Monetary>, AllocationError> {
        if parts == 0 {
            return Err(AllocationError::InsufficientPayments { matched: 0, required: self.min_parts })
        }

        let weights: Vec<Decimal> = (0..parts)
            .map(|_| Decimal::from_f64(rng.r#gen::<f64>()).unwrap_or_default())
            .collect();
        let total: Decimal = weights.iter().sum();

        if total.is_zero() {
            return Err(AllocationError::DegenerateWeights { parts })
        }

        let mut amounts = Vec::with_capacity(parts);
        let mut allocated = Monetary::new();

        for weight in &weights[..parts - 1] {
            let proportion = weight.checked_div(total).ok_or(MonetaryError::Overflow)?;
            let amount = residual.share(proportion)?;

            allocated = allocated.checked_add(amount).ok_or(MonetaryError::Overflow)?;
            amounts.push(amount);
        }

        let remainder = residual.checked_sub(allocated)
            .ok_or(MonetaryError::Overflow)?
            .rounded();

        if remainder.is_negative() {
            return Err(AllocationError::NegativeRemainder { residual, remainder })
        }

        amounts.push(remainder);

        Ok(amounts)
    }
}
