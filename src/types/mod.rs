mod errors;
mod monetary;
#[cfg(test)]
mod tests;

pub use errors::MonetaryError;
pub use monetary::Monetary;

/// Foreign key carried by payments. Holds either a persisted transaction id
/// or a synthetic id assigned during a run.
pub type TransactionRef = i64;
