mod allocator;
mod assembler;
mod balance;
mod errors;
mod identity;
mod matcher;
mod reconciliation_engine;

pub use reconciliation_engine::{Reconciliation, ReconciliationEngine};
