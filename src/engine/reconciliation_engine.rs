use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::spawn_blocking;
use tracing::{debug, info, warn};

use crate::engine::allocator::SplitAllocator;
use crate::engine::assembler::Assembler;
use crate::engine::balance;
use crate::engine::errors::AllocationError;
use crate::engine::identity::IdentityMap;
use crate::engine::matcher::PaymentIndex;
use crate::models::{Dataset, Transaction};
use crate::storage::DatasetStore;
use crate::types::{Monetary, TransactionRef};

/// Counts of what happened to each transaction during a run.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct ReconciliationSummary {
    /// Transactions whose residual was split across payments.
    pub processed: usize,
    /// Transactions with nothing left to pay.
    pub settled: usize,
    /// Transactions skipped because too few payments matched.
    pub short_of_payments: usize,
    /// Transactions skipped because their split was inconsistent.
    pub faulted: usize,
    /// Payments written to the output.
    pub allocated_payments: usize,
    /// Input payments left out of the output.
    pub dropped_payments: usize
}

impl ReconciliationSummary {
    pub fn skipped(&self) -> usize {
        self.settled + self.short_of_payments + self.faulted
    }

    fn record_skip(&mut self, error: &AllocationError) {
        match error {
            AllocationError::NothingOwed { .. } => self.settled += 1,
            AllocationError::InsufficientPayments { .. } => self.short_of_payments += 1,
            _ => self.faulted += 1
        }
    }
}

/// Output of a reconciliation: the document to hand to the writer plus the run summary.
#[derive(Debug)]
pub struct Reconciliation {
    pub dataset: Dataset,
    pub summary: ReconciliationSummary
}

/// Redistributes outstanding balances across the payments of each transaction.
pub struct ReconciliationEngine {
    allocator: SplitAllocator,
    seed: Option<u64>
}

impl Default for ReconciliationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconciliationEngine {
    /// Creates an engine with the default 2 to 4 part split, seeded from system entropy.
    pub fn new() -> Self {
        Self {
            allocator: SplitAllocator::default(),
            seed: None
        }
    }

    /// Makes every run of this engine reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Loads the dataset from the store, reconciles it and saves the result.
    ///
    /// Nothing is written unless the whole document was read and validated.
    pub async fn run<S: DatasetStore>(&self, store: Arc<S>) -> anyhow::Result<Reconciliation> {
        let loader = store.clone();
        let dataset = spawn_blocking(move || loader.load()).await??;

        let mut rng = self.rng();
        let Reconciliation { dataset, summary } = self.reconcile(dataset, &mut rng);

        let dataset = spawn_blocking(move || store.save(&dataset).map(|_| dataset)).await??;

        Ok(Reconciliation { dataset, summary })
    }

    /// Reconciles a dataset in memory using the given random source.
    pub fn reconcile<R: Rng>(&self, dataset: Dataset, rng: &mut R) -> Reconciliation {
        let Dataset { transactions, payments, extra } = dataset;
        let total_payments = payments.len();

        let identity = IdentityMap::resolve(&transactions);
        let mut index = PaymentIndex::new(payments);
        let mut assembler = Assembler::new();
        let mut summary = ReconciliationSummary::default();

        for (position, transaction) in transactions.iter().enumerate() {
            let Some(synthetic_id) = identity.at(position) else {
                continue;
            };

            match self.allocate(transaction, synthetic_id, &mut index, rng) {
                Ok((slots, amounts)) => {
                    log_split(transaction, &amounts);
                    assembler.apply(&mut index, &slots, &amounts);
                    summary.processed += 1;
                },
                Err(error @ AllocationError::NothingOwed { .. }) => {
                    debug!("Skipping [{}]: {error}", transaction.reference_number());
                    summary.record_skip(&error);
                },
                Err(error) if error.is_fault() => {
                    warn!("Skipping [{}]: {error}", transaction.reference_number());
                    summary.record_skip(&error);
                },
                Err(error) => {
                    info!("Skipping [{}]: {error}", transaction.reference_number());
                    summary.record_skip(&error);
                }
            }
        }

        summary.allocated_payments = assembler.allocated();
        summary.dropped_payments = total_payments - summary.allocated_payments;

        debug!("[{}] payments were never allocated", index.remaining());

        Reconciliation {
            dataset: assembler.finish(transactions, extra),
            summary
        }
    }

    fn allocate<R: Rng>(&self, transaction: &Transaction, synthetic_id: TransactionRef, index: &mut PaymentIndex, rng: &mut R) -> Result<(Vec<usize>, Vec<Monetary>), AllocationError> {
        let residual = balance::residual(transaction)?;
        let mut slots = index.match_transaction(synthetic_id, transaction.id());
        let parts = self.allocator.plan(slots.len(), rng)?;
        let amounts = self.allocator.split(residual, parts, rng)?;

        slots.truncate(parts);

        Ok((slots, amounts))
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy()
        }
    }
}

fn log_split(transaction: &Transaction, amounts: &[Monetary]) {
    debug!("Transaction [{}]", transaction.reference_number());

    for (slot, amount) in amounts.iter().enumerate() {
        debug!("  Payment {}: {amount}", slot + 1);
    }

    let total: Monetary = amounts.iter().copied().sum();
    debug!("  Total paid: {total}");
}
