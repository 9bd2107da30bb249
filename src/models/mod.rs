mod dataset;
mod errors;
mod import;
mod payment;
mod transaction;

pub use dataset::Dataset;
pub use errors::DatasetError;
pub use import::ImportRecord;
pub use payment::Payment;
pub use transaction::Transaction;
