pub mod snapshot;

pub use snapshot::{FinancialSnapshot, NewSnapshot};
