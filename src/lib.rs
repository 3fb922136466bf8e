pub mod backend;
pub mod calculator;
pub mod config;
pub mod database;
pub mod error;

pub use calculator::FinancialCalculator;
pub use error::{CalcError, Result};
