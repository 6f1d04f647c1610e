pub mod calculations;
pub mod models;

pub use calculations::{AmortizationError, TrueCostError, TrueCostEstimator, monthly_payment};
pub use models::*;
