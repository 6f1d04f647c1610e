//! Mortgage cost calculation modules.
//!
//! This module provides the calculation logic for fixed-rate mortgage
//! payments and full monthly/lifetime cost breakdowns.

pub mod amortization;
pub mod common;
pub mod true_cost;

pub use amortization::{AmortizationError, monthly_payment};
pub use true_cost::{TrueCostError, TrueCostEstimator};
