//! Fixed-rate mortgage payment calculations.
//!
//! This module implements the standard fixed-rate annuity formula used to
//! derive the monthly principal-and-interest payment of a mortgage.
//!
//! # Formula
//!
//! With principal `P`, monthly rate `i` (annual percent rate / 100 / 12) and
//! payment count `n` (term in years × 12):
//!
//! ```text
//! M = P · i · (1 + i)^n / ((1 + i)^n − 1)
//! ```
//!
//! # Zero-Interest Loans
//!
//! At `i = 0` the formula divides by zero. The payment is instead the limit
//! of the formula as the rate approaches zero, `M = P / n`: the principal
//! amortized evenly across the term. The degenerate case is logged at `warn`
//! level since real lenders do not write zero-interest mortgages.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use mortgage_core::calculations::monthly_payment;
//!
//! // Standard 30-year amortization at 4.5%, 360 payments.
//! let payment = monthly_payment(dec!(300000), dec!(4.5), 30).unwrap();
//! assert_eq!(payment, dec!(1520.06));
//! ```

use rust_decimal::{Decimal, MathematicalOps};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::round_half_up;

/// Errors that can occur when computing a monthly payment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmortizationError {
    /// The principal must be positive.
    #[error("principal must be positive, got {0}")]
    NonPositivePrincipal(Decimal),

    /// The loan term must be at least one year.
    #[error("loan term must be at least one year")]
    ZeroLoanTerm,

    /// The annual interest rate must be non-negative.
    #[error("annual interest rate must be non-negative, got {0}")]
    NegativeInterestRate(Decimal),
}

/// Computes the monthly principal-and-interest payment for a fixed-rate loan.
///
/// # Arguments
///
/// * `principal` - Amount borrowed, in currency units
/// * `annual_interest_rate` - Annual rate in percent (4.5 means 4.5%)
/// * `loan_term_years` - Loan term in years
///
/// # Returns
///
/// The monthly payment rounded to cents (half-up).
///
/// # Errors
///
/// Returns [`AmortizationError`] if the principal is not positive, the term
/// is zero, or the rate is negative.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use mortgage_core::calculations::monthly_payment;
///
/// // A zero-interest loan amortizes the principal evenly.
/// let payment = monthly_payment(dec!(120000), dec!(0), 10).unwrap();
/// assert_eq!(payment, dec!(1000.00));
/// ```
pub fn monthly_payment(
    principal: Decimal,
    annual_interest_rate: Decimal,
    loan_term_years: u32,
) -> Result<Decimal, AmortizationError> {
    if principal <= Decimal::ZERO {
        return Err(AmortizationError::NonPositivePrincipal(principal));
    }
    if loan_term_years == 0 {
        return Err(AmortizationError::ZeroLoanTerm);
    }
    if annual_interest_rate < Decimal::ZERO {
        return Err(AmortizationError::NegativeInterestRate(
            annual_interest_rate,
        ));
    }

    let payments = loan_term_years * 12;

    if annual_interest_rate.is_zero() {
        warn!(
            %principal,
            loan_term_years,
            "zero interest rate; amortizing principal evenly across the term"
        );
        return Ok(round_half_up(principal / Decimal::from(payments)));
    }

    let monthly_rate = annual_interest_rate / Decimal::ONE_HUNDRED / Decimal::from(12);
    let growth = (Decimal::ONE + monthly_rate).powu(u64::from(payments));
    let payment = principal * monthly_rate * growth / (growth - Decimal::ONE);

    Ok(round_half_up(payment))
}
