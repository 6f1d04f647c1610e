//! True-cost-of-ownership calculations for a fixed-rate mortgage.
//!
//! This module wraps the amortization calculator and layers the recurring
//! ownership costs on top of the principal-and-interest payment to produce a
//! complete monthly and lifetime [`CostBreakdown`].
//!
//! # Components
//!
//! | Component            | Monthly formula                              |
//! |----------------------|----------------------------------------------|
//! | Principal & interest | standard annuity payment                     |
//! | PMI                  | principal × PMI rate / 100 / 12              |
//! | Insurance            | principal × insurance rate / 100 / 12        |
//! | Property tax         | (principal × tax rate / 100) / 12            |
//! | Maintenance          | principal × 3% / 12                          |
//!
//! PMI is modeled as flat for the full term; it is not dropped once the
//! borrower reaches 20% equity. Property tax is not compounded or
//! inflation-adjusted: the lifetime figure is the yearly amount times the
//! term. The maintenance estimate is a fixed 3% of principal per year, a
//! modeling constant rather than an input, and counts toward the monthly
//! payment but not the lifetime total (which covers financed costs only).
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use mortgage_core::{LoanTerms, TrueCostEstimator};
//!
//! let terms = LoanTerms {
//!     principal: dec!(300000),
//!     annual_interest_rate: dec!(4.5),
//!     loan_term_years: 30,
//!     pmi_rate: dec!(0.5),
//!     insurance_rate: dec!(0.35),
//!     property_tax_rate: dec!(0.35),
//! };
//!
//! let breakdown = TrueCostEstimator::new().calculate(&terms).unwrap();
//!
//! assert_eq!(breakdown.monthly_principal_and_interest, dec!(1520.06));
//! assert_eq!(breakdown.monthly_pmi, dec!(125.00));
//! assert_eq!(breakdown.monthly_insurance, dec!(87.50));
//! assert_eq!(breakdown.monthly_property_tax, dec!(87.50));
//! assert_eq!(breakdown.total_monthly_payment, dec!(2570.06));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::amortization::{AmortizationError, monthly_payment};
use crate::calculations::common::{max, round_half_up};
use crate::models::{CostBreakdown, LoanTerms};

/// Annual maintenance estimate in percent of principal.
///
/// Deliberately not part of [`LoanTerms`]; the estimate is a modeling
/// constant, not a form field.
const MAINTENANCE_RATE_PERCENT: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Errors that can occur during a true-cost estimate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrueCostError {
    /// The PMI rate must be non-negative.
    #[error("PMI rate must be non-negative, got {0}")]
    NegativePmiRate(Decimal),

    /// The insurance rate must be non-negative.
    #[error("insurance rate must be non-negative, got {0}")]
    NegativeInsuranceRate(Decimal),

    /// The property tax rate must be non-negative.
    #[error("property tax rate must be non-negative, got {0}")]
    NegativePropertyTaxRate(Decimal),

    /// The underlying principal-and-interest computation failed.
    #[error(transparent)]
    Amortization(#[from] AmortizationError),
}

/// Calculator for the full monthly and lifetime cost of a mortgage.
///
/// The estimator is stateless apart from the fixed maintenance rate and may
/// be reused across calls; calculating twice with identical terms yields
/// identical breakdowns.
#[derive(Debug, Clone)]
pub struct TrueCostEstimator {
    maintenance_rate: Decimal,
}

impl TrueCostEstimator {
    /// Creates a new estimator using the fixed 3%/year maintenance estimate.
    pub fn new() -> Self {
        Self {
            maintenance_rate: MAINTENANCE_RATE_PERCENT,
        }
    }

    /// Calculates the complete cost breakdown for the given loan terms.
    ///
    /// Every derived line is rounded to cents before the totals are composed
    /// from it, so the displayed figures stay mutually consistent.
    ///
    /// # Errors
    ///
    /// Returns [`TrueCostError`] if any rate is negative, the principal is
    /// not positive, or the term is zero.
    pub fn calculate(
        &self,
        terms: &LoanTerms,
    ) -> Result<CostBreakdown, TrueCostError> {
        self.validate_rates(terms)?;

        let monthly_principal_and_interest = monthly_payment(
            terms.principal,
            terms.annual_interest_rate,
            terms.loan_term_years,
        )?;

        let payments = Decimal::from(terms.loan_term_years * 12);

        let monthly_pmi = self.monthly_component(terms.principal, terms.pmi_rate);
        let monthly_insurance = self.monthly_component(terms.principal, terms.insurance_rate);
        let monthly_maintenance = self.monthly_component(terms.principal, self.maintenance_rate);

        let yearly_property_tax =
            self.yearly_property_tax(terms.principal, terms.property_tax_rate);
        let monthly_property_tax = round_half_up(yearly_property_tax / Decimal::from(12));

        let total_principal_and_interest =
            round_half_up(monthly_principal_and_interest * payments);
        // Cent-rounding of a zero-interest payment can land the lifetime
        // figure a few cents below the principal.
        let total_interest = max(
            total_principal_and_interest - terms.principal,
            Decimal::ZERO,
        );
        let total_pmi = round_half_up(monthly_pmi * payments);
        let total_insurance = round_half_up(monthly_insurance * payments);
        let total_property_tax =
            round_half_up(yearly_property_tax * Decimal::from(terms.loan_term_years));

        let total_monthly_payment = monthly_principal_and_interest
            + monthly_pmi
            + monthly_insurance
            + monthly_property_tax
            + monthly_maintenance;

        // Financed costs only; maintenance is excluded here.
        let total_cost =
            total_principal_and_interest + total_pmi + total_insurance + total_property_tax;

        Ok(CostBreakdown {
            monthly_principal_and_interest,
            monthly_pmi,
            monthly_insurance,
            monthly_property_tax,
            monthly_maintenance,
            total_monthly_payment,
            yearly_property_tax,
            total_principal_and_interest,
            total_interest,
            total_pmi,
            total_insurance,
            total_property_tax,
            total_cost,
        })
    }

    /// Validates that every annual rate in the terms is non-negative.
    fn validate_rates(
        &self,
        terms: &LoanTerms,
    ) -> Result<(), TrueCostError> {
        if terms.pmi_rate < Decimal::ZERO {
            return Err(TrueCostError::NegativePmiRate(terms.pmi_rate));
        }
        if terms.insurance_rate < Decimal::ZERO {
            return Err(TrueCostError::NegativeInsuranceRate(terms.insurance_rate));
        }
        if terms.property_tax_rate < Decimal::ZERO {
            return Err(TrueCostError::NegativePropertyTaxRate(
                terms.property_tax_rate,
            ));
        }
        Ok(())
    }

    /// Calculates the monthly share of an annual percentage of principal.
    fn monthly_component(
        &self,
        principal: Decimal,
        annual_rate_percent: Decimal,
    ) -> Decimal {
        round_half_up(principal * annual_rate_percent / Decimal::ONE_HUNDRED / Decimal::from(12))
    }

    /// Calculates the property tax owed per year.
    fn yearly_property_tax(
        &self,
        principal: Decimal,
        tax_rate_percent: Decimal,
    ) -> Decimal {
        round_half_up(principal * tax_rate_percent / Decimal::ONE_HUNDRED)
    }
}

impl Default for TrueCostEstimator {
    fn default() -> Self {
        Self::new()
    }
}
