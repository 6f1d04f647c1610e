use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input parameters for a fixed-rate mortgage cost estimate.
///
/// All rates are expressed in percent per year (e.g. `dec!(4.5)` means 4.5%).
/// The form/validation layer is responsible for producing well-typed values;
/// the calculation core only rejects mathematically meaningless inputs
/// (non-positive principal, zero term, negative rates).
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use mortgage_core::LoanTerms;
///
/// let terms = LoanTerms {
///     principal: dec!(300000.00),
///     annual_interest_rate: dec!(4.5),
///     loan_term_years: 30,
///     pmi_rate: dec!(0.5),
///     insurance_rate: dec!(0.35),
///     property_tax_rate: dec!(0.35),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed, in currency units. Must be positive.
    pub principal: Decimal,

    /// Annual interest rate in percent (4.5 means 4.5% per year).
    ///
    /// Zero is legal and amortizes the principal evenly across the term.
    pub annual_interest_rate: Decimal,

    /// Loan term in years. Typically 15 or 30. Must be positive.
    pub loan_term_years: u32,

    /// Private mortgage insurance rate in percent of principal per year.
    ///
    /// Modeled as flat for the full term; it is not dropped when the
    /// borrower reaches 20% equity.
    pub pmi_rate: Decimal,

    /// Homeowner's insurance rate in percent of principal per year.
    pub insurance_rate: Decimal,

    /// Effective property tax rate in percent of principal per year.
    ///
    /// Typically pre-filled from the per-state reference table bundled in
    /// the `mortgage-data` crate.
    pub property_tax_rate: Decimal,
}
