use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of a true-cost estimate: monthly and lifetime figures, all rounded
/// to cents.
///
/// Two sum invariants hold for every breakdown produced from valid terms:
///
/// - `total_monthly_payment` is the sum of the five monthly components.
/// - `total_cost` is the sum of the four lifetime components
///   (`total_principal_and_interest`, `total_pmi`, `total_insurance`,
///   `total_property_tax`).
///
/// Maintenance is an ongoing ownership estimate rather than a financed cost,
/// so it appears in the monthly figure but not in the lifetime total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Monthly principal-and-interest payment from the annuity formula.
    pub monthly_principal_and_interest: Decimal,

    /// Monthly private mortgage insurance premium.
    pub monthly_pmi: Decimal,

    /// Monthly homeowner's insurance premium.
    pub monthly_insurance: Decimal,

    /// Monthly share of the yearly property tax.
    pub monthly_property_tax: Decimal,

    /// Monthly maintenance estimate (fixed percentage of principal per year).
    pub monthly_maintenance: Decimal,

    /// Sum of all five monthly components.
    pub total_monthly_payment: Decimal,

    /// Property tax owed per year.
    pub yearly_property_tax: Decimal,

    /// Principal and interest paid over the full term.
    pub total_principal_and_interest: Decimal,

    /// Interest paid over the full term (principal and interest minus the
    /// original principal, floored at zero).
    pub total_interest: Decimal,

    /// PMI paid over the full term.
    pub total_pmi: Decimal,

    /// Homeowner's insurance paid over the full term.
    pub total_insurance: Decimal,

    /// Property tax paid over the full term.
    pub total_property_tax: Decimal,

    /// Lifetime cost of the loan: principal and interest, PMI, insurance and
    /// property tax. Excludes maintenance.
    pub total_cost: Decimal,
}
