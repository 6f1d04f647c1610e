mod cost_breakdown;
mod loan_terms;

pub use cost_breakdown::CostBreakdown;
pub use loan_terms::LoanTerms;
