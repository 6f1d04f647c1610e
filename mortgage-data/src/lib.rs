//! Bundled reference data for mortgage cost estimates.
//!
//! Currently this crate carries a single table: the effective property tax
//! rate per U.S. state (plus the District of Columbia), used to pre-fill the
//! property-tax-rate input of the estimator.

mod table;

pub use table::{
    BUNDLED_REFERENCE_YEAR, PropertyTaxLookupError, PropertyTaxTable, PropertyTaxTableError,
    StateTaxRecord,
};
