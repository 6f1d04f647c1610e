//! Effective property tax rates by U.S. state.
//!
//! The table maps a state's display name (not its abbreviation) to the
//! effective property tax rate on owner-occupied housing, in percent per
//! year, for a fixed reference year. It is built once from a CSV bundled at
//! compile time and never mutated; lookups against it are exact-match.
//!
//! A missing state name signals a data-integrity defect, not a user input
//! error: the set of valid state names is closed and the table is expected
//! to be exhaustive over it (50 states plus the District of Columbia).
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use mortgage_data::PropertyTaxTable;
//!
//! let table = PropertyTaxTable::bundled();
//!
//! assert_eq!(table.effective_rate("Alabama"), Ok(dec!(0.41)));
//! assert!(table.effective_rate("Atlantis").is_err());
//! ```

use std::collections::HashMap;
use std::io::Read;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Reference year of the bundled rate data.
pub const BUNDLED_REFERENCE_YEAR: i32 = 2023;

const BUNDLED_CSV: &str = include_str!("../data/property_tax_rates.csv");

static BUNDLED_TABLE: LazyLock<PropertyTaxTable> = LazyLock::new(|| {
    PropertyTaxTable::parse(BUNDLED_REFERENCE_YEAR, BUNDLED_CSV.as_bytes())
        .expect("bundled property tax rates CSV is well-formed")
});

/// Errors that can occur when building a property tax table from CSV.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertyTaxTableError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("duplicate entry for state '{0}'")]
    DuplicateState(String),

    #[error("table contains no entries")]
    Empty,
}

impl From<csv::Error> for PropertyTaxTableError {
    fn from(err: csv::Error) -> Self {
        PropertyTaxTableError::CsvParse(err.to_string())
    }
}

/// Errors that can occur when looking up a rate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertyTaxLookupError {
    /// The state name has no entry in the table. The table is expected to be
    /// exhaustive over valid state names, so this indicates stale or
    /// incomplete reference data rather than bad user input.
    #[error("no effective property tax rate for state '{0}'")]
    StateNotFound(String),
}

/// A single record from the property tax rates CSV file.
///
/// The CSV format:
/// - `state`: The state's display name (e.g. "New Jersey")
/// - `effective_rate`: The effective tax rate in percent (e.g. 2.49)
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StateTaxRecord {
    pub state: String,
    pub effective_rate: Decimal,
}

/// Immutable mapping from state display name to effective property tax rate.
#[derive(Debug, Clone)]
pub struct PropertyTaxTable {
    reference_year: i32,
    rates: HashMap<String, Decimal>,
}

impl PropertyTaxTable {
    /// Builds a table from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a string slice. Rates for other reference years can be loaded this
    /// way without touching the bundled data.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyTaxTableError`] if the CSV is malformed, a state
    /// appears twice, or the table would be empty.
    pub fn parse<R: Read>(
        reference_year: i32,
        reader: R,
    ) -> Result<Self, PropertyTaxTableError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut rates = HashMap::new();

        for result in csv_reader.deserialize() {
            let record: StateTaxRecord = result?;
            if rates.insert(record.state.clone(), record.effective_rate).is_some() {
                return Err(PropertyTaxTableError::DuplicateState(record.state));
            }
        }

        if rates.is_empty() {
            return Err(PropertyTaxTableError::Empty);
        }

        Ok(Self {
            reference_year,
            rates,
        })
    }

    /// Returns the table bundled at compile time.
    ///
    /// The table is parsed once, on first access, and shared for the life of
    /// the process.
    pub fn bundled() -> &'static Self {
        &BUNDLED_TABLE
    }

    /// Looks up the effective tax rate for a state by its display name.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyTaxLookupError::StateNotFound`] if the name has no
    /// entry.
    pub fn effective_rate(
        &self,
        state: &str,
    ) -> Result<Decimal, PropertyTaxLookupError> {
        self.rates
            .get(state)
            .copied()
            .ok_or_else(|| PropertyTaxLookupError::StateNotFound(state.to_string()))
    }

    /// The year the rates were measured.
    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterates over the state names in the table, in no particular order.
    ///
    /// The external form layer uses this to populate its state selector.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const TEST_CSV: &str = "state,effective_rate\nAlabama,0.41\nNew Jersey,2.49\nHawaii,0.28\n";

    // =========================================================================
    // parse tests
    // =========================================================================

    #[test]
    fn parse_reads_all_records() {
        let table = PropertyTaxTable::parse(2023, TEST_CSV.as_bytes()).expect("Failed to parse");

        assert_eq!(table.len(), 3);
        assert_eq!(table.reference_year(), 2023);
    }

    #[test]
    fn parse_rejects_empty_table() {
        let csv = "state,effective_rate\n";

        let result = PropertyTaxTable::parse(2023, csv.as_bytes());

        assert_eq!(result.unwrap_err(), PropertyTaxTableError::Empty);
    }

    #[test]
    fn parse_rejects_duplicate_state() {
        let csv = "state,effective_rate\nAlabama,0.41\nAlabama,0.42\n";

        let result = PropertyTaxTable::parse(2023, csv.as_bytes());

        assert_eq!(
            result.unwrap_err(),
            PropertyTaxTableError::DuplicateState("Alabama".to_string())
        );
    }

    #[test]
    fn parse_rejects_bad_rate() {
        let csv = "state,effective_rate\nAlabama,not-a-rate\n";

        let result = PropertyTaxTable::parse(2023, csv.as_bytes());

        let err = result.expect_err("Should fail for invalid decimal");
        let PropertyTaxTableError::CsvParse(msg) = err else {
            panic!("Expected CsvParse error, got: {:?}", err);
        };
        assert!(
            msg.contains("invalid") || msg.contains("Invalid"),
            "Expected a decimal parse message, got: {}",
            msg
        );
    }

    #[test]
    fn parse_rejects_missing_column() {
        let csv = "state\nAlabama\n";

        let result = PropertyTaxTable::parse(2023, csv.as_bytes());

        assert!(matches!(
            result,
            Err(PropertyTaxTableError::CsvParse(_))
        ));
    }

    // =========================================================================
    // lookup tests
    // =========================================================================

    #[test]
    fn effective_rate_returns_stored_rate() {
        let table = PropertyTaxTable::parse(2023, TEST_CSV.as_bytes()).expect("Failed to parse");

        assert_eq!(table.effective_rate("New Jersey"), Ok(dec!(2.49)));
    }

    #[test]
    fn effective_rate_is_exact_match_on_display_name() {
        let table = PropertyTaxTable::parse(2023, TEST_CSV.as_bytes()).expect("Failed to parse");

        // Abbreviations and case variants are not valid keys.
        assert_eq!(
            table.effective_rate("NJ"),
            Err(PropertyTaxLookupError::StateNotFound("NJ".to_string()))
        );
        assert_eq!(
            table.effective_rate("new jersey"),
            Err(PropertyTaxLookupError::StateNotFound(
                "new jersey".to_string()
            ))
        );
    }

    #[test]
    fn effective_rate_fails_for_unknown_state() {
        let table = PropertyTaxTable::parse(2023, TEST_CSV.as_bytes()).expect("Failed to parse");

        assert_eq!(
            table.effective_rate("Atlantis"),
            Err(PropertyTaxLookupError::StateNotFound(
                "Atlantis".to_string()
            ))
        );
    }

    #[test]
    fn states_iterates_every_entry() {
        let table = PropertyTaxTable::parse(2023, TEST_CSV.as_bytes()).expect("Failed to parse");

        let mut states: Vec<&str> = table.states().collect();
        states.sort_unstable();

        assert_eq!(states, vec!["Alabama", "Hawaii", "New Jersey"]);
    }
}
