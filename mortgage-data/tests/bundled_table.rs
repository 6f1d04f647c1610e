//! Integration tests for the bundled property tax rate table.

use mortgage_data::{BUNDLED_REFERENCE_YEAR, PropertyTaxLookupError, PropertyTaxTable};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Display names of the 50 states plus the District of Columbia.
const STATE_NAMES: [&str; 51] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "District of Columbia",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

#[test]
fn bundled_table_covers_every_state_and_the_district() {
    let table = PropertyTaxTable::bundled();

    assert_eq!(table.len(), STATE_NAMES.len());
    for state in STATE_NAMES {
        let rate = table
            .effective_rate(state)
            .unwrap_or_else(|_| panic!("missing rate for {state}"));
        assert!(rate > Decimal::ZERO, "rate for {state} should be positive");
        assert!(
            rate < dec!(5),
            "rate for {state} should be a plausible percentage"
        );
    }
}

#[test]
fn bundled_table_has_expected_reference_year() {
    let table = PropertyTaxTable::bundled();

    assert_eq!(table.reference_year(), BUNDLED_REFERENCE_YEAR);
}

#[test]
fn bundled_table_returns_known_rates() {
    let table = PropertyTaxTable::bundled();

    assert_eq!(table.effective_rate("Alabama"), Ok(dec!(0.41)));
    assert_eq!(table.effective_rate("New Jersey"), Ok(dec!(2.49)));
    assert_eq!(table.effective_rate("Hawaii"), Ok(dec!(0.28)));
}

#[test]
fn bundled_table_rejects_unknown_state() {
    let table = PropertyTaxTable::bundled();

    assert_eq!(
        table.effective_rate("Atlantis"),
        Err(PropertyTaxLookupError::StateNotFound(
            "Atlantis".to_string()
        ))
    );
}

#[test]
fn bundled_table_lookup_is_shared_and_stable() {
    // Two accesses observe the same parsed table.
    let first = PropertyTaxTable::bundled();
    let second = PropertyTaxTable::bundled();

    assert!(std::ptr::eq(first, second));
    assert_eq!(
        first.effective_rate("Texas"),
        second.effective_rate("Texas")
    );
}
