//! Record view tests: population formatting, coordinates and display.

use crate::catalog::domain::MonkeyRecord;
use rstest::rstest;

fn record(population: u64) -> MonkeyRecord {
    MonkeyRecord::new("Test Monkey", "Test Forest", "Details", population)
}

#[rstest]
#[case(0, "0")]
#[case(1, "Individual")]
#[case(2, "2")]
#[case(999, "999")]
#[case(1_000, "1,000")]
#[case(23_000, "23,000")]
#[case(1_234_567, "1,234,567")]
fn formatted_population_groups_thousands(#[case] population: u64, #[case] expected: &str) {
    assert_eq!(record(population).formatted_population(), expected);
}

#[rstest]
#[case(0, false)]
#[case(1, false)]
#[case(2, true)]
#[case(10_000, true)]
fn wild_species_means_population_above_one(#[case] population: u64, #[case] wild: bool) {
    assert_eq!(record(population).is_wild_species(), wild);
}

#[rstest]
fn formatted_coordinates_use_six_decimal_places() {
    let located = record(1).with_coordinates(47.606_209, -122.332_071);

    assert_eq!(
        located.formatted_coordinates().as_deref(),
        Some("47.606209, -122.332071")
    );
}

#[rstest]
fn formatted_coordinates_pad_short_values() {
    let located = record(1).with_coordinates(-51.925_28, 0.5);

    assert_eq!(
        located.formatted_coordinates().as_deref(),
        Some("-51.925280, 0.500000")
    );
}

#[rstest]
fn records_without_coordinates_have_no_formatted_coordinates() {
    assert!(record(5).formatted_coordinates().is_none());
}

#[rstest]
fn display_shows_name_location_and_population() {
    let baboon = MonkeyRecord::new("Baboon", "Africa & Asia", "Details", 10_000);
    let henry = MonkeyRecord::new("Henry", "Phoenix", "Details", 1);

    assert_eq!(baboon.to_string(), "Baboon - Africa & Asia (Population: 10,000)");
    assert_eq!(henry.to_string(), "Henry - Phoenix (Population: Individual)");
}

#[rstest]
fn record_serializes_optional_fields_only_when_present() {
    let bare = serde_json::to_value(record(3)).expect("record serializes");
    let full = serde_json::to_value(
        record(3)
            .with_image("https://example.test/monkey.jpg")
            .with_coordinates(1.0, 2.0),
    )
    .expect("record serializes");

    assert!(bare.get("image").is_none());
    assert!(bare.get("coordinates").is_none());
    assert_eq!(full["image"], "https://example.test/monkey.jpg");
    assert_eq!(full["coordinates"]["latitude"], 1.0);
    assert_eq!(full["population"], 3);
}
