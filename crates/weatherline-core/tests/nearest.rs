// File: crates/weatherline-core/tests/nearest.rs
// Purpose: Validate nearest-point lookup, its tie-break, and tooltip content.

use chrono::NaiveDate;
use weatherline_core::hover::{hover, nearest_by_date};
use weatherline_core::{Chart, Dataset, WeatherRecord};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn rec(city: &str, y: i32, m: u32, d: u32, temp: f64) -> WeatherRecord {
    WeatherRecord {
        date: date(y, m, d),
        city: city.to_string(),
        temp_f: temp,
    }
}

#[test]
fn nearest_picks_minimal_date_distance() {
    let records = vec![
        rec("Chicago (Midway), IL", 2015, 1, 1, 10.0),
        rec("Chicago (Midway), IL", 2015, 1, 10, 15.0),
        rec("Chicago (Midway), IL", 2015, 1, 20, 20.0),
    ];
    let refs: Vec<&WeatherRecord> = records.iter().collect();
    let hit = nearest_by_date(&refs, date(2015, 1, 12)).unwrap();
    assert_eq!(hit.date, date(2015, 1, 10));
}

#[test]
fn equidistant_query_resolves_to_first_seen_record() {
    // Both records are one day from the query; first in insertion order wins.
    let records = vec![
        rec("Chicago (Midway), IL", 2015, 1, 1, 10.0),
        rec("Chicago (Midway), IL", 2015, 1, 3, 20.0),
    ];
    let refs: Vec<&WeatherRecord> = records.iter().collect();
    let hit = nearest_by_date(&refs, date(2015, 1, 2)).unwrap();
    assert_eq!(hit.date, date(2015, 1, 1));
    assert_eq!(hit.temp_f, 10.0);
}

#[test]
fn empty_group_has_no_nearest_point() {
    assert!(nearest_by_date(&[], date(2015, 1, 1)).is_none());
}

#[test]
fn hover_inverts_pointer_position_and_formats_tooltip() {
    let chart = Chart::new(Dataset::new(vec![
        rec("Phoenix, AZ", 2015, 1, 1, 55.0),
        rec("Phoenix, AZ", 2015, 1, 31, 65.0),
    ]));
    // Pointer at the right edge of the plot maps to the last date.
    let width = chart.scales().time.width_px();
    let tip = hover(&chart, "Phoenix, AZ", width).expect("tooltip");
    assert_eq!(tip.date, date(2015, 1, 31));
    assert_eq!(
        tip.lines(),
        [
            "Phoenix, AZ".to_string(),
            "Jan 31, 2015".to_string(),
            "65 °F".to_string(),
        ]
    );
}

#[test]
fn hover_over_unknown_city_yields_nothing() {
    let chart = Chart::new(Dataset::new(vec![rec("Phoenix, AZ", 2015, 1, 1, 55.0)]));
    assert!(hover(&chart, "Nowhere, XX", 0.0).is_none());
}
