// File: crates/weatherline-core/tests/scales.rs
// Purpose: Validate scale domains, pixel mapping, inversion, and tick layout.

use chrono::NaiveDate;
use weatherline_core::axis::{month_ticks, temp_ticks};
use weatherline_core::{Dataset, Scales, TempScale, TimeScale, WeatherRecord};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn time_scale_maps_extent_to_pixel_range() {
    let s = TimeScale::new(date(2014, 7, 1), date(2014, 7, 31), 300.0);
    assert_eq!(s.to_px(date(2014, 7, 1)), 0.0);
    assert_eq!(s.to_px(date(2014, 7, 31)), 300.0);
    assert_eq!(s.to_px(date(2014, 7, 16)), 150.0);
}

#[test]
fn time_scale_inversion_round_trips_days() {
    let s = TimeScale::new(date(2014, 7, 1), date(2015, 6, 30), 730.0);
    for d in [date(2014, 7, 1), date(2014, 12, 25), date(2015, 6, 30)] {
        assert_eq!(s.date_at_px(s.to_px(d)), d);
    }
}

#[test]
fn single_date_domain_stays_invertible() {
    let s = TimeScale::new(date(2014, 7, 1), date(2014, 7, 1), 100.0);
    assert_eq!(s.date_at_px(0.0), date(2014, 7, 1));
}

#[test]
fn temp_scale_is_inverted_from_zero() {
    // Larger temperatures map to smaller y (origin top-left).
    let s = TempScale::new(100.0, 200.0);
    assert_eq!(s.to_px(0.0), 200.0);
    assert_eq!(s.to_px(100.0), 0.0);
    assert_eq!(s.to_px(50.0), 100.0);
    assert_eq!(s.temp_at_px(100.0), 50.0);
}

#[test]
fn scales_derive_from_observed_extents() {
    let dataset = Dataset::new(vec![
        WeatherRecord {
            date: date(2014, 7, 3),
            city: "Phoenix, AZ".to_string(),
            temp_f: 95.0,
        },
        WeatherRecord {
            date: date(2014, 7, 1),
            city: "Phoenix, AZ".to_string(),
            temp_f: 104.0,
        },
    ]);
    let scales = Scales::from_dataset(&dataset, 800.0, 290.0);
    assert_eq!(scales.time.domain().0, date(2014, 7, 1));
    assert_eq!(scales.temp.max(), 104.0);
    assert_eq!(scales.temp.to_px(104.0), 0.0);
}

#[test]
fn empty_dataset_falls_back_to_unit_domain() {
    let scales = Scales::from_dataset(&Dataset::default(), 800.0, 290.0);
    assert!(scales.temp.max() > 0.0);
    let (min, max) = scales.time.domain();
    assert!(min < max);
}

#[test]
fn month_ticks_land_on_month_starts_within_domain() {
    let ticks = month_ticks(date(2014, 7, 15), date(2014, 10, 2), 12);
    assert_eq!(
        ticks,
        vec![date(2014, 8, 1), date(2014, 9, 1), date(2014, 10, 1)]
    );
}

#[test]
fn month_ticks_are_thinned_to_the_cap() {
    let ticks = month_ticks(date(2010, 1, 1), date(2015, 1, 1), 12);
    assert!(ticks.len() <= 12);
    assert!(!ticks.is_empty());
}

#[test]
fn temp_ticks_span_zero_to_max() {
    let ticks = temp_ticks(100.0, 6);
    assert_eq!(ticks.first().copied(), Some(0.0));
    assert_eq!(ticks.last().copied(), Some(100.0));
    assert_eq!(ticks.len(), 6);
}
