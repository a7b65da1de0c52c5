// File: crates/weatherline-core/tests/loader.rs
// Purpose: Validate CSV parsing, per-row validation, and the load report.

use chrono::NaiveDate;
use weatherline_core::record::{read_weather_csv, DataError, RowError};

#[test]
fn parses_date_city_and_temperature_columns() {
    // city_full values in the real file are quoted; emulate that here.
    let csv = "date,city_full,actual_mean_temp\n\
               7/1/2014,\"Phoenix, AZ\",95\n\
               7/2/2014,\"  Phoenix, AZ \",96.5\n";
    let (dataset, report) = read_weather_csv(csv.as_bytes()).unwrap();
    assert_eq!(report.rows_read, 2);
    assert_eq!(report.rows_kept, 2);
    assert!(report.bad_rows.is_empty());

    let r = &dataset.records()[0];
    assert_eq!(r.date, NaiveDate::from_ymd_opt(2014, 7, 1).unwrap());
    assert_eq!(r.city, "Phoenix, AZ");
    assert_eq!(r.temp_f, 95.0);
    // City names are whitespace-trimmed
    assert_eq!(dataset.records()[1].city, "Phoenix, AZ");
    assert_eq!(dataset.records()[1].temp_f, 96.5);
}

#[test]
fn extra_columns_are_ignored_and_lookup_is_by_name() {
    let csv = "record_id,actual_mean_temp,city_full,date,notes\n\
               1,81,\"Charlotte, NC\",7/1/2014,hot\n";
    let (dataset, _) = read_weather_csv(csv.as_bytes()).unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0].city, "Charlotte, NC");
    assert_eq!(dataset.records()[0].temp_f, 81.0);
}

#[test]
fn malformed_rows_are_dropped_and_reported() {
    let csv = "date,city_full,actual_mean_temp\n\
               7/1/2014,\"Phoenix, AZ\",95\n\
               13/45/2014,\"Phoenix, AZ\",96\n\
               7/3/2014,\"Phoenix, AZ\",not-a-number\n\
               7/4/2014,\"Phoenix, AZ\",97\n";
    let (dataset, report) = read_weather_csv(csv.as_bytes()).unwrap();
    assert_eq!(report.rows_read, 4);
    assert_eq!(report.rows_kept, 2);
    assert_eq!(dataset.len(), 2);

    assert_eq!(report.dropped(), 2);
    assert!(matches!(report.bad_rows[0].1, RowError::BadDate(_)));
    assert!(matches!(report.bad_rows[1].1, RowError::BadTemp(_)));
    // Reported lines point at the offending source rows (1-based, after header).
    assert_eq!(report.bad_rows[0].0, 3);
    assert_eq!(report.bad_rows[1].0, 4);
}

#[test]
fn short_rows_are_dropped_not_fatal() {
    let csv = "date,city_full,actual_mean_temp\n\
               7/1/2014,\"Phoenix, AZ\",95\n\
               7/2/2014\n";
    let (dataset, report) = read_weather_csv(csv.as_bytes()).unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(report.dropped(), 1);
    assert_eq!(report.bad_rows[0].1, RowError::MissingField);
}

#[test]
fn missing_required_column_fails_the_load() {
    let csv = "date,city,actual_mean_temp\n7/1/2014,Phoenix,95\n";
    let err = read_weather_csv(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, DataError::MissingColumn("city_full")));
}

#[test]
fn cities_are_distinct_and_sorted() {
    let csv = "date,city_full,actual_mean_temp\n\
               7/1/2014,\"Phoenix, AZ\",95\n\
               7/1/2014,\"Charlotte, NC\",81\n\
               7/2/2014,\"Phoenix, AZ\",96\n";
    let (dataset, _) = read_weather_csv(csv.as_bytes()).unwrap();
    assert_eq!(dataset.cities(), vec!["Charlotte, NC", "Phoenix, AZ"]);

    // Groups keep first-appearance order with members in load order.
    let groups = dataset.groups();
    assert_eq!(groups[0].0, "Phoenix, AZ");
    assert_eq!(groups[0].1.len(), 2);
    assert_eq!(groups[1].0, "Charlotte, NC");
}
