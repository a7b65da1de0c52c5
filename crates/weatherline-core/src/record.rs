// File: crates/weatherline-core/src/record.rs
// Summary: Weather record model and validated CSV loading.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

/// Column names the loader depends on, as they appear in the source CSV.
pub const DATE_COLUMN: &str = "date";
pub const CITY_COLUMN: &str = "city_full";
pub const TEMP_COLUMN: &str = "actual_mean_temp";

/// Date format of the source CSV (e.g. "7/1/2014").
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// One row of the input dataset: city, date, mean temperature in °F.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherRecord {
    pub date: NaiveDate,
    pub city: String,
    pub temp_f: f64,
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("missing column '{0}' in CSV header")]
    MissingColumn(&'static str),
    #[error("CSV read failed")]
    Csv(#[from] csv::Error),
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

/// Why a single row was rejected. Rejected rows are dropped and reported,
/// never loaded with sentinel values.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("unparseable date '{0}' (expected {DATE_FORMAT})")]
    BadDate(String),
    #[error("non-numeric temperature '{0}'")]
    BadTemp(String),
    #[error("row is missing a required field")]
    MissingField,
}

/// Outcome of a load: how many rows were read, kept, and which were dropped.
#[derive(Clone, Debug, Default)]
pub struct LoadReport {
    pub rows_read: usize,
    pub rows_kept: usize,
    /// (1-based source line, reason) per dropped row.
    pub bad_rows: Vec<(u64, RowError)>,
}

impl LoadReport {
    pub fn dropped(&self) -> usize {
        self.bad_rows.len()
    }
}

/// Ordered, immutable collection of records, loaded once.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<WeatherRecord>,
}

impl Dataset {
    pub fn new(records: Vec<WeatherRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct city names, sorted ascending.
    pub fn cities(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for r in &self.records {
            if !out.iter().any(|c| c == &r.city) {
                out.push(r.city.clone());
            }
        }
        out.sort();
        out
    }

    /// Records grouped by city, keys in first-appearance order, values in
    /// load order. Recomputed on each call; nothing is cached.
    pub fn groups(&self) -> Vec<(String, Vec<&WeatherRecord>)> {
        let mut out: Vec<(String, Vec<&WeatherRecord>)> = Vec::new();
        for r in &self.records {
            match out.iter_mut().find(|(city, _)| city == &r.city) {
                Some((_, members)) => members.push(r),
                None => out.push((r.city.clone(), vec![r])),
            }
        }
        out
    }

    /// One city's records in load order. Empty if the city is unknown.
    pub fn group(&self, city: &str) -> Vec<&WeatherRecord> {
        self.records.iter().filter(|r| r.city == city).collect()
    }
}

fn parse_row(
    rec: &csv::StringRecord,
    i_date: usize,
    i_city: usize,
    i_temp: usize,
) -> Result<WeatherRecord, RowError> {
    let date_raw = rec.get(i_date).ok_or(RowError::MissingField)?;
    let city_raw = rec.get(i_city).ok_or(RowError::MissingField)?;
    let temp_raw = rec.get(i_temp).ok_or(RowError::MissingField)?;

    let date = NaiveDate::parse_from_str(date_raw.trim(), DATE_FORMAT)
        .map_err(|_| RowError::BadDate(date_raw.to_string()))?;
    let temp_f: f64 = temp_raw
        .trim()
        .parse()
        .map_err(|_| RowError::BadTemp(temp_raw.to_string()))?;
    if !temp_f.is_finite() {
        return Err(RowError::BadTemp(temp_raw.to_string()));
    }

    Ok(WeatherRecord {
        date,
        city: city_raw.trim().to_string(),
        temp_f,
    })
}

/// Read weather records from any CSV source. Malformed rows are dropped and
/// listed in the report; a missing required column fails the whole load.
pub fn read_weather_csv<R: Read>(reader: R) -> Result<(Dataset, LoadReport), DataError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let find = |name: &'static str| -> Result<usize, DataError> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(DataError::MissingColumn(name))
    };
    let i_date = find(DATE_COLUMN)?;
    let i_city = find(CITY_COLUMN)?;
    let i_temp = find(TEMP_COLUMN)?;

    let mut records = Vec::new();
    let mut report = LoadReport::default();

    for (row_index, rec) in rdr.records().enumerate() {
        let rec = rec?;
        report.rows_read += 1;
        let line = rec
            .position()
            .map(|p| p.line())
            .unwrap_or(row_index as u64 + 2);
        match parse_row(&rec, i_date, i_city, i_temp) {
            Ok(r) => {
                records.push(r);
                report.rows_kept += 1;
            }
            Err(e) => report.bad_rows.push((line, e)),
        }
    }

    Ok((Dataset::new(records), report))
}

/// Load weather records from a CSV file on disk.
pub fn load_weather_csv(path: impl AsRef<Path>) -> Result<(Dataset, LoadReport), DataError> {
    let file = std::fs::File::open(path.as_ref())?;
    read_weather_csv(file)
}
