// File: crates/weatherline-core/src/hover.rs
// Summary: Nearest-point lookup and tooltip content for pointer interaction.

use chrono::NaiveDate;

use crate::chart::Chart;
use crate::record::WeatherRecord;

/// Date format shown in the tooltip (e.g. "Jan 02, 2015").
pub const TOOLTIP_DATE_FORMAT: &str = "%b %d, %Y";

/// Record whose date has minimal absolute difference to `query`. Ties resolve
/// to the first record in insertion order.
pub fn nearest_by_date<'a>(
    records: &[&'a WeatherRecord],
    query: NaiveDate,
) -> Option<&'a WeatherRecord> {
    records
        .iter()
        .copied()
        .min_by_key(|r| (r.date - query).num_days().abs())
}

/// Floating label content for one looked-up point.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub city: String,
    pub date: NaiveDate,
    pub temp_f: f64,
}

impl Tooltip {
    /// The three display lines: city, formatted date, temperature.
    pub fn lines(&self) -> [String; 3] {
        [
            self.city.clone(),
            self.date.format(TOOLTIP_DATE_FORMAT).to_string(),
            format!("{} °F", self.temp_f),
        ]
    }
}

/// Resolve a pointer position over a city's line into tooltip content.
/// `pointer_x` is in plot coordinates (origin at the plot's left edge). The
/// scan is a synchronous linear pass, recomputed on every call.
pub fn hover(chart: &Chart, city: &str, pointer_x: f64) -> Option<Tooltip> {
    let members = chart.dataset().group(city);
    let query = chart.scales().time.date_at_px(pointer_x);
    nearest_by_date(&members, query).map(|r| Tooltip {
        city: r.city.clone(),
        date: r.date,
        temp_f: r.temp_f,
    })
}
