// File: crates/weatherline-core/src/scale.rs
// Summary: Time (X) and temperature (Y) scale transforms between data and pixel space.

use chrono::{Duration, NaiveDate};

use crate::record::Dataset;

/// Horizontal time scale mapping [min_date, max_date] to [0, width_px].
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    min: NaiveDate,
    span_days: f64,
    width_px: f64,
}

impl TimeScale {
    pub fn new(min: NaiveDate, max: NaiveDate, width_px: f64) -> Self {
        // Degenerate single-date domains get a one-day span so the map stays
        // invertible.
        let span_days = ((max - min).num_days() as f64).max(1.0);
        Self {
            min,
            span_days,
            width_px: width_px.max(1.0),
        }
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        (self.min, self.min + Duration::days(self.span_days as i64))
    }

    pub fn width_px(&self) -> f64 {
        self.width_px
    }

    #[inline]
    pub fn to_px(&self, date: NaiveDate) -> f64 {
        (date - self.min).num_days() as f64 / self.span_days * self.width_px
    }

    /// Inverse map used by tooltip lookup; rounds to the nearest day.
    #[inline]
    pub fn date_at_px(&self, px: f64) -> NaiveDate {
        let days = (px / self.width_px * self.span_days).round() as i64;
        self.min + Duration::days(days)
    }
}

/// Vertical linear scale mapping [0, max_temp] to [height_px, 0], inverted so
/// larger temperatures land at smaller y (origin top-left).
#[derive(Clone, Copy, Debug)]
pub struct TempScale {
    max: f64,
    height_px: f64,
}

impl TempScale {
    pub fn new(max: f64, height_px: f64) -> Self {
        Self {
            max: max.max(1e-9),
            height_px: height_px.max(1.0),
        }
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn height_px(&self) -> f64 {
        self.height_px
    }

    #[inline]
    pub fn to_px(&self, temp: f64) -> f64 {
        self.height_px - temp / self.max * self.height_px
    }

    #[inline]
    pub fn temp_at_px(&self, py: f64) -> f64 {
        (self.height_px - py) / self.height_px * self.max
    }
}

/// The pair of axis mappings derived from one dataset.
#[derive(Clone, Copy, Debug)]
pub struct Scales {
    pub time: TimeScale,
    pub temp: TempScale,
}

impl Scales {
    /// Derive scales from observed extents. Empty datasets fall back to a
    /// unit domain rather than NaN.
    pub fn from_dataset(dataset: &Dataset, plot_width: f64, plot_height: f64) -> Self {
        let mut min_date: Option<NaiveDate> = None;
        let mut max_date: Option<NaiveDate> = None;
        let mut max_temp = f64::NEG_INFINITY;
        for r in dataset.records() {
            min_date = Some(min_date.map_or(r.date, |d| d.min(r.date)));
            max_date = Some(max_date.map_or(r.date, |d| d.max(r.date)));
            max_temp = max_temp.max(r.temp_f);
        }
        let fallback = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();
        let min = min_date.unwrap_or(fallback);
        let max = max_date.unwrap_or(fallback + Duration::days(1));
        let max_temp = if max_temp.is_finite() { max_temp } else { 1.0 };
        Self {
            time: TimeScale::new(min, max, plot_width),
            temp: TempScale::new(max_temp, plot_height),
        }
    }
}
