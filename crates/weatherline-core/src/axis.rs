// File: crates/weatherline-core/src/axis.rs
// Summary: Axis tick layout and axis element generation.

use chrono::{Datelike, NaiveDate};

use crate::element::{Anchor, Element, SegmentElement, TextElement};
use crate::scale::Scales;
use crate::theme::Theme;

/// Tick label format of the time axis (e.g. "Jul 2014").
pub const MONTH_LABEL_FORMAT: &str = "%b %Y";

const TICK_LEN: f64 = 6.0;
const MAX_MONTH_TICKS: usize = 12;
const TEMP_TICK_STEPS: usize = 6;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

fn first_of_next_month(d: NaiveDate) -> NaiveDate {
    let (y, m) = if d.month() == 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), d.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1).unwrap_or(d)
}

/// Month-start dates inside [min, max], thinned to at most `max_ticks`.
pub fn month_ticks(min: NaiveDate, max: NaiveDate, max_ticks: usize) -> Vec<NaiveDate> {
    let mut t = NaiveDate::from_ymd_opt(min.year(), min.month(), 1).unwrap_or(min);
    if t < min {
        t = first_of_next_month(t);
    }
    let mut out = Vec::new();
    while t <= max {
        out.push(t);
        t = first_of_next_month(t);
    }
    if max_ticks > 0 && out.len() > max_ticks {
        let step = out.len().div_ceil(max_ticks);
        out = out.into_iter().step_by(step).collect();
    }
    out
}

/// Evenly spaced temperature ticks from zero to the domain max.
pub fn temp_ticks(max: f64, steps: usize) -> Vec<f64> {
    linspace(0.0, max, steps.max(2))
}

/// Bottom time axis and left temperature axis, with ticks, tick labels, and
/// axis titles, in plot coordinates.
pub fn axis_elements(scales: &Scales, theme: &Theme) -> Vec<Element> {
    let w = scales.time.width_px();
    let h = scales.temp.height_px();
    let mut out = Vec::new();

    // Axis lines
    for (x1, y1, x2, y2) in [(0.0, h, w, h), (0.0, 0.0, 0.0, h)] {
        out.push(Element::Segment(SegmentElement {
            x1,
            y1,
            x2,
            y2,
            stroke: theme.axis_line.to_string(),
            stroke_width: 1.0,
            class: "axis",
        }));
    }

    // Time ticks along the bottom, labeled by month/year
    let (min, max) = scales.time.domain();
    for tick in month_ticks(min, max, MAX_MONTH_TICKS) {
        let x = scales.time.to_px(tick);
        out.push(Element::Segment(SegmentElement {
            x1: x,
            y1: h,
            x2: x,
            y2: h + TICK_LEN,
            stroke: theme.axis_line.to_string(),
            stroke_width: 1.0,
            class: "tick",
        }));
        out.push(Element::Text(TextElement {
            x,
            y: h + TICK_LEN + theme.font_size + 2.0,
            content: tick.format(MONTH_LABEL_FORMAT).to_string(),
            size: theme.font_size,
            anchor: Anchor::Middle,
            rotated: false,
            fill: theme.tick_label.to_string(),
            class: "tick-label",
        }));
    }

    // Temperature ticks along the left
    for tick in temp_ticks(scales.temp.max(), TEMP_TICK_STEPS) {
        let y = scales.temp.to_px(tick);
        out.push(Element::Segment(SegmentElement {
            x1: -TICK_LEN,
            y1: y,
            x2: 0.0,
            y2: y,
            stroke: theme.axis_line.to_string(),
            stroke_width: 1.0,
            class: "tick",
        }));
        out.push(Element::Text(TextElement {
            x: -TICK_LEN - 4.0,
            y: y + 4.0,
            content: format!("{tick:.0}"),
            size: theme.font_size,
            anchor: Anchor::End,
            rotated: false,
            fill: theme.tick_label.to_string(),
            class: "tick-label",
        }));
    }

    // Axis titles
    out.push(Element::Text(TextElement {
        x: w / 2.0,
        y: h + 45.0,
        content: "Date".to_string(),
        size: theme.font_size,
        anchor: Anchor::Middle,
        rotated: false,
        fill: theme.axis_title.to_string(),
        class: "axis-title",
    }));
    out.push(Element::Text(TextElement {
        x: -h / 2.0,
        y: -50.0,
        content: "Actual Mean Temperature (°F)".to_string(),
        size: theme.font_size,
        anchor: Anchor::Middle,
        rotated: true,
        fill: theme.axis_title.to_string(),
        class: "axis-title",
    }));

    out
}
