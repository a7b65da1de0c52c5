// File: crates/weatherline-core/src/element.rs
// Summary: Drawable element model; the pure output of a render pass.

use chrono::NaiveDate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// One data line: pixel-space points plus the data-space samples behind them,
/// both ordered by date.
#[derive(Clone, Debug, PartialEq)]
pub struct LinePath {
    pub city: String,
    pub color: String,
    pub stroke_width: f64,
    pub points: Vec<(f64, f64)>,
    pub samples: Vec<(NaiveDate, f64)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RectElement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub stroke: Option<String>,
    pub corner_radius: f64,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextElement {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub size: f64,
    pub anchor: Anchor,
    /// Rotated -90° around its own origin (left axis title convention).
    pub rotated: bool,
    pub fill: String,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SegmentElement {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: String,
    pub stroke_width: f64,
    pub class: &'static str,
}

/// A drawable chart element in plot coordinates (origin at the plot's
/// top-left, inside the margins).
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Path(LinePath),
    Rect(RectElement),
    Text(TextElement),
    Segment(SegmentElement),
}

impl Element {
    pub fn class(&self) -> &'static str {
        match self {
            Element::Path(_) => "line",
            Element::Rect(r) => r.class,
            Element::Text(t) => t.class,
            Element::Segment(s) => s.class,
        }
    }
}
