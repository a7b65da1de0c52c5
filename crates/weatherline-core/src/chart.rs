// File: crates/weatherline-core/src/chart.rs
// Summary: Chart model and the pure render pass from a city filter to drawable elements.

use crate::axis::axis_elements;
use crate::color::CityColors;
use crate::element::{Element, LinePath};
use crate::legend::{legend_elements, LegendLayout};
use crate::record::{Dataset, WeatherRecord};
use crate::scale::Scales;
use crate::theme::Theme;

/// Screen margins around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 50.0,
            right: 30.0,
            bottom: 60.0,
            left: 70.0,
        }
    }
}

/// Fixed chart geometry: 900x400 outer box plus a strip below for the legend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    pub outer_width: f64,
    pub outer_height: f64,
    pub legend_strip: f64,
    pub margins: Margins,
    pub legend: LegendLayout,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            outer_width: 900.0,
            outer_height: 400.0,
            legend_strip: 120.0,
            margins: Margins::default(),
            legend: LegendLayout::default(),
        }
    }
}

impl ChartLayout {
    pub fn plot_width(&self) -> f64 {
        self.outer_width - self.margins.left - self.margins.right
    }

    pub fn plot_height(&self) -> f64 {
        self.outer_height - self.margins.top - self.margins.bottom
    }
}

/// The active selection determining which groups are rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    City(String),
}

impl Filter {
    /// Parse a selector option value ("all" or a city name).
    pub fn from_option_value(value: &str) -> Self {
        if value == "all" {
            Filter::All
        } else {
            Filter::City(value.to_string())
        }
    }

    pub fn option_value(&self) -> &str {
        match self {
            Filter::All => "all",
            Filter::City(c) => c,
        }
    }
}

/// Output of one render pass: the drawable elements and the group names they
/// were derived from, in draw order.
#[derive(Clone, Debug)]
pub struct Frame {
    pub elements: Vec<Element>,
    pub groups: Vec<String>,
}

impl Frame {
    pub fn line_paths(&self) -> impl Iterator<Item = &LinePath> {
        self.elements.iter().filter_map(|e| match e {
            Element::Path(p) => Some(p),
            _ => None,
        })
    }

    pub fn count_class(&self, class: &str) -> usize {
        self.elements.iter().filter(|e| e.class() == class).count()
    }
}

/// Immutable chart: dataset loaded once, scales derived once. Rendering never
/// mutates shared state; each call produces a fresh frame.
#[derive(Clone, Debug)]
pub struct Chart {
    dataset: Dataset,
    scales: Scales,
    layout: ChartLayout,
    colors: CityColors,
    theme: Theme,
}

impl Chart {
    pub fn new(dataset: Dataset) -> Self {
        let layout = ChartLayout::default();
        let scales = Scales::from_dataset(&dataset, layout.plot_width(), layout.plot_height());
        Self {
            dataset,
            scales,
            layout,
            colors: CityColors::default(),
            theme: Theme::default(),
        }
    }

    pub fn with_layout(mut self, layout: ChartLayout) -> Self {
        self.layout = layout;
        self.scales =
            Scales::from_dataset(&self.dataset, layout.plot_width(), layout.plot_height());
        self
    }

    pub fn with_colors(mut self, colors: CityColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn scales(&self) -> &Scales {
        &self.scales
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn colors(&self) -> &CityColors {
        &self.colors
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Selector option values: "all" plus every distinct city, sorted.
    /// Populated once at load time by the page.
    pub fn selector_options(&self) -> Vec<String> {
        let mut out = vec!["all".to_string()];
        out.extend(self.dataset.cities());
        out
    }

    fn groups_for(&self, filter: &Filter) -> Vec<(String, Vec<&WeatherRecord>)> {
        match filter {
            Filter::All => self.dataset.groups(),
            Filter::City(city) => {
                let members = self.dataset.group(city);
                if members.is_empty() {
                    // Unknown city: nothing to draw.
                    Vec::new()
                } else {
                    vec![(city.clone(), members)]
                }
            }
        }
    }

    /// Render the chart for a filter. Idempotent: the same filter always
    /// produces the same frame, because nothing is retained between calls.
    pub fn render(&self, filter: &Filter) -> Frame {
        let groups = self.groups_for(filter);
        let group_names: Vec<String> = groups.iter().map(|(c, _)| c.clone()).collect();

        let mut elements = axis_elements(&self.scales, &self.theme);

        for (city, members) in &groups {
            let mut ordered: Vec<&WeatherRecord> = members.clone();
            // Stable sort keeps insertion order between same-date records.
            ordered.sort_by_key(|r| r.date);
            let samples: Vec<_> = ordered.iter().map(|r| (r.date, r.temp_f)).collect();
            let points: Vec<_> = ordered
                .iter()
                .map(|r| (self.scales.time.to_px(r.date), self.scales.temp.to_px(r.temp_f)))
                .collect();
            elements.push(Element::Path(LinePath {
                city: city.clone(),
                color: self.colors.color_for(city).to_string(),
                stroke_width: 2.0,
                points,
                samples,
            }));
        }

        elements.extend(legend_elements(
            &group_names,
            &self.colors,
            &self.layout.legend,
            self.layout.plot_height(),
            &self.theme,
        ));

        Frame {
            elements,
            groups: group_names,
        }
    }
}
