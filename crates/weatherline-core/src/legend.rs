// File: crates/weatherline-core/src/legend.rs
// Summary: Legend panel layout and element generation, sized to the group count.

use crate::color::CityColors;
use crate::element::{Anchor, Element, RectElement, TextElement};
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendLayout {
    pub row_height: f64,
    pub padding: f64,
    pub box_width: f64,
    /// Vertical gap between the plot bottom and the legend box.
    pub offset_y: f64,
    pub swatch_size: f64,
}

impl Default for LegendLayout {
    fn default() -> Self {
        Self {
            row_height: 20.0,
            padding: 10.0,
            box_width: 220.0,
            offset_y: 60.0,
            swatch_size: 10.0,
        }
    }
}

impl LegendLayout {
    /// Panel height scales linearly with the number of groups shown.
    pub fn box_height(&self, count: usize) -> f64 {
        count as f64 * self.row_height + 2.0 * self.padding
    }
}

/// Legend box, one swatch and label per group, positioned below the plot.
pub fn legend_elements(
    groups: &[String],
    colors: &CityColors,
    layout: &LegendLayout,
    plot_height: f64,
    theme: &Theme,
) -> Vec<Element> {
    let legend_y = plot_height + layout.offset_y;
    let mut out = Vec::with_capacity(1 + groups.len() * 2);

    out.push(Element::Rect(RectElement {
        x: 0.0,
        y: legend_y,
        width: layout.box_width,
        height: layout.box_height(groups.len()),
        fill: theme.legend_fill.to_string(),
        stroke: Some(theme.legend_border.to_string()),
        corner_radius: 6.0,
        class: "legend-box",
    }));

    for (i, city) in groups.iter().enumerate() {
        let row_y = legend_y + layout.padding + i as f64 * layout.row_height;
        out.push(Element::Rect(RectElement {
            x: layout.padding,
            y: row_y,
            width: layout.swatch_size,
            height: layout.swatch_size,
            fill: colors.color_for(city).to_string(),
            stroke: None,
            corner_radius: 0.0,
            class: "legend-rect",
        }));
        out.push(Element::Text(TextElement {
            x: layout.padding + layout.swatch_size + 5.0,
            y: row_y + layout.swatch_size - 1.0,
            content: city.clone(),
            size: theme.font_size,
            anchor: Anchor::Start,
            rotated: false,
            fill: theme.legend_text.to_string(),
            class: "legend-text",
        }));
    }

    out
}
