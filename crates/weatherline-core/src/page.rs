// File: crates/weatherline-core/src/page.rs
// Summary: Self-contained interactive HTML page: dropdown, pre-rendered frames, tooltip.

use crate::chart::{Chart, Filter};
use crate::svg::{escape_xml, render_frame};

const PAGE_TEMPLATE: &str = include_str!("../assets/page.html");

/// Dropdown option markup: "all" labeled "All Cities" plus one option per
/// distinct city, sorted. Built once from the loaded dataset.
pub fn option_markup(chart: &Chart) -> String {
    let mut out = String::new();
    for value in chart.selector_options() {
        let label = if value == "all" { "All Cities" } else { value.as_str() };
        out.push_str(&format!(
            "<option class=\"city-option\" value=\"{}\">{}</option>\n",
            escape_xml(&value),
            escape_xml(label),
        ));
    }
    out
}

/// Assemble the full page: one pre-rendered SVG per filter state (only the
/// active one visible) plus the selector and tooltip wiring from the template.
pub fn render_page(chart: &Chart, title: &str) -> String {
    let mut frames = String::new();
    for value in chart.selector_options() {
        let filter = Filter::from_option_value(&value);
        let frame = chart.render(&filter);
        let active = if filter == Filter::All { " active" } else { "" };
        frames.push_str(&format!(
            "<div class=\"chart-frame{}\" data-filter=\"{}\">{}</div>\n",
            active,
            escape_xml(&value),
            render_frame(&frame, chart.layout(), chart.theme()),
        ));
    }

    PAGE_TEMPLATE
        .replace("{{title}}", &escape_xml(title))
        .replace("{{options}}", &option_markup(chart))
        .replace("{{frames}}", &frames)
        .replace("{{background}}", chart.theme().background)
        .replace("{{tooltip_fill}}", chart.theme().tooltip_fill)
        .replace("{{tooltip_border}}", chart.theme().tooltip_border)
        .replace("{{margin_left}}", &format!("{}", chart.layout().margins.left))
}
