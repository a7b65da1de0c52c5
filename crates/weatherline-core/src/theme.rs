// File: crates/weatherline-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors (CSS color strings).

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub axis_line: &'static str,
    pub tick_label: &'static str,
    pub axis_title: &'static str,
    pub legend_fill: &'static str,
    pub legend_border: &'static str,
    pub legend_text: &'static str,
    pub tooltip_fill: &'static str,
    pub tooltip_border: &'static str,
    pub font_family: &'static str,
    pub font_size: f64,
}

impl Theme {
    /// Default theme; matches the look of the original dashboard page.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#ffffff",
            axis_line: "#000000",
            tick_label: "#333333",
            axis_title: "#000000",
            legend_fill: "#ffffff",
            legend_border: "#cccccc",
            legend_text: "#000000",
            tooltip_fill: "#ffffff",
            tooltip_border: "#cccccc",
            font_family: "sans-serif",
            font_size: 12.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            axis_line: "#b4b4be",
            tick_label: "#969aa0",
            axis_title: "#ebebf5",
            legend_fill: "#1c1c20",
            legend_border: "#3c3c46",
            legend_text: "#ebebf5",
            tooltip_fill: "#1c1c20",
            tooltip_border: "#3c3c46",
            font_family: "sans-serif",
            font_size: 12.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
