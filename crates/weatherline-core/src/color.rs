// File: crates/weatherline-core/src/color.rs
// Summary: Explicit city-to-color table with a defined fallback for unmapped cities.

/// Color used for any city outside the configured table.
pub const FALLBACK_COLOR: &str = "#888888";

/// Ordinal city -> color assignment. The default table carries the six known
/// cities of the source dataset; anything else gets [`FALLBACK_COLOR`].
#[derive(Clone, Debug)]
pub struct CityColors {
    entries: Vec<(String, String)>,
}

impl CityColors {
    pub fn new(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn color_for(&self, city: &str) -> &str {
        self.entries
            .iter()
            .find(|(name, _)| name == city)
            .map(|(_, color)| color.as_str())
            .unwrap_or(FALLBACK_COLOR)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CityColors {
    fn default() -> Self {
        let fixed = [
            ("Charlotte, NC", "steelblue"),
            ("Chicago (Midway), IL", "orange"),
            ("Indianapolis, IN", "green"),
            ("Jacksonville, FL", "red"),
            ("Philadelphia, PA", "goldenrod"),
            ("Phoenix, AZ", "purple"),
        ];
        Self::new(
            fixed
                .into_iter()
                .map(|(c, v)| (c.to_string(), v.to_string())),
        )
    }
}
