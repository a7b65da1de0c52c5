// File: crates/weatherline-core/src/lib.rs
// Summary: Core library entry point; exports the data, scale, and rendering API.

pub mod axis;
pub mod chart;
pub mod color;
pub mod element;
pub mod hover;
pub mod legend;
pub mod page;
pub mod record;
pub mod scale;
pub mod svg;
pub mod theme;

pub use chart::{Chart, ChartLayout, Filter, Frame, Margins};
pub use color::CityColors;
pub use element::{Element, LinePath};
pub use hover::{nearest_by_date, Tooltip};
pub use legend::LegendLayout;
pub use record::{load_weather_csv, read_weather_csv, DataError, Dataset, LoadReport, WeatherRecord};
pub use scale::{Scales, TempScale, TimeScale};
pub use theme::Theme;
