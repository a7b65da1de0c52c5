// File: crates/demo/src/main.rs
// Summary: Demo loads a weather CSV and renders per-city SVGs plus an interactive HTML page.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use weatherline_core::page::render_page;
use weatherline_core::svg::render_frame;
use weatherline_core::{load_weather_csv, Chart, Filter};

fn main() -> Result<()> {
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "weather.csv".to_string());
    let path = Path::new(&raw);
    println!("Using input file: {}", path.display());

    let (dataset, report) = load_weather_csv(path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!(
        "Loaded {} of {} rows ({} dropped)",
        report.rows_kept,
        report.rows_read,
        report.dropped()
    );
    for (line, reason) in &report.bad_rows {
        println!("  line {line}: {reason}");
    }
    if dataset.is_empty() {
        anyhow::bail!("no usable rows loaded -- check headers/format.");
    }

    let cities = dataset.cities();
    println!("Cities: {cities:?}");

    let theme_name = std::env::args().nth(2).unwrap_or_else(|| "light".to_string());
    let chart = Chart::new(dataset).with_theme(weatherline_core::theme::find(&theme_name));
    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir)?;

    // One SVG per filter state
    let all = chart.render(&Filter::All);
    let out_all = out_dir.join("weather_all.svg");
    std::fs::write(&out_all, render_frame(&all, chart.layout(), chart.theme()))?;
    println!("Wrote {}", out_all.display());

    for city in &cities {
        let frame = chart.render(&Filter::City(city.clone()));
        let out = out_dir.join(format!("weather_{}.svg", slug(city)));
        std::fs::write(&out, render_frame(&frame, chart.layout(), chart.theme()))?;
        println!("Wrote {}", out.display());
    }

    // Interactive page with dropdown and tooltip
    let out_page = out_dir.join("weather.html");
    std::fs::write(&out_page, render_page(&chart, "Actual Mean Temperature by City"))?;
    println!("Wrote {}", out_page.display());

    Ok(())
}

/// File-name-safe version of a city name, e.g. "Chicago (Midway), IL" -> "chicago_midway_il".
fn slug(city: &str) -> String {
    let mut out = String::with_capacity(city.len());
    let mut last_sep = true;
    for c in city.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            last_sep = false;
        } else if !last_sep {
            out.push('_');
            last_sep = true;
        }
    }
    out.trim_end_matches('_').to_string()
}
