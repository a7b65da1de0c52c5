// File: crates/weatherline-core/src/svg.rs
// Summary: Serialize a rendered frame into a standalone SVG document.

use crate::chart::{ChartLayout, Frame};
use crate::element::{Anchor, Element, LinePath, RectElement, SegmentElement, TextElement};
use crate::hover::TOOLTIP_DATE_FORMAT;
use crate::theme::Theme;

pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn path_d(points: &[(f64, f64)]) -> String {
    let mut d = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{cmd} {x:.2} {y:.2} "));
    }
    d.trim_end().to_string()
}

fn write_path(svg: &mut String, p: &LinePath) {
    // Per-sample data attributes drive the page tooltip; order matches the
    // path's point order.
    let xs = p
        .points
        .iter()
        .map(|(x, _)| format!("{x:.2}"))
        .collect::<Vec<_>>()
        .join(",");
    let dates = p
        .samples
        .iter()
        .map(|(d, _)| d.format(TOOLTIP_DATE_FORMAT).to_string())
        .collect::<Vec<_>>()
        .join(";");
    let temps = p
        .samples
        .iter()
        .map(|(_, t)| format!("{t}"))
        .collect::<Vec<_>>()
        .join(",");
    svg.push_str(&format!(
        "<path class=\"line\" d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" \
         data-city=\"{}\" data-x=\"{}\" data-dates=\"{}\" data-temps=\"{}\"/>",
        path_d(&p.points),
        escape_xml(&p.color),
        p.stroke_width,
        escape_xml(&p.city),
        xs,
        dates,
        temps,
    ));
}

fn write_rect(svg: &mut String, r: &RectElement) {
    let stroke = r
        .stroke
        .as_deref()
        .map(|s| format!(" stroke=\"{}\"", escape_xml(s)))
        .unwrap_or_default();
    svg.push_str(&format!(
        "<rect class=\"{}\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" \
         rx=\"{}\" ry=\"{}\" fill=\"{}\"{}/>",
        r.class,
        r.x,
        r.y,
        r.width,
        r.height,
        r.corner_radius,
        r.corner_radius,
        escape_xml(&r.fill),
        stroke,
    ));
}

fn write_text(svg: &mut String, t: &TextElement, font_family: &str) {
    let anchor = match t.anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    };
    let transform = if t.rotated {
        " transform=\"rotate(-90)\"".to_string()
    } else {
        String::new()
    };
    svg.push_str(&format!(
        "<text class=\"{}\" x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"{}\" \
         font-family=\"{}\" font-size=\"{}\" fill=\"{}\"{}>{}</text>",
        t.class,
        t.x,
        t.y,
        anchor,
        escape_xml(font_family),
        t.size,
        escape_xml(&t.fill),
        transform,
        escape_xml(&t.content),
    ));
}

fn write_segment(svg: &mut String, s: &SegmentElement) {
    svg.push_str(&format!(
        "<line class=\"{}\" x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" \
         stroke=\"{}\" stroke-width=\"{}\"/>",
        s.class,
        s.x1,
        s.y1,
        s.x2,
        s.y2,
        escape_xml(&s.stroke),
        s.stroke_width,
    ));
}

/// Serialize a frame to a standalone `<svg>` document. Elements are in plot
/// coordinates; a single group translate applies the margins, matching the
/// chart's top-left-origin convention.
pub fn render_frame(frame: &Frame, layout: &ChartLayout, theme: &Theme) -> String {
    let width = layout.outer_width;
    let height = layout.outer_height + layout.legend_strip;
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background
    ));
    svg.push_str(&format!(
        "<g transform=\"translate({},{})\">",
        layout.margins.left, layout.margins.top
    ));

    for el in &frame.elements {
        match el {
            Element::Path(p) => write_path(&mut svg, p),
            Element::Rect(r) => write_rect(&mut svg, r),
            Element::Text(t) => write_text(&mut svg, t, theme.font_family),
            Element::Segment(s) => write_segment(&mut svg, s),
        }
    }

    svg.push_str("</g></svg>");
    svg
}
