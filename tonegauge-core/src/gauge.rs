use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Where the foreground arc starts: rotated so the fill begins at 12 o'clock.
pub const FOREGROUND_ROTATION_DEG: f64 = -90.0;

pub const DEFAULT_TRACK_COLOR: &str = "#E0E0E0";

const HUE_AT_ZERO: f64 = 240.0;
const HUE_PER_PERCENT: f64 = 2.4;

/// Bounds any number to [0,100]. NaN is treated as 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Formats a percent the way the gauge center shows it: rounded to one
/// decimal place, with the decimal dropped when the rounded value is whole.
pub fn format_percent(value: f64) -> String {
    let p = (clamp_percent(value) * 10.0).round() / 10.0;
    if p.fract() == 0.0 {
        format!("{p:.0}%")
    } else {
        format!("{p:.1}%")
    }
}

/// Inputs of one gauge render. Not stored anywhere; rebuilt per render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeSpec {
    pub percent: f64,
    pub size: f64,
    pub stroke_width: f64,
}

impl GaugeSpec {
    pub fn new(percent: f64, size: f64, stroke_width: f64) -> Self {
        Self {
            percent,
            size,
            stroke_width,
        }
    }

    pub fn geometry(&self) -> GaugeGeometry {
        GaugeGeometry::compute(self)
    }
}

/// Position on the blue (240) to red (0) ramp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hue(pub f64);

impl Hue {
    pub fn for_percent(percent: f64) -> Self {
        Self(HUE_AT_ZERO - clamp_percent(percent) * HUE_PER_PERCENT)
    }

    pub fn degrees(self) -> f64 {
        self.0
    }

    /// CSS color at full saturation and half lightness.
    pub fn css(self) -> String {
        format!("hsl({},100%,50%)", fmt_num(self.0))
    }

    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.0 / 360.0, 1.0, 0.5)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// `h`, `s` and `l` are all in 0.0..=1.0.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h.rem_euclid(1.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h * 6.0) as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb::new(channel(r), channel(g), channel(b))
}

/// Stroke geometry of an annular progress indicator.
///
/// When `stroke_width >= size` the radius floors at zero and every length is
/// zero: the ring collapses to a point. That is accepted output, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeGeometry {
    pub percent: f64,
    pub size: f64,
    pub stroke_width: f64,
    pub center: f64,
    pub radius: f64,
    pub circumference: f64,
    pub filled_length: f64,
    pub gap_length: f64,
    pub rotation_deg: f64,
    pub hue: Hue,
}

impl GaugeGeometry {
    pub fn compute(spec: &GaugeSpec) -> Self {
        let percent = clamp_percent(spec.percent);
        let radius = ((spec.size - spec.stroke_width) / 2.0).max(0.0);
        let circumference = 2.0 * PI * radius;
        let filled_length = circumference * percent / 100.0;
        let gap_length = (circumference - filled_length).max(0.0);

        Self {
            percent,
            size: spec.size,
            stroke_width: spec.stroke_width,
            center: spec.size / 2.0,
            radius,
            circumference,
            filled_length,
            gap_length,
            rotation_deg: FOREGROUND_ROTATION_DEG,
            hue: Hue::for_percent(percent),
        }
    }

    /// Foreground stroke pattern: one dash of the filled length, then a gap
    /// covering the rest of the circle.
    pub fn dash_array(&self) -> [f64; 2] {
        [self.filled_length, self.gap_length]
    }

    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0.0
    }
}

/// Presentation options for [`render_svg`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaugeStyle {
    pub label: String,
    pub track_color: String,
    pub caption: Option<String>,
}

impl GaugeStyle {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            track_color: DEFAULT_TRACK_COLOR.into(),
            caption: Some("Tap for details".into()),
        }
    }
}

pub fn render_svg(geo: &GaugeGeometry, style: &GaugeStyle) -> String {
    let size = fmt_num(geo.size);
    let c = fmt_num(geo.center);
    let r = fmt_num(geo.radius);
    let sw = fmt_num(geo.stroke_width);
    let [dash, gap] = geo.dash_array();

    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    ));
    out.push('\n');
    out.push_str(&format!(
        r#"  <circle cx="{c}" cy="{c}" r="{r}" stroke="{}" stroke-width="{sw}" fill="none"/>"#,
        escape_xml(&style.track_color)
    ));
    out.push('\n');
    out.push_str(&format!(
        r#"  <circle cx="{c}" cy="{c}" r="{r}" stroke="{}" stroke-width="{sw}" stroke-dasharray="{} {}" stroke-linecap="round" fill="none" transform="rotate({} {c} {c})"/>"#,
        geo.hue.css(),
        fmt_num(dash),
        fmt_num(gap),
        fmt_num(geo.rotation_deg),
    ));
    out.push('\n');

    out.push_str(&format!(
        r##"  <text x="{c}" y="{}" text-anchor="middle" font-weight="bold" fill="#717678" font-size="12">{}</text>"##,
        fmt_num(geo.center - 18.0),
        escape_xml(&style.label)
    ));
    out.push('\n');
    out.push_str(&format!(
        r##"  <text x="{c}" y="{}" text-anchor="middle" font-weight="bold" fill="#333333" font-size="24">{}</text>"##,
        fmt_num(geo.center + 8.0),
        format_percent(geo.percent)
    ));
    out.push('\n');
    if let Some(caption) = &style.caption {
        out.push_str(&format!(
            r##"  <text x="{c}" y="{}" text-anchor="middle" fill="#717678" font-size="12">{}</text>"##,
            fmt_num(geo.center + 28.0),
            escape_xml(caption)
        ));
        out.push('\n');
    }
    out.push_str("</svg>\n");
    out
}

fn fmt_num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".into() } else { s.to_string() }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
