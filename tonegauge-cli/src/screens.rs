use colored::Colorize;
use tonegauge_appcore::view::{GaugeView, HomeView, LoginView, ResultView, Screen};
use tonegauge_core::{LayoutStyle, Severity, preview_text};

pub const BAR_WIDTH: usize = 24;
const INPUT_PREVIEW_CHARS: usize = 60;

pub fn render(screen: &Screen) -> String {
    match screen {
        Screen::Login(v) => render_login(v),
        Screen::Home(v) => render_home(v),
    }
}

pub fn render_login(view: &LoginView) -> String {
    format!(
        "{}\n\n  [ {} ]  press Enter\n",
        format!("== {} ==", view.title).cyan().bold(),
        view.button_label
    )
}

pub fn render_home(view: &HomeView) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", format!("== {} ==", view.title).cyan().bold()));
    out.push_str(&format!("{}\n", view.prompt));
    if !view.input.is_empty() {
        out.push_str(&format!("  > {}\n", preview_text(&view.input, INPUT_PREVIEW_CHARS)));
    }

    if view.loading {
        out.push_str(&format!("  {}\n", "Analyzing...".yellow()));
    }

    if let Some(n) = view.notice {
        out.push_str(&format!("  {} {}\n", format!("{}:", n.title).red().bold(), n.message));
    }

    if let Some(result) = &view.result {
        out.push('\n');
        out.push_str(&render_result(result, view.style));
    }
    out
}

fn render_result(result: &ResultView, style: LayoutStyle) -> String {
    let mut out = String::new();
    let border = "+".to_string() + &"-".repeat(BAR_WIDTH + 20) + "+";
    if style == LayoutStyle::Card {
        out.push_str(&format!("  {border}\n"));
    }

    for g in &result.gauges {
        out.push_str(&format!("  {}\n", gauge_line(g)));
    }

    let face = result.illustration.text_face();
    let severity = match result.severity {
        Severity::Good => result.severity.as_str().green(),
        Severity::Normal => result.severity.as_str().yellow(),
        Severity::Bad => result.severity.as_str().red(),
    };
    out.push_str(&format!("  {face}  {severity}\n"));

    match &result.detail {
        Some(detail) => out.push_str(&format!("  {}\n", detail.italic())),
        None => out.push_str(&format!("  {}\n", "(:detail to show details)".dimmed())),
    }

    if style == LayoutStyle::Card {
        out.push_str(&format!("  {border}\n"));
    }
    out
}

fn gauge_line(g: &GaugeView) -> String {
    let filled = bar_cells(g.geometry.percent, BAR_WIDTH);
    let rgb = g.geometry.hue.to_rgb();
    let bar = "#".repeat(filled).truecolor(rgb.r, rgb.g, rgb.b);
    let rest = ".".repeat(BAR_WIDTH - filled).dimmed();
    format!("{:<9}[{bar}{rest}] {:>6}", g.label, g.percent_text)
}

/// Filled cells for a clamped percentage, rounded to the nearest cell.
pub fn bar_cells(percent: f64, width: usize) -> usize {
    let cells = (percent.clamp(0.0, 100.0) / 100.0 * width as f64).round() as usize;
    cells.min(width)
}
