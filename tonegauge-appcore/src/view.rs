use serde::Serialize;
use tonegauge_core::{
    GaugeGeometry, GaugeKind, GaugeSpec, GaugeStyle, HomeLayout, Illustration, LayoutStyle,
    Route, Severity, format_percent, render_svg,
};
use tonegauge_engine::flow::{FlowSnapshot, Notice};

pub const INPUT_PROMPT: &str = "Enter the text you want to analyze";
pub const SUBMIT_LABEL: &str = "Analyze";
pub const LOGIN_LABEL: &str = "Log in";

/// Whatever the front end should draw right now.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Login(LoginView),
    Home(HomeView),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginView {
    pub title: &'static str,
    pub button_label: &'static str,
}

impl Default for LoginView {
    fn default() -> Self {
        Self {
            title: Route::Login.title(),
            button_label: LOGIN_LABEL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NoticeView {
    pub title: &'static str,
    pub message: &'static str,
}

impl From<Notice> for NoticeView {
    fn from(n: Notice) -> Self {
        Self {
            title: n.title(),
            message: n.message(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeView {
    pub kind: GaugeKind,
    pub label: &'static str,
    pub percent_text: String,
    pub geometry: GaugeGeometry,
}

impl GaugeView {
    pub fn svg(&self) -> String {
        render_svg(&self.geometry, &GaugeStyle::labeled(self.label))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub gauges: Vec<GaugeView>,
    /// Present only while the detail panel is open.
    pub detail: Option<String>,
    pub severity: Severity,
    pub illustration: Illustration,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub title: &'static str,
    pub prompt: &'static str,
    pub input: String,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub loading: bool,
    pub notice: Option<NoticeView>,
    pub result: Option<ResultView>,
    pub style: LayoutStyle,
}

impl HomeView {
    pub fn build(snap: &FlowSnapshot, layout: &HomeLayout) -> Self {
        let result = snap.result().map(|r| {
            let gauges = GaugeKind::ALL
                .iter()
                .map(|&kind| {
                    let geometry =
                        GaugeSpec::new(kind.percent_of(r), layout.ring_size, layout.ring_stroke)
                            .geometry();
                    GaugeView {
                        kind,
                        label: kind.label(),
                        percent_text: format_percent(geometry.percent),
                        geometry,
                    }
                })
                .collect();

            // Derived here on every build; the flow never stores it.
            let severity = Severity::of(r);
            ResultView {
                gauges,
                detail: snap.detail_visible.then(|| r.detail.clone()),
                severity,
                illustration: severity.illustration(),
            }
        });

        Self {
            title: Route::Home.title(),
            prompt: INPUT_PROMPT,
            input: snap.input.clone(),
            submit_label: SUBMIT_LABEL,
            submit_enabled: snap.submit_enabled(),
            loading: snap.is_loading(),
            notice: snap.notice.map(NoticeView::from),
            result,
            style: layout.style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonegauge_core::AnalysisResult;
    use tonegauge_engine::flow::AnalysisFlow;

    fn finished_flow(direct: f64, indirect: f64) -> AnalysisFlow {
        let mut flow = AnalysisFlow::new();
        let t = flow.submit_text("hello").unwrap();
        flow.complete(t.seq(), Ok(AnalysisResult::new("x", direct, indirect)));
        flow
    }

    #[test]
    fn result_view_has_two_gauges_and_hidden_detail() {
        let flow = finished_flow(85.0, 10.0);
        let view = HomeView::build(&flow.snapshot(), &HomeLayout::default());

        let result = view.result.unwrap();
        assert_eq!(result.gauges.len(), 2);
        assert_eq!(result.gauges[0].kind, GaugeKind::Direct);
        assert_eq!(result.gauges[0].percent_text, "85%");
        assert_eq!(result.gauges[1].percent_text, "10%");
        assert_eq!(result.detail, None);
        assert_eq!(result.severity, Severity::Bad);
        assert_eq!(result.illustration.asset_path(), "assets/bad.png");
    }

    #[test]
    fn detail_text_appears_when_toggled() {
        let mut flow = finished_flow(20.0, 10.0);
        flow.toggle_detail();
        let view = HomeView::build(&flow.snapshot(), &HomeLayout::default());
        assert_eq!(view.result.unwrap().detail.as_deref(), Some("x"));
    }

    #[test]
    fn layout_sizes_flow_into_geometry() {
        let flow = finished_flow(50.0, 50.0);
        let layout = HomeLayout {
            ring_size: 140.0,
            ring_stroke: 16.0,
            style: LayoutStyle::Flat,
        };
        let view = HomeView::build(&flow.snapshot(), &layout);
        assert_eq!(view.style, LayoutStyle::Flat);
        let g = &view.result.unwrap().gauges[0];
        assert_eq!(g.geometry.radius, 62.0);
        assert!(g.svg().contains(r#"width="140""#));
    }

    #[test]
    fn loading_disables_submit() {
        let mut flow = AnalysisFlow::new();
        flow.submit_text("hello").unwrap();
        let view = HomeView::build(&flow.snapshot(), &HomeLayout::default());
        assert!(view.loading);
        assert!(!view.submit_enabled);
        assert!(view.result.is_none());
    }

    #[test]
    fn validation_notice_is_rendered() {
        let mut flow = AnalysisFlow::new();
        let _ = flow.submit_text(" ");
        let view = HomeView::build(&flow.snapshot(), &HomeLayout::default());
        assert_eq!(view.notice.map(|n| n.title), Some("Input error"));
    }
}
