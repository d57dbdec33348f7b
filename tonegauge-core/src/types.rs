use serde::{Deserialize, Serialize};

/// Text the user asked us to analyze.
///
/// Only constructed through [`crate::text::validate_input`], so holding one
/// means the text has at least one non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AnalysisInput(String);

impl AnalysisInput {
    pub(crate) fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// What an analysis provider returns for one piece of text.
///
/// Percentages are expected in [0,100] but producers are not trusted to stay
/// in range; everything that draws them clamps first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub detail: String,
    pub direct_percent: f64,
    pub indirect_percent: f64,
}

impl AnalysisResult {
    pub fn new(detail: impl Into<String>, direct_percent: f64, indirect_percent: f64) -> Self {
        Self {
            detail: detail.into(),
            direct_percent,
            indirect_percent,
        }
    }

    /// The larger of the two clamped percentages.
    pub fn max_percent(&self) -> f64 {
        crate::gauge::clamp_percent(self.direct_percent)
            .max(crate::gauge::clamp_percent(self.indirect_percent))
    }
}

/// Which of the two gauges on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeKind {
    Direct,
    Indirect,
}

impl GaugeKind {
    pub const ALL: [GaugeKind; 2] = [GaugeKind::Direct, GaugeKind::Indirect];

    pub fn label(self) -> &'static str {
        match self {
            GaugeKind::Direct => "Direct",
            GaugeKind::Indirect => "Indirect",
        }
    }

    pub fn percent_of(self, result: &AnalysisResult) -> f64 {
        match self {
            GaugeKind::Direct => result.direct_percent,
            GaugeKind::Indirect => result.indirect_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_uses_wire_field_names() {
        let body = r#"{"detail":"x","direct_percent":85,"indirect_percent":10.5}"#;
        let parsed: AnalysisResult = serde_json::from_str(body).unwrap();
        assert_eq!(parsed, AnalysisResult::new("x", 85.0, 10.5));
    }

    #[test]
    fn max_percent_clamps_out_of_range_values() {
        let r = AnalysisResult::new("", 250.0, -3.0);
        assert_eq!(r.max_percent(), 100.0);
    }
}
