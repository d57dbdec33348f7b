use crate::types::AnalysisResult;
use serde::{Deserialize, Serialize};

const NORMAL_FROM: f64 = 30.0;
const BAD_FROM: f64 = 60.0;

/// Mood category picked from the larger of the two percentages.
///
/// Always derived from a result at render time; never stored next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Good,
    Normal,
    Bad,
}

impl Severity {
    pub fn from_percents(direct: f64, indirect: f64) -> Self {
        let max = crate::gauge::clamp_percent(direct).max(crate::gauge::clamp_percent(indirect));
        if max < NORMAL_FROM {
            Severity::Good
        } else if max < BAD_FROM {
            Severity::Normal
        } else {
            Severity::Bad
        }
    }

    pub fn of(result: &AnalysisResult) -> Self {
        Self::from_percents(result.direct_percent, result.indirect_percent)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Good => "good",
            Severity::Normal => "normal",
            Severity::Bad => "bad",
        }
    }

    pub fn illustration(self) -> Illustration {
        Illustration { severity: self }
    }
}

/// Static mood picture shown under the gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Illustration {
    pub severity: Severity,
}

impl Illustration {
    pub fn asset_path(self) -> &'static str {
        match self.severity {
            Severity::Good => "assets/good.png",
            Severity::Normal => "assets/normal.png",
            Severity::Bad => "assets/bad.png",
        }
    }

    /// Stand-in for the picture on text-only front ends.
    pub fn text_face(self) -> &'static str {
        match self.severity {
            Severity::Good => "(^_^)",
            Severity::Normal => "(-_-)",
            Severity::Bad => "(>_<)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(Severity::from_percents(29.0, 0.0), Severity::Good);
        assert_eq!(Severity::from_percents(30.0, 0.0), Severity::Normal);
        assert_eq!(Severity::from_percents(0.0, 59.0), Severity::Normal);
        assert_eq!(Severity::from_percents(0.0, 60.0), Severity::Bad);
        assert_eq!(Severity::from_percents(29.99, 29.99), Severity::Good);
    }

    #[test]
    fn uses_the_larger_percentage() {
        let r = AnalysisResult::new("x", 85.0, 10.0);
        assert_eq!(Severity::of(&r), Severity::Bad);
        assert_eq!(Severity::of(&r).illustration().asset_path(), "assets/bad.png");
    }

    #[test]
    fn negative_and_nan_inputs_count_as_zero() {
        assert_eq!(Severity::from_percents(f64::NAN, -40.0), Severity::Good);
    }
}
