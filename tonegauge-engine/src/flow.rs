use serde::{Deserialize, Serialize};
use tonegauge_core::{
    AnalysisInput, AnalysisResult, ProviderError, Severity, ValidationError, preview_text,
    validate_input,
};

const STATE_IDLE: &str = "idle";
const STATE_LOADING: &str = "loading";
const STATE_SUCCESS: &str = "success";
const STATE_FAILED: &str = "failed";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success { result: AnalysisResult },
    // `reason` is for logs only; users get the generic notice.
    Failed { reason: String },
}

impl RequestState {
    pub fn label(&self) -> &'static str {
        match self {
            RequestState::Idle => STATE_IDLE,
            RequestState::Loading => STATE_LOADING,
            RequestState::Success { .. } => STATE_SUCCESS,
            RequestState::Failed { .. } => STATE_FAILED,
        }
    }
}

/// User-facing message raised by the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    Validation,
    ProviderFailure,
}

impl Notice {
    pub fn title(self) -> &'static str {
        match self {
            Notice::Validation => "Input error",
            Notice::ProviderFailure => "Error",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::Validation => "Please enter some text.",
            Notice::ProviderFailure => "Analysis failed.",
        }
    }
}

/// Handed out by [`AnalysisFlow::submit`]; the provider response has to come
/// back with it so we can tell whether it is still the latest request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    input: AnalysisInput,
}

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn text(&self) -> &str {
        self.input.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request (or a reset) happened first; the response was dropped.
    Stale,
}

/// Point-in-time copy of the flow for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowSnapshot {
    pub input: String,
    pub state: RequestState,
    pub detail_visible: bool,
    pub notice: Option<Notice>,
    pub seq: u64,
}

impl FlowSnapshot {
    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            RequestState::Success { result } => Some(result),
            _ => None,
        }
    }

    pub fn severity(&self) -> Option<Severity> {
        self.result().map(Severity::of)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RequestState::Loading)
    }

    pub fn submit_enabled(&self) -> bool {
        !self.is_loading()
    }
}

/// State of one home screen: the input box, the request lifecycle, the detail
/// panel toggle and the last notice.
///
/// Every accepted submit bumps a sequence number; only a completion carrying
/// the current number may change `state`.
#[derive(Debug, Clone, Default)]
pub struct AnalysisFlow {
    input: String,
    state: RequestState,
    detail_visible: bool,
    notice: Option<Notice>,
    seq: u64,
}

impl AnalysisFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn detail_visible(&self) -> bool {
        self.detail_visible
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn latest_seq(&self) -> u64 {
        self.seq
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RequestState::Loading)
    }

    /// Front ends disable the submit control while this is false.
    pub fn submit_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            RequestState::Success { result } => Some(result),
            _ => None,
        }
    }

    pub fn severity(&self) -> Option<Severity> {
        self.result().map(Severity::of)
    }

    /// Validates the current input and, if it is non-blank, starts a request.
    ///
    /// Blank input leaves the state untouched and raises [`Notice::Validation`].
    /// Submitting while a request is in flight supersedes it.
    pub fn submit(&mut self) -> Result<Ticket, ValidationError> {
        let input = match validate_input(&self.input) {
            Ok(input) => input,
            Err(e) => {
                log::info!("submit rejected: {e}");
                self.notice = Some(Notice::Validation);
                return Err(e);
            }
        };

        self.seq = self.seq.wrapping_add(1);
        self.transition(RequestState::Loading);
        self.detail_visible = false;
        self.notice = None;
        log::info!("submit #{}: {:?}", self.seq, preview_text(input.as_str(), 40));

        Ok(Ticket {
            seq: self.seq,
            input,
        })
    }

    pub fn submit_text(&mut self, text: impl Into<String>) -> Result<Ticket, ValidationError> {
        self.set_input(text);
        self.submit()
    }

    /// Applies a provider outcome if `seq` is still the latest request.
    pub fn complete(
        &mut self,
        seq: u64,
        outcome: Result<AnalysisResult, ProviderError>,
    ) -> Completion {
        if seq != self.seq || !self.is_loading() {
            log::debug!("dropping stale response #{seq} (latest #{})", self.seq);
            return Completion::Stale;
        }

        self.detail_visible = false;
        match outcome {
            Ok(result) => {
                self.notice = None;
                self.transition(RequestState::Success { result });
            }
            Err(e) => {
                log::warn!("analysis #{seq} failed: {e}");
                self.notice = Some(Notice::ProviderFailure);
                self.transition(RequestState::Failed {
                    reason: e.to_string(),
                });
            }
        }
        Completion::Applied
    }

    /// Flips the detail panel. Only meaningful with a result on screen;
    /// otherwise a no-op that returns `false`.
    pub fn toggle_detail(&mut self) -> bool {
        if self.result().is_some() {
            self.detail_visible = !self.detail_visible;
        }
        self.detail_visible
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Back to a blank screen. Any request still in flight becomes stale.
    pub fn reset(&mut self) {
        self.seq = self.seq.wrapping_add(1);
        self.input.clear();
        self.detail_visible = false;
        self.notice = None;
        self.transition(RequestState::Idle);
    }

    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            input: self.input.clone(),
            state: self.state.clone(),
            detail_visible: self.detail_visible,
            notice: self.notice,
            seq: self.seq,
        }
    }

    fn transition(&mut self, next: RequestState) {
        let prev = self.state.label();
        self.state = next;
        if prev != self.state.label() {
            log::info!("analysis state: {} -> {}", prev, self.state.label());
        }
    }
}
