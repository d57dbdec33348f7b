use crate::flow::{AnalysisFlow, Completion, FlowSnapshot, Ticket};
use crate::traits::AnalysisProvider;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tonegauge_core::ValidationError;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Blank input; nothing was sent.
    Rejected(ValidationError),
    /// The response was applied; the snapshot reflects it.
    Completed(FlowSnapshot),
    /// A newer submit or a reset won the race; the response was dropped.
    Superseded,
}

/// Drives one home screen: owns its flow and runs provider calls for it.
///
/// The flow lock is released while the provider call is in flight, so the
/// screen stays readable (and resettable) during a request. Cloning shares the
/// same screen.
#[derive(Clone)]
pub struct HomeController {
    flow: Arc<Mutex<AnalysisFlow>>,
    provider: Arc<dyn AnalysisProvider>,
}

impl HomeController {
    pub fn new(provider: Arc<dyn AnalysisProvider>) -> Self {
        Self {
            flow: Arc::new(Mutex::new(AnalysisFlow::new())),
            provider,
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub async fn set_input(&self, text: impl Into<String>) {
        self.flow.lock().await.set_input(text);
    }

    /// Submits whatever is in the input box.
    ///
    /// Does not check [`AnalysisFlow::submit_enabled`]: a submit during Loading
    /// supersedes the earlier request. Front ends that want single-flight
    /// keep their submit control disabled while loading.
    pub async fn submit(&self) -> SubmitOutcome {
        let ticket = {
            let mut flow = self.flow.lock().await;
            match flow.submit() {
                Ok(t) => t,
                Err(e) => return SubmitOutcome::Rejected(e),
            }
        };
        self.run(ticket).await
    }

    pub async fn submit_text(&self, text: impl Into<String>) -> SubmitOutcome {
        let ticket = {
            let mut flow = self.flow.lock().await;
            match flow.submit_text(text) {
                Ok(t) => t,
                Err(e) => return SubmitOutcome::Rejected(e),
            }
        };
        self.run(ticket).await
    }

    async fn run(&self, ticket: Ticket) -> SubmitOutcome {
        let started = Instant::now();
        let outcome = self.provider.submit(ticket.text()).await;
        log::debug!(
            "provider {} answered #{} in {}ms",
            self.provider.name(),
            ticket.seq(),
            started.elapsed().as_millis()
        );

        let mut flow = self.flow.lock().await;
        match flow.complete(ticket.seq(), outcome) {
            Completion::Applied => SubmitOutcome::Completed(flow.snapshot()),
            Completion::Stale => SubmitOutcome::Superseded,
        }
    }

    pub async fn toggle_detail(&self) -> bool {
        self.flow.lock().await.toggle_detail()
    }

    pub async fn dismiss_notice(&self) {
        self.flow.lock().await.dismiss_notice();
    }

    pub async fn reset(&self) {
        self.flow.lock().await.reset();
    }

    pub async fn submit_enabled(&self) -> bool {
        self.flow.lock().await.submit_enabled()
    }

    pub async fn snapshot(&self) -> FlowSnapshot {
        self.flow.lock().await.snapshot()
    }
}
