use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;
use tonegauge_core::{AnalysisResult, ProviderError, RandomProviderConfig};
use tonegauge_engine::traits::AnalysisProvider;

const DETAILS: &[&str] = &[
    "The wording is neutral overall.",
    "Some phrases could read as pressure on the reader.",
    "The message hints at criticism without stating it.",
    "A few expressions may come across as blunt.",
    "Strong wording; consider softening the tone.",
];

/// Stand-in for the analysis service: uniform percentages, canned detail.
///
/// With a seed the sequence of results is reproducible.
pub struct RandomAnalysisProvider {
    rng: Mutex<StdRng>,
    latency: Duration,
}

impl std::fmt::Debug for RandomAnalysisProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomAnalysisProvider")
            .field("latency", &self.latency)
            .finish()
    }
}

impl RandomAnalysisProvider {
    pub fn new(cfg: &RandomProviderConfig) -> Self {
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            rng: Mutex::new(rng),
            latency: Duration::from_millis(cfg.latency_ms),
        }
    }

    fn draw(&self) -> Result<AnalysisResult, ProviderError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| ProviderError::Network("random provider state poisoned".into()))?;
        let direct: u8 = rng.random_range(0..=100);
        let indirect: u8 = rng.random_range(0..=100);
        let detail = DETAILS[rng.random_range(0..DETAILS.len())];
        Ok(AnalysisResult::new(
            detail,
            f64::from(direct),
            f64::from(indirect),
        ))
    }
}

#[async_trait::async_trait]
impl AnalysisProvider for RandomAnalysisProvider {
    async fn submit(&self, _text: &str) -> Result<AnalysisResult, ProviderError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.draw()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
