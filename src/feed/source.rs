//! Data-source seam for the topic feed.
use super::{generate_batch, TopicCard};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;

/// Anything that can produce the next page of topic cards.
#[async_trait]
pub trait TopicSource: Send + Sync {
    /// Fetch the cards for `page` (1-based).
    async fn fetch_batch(&self, page: u32) -> Vec<TopicCard>;
}

/// Stand-in backend: waits a fixed latency, then generates random cards.
pub struct SimulatedSource<R> {
    rng: Mutex<R>,
    latency: Duration,
    batch_size: usize,
}

impl<R: Rng + Send> SimulatedSource<R> {
    pub fn new(rng: R, latency: Duration, batch_size: usize) -> Self {
        Self {
            rng: Mutex::new(rng),
            latency,
            batch_size,
        }
    }

    fn generate(&self, page: u32) -> Vec<TopicCard> {
        let first_seq = u64::from(page.saturating_sub(1)) * self.batch_size as u64 + 1;
        // A poisoned lock only means an earlier generation panicked; the RNG is still usable.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        generate_batch(&mut *rng, first_seq, self.batch_size)
    }
}

impl SimulatedSource<StdRng> {
    /// Source seeded from `seed`, or from OS entropy when `None`.
    pub fn with_seed(seed: Option<u64>, latency: Duration, batch_size: usize) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng, latency, batch_size)
    }
}

#[async_trait]
impl<R: Rng + Send> TopicSource for SimulatedSource<R> {
    async fn fetch_batch(&self, page: u32) -> Vec<TopicCard> {
        tokio::time::sleep(self.latency).await;
        let cards = self.generate(page);
        tracing::debug!(page, count = cards.len(), "Simulated batch ready");
        cards
    }
}
