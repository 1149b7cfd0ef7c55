use std::time::Duration;

use async_trait::async_trait;

/// Strategy for the artificial latency at the facade boundary.
#[async_trait]
pub trait DelayPolicy: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// Real wait for interactive demos. Suspends the calling task only; the
/// store lock is never held across the wait.
pub struct SimulatedLatency;

#[async_trait]
impl DelayPolicy for SimulatedLatency {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// No-op policy so tests run synchronously and deterministically.
pub struct NoDelay;

#[async_trait]
impl DelayPolicy for NoDelay {
    async fn wait(&self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn simulated_latency_sleeps_for_the_requested_duration() {
        let start = tokio::time::Instant::now();
        SimulatedLatency.wait(Duration::from_millis(400)).await;
        assert_eq!(start.elapsed(), Duration::from_millis(400));
    }

    #[tokio::test(start_paused = true)]
    async fn no_delay_returns_immediately() {
        let start = tokio::time::Instant::now();
        NoDelay.wait(Duration::from_millis(400)).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
