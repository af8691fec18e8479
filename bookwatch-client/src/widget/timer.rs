use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

/// Repeating timer. Each tick spawns the callback's future as its own task, so
/// a slow tick never delays the next one and stopping the timer leaves
/// in-flight work alone.
#[derive(Debug, Default)]
pub struct PollTimer {
    handle: Option<JoinHandle<()>>,
}

impl PollTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start ticking every `period`; the first tick fires one period from now.
    /// An already running timer is replaced.
    pub fn start<F, Fut>(&mut self, period: Duration, mut on_tick: F)
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.stop();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                debug!(?period, "poll timer tick");
                tokio::spawn(on_tick());
            }
        });
        self.handle = Some(handle);
    }

    /// Cancel future ticks. Returns false when nothing was running.
    pub fn stop(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for PollTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(counter: &Arc<AtomicUsize>) -> impl FnMut() -> std::future::Ready<()> + Send + 'static {
        let counter = counter.clone();
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            std::future::ready(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_waits_a_full_period() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let mut timer = PollTimer::new();
        timer.start(Duration::from_secs(60), counting(&ticks));

        tokio::time::sleep(Duration::from_secs(59)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0);
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_future_ticks() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let mut timer = PollTimer::new();
        timer.start(Duration::from_secs(10), counting(&ticks));
        assert!(timer.is_active());

        tokio::time::sleep(Duration::from_secs(11)).await;
        assert!(timer.stop());
        assert!(!timer.is_active());
        assert!(!timer.stop());

        tokio::time::sleep(Duration::from_secs(100)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_replaces_previous_schedule() {
        let old = Arc::new(AtomicUsize::new(0));
        let new = Arc::new(AtomicUsize::new(0));
        let mut timer = PollTimer::new();
        timer.start(Duration::from_secs(5), counting(&old));
        timer.start(Duration::from_secs(7), counting(&new));

        tokio::time::sleep(Duration::from_secs(8)).await;
        assert_eq!(old.load(Ordering::SeqCst), 0);
        assert_eq!(new.load(Ordering::SeqCst), 1);
    }
}
