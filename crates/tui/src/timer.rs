use std::time::Duration;

use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};
use tracing::debug;

/// Periodic sender whose task is aborted when the guard is dropped.
///
/// Each tick sends `make_event()` into `sender`; the task also stops on its
/// own once the receiver is gone.
pub struct ScopedInterval {
    name: &'static str,
    handle: JoinHandle<()>,
}

impl ScopedInterval {
    pub fn spawn<E, F>(name: &'static str, period: Duration, sender: mpsc::Sender<E>, make_event: F) -> Self
    where
        E: Send + 'static,
        F: Fn() -> E + Send + 'static,
    {
        let period = period.max(Duration::from_millis(1));
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(time::Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if sender.send(make_event()).await.is_err() {
                    break;
                }
            }
        });
        debug!(timer = name, period_ms = period.as_millis() as u64, "timer acquired");
        Self { name, handle }
    }
}

impl Drop for ScopedInterval {
    fn drop(&mut self) {
        self.handle.abort();
        debug!(timer = self.name, "timer released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_until_dropped() {
        let (tx, mut rx) = mpsc::channel(8);
        let timer = ScopedInterval::spawn("test", Duration::from_millis(100), tx, || 1u8);

        time::advance(Duration::from_millis(100)).await;
        assert_eq!(rx.recv().await, Some(1));

        drop(timer);
        // The aborted task drops its sender, closing the channel.
        assert_eq!(rx.recv().await, None);
    }
}
