//! Periodic repaint task for the background.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// ~30 frames per second.
pub const DEFAULT_REPAINT_INTERVAL: Duration = Duration::from_millis(33);

/// Interval between frames for `fps`, with `fps` clamped to 1..=120.
pub fn interval_for_fps(fps: u32) -> Duration {
    let fps = fps.clamp(1, 120);
    Duration::from_millis(u64::from(1000 / fps))
}

/// Handle to a running repaint task.
///
/// The task sends a monotonically increasing frame number on every tick.
/// When the receiver is busy the tick is dropped rather than queued, so a slow
/// renderer never builds a backlog. Dropping the handle stops the task.
#[derive(Debug)]
pub struct RepaintTimer {
    handle: Option<JoinHandle<()>>,
    period: Duration,
}

impl RepaintTimer {
    /// Start ticking every `period` into `tx`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(period: Duration, tx: mpsc::Sender<u64>) -> Self {
        let period = period.max(Duration::from_millis(1));
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut frame: u64 = 0;
            loop {
                interval.tick().await;
                frame = frame.wrapping_add(1);
                match tx.try_send(frame) {
                    Ok(()) | Err(TrySendError::Full(_)) => {}
                    Err(TrySendError::Closed(_)) => break,
                }
            }
        });

        tracing::debug!(period_ms = period.as_millis() as u64, "repaint timer started");
        Self {
            handle: Some(handle),
            period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancel the task. Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("repaint timer stopped");
        }
    }
}

impl Drop for RepaintTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[test]
    fn test_interval_for_fps() {
        assert_eq!(interval_for_fps(30), DEFAULT_REPAINT_INTERVAL);
        assert_eq!(interval_for_fps(0), Duration::from_millis(1000));
        assert_eq!(interval_for_fps(1000), interval_for_fps(120));
    }

    #[tokio::test]
    async fn test_ticks_arrive_in_order() {
        let (tx, mut rx) = mpsc::channel(8);
        let timer = RepaintTimer::start(Duration::from_millis(5), tx);
        assert!(timer.is_running());

        let first = timeout(Duration::from_secs(2), rx.recv()).await.unwrap();
        let second = timeout(Duration::from_secs(2), rx.recv()).await.unwrap();
        assert_eq!(first, Some(1));
        assert_eq!(second, Some(2));
    }

    #[tokio::test]
    async fn test_stop_closes_channel() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut timer = RepaintTimer::start(Duration::from_millis(5), tx);
        timer.stop();
        assert!(!timer.is_running());

        // Buffered ticks may still drain, then the sender is gone.
        let drained = timeout(Duration::from_secs(2), async {
            while rx.recv().await.is_some() {}
        })
        .await;
        assert!(drained.is_ok());
    }

    #[tokio::test]
    async fn test_drop_cancels_task() {
        let (tx, mut rx) = mpsc::channel(8);
        {
            let _timer = RepaintTimer::start(Duration::from_millis(5), tx);
        }
        let drained = timeout(Duration::from_secs(2), async {
            while rx.recv().await.is_some() {}
        })
        .await;
        assert!(drained.is_ok());
    }

    #[tokio::test]
    async fn test_task_ends_when_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        let timer = RepaintTimer::start(Duration::from_millis(2), tx);
        drop(rx);
        timeout(Duration::from_secs(2), async {
            while timer.is_running() {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .unwrap();
    }
}
