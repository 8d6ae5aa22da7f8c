use std::future::Future;
use std::time::Duration;
#[cfg(test)]
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};

/// Paces the game loop. The loop awaits `next_tick` between ticks and calls
/// `reset` when a new round starts.
pub trait TickSource: Send {
  fn next_tick(&mut self) -> impl Future<Output = ()> + Send;

  fn reset(&mut self) {}
}

pub struct IntervalTicks {
  interval: Interval,
}

impl IntervalTicks {
  pub fn new(period: Duration) -> Self {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    Self { interval }
  }
}

impl TickSource for IntervalTicks {
  async fn next_tick(&mut self) {
    self.interval.tick().await;
  }

  fn reset(&mut self) {
    self.interval.reset();
  }
}

/// Ticks on demand: one tick per message received.
#[cfg(test)]
pub struct ManualTicks {
  rx: mpsc::UnboundedReceiver<()>,
}

#[cfg(test)]
impl ManualTicks {
  pub fn channel() -> (mpsc::UnboundedSender<()>, Self) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, Self { rx })
  }
}

#[cfg(test)]
impl TickSource for ManualTicks {
  async fn next_tick(&mut self) {
    if self.rx.recv().await.is_none() {
      std::future::pending::<()>().await;
    }
  }

  fn reset(&mut self) {
    while self.rx.try_recv().is_ok() {}
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn manual_ticks_fire_once_per_message() {
    let (tx, mut ticks) = ManualTicks::channel();
    tx.send(()).expect("send tick");
    tx.send(()).expect("send tick");
    ticks.next_tick().await;
    ticks.next_tick().await;

    let pending = tokio::time::timeout(Duration::from_millis(20), ticks.next_tick()).await;
    assert!(pending.is_err());
  }

  #[tokio::test]
  async fn reset_discards_queued_ticks() {
    let (tx, mut ticks) = ManualTicks::channel();
    tx.send(()).expect("send tick");
    tx.send(()).expect("send tick");
    ticks.reset();

    let pending = tokio::time::timeout(Duration::from_millis(20), ticks.next_tick()).await;
    assert!(pending.is_err());
  }

  #[tokio::test]
  async fn interval_ticks_advance() {
    let mut ticks = IntervalTicks::new(Duration::from_millis(1));
    ticks.next_tick().await;
    ticks.next_tick().await;
    ticks.reset();
    ticks.next_tick().await;
  }
}
