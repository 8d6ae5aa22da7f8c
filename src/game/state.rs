use super::collision::{out_of_bounds, reaches_apple};
use super::food::{respawn_apple, spawn_apple, PointSource};
use super::input::HeadingCell;
use super::journey::Journey;
use super::motion::{advance_head, seed_segment};
use super::trail::{truncate_trail, TrailPolicy};
use super::types::{Apple, Bounds, Point, Segment};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSettings {
  pub pickup_radius: f64,
  pub apple_size: f64,
  pub trail: TrailPolicy,
}

/// What a transition tells the client: segments to draw or erase, apple
/// changes, score, and phase changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
  Started { width: f64, height: f64 },
  Head { segment: Segment },
  Erase { segment: Segment },
  AppleSpawned(Apple),
  AppleEaten(Apple),
  AppleRemoved(Apple),
  Score { value: u32 },
  GameOver { score: u32, x: f64, y: f64 },
}

#[derive(Debug, Clone)]
pub struct Round {
  journey: Journey,
  score: u32,
  apple: Apple,
  scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
  pub score: u32,
  pub head: Point,
}

#[derive(Debug, Clone)]
pub enum Phase {
  Idle,
  Running(Round),
  GameOver(Summary),
}

#[derive(Debug)]
pub struct GameState {
  phase: Phase,
  settings: GameSettings,
}

impl Round {
  pub fn journey(&self) -> &Journey {
    &self.journey
  }

  pub fn score(&self) -> u32 {
    self.score
  }

  pub fn apple(&self) -> &Apple {
    &self.apple
  }
}

impl GameState {
  pub fn new(settings: GameSettings) -> Self {
    Self {
      phase: Phase::Idle,
      settings,
    }
  }

  pub fn is_running(&self) -> bool {
    matches!(self.phase, Phase::Running(_))
  }

  pub fn round(&self) -> Option<&Round> {
    match &self.phase {
      Phase::Running(round) => Some(round),
      _ => None,
    }
  }

  pub fn head(&self) -> Option<&Segment> {
    self.round().map(|round| round.journey.head())
  }

  /// Begins a fresh round from `Idle` or `GameOver`. Ignored while running.
  pub fn start<P: PointSource + ?Sized>(
    &mut self,
    bounds: Bounds,
    scale: f64,
    points: &mut P,
    heading: &HeadingCell,
  ) -> Vec<GameEvent> {
    if self.is_running() {
      tracing::debug!("start ignored while running");
      return Vec::new();
    }

    heading.store(0.0);
    let seed = seed_segment(bounds, scale);
    let apple = spawn_apple(points, bounds, self.settings.apple_size * scale);
    self.phase = Phase::Running(Round {
      journey: Journey::new(seed),
      score: 0,
      apple,
      scale,
    });
    tracing::info!(width = bounds.width, height = bounds.height, scale, "round started");

    vec![
      GameEvent::Started {
        width: bounds.width,
        height: bounds.height,
      },
      GameEvent::AppleSpawned(apple),
      GameEvent::Head { segment: seed },
      GameEvent::Score { value: 0 },
    ]
  }

  /// One atomic step: motion, boundary, apple placement, feeding, trail. A
/// no-op unless running.
  pub fn tick<P: PointSource + ?Sized>(
    &mut self,
    heading: f64,
    bounds: Bounds,
    points: &mut P,
  ) -> Vec<GameEvent> {
    let Phase::Running(round) = &mut self.phase else {
      return Vec::new();
    };

    let next = advance_head(round.journey.head(), heading);
    if out_of_bounds(next.end, bounds) {
      let summary = Summary {
        score: round.score,
        head: next.end,
      };
      self.phase = Phase::GameOver(summary);
      tracing::info!(score = summary.score, x = summary.head.x, y = summary.head.y, "game over");
      return vec![GameEvent::GameOver {
        score: summary.score,
        x: summary.head.x,
        y: summary.head.y,
      }];
    }

    round.journey.push_head(next);
    let mut events = vec![GameEvent::Head { segment: next }];

    if !bounds.contains(round.apple.position()) {
      let stale = round.apple;
      round.apple = respawn_apple(points, bounds, &stale);
      tracing::debug!(
        from = ?stale.position(),
        to = ?round.apple.position(),
        "apple left the canvas, relocated"
      );
      events.push(GameEvent::AppleRemoved(stale));
      events.push(GameEvent::AppleSpawned(round.apple));
    }

    if reaches_apple(next.end, &round.apple, self.settings.pickup_radius * round.scale) {
      let eaten = round.apple;
      round.score = round.score.saturating_add(1);
      round.apple = respawn_apple(points, bounds, &eaten);
      tracing::debug!(score = round.score, "apple eaten");
      events.push(GameEvent::AppleEaten(eaten));
      events.push(GameEvent::AppleSpawned(round.apple));
    }

    let limit = self.settings.trail.limit(round.score, round.scale);
    events.extend(
      truncate_trail(&mut round.journey, limit)
        .into_iter()
        .map(|segment| GameEvent::Erase { segment }),
    );
    events.push(GameEvent::Score { value: round.score });
    events
  }
}
