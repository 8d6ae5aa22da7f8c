use super::constants::MAX_SPAWN_ATTEMPTS;
use super::math::reflect;
use super::types::{Apple, Bounds, Point};
use rand::Rng;

/// Source of apple positions inside the canvas.
pub trait PointSource {
  fn point_within(&mut self, bounds: Bounds) -> Point;
}

/// Uniformly random placement.
pub struct RandomPoints<R> {
  rng: R,
}

impl<R: Rng> RandomPoints<R> {
  pub fn new(rng: R) -> Self {
    Self { rng }
  }
}

impl<R: Rng> PointSource for RandomPoints<R> {
  fn point_within(&mut self, bounds: Bounds) -> Point {
    Point {
      x: self.rng.gen::<f64>() * bounds.width,
      y: self.rng.gen::<f64>() * bounds.height,
    }
  }
}

pub fn spawn_apple<P: PointSource + ?Sized>(points: &mut P, bounds: Bounds, size: f64) -> Apple {
  let position = points.point_within(bounds);
  Apple {
    x: position.x,
    y: position.y,
    size,
  }
}

/// Places the apple that replaces `eaten`. The new position always differs
/// from the eaten one and lies inside `bounds`, even when the canvas shrank
/// since `eaten` was placed.
pub fn respawn_apple<P: PointSource + ?Sized>(
  points: &mut P,
  bounds: Bounds,
  eaten: &Apple,
) -> Apple {
  let previous = eaten.position();
  for _ in 0..MAX_SPAWN_ATTEMPTS {
    let candidate = points.point_within(bounds);
    if candidate != previous {
      return Apple {
        x: candidate.x,
        y: candidate.y,
        size: eaten.size,
      };
    }
  }

  let mirrored = bounds.clamp(reflect(previous, bounds.center()));
  let fallback = if mirrored != previous {
    mirrored
  } else {
    Point { x: 0.0, y: 0.0 }
  };
  tracing::debug!(?previous, ?fallback, "apple respawn fell back to mirrored position");
  Apple {
    x: fallback.x,
    y: fallback.y,
    size: eaten.size,
  }
}
