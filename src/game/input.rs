use super::types::Segment;
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Latest steering delta, shared between the connection reader and the tick
/// loop. Writes replace the whole value.
#[derive(Debug, Default)]
pub struct HeadingCell {
  bits: AtomicU64,
}

impl HeadingCell {
  pub fn new() -> Self {
    Self {
      bits: AtomicU64::new(0f64.to_bits()),
    }
  }

  pub fn load(&self) -> f64 {
    f64::from_bits(self.bits.load(Ordering::Acquire))
  }

  pub fn store(&self, heading: f64) {
    self.bits.store(heading.to_bits(), Ordering::Release);
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Steer {
  Left,
  Right,
  Release,
}

impl Steer {
  pub fn heading(self, turn_step: f64) -> f64 {
    match self {
      Steer::Left => turn_step,
      Steer::Right => -turn_step,
      Steer::Release => 0.0,
    }
  }
}

pub fn parse_heading(value: f64) -> Option<f64> {
  value.is_finite().then_some(value)
}

/// Heading from device tilt: the angle of the tilt vector relative to the
/// head's chord.
pub fn heading_from_tilt(gamma: f64, beta: f64, head: &Segment) -> Option<f64> {
  if !gamma.is_finite() || !beta.is_finite() {
    return None;
  }
  let snake_x = head.end.x - head.start.x;
  let snake_y = head.end.y - head.start.y;
  Some((beta - snake_y).atan2(gamma - snake_x))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::game::types::Point;
  use std::sync::Arc;

  #[test]
  fn heading_cell_round_trips_values() {
    let cell = HeadingCell::new();
    assert_eq!(cell.load(), 0.0);
    cell.store(-0.07);
    assert_eq!(cell.load(), -0.07);
  }

  #[test]
  fn heading_cell_is_shared_across_threads() {
    let cell = Arc::new(HeadingCell::new());
    let writer = Arc::clone(&cell);
    std::thread::spawn(move || writer.store(0.07))
      .join()
      .expect("writer thread");
    assert_eq!(cell.load(), 0.07);
  }

  #[test]
  fn steering_keys_map_to_turn_step() {
    assert_eq!(Steer::Left.heading(0.07), 0.07);
    assert_eq!(Steer::Right.heading(0.07), -0.07);
    assert_eq!(Steer::Release.heading(0.07), 0.0);
  }

  #[test]
  fn non_finite_headings_are_rejected() {
    assert_eq!(parse_heading(0.5), Some(0.5));
    assert_eq!(parse_heading(f64::NAN), None);
    assert_eq!(parse_heading(f64::INFINITY), None);
  }

  #[test]
  fn tilt_is_measured_against_the_head_chord() {
    let head = Segment {
      start: Point::new(150.0, 150.0),
      control: Point::new(149.0, 150.0),
      end: Point::new(148.0, 150.0),
    };
    let heading = heading_from_tilt(-2.0, 1.0, &head).expect("finite tilt");
    assert!((heading - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert!(heading_from_tilt(f64::NAN, 0.0, &head).is_none());
  }
}
