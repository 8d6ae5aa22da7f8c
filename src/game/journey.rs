use super::types::Segment;
use std::collections::VecDeque;

/// Head-to-tail chain of segments. Front is the most recent head.
#[derive(Debug, Clone)]
pub struct Journey {
  segments: VecDeque<Segment>,
}

impl Journey {
  pub fn new(seed: Segment) -> Self {
    let mut segments = VecDeque::with_capacity(64);
    segments.push_back(seed);
    Self { segments }
  }

  pub fn head(&self) -> &Segment {
    // never empty: constructed with a seed and the last segment is never popped
    &self.segments[0]
  }

  pub fn push_head(&mut self, segment: Segment) {
    self.segments.push_front(segment);
  }

  pub fn pop_tail(&mut self) -> Option<Segment> {
    if self.segments.len() <= 1 {
      return None;
    }
    self.segments.pop_back()
  }

  pub fn len(&self) -> usize {
    self.segments.len()
  }

  #[cfg(test)]
  pub fn iter(&self) -> impl Iterator<Item = &Segment> {
    self.segments.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::game::types::Point;

  fn segment(x: f64) -> Segment {
    Segment {
      start: Point::new(x + 2.0, 0.0),
      control: Point::new(x + 1.0, 0.0),
      end: Point::new(x, 0.0),
    }
  }

  #[test]
  fn push_head_goes_to_front_and_pop_tail_takes_oldest() {
    let mut journey = Journey::new(segment(10.0));
    journey.push_head(segment(8.0));
    journey.push_head(segment(6.0));

    assert_eq!(journey.len(), 3);
    assert_eq!(journey.head().end.x, 6.0);
    assert_eq!(journey.pop_tail().map(|s| s.end.x), Some(10.0));
    assert_eq!(journey.len(), 2);
  }

  #[test]
  fn pop_tail_never_empties_the_journey() {
    let mut journey = Journey::new(segment(0.0));
    assert!(journey.pop_tail().is_none());
    assert_eq!(journey.len(), 1);
  }
}
