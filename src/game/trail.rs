use super::journey::Journey;
use super::types::Segment;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPolicy {
  pub base_length: f64,
  pub growth_per_point: usize,
}

impl TrailPolicy {
  /// Number of segments kept visible at `score`, with the base length given in
  /// unscaled units.
  pub fn limit(&self, score: u32, scale: f64) -> usize {
    let base = (self.base_length * scale).round().max(1.0) as usize;
    base.saturating_add(self.growth_per_point.saturating_mul(score as usize))
  }
}

/// Drops tail segments until the journey fits the limit, returning them oldest
/// first so the renderer can erase them.
pub fn truncate_trail(journey: &mut Journey, limit: usize) -> Vec<Segment> {
  let mut erased = Vec::new();
  while journey.len() > limit {
    let Some(segment) = journey.pop_tail() else { break };
    erased.push(segment);
  }
  erased
}
