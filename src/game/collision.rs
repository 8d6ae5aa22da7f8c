use super::math::distance;
use super::types::{Apple, Bounds, Point};

pub fn out_of_bounds(head: Point, bounds: Bounds) -> bool {
  !bounds.contains(head)
}

pub fn reaches_apple(head: Point, apple: &Apple, pickup_radius: f64) -> bool {
  distance(head, apple.position()) <= pickup_radius
}
