use super::types::Point;

pub fn reflect(point: Point, about: Point) -> Point {
  Point {
    x: about.x * 2.0 - point.x,
    y: about.y * 2.0 - point.y,
  }
}

pub fn rotate(vector: Point, angle: f64) -> Point {
  let cos_a = angle.cos();
  let sin_a = angle.sin();
  Point {
    x: vector.x * cos_a - vector.y * sin_a,
    y: vector.x * sin_a + vector.y * cos_a,
  }
}

pub fn distance(a: Point, b: Point) -> f64 {
  ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

pub fn sub(a: Point, b: Point) -> Point {
  Point {
    x: a.x - b.x,
    y: a.y - b.y,
  }
}

pub fn add(a: Point, b: Point) -> Point {
  Point {
    x: a.x + b.x,
    y: a.y + b.y,
  }
}

#[cfg(test)]
pub fn length(vector: Point) -> f64 {
  (vector.x * vector.x + vector.y * vector.y).sqrt()
}

/// Signed angle from `from` to `to` in (-π, π].
#[cfg(test)]
pub fn signed_angle(from: Point, to: Point) -> f64 {
  let cross = from.x * to.y - from.y * to.x;
  let dot = from.x * to.x + from.y * to.y;
  cross.atan2(dot)
}
