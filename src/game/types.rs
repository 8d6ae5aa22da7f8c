use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

/// One quadratic curve piece of the snake. `start` is the tail-side endpoint,
/// `end` the leading one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
  pub start: Point,
  pub control: Point,
  pub end: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
  pub width: f64,
  pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Apple {
  pub x: f64,
  pub y: f64,
  pub size: f64,
}

impl Point {
  pub fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}

impl Bounds {
  pub fn center(&self) -> Point {
    Point {
      x: self.width / 2.0,
      y: self.height / 2.0,
    }
  }

  pub fn contains(&self, point: Point) -> bool {
    point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
  }

  pub fn clamp(&self, point: Point) -> Point {
    Point {
      x: point.x.clamp(0.0, self.width),
      y: point.y.clamp(0.0, self.height),
    }
  }
}

impl Apple {
  pub fn position(&self) -> Point {
    Point { x: self.x, y: self.y }
  }
}
