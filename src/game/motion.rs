use super::constants::{SEED_CONTROL_OFFSET, SEED_END_OFFSET};
use super::math::{add, reflect, rotate, sub};
use super::types::{Bounds, Point, Segment};
use std::f64::consts::PI;

/// The first segment of a round: centred, pointing toward -x, control point
/// halfway along.
pub fn seed_segment(bounds: Bounds, scale: f64) -> Segment {
  let start = bounds.center();
  Segment {
    start,
    control: Point::new(start.x - SEED_CONTROL_OFFSET * scale, start.y),
    end: Point::new(start.x - SEED_END_OFFSET * scale, start.y),
  }
}

/// Advances the head by one segment.
///
/// The control point is mirrored through the junction (the current head's
/// end) so the new curve leaves with the tangent the old one arrived with.
/// The offset from the mirrored control point back to the junction is then
/// turned by `π - heading` to place the new end. Every segment keeps the
/// seed's half-length, so the turn radius scales with segment length.
pub fn advance_head(head: &Segment, heading: f64) -> Segment {
  let junction = head.end;
  let control = reflect(head.control, junction);
  let offset = sub(junction, control);
  let turn = PI - heading;
  Segment {
    start: junction,
    control,
    end: add(control, rotate(offset, turn)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::game::math::{distance, length, signed_angle};

  fn square_seed() -> Segment {
    seed_segment(
      Bounds {
        width: 300.0,
        height: 300.0,
      },
      1.0,
    )
  }

  #[test]
  fn seed_matches_canvas_centre() {
    let seed = square_seed();
    assert_eq!(seed.start, Point::new(150.0, 150.0));
    assert_eq!(seed.control, Point::new(149.0, 150.0));
    assert_eq!(seed.end, Point::new(148.0, 150.0));
  }

  #[test]
  fn seed_offsets_follow_pixel_ratio() {
    let seed = seed_segment(
      Bounds {
        width: 200.0,
        height: 100.0,
      },
      2.0,
    );
    assert_eq!(seed.control, Point::new(98.0, 50.0));
    assert_eq!(seed.end, Point::new(96.0, 50.0));
  }

  #[test]
  fn zero_heading_moves_in_a_straight_line() {
    let mut head = square_seed();
    let mut last_x = head.end.x;
    for _ in 0..5 {
      head = advance_head(&head, 0.0);
      assert!((head.end.y - 150.0).abs() < 1e-9);
      assert!(head.end.x < last_x);
      last_x = head.end.x;
    }
    assert!((head.end.x - 138.0).abs() < 1e-9);
  }

  #[test]
  fn new_segment_starts_at_previous_end() {
    let seed = square_seed();
    let next = advance_head(&seed, 0.3);
    assert_eq!(next.start, seed.end);
  }

  #[test]
  fn exit_tangent_turns_by_heading() {
    for heading in [-3.0, -1.2, -0.07, 0.0, 0.07, 0.5, 2.9] {
      let mut head = square_seed();
      for _ in 0..10 {
        let next = advance_head(&head, heading);
        let before = sub(head.end, head.control);
        let entry = sub(next.control, next.start);
        let after = sub(next.end, next.control);
        assert!(signed_angle(before, entry).abs() < 1e-9);
        assert!((signed_angle(before, after) + heading).abs() < 1e-9);
        head = next;
      }
    }
  }

  #[test]
  fn positive_heading_turns_left_on_screen() {
    // travelling toward -x in a y-down canvas, a left turn heads toward +y
    let next = advance_head(&square_seed(), 0.07);
    assert!(next.end.y > 150.0);
    let next = advance_head(&square_seed(), -0.07);
    assert!(next.end.y < 150.0);
  }

  #[test]
  fn half_length_does_not_drift() {
    let mut head = square_seed();
    for step in 0..10_000 {
      let heading = if step % 300 < 150 { 0.07 } else { -0.07 };
      head = advance_head(&head, heading);
    }
    assert!((length(sub(head.end, head.control)) - 1.0).abs() < 1e-6);
    assert!((distance(head.start, head.control) - 1.0).abs() < 1e-6);
  }

  #[test]
  fn same_headings_give_same_path() {
    let headings = [0.0, 0.07, 0.07, -0.07, 0.0, 1.3, -0.4];
    let run = || {
      let mut head = square_seed();
      headings
        .iter()
        .map(|heading| {
          head = advance_head(&head, *heading);
          head.end
        })
        .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
  }
}
