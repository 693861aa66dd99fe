//! Grid geometry used by the connection rules.
//!
//! All coordinates are integer grid cells, so angle and crossing tests are
//! exact. The pass-through test follows the parametric form with a small
//! tolerance for diagonal segments.

use serde::{Deserialize, Serialize};

/// Tolerance when matching a station against a diagonal segment.
pub const PASS_THROUGH_TOLERANCE: f64 = 0.01;

/// A grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Whether `from -> to` runs at 0°, 45° or 90° (any multiple thereof).
///
/// Zero-length moves are rejected.
///
/// ```
/// use rust_metro::network::{is_valid_angle, Point};
///
/// assert!(is_valid_angle(Point::new(0, 0), Point::new(1, 1)));
/// assert!(is_valid_angle(Point::new(0, 0), Point::new(0, 5)));
/// assert!(!is_valid_angle(Point::new(0, 0), Point::new(2, 1)));
/// assert!(!is_valid_angle(Point::new(3, 3), Point::new(3, 3)));
/// ```
#[must_use]
pub fn is_valid_angle(from: Point, to: Point) -> bool {
    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();

    let straight = (dx == 0) != (dy == 0);
    let diagonal = dx == dy && dx > 0;
    straight || diagonal
}

/// Cross product of `(b - a) x (c - a)`; its sign is the turn direction.
fn orientation(a: Point, b: Point, c: Point) -> i64 {
    let abx = i64::from(b.x - a.x);
    let aby = i64::from(b.y - a.y);
    let acx = i64::from(c.x - a.x);
    let acy = i64::from(c.y - a.y);
    abx * acy - aby * acx
}

/// Strict intersection of segments `p1-p2` and `p3-p4`.
///
/// Only proper crossings count: segments that touch at an endpoint or are
/// collinear are not reported.
#[must_use]
pub fn segments_cross(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let d1 = orientation(p3, p4, p1).signum();
    let d2 = orientation(p3, p4, p2).signum();
    let d3 = orientation(p1, p2, p3).signum();
    let d4 = orientation(p1, p2, p4).signum();

    d1 * d2 < 0 && d3 * d4 < 0
}

/// Whether `point` lies on segment `from-to`, strictly between its ends.
#[must_use]
pub fn lies_strictly_between(from: Point, to: Point, point: Point) -> bool {
    if point == from || point == to {
        return false;
    }

    let in_box = (from.x.min(to.x)..=from.x.max(to.x)).contains(&point.x)
        && (from.y.min(to.y)..=from.y.max(to.y)).contains(&point.y);
    if !in_box {
        return false;
    }

    let dx = to.x - from.x;
    let dy = to.y - from.y;

    if dx == 0 {
        point.x == from.x
    } else if dy == 0 {
        point.y == from.y
    } else {
        let t = f64::from(point.x - from.x) / f64::from(dx);
        let expected_y = f64::from(from.y) + t * f64::from(dy);
        (expected_y - f64::from(point.y)).abs() < PASS_THROUGH_TOLERANCE && t > 0.0 && t < 1.0
    }
}
