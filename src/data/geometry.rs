//! 2D intersection tests used for hit-testing drawn series.

use serde::{Deserialize, Serialize};

/// Cross products with a magnitude below this are treated as zero.
pub const INTERSECT_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from(p: [f64; 2]) -> Self {
        Self { x: p[0], y: p[1] }
    }
}

/// z component of `(b - a) x (p - a)`: which side of line `ab` the point `p` is on.
#[inline]
fn cross(a: Point, b: Point, p: Point) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Whether the infinite line through `a` and `b` intersects segment `cd`.
///
/// If either segment endpoint lies within [`INTERSECT_EPSILON`] of the line
/// the test reports an intersection straight away.
pub fn intersect_line_seg(a: Point, b: Point, c: Point, d: Point) -> bool {
    let c1 = cross(a, b, c);
    let c2 = cross(a, b, d);
    if c1.abs() < INTERSECT_EPSILON || c2.abs() < INTERSECT_EPSILON {
        return true;
    }
    (c1 > 0.0) != (c2 > 0.0)
}

/// Whether segments `ab` and `cd` intersect.
///
/// ```
/// # use historian_utils::{intersect_seg_seg, Point};
/// let p = Point::new;
/// assert!(intersect_seg_seg(p(0.0, 0.0), p(2.0, 2.0), p(0.0, 2.0), p(2.0, 0.0)));
/// assert!(!intersect_seg_seg(p(0.0, 0.0), p(1.0, 1.0), p(3.0, 0.0), p(4.0, -1.0)));
/// ```
pub fn intersect_seg_seg(a: Point, b: Point, c: Point, d: Point) -> bool {
    intersect_line_seg(a, b, c, d) && intersect_line_seg(c, d, a, b)
}
