//! 2D point algebra
//!
//! Points are plain values. Segment geometry, drag deltas and resolved
//! absolute positions all share this type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A point (or vector) in the path's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin, also the default right operand of [`add`] and [`subtract`]
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Mirror this point through `about`
    pub fn reflect(self, about: Point) -> Point {
        reflect(self, about)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Elementwise sum; a missing `b` counts as the origin
pub fn add(a: Point, b: Option<Point>) -> Point {
    a + b.unwrap_or(Point::ZERO)
}

/// Elementwise difference; a missing `b` counts as the origin
pub fn subtract(a: Point, b: Option<Point>) -> Point {
    a - b.unwrap_or(Point::ZERO)
}

/// The point symmetric to `p` through `about`: `2 * about - p`
pub fn reflect(p: Point, about: Point) -> Point {
    Point::new(2.0 * about.x - p.x, 2.0 * about.y - p.y)
}
