//! Angle and circle math for placing things on a ring.

use std::f64::consts::PI;

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	/// Horizontal offset, growing to the right.
	pub x: f64,
	/// Vertical offset, growing downwards.
	pub y: f64,
}

impl Point {
	/// Build a point from its coordinates.
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Straight-line distance to `other`.
	pub fn distance(self, other: Point) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}
}

/// Convert degrees to radians.
pub fn to_rad(deg: f64) -> f64 {
	deg * PI / 180.0
}

/// Canvas angle in radians for a ring angle in degrees.
///
/// Ring angles start at 12 o'clock, canvas angles at 3 o'clock.
pub fn canvas_angle(deg: f64) -> f64 {
	to_rad(deg - 90.0)
}

/// Position of `angle` degrees on a circle of `radius` around (`center`, `center`).
pub fn position(angle: f64, radius: f64, center: f64) -> Point {
	let rad = canvas_angle(angle);
	Point {
		x: center + radius * rad.cos(),
		y: center + radius * rad.sin(),
	}
}

/// Pie-slice path from `start` clockwise to `end`, in SVG path syntax.
pub fn sector_path(start: f64, end: f64, radius: f64, center: f64) -> String {
	let from = position(start, radius, center);
	let to = position(end, radius, center);
	let sweep = if end < start { end + 360.0 - start } else { end - start };
	let large_arc = u8::from(sweep > 180.0);
	format!(
		"M {center} {center} L {} {} A {radius} {radius} 0 {large_arc} 1 {} {} Z",
		from.x, from.y, to.x, to.y
	)
}
