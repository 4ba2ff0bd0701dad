//! Regular-polygon vertex math.
//!
//! Every function here is pure. Vertices are produced in increasing index
//! order, which is the order drawing code connects them in.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::core::types::Point;

/// Returns the point at `index` on a regular `axis_count`-gon.
///
/// `index` is not required to be in `0..axis_count`; the mapping is periodic.
/// A zero radius collapses to the center and a negative radius mirrors the
/// point through the center.
#[must_use]
pub fn point_at(
    index: i64,
    axis_count: usize,
    radius: f64,
    rotation: f64,
    center_x: f64,
    center_y: f64,
) -> Point {
    let theta = TAU / axis_count as f64;
    let angle = theta * index as f64 + rotation;
    Point::new(
        radius * angle.cos() + center_x,
        radius * angle.sin() + center_y,
    )
}

/// Returns all `axis_count` vertices of a regular polygon in index order.
#[must_use]
pub fn vertices_of(
    axis_count: usize,
    radius: f64,
    rotation: f64,
    center_x: f64,
    center_y: f64,
) -> Vec<Point> {
    (0..axis_count)
        .map(|index| point_at(index as i64, axis_count, radius, rotation, center_x, center_y))
        .collect()
}

/// Parameters fully determining one regular polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonConfig {
    pub axis_count: usize,
    pub radius: f64,
    pub rotation: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl PolygonConfig {
    #[must_use]
    pub const fn new(axis_count: usize, radius: f64, rotation: f64, center: Point) -> Self {
        Self {
            axis_count,
            radius,
            rotation,
            center_x: center.x,
            center_y: center.y,
        }
    }

    /// Same polygon scaled to another radius around the same center.
    #[must_use]
    pub const fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub const fn center(self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    #[must_use]
    pub fn point_at(self, index: i64) -> Point {
        point_at(
            index,
            self.axis_count,
            self.radius,
            self.rotation,
            self.center_x,
            self.center_y,
        )
    }

    #[must_use]
    pub fn vertices(self) -> Vec<Point> {
        vertices_of(
            self.axis_count,
            self.radius,
            self.rotation,
            self.center_x,
            self.center_y,
        )
    }
}
