use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Center of the surface in pixel space.
    #[must_use]
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// 2D coordinate in surface space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Viewport};

    #[test]
    fn viewport_center_is_half_extent() {
        let center = Viewport::new(300, 280).center();
        assert_eq!(center, Point::new(150.0, 140.0));
    }

    #[test]
    fn zero_sized_viewport_is_invalid() {
        assert!(!Viewport::new(0, 10).is_valid());
        assert!(!Viewport::new(10, 0).is_valid());
        assert!(Viewport::new(1, 1).is_valid());
    }
}
