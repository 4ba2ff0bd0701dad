pub mod geometry;
pub mod types;

pub use geometry::{PolygonConfig, point_at, vertices_of};
pub use types::{Point, Viewport};
