//! Network state: lines, segments and the grid geometry they live on.

pub mod geometry;
pub mod segment;
pub mod line;
pub mod state;

pub use geometry::{is_valid_angle, lies_strictly_between, segments_cross, Point, PASS_THROUGH_TOLERANCE};
pub use segment::Segment;
pub use line::Line;
pub use state::NetworkState;
