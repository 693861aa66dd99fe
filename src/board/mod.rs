//! Static board model: stations and line definitions.
//!
//! Loaded once before a game starts and treated as read-only afterwards.
//! A failed load is fatal: no game can be built without a valid `Board`.

pub mod station;
pub mod line;
pub mod registry;
mod loader;

pub use station::{RiverSide, Station, StationType};
pub use line::{LineDefinition, DEFAULT_MAX_CARDS};
pub use registry::{Board, GRID_SIZE};
