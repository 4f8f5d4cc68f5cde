//! Neighbor Lookup Infrastructure Layer
pub mod lookup;
pub mod system;

pub use lookup::NeighborLookup;
