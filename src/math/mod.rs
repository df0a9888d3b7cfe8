//! Block-space geometry

pub mod cuboid;

pub use cuboid::{Cuboid, Region};
