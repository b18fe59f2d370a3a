//! # Construction Strategies
//!
//! Mesh construction algorithms that plug into
//! [`MeshGenerator`](crate::MeshGenerator).

pub mod box_mesher;

pub use box_mesher::{Axis, BoxMesher, PlaneGroup};
