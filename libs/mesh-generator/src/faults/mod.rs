//! # Fault Interfaces
//!
//! Internal discontinuity surfaces that change mesh topology after
//! construction. The generator applies them in the order the caller gives.

mod cohesive;

pub use cohesive::FaultCohesive;

use crate::error::MeshGenResult;
use crate::mesh::Mesh;

/// A surface that modifies the mesh topology in place.
pub trait FaultInterface {
    /// Human-readable identifier used in diagnostics.
    fn label(&self) -> &str;

    /// Changes `mesh` in place.
    ///
    /// Should fail with [`MeshGenError::TopologyAdjustment`] when the surface
    /// cannot be found or the change is impossible.
    ///
    /// [`MeshGenError::TopologyAdjustment`]: crate::MeshGenError::TopologyAdjustment
    fn adjust_topology(&self, mesh: &mut Mesh) -> MeshGenResult<()>;
}
