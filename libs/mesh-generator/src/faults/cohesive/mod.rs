//! # Cohesive Fault
//!
//! Splits the mesh along a named vertex group and inserts zero-thickness
//! cohesive cells between the two sides.
//!
//! ## Algorithm
//!
//! 1. Look up the surface group; its centroid and the fault normal define
//!    the positive and negative sides
//! 2. Collect facets of negative-side cells whose vertices all lie on the
//!    surface
//! 3. Duplicate every surface vertex and rewire positive-side cells to the
//!    duplicates
//! 4. Add one cohesive cell per facet and record the fault's vertex group
//!
//! Duplicates join every group their original belonged to, so a later fault
//! whose surface crosses this one sees both sides of the split.

use crate::error::{MeshGenError, MeshGenResult};
use crate::faults::FaultInterface;
use crate::mesh::{CellKind, Mesh};
use glam::DVec3;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::debug;

/// Fault implemented with cohesive cells.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_generator::{BoxMesher, FaultCohesive, FaultInterface, MeshStrategy};
/// use mesh_generator::generator::BuildContext;
/// use config::{GeneratorSettings, Nondimensional};
///
/// let mesher = BoxMesher::line(2, 0.0, 2.0).with_plane("middle", 0, 1);
/// let scales = Nondimensional::identity();
/// let ctx = BuildContext {
///     dimension: 1,
///     normalizer: &scales,
///     settings: GeneratorSettings::default(),
///     identity: "line",
/// };
/// let mut mesh = mesher.build(&ctx).unwrap();
///
/// let fault = FaultCohesive::new("fault", "middle", DVec3::X);
/// fault.adjust_topology(&mut mesh).unwrap();
/// assert_eq!(mesh.vertex_count(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FaultCohesive {
    label: String,
    surface: String,
    normal: DVec3,
}

impl FaultCohesive {
    /// Creates a fault splitting the vertex group `surface`.
    ///
    /// Cells on the side `normal` points to are moved onto the duplicated
    /// vertices.
    pub fn new(label: impl Into<String>, surface: impl Into<String>, normal: DVec3) -> Self {
        Self {
            label: label.into(),
            surface: surface.into(),
            normal,
        }
    }

    pub fn surface(&self) -> &str {
        &self.surface
    }

    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    fn fail(&self, message: impl Into<String>) -> MeshGenError {
        MeshGenError::adjustment(&self.label, message)
    }
}

impl FaultInterface for FaultCohesive {
    fn label(&self) -> &str {
        &self.label
    }

    fn adjust_topology(&self, mesh: &mut Mesh) -> MeshGenResult<()> {
        let normal = self
            .normal
            .try_normalize()
            .ok_or_else(|| self.fail("fault normal must be non-zero"))?;
        let surface: BTreeSet<u32> = mesh
            .group(&self.surface)
            .ok_or_else(|| self.fail(format!("surface group '{}' not found", self.surface)))?
            .iter()
            .copied()
            .collect();
        if surface.is_empty() {
            return Err(self.fail(format!("surface group '{}' is empty", self.surface)));
        }

        let on_surface: HashSet<u32> = surface.iter().copied().collect();
        let origin = surface
            .iter()
            .filter_map(|&v| mesh.vertex(v))
            .sum::<DVec3>()
            / surface.len() as f64;

        let mut negative = Vec::new();
        let mut positive = Vec::new();
        for index in mesh.cells_touching(&on_surface) {
            let Some(centroid) = mesh.centroid(index) else {
                continue;
            };
            let side = (centroid - origin).dot(normal);
            if side > 0.0 {
                positive.push(index);
            } else if side < 0.0 {
                negative.push(index);
            }
        }
        // A boundary surface has cells on one side only
        if positive.is_empty() || negative.is_empty() {
            return Err(self.fail(format!(
                "surface '{}' does not have cells on both sides",
                self.surface
            )));
        }

        let facets: Vec<Vec<u32>> = negative
            .iter()
            .filter_map(|&index| mesh.cell(index))
            .flat_map(|cell| {
                cell.kind
                    .facets()
                    .iter()
                    .map(move |facet| facet.iter().map(|&i| cell.vertices[i]).collect::<Vec<u32>>())
            })
            .filter(|facet| facet.iter().all(|v| on_surface.contains(v)))
            .collect();
        if facets.is_empty() {
            return Err(self.fail(format!(
                "no cell faces lie on surface '{}'",
                self.surface
            )));
        }

        let mut duplicates = BTreeMap::new();
        for &original in &surface {
            let position = mesh
                .vertex(original)
                .ok_or_else(|| self.fail(format!("surface vertex {original} does not exist")))?;
            duplicates.insert(original, mesh.add_vertex(position));
        }

        for &index in &positive {
            for (&original, &copy) in &duplicates {
                mesh.replace_cell_vertex(index, original, copy)?;
            }
        }

        for facet in &facets {
            let mut vertices = facet.clone();
            for v in facet {
                let copy = duplicates
                    .get(v)
                    .copied()
                    .ok_or_else(|| self.fail(format!("facet vertex {v} was not duplicated")))?;
                vertices.push(copy);
            }
            mesh.add_cell(CellKind::Cohesive, vertices)?;
        }

        for (&original, &copy) in &duplicates {
            mesh.propagate_duplicate(original, copy);
        }
        let members: Vec<u32> = duplicates
            .keys()
            .chain(duplicates.values())
            .copied()
            .collect();
        mesh.set_group(self.label.clone(), members)?;

        if mesh.is_interpolated() {
            mesh.interpolate();
        }

        debug!(
            fault = %self.label,
            duplicated = duplicates.len(),
            cohesive_cells = facets.len(),
            "Fault surface split."
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests;
