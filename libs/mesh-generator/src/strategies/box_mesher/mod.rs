//! # Box Mesher
//!
//! Structured lattice over an axis-aligned box: segments in 1D, quads in 2D
//! and hexahedra in 3D.
//!
//! Vertices are numbered with the first axis varying fastest. Each axis gets
//! two boundary groups (`x_neg`/`x_pos`, `y_neg`/`y_pos`, `z_neg`/`z_pos`),
//! and extra lattice planes can be named with [`BoxMesher::with_plane`] so
//! that faults have a surface to split.

use crate::error::{MeshGenError, MeshGenResult};
use crate::generator::{BuildContext, MeshStrategy};
use crate::mesh::{CellKind, Mesh};
use config::constants::MAX_DIMENSION;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

const AXIS_NAMES: [&str; 3] = ["x", "y", "z"];

/// Lattice corner offsets of one cell, in local vertex order.
const SEGMENT_CORNERS: &[[usize; 3]] = &[[0, 0, 0], [1, 0, 0]];
const QUAD_CORNERS: &[[usize; 3]] = &[[0, 0, 0], [1, 0, 0], [1, 1, 0], [0, 1, 0]];
const HEX_CORNERS: &[[usize; 3]] = &[
    [0, 0, 0], [1, 0, 0], [1, 1, 0], [0, 1, 0],
    [0, 0, 1], [1, 0, 1], [1, 1, 1], [0, 1, 1],
];

/// Cell count and extent (dimensional units) along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub cells: usize,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(cells: usize, min: f64, max: f64) -> Self {
        Self { cells, min, max }
    }
}

/// A named lattice plane: all vertices whose `axis` index equals `index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaneGroup {
    pub name: String,
    pub axis: usize,
    pub index: usize,
}

/// Structured box mesh strategy.
///
/// # Example
///
/// ```rust
/// use mesh_generator::BoxMesher;
///
/// let mesher = BoxMesher::rectangle((2, 0.0, 2.0), (2, 0.0, 2.0)).with_plane("fault", 0, 1);
/// assert_eq!(mesher.dimension(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxMesher {
    axes: Vec<Axis>,
    planes: Vec<PlaneGroup>,
}

impl BoxMesher {
    pub fn new(axes: Vec<Axis>) -> Self {
        Self {
            axes,
            planes: Vec::new(),
        }
    }

    /// 1D lattice of `cells` segments over `[min, max]`.
    pub fn line(cells: usize, min: f64, max: f64) -> Self {
        Self::new(vec![Axis::new(cells, min, max)])
    }

    /// 2D lattice; each argument is `(cells, min, max)`.
    pub fn rectangle(x: (usize, f64, f64), y: (usize, f64, f64)) -> Self {
        Self::new(vec![Axis::new(x.0, x.1, x.2), Axis::new(y.0, y.1, y.2)])
    }

    /// 3D lattice; each argument is `(cells, min, max)`.
    pub fn block(x: (usize, f64, f64), y: (usize, f64, f64), z: (usize, f64, f64)) -> Self {
        Self::new(vec![
            Axis::new(x.0, x.1, x.2),
            Axis::new(y.0, y.1, y.2),
            Axis::new(z.0, z.1, z.2),
        ])
    }

    /// Names the lattice plane `index` along `axis` as a vertex group.
    pub fn with_plane(mut self, name: impl Into<String>, axis: usize, index: usize) -> Self {
        self.planes.push(PlaneGroup {
            name: name.into(),
            axis,
            index,
        });
        self
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.axes.len()
    }

    fn check(&self, dimension: usize) -> MeshGenResult<()> {
        if !(1..=MAX_DIMENSION).contains(&self.axes.len()) {
            return Err(MeshGenError::invalid_geometry(format!(
                "box mesher needs 1..={MAX_DIMENSION} axes, got {}",
                self.axes.len()
            )));
        }
        if dimension != self.axes.len() {
            return Err(MeshGenError::InvalidDimension {
                dimension,
                message: format!("box mesher has {} axes", self.axes.len()),
            });
        }
        for (axis, name) in self.axes.iter().zip(AXIS_NAMES) {
            if axis.cells == 0 {
                return Err(MeshGenError::invalid_geometry(format!(
                    "{name} axis needs at least one cell"
                )));
            }
            if !(axis.min.is_finite() && axis.max.is_finite() && axis.max > axis.min) {
                return Err(MeshGenError::invalid_geometry(format!(
                    "{name} axis extent [{}, {}] is empty or not finite",
                    axis.min, axis.max
                )));
            }
        }
        for plane in &self.planes {
            let Some(axis) = self.axes.get(plane.axis) else {
                return Err(MeshGenError::invalid_geometry(format!(
                    "plane '{}' refers to axis {} of a {}D box",
                    plane.name,
                    plane.axis,
                    self.axes.len()
                )));
            };
            if plane.index > axis.cells {
                return Err(MeshGenError::invalid_geometry(format!(
                    "plane '{}' index {} exceeds {} cells",
                    plane.name, plane.index, axis.cells
                )));
            }
        }
        Ok(())
    }

    /// Vertex count along each axis, padded to three with ones.
    fn node_counts(&self) -> [usize; 3] {
        let mut counts = [1; 3];
        for (count, axis) in counts.iter_mut().zip(&self.axes) {
            *count = axis.cells + 1;
        }
        counts
    }

    fn cell_counts(&self) -> [usize; 3] {
        let mut counts = [1; 3];
        for (count, axis) in counts.iter_mut().zip(&self.axes) {
            *count = axis.cells;
        }
        counts
    }

    fn cell_layout(&self) -> (CellKind, &'static [[usize; 3]]) {
        match self.axes.len() {
            1 => (CellKind::Segment, SEGMENT_CORNERS),
            2 => (CellKind::Quadrilateral, QUAD_CORNERS),
            _ => (CellKind::Hexahedron, HEX_CORNERS),
        }
    }

    /// Group names and members: boundaries first, then named planes.
    fn groups(&self, nodes: [usize; 3]) -> Vec<(String, Vec<u32>)> {
        let lattice = lattice_points(nodes);
        let select = |axis: usize, index: usize| -> Vec<u32> {
            lattice
                .iter()
                .enumerate()
                .filter(|(_, ijk)| ijk[axis] == index)
                .map(|(v, _)| v as u32)
                .collect()
        };

        let mut groups = Vec::new();
        for (axis, extent) in self.axes.iter().enumerate() {
            let name = AXIS_NAMES[axis];
            groups.push((format!("{name}_neg"), select(axis, 0)));
            groups.push((format!("{name}_pos"), select(axis, extent.cells)));
        }
        for plane in &self.planes {
            groups.push((plane.name.clone(), select(plane.axis, plane.index)));
        }
        groups
    }
}

impl MeshStrategy for BoxMesher {
    fn build(&self, ctx: &BuildContext<'_>) -> MeshGenResult<Mesh> {
        self.check(ctx.dimension)?;

        let nodes = self.node_counts();
        let length_scale = ctx.normalizer.length_scale();
        let mut mesh = Mesh::new(ctx.dimension);

        for ijk in lattice_points(nodes) {
            let mut position = DVec3::ZERO;
            for (d, axis) in self.axes.iter().enumerate() {
                let t = ijk[d] as f64 / axis.cells as f64;
                let x = axis.min + (axis.max - axis.min) * t;
                position[d] = ctx.normalizer.nondimensionalize(x, length_scale);
            }
            mesh.add_vertex(position);
        }

        let (kind, corners) = self.cell_layout();
        let index_of = |ijk: [usize; 3]| (ijk[0] + nodes[0] * (ijk[1] + nodes[1] * ijk[2])) as u32;
        for origin in lattice_points(self.cell_counts()) {
            let vertices = corners
                .iter()
                .map(|offset| {
                    index_of([
                        origin[0] + offset[0],
                        origin[1] + offset[1],
                        origin[2] + offset[2],
                    ])
                })
                .collect();
            mesh.add_cell(kind, vertices)?;
        }

        for (name, members) in self.groups(nodes) {
            mesh.set_group(name, members)?;
        }

        if ctx.settings.interpolate {
            mesh.interpolate();
        }

        if ctx.settings.debug {
            mesh.validate()?;
            debug!(
                generator = ctx.identity,
                dimension = ctx.dimension,
                vertices = mesh.vertex_count(),
                cells = mesh.cell_count(),
                edges = mesh.edges().map_or(0, <[_]>::len),
                "Box mesh built."
            );
        }
        Ok(mesh)
    }
}

/// Lattice indices with the first axis varying fastest.
fn lattice_points(counts: [usize; 3]) -> Vec<[usize; 3]> {
    let mut points = Vec::with_capacity(counts.iter().product());
    for k in 0..counts[2] {
        for j in 0..counts[1] {
            for i in 0..counts[0] {
                points.push([i, j, k]);
            }
        }
    }
    points
}

#[cfg(test)]
mod tests;
