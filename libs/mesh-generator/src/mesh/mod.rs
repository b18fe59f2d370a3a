//! # Mesh Data Structure
//!
//! Unstructured mesh with typed cells, named vertex groups and optional
//! interpolated topology (edges, and faces in 3D).
//!
//! Vertex groups play the role of labels: boundaries and fault surfaces are
//! identified by name, and fault interfaces look them up to find where to
//! split the mesh.

use crate::error::{MeshGenError, MeshGenResult};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

// =============================================================================
// CELL KINDS
// =============================================================================

/// Shape of a cell and the local numbering of its vertices.
///
/// Quadrilaterals list vertices counter-clockwise. Hexahedra list the bottom
/// quad counter-clockwise, then the top quad in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Segment,
    Triangle,
    Quadrilateral,
    Tetrahedron,
    Hexahedron,
    /// Zero-thickness cell joining the two sides of a fault: the facet
    /// vertices on the negative side followed by their duplicates.
    Cohesive,
}

const SEGMENT_FACETS: &[&[usize]] = &[&[0], &[1]];
const TRIANGLE_FACETS: &[&[usize]] = &[&[0, 1], &[1, 2], &[2, 0]];
const QUAD_FACETS: &[&[usize]] = &[&[0, 1], &[1, 2], &[2, 3], &[3, 0]];
const TET_FACETS: &[&[usize]] = &[&[0, 1, 2], &[0, 1, 3], &[1, 2, 3], &[0, 2, 3]];
const HEX_FACETS: &[&[usize]] = &[
    &[0, 1, 2, 3],
    &[4, 5, 6, 7],
    &[0, 1, 5, 4],
    &[1, 2, 6, 5],
    &[2, 3, 7, 6],
    &[3, 0, 4, 7],
];

const TET_EDGES: &[[usize; 2]] = &[[0, 1], [1, 2], [2, 0], [0, 3], [1, 3], [2, 3]];
const HEX_EDGES: &[[usize; 2]] = &[
    [0, 1], [1, 2], [2, 3], [3, 0],
    [4, 5], [5, 6], [6, 7], [7, 4],
    [0, 4], [1, 5], [2, 6], [3, 7],
];

impl CellKind {
    /// Topological dimension of the cell.
    pub fn dimension(self) -> usize {
        match self {
            Self::Segment => 1,
            Self::Triangle | Self::Quadrilateral => 2,
            Self::Tetrahedron | Self::Hexahedron => 3,
            Self::Cohesive => 0,
        }
    }

    /// Required vertex count, or `None` when it depends on the facet.
    pub fn vertex_count(self) -> Option<usize> {
        match self {
            Self::Segment => Some(2),
            Self::Triangle => Some(3),
            Self::Quadrilateral | Self::Tetrahedron => Some(4),
            Self::Hexahedron => Some(8),
            Self::Cohesive => None,
        }
    }

    /// Local vertex indices of each facet (codimension-one boundary entity).
    pub fn facets(self) -> &'static [&'static [usize]] {
        match self {
            Self::Segment => SEGMENT_FACETS,
            Self::Triangle => TRIANGLE_FACETS,
            Self::Quadrilateral => QUAD_FACETS,
            Self::Tetrahedron => TET_FACETS,
            Self::Hexahedron => HEX_FACETS,
            Self::Cohesive => &[],
        }
    }

    /// Local vertex pairs forming the cell's edges.
    pub fn edges(self) -> Vec<[usize; 2]> {
        match self {
            Self::Segment => vec![[0, 1]],
            Self::Triangle | Self::Quadrilateral => self
                .facets()
                .iter()
                .map(|facet| [facet[0], facet[1]])
                .collect(),
            Self::Tetrahedron => TET_EDGES.to_vec(),
            Self::Hexahedron => HEX_EDGES.to_vec(),
            Self::Cohesive => Vec::new(),
        }
    }
}

/// A cell: its kind and the global indices of its vertices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellKind,
    pub vertices: Vec<u32>,
}

// =============================================================================
// MESH
// =============================================================================

/// Mesh produced by a construction strategy and adjusted by fault interfaces.
///
/// Coordinates are stored as `DVec3`; components beyond the mesh dimension
/// are zero.
///
/// # Example
///
/// ```rust
/// use mesh_generator::mesh::{CellKind, Mesh};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new(1);
/// let a = mesh.add_vertex(DVec3::ZERO);
/// let b = mesh.add_vertex(DVec3::X);
/// mesh.add_cell(CellKind::Segment, vec![a, b]).unwrap();
/// assert_eq!(mesh.cell_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    dimension: usize,
    vertices: Vec<DVec3>,
    cells: Vec<Cell>,
    groups: BTreeMap<String, Vec<u32>>,
    edges: Option<Vec<[u32; 2]>>,
    faces: Option<Vec<Vec<u32>>>,
}

impl Mesh {
    /// Creates an empty mesh of the given spatial dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            vertices: Vec::new(),
            cells: Vec::new(),
            groups: BTreeMap::new(),
            edges: None,
            faces: None,
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the vertex at `index`, if it exists.
    #[inline]
    pub fn vertex(&self, index: u32) -> Option<DVec3> {
        self.vertices.get(index as usize).copied()
    }

    /// Adds a cell and returns its index.
    ///
    /// Fails if the vertex count does not match the kind, or if any index is
    /// out of range.
    pub fn add_cell(&mut self, kind: CellKind, vertices: Vec<u32>) -> MeshGenResult<usize> {
        self.check_cell(kind, &vertices)?;
        self.cells.push(Cell { kind, vertices });
        Ok(self.cells.len() - 1)
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Number of cells of the given kind.
    pub fn count_cells(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|cell| cell.kind == kind).count()
    }

    /// Replaces every occurrence of `from` in cell `index` with `to`.
    ///
    /// Returns true if the cell referenced `from`.
    pub fn replace_cell_vertex(&mut self, index: usize, from: u32, to: u32) -> MeshGenResult<bool> {
        if to as usize >= self.vertices.len() {
            return Err(MeshGenError::invalid_topology(format!(
                "vertex {to} does not exist"
            )));
        }
        let cell = self
            .cells
            .get_mut(index)
            .ok_or_else(|| MeshGenError::invalid_topology(format!("cell {index} does not exist")))?;
        let mut replaced = false;
        for vertex in cell.vertices.iter_mut().filter(|v| **v == from) {
            *vertex = to;
            replaced = true;
        }
        Ok(replaced)
    }

    /// Arithmetic mean of the cell's vertex coordinates.
    pub fn centroid(&self, index: usize) -> Option<DVec3> {
        let cell = self.cells.get(index)?;
        if cell.vertices.is_empty() {
            return None;
        }
        let sum = cell
            .vertices
            .iter()
            .map(|&v| self.vertices.get(v as usize).copied())
            .sum::<Option<DVec3>>()?;
        Some(sum / cell.vertices.len() as f64)
    }

    /// Indices of cells referencing at least one of `vertices`.
    pub fn cells_touching(&self, vertices: &HashSet<u32>) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.vertices.iter().any(|v| vertices.contains(v)))
            .map(|(index, _)| index)
            .collect()
    }

    // -------------------------------------------------------------------------
    // Vertex groups
    // -------------------------------------------------------------------------

    /// Stores a named vertex group, replacing any group with the same name.
    pub fn set_group(&mut self, name: impl Into<String>, vertices: Vec<u32>) -> MeshGenResult<()> {
        let name = name.into();
        if let Some(bad) = vertices.iter().find(|&&v| v as usize >= self.vertices.len()) {
            return Err(MeshGenError::invalid_topology(format!(
                "group '{name}' references missing vertex {bad}"
            )));
        }
        self.groups.insert(name, vertices);
        Ok(())
    }

    pub fn group(&self, name: &str) -> Option<&[u32]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Appends `duplicate` to every group that contains `original`.
    pub(crate) fn propagate_duplicate(&mut self, original: u32, duplicate: u32) {
        for members in self.groups.values_mut() {
            if members.contains(&original) && !members.contains(&duplicate) {
                members.push(duplicate);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Interpolated topology
    // -------------------------------------------------------------------------

    /// Builds the unique edges (and faces, for 3D meshes) of all cells.
    ///
    /// Cohesive cells are skipped. Calling this again rebuilds the entities
    /// from the current cells.
    pub fn interpolate(&mut self) {
        let mut edges = BTreeSet::new();
        let mut faces = BTreeSet::new();
        for cell in self.cells.iter().filter(|c| c.kind != CellKind::Cohesive) {
            for [a, b] in cell.kind.edges() {
                let (a, b) = (cell.vertices[a], cell.vertices[b]);
                edges.insert([a.min(b), a.max(b)]);
            }
            if cell.kind.dimension() == 3 {
                for facet in cell.kind.facets() {
                    let mut face: Vec<u32> = facet.iter().map(|&i| cell.vertices[i]).collect();
                    face.sort_unstable();
                    faces.insert(face);
                }
            }
        }
        self.edges = Some(edges.into_iter().collect());
        self.faces = if self.dimension == 3 {
            Some(faces.into_iter().collect())
        } else {
            None
        };
    }

    #[inline]
    pub fn is_interpolated(&self) -> bool {
        self.edges.is_some()
    }

    /// Unique edges as sorted vertex pairs, if interpolated.
    pub fn edges(&self) -> Option<&[[u32; 2]]> {
        self.edges.as_deref()
    }

    /// Unique faces as sorted vertex lists, if interpolated in 3D.
    pub fn faces(&self) -> Option<&[Vec<u32>]> {
        self.faces.as_deref()
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Checks that every cell and group references existing vertices and
    /// that cell kinds fit the mesh dimension.
    pub fn validate(&self) -> MeshGenResult<()> {
        for (index, cell) in self.cells.iter().enumerate() {
            self.check_cell(cell.kind, &cell.vertices)
                .map_err(|err| MeshGenError::invalid_topology(format!("cell {index}: {err}")))?;
        }
        for (name, members) in &self.groups {
            if let Some(bad) = members.iter().find(|&&v| v as usize >= self.vertices.len()) {
                return Err(MeshGenError::invalid_topology(format!(
                    "group '{name}' references missing vertex {bad}"
                )));
            }
        }
        Ok(())
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    fn check_cell(&self, kind: CellKind, vertices: &[u32]) -> MeshGenResult<()> {
        if kind.dimension() > self.dimension {
            return Err(MeshGenError::invalid_topology(format!(
                "{kind:?} cell in a {}D mesh",
                self.dimension
            )));
        }
        match kind.vertex_count() {
            Some(expected) if vertices.len() != expected => {
                return Err(MeshGenError::invalid_topology(format!(
                    "{kind:?} needs {expected} vertices, got {}",
                    vertices.len()
                )));
            }
            None if vertices.is_empty() || vertices.len() % 2 != 0 => {
                return Err(MeshGenError::invalid_topology(format!(
                    "cohesive cell needs an even, non-zero vertex count, got {}",
                    vertices.len()
                )));
            }
            _ => {}
        }
        if let Some(bad) = vertices.iter().find(|&&v| v as usize >= self.vertices.len()) {
            return Err(MeshGenError::invalid_topology(format!(
                "vertex {bad} does not exist"
            )));
        }
        Ok(())
    }
}
