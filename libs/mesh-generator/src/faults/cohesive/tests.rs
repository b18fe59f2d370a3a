//! Tests for cohesive fault splitting.

use super::*;
use crate::generator::{BuildContext, MeshStrategy};
use crate::strategies::BoxMesher;
use config::{GeneratorSettings, Nondimensional};

fn build(mesher: BoxMesher, dimension: usize, interpolate: bool) -> Mesh {
    let scales = Nondimensional::identity();
    let ctx = BuildContext {
        dimension,
        normalizer: &scales,
        settings: GeneratorSettings::new(false, interpolate),
        identity: "box",
    };
    mesher.build(&ctx).unwrap()
}

/// 2x2 quads over [0, 2]², with the middle column and row named.
///
/// ```text
/// 6---7---8
/// | 2 | 3 |
/// 3---4---5
/// | 0 | 1 |
/// 0---1---2
/// ```
fn square(interpolate: bool) -> Mesh {
    let mesher = BoxMesher::rectangle((2, 0.0, 2.0), (2, 0.0, 2.0))
        .with_plane("x_mid", 0, 1)
        .with_plane("y_mid", 1, 1);
    build(mesher, 2, interpolate)
}

#[test]
fn test_split_line() {
    let mut mesh = build(BoxMesher::line(2, 0.0, 2.0).with_plane("middle", 0, 1), 1, false);
    FaultCohesive::new("fault", "middle", DVec3::X)
        .adjust_topology(&mut mesh)
        .unwrap();

    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.cell(0).unwrap().vertices, vec![0, 1]);
    assert_eq!(mesh.cell(1).unwrap().vertices, vec![3, 2]);
    assert_eq!(mesh.cell(2).unwrap().kind, CellKind::Cohesive);
    assert_eq!(mesh.cell(2).unwrap().vertices, vec![1, 3]);
    assert_eq!(mesh.group("fault"), Some(&[1, 3][..]));
}

#[test]
fn test_split_square() {
    let mut mesh = square(false);
    FaultCohesive::new("fault_x", "x_mid", DVec3::X)
        .adjust_topology(&mut mesh)
        .unwrap();

    assert_eq!(mesh.vertex_count(), 12);
    assert_eq!(mesh.count_cells(CellKind::Quadrilateral), 4);
    assert_eq!(mesh.count_cells(CellKind::Cohesive), 2);

    // Left cells keep the originals, right cells use the duplicates 9, 10, 11
    assert_eq!(mesh.cell(0).unwrap().vertices, vec![0, 1, 4, 3]);
    assert_eq!(mesh.cell(1).unwrap().vertices, vec![9, 2, 5, 10]);
    assert_eq!(mesh.cell(3).unwrap().vertices, vec![10, 5, 8, 11]);

    // Facet on the negative side, then its duplicates
    assert_eq!(mesh.cell(4).unwrap().vertices, vec![1, 4, 9, 10]);
    assert_eq!(mesh.group("fault_x"), Some(&[1, 4, 7, 9, 10, 11][..]));
    assert!(mesh.validate().is_ok());
}

#[test]
fn test_duplicates_join_existing_groups() {
    let mut mesh = square(false);
    FaultCohesive::new("fault_x", "x_mid", DVec3::X)
        .adjust_topology(&mut mesh)
        .unwrap();

    // Vertex 1 sits on the bottom boundary, so its duplicate 9 does too
    assert!(mesh.group("y_neg").unwrap().contains(&9));
    // Vertex 4 is the centre, so its duplicate 10 is on the crossing row
    assert!(mesh.group("y_mid").unwrap().contains(&10));
    assert!(!mesh.group("x_neg").unwrap().contains(&9));
}

#[test]
fn test_crossing_faults_depend_on_order() {
    let fault_x = FaultCohesive::new("fault_x", "x_mid", DVec3::X);
    let fault_y = FaultCohesive::new("fault_y", "y_mid", DVec3::Y);

    let mut mesh = square(false);
    fault_x.adjust_topology(&mut mesh).unwrap();
    fault_y.adjust_topology(&mut mesh).unwrap();

    // The second split sees both copies of the centre vertex
    assert_eq!(mesh.vertex_count(), 9 + 3 + 4);
    assert_eq!(mesh.count_cells(CellKind::Cohesive), 4);
    assert!(mesh.validate().is_ok());

    // Every quad now has four distinct vertices, none shared across the cross
    let quads: Vec<&Vec<u32>> = mesh
        .cells()
        .iter()
        .filter(|c| c.kind == CellKind::Quadrilateral)
        .map(|c| &c.vertices)
        .collect();
    for (a, first) in quads.iter().enumerate() {
        for second in &quads[a + 1..] {
            assert!(
                first.iter().all(|v| !second.contains(v)),
                "quads {first:?} and {second:?} still share a vertex"
            );
        }
    }
}

#[test]
fn test_split_reinterpolates() {
    let mut mesh = square(true);
    assert_eq!(mesh.edges().unwrap().len(), 12);
    FaultCohesive::new("fault_x", "x_mid", DVec3::X)
        .adjust_topology(&mut mesh)
        .unwrap();
    // The two middle edges now exist on both sides
    assert_eq!(mesh.edges().unwrap().len(), 14);
}

#[test]
fn test_split_block() {
    let mesher = BoxMesher::block((2, 0.0, 2.0), (1, 0.0, 1.0), (1, 0.0, 1.0)).with_plane("mid", 0, 1);
    let mut mesh = build(mesher, 3, false);
    FaultCohesive::new("fault", "mid", DVec3::X)
        .adjust_topology(&mut mesh)
        .unwrap();
    assert_eq!(mesh.vertex_count(), 12 + 4);
    assert_eq!(mesh.count_cells(CellKind::Cohesive), 1);
    assert_eq!(mesh.cell(2).unwrap().vertices.len(), 8);
}

#[test]
fn test_missing_surface_leaves_mesh_untouched() {
    let mut mesh = square(false);
    let before = mesh.clone();
    let err = FaultCohesive::new("fault", "nowhere", DVec3::X)
        .adjust_topology(&mut mesh)
        .unwrap_err();
    match err {
        MeshGenError::TopologyAdjustment { label, message } => {
            assert_eq!(label, "fault");
            assert!(message.contains("nowhere"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(mesh, before);
}

#[test]
fn test_zero_normal_fails() {
    let mut mesh = square(false);
    assert!(FaultCohesive::new("fault", "x_mid", DVec3::ZERO)
        .adjust_topology(&mut mesh)
        .is_err());
}

#[test]
fn test_boundary_surface_fails_for_either_normal() {
    let cases = [
        ("x_neg", DVec3::X),
        ("x_neg", -DVec3::X),
        ("x_pos", DVec3::X),
        ("x_pos", -DVec3::X),
    ];
    for (surface, normal) in cases {
        let mut mesh = square(false);
        let before = mesh.clone();
        let err = FaultCohesive::new("fault", surface, normal)
            .adjust_topology(&mut mesh)
            .unwrap_err();
        assert!(
            err.to_string().contains("both sides"),
            "{surface} with {normal}: {err}"
        );
        assert_eq!(mesh, before, "{surface} with {normal} mutated the mesh");
    }
}

#[test]
fn test_surface_without_facets_fails() {
    // Cells on both sides of the diagonal, but no face lies along it
    let mesher = BoxMesher::rectangle((2, 0.0, 2.0), (2, 0.0, 2.0));
    let mut mesh = build(mesher, 2, false);
    mesh.set_group("diagonal", vec![0, 4, 8]).unwrap();
    let normal = DVec3::new(1.0, -1.0, 0.0);
    let err = FaultCohesive::new("fault", "diagonal", normal)
        .adjust_topology(&mut mesh)
        .unwrap_err();
    assert!(err.to_string().contains("no cell faces"));
    assert_eq!(mesh.vertex_count(), 9);
}
