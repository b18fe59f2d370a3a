//! Tests for the structured box mesher.

use super::*;
use approx::assert_relative_eq;
use config::{GeneratorSettings, Nondimensional};

fn build(mesher: &BoxMesher, dimension: usize, settings: GeneratorSettings) -> MeshGenResult<Mesh> {
    let scales = Nondimensional::identity();
    let ctx = BuildContext {
        dimension,
        normalizer: &scales,
        settings,
        identity: "box",
    };
    mesher.build(&ctx)
}

#[test]
fn test_line_counts() {
    let mesh = build(&BoxMesher::line(4, 0.0, 1.0), 1, GeneratorSettings::default()).unwrap();
    assert_eq!(mesh.vertex_count(), 5);
    assert_eq!(mesh.cell_count(), 4);
    assert_eq!(mesh.count_cells(CellKind::Segment), 4);
    assert_eq!(mesh.group("x_neg"), Some(&[0][..]));
    assert_eq!(mesh.group("x_pos"), Some(&[4][..]));
}

#[test]
fn test_rectangle_counts_and_winding() {
    let mesher = BoxMesher::rectangle((2, 0.0, 2.0), (3, 0.0, 3.0));
    let mesh = build(&mesher, 2, GeneratorSettings::default()).unwrap();
    assert_eq!(mesh.vertex_count(), 12);
    assert_eq!(mesh.count_cells(CellKind::Quadrilateral), 6);
    // First quad: counter-clockwise from the origin
    assert_eq!(mesh.cell(0).unwrap().vertices, vec![0, 1, 4, 3]);
    assert_eq!(mesh.group("y_pos").unwrap().len(), 3);
    assert_eq!(mesh.group("x_pos").unwrap().len(), 4);
}

#[test]
fn test_block_counts() {
    let mesher = BoxMesher::block((2, 0.0, 1.0), (2, 0.0, 1.0), (2, 0.0, 1.0));
    let mesh = build(&mesher, 3, GeneratorSettings::default()).unwrap();
    assert_eq!(mesh.vertex_count(), 27);
    assert_eq!(mesh.count_cells(CellKind::Hexahedron), 8);
    assert_eq!(mesh.group("z_neg").unwrap().len(), 9);
    assert!(mesh.validate().is_ok());
}

#[test]
fn test_coordinates_are_nondimensionalized() {
    let mesher = BoxMesher::rectangle((2, -1000.0, 1000.0), (1, 0.0, 500.0));
    let scales = Nondimensional::identity().with_length_scale(1000.0).unwrap();
    let ctx = BuildContext {
        dimension: 2,
        normalizer: &scales,
        settings: GeneratorSettings::default(),
        identity: "box",
    };
    let mesh = mesher.build(&ctx).unwrap();
    let (min, max) = mesh.bounding_box();
    assert_relative_eq!(min.x, -1.0);
    assert_relative_eq!(max.x, 1.0);
    assert_relative_eq!(max.y, 0.5);
    assert_eq!(max.z, 0.0);
}

#[test]
fn test_interpolate_builds_edges() {
    let mesher = BoxMesher::rectangle((2, 0.0, 2.0), (1, 0.0, 1.0));
    let plain = build(&mesher, 2, GeneratorSettings::new(false, false)).unwrap();
    assert!(!plain.is_interpolated());

    let mesh = build(&mesher, 2, GeneratorSettings::new(false, true)).unwrap();
    assert_eq!(mesh.edges().unwrap().len(), 7);
}

#[test]
fn test_interpolate_block_builds_faces() {
    let mesher = BoxMesher::block((1, 0.0, 1.0), (1, 0.0, 1.0), (2, 0.0, 2.0));
    let mesh = build(&mesher, 3, GeneratorSettings::new(true, true)).unwrap();
    // Two stacked hexes share one face and four edges
    assert_eq!(mesh.faces().unwrap().len(), 11);
    assert_eq!(mesh.edges().unwrap().len(), 20);
}

#[test]
fn test_named_plane() {
    let mesher = BoxMesher::rectangle((2, 0.0, 2.0), (2, 0.0, 2.0)).with_plane("fault", 0, 1);
    let mesh = build(&mesher, 2, GeneratorSettings::default()).unwrap();
    assert_eq!(mesh.group("fault"), Some(&[1, 4, 7][..]));
}

#[test]
fn test_dimension_mismatch() {
    let err = build(&BoxMesher::line(2, 0.0, 1.0), 2, GeneratorSettings::default()).unwrap_err();
    assert!(matches!(err, MeshGenError::InvalidDimension { dimension: 2, .. }));
}

#[test]
fn test_rejects_bad_axes() {
    let empty = BoxMesher::line(0, 0.0, 1.0);
    assert!(matches!(
        build(&empty, 1, GeneratorSettings::default()),
        Err(MeshGenError::InvalidGeometry(_))
    ));
    let inverted = BoxMesher::line(2, 1.0, 0.0);
    assert!(build(&inverted, 1, GeneratorSettings::default()).is_err());
    let too_many = BoxMesher::new(vec![Axis::new(1, 0.0, 1.0); 4]);
    assert!(build(&too_many, 4, GeneratorSettings::default()).is_err());
}

#[test]
fn test_rejects_bad_plane() {
    let off_axis = BoxMesher::line(2, 0.0, 1.0).with_plane("p", 1, 0);
    assert!(build(&off_axis, 1, GeneratorSettings::default()).is_err());
    let past_end = BoxMesher::line(2, 0.0, 1.0).with_plane("p", 0, 3);
    assert!(build(&past_end, 1, GeneratorSettings::default()).is_err());
}
