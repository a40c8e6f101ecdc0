//! Tests for the WASM-facing glyph helpers.

use super::*;
use approx::assert_relative_eq;
use config::constants::{ConfigError, MAX_SEGMENTS};

/// Tests that the internal builder produces the two-sample scenario.
#[test]
fn build_produces_two_sample_mesh() {
    let mesh = build_cone_mesh_internal(
        &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        GlyphGeometry::Placeholder,
        0,
    )
    .expect("build succeeds");

    assert_eq!(mesh.vertex_count(), 96);
    assert_eq!(mesh.triangle_count(), 32);
    assert_eq!(mesh.vector_scale(), 1.0);
    assert_eq!(mesh.positions().len(), 96 * 4);
    assert_eq!(mesh.vectors().len(), 96 * 3);
    assert_eq!(mesh.vertex_intensity().len(), 96);
    assert_eq!(mesh.vertex_normals().len(), 96 * 3);
    assert_eq!(mesh.cells().len(), 32 * 3);
    assert_eq!(mesh.bounds_min(), vec![0.0, 0.0, 0.0]);
    assert_eq!(mesh.bounds_max(), vec![1.0, 0.0, 0.0]);
}

/// Ensures the id channel of the position buffer counts up.
#[test]
fn position_buffer_carries_vertex_ids() {
    let mesh = build_cone_mesh_internal(&[1.0, 2.0, 3.0], &[0.0, 1.0, 0.0], GlyphGeometry::Placeholder, 0)
        .expect("build succeeds");
    let positions = mesh.positions();
    for (i, record) in positions.chunks(4).enumerate() {
        assert_eq!(&record[..3], &[1.0, 2.0, 3.0]);
        assert_eq!(record[3], i as f32);
    }
}

/// Tests that mesh buffers contain in-range indices.
#[test]
fn cells_are_in_range() {
    let mesh = build_cone_mesh_internal(
        &[0.0, 0.0, 0.0, 2.0, 1.0, -1.0, 0.5, 0.5, 0.5],
        &[1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 3.0],
        GlyphGeometry::Cone,
        0,
    )
    .expect("build succeeds");

    let vertex_count = mesh.vertex_count();
    for &idx in &mesh.cells() {
        assert!(idx < vertex_count, "Index {} out of range", idx);
    }
    for &v in &mesh.positions() {
        assert!(v.is_finite(), "Position value should be finite");
    }
}

/// Custom segment counts change the layout.
#[test]
fn build_honours_segment_count() {
    let mesh = build_cone_mesh_internal(&[0.0; 6], &[1.0; 6], GlyphGeometry::Placeholder, 5)
        .expect("build succeeds");
    assert_eq!(mesh.vertex_count(), 2 * 5 * 6);
    assert_eq!(mesh.triangle_count(), 2 * 5 * 2);
}

/// Ensures invalid input surfaces explicit errors.
#[test]
fn build_rejects_invalid_input() {
    let ragged = build_cone_mesh_internal(&[0.0; 4], &[0.0; 3], GlyphGeometry::Placeholder, 0);
    assert!(matches!(ragged, Err(ConeMeshError::RaggedBuffer { name: "positions", len: 4 })));

    let mismatched = build_cone_mesh_internal(&[0.0; 6], &[0.0; 3], GlyphGeometry::Placeholder, 0);
    assert!(matches!(mismatched, Err(ConeMeshError::MismatchedLength { .. })));

    let segments = build_cone_mesh_internal(&[0.0; 3], &[0.0; 3], GlyphGeometry::Placeholder, 2);
    assert!(matches!(segments, Err(ConeMeshError::Config(_))));
}

/// Oversized rings are rejected before any allocation.
#[test]
fn build_rejects_oversized_segment_count() {
    let result = build_cone_mesh_internal(&[0.0; 3], &[0.0, 1.0, 0.0], GlyphGeometry::Cone, 700_000_000);
    assert!(matches!(
        result,
        Err(ConeMeshError::Config(ConfigError::InvalidSegments(700_000_000)))
    ));

    let largest = build_cone_mesh_internal(&[0.0; 3], &[0.0, 1.0, 0.0], GlyphGeometry::Cone, MAX_SEGMENTS)
        .expect("largest ring is valid");
    assert_eq!(largest.vertex_count() as usize, MAX_SEGMENTS as usize * 6);
}

/// Empty buffers give an empty mesh with NaN scale and infinite bounds.
#[test]
fn empty_buffers_build_empty_mesh() {
    let mesh = build_cone_mesh_internal(&[], &[], GlyphGeometry::Placeholder, 0)
        .expect("empty field is valid");
    assert!(mesh.is_empty());
    assert!(mesh.vector_scale().is_nan());
    assert!(mesh.bounds().is_empty());
    assert!(mesh.cells().is_empty());
}

/// The JSON export uses the renderer's attribute names.
#[test]
fn json_export_has_renderer_keys() {
    let mesh = build_cone_mesh_internal(
        &[0.0, 0.0, 0.0, 0.0, 3.0, 4.0],
        &[0.0, 0.0, 2.0, 0.0, 0.0, 1.0],
        GlyphGeometry::Placeholder,
        0,
    )
    .expect("build succeeds");
    let json: serde_json::Value =
        serde_json::from_str(&mesh.to_json_string().expect("serializes")).expect("valid json");

    assert_eq!(json["cells"].as_array().map(Vec::len), Some(32));
    assert_eq!(json["vertexIntensity"].as_array().map(Vec::len), Some(96));
    let scale = json["vectorScale"].as_f64().expect("finite scale");
    assert_relative_eq!(scale, 1.0 / (2.0 * 5.0), epsilon = 1e-15);
}

#[test]
fn default_segments_matches_config() {
    assert_eq!(default_segments(), CONE_SEGMENTS);
}
