//! Co-located placeholder glyph.

use super::Sample;
use crate::mesh::{ConeMesh, VertexIdCounter};
use config::constants::{GlyphConfig, PLACEHOLDER_NORMAL};
use glam::DVec3;

/// Emits `segments` segments whose records all sit at the sample position.
pub(super) fn emit(mesh: &mut ConeMesh, ids: &mut VertexIdCounter, config: &GlyphConfig, sample: Sample) {
    let normal = DVec3::from_array(PLACEHOLDER_NORMAL);
    for _ in 0..config.segments {
        mesh.push_segment(
            ids,
            [sample.position; 6],
            [normal; 6],
            sample.vector,
            sample.intensity,
        );
    }
}
