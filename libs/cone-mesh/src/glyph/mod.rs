//! # Glyph Geometry
//!
//! Per-sample vertex emission. Both glyph kinds share one layout:
//! `segments` repetitions of six records and two triangles, so the id
//! sequence, cells, vectors and intensities are identical between them.

mod cone;
mod placeholder;

use crate::mesh::{ConeMesh, VertexIdCounter};
use config::constants::GlyphConfig;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Geometry emitted for each sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GlyphGeometry {
    /// Every record sits at the sample position with an up normal.
    ///
    /// The glyph shader reconstructs the cone from the vertex id and
    /// the per-vertex vector, so the CPU side stays degenerate.
    #[default]
    Placeholder,
    /// A real cone fan: tip at the sample, base ring behind it along
    /// the scaled vector, per-face normals.
    Cone,
}

/// Per-sample inputs shared by the glyph emitters.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Sample {
    pub position: DVec3,
    pub vector: DVec3,
    pub intensity: f64,
    pub vector_scale: f64,
}

impl GlyphGeometry {
    /// Appends the glyph for one sample.
    pub(crate) fn emit(
        self,
        mesh: &mut ConeMesh,
        ids: &mut VertexIdCounter,
        config: &GlyphConfig,
        sample: Sample,
    ) {
        match self {
            GlyphGeometry::Placeholder => placeholder::emit(mesh, ids, config, sample),
            GlyphGeometry::Cone => cone::emit(mesh, ids, config, sample),
        }
    }
}
