//! WASM-facing entry points for cone glyph mesh generation.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the internal helper
//! `build_cone_mesh_internal` to avoid depending on a JS host.
//!
//! ```
//! use cone_mesh::GlyphGeometry;
//!
//! let mesh = cone_mesh_wasm::build_cone_mesh_internal(
//!     &[0.0, 0.0, 0.0],
//!     &[0.0, 1.0, 0.0],
//!     GlyphGeometry::Placeholder,
//!     0,
//! )
//! .unwrap();
//! assert_eq!(mesh.vertex_count(), 48);
//! ```

mod mesh_handle;

pub use mesh_handle::ConeMeshHandle;

use cone_mesh::{ConeMeshBuilder, ConeMeshError, GlyphGeometry, VectorField};
use config::constants::{GlyphConfig, CONE_LENGTH_FACTOR, CONE_RADIUS_FACTOR, CONE_SEGMENTS};
use wasm_bindgen::prelude::*;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "cone-mesh-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the default number of segments per cone glyph.
///
/// # Examples
/// ```
/// let segments = cone_mesh_wasm::default_segments();
/// assert_eq!(segments, 8);
/// ```
#[wasm_bindgen]
pub fn default_segments() -> u32 {
    CONE_SEGMENTS
}

/// Builds a cone glyph mesh from flat sample buffers.
///
/// `positions` and `vectors` are `[x, y, z, x, y, z, ...]` arrays of equal
/// length. `cone_geometry` selects the real cone fan instead of the
/// co-located placeholder. `segments == 0` uses the default segment count.
///
/// # Errors
/// Returns a JavaScript error containing a human-readable message when the
/// buffers are ragged or mismatched, or the segment count is invalid.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = build_cone_mesh(new Float64Array([0,0,0]), new Float64Array([0,1,0]), false, 0);
/// // console.log(mesh.vertex_count, mesh.vector_scale);
/// ```
#[wasm_bindgen]
pub fn build_cone_mesh(
    positions: &[f64],
    vectors: &[f64],
    cone_geometry: bool,
    segments: u32,
) -> Result<ConeMeshHandle, JsValue> {
    let geometry = if cone_geometry {
        GlyphGeometry::Cone
    } else {
        GlyphGeometry::Placeholder
    };
    build_cone_mesh_internal(positions, vectors, geometry, segments)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper that builds a glyph mesh and exposes Rust error types
/// directly.
///
/// # Examples
/// ```
/// use cone_mesh::GlyphGeometry;
/// use cone_mesh_wasm::build_cone_mesh_internal;
///
/// let err = build_cone_mesh_internal(&[0.0; 6], &[0.0; 3], GlyphGeometry::Cone, 0).unwrap_err();
/// assert!(err.to_string().contains("Mismatched"));
/// ```
pub fn build_cone_mesh_internal(
    positions: &[f64],
    vectors: &[f64],
    geometry: GlyphGeometry,
    segments: u32,
) -> Result<ConeMeshHandle, ConeMeshError> {
    let segments = if segments == 0 { CONE_SEGMENTS } else { segments };
    let config = GlyphConfig::new(segments, CONE_LENGTH_FACTOR, CONE_RADIUS_FACTOR)?;
    let field = VectorField::from_flat(positions, vectors)?;

    let (mesh, bounds) = ConeMeshBuilder::new()
        .with_geometry(geometry)
        .with_config(config)
        .build_with_bounds(&field)?;

    log::debug!(
        "Handing {} vertices, {} triangles to JavaScript",
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(ConeMeshHandle::from_mesh(mesh, bounds))
}

#[cfg(test)]
mod tests;
