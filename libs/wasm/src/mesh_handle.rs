//! # Cone Mesh Handle
//!
//! WASM-friendly wrapper for glyph mesh data that can be transferred to JavaScript.

use cone_mesh::{Bounds, ConeMesh};
use wasm_bindgen::prelude::*;

/// A handle to a cone glyph mesh that can be accessed from JavaScript.
///
/// Each attribute channel is returned as its own typed array so it can be
/// bound directly to a shader attribute.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = build_cone_mesh(positions, vectors, false, 0);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.positions(), 4));
/// geometry.setAttribute('vector', new THREE.BufferAttribute(mesh.vectors(), 3));
/// geometry.setAttribute('intensity', new THREE.BufferAttribute(mesh.vertex_intensity(), 1));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.vertex_normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.cells(), 1));
/// material.uniforms.vectorScale.value = mesh.vector_scale;
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct ConeMeshHandle {
    mesh: ConeMesh,
    bounds: Bounds,
}

#[wasm_bindgen]
impl ConeMeshHandle {
    /// Returns the number of vertex records.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.mesh.vertex_count() as u32
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.mesh.triangle_count() as u32
    }

    /// Returns the global glyph sizing factor. May be `Infinity` or `NaN`.
    #[wasm_bindgen(getter)]
    pub fn vector_scale(&self) -> f64 {
        self.mesh.vector_scale()
    }

    /// Returns the minimum corner of the sample bounds as [x, y, z].
    #[wasm_bindgen]
    pub fn bounds_min(&self) -> Vec<f64> {
        self.bounds.min.to_array().to_vec()
    }

    /// Returns the maximum corner of the sample bounds as [x, y, z].
    #[wasm_bindgen]
    pub fn bounds_max(&self) -> Vec<f64> {
        self.bounds.max.to_array().to_vec()
    }

    /// Returns the position records as a Float32Array.
    ///
    /// Format: [x, y, z, id, x, y, z, id, ...]
    /// Length: vertex_count * 4
    #[wasm_bindgen]
    pub fn positions(&self) -> Vec<f32> {
        self.mesh.positions_f32()
    }

    /// Returns the per-vertex vectors as a Float32Array.
    ///
    /// Length: vertex_count * 3
    #[wasm_bindgen]
    pub fn vectors(&self) -> Vec<f32> {
        self.mesh.vectors_f32()
    }

    /// Returns the per-vertex intensity as a Float32Array.
    #[wasm_bindgen]
    pub fn vertex_intensity(&self) -> Vec<f32> {
        self.mesh.intensity_f32()
    }

    /// Returns the per-vertex normals as a Float32Array.
    ///
    /// Length: vertex_count * 3
    #[wasm_bindgen]
    pub fn vertex_normals(&self) -> Vec<f32> {
        self.mesh.normals_f32()
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Format: [i0, i1, i2, i0, i1, i2, ...]
    /// Length: triangle_count * 3
    #[wasm_bindgen]
    pub fn cells(&self) -> Vec<u32> {
        self.mesh.cells_u32()
    }

    /// Returns true if the mesh is empty.
    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }

    /// Serializes the mesh as the JSON document the glyph renderer reads.
    ///
    /// # Errors
    /// Returns a JavaScript error if serialization fails.
    #[wasm_bindgen]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.to_json_string()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

impl ConeMeshHandle {
    /// Creates a handle from a built mesh and its sample bounds.
    pub fn from_mesh(mesh: ConeMesh, bounds: Bounds) -> Self {
        Self { mesh, bounds }
    }

    /// Returns the wrapped mesh.
    pub fn mesh(&self) -> &ConeMesh {
        &self.mesh
    }

    /// Returns the sample bounds.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Host-side JSON export with the Rust error type.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.mesh)
    }
}
