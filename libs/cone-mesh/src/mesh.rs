//! # Cone Mesh Data Structure
//!
//! Renderer-ready glyph mesh stored as flat parallel attribute sequences.

use crate::error::ConeMeshError;
use glam::DVec3;
use serde::Serialize;

/// A vertex record: the spatial location plus a unique vertex id.
///
/// Records belonging to one sample often share the same xyz; the id keeps
/// them distinguishable so downstream consumers never weld them.
///
/// Serializes as `[x, y, z, id]`. Export only; there is no read-back path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "[f64; 4]")]
pub struct VertexRecord {
    position: DVec3,
    id: u32,
}

impl VertexRecord {
    /// Creates a record at `position` tagged with `id`.
    pub fn new(position: DVec3, id: u32) -> Self {
        Self { position, id }
    }

    /// Returns the spatial location.
    #[inline]
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Returns the vertex id.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns `[x, y, z, id]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.position.x, self.position.y, self.position.z, self.id as f64]
    }
}

impl From<VertexRecord> for [f64; 4] {
    fn from(record: VertexRecord) -> Self {
        record.to_array()
    }
}

/// Monotonic vertex id source shared by every glyph of one build.
#[derive(Debug, Default)]
pub(crate) struct VertexIdCounter(u32);

impl VertexIdCounter {
    /// Returns the next unused id.
    #[inline]
    pub(crate) fn next_id(&mut self) -> u32 {
        let id = self.0;
        self.0 += 1;
        id
    }
}

/// A cone glyph mesh.
///
/// Five parallel sequences of equal length (`positions`, `vectors`,
/// `vertex_intensity`, `vertex_normals`, plus the id carried in each
/// position record) and a triangle list indexing into them. Consumers bind
/// each sequence to its own attribute channel.
///
/// All geometry uses f64 internally; the `*_f32` exports exist for GPU
/// upload.
///
/// Serializes with the attribute names the glyph renderer reads:
/// `positions`, `vectors`, `vertexIntensity`, `vertexNormals`, `cells`,
/// `vectorScale`. Non-finite values become `null` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConeMesh {
    positions: Vec<VertexRecord>,
    vectors: Vec<DVec3>,
    vertex_intensity: Vec<f64>,
    vertex_normals: Vec<DVec3>,
    cells: Vec<[u32; 3]>,
    vector_scale: f64,
}

impl ConeMesh {
    /// Creates an empty mesh with pre-allocated capacity.
    pub(crate) fn with_capacity(vertex_count: usize, triangle_count: usize, vector_scale: f64) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            vectors: Vec::with_capacity(vertex_count),
            vertex_intensity: Vec::with_capacity(vertex_count),
            vertex_normals: Vec::with_capacity(vertex_count),
            cells: Vec::with_capacity(triangle_count),
            vector_scale,
        }
    }

    /// Appends one segment: six records forming two unwelded triangles.
    ///
    /// Every record carries the sample's `vector` and `intensity`; the two
    /// cells reference the six records just appended, in order.
    pub(crate) fn push_segment(
        &mut self,
        ids: &mut VertexIdCounter,
        corners: [DVec3; 6],
        normals: [DVec3; 6],
        vector: DVec3,
        intensity: f64,
    ) {
        for (corner, normal) in corners.into_iter().zip(normals) {
            self.positions.push(VertexRecord::new(corner, ids.next_id()));
            self.vectors.push(vector);
            self.vertex_intensity.push(intensity);
            self.vertex_normals.push(normal);
        }

        let m = self.positions.len() as u32;
        self.cells.push([m - 6, m - 5, m - 4]);
        self.cells.push([m - 3, m - 2, m - 1]);
    }

    /// Returns the number of vertex records.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Vertex records `(x, y, z, id)`.
    #[inline]
    pub fn positions(&self) -> &[VertexRecord] {
        &self.positions
    }

    /// Sample vector replicated per vertex.
    #[inline]
    pub fn vectors(&self) -> &[DVec3] {
        &self.vectors
    }

    /// Normalized vector magnitude replicated per vertex.
    #[inline]
    pub fn vertex_intensity(&self) -> &[f64] {
        &self.vertex_intensity
    }

    /// Per-vertex normals.
    #[inline]
    pub fn vertex_normals(&self) -> &[DVec3] {
        &self.vertex_normals
    }

    /// Triangles as index triples into `positions`.
    #[inline]
    pub fn cells(&self) -> &[[u32; 3]] {
        &self.cells
    }

    /// Global glyph sizing factor, `1 / (max magnitude * bounds diagonal)`.
    ///
    /// May be `+inf` or `NaN` for degenerate fields; the renderer decides
    /// how to clamp it.
    #[inline]
    pub fn vector_scale(&self) -> f64 {
        self.vector_scale
    }

    /// Validates the mesh for consistency.
    ///
    /// Checks:
    /// - All attribute sequences have the same length
    /// - Vertex ids are exactly `0..vertex_count` in order
    /// - All cell indices are in range
    ///
    /// Zero-area triangles are allowed; the placeholder glyph is made of them.
    pub fn validate(&self) -> Result<(), ConeMeshError> {
        let n = self.positions.len();
        if self.vectors.len() != n || self.vertex_intensity.len() != n || self.vertex_normals.len() != n {
            return Err(ConeMeshError::invalid_mesh(format!(
                "attribute lengths differ: {} positions, {} vectors, {} intensities, {} normals",
                n,
                self.vectors.len(),
                self.vertex_intensity.len(),
                self.vertex_normals.len()
            )));
        }

        for (expected, record) in self.positions.iter().enumerate() {
            if record.id() as usize != expected {
                return Err(ConeMeshError::invalid_mesh(format!(
                    "vertex {} has id {}",
                    expected,
                    record.id()
                )));
            }
        }

        for (t, cell) in self.cells.iter().enumerate() {
            if cell.iter().any(|&i| i as usize >= n) {
                return Err(ConeMeshError::invalid_mesh(format!(
                    "cell {} {:?} out of range for {} vertices",
                    t, cell, n
                )));
            }
        }

        Ok(())
    }

    /// Exports position records as f32 for GPU.
    ///
    /// Returns flattened [x, y, z, id, x, y, z, id, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.positions.len() * 4);
        for record in &self.positions {
            let p = record.position();
            result.push(p.x as f32);
            result.push(p.y as f32);
            result.push(p.z as f32);
            result.push(record.id() as f32);
        }
        result
    }

    /// Exports per-vertex vectors as flattened f32 [x, y, z, ...].
    pub fn vectors_f32(&self) -> Vec<f32> {
        flatten_f32(&self.vectors)
    }

    /// Exports per-vertex normals as flattened f32 [nx, ny, nz, ...].
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten_f32(&self.vertex_normals)
    }

    /// Exports per-vertex intensity as f32.
    pub fn intensity_f32(&self) -> Vec<f32> {
        self.vertex_intensity.iter().map(|&i| i as f32).collect()
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn cells_u32(&self) -> Vec<u32> {
        let mut result = Vec::with_capacity(self.cells.len() * 3);
        for cell in &self.cells {
            result.extend_from_slice(cell);
        }
        result
    }
}

fn flatten_f32(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_segment() -> ConeMesh {
        let mut mesh = ConeMesh::with_capacity(6, 2, 1.0);
        let mut ids = VertexIdCounter::default();
        mesh.push_segment(
            &mut ids,
            [DVec3::new(1.0, 2.0, 3.0); 6],
            [DVec3::Y; 6],
            DVec3::X,
            0.5,
        );
        mesh
    }

    #[test]
    fn test_vertex_id_counter_is_monotonic() {
        let mut ids = VertexIdCounter::default();
        assert_eq!(ids.next_id(), 0);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
    }

    #[test]
    fn test_push_segment_appends_six_records() {
        let mesh = one_segment();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.cells(), &[[0, 1, 2], [3, 4, 5]]);
        assert!(mesh.vectors().iter().all(|&v| v == DVec3::X));
        assert!(mesh.vertex_intensity().iter().all(|&i| i == 0.5));
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_second_segment_continues_ids() {
        let mut mesh = ConeMesh::with_capacity(12, 4, 1.0);
        let mut ids = VertexIdCounter::default();
        for _ in 0..2 {
            mesh.push_segment(&mut ids, [DVec3::ZERO; 6], [DVec3::Y; 6], DVec3::Z, 1.0);
        }
        let ids: Vec<u32> = mesh.positions().iter().map(|r| r.id()).collect();
        assert_eq!(ids, (0..12).collect::<Vec<_>>());
        assert_eq!(mesh.cells()[2], [6, 7, 8]);
        assert_eq!(mesh.cells()[3], [9, 10, 11]);
    }

    #[test]
    fn test_validate_rejects_bad_cell() {
        let mut mesh = one_segment();
        mesh.cells.push([0, 1, 6]);
        assert!(matches!(mesh.validate(), Err(ConeMeshError::InvalidMesh { .. })));
    }

    #[test]
    fn test_validate_rejects_ragged_attributes() {
        let mut mesh = one_segment();
        mesh.vertex_intensity.pop();
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_order_ids() {
        let mut mesh = one_segment();
        mesh.positions.swap(0, 1);
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn test_f32_exports() {
        let mesh = one_segment();
        let positions = mesh.positions_f32();
        assert_eq!(positions.len(), 24);
        assert_eq!(&positions[..8], &[1.0, 2.0, 3.0, 0.0, 1.0, 2.0, 3.0, 1.0]);
        assert_eq!(mesh.vectors_f32().len(), 18);
        assert_eq!(&mesh.normals_f32()[..3], &[0.0, 1.0, 0.0]);
        assert_eq!(mesh.intensity_f32(), vec![0.5; 6]);
        assert_eq!(mesh.cells_u32(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_vertex_record_array_layout() {
        let record = VertexRecord::new(DVec3::new(1.0, 2.0, 3.0), 7);
        assert_eq!(record.to_array(), [1.0, 2.0, 3.0, 7.0]);
        assert_eq!(<[f64; 4]>::from(record), [1.0, 2.0, 3.0, 7.0]);
        assert_eq!(record.position(), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(record.id(), 7);
    }

    #[test]
    fn test_serializes_with_renderer_keys() {
        let json = serde_json::to_value(one_segment()).unwrap();
        assert_eq!(json["positions"][1], serde_json::json!([1.0, 2.0, 3.0, 1.0]));
        assert_eq!(json["vertexIntensity"][0], serde_json::json!(0.5));
        assert_eq!(json["vertexNormals"][0], serde_json::json!([0.0, 1.0, 0.0]));
        assert_eq!(json["cells"][1], serde_json::json!([3, 4, 5]));
        assert_eq!(json["vectorScale"], serde_json::json!(1.0));
    }
}
