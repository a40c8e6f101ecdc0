//! # Cone Mesh
//!
//! Browser-safe cone glyph generation for 3D vector fields.
//! Converts parallel arrays of sample positions and vectors into a
//! renderer-ready triangle mesh.
//!
//! ## Architecture
//!
//! ```text
//! VectorField → field_statistics → vector scale → glyph emission → ConeMesh
//! ```
//!
//! ## Output
//!
//! For `N` samples the mesh holds `48 * N` vertex records and `16 * N`
//! triangles with the default layout. Every record carries:
//! - its position and a unique vertex id (`[x, y, z, id]`)
//! - the sample's vector
//! - the sample's intensity, `|vector| * vector_scale`
//! - a normal
//!
//! `vector_scale` is `1 / (max magnitude * bounds diagonal)` and is not
//! clamped: degenerate fields yield `+inf` or `NaN`.
//!
//! ## Usage
//!
//! ```rust
//! use cone_mesh::{build_cone_mesh, VectorField};
//! use glam::DVec3;
//!
//! let positions = [DVec3::ZERO, DVec3::X];
//! let vectors = [DVec3::X, DVec3::ZERO];
//! let field = VectorField::new(&positions, &vectors)?;
//!
//! let mut bounds = [DVec3::ZERO; 2];
//! let mesh = build_cone_mesh(&field, Some(&mut bounds))?;
//! assert_eq!(mesh.triangle_count(), 32);
//! # Ok::<(), cone_mesh::ConeMeshError>(())
//! ```

pub mod bounds;
pub mod builder;
pub mod error;
pub mod field;
pub mod glyph;
pub mod mesh;

pub use bounds::Bounds;
pub use builder::{build_cone_mesh, compute_vector_scale, field_statistics, ConeMeshBuilder};
pub use error::ConeMeshError;
pub use field::VectorField;
pub use glyph::GlyphGeometry;
pub use mesh::{ConeMesh, VertexRecord};
