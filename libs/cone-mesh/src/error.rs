//! # Cone Mesh Errors
//!
//! Error types for glyph mesh generation. Every precondition the builder
//! relies on is checked at the boundary and reported here instead of
//! surfacing as an out-of-range read.

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while building a cone glyph mesh.
///
/// ## Example
///
/// ```rust
/// use cone_mesh::{ConeMeshError, VectorField};
/// use glam::DVec3;
///
/// let positions = [DVec3::ZERO, DVec3::X];
/// let vectors = [DVec3::Y];
/// match VectorField::new(&positions, &vectors) {
///     Err(ConeMeshError::MismatchedLength { positions, vectors }) => {
///         assert_eq!((positions, vectors), (2, 1));
///     }
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ConeMeshError {
    /// Positions and vectors are not index-aligned.
    #[error("Mismatched lengths: {positions} positions, {vectors} vectors")]
    MismatchedLength {
        /// Number of sample positions
        positions: usize,
        /// Number of sample vectors
        vectors: usize,
    },

    /// A flat coordinate buffer does not hold whole 3-component entries.
    #[error("Ragged buffer: {name} has {len} values, not a multiple of 3")]
    RaggedBuffer {
        /// Which buffer was ragged
        name: &'static str,
        /// Number of scalar values supplied
        len: usize,
    },

    /// The field would produce more vertex records than ids can address.
    #[error("Too many samples: {count} (max: {max})")]
    TooManySamples {
        /// Number of samples supplied
        count: usize,
        /// Largest accepted sample count
        max: usize,
    },

    /// A mesh failed validation.
    #[error("Invalid mesh: {message}")]
    InvalidMesh {
        /// What was inconsistent
        message: String,
    },

    /// Glyph configuration was rejected.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ConeMeshError {
    /// Creates an invalid mesh error.
    pub fn invalid_mesh(message: impl Into<String>) -> Self {
        Self::InvalidMesh {
            message: message.into(),
        }
    }
}
