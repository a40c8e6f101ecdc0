//! # Vector Field
//!
//! Parallel, index-aligned sequences of sample positions and sample vectors.

use crate::error::ConeMeshError;
use glam::DVec3;
use std::borrow::Cow;

/// A sampled 3D vector field.
///
/// Positions and vectors are stored as parallel sequences of equal length.
/// The field borrows caller-owned slices where possible; [`VectorField::from_flat`]
/// owns the data it decodes.
///
/// # Example
///
/// ```rust
/// use cone_mesh::VectorField;
/// use glam::DVec3;
///
/// let positions = [DVec3::ZERO, DVec3::X];
/// let vectors = [DVec3::X, DVec3::ZERO];
/// let field = VectorField::new(&positions, &vectors).unwrap();
/// assert_eq!(field.len(), 2);
/// assert_eq!(field.max_magnitude(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VectorField<'a> {
    positions: Cow<'a, [DVec3]>,
    vectors: Cow<'a, [DVec3]>,
}

impl<'a> VectorField<'a> {
    /// Creates a field from borrowed positions and vectors.
    ///
    /// # Errors
    ///
    /// Returns [`ConeMeshError::MismatchedLength`] when the sequences differ
    /// in length.
    pub fn new(positions: &'a [DVec3], vectors: &'a [DVec3]) -> Result<Self, ConeMeshError> {
        check_lengths(positions.len(), vectors.len())?;
        Ok(Self {
            positions: Cow::Borrowed(positions),
            vectors: Cow::Borrowed(vectors),
        })
    }

    /// Returns the sample positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the sample vectors.
    #[inline]
    pub fn vectors(&self) -> &[DVec3] {
        &self.vectors
    }

    /// Returns the number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the field has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterates `(position, vector)` pairs in sample order.
    pub fn iter(&self) -> impl Iterator<Item = (DVec3, DVec3)> + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.vectors.iter().copied())
    }

    /// Largest Euclidean norm over all sample vectors, 0 for an empty field.
    pub fn max_magnitude(&self) -> f64 {
        self.vectors
            .iter()
            .map(|v| v.length())
            .fold(0.0, |max, len| if len > max { len } else { max })
    }
}

impl VectorField<'static> {
    /// Decodes a field from flat `[x, y, z, x, y, z, ...]` buffers.
    ///
    /// # Errors
    ///
    /// Returns [`ConeMeshError::RaggedBuffer`] when a buffer length is not a
    /// multiple of 3, and [`ConeMeshError::MismatchedLength`] when the
    /// decoded sequences differ in length.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cone_mesh::VectorField;
    /// use glam::DVec3;
    ///
    /// let field = VectorField::from_flat(&[1.0, 2.0, 3.0], &[0.0, 1.0, 0.0]).unwrap();
    /// assert_eq!(field.positions(), &[DVec3::new(1.0, 2.0, 3.0)]);
    /// assert!(VectorField::from_flat(&[1.0, 2.0], &[0.0, 1.0, 0.0]).is_err());
    /// ```
    pub fn from_flat(positions: &[f64], vectors: &[f64]) -> Result<Self, ConeMeshError> {
        let positions = decode_flat("positions", positions)?;
        let vectors = decode_flat("vectors", vectors)?;
        check_lengths(positions.len(), vectors.len())?;
        Ok(Self {
            positions: Cow::Owned(positions),
            vectors: Cow::Owned(vectors),
        })
    }
}

fn check_lengths(positions: usize, vectors: usize) -> Result<(), ConeMeshError> {
    if positions != vectors {
        return Err(ConeMeshError::MismatchedLength { positions, vectors });
    }
    Ok(())
}

fn decode_flat(name: &'static str, values: &[f64]) -> Result<Vec<DVec3>, ConeMeshError> {
    if values.len() % 3 != 0 {
        return Err(ConeMeshError::RaggedBuffer {
            name,
            len: values.len(),
        });
    }
    Ok(values
        .chunks_exact(3)
        .map(|c| DVec3::new(c[0], c[1], c[2]))
        .collect())
}
