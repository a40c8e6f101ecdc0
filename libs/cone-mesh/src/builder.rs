//! # Cone Mesh Builder
//!
//! Turns a vector field into a glyph mesh in two passes: one over the
//! samples for bounds and peak magnitude, one emitting the glyphs.

use crate::bounds::Bounds;
use crate::error::ConeMeshError;
use crate::field::VectorField;
use crate::glyph::{GlyphGeometry, Sample};
use crate::mesh::{ConeMesh, VertexIdCounter};
use config::constants::GlyphConfig;
use glam::DVec3;
use log::{debug, warn};

/// Builds cone glyph meshes from vector fields.
///
/// The builder only holds settings; every call allocates a fresh mesh, so
/// one builder can be shared across threads.
///
/// # Example
///
/// ```rust
/// use cone_mesh::{ConeMeshBuilder, VectorField};
/// use glam::DVec3;
///
/// let positions = [DVec3::ZERO, DVec3::X];
/// let vectors = [DVec3::X, DVec3::ZERO];
/// let field = VectorField::new(&positions, &vectors).unwrap();
///
/// let mut bounds = [DVec3::ZERO; 2];
/// let mesh = ConeMeshBuilder::new().build(&field, Some(&mut bounds)).unwrap();
/// assert_eq!(mesh.vertex_count(), 96);
/// assert_eq!(mesh.triangle_count(), 32);
/// assert_eq!(mesh.vector_scale(), 1.0);
/// assert_eq!(bounds, [DVec3::ZERO, DVec3::X]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConeMeshBuilder {
    geometry: GlyphGeometry,
    config: GlyphConfig,
}

impl ConeMeshBuilder {
    /// Creates a builder emitting placeholder glyphs with the default layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the glyph geometry.
    pub fn with_geometry(mut self, geometry: GlyphGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Replaces the glyph configuration.
    pub fn with_config(mut self, config: GlyphConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the selected glyph geometry.
    pub fn geometry(&self) -> GlyphGeometry {
        self.geometry
    }

    /// Returns the glyph configuration.
    pub fn config(&self) -> &GlyphConfig {
        &self.config
    }

    /// Builds the glyph mesh and optionally writes the position bounds.
    ///
    /// When `bounds_out` is given it receives `[min, max]` of the sample
    /// positions; for an empty field that is `[+inf; 3], [-inf; 3]`.
    ///
    /// # Errors
    ///
    /// - [`ConeMeshError::Config`] if the configuration is invalid
    /// - [`ConeMeshError::TooManySamples`] if vertex ids would overflow `u32`
    pub fn build(
        &self,
        field: &VectorField<'_>,
        bounds_out: Option<&mut [DVec3; 2]>,
    ) -> Result<ConeMesh, ConeMeshError> {
        let (mesh, bounds) = self.build_with_bounds(field)?;
        if let Some(slot) = bounds_out {
            *slot = bounds.as_pair();
        }
        Ok(mesh)
    }

    /// Builds the glyph mesh and returns it together with the position bounds.
    ///
    /// # Errors
    ///
    /// Same as [`ConeMeshBuilder::build`].
    pub fn build_with_bounds(&self, field: &VectorField<'_>) -> Result<(ConeMesh, Bounds), ConeMeshError> {
        let config = GlyphConfig::new(
            self.config.segments,
            self.config.length_factor,
            self.config.radius_factor,
        )?;

        let max_samples = config.max_samples();
        if field.len() > max_samples {
            return Err(ConeMeshError::TooManySamples {
                count: field.len(),
                max: max_samples,
            });
        }

        let (bounds, max_magnitude) = field_statistics(field);
        let vector_scale = compute_vector_scale(&bounds, max_magnitude);

        debug!(
            "Building {:?} glyphs for {} samples (max magnitude {}, vector scale {})",
            self.geometry,
            field.len(),
            max_magnitude,
            vector_scale
        );
        if !vector_scale.is_finite() {
            warn!(
                "Vector scale is {} for {} samples; glyph intensities are not finite",
                vector_scale,
                field.len()
            );
        }

        let mut mesh = ConeMesh::with_capacity(
            field.len() * config.records_per_sample(),
            field.len() * config.triangles_per_sample(),
            vector_scale,
        );
        let mut ids = VertexIdCounter::default();

        for (position, vector) in field.iter() {
            let sample = Sample {
                position,
                vector,
                intensity: vector.length() * vector_scale,
                vector_scale,
            };
            self.geometry.emit(&mut mesh, &mut ids, &config, sample);
        }

        debug!(
            "Cone mesh built: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        Ok((mesh, bounds))
    }
}

/// Builds a placeholder glyph mesh with the default layout.
///
/// Shorthand for `ConeMeshBuilder::new().build(field, bounds_out)`.
pub fn build_cone_mesh(
    field: &VectorField<'_>,
    bounds_out: Option<&mut [DVec3; 2]>,
) -> Result<ConeMesh, ConeMeshError> {
    ConeMeshBuilder::new().build(field, bounds_out)
}

/// Single pass over the field: position bounds and the largest vector norm.
///
/// # Example
///
/// ```rust
/// use cone_mesh::{field_statistics, VectorField};
/// use glam::DVec3;
///
/// let positions = [DVec3::new(1.0, 2.0, 3.0)];
/// let vectors = [DVec3::new(0.0, 3.0, 4.0)];
/// let field = VectorField::new(&positions, &vectors).unwrap();
/// let (bounds, max_magnitude) = field_statistics(&field);
/// assert_eq!(bounds.min, positions[0]);
/// assert_eq!(max_magnitude, 5.0);
/// ```
pub fn field_statistics(field: &VectorField<'_>) -> (Bounds, f64) {
    let mut bounds = Bounds::EMPTY;
    let mut max_magnitude = 0.0_f64;
    for (position, vector) in field.iter() {
        bounds.include(position);
        let magnitude = vector.length();
        if magnitude > max_magnitude {
            max_magnitude = magnitude;
        }
    }
    (bounds, max_magnitude)
}

/// Global glyph scale: `1 / (max_magnitude * |max - min|)`.
///
/// IEEE-754 results propagate unchanged: a zero magnitude or a zero
/// extent gives `+inf`, and empty bounds (`0 * inf`) give `NaN`.
///
/// # Example
///
/// ```rust
/// use cone_mesh::{compute_vector_scale, Bounds};
/// use glam::DVec3;
///
/// let bounds = Bounds::new(DVec3::ZERO, DVec3::new(3.0, 4.0, 0.0));
/// assert_eq!(compute_vector_scale(&bounds, 2.0), 0.1);
/// assert!(compute_vector_scale(&Bounds::EMPTY, 0.0).is_nan());
/// ```
pub fn compute_vector_scale(bounds: &Bounds, max_magnitude: f64) -> f64 {
    1.0 / (max_magnitude * bounds.diagonal_length())
}
