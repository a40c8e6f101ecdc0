//! # Configuration Constants
//!
//! Centralized constants for cone glyph construction. Vertex layout,
//! cone proportions, and precision values are defined here.
//!
//! ## Categories
//!
//! - **Layout**: Records and triangles emitted per segment and per sample
//! - **Proportions**: Cone length and base radius relative to the scaled vector
//! - **Precision**: Floating-point comparison tolerances
//! - **Limits**: Maximum values that keep vertex ids representable

use std::fmt;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Number of segments in a cone glyph's base ring.
///
/// Each segment contributes one side triangle and one back-face triangle.
///
/// # Example
///
/// ```rust
/// use config::constants::CONE_SEGMENTS;
///
/// assert_eq!(CONE_SEGMENTS, 8);
/// ```
pub const CONE_SEGMENTS: u32 = 8;

/// Vertex records appended per segment (two unwelded triangles).
pub const RECORDS_PER_SEGMENT: usize = 6;

/// Triangles appended per segment.
pub const TRIANGLES_PER_SEGMENT: usize = 2;

/// Vertex records emitted for every sample of the vector field.
///
/// # Example
///
/// ```rust
/// use config::constants::{RECORDS_PER_SAMPLE, CONE_SEGMENTS, RECORDS_PER_SEGMENT};
///
/// assert_eq!(RECORDS_PER_SAMPLE, CONE_SEGMENTS as usize * RECORDS_PER_SEGMENT);
/// assert_eq!(RECORDS_PER_SAMPLE, 48);
/// ```
pub const RECORDS_PER_SAMPLE: usize = CONE_SEGMENTS as usize * RECORDS_PER_SEGMENT;

/// Triangles emitted for every sample of the vector field.
pub const TRIANGLES_PER_SAMPLE: usize = CONE_SEGMENTS as usize * TRIANGLES_PER_SEGMENT;

/// Normal assigned to every vertex of the placeholder glyph.
pub const PLACEHOLDER_NORMAL: [f64; 3] = [0.0, 1.0, 0.0];

// =============================================================================
// PROPORTION CONSTANTS
// =============================================================================

/// Cone length relative to the scaled sample vector.
///
/// At 2.0 the largest vector in the field produces a cone whose base
/// reaches back to the neighbouring sample.
///
/// # Example
///
/// ```rust
/// use config::constants::CONE_LENGTH_FACTOR;
///
/// let scaled_length = 0.5;
/// assert_eq!(scaled_length * CONE_LENGTH_FACTOR, 1.0);
/// ```
pub const CONE_LENGTH_FACTOR: f64 = 2.0;

/// Base ring radius relative to the cone length.
pub const CONE_RADIUS_FACTOR: f64 = 0.25;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of segments in a glyph's base ring.
///
/// Bounds the per-sample record count so a single sample cannot request an
/// unbounded allocation.
///
/// # Example
///
/// ```rust
/// use config::constants::{GlyphConfig, MAX_SEGMENTS};
///
/// assert!(GlyphConfig::new(MAX_SEGMENTS, 2.0, 0.25).is_ok());
/// assert!(GlyphConfig::new(MAX_SEGMENTS + 1, 2.0, 0.25).is_err());
/// ```
pub const MAX_SEGMENTS: u32 = 1024;

/// Maximum number of vertex records in a single glyph mesh.
///
/// Vertex ids and cell indices are stored as `u32`, so the record count
/// must stay representable.
pub const MAX_VERTICES: usize = u32::MAX as usize;

/// Maximum number of samples accepted with the default glyph layout.
///
/// # Example
///
/// ```rust
/// use config::constants::{MAX_SAMPLES, MAX_VERTICES, RECORDS_PER_SAMPLE};
///
/// assert!(MAX_SAMPLES * RECORDS_PER_SAMPLE <= MAX_VERTICES);
/// ```
pub const MAX_SAMPLES: usize = MAX_VERTICES / RECORDS_PER_SAMPLE;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Number of vertex records produced for `samples` samples with the
/// default layout. Saturates instead of overflowing.
///
/// # Example
///
/// ```rust
/// use config::constants::records_for_samples;
///
/// assert_eq!(records_for_samples(2), 96);
/// assert_eq!(records_for_samples(usize::MAX), usize::MAX);
/// ```
#[inline]
pub fn records_for_samples(samples: usize) -> usize {
    samples.saturating_mul(RECORDS_PER_SAMPLE)
}

/// Number of triangles produced for `samples` samples with the default
/// layout. Saturates instead of overflowing.
///
/// # Example
///
/// ```rust
/// use config::constants::triangles_for_samples;
///
/// assert_eq!(triangles_for_samples(2), 32);
/// ```
#[inline]
pub fn triangles_for_samples(samples: usize) -> usize {
    samples.saturating_mul(TRIANGLES_PER_SAMPLE)
}

/// Angle in radians of ring point `k` on a ring of `segments` points.
///
/// `k == segments` wraps back to a full turn, which closes the fan.
///
/// # Example
///
/// ```rust
/// use config::constants::segment_angle;
/// use std::f64::consts::PI;
///
/// assert_eq!(segment_angle(0, 8), 0.0);
/// assert!((segment_angle(4, 8) - PI).abs() < 1e-12);
/// ```
#[inline]
pub fn segment_angle(k: u32, segments: u32) -> f64 {
    k as f64 / segments as f64 * std::f64::consts::PI * 2.0
}

// =============================================================================
// GLYPH CONFIGURATION
// =============================================================================

/// Validated snapshot of glyph construction parameters.
///
/// # Examples
/// ```
/// use config::constants::{GlyphConfig, CONE_SEGMENTS};
/// let config = GlyphConfig::default();
/// assert_eq!(config.segments, CONE_SEGMENTS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphConfig {
    /// Segments in the base ring; each contributes two triangles.
    pub segments: u32,
    /// Cone length relative to the scaled sample vector.
    pub length_factor: f64,
    /// Base radius relative to the cone length.
    pub radius_factor: f64,
}

impl GlyphConfig {
    /// Builds a configuration, rejecting rings that cannot close or exceed
    /// [`MAX_SEGMENTS`] and proportions that are not finite and positive.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlyphConfig;
    /// let cfg = GlyphConfig::new(12, 2.0, 0.25).expect("valid config");
    /// assert_eq!(cfg.segments, 12);
    /// assert!(GlyphConfig::new(2, 2.0, 0.25).is_err());
    /// ```
    pub fn new(segments: u32, length_factor: f64, radius_factor: f64) -> Result<Self, ConfigError> {
        if !(3..=MAX_SEGMENTS).contains(&segments) {
            return Err(ConfigError::InvalidSegments(segments));
        }
        if !length_factor.is_finite() || length_factor <= 0.0 {
            return Err(ConfigError::InvalidLengthFactor(length_factor));
        }
        if !radius_factor.is_finite() || radius_factor <= 0.0 {
            return Err(ConfigError::InvalidRadiusFactor(radius_factor));
        }
        Ok(Self {
            segments,
            length_factor,
            radius_factor,
        })
    }

    /// Vertex records emitted per sample with this configuration.
    /// Saturates at `usize::MAX` for segment counts that bypassed [`Self::new`].
    #[inline]
    pub fn records_per_sample(&self) -> usize {
        (self.segments as usize)
            .checked_mul(RECORDS_PER_SEGMENT)
            .unwrap_or(usize::MAX)
    }

    /// Triangles emitted per sample with this configuration.
    #[inline]
    pub fn triangles_per_sample(&self) -> usize {
        (self.segments as usize)
            .checked_mul(TRIANGLES_PER_SEGMENT)
            .unwrap_or(usize::MAX)
    }

    /// Largest sample count whose records still fit [`MAX_VERTICES`].
    #[inline]
    pub fn max_samples(&self) -> usize {
        MAX_VERTICES
            .checked_div(self.records_per_sample())
            .unwrap_or(0)
    }
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            segments: CONE_SEGMENTS,
            length_factor: CONE_LENGTH_FACTOR,
            radius_factor: CONE_RADIUS_FACTOR,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the ring has fewer than three or more than
    /// [`MAX_SEGMENTS`] segments.
    InvalidSegments(u32),
    /// Raised when the length factor is zero, negative or not finite.
    InvalidLengthFactor(f64),
    /// Raised when the radius factor is zero, negative or not finite.
    InvalidRadiusFactor(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSegments(value) => {
                write!(f, "segments must be in 3..={MAX_SEGMENTS}: {value}")
            }
            ConfigError::InvalidLengthFactor(value) => {
                write!(f, "length_factor must be finite and positive: {value}")
            }
            ConfigError::InvalidRadiusFactor(value) => {
                write!(f, "radius_factor must be finite and positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
