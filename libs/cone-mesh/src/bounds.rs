//! # Bounds
//!
//! Axis-aligned bounding box of the sample positions.

use glam::DVec3;
use serde::Serialize;

/// Axis-aligned bounding box.
///
/// The empty box is `[+inf; 3] / [-inf; 3]`, so including any point
/// collapses it onto that point. An empty field keeps this value.
///
/// # Example
///
/// ```rust
/// use cone_mesh::Bounds;
/// use glam::DVec3;
///
/// let bounds = Bounds::from_points([DVec3::ZERO, DVec3::new(1.0, 2.0, 2.0)]);
/// assert_eq!(bounds.extent(), DVec3::new(1.0, 2.0, 2.0));
/// assert_eq!(bounds.diagonal_length(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    /// Component-wise minimum corner
    pub min: DVec3,
    /// Component-wise maximum corner
    pub max: DVec3,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Bounds {
    /// Bounds containing no points.
    pub const EMPTY: Self = Self {
        min: DVec3::INFINITY,
        max: DVec3::NEG_INFINITY,
    };

    /// Creates bounds from explicit corners.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Computes the bounds of a set of points.
    pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Self {
        let mut bounds = Self::EMPTY;
        for p in points {
            bounds.include(p);
        }
        bounds
    }

    /// Grows the bounds to contain `point`.
    #[inline]
    pub fn include(&mut self, point: DVec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Returns `max - min`. Non-finite for empty bounds.
    #[inline]
    pub fn extent(&self) -> DVec3 {
        self.max - self.min
    }

    /// Euclidean length of the extent vector.
    #[inline]
    pub fn diagonal_length(&self) -> f64 {
        self.extent().length()
    }

    /// Returns true if no point has been included.
    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    /// Returns true if `point` lies inside or on the boundary.
    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Returns `[min, max]`, the layout of the bounds out-slot.
    #[inline]
    pub fn as_pair(&self) -> [DVec3; 2] {
        [self.min, self.max]
    }
}
