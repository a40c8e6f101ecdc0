//! Cone fan glyph.
//!
//! The tip sits at the sample position. The base ring is centered at
//! `position - axis`, where `axis = vector * vector_scale * length_factor`,
//! with radius `|axis| * radius_factor`. Each segment emits a side
//! triangle `[ring_k, ring_(k-1), tip]` and a back triangle
//! `[base, ring_(k-1), ring_k]`, both wound outward.

use super::Sample;
use crate::mesh::{ConeMesh, VertexIdCounter};
use config::constants::{segment_angle, GlyphConfig, EPSILON};
use glam::DVec3;

pub(super) fn emit(mesh: &mut ConeMesh, ids: &mut VertexIdCounter, config: &GlyphConfig, sample: Sample) {
    let tip = sample.position;
    let axis = sample.vector * sample.vector_scale * config.length_factor;
    let base = tip - axis;
    let radius = axis.length() * config.radius_factor;
    let (u, v) = ring_basis(axis);
    let back_normal = -axis.normalize_or_zero();

    let ring = |k: u32| -> (DVec3, DVec3) {
        let (sin, cos) = segment_angle(k, config.segments).sin_cos();
        let point = base + u * (cos * radius) + v * (sin * radius);
        // Points against the direction of increasing angle
        let tangent = u * sin - v * cos;
        let normal = (point - tip).cross(tangent).normalize_or_zero();
        (point, normal)
    };

    let (mut prev_point, mut prev_normal) = ring(0);
    for k in 1..=config.segments {
        let (point, normal) = ring(k);
        mesh.push_segment(
            ids,
            [point, prev_point, tip, base, prev_point, point],
            [normal, prev_normal, normal, back_normal, back_normal, back_normal],
            sample.vector,
            sample.intensity,
        );
        prev_point = point;
        prev_normal = normal;
    }
}

/// Two unit vectors orthogonal to `axis` and to each other.
///
/// Built from `Y x axis`; falls back to `X x axis` when the axis is
/// vertical. A zero axis yields zero vectors and a collapsed ring.
fn ring_basis(axis: DVec3) -> (DVec3, DVec3) {
    let mut u = DVec3::Y.cross(axis);
    if u.length_squared() <= EPSILON * axis.length_squared() {
        u = DVec3::X.cross(axis);
    }
    let u = u.normalize_or_zero();
    let v = u.cross(axis).normalize_or_zero();
    (u, v)
}
