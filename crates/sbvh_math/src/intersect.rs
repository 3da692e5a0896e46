//! Ray intersection routines
//!
//! Results use fixed vector encodings so they can be stored next to the
//! geometry they came from:
//! - ray/box: `(t_near, t_far)`, a hit iff `t_near <= t_far`
//! - ray/triangle: `(u, v, t)`, a miss is [`TRIANGLE_MISS`]
//!
//! Every routine rejects a degenerate ray (`tmax < tmin`) up front.

use crate::bounds::AABB;
use crate::config::IntersectConfig;
use crate::mat_fixed::Mat4f;
use crate::ray::Ray;
use crate::scalar::{max, min};
use crate::vec_fixed::{Vec2f, Vec3f, Vec4f};

/// `ray_box` result for an empty overlap
pub const BOX_MISS: Vec2f = Vec2f::new(f32::INFINITY, f32::NEG_INFINITY);

/// Triangle result for no intersection: `t = -1`
///
/// The miss is told apart by the sign of `t` alone, so a ray whose `tmin` is
/// negative can find a triangle behind its origin that [`triangle_hit`] then
/// reports as a miss. Callers that need hits at negative `t` must test the
/// range themselves.
pub const TRIANGLE_MISS: Vec3f = Vec3f::new(0.0, 0.0, -1.0);

/// Whether a `ray_box` result describes a non-empty overlap
#[inline]
pub fn box_hit(t: Vec2f) -> bool {
    t.x <= t.y
}

/// Whether a triangle result is a hit, i.e. has `t >= 0`
#[inline]
pub fn triangle_hit(uvt: Vec3f) -> bool {
    uvt.z >= 0.0
}

/// Ray-AABB overlap using the slab method
///
/// Returns the parametric interval where the ray is inside the box, clipped
/// to the ray's own `[tmin, tmax]`.
pub fn ray_box(aabb: &AABB, ray: &Ray) -> Vec2f {
    if ray.is_degenerate() {
        log::trace!("ray_box: degenerate ray {ray:?}");
        return BOX_MISS;
    }

    let t0 = (aabb.min - ray.origin) / ray.direction;
    let t1 = (aabb.max - ray.origin) / ray.direction;
    let near = max(t0.min(t1).max_component(), ray.tmin);
    let far = min(t0.max(t1).min_component(), ray.tmax);
    Vec2f::new(near, far)
}

/// Ray-triangle intersection (Möller-Trumbore) with the default config
///
/// `u` and `v` are the barycentric weights of `v1` and `v2`.
#[inline]
pub fn ray_triangle(v0: Vec3f, v1: Vec3f, v2: Vec3f, ray: &Ray) -> Vec3f {
    ray_triangle_with(&IntersectConfig::default(), v0, v1, v2, ray)
}

/// Ray-triangle intersection (Möller-Trumbore)
///
/// Only distances strictly inside `(tmin, tmax)` count as hits.
pub fn ray_triangle_with(
    config: &IntersectConfig,
    v0: Vec3f,
    v1: Vec3f,
    v2: Vec3f,
    ray: &Ray,
) -> Vec3f {
    if ray.is_degenerate() {
        log::trace!("ray_triangle: degenerate ray {ray:?}");
        return TRIANGLE_MISS;
    }

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let pvec = ray.direction.cross(edge2);
    let det = edge1.dot(pvec);

    let eps = config.triangle_epsilon;
    if det.abs() < eps || (config.cull_backface && det < eps) {
        return TRIANGLE_MISS;
    }
    let inv_det = 1.0 / det;

    let tvec = ray.origin - v0;
    let u = tvec.dot(pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return TRIANGLE_MISS;
    }

    let qvec = tvec.cross(edge1);
    let v = ray.direction.dot(qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return TRIANGLE_MISS;
    }

    let t = edge2.dot(qvec) * inv_det;
    if t > ray.tmin && t < ray.tmax {
        Vec3f::new(u, v, t)
    } else {
        TRIANGLE_MISS
    }
}

/// Ray-triangle intersection against precomputed plane equations
///
/// The planes come from [`woop_planes`]: `zpleq` is the triangle plane in
/// unit-triangle space, `upleq`/`vpleq` give the barycentric weights of
/// `v0` and `v1`.
pub fn ray_triangle_woop(zpleq: Vec4f, upleq: Vec4f, vpleq: Vec4f, ray: &Ray) -> Vec3f {
    if ray.is_degenerate() {
        log::trace!("ray_triangle_woop: degenerate ray {ray:?}");
        return TRIANGLE_MISS;
    }

    let orig = Vec4f::from_xyz(ray.origin, 1.0);
    let dir = Vec4f::from_xyz(ray.direction, 0.0);

    // Parallel rays give an infinite or NaN `t`, which fails the range test.
    let t = -zpleq.dot(orig) / zpleq.dot(dir);
    if !(t > ray.tmin && t < ray.tmax) {
        return TRIANGLE_MISS;
    }

    let u = upleq.dot(orig) + t * upleq.dot(dir);
    if u < 0.0 {
        return TRIANGLE_MISS;
    }
    let v = vpleq.dot(orig) + t * vpleq.dot(dir);
    if v < 0.0 || u + v > 1.0 {
        return TRIANGLE_MISS;
    }
    Vec3f::new(u, v, t)
}

/// Plane equations `[zpleq, upleq, vpleq]` for [`ray_triangle_woop`]
///
/// Rows of the inverse of the affine map taking the unit triangle onto
/// `(v0, v1, v2)`. A degenerate triangle yields zero planes, which never hit.
pub fn woop_planes(v0: Vec3f, v1: Vec3f, v2: Vec3f) -> [Vec4f; 3] {
    let e0 = v0 - v2;
    let e1 = v1 - v2;
    let to_world = Mat4f::from_cols([
        Vec4f::from_xyz(e0, 0.0),
        Vec4f::from_xyz(e1, 0.0),
        Vec4f::from_xyz(e0.cross(e1), 0.0),
        Vec4f::from_xyz(v2, 1.0),
    ]);
    let to_local = to_world.inverted();
    [to_local.row(2), to_local.row(0), to_local.row(1)]
}
