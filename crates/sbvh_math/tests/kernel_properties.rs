//! Property tests for the vector/matrix kernel across dimensions

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sbvh_math::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_vector<const L: usize>(rng: &mut StdRng) -> Vector<f64, L> {
    Vector::from_array(core::array::from_fn(|_| rng.gen_range(-10.0..10.0)))
}

fn random_matrix<const L: usize>(rng: &mut StdRng) -> Matrix<f64, L> {
    Matrix::from_cols(core::array::from_fn(|_| random_vector(rng)))
}

/// Off-diagonal entries in `[-1, 1]`, diagonal pushed out to `L + 1`
fn well_conditioned<const L: usize>(rng: &mut StdRng) -> Matrix<f64, L> {
    let mut m = Matrix::<f64, L>::zero();
    for c in 0..L {
        for r in 0..L {
            let a: f64 = rng.gen_range(-1.0..1.0);
            m.set(r, c, if r == c { a.signum() * (L as f64 + 1.0) + a } else { a });
        }
    }
    m
}

fn check_det_paths<const L: usize>(rng: &mut StdRng) {
    for _ in 0..200 {
        let m = random_matrix::<L>(rng);
        assert_eq!(m.det().to_bits(), m.det_laplace().to_bits(), "{L}x{L}:\n{m}");

        let f = m.to_f32();
        assert_eq!(f.det().to_bits(), f.det_laplace().to_bits(), "{L}x{L}:\n{f}");
    }
}

#[test]
fn det_closed_forms_match_recursion() {
    let mut rng = StdRng::seed_from_u64(0x5b_7a);
    check_det_paths::<1>(&mut rng);
    check_det_paths::<2>(&mut rng);
    check_det_paths::<3>(&mut rng);
    check_det_paths::<4>(&mut rng);
}

#[test]
fn det_closed_forms_match_recursion_integers() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let m = Matrix::<i32, 3>::from_cols(core::array::from_fn(|_| {
            Vector::from_array(core::array::from_fn(|_| rng.gen_range(-9..=9)))
        }));
        assert_eq!(m.det(), m.det_laplace());
        assert_eq!(m.det(), m.transposed().det());
    }
}

fn check_inverse<const L: usize>(rng: &mut StdRng) {
    for _ in 0..100 {
        let m = well_conditioned::<L>(rng);
        let inv = m.inverted();
        assert_abs_diff_eq!(m * inv, Matrix::identity(), epsilon = 1e-9);
        assert_abs_diff_eq!(inv * m, Matrix::identity(), epsilon = 1e-9);
        assert_abs_diff_eq!(inv.inverted(), m, epsilon = 1e-9);
    }
}

#[test]
fn inverse_round_trips() {
    let mut rng = StdRng::seed_from_u64(42);
    check_inverse::<1>(&mut rng);
    check_inverse::<2>(&mut rng);
    check_inverse::<3>(&mut rng);
    check_inverse::<4>(&mut rng);
}

#[test]
fn singular_inverse_is_zero() {
    init_logging();
    let mut m = Mat4d::identity();
    m.set_col(3, *m.col(0));
    assert_eq!(m.det(), 0.0);
    assert_eq!(m.inverted(), Mat4d::zero());
}

#[test]
fn vector_addition_laws() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        // Integer-valued components keep every sum exact.
        let [a, b, c]: [Vec4d; 3] =
            core::array::from_fn(|_| random_vector::<4>(&mut rng).map(f64::floor));
        assert_eq!(a + b, b + a);
        assert_eq!((a + b) + c, a + (b + c));
        assert!((a - a).is_zero());
    }
}

#[test]
fn length_identities() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..100 {
        let v = random_vector::<3>(&mut rng);
        assert_eq!(v.dot(v), v.len_sqr());
        assert_eq!(v.length(), v.len_sqr().sqrt());

        let len: f64 = rng.gen_range(0.1..100.0);
        assert_abs_diff_eq!(v.normalized_to(len).length(), len, epsilon = 1e-9 * len);
    }
}

#[test]
fn homogeneous_round_trip_all_dimensions() {
    let mut rng = StdRng::seed_from_u64(9);
    let v1 = random_vector::<1>(&mut rng);
    let v2 = random_vector::<2>(&mut rng);
    let v3 = random_vector::<3>(&mut rng);
    let v4 = random_vector::<4>(&mut rng);
    assert_eq!(v1.to_homogeneous().to_cartesian(), v1);
    assert_eq!(v2.to_homogeneous().to_cartesian(), v2);
    assert_eq!(v3.to_homogeneous().to_cartesian(), v3);
    assert_eq!(v4.to_homogeneous().to_cartesian(), v4);
}

#[test]
fn point_transform_composes() {
    let mut rng = StdRng::seed_from_u64(17);
    let a = Mat4d::translate(random_vector(&mut rng));
    let b = Mat4d::scale(Vec3d::new(2.0, 0.5, 4.0));
    let p = random_vector::<3>(&mut rng);
    assert_abs_diff_eq!((a * b) * p, a * (b * p), epsilon = 1e-12);
    assert_abs_diff_eq!((a / a) * p, p, epsilon = 1e-12);
}

#[test]
fn named_matrix_properties() {
    assert_eq!(Mat2f::identity().inverted(), Mat2f::identity());
    let r = Mat3f::rotation(Vec3f::new(0.0, 0.0, 1.0), core::f32::consts::FRAC_PI_2);
    assert_abs_diff_eq!(r * Vec3f::new(1.0, 0.0, 0.0), Vec3f::new(0.0, 1.0, 0.0), epsilon = 1e-6);
    assert_eq!(
        Vec3f::new(1.0, 0.0, 0.0).cross(Vec3f::new(0.0, 1.0, 0.0)),
        Vec3f::new(0.0, 0.0, 1.0)
    );
}

#[test]
fn aabb_from_random_points_contains_them() {
    let mut rng = StdRng::seed_from_u64(23);
    let points: Vec<Vec3f> = (0..32)
        .map(|_| Vec3f::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)))
        .collect();
    let bounds = points
        .iter()
        .fold(AABB::default(), |acc, &p| acc + AABB::new(p, p));
    assert!(bounds.valid());
    assert_eq!(bounds, AABB::from_points(&points));
    for &p in &points {
        assert_eq!(p.clamp(bounds.min, bounds.max), p);
    }
}

#[test]
fn degenerate_ray_misses_at_any_range() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(31);
    let mut starts = vec![0.0, f32::INFINITY, f32::NEG_INFINITY, f32::NAN, f32::MAX, -f32::MAX];
    for _ in 0..200 {
        let magnitude = 10f32.powi(rng.gen_range(0..=30));
        starts.push(rng.gen_range(-1.0..1.0) * magnitude);
    }

    let dir = Vec3f::new(0.0, 0.0, 1.0);
    let (v0, v1, v2) = (Vec3f::new(-1.0, -1.0, 0.0), Vec3f::new(1.0, -1.0, 0.0), Vec3f::new(0.0, 1.0, 0.0));
    let [zp, up, vp] = woop_planes(v0, v1, v2);

    for tmin in starts {
        // Geometry straddles the start of the interval so a live ray would hit it.
        let z = if tmin.is_finite() { tmin } else { 0.0 };
        let slab = AABB::new(Vec3f::new(-1.0, -1.0, z - 1.0), Vec3f::new(1.0, 1.0, z + 1.0));
        let offset = Vec3f::new(0.0, 0.0, z);

        let mut ray = Ray::new(Vec3f::zero(), dir).with_range(tmin, f32::INFINITY);
        ray.degenerate();
        assert!(ray.is_degenerate(), "tmin {tmin}: [{}, {}]", ray.tmin, ray.tmax);
        assert!(!box_hit(ray_box(&slab, &ray)), "tmin {tmin}");
        assert!(!triangle_hit(ray_triangle(v0 + offset, v1 + offset, v2 + offset, &ray)), "tmin {tmin}");
        assert!(!triangle_hit(ray_triangle_woop(zp, up, vp, &ray)), "tmin {tmin}");
    }
}

#[cfg(feature = "serde")]
mod serde_round_trip {
    use super::*;

    #[test]
    fn kernel_types() {
        let m = Mat3d::rotation(Vec3d::new(0.0, 1.0, 0.0), 0.3);
        let bytes = bincode::serialize(&m).unwrap();
        assert_eq!(bincode::deserialize::<Mat3d>(&bytes).unwrap(), m);

        let v = Vec4i::new(1, -2, 3, -4);
        let bytes = bincode::serialize(&v).unwrap();
        assert_eq!(bytes.len(), 16);
        assert_eq!(bincode::deserialize::<Vec4i>(&bytes).unwrap(), v);
    }

    #[test]
    fn primitives() {
        let ray = Ray::new(Vec3f::new(1.0, 2.0, 3.0), Vec3f::new(0.0, 0.0, -1.0)).with_range(0.5, 9.0);
        let bytes = bincode::serialize(&ray).unwrap();
        assert_eq!(bincode::deserialize::<Ray>(&bytes).unwrap(), ray);

        let aabb = AABB::new(Vec3f::zero(), Vec3f::splat(2.0));
        let bytes = bincode::serialize(&aabb).unwrap();
        assert_eq!(bincode::deserialize::<AABB>(&bytes).unwrap(), aabb);

        let hit = RayResult::new(3, 1.5);
        let bytes = bincode::serialize(&hit).unwrap();
        assert_eq!(bincode::deserialize::<RayResult>(&bytes).unwrap(), hit);
    }
}
