//! Named 2x2/3x3/4x4 matrices and transform factories
//!
//! Entry `mRC` is row `R`, column `C`. The entry structs list fields in
//! storage order (column-major), so `m10` comes right after `m00`.

use core::ops::{Deref, DerefMut};

use bytemuck::{Pod, Zeroable};

use crate::matrix::Matrix;
use crate::scalar::{rcp, Float, Scalar};
use crate::vector::Vector;

pub type Mat2f = Matrix<f32, 2>;
pub type Mat3f = Matrix<f32, 3>;
pub type Mat4f = Matrix<f32, 4>;
pub type Mat2d = Matrix<f64, 2>;
pub type Mat3d = Matrix<f64, 3>;
pub type Mat4d = Matrix<f64, 4>;

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Mat2Entries<T> {
    pub m00: T, pub m10: T,
    pub m01: T, pub m11: T,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Mat3Entries<T> {
    pub m00: T, pub m10: T, pub m20: T,
    pub m01: T, pub m11: T, pub m21: T,
    pub m02: T, pub m12: T, pub m22: T,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Mat4Entries<T> {
    pub m00: T, pub m10: T, pub m20: T, pub m30: T,
    pub m01: T, pub m11: T, pub m21: T, pub m31: T,
    pub m02: T, pub m12: T, pub m22: T, pub m32: T,
    pub m03: T, pub m13: T, pub m23: T, pub m33: T,
}

macro_rules! impl_entries_view {
    ($($n:literal => $view:ident),*) => {$(
        // SAFETY: `repr(C)` with `$n * $n` fields of one type, matching
        // `[[T; $n]; $n]` in size and alignment with no padding.
        unsafe impl<T: Zeroable> Zeroable for $view<T> {}
        // SAFETY: see above.
        unsafe impl<T: Pod> Pod for $view<T> {}

        impl<T: Pod> Deref for Matrix<T, $n> {
            type Target = $view<T>;

            #[inline]
            fn deref(&self) -> &$view<T> {
                bytemuck::cast_ref(&self.0)
            }
        }

        impl<T: Pod> DerefMut for Matrix<T, $n> {
            #[inline]
            fn deref_mut(&mut self) -> &mut $view<T> {
                bytemuck::cast_mut(&mut self.0)
            }
        }
    )*};
}

impl_entries_view!(2 => Mat2Entries, 3 => Mat3Entries, 4 => Mat4Entries);

macro_rules! impl_affine_factories {
    ($($l:literal => $n:literal),*) => {$(
        impl<T: Scalar> Matrix<T, $l> {
            /// Homogeneous translation by `v`
            pub fn translate(v: Vector<T, $n>) -> Self {
                let mut m = Self::identity();
                m.0[$n][..$n].copy_from_slice(v.as_slice());
                m
            }

            /// Homogeneous scale by `v`; the last diagonal entry stays 1
            pub fn scale(v: Vector<T, $n>) -> Self {
                let mut m = Self::identity();
                for (i, &a) in v.as_slice().iter().enumerate() {
                    m.0[i][i] = a;
                }
                m
            }
        }
    )*};
}

impl_affine_factories!(2 => 1, 3 => 2, 4 => 3);

impl<T: Float> Matrix<T, 3> {
    /// Right-handed rotation by `angle` radians about `axis`.
    ///
    /// `axis` must already be unit length; it is not normalized here.
    pub fn rotation(axis: Vector<T, 3>, angle: T) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        let t = T::ONE - c;
        let (x, y, z) = (axis.x, axis.y, axis.z);
        Self::from_cols([
            Vector::<T, 3>::new(t * x * x + c, t * x * y + s * z, t * x * z - s * y),
            Vector::<T, 3>::new(t * x * y - s * z, t * y * y + c, t * y * z + s * x),
            Vector::<T, 3>::new(t * x * z + s * y, t * y * z - s * x, t * z * z + c),
        ])
    }
}

impl<T: Scalar> Matrix<T, 4> {
    /// Upper-left 3x3 block
    pub fn xyz(&self) -> Matrix<T, 3> {
        Matrix(core::array::from_fn(|c| core::array::from_fn(|r| self.0[c][r])))
    }
}

impl<T: Float> Matrix<T, 4> {
    /// Perspective projection for a camera looking down -z.
    ///
    /// `fov` is the full field of view in degrees. After the homogeneous
    /// divide, z in `[-near, -far]` lands in `[-1, 1]`.
    pub fn perspective(fov: T, near: T, far: T) -> Self {
        let f = rcp((fov * T::PI / T::from_f64(360.0)).tan());
        let d = rcp(near - far);
        let (zero, one, two) = (T::ZERO, T::ONE, T::from_f64(2.0));

        let mut r = Self::zero();
        r.set_row(0, Vector::<T, 4>::new(f, zero, zero, zero));
        r.set_row(1, Vector::<T, 4>::new(zero, f, zero, zero));
        r.set_row(2, Vector::<T, 4>::new(zero, zero, (near + far) * d, two * near * far * d));
        r.set_row(3, Vector::<T, 4>::new(zero, zero, -one, zero));
        r
    }

    /// Map the 2D rectangle at `pos` with extent `size` into clip space,
    /// uniformly scaled to fit a viewport of `view_size` and centered.
    pub fn fit_to_view(pos: Vector<T, 2>, size: Vector<T, 2>, view_size: Vector<T, 2>) -> Self {
        if size.is_zero() || view_size.x * view_size.y == T::ZERO {
            log::debug!("fit_to_view with zero extent: size {size}, view {view_size}");
        }
        let two = T::from_f64(2.0);
        let clip = view_size.map(|c| two * rcp(c));
        let fit = (view_size * size.map(rcp)).min_component();
        let center = -pos - size * T::HALF;

        Self::scale(Vector::<T, 3>::from_xy(clip, T::ONE))
            * Self::scale(Vector::<T, 3>::new(fit, fit, T::ONE))
            * Self::translate(Vector::<T, 3>::from_xy(center, T::ZERO))
    }
}

impl<const L: usize> From<Matrix<f32, L>> for Matrix<f64, L> {
    #[inline]
    fn from(m: Matrix<f32, L>) -> Self {
        Matrix(m.0.map(|c| c.map(f64::from)))
    }
}

impl<const L: usize> Matrix<f32, L> {
    #[inline]
    pub fn to_f64(&self) -> Matrix<f64, L> {
        Matrix::from(*self)
    }
}

impl<const L: usize> Matrix<f64, L> {
    /// Narrowing conversion, rounding every element to `f32`
    #[inline]
    pub fn to_f32(&self) -> Matrix<f32, L> {
        Matrix(self.0.map(|c| c.map(|a| a as f32)))
    }
}
