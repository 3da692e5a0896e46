//! Named 2/3/4-component vectors
//!
//! The `Vec*` types are aliases of [`Vector`]. Field access (`v.x`, `v.w`)
//! goes through `Deref` into a `repr(C)` view over the same array, so `x` is
//! always component 0, `y` component 1 and so on.

use core::ops::{Deref, DerefMut};

use bytemuck::{Pod, Zeroable};

use crate::scalar::{self, Scalar};
use crate::vector::Vector;

pub type Vec2i = Vector<i32, 2>;
pub type Vec3i = Vector<i32, 3>;
pub type Vec4i = Vector<i32, 4>;
pub type Vec2f = Vector<f32, 2>;
pub type Vec3f = Vector<f32, 3>;
pub type Vec4f = Vector<f32, 4>;
pub type Vec2d = Vector<f64, 2>;
pub type Vec3d = Vector<f64, 3>;
pub type Vec4d = Vector<f64, 4>;

/// Field view of a 2-component vector
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
}

/// Field view of a 3-component vector
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// Field view of a 4-component vector
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

macro_rules! impl_field_view {
    ($($n:literal => $view:ident),*) => {$(
        // SAFETY: `repr(C)` with `$n` fields of one type: no padding, same
        // size and alignment as `[T; $n]`.
        unsafe impl<T: Zeroable> Zeroable for $view<T> {}
        // SAFETY: see above; every bit pattern valid for `T` is valid here.
        unsafe impl<T: Pod> Pod for $view<T> {}

        impl<T: Pod> Deref for Vector<T, $n> {
            type Target = $view<T>;

            #[inline]
            fn deref(&self) -> &$view<T> {
                bytemuck::cast_ref(&self.0)
            }
        }

        impl<T: Pod> DerefMut for Vector<T, $n> {
            #[inline]
            fn deref_mut(&mut self) -> &mut $view<T> {
                bytemuck::cast_mut(&mut self.0)
            }
        }
    )*};
}

impl_field_view!(2 => XY, 3 => XYZ, 4 => XYZW);

impl<T: Scalar> Vector<T, 2> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }

    /// Rotated by +90 degrees: `(x, y) -> (-y, x)`
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Signed area of the parallelogram spanned by `self` and `rhs`
    #[inline]
    pub fn cross(self, rhs: Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }
}

impl<T: Scalar> Vector<T, 3> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    #[inline]
    pub fn from_xy(xy: Vector<T, 2>, z: T) -> Self {
        Self::new(xy.x, xy.y, z)
    }

    #[inline]
    pub fn xy(self) -> Vector<T, 2> {
        Vector::<T, 2>::new(self.x, self.y)
    }

    /// Right-handed cross product
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl<T: Scalar> Vector<T, 4> {
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_array([x, y, z, w])
    }

    #[inline]
    pub fn from_xy(xy: Vector<T, 2>, z: T, w: T) -> Self {
        Self::new(xy.x, xy.y, z, w)
    }

    #[inline]
    pub fn from_xyz(xyz: Vector<T, 3>, w: T) -> Self {
        Self::new(xyz.x, xyz.y, xyz.z, w)
    }

    #[inline]
    pub fn from_xy_zw(xy: Vector<T, 2>, zw: Vector<T, 2>) -> Self {
        Self::new(xy.x, xy.y, zw.x, zw.y)
    }

    #[inline]
    pub fn xy(self) -> Vector<T, 2> {
        Vector::<T, 2>::new(self.x, self.y)
    }

    #[inline]
    pub fn xyz(self) -> Vector<T, 3> {
        Vector::<T, 3>::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn xyw(self) -> Vector<T, 3> {
        Vector::<T, 3>::new(self.x, self.y, self.w)
    }
}

impl Vec4f {
    /// Unpack an 8-bit-per-channel color with `x` in the low byte
    pub fn from_abgr(abgr: u32) -> Self {
        let channel = |shift: u32| ((abgr >> shift) & 0xFF) as f32 * (1.0 / 255.0);
        Self::new(channel(0), channel(8), channel(16), channel(24))
    }

    /// Pack to 8 bits per channel, clamping each component to `[0, 1]`
    pub fn to_abgr(self) -> u32 {
        let channel = |c: f32, shift: u32| ((scalar::clamp(c, 0.0, 1.0) * 255.0 + 0.5) as u32) << shift;
        channel(self.x, 0) | channel(self.y, 8) | channel(self.z, 16) | channel(self.w, 24)
    }
}

macro_rules! impl_widen {
    ($($from:ty => $to:ty),*) => {$(
        impl<const L: usize> From<Vector<$from, L>> for Vector<$to, L> {
            #[inline]
            fn from(v: Vector<$from, L>) -> Self {
                Vector::from_array(v.0.map(|c| c as $to))
            }
        }
    )*};
}

impl_widen!(i32 => f32, i32 => f64, f32 => f64);

macro_rules! impl_cast {
    ($from:ty: $($name:ident => $to:ty),*) => {
        impl<const L: usize> Vector<$from, L> {$(
            /// Componentwise `as` conversion; float to int truncates
            #[inline]
            pub fn $name(self) -> Vector<$to, L> {
                Vector::from_array(self.0.map(|c| c as $to))
            }
        )*}
    };
}

impl_cast!(i32: to_f32 => f32, to_f64 => f64);
impl_cast!(f32: to_i32 => i32, to_f64 => f64);
impl_cast!(f64: to_i32 => i32, to_f32 => f32);
