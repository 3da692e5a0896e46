//! Generic fixed-size vector
//!
//! `Vector<T, L>` is a transparent wrapper over `[T; L]`: densely packed,
//! `Copy`, and safe to reinterpret as raw bytes. All arithmetic is
//! elementwise; reductions fold from the first component to the last.

use core::fmt;
use core::ops::{Index, IndexMut, Neg, Not};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use bytemuck::{Pod, TransparentWrapper, Zeroable};

use crate::error::{MathError, Result};
use crate::scalar::{self, Float, Integer, Scalar};

/// `L` components of type `T`
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(transparent)]
pub struct Vector<T, const L: usize>(pub(crate) [T; L]);

// SAFETY: `repr(transparent)` over `[T; L]`, which is all-zero valid when `T` is.
unsafe impl<T: Zeroable, const L: usize> Zeroable for Vector<T, L> {}

// SAFETY: identical layout to `[T; L]`, so no padding and every bit pattern of
// a `Pod` element array is a valid vector.
unsafe impl<T: Pod, const L: usize> Pod for Vector<T, L> {}

// SAFETY: `repr(transparent)` with `[T; L]` as the only field.
unsafe impl<T, const L: usize> TransparentWrapper<[T; L]> for Vector<T, L> {}

impl<T: Scalar, const L: usize> Vector<T, L> {
    #[inline]
    pub const fn from_array(components: [T; L]) -> Self {
        Self(components)
    }

    /// All components set to `a`
    #[inline]
    pub fn splat(a: T) -> Self {
        Self([a; L])
    }

    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    /// Copy exactly `L` components out of a slice
    pub fn from_slice(s: &[T]) -> Result<Self> {
        let components: [T; L] = s.try_into().map_err(|_| MathError::SliceLength {
            expected: L,
            found: s.len(),
        })?;
        Ok(Self(components))
    }

    #[inline]
    pub fn to_array(self) -> [T; L] {
        self.0
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Apply `f` to every component
    #[inline]
    pub fn map(self, f: impl FnMut(T) -> T) -> Self {
        Self(self.0.map(f))
    }

    /// Combine matching components of `self` and `rhs`
    #[inline]
    pub fn zip_map(self, rhs: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        let mut out = self;
        for (a, &b) in out.0.iter_mut().zip(rhs.0.iter()) {
            *a = f(*a, b);
        }
        out
    }

    /// Component `idx`. Out-of-range access is a caller bug.
    #[inline]
    pub fn get(&self, idx: usize) -> T {
        debug_assert!(idx < L, "vector index {idx} out of range for length {L}");
        self.0[idx]
    }

    #[inline]
    pub fn try_get(&self, idx: usize) -> Result<T> {
        self.0
            .get(idx)
            .copied()
            .ok_or(MathError::IndexOutOfRange { index: idx, len: L })
    }

    /// Overwrite component `idx`, returning the previous value
    #[inline]
    pub fn set(&mut self, idx: usize, a: T) -> T {
        debug_assert!(idx < L, "vector index {idx} out of range for length {L}");
        core::mem::replace(&mut self.0[idx], a)
    }

    #[inline]
    pub fn set_all(&mut self, a: T) {
        self.0 = [a; L];
    }

    #[inline]
    pub fn set_zero(&mut self) {
        self.set_all(T::ZERO);
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == T::ZERO)
    }

    pub fn min_component(self) -> T {
        self.0.into_iter().reduce(scalar::min).unwrap_or(T::ZERO)
    }

    pub fn max_component(self) -> T {
        self.0.into_iter().reduce(scalar::max).unwrap_or(T::ZERO)
    }

    pub fn sum(self) -> T {
        self.0.into_iter().reduce(|a, b| a + b).unwrap_or(T::ZERO)
    }

    #[inline]
    pub fn len_sqr(self) -> T {
        self.map(scalar::sqr).sum()
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        (self * rhs).sum()
    }

    #[inline]
    pub fn abs(self) -> Self {
        self.map(|c| c.abs())
    }

    /// Componentwise minimum
    #[inline]
    pub fn min(self, rhs: Self) -> Self {
        self.zip_map(rhs, scalar::min)
    }

    /// Componentwise maximum
    #[inline]
    pub fn max(self, rhs: Self) -> Self {
        self.zip_map(rhs, scalar::max)
    }

    /// Componentwise clamp against vector bounds
    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    #[inline]
    pub fn clamp_scalar(self, lo: T, hi: T) -> Self {
        self.map(|c| scalar::clamp(c, lo, hi))
    }

    #[inline]
    pub fn lerp(self, rhs: Self, t: T) -> Self {
        self.zip_map(rhs, |a, b| scalar::lerp(a, b, t))
    }
}

impl<T: Float, const L: usize> Vector<T, L> {
    #[inline]
    pub fn length(self) -> T {
        self.len_sqr().sqrt()
    }

    /// Unit-length copy. The zero vector stays zero.
    #[inline]
    pub fn normalized(self) -> Self {
        self.normalized_to(T::ONE)
    }

    /// Copy rescaled to length `len`. The zero vector stays zero.
    #[inline]
    pub fn normalized_to(self, len: T) -> Self {
        self * (len * scalar::rcp(self.length()))
    }

    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }
}

macro_rules! impl_homogeneous {
    ($($n:literal => $h:literal),*) => {$(
        impl<T: Scalar> Vector<T, $n> {
            /// Append a trailing `1`
            #[inline]
            pub fn to_homogeneous(self) -> Vector<T, $h> {
                let mut out = Vector::<T, $h>::splat(T::ONE);
                out.0[..$n].copy_from_slice(&self.0);
                out
            }
        }

        impl<T: Scalar> Vector<T, $h> {
            /// Drop the last component, dividing the rest by it
            #[inline]
            pub fn to_cartesian(self) -> Vector<T, $n> {
                let w = scalar::rcp(self.0[$n]);
                let mut out = Vector::<T, $n>::zero();
                for (o, &c) in out.0.iter_mut().zip(&self.0[..$n]) {
                    *o = c * w;
                }
                out
            }
        }
    )*};
}

impl_homogeneous!(1 => 2, 2 => 3, 3 => 4, 4 => 5);

impl<T: Scalar, const L: usize> Default for Vector<T, L> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const L: usize> From<[T; L]> for Vector<T, L> {
    #[inline]
    fn from(components: [T; L]) -> Self {
        Self(components)
    }
}

impl<T, const L: usize> From<Vector<T, L>> for [T; L] {
    #[inline]
    fn from(v: Vector<T, L>) -> Self {
        v.0
    }
}

impl<T, const L: usize> Index<usize> for Vector<T, L> {
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &T {
        debug_assert!(idx < L, "vector index {idx} out of range for length {L}");
        &self.0[idx]
    }
}

impl<T, const L: usize> IndexMut<usize> for Vector<T, L> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut T {
        debug_assert!(idx < L, "vector index {idx} out of range for length {L}");
        &mut self.0[idx]
    }
}

impl<T: Scalar, const L: usize> Neg for Vector<T, L> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<T: Integer, const L: usize> Not for Vector<T, L> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.map(|c| !c)
    }
}

elementwise_binop!(Vector: Scalar;
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
    Rem::rem, RemAssign::rem_assign;
);

elementwise_binop!(Vector: Integer;
    BitAnd::bitand, BitAndAssign::bitand_assign;
    BitOr::bitor, BitOrAssign::bitor_assign;
    BitXor::bitxor, BitXorAssign::bitxor_assign;
    Shl::shl, ShlAssign::shl_assign;
    Shr::shr, ShrAssign::shr_assign;
);

scalar_lhs_binop!(Vector; [f32, f64, i32, i64]; [Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem]);
scalar_lhs_binop!(Vector; [i32, i64]; [BitAnd::bitand, BitOr::bitor, BitXor::bitxor, Shl::shl, Shr::shr]);

impl<T: fmt::Display, const L: usize> fmt::Display for Vector<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(c, f)?;
        }
        f.write_str(")")
    }
}

impl<T, const L: usize> AbsDiffEq for Vector<T, L>
where
    T: Scalar + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const L: usize> RelativeEq for Vector<T, L>
where
    T: Scalar + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const L: usize> UlpsEq for Vector<T, L>
where
    T: Scalar + UlpsEq<Epsilon = T>,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use core::fmt;
    use core::marker::PhantomData;

    use serde::de::{self, SeqAccess, Visitor};
    use serde::ser::SerializeTuple;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Vector;
    use crate::scalar::Scalar;

    impl<T: Scalar + Serialize, const L: usize> Serialize for Vector<T, L> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut tuple = serializer.serialize_tuple(L)?;
            for c in &self.0 {
                tuple.serialize_element(c)?;
            }
            tuple.end()
        }
    }

    struct ComponentVisitor<T, const L: usize>(PhantomData<T>);

    impl<'de, T: Scalar + Deserialize<'de>, const L: usize> Visitor<'de> for ComponentVisitor<T, L> {
        type Value = Vector<T, L>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a tuple of {L} components")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut out = Vector::<T, L>::zero();
            for i in 0..L {
                out.0[i] = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(i, &self))?;
            }
            Ok(out)
        }
    }

    impl<'de, T: Scalar + Deserialize<'de>, const L: usize> Deserialize<'de> for Vector<T, L> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_tuple(L, ComponentVisitor::<T, L>(PhantomData))
        }
    }
}
