//! Scalar math shim
//!
//! Element traits for the generic containers, plus free functions whose
//! implementation is picked by the argument type. `f32` and `f64` get the
//! transcendental set; `i32` and `i64` get the bitwise set.

use core::fmt::{Debug, Display};
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use bytemuck::Pod;

/// Element type of a `Vector` or `Matrix`
pub trait Scalar:
    Pod
    + Debug
    + Display
    + Default
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + RemAssign
{
    const ZERO: Self;
    const ONE: Self;

    /// Absolute value. Integer types wrap on `MIN` instead of panicking.
    fn abs(self) -> Self;

    /// Conversion used for dimension factors such as `L` in the inverse
    fn from_usize(v: usize) -> Self;
}

/// Integer element types: adds the bitwise operator set
pub trait Integer:
    Scalar
    + Eq
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Shl<Output = Self>
    + Shr<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
    + ShlAssign
    + ShrAssign
{
}

/// Floating-point element types
pub trait Float: Scalar {
    /// Unsigned integer of the same width, for bit reinterpretation
    type Bits: Copy + Eq + Debug;

    const HALF: Self;
    const PI: Self;

    fn sqrt(self) -> Self;
    fn powf(self, e: Self) -> Self;
    fn exp(self) -> Self;
    fn exp2(self) -> Self;
    fn ln(self) -> Self;
    fn log2(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, x: Self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;

    fn to_bits(self) -> Self::Bits;
    fn from_bits(bits: Self::Bits) -> Self;

    /// Exact `2^n`, built directly in the exponent field.
    ///
    /// The biased exponent is clamped into the normal range, so huge inputs
    /// saturate at the largest/smallest normal power of two.
    fn exp2i(n: i32) -> Self;

    fn from_f64(v: f64) -> Self;

    /// Branch-free minimum. Signed zeros and NaNs are not handled.
    #[inline]
    fn fast_min(self, other: Self) -> Self {
        (self + other - (self - other).abs()) * Self::HALF
    }

    /// Branch-free maximum. Signed zeros and NaNs are not handled.
    #[inline]
    fn fast_max(self, other: Self) -> Self {
        (self + other + (self - other).abs()) * Self::HALF
    }

    #[inline]
    fn fast_clamp(self, lo: Self, hi: Self) -> Self {
        self.fast_max(lo).fast_min(hi)
    }
}

macro_rules! impl_integer {
    ($($t:ident),*) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn abs(self) -> Self {
                self.wrapping_abs()
            }

            #[inline]
            fn from_usize(v: usize) -> Self {
                v as $t
            }
        }

        impl Integer for $t {}
    )*};
}

macro_rules! impl_float {
    ($t:ident, $bits:ident, $bias:expr, $max_biased:expr, $mantissa:expr) => {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn abs(self) -> Self {
                $t::abs(self)
            }

            #[inline]
            fn from_usize(v: usize) -> Self {
                v as $t
            }
        }

        impl Float for $t {
            type Bits = $bits;

            const HALF: Self = 0.5;
            const PI: Self = core::$t::consts::PI;

            #[inline] fn sqrt(self) -> Self { $t::sqrt(self) }
            #[inline] fn powf(self, e: Self) -> Self { $t::powf(self, e) }
            #[inline] fn exp(self) -> Self { $t::exp(self) }
            #[inline] fn exp2(self) -> Self { $t::exp2(self) }
            #[inline] fn ln(self) -> Self { $t::ln(self) }
            #[inline] fn log2(self) -> Self { $t::log2(self) }
            #[inline] fn sin(self) -> Self { $t::sin(self) }
            #[inline] fn cos(self) -> Self { $t::cos(self) }
            #[inline] fn tan(self) -> Self { $t::tan(self) }
            #[inline] fn asin(self) -> Self { $t::asin(self) }
            #[inline] fn acos(self) -> Self { $t::acos(self) }
            #[inline] fn atan(self) -> Self { $t::atan(self) }
            #[inline] fn atan2(self, x: Self) -> Self { $t::atan2(self, x) }
            #[inline] fn floor(self) -> Self { $t::floor(self) }
            #[inline] fn ceil(self) -> Self { $t::ceil(self) }

            #[inline]
            fn to_bits(self) -> $bits {
                $t::to_bits(self)
            }

            #[inline]
            fn from_bits(bits: $bits) -> Self {
                $t::from_bits(bits)
            }

            #[inline]
            fn exp2i(n: i32) -> Self {
                let biased = n.saturating_add($bias).clamp(1, $max_biased);
                $t::from_bits((biased as $bits) << $mantissa)
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }
        }
    };
}

impl_integer!(i32, i64);
impl_float!(f32, u32, 127, 254, 23);
impl_float!(f64, u64, 1023, 2046, 52);

#[inline] pub fn sqrt<F: Float>(a: F) -> F { a.sqrt() }
#[inline] pub fn abs<T: Scalar>(a: T) -> T { a.abs() }
#[inline] pub fn pow<F: Float>(a: F, b: F) -> F { a.powf(b) }
#[inline] pub fn exp<F: Float>(a: F) -> F { a.exp() }
#[inline] pub fn exp2<F: Float>(a: F) -> F { a.exp2() }
#[inline] pub fn log<F: Float>(a: F) -> F { a.ln() }
#[inline] pub fn log2<F: Float>(a: F) -> F { a.log2() }
#[inline] pub fn sin<F: Float>(a: F) -> F { a.sin() }
#[inline] pub fn cos<F: Float>(a: F) -> F { a.cos() }
#[inline] pub fn tan<F: Float>(a: F) -> F { a.tan() }
#[inline] pub fn asin<F: Float>(a: F) -> F { a.asin() }
#[inline] pub fn acos<F: Float>(a: F) -> F { a.acos() }
#[inline] pub fn atan<F: Float>(a: F) -> F { a.atan() }
#[inline] pub fn atan2<F: Float>(y: F, x: F) -> F { y.atan2(x) }
#[inline] pub fn floor<F: Float>(a: F) -> F { a.floor() }
#[inline] pub fn ceil<F: Float>(a: F) -> F { a.ceil() }

/// Exact power of two, see [`Float::exp2i`]
#[inline]
pub fn exp2i<F: Float>(n: i32) -> F {
    F::exp2i(n)
}

#[inline]
pub fn float_to_bits(a: f32) -> u32 {
    a.to_bits()
}

#[inline]
pub fn bits_to_float(a: u32) -> f32 {
    f32::from_bits(a)
}

#[inline]
pub fn double_to_bits(a: f64) -> u64 {
    a.to_bits()
}

#[inline]
pub fn bits_to_double(a: u64) -> f64 {
    f64::from_bits(a)
}

#[inline]
pub fn fast_min<F: Float>(a: F, b: F) -> F {
    a.fast_min(b)
}

#[inline]
pub fn fast_max<F: Float>(a: F, b: F) -> F {
    a.fast_max(b)
}

#[inline]
pub fn fast_clamp<F: Float>(v: F, lo: F, hi: F) -> F {
    v.fast_clamp(lo, hi)
}

/// `a * 2^b` with an exact power of two
#[inline]
pub fn scale<F: Float>(a: F, b: i32) -> F {
    a * F::exp2i(b)
}

#[inline]
pub fn popc8(mask: u32) -> u32 {
    (mask & 0xFF).count_ones()
}

#[inline]
pub fn popc16(mask: u32) -> u32 {
    (mask & 0xFFFF).count_ones()
}

#[inline]
pub fn popc32(mask: u32) -> u32 {
    mask.count_ones()
}

#[inline]
pub fn popc64(mask: u64) -> u32 {
    mask.count_ones()
}

#[inline]
pub fn sqr<T: Scalar>(a: T) -> T {
    a * a
}

/// Reciprocal that maps zero to zero instead of infinity
#[inline]
pub fn rcp<T: Scalar>(a: T) -> T {
    if a != T::ZERO {
        T::ONE / a
    } else {
        T::ZERO
    }
}

/// Linear interpolation, exact at both ends
#[inline]
pub fn lerp<T: Scalar>(a: T, b: T, t: T) -> T {
    a * (T::ONE - t) + b * t
}

#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Clamp value between lo and hi
#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    min(max(v, lo), hi)
}
