//! Generic square matrix
//!
//! `Matrix<T, L>` stores `L` columns of `L` elements each. Element
//! `(row, col)` sits at linear index `row + col * L` of [`Matrix::as_slice`],
//! and [`Matrix::col`] hands out a `Vector` view over the same storage.
//!
//! Determinants use Laplace expansion along the first column. Minors of size
//! 1, 2 and 3 take closed forms that are the recursion unrolled term for
//! term, so [`Matrix::det`] and [`Matrix::det_laplace`] agree bit for bit.

use core::fmt;
use core::ops::{Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Not};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use bytemuck::{Pod, TransparentWrapper, Zeroable};

use crate::error::{MathError, Result};
use crate::scalar::{self, Integer, Scalar};
use crate::vector::Vector;

/// `L x L` matrix, column-major
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(transparent)]
pub struct Matrix<T, const L: usize>(pub(crate) [[T; L]; L]);

// SAFETY: `repr(transparent)` over `[[T; L]; L]`, all-zero valid when `T` is.
unsafe impl<T: Zeroable, const L: usize> Zeroable for Matrix<T, L> {}

// SAFETY: identical layout to `[[T; L]; L]`: no padding, any `Pod` bit pattern
// is a valid matrix.
unsafe impl<T: Pod, const L: usize> Pod for Matrix<T, L> {}

impl<T: Scalar, const L: usize> Matrix<T, L> {
    pub fn identity() -> Self {
        let mut m = Self::zero();
        m.set_identity();
        m
    }

    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    /// Every element set to `a`
    #[inline]
    pub fn splat(a: T) -> Self {
        Self([[a; L]; L])
    }

    #[inline]
    pub fn from_cols(cols: [Vector<T, L>; L]) -> Self {
        Self(cols.map(Vector::to_array))
    }

    #[inline]
    pub fn from_rows(rows: [Vector<T, L>; L]) -> Self {
        Self::from_cols(rows).transposed()
    }

    /// Copy `L * L` elements in column-major order
    pub fn from_slice(s: &[T]) -> Result<Self> {
        if s.len() != L * L {
            return Err(MathError::SliceLength {
                expected: L * L,
                found: s.len(),
            });
        }
        let mut m = Self::zero();
        m.as_mut_slice().copy_from_slice(s);
        Ok(m)
    }

    /// All elements, column-major
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    pub fn map(self, mut f: impl FnMut(T) -> T) -> Self {
        let mut out = self;
        for a in out.as_mut_slice() {
            *a = f(*a);
        }
        out
    }

    pub fn zip_map(self, rhs: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        let mut out = self;
        for (a, &b) in out.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a = f(*a, b);
        }
        out
    }

    /// Element at row `r`, column `c`. Out-of-range access is a caller bug.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> T {
        debug_assert!(r < L && c < L, "matrix element ({r}, {c}) out of range for {L}x{L}");
        self.0[c][r]
    }

    #[inline]
    pub fn get_mut(&mut self, r: usize, c: usize) -> &mut T {
        debug_assert!(r < L && c < L, "matrix element ({r}, {c}) out of range for {L}x{L}");
        &mut self.0[c][r]
    }

    /// Overwrite element `(r, c)`, returning the previous value
    #[inline]
    pub fn set(&mut self, r: usize, c: usize, a: T) -> T {
        core::mem::replace(self.get_mut(r, c), a)
    }

    pub fn try_get(&self, r: usize, c: usize) -> Result<T> {
        if r < L && c < L {
            Ok(self.0[c][r])
        } else {
            Err(MathError::IndexOutOfRange {
                index: r.max(c),
                len: L,
            })
        }
    }

    /// Element at column-major linear index `idx`
    #[inline]
    pub fn get_linear(&self, idx: usize) -> T {
        debug_assert!(idx < L * L, "matrix index {idx} out of range for {L}x{L}");
        self.as_slice()[idx]
    }

    #[inline]
    pub fn set_linear(&mut self, idx: usize, a: T) -> T {
        debug_assert!(idx < L * L, "matrix index {idx} out of range for {L}x{L}");
        core::mem::replace(&mut self.as_mut_slice()[idx], a)
    }

    /// Column `c` as a vector view of the underlying storage
    #[inline]
    pub fn col(&self, c: usize) -> &Vector<T, L> {
        debug_assert!(c < L, "matrix column {c} out of range for {L}x{L}");
        Vector::wrap_ref(&self.0[c])
    }

    #[inline]
    pub fn col_mut(&mut self, c: usize) -> &mut Vector<T, L> {
        debug_assert!(c < L, "matrix column {c} out of range for {L}x{L}");
        Vector::wrap_mut(&mut self.0[c])
    }

    /// Row `r`, copied out
    pub fn row(&self, r: usize) -> Vector<T, L> {
        debug_assert!(r < L, "matrix row {r} out of range for {L}x{L}");
        Vector::from_array(core::array::from_fn(|c| self.0[c][r]))
    }

    #[inline]
    pub fn set_col(&mut self, c: usize, v: Vector<T, L>) {
        *self.col_mut(c) = v;
    }

    pub fn set_row(&mut self, r: usize, v: Vector<T, L>) {
        debug_assert!(r < L, "matrix row {r} out of range for {L}x{L}");
        for (col, &a) in self.0.iter_mut().zip(v.as_slice()) {
            col[r] = a;
        }
    }

    #[inline]
    pub fn set_all(&mut self, a: T) {
        self.0 = [[a; L]; L];
    }

    #[inline]
    pub fn set_zero(&mut self) {
        self.set_all(T::ZERO);
    }

    pub fn set_identity(&mut self) {
        for (c, col) in self.0.iter_mut().enumerate() {
            for (r, a) in col.iter_mut().enumerate() {
                *a = if r == c { T::ONE } else { T::ZERO };
            }
        }
    }

    pub fn transposed(&self) -> Self {
        Self(core::array::from_fn(|c| core::array::from_fn(|r| self.0[r][c])))
    }

    #[inline]
    pub fn transpose(&mut self) {
        *self = self.transposed();
    }

    /// Diagonal matrix with `v` on the diagonal
    pub fn diagonal(v: Vector<T, L>) -> Self {
        let mut m = Self::zero();
        for (i, &a) in v.as_slice().iter().enumerate() {
            m.0[i][i] = a;
        }
        m
    }

    /// `a * b^T`
    pub fn outer_product(a: Vector<T, L>, b: Vector<T, L>) -> Self {
        Self(core::array::from_fn(|c| (a * b.get(c)).to_array()))
    }

    /// Determinant, with closed forms for the small minors
    #[inline]
    pub fn det(&self) -> T {
        Minor::full(self).det(true)
    }

    /// Determinant by plain cofactor recursion down to the empty minor
    #[inline]
    pub fn det_laplace(&self) -> T {
        Minor::full(self).det(false)
    }

    /// Inverse via the adjugate.
    ///
    /// A singular matrix inverts to the zero matrix.
    pub fn inverted(&self) -> Self {
        let full = Minor::full(self);
        let mut r = Self::zero();
        let mut d = T::ZERO;
        let mut si = T::ONE;
        for i in 0..L {
            let mut sj = si;
            for j in 0..L {
                let dd = full.strike(j, i).det(true) * sj;
                r.0[j][i] = dd;
                d += dd * self.0[i][j];
                sj = -sj;
            }
            si = -si;
        }

        // `d` accumulated every cofactor of every column: it is `L * det`.
        if d == T::ZERO {
            log::debug!("inverting singular {L}x{L} matrix, result is zero");
        }
        r * (scalar::rcp(d) * T::from_usize(L))
    }

    #[inline]
    pub fn invert(&mut self) {
        *self = self.inverted();
    }
}

/// Rows and columns of a matrix left after striking some out
#[derive(Clone, Copy)]
struct Minor<'a, T, const L: usize> {
    m: &'a Matrix<T, L>,
    rows: [usize; L],
    cols: [usize; L],
    n: usize,
}

impl<'a, T: Scalar, const L: usize> Minor<'a, T, L> {
    fn full(m: &'a Matrix<T, L>) -> Self {
        Self {
            m,
            rows: core::array::from_fn(|i| i),
            cols: core::array::from_fn(|i| i),
            n: L,
        }
    }

    #[inline]
    fn at(&self, r: usize, c: usize) -> T {
        self.m.0[self.cols[c]][self.rows[r]]
    }

    fn strike(&self, row: usize, col: usize) -> Self {
        let mut out = *self;
        out.rows.copy_within(row + 1..self.n, row);
        out.cols.copy_within(col + 1..self.n, col);
        out.n -= 1;
        out
    }

    fn det(&self, closed_forms: bool) -> T {
        if closed_forms {
            match self.n {
                1 => return self.at(0, 0),
                2 => return self.det2(),
                3 => return self.det3(),
                _ => {}
            }
        }
        if self.n == 0 {
            return T::ONE;
        }

        let mut r = T::ZERO;
        let mut sign = T::ONE;
        for i in 0..self.n {
            let term = self.strike(i, 0).det(closed_forms) * self.at(i, 0) * sign;
            r = if i == 0 { term } else { r + term };
            sign = -sign;
        }
        r
    }

    #[inline]
    fn det2(&self) -> T {
        self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0)
    }

    #[inline]
    fn det3(&self) -> T {
        let a = |r, c| self.at(r, c);
        (a(1, 1) * a(2, 2) - a(1, 2) * a(2, 1)) * a(0, 0)
            - (a(0, 1) * a(2, 2) - a(0, 2) * a(2, 1)) * a(1, 0)
            + (a(0, 1) * a(1, 2) - a(0, 2) * a(1, 1)) * a(2, 0)
    }
}

impl<T: Scalar, const L: usize> Default for Matrix<T, L> {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T, const L: usize> Index<(usize, usize)> for Matrix<T, L> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        debug_assert!(r < L && c < L, "matrix element ({r}, {c}) out of range for {L}x{L}");
        &self.0[c][r]
    }
}

impl<T, const L: usize> IndexMut<(usize, usize)> for Matrix<T, L> {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        debug_assert!(r < L && c < L, "matrix element ({r}, {c}) out of range for {L}x{L}");
        &mut self.0[c][r]
    }
}

impl<T: Scalar, const L: usize> Mul for Matrix<T, L> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|j| {
            core::array::from_fn(|i| {
                let mut t = T::ZERO;
                for k in 0..L {
                    t += self.0[k][i] * rhs.0[j][k];
                }
                t
            })
        }))
    }
}

impl<T: Scalar, const L: usize> MulAssign for Matrix<T, L> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, const L: usize> Div for Matrix<T, L> {
    type Output = Self;

    /// Multiply by the inverse of `rhs`
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverted()
    }
}

impl<T: Scalar, const L: usize> DivAssign for Matrix<T, L> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T: Scalar, const L: usize> Mul<Vector<T, L>> for Matrix<T, L> {
    type Output = Vector<T, L>;

    fn mul(self, v: Vector<T, L>) -> Vector<T, L> {
        Vector::from_array(core::array::from_fn(|i| {
            let mut t = T::ZERO;
            for j in 0..L {
                t += self.0[j][i] * v.get(j);
            }
            t
        }))
    }
}

macro_rules! impl_homogeneous_transform {
    ($($l:literal => $n:literal),*) => {$(
        /// Point transform: the vector is extended with `w = 1` and the
        /// result divided by the transformed `w`.
        impl<T: Scalar> Mul<Vector<T, $n>> for Matrix<T, $l> {
            type Output = Vector<T, $n>;

            fn mul(self, v: Vector<T, $n>) -> Vector<T, $n> {
                let m = &self.0;
                let mut w = m[$n][$n];
                for i in 0..$n {
                    w += m[i][$n] * v.get(i);
                }
                let w = scalar::rcp(w);

                Vector::from_array(core::array::from_fn(|i| {
                    let mut t = m[$n][i];
                    for j in 0..$n {
                        t += m[j][i] * v.get(j);
                    }
                    t * w
                }))
            }
        }
    )*};
}

impl_homogeneous_transform!(2 => 1, 3 => 2, 4 => 3);

impl<T: Scalar, const L: usize> Neg for Matrix<T, L> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl<T: Integer, const L: usize> Not for Matrix<T, L> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.map(|a| !a)
    }
}

elementwise_binop!(Matrix: Scalar;
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Rem::rem, RemAssign::rem_assign;
);

scalar_binop!(Matrix: Scalar;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
);

elementwise_binop!(Matrix: Integer;
    BitAnd::bitand, BitAndAssign::bitand_assign;
    BitOr::bitor, BitOrAssign::bitor_assign;
    BitXor::bitxor, BitXorAssign::bitxor_assign;
    Shl::shl, ShlAssign::shl_assign;
    Shr::shr, ShrAssign::shr_assign;
);

scalar_lhs_binop!(Matrix; [f32, f64, i32, i64]; [Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem]);
scalar_lhs_binop!(Matrix; [i32, i64]; [BitAnd::bitand, BitOr::bitor, BitXor::bitxor, Shl::shl, Shr::shr]);

/// One row per line, elements left-aligned in 16-wide columns
impl<T: fmt::Display, const L: usize> fmt::Display for Matrix<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..L {
            if r > 0 {
                f.write_str("\n")?;
            }
            for c in 0..L {
                let cell = self.0[c][r].to_string();
                if c + 1 < L {
                    write!(f, "{cell:<16}")?;
                } else {
                    f.write_str(&cell)?;
                }
            }
        }
        Ok(())
    }
}

impl<T, const L: usize> AbsDiffEq for Matrix<T, L>
where
    T: Scalar + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const L: usize> RelativeEq for Matrix<T, L>
where
    T: Scalar + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const L: usize> UlpsEq for Matrix<T, L>
where
    T: Scalar + UlpsEq<Epsilon = T>,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
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

    use super::Matrix;
    use crate::scalar::Scalar;
    use crate::vector::Vector;

    /// Serialized as a tuple of `L` columns
    impl<T: Scalar + Serialize, const L: usize> Serialize for Matrix<T, L> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut tuple = serializer.serialize_tuple(L)?;
            for c in 0..L {
                tuple.serialize_element(self.col(c))?;
            }
            tuple.end()
        }
    }

    struct ColumnVisitor<T, const L: usize>(PhantomData<T>);

    impl<'de, T: Scalar + Deserialize<'de>, const L: usize> Visitor<'de> for ColumnVisitor<T, L> {
        type Value = Matrix<T, L>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a tuple of {L} columns")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut out = Matrix::<T, L>::zero();
            for c in 0..L {
                let col: Vector<T, L> = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(c, &self))?;
                out.set_col(c, col);
            }
            Ok(out)
        }
    }

    impl<'de, T: Scalar + Deserialize<'de>, const L: usize> Deserialize<'de> for Matrix<T, L> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_tuple(L, ColumnVisitor::<T, L>(PhantomData))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    type M3 = Matrix<f32, 3>;

    fn m3(rows: [[f32; 3]; 3]) -> M3 {
        M3::from_rows(rows.map(Vector::from_array))
    }

    #[test]
    fn test_default_is_identity() {
        let m = Matrix::<f64, 4>::default();
        for r in 0..4 {
            for c in 0..4 {
                assert_eq!(m.get(r, c), if r == c { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_column_major_storage() {
        let m = m3([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m.as_slice(), &[1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(m.get(r, c), m.get_linear(r + c * 3));
                assert_eq!(m[(r, c)], m.get(r, c));
            }
        }
        assert_eq!(m.row(1), Vector::from_array([4.0, 5.0, 6.0]));
        assert_eq!(*m.col(1), Vector::from_array([2.0, 5.0, 8.0]));
    }

    #[test]
    fn test_column_view_shares_storage() {
        let mut m = M3::zero();
        m.col_mut(2).set(1, 5.0);
        assert_eq!(m.get_linear(1 + 2 * 3), 5.0);
        m.as_mut_slice()[0] = 3.0;
        assert_eq!(m.col(0).get(0), 3.0);
    }

    #[test]
    fn test_set_row_col() {
        let mut m = M3::zero();
        m.set_row(0, Vector::from_array([1.0, 2.0, 3.0]));
        m.set_col(2, Vector::from_array([7.0, 8.0, 9.0]));
        assert_eq!(m.row(0), Vector::from_array([1.0, 2.0, 7.0]));
        assert_eq!(m.set(1, 1, 4.0), 0.0);
        assert_eq!(m.set_linear(4, 6.0), 4.0);
        assert_eq!(m.try_get(3, 0), Err(MathError::IndexOutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn test_from_slice_checks_length() {
        assert!(Matrix::<i32, 2>::from_slice(&[1, 2, 3, 4]).is_ok());
        assert_eq!(
            Matrix::<i32, 2>::from_slice(&[1, 2, 3]),
            Err(MathError::SliceLength { expected: 4, found: 3 })
        );
    }

    #[test]
    fn test_transpose() {
        let m = m3([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let t = m.transposed();
        assert_eq!(t.row(0), Vector::from_array([1.0, 4.0, 7.0]));
        assert_eq!(t.transposed(), m);
    }

    #[test]
    fn test_product() {
        let a = Matrix::<i32, 2>::from_rows([Vector::from_array([1, 2]), Vector::from_array([3, 4])]);
        let b = Matrix::<i32, 2>::from_rows([Vector::from_array([5, 6]), Vector::from_array([7, 8])]);
        let ab = Matrix::<i32, 2>::from_rows([Vector::from_array([19, 22]), Vector::from_array([43, 50])]);
        assert_eq!(a * b, ab);
        assert_eq!(a * Matrix::<i32, 2>::identity(), a);
        assert_eq!(a * Vector::from_array([1, 1]), Vector::from_array([3, 7]));
    }

    #[test]
    fn test_homogeneous_transform() {
        let mut m = Matrix::<f32, 4>::identity();
        m.set_col(3, Vector::from_array([1.0, 2.0, 3.0, 1.0]));
        let p = m * Vector::from_array([1.0, 1.0, 1.0]);
        assert_eq!(p, Vector::from_array([2.0, 3.0, 4.0]));

        let mut w2 = Matrix::<f32, 3>::identity();
        w2.set(2, 2, 2.0);
        assert_eq!(w2 * Vector::from_array([4.0, 6.0]), Vector::from_array([2.0, 3.0]));
    }

    #[test]
    fn test_det_known_values() {
        let m = m3([[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]]);
        assert_eq!(m.det(), 6.0);
        assert_eq!(m.transposed().det(), 6.0);
        assert_eq!(Matrix::<i32, 1>::from_slice(&[7]).unwrap().det(), 7);
        assert_eq!(Matrix::<i32, 4>::identity().det(), 1);
        let singular = m3([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 0.0]]);
        assert_eq!(singular.det(), 0.0);
    }

    #[test]
    fn test_det_matches_laplace() {
        let m = Matrix::<f64, 4>::from_slice(&[
            0.3, -1.7, 2.9, 4.1, 5.5, -0.25, 1.125, 3.3, -2.2, 0.7, 9.1, -4.4, 1.0, 2.0, -3.0, 0.5,
        ])
        .unwrap();
        assert_eq!(m.det(), m.det_laplace());
    }

    #[test]
    fn test_inverse() {
        let m = Matrix::<f64, 2>::from_rows([Vector::from_array([4.0, 7.0]), Vector::from_array([2.0, 6.0])]);
        let inv = m.inverted();
        assert_abs_diff_eq!(inv.get(0, 0), 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(inv.get(0, 1), -0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(inv.get(1, 0), -0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(inv.get(1, 1), 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(m * inv, Matrix::identity(), epsilon = 1e-12);
        assert_abs_diff_eq!(m / m, Matrix::identity(), epsilon = 1e-12);
    }

    #[test]
    fn test_singular_inverts_to_zero() {
        let m = m3([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 0.0]]);
        assert_eq!(m.inverted(), M3::zero());
    }

    #[test]
    fn test_scalar_and_elementwise_ops() {
        let m = Matrix::<i32, 2>::splat(3);
        assert_eq!(m * 2, Matrix::splat(6));
        assert_eq!(2 * m, Matrix::splat(6));
        assert_eq!(m + m, Matrix::splat(6));
        assert_eq!(m - 1, Matrix::splat(2));
        assert_eq!(m % 2, Matrix::splat(1));
        assert_eq!(-m, Matrix::splat(-3));
        assert_eq!(m & 1, Matrix::splat(1));
        assert_eq!(!Matrix::<i32, 2>::zero(), Matrix::splat(-1));
    }

    #[test]
    fn test_scalar_on_left() {
        let m = Matrix::<f64, 2>::from_slice(&[1.0, 2.0, 4.0, 8.0]).unwrap();
        assert_eq!(8.0 / m, Matrix::from_slice(&[8.0, 4.0, 2.0, 1.0]).unwrap());
        assert_eq!(5.0 % m, Matrix::from_slice(&[0.0, 1.0, 1.0, 5.0]).unwrap());
        assert_eq!(1.0 - m, -(m - 1.0));

        let k = Matrix::<i32, 2>::from_slice(&[1, 2, 3, 4]).unwrap();
        assert_eq!(12 / k, Matrix::from_slice(&[12, 6, 4, 3]).unwrap());
        assert_eq!(6 & k, Matrix::from_slice(&[0, 2, 2, 4]).unwrap());
        assert_eq!(8 | k, Matrix::from_slice(&[9, 10, 11, 12]).unwrap());
        assert_eq!(1 ^ k, Matrix::from_slice(&[0, 3, 2, 5]).unwrap());
        assert_eq!(1 << k, Matrix::from_slice(&[2, 4, 8, 16]).unwrap());
        assert_eq!(64i64 >> Matrix::<i64, 2>::splat(3), Matrix::splat(8));
    }

    #[test]
    fn test_diagonal_and_outer_product() {
        let d = Matrix::<i32, 3>::diagonal(Vector::from_array([1, 2, 3]));
        assert_eq!(d.det(), 6);
        let o = Matrix::<i32, 2>::outer_product(Vector::from_array([1, 2]), Vector::from_array([3, 4]));
        assert_eq!(o.row(0), Vector::from_array([3, 4]));
        assert_eq!(o.row(1), Vector::from_array([6, 8]));
    }

    #[test]
    fn test_display() {
        let m = Matrix::<i32, 2>::from_rows([Vector::from_array([1, 2]), Vector::from_array([3, 4])]);
        assert_eq!(m.to_string(), format!("{:<16}2\n{:<16}4", 1, 3));
    }
}
