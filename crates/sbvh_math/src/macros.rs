//! Operator plumbing shared by `Vector` and `Matrix`.
//!
//! Both containers expose `map` and `zip_map`; every elementwise operator is
//! one of those two applied to the matching `core::ops` function.

/// `$Op<Self>`, `$Op<T>` and both assigning forms, all elementwise.
macro_rules! elementwise_binop {
    ($ty:ident: $bound:ident; $($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident);* $(;)?) => {$(
        impl<T: $bound, const L: usize> core::ops::$Op for $ty<T, L> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                self.zip_map(rhs, core::ops::$Op::$op)
            }
        }

        impl<T: $bound, const L: usize> core::ops::$OpAssign for $ty<T, L> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = core::ops::$Op::$op(*self, rhs);
            }
        }

        scalar_binop!($ty: $bound; $Op::$op, $OpAssign::$op_assign);
    )*};
}

/// `$Op<T>` and `$OpAssign<T>`: the scalar is applied to every element.
macro_rules! scalar_binop {
    ($ty:ident: $bound:ident; $($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident);* $(;)?) => {$(
        impl<T: $bound, const L: usize> core::ops::$Op<T> for $ty<T, L> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: T) -> Self {
                self.map(|a| core::ops::$Op::$op(a, rhs))
            }
        }

        impl<T: $bound, const L: usize> core::ops::$OpAssign<T> for $ty<T, L> {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                *self = core::ops::$Op::$op(*self, rhs);
            }
        }
    )*};
}

/// Scalar on the left: `a op v` applies `a op v[i]` to every element.
macro_rules! scalar_lhs_binop {
    (@one $ty:ident; $t:ty; [$($Op:ident::$op:ident),*]) => {$(
        impl<const L: usize> core::ops::$Op<$ty<$t, L>> for $t {
            type Output = $ty<$t, L>;

            #[inline]
            fn $op(self, rhs: $ty<$t, L>) -> $ty<$t, L> {
                rhs.map(|b| core::ops::$Op::$op(self, b))
            }
        }
    )*};
    ($ty:ident; [$($t:ty),*]; $ops:tt) => {$(
        scalar_lhs_binop!(@one $ty; $t; $ops);
    )*};
}
