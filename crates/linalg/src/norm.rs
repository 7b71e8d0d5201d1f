use ndarray::ArrayView2;

use crate::scalar::Scalar;

/// Frobenius norm `sqrt(sum(a_ij^2))`. Returns zero for an empty matrix.
pub fn frobenius_norm<T: Scalar>(a: ArrayView2<'_, T>) -> T {
    a.iter().fold(T::zero(), |acc, &x| acc + x * x).sqrt()
}
