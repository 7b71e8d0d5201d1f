//! Conversions between ndarray and nalgebra dense matrices.
//!
//! Both directions copy element by element so the memory layout of the
//! source (ndarray row-major views, nalgebra column-major storage) never
//! leaks into the result.

use nalgebra::DMatrix;
use ndarray::{Array2, ArrayView2};

use crate::scalar::Scalar;

/// Copies an ndarray view into a nalgebra [`DMatrix`] of the same shape.
pub fn to_dmatrix<T: Scalar>(a: ArrayView2<'_, T>) -> DMatrix<T> {
    let (rows, cols) = a.dim();
    DMatrix::from_fn(rows, cols, |i, j| a[[i, j]])
}

/// Copies a nalgebra [`DMatrix`] into an owned ndarray [`Array2`].
pub fn to_array2<T: Scalar>(m: &DMatrix<T>) -> Array2<T> {
    Array2::from_shape_fn(m.shape(), |(i, j)| m[(i, j)])
}
