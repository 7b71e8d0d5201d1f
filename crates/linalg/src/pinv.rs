//! Moore-Penrose pseudo-inverse via singular value decomposition.
//!
//! For `A = U Σ Vᵀ` the pseudo-inverse is `A⁺ = V Σ⁺ Uᵀ`, where `Σ⁺` inverts
//! every singular value above `rcond * σ_max` and zeroes the rest. This gives
//! the minimum-norm least-squares solution for rectangular and rank-deficient
//! matrices alike.

use nalgebra::SVD;
use ndarray::{Array1, Array2, ArrayView2};

use crate::convert::{to_array2, to_dmatrix};
use crate::error::LinalgError;
use crate::scalar::Scalar;

/// Default relative cutoff for small singular values.
pub const DEFAULT_RCOND: f64 = 1e-15;

/// Implicit-shift QR sweeps allowed per matrix dimension before giving up.
const SVD_SWEEPS_PER_DIM: usize = 100;

/// Result of [`pseudo_inverse()`].
#[derive(Clone, Debug)]
pub struct PseudoInverse<T> {
    inverse: Array2<T>,
    singular_values: Array1<T>,
    rank: usize,
}

impl<T: Scalar> PseudoInverse<T> {
    /// Returns `A⁺`, shaped `(cols, rows)` of the input.
    pub fn inverse(&self) -> &Array2<T> {
        &self.inverse
    }

    /// Consumes the result and returns `A⁺`.
    pub fn into_inverse(self) -> Array2<T> {
        self.inverse
    }

    /// Singular values of the input, in the order nalgebra produced them.
    pub fn singular_values(&self) -> &Array1<T> {
        &self.singular_values
    }

    /// Number of singular values above the cutoff (numerical rank).
    pub fn rank(&self) -> usize {
        self.rank
    }
}

/// Computes the Moore-Penrose pseudo-inverse of `a`.
///
/// Singular values `<= rcond * σ_max` are treated as zero. An all-zero matrix
/// has rank 0 and a zero pseudo-inverse.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`LinalgError::InvalidTolerance`] | `rcond` negative or non-finite |
/// | [`LinalgError::EmptyMatrix`] | `a` has a zero-length dimension |
/// | [`LinalgError::NonFiniteMatrix`] | `a` contains NaN or infinity |
/// | [`LinalgError::SvdNotConverged`] | SVD iteration limit reached |
pub fn pseudo_inverse<T: Scalar>(
    a: ArrayView2<'_, T>,
    rcond: f64,
) -> Result<PseudoInverse<T>, LinalgError> {
    if !rcond.is_finite() || rcond < 0.0 {
        return Err(LinalgError::InvalidTolerance { value: rcond });
    }
    let (rows, cols) = a.dim();
    if rows == 0 || cols == 0 {
        return Err(LinalgError::EmptyMatrix { rows, cols });
    }
    if a.iter().any(|x| !x.is_finite()) {
        return Err(LinalgError::NonFiniteMatrix);
    }

    let max_niter = SVD_SWEEPS_PER_DIM * rows.max(cols);
    let svd = SVD::try_new(to_dmatrix(a), true, true, T::default_epsilon(), max_niter)
        .ok_or(LinalgError::SvdNotConverged { rows, cols })?;

    let sigma_max = svd
        .singular_values
        .iter()
        .fold(T::zero(), |acc, &s| if s > acc { s } else { acc });
    let cutoff = nalgebra::convert::<f64, T>(rcond) * sigma_max;

    let singular_values: Array1<T> = svd.singular_values.iter().copied().collect();
    let rank = singular_values.iter().filter(|&&s| s > cutoff).count();

    let inverse = svd
        .pseudo_inverse(cutoff)
        .map_err(|reason| LinalgError::PseudoInverseFailed {
            reason: reason.to_string(),
        })?;

    Ok(PseudoInverse {
        inverse: to_array2(&inverse),
        singular_values,
        rank,
    })
}
