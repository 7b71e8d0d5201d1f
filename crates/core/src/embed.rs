//! Sliding-window (delay) embedding of a parameter history.

use ndarray::{Array2, ArrayView2};
use swdmd_linalg::Scalar;

use crate::error::DmdError;

/// Stacks `window_size` consecutive parameter vectors into each column.
///
/// `params` has shape `(num_iters, num_params)`. The result has shape
/// `(num_params * window_size, num_iters - window_size + 1)`, and column `t`
/// holds the raw vectors at times `t, t+1, …, t+window_size-1`, oldest block
/// first:
///
/// ```text
/// column t = [ params[t], params[t+1], …, params[t+window_size-1] ]ᵀ
/// ```
///
/// With `window_size = 1` the result is `params` transposed.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DmdError::EmptyData`] | `params` has no rows or no columns |
/// | [`DmdError::InvalidWindowSize`] | `window_size == 0` |
/// | [`DmdError::WindowTooLarge`] | `window_size > num_iters` |
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use swdmd_core::window_embed;
///
/// let params = array![[0.0, 1.0], [2.0, 3.0], [4.0, 5.0]];
/// let windowed = window_embed(params.view(), 2).unwrap();
/// assert_eq!(windowed, array![[0.0, 2.0], [1.0, 3.0], [2.0, 4.0], [3.0, 5.0]]);
/// ```
pub fn window_embed<T: Scalar>(
    params: ArrayView2<'_, T>,
    window_size: usize,
) -> Result<Array2<T>, DmdError> {
    let (num_iters, num_params) = params.dim();
    if num_iters == 0 || num_params == 0 {
        return Err(DmdError::EmptyData);
    }
    if window_size == 0 {
        return Err(DmdError::InvalidWindowSize { window_size });
    }
    if window_size > num_iters {
        return Err(DmdError::WindowTooLarge {
            window_size,
            num_iters,
        });
    }

    let n_windows = num_iters - window_size + 1;
    Ok(Array2::from_shape_fn(
        (num_params * window_size, n_windows),
        |(row, t)| params[[t + row / num_params, row % num_params]],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn ramp(num_iters: usize, num_params: usize) -> Array2<f64> {
        Array2::from_shape_fn((num_iters, num_params), |(t, p)| (t * num_params + p) as f64)
    }

    #[test]
    fn shape() {
        let params = ramp(10, 3);
        for w in 1..=10 {
            let windowed = window_embed(params.view(), w).unwrap();
            assert_eq!(windowed.dim(), (3 * w, 10 - w + 1));
        }
    }

    #[test]
    fn window_one_is_transpose() {
        let params = ramp(6, 2);
        let windowed = window_embed(params.view(), 1).unwrap();
        assert_eq!(windowed, params.t());
    }

    #[test]
    fn columns_stack_oldest_first() {
        let params = ramp(5, 2);
        let windowed = window_embed(params.view(), 3).unwrap();
        // Column 1 = rows 1, 2, 3 of params.
        assert_eq!(
            windowed.column(1).to_vec(),
            vec![2.0, 3.0, 4.0, 5.0, 6.0, 7.0]
        );
    }

    #[test]
    fn full_window_single_column() {
        let params = array![[1.0], [2.0], [3.0]];
        let windowed = window_embed(params.view(), 3).unwrap();
        assert_eq!(windowed, array![[1.0], [2.0], [3.0]]);
    }

    #[test]
    fn zero_window() {
        let params = ramp(4, 2);
        let err = window_embed(params.view(), 0).unwrap_err();
        assert!(matches!(err, DmdError::InvalidWindowSize { window_size: 0 }));
    }

    #[test]
    fn window_too_large() {
        let params = ramp(4, 2);
        let err = window_embed(params.view(), 5).unwrap_err();
        assert!(matches!(
            err,
            DmdError::WindowTooLarge {
                window_size: 5,
                num_iters: 4
            }
        ));
    }

    #[test]
    fn empty_params() {
        let params = Array2::<f64>::zeros((0, 3));
        let err = window_embed(params.view(), 1).unwrap_err();
        assert!(matches!(err, DmdError::EmptyData));
    }
}
