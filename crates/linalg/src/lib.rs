//! # swdmd-linalg
//!
//! Dense linear algebra used by the SW-DMD operator fitter.
//!
//! Data flows through the workspace as [`ndarray`] arrays. The singular value
//! decomposition behind the pseudo-inverse comes from [`nalgebra`], so this
//! crate owns the conversion between the two representations.
//!
//! ```text
//!  ArrayView2<T> ──to_dmatrix──▶ DMatrix<T> ──SVD──▶ pinv ──to_array2──▶ Array2<T>
//! ```
//!
//! ## Quick start
//!
//! ```
//! use ndarray::array;
//! use swdmd_linalg::pseudo_inverse;
//!
//! let a = array![[1.0_f64, 2.0], [2.0, 4.0]];
//! let pinv = pseudo_inverse(a.view(), 1e-10).unwrap();
//! assert_eq!(pinv.rank(), 1);
//! assert_eq!(pinv.inverse().dim(), (2, 2));
//! ```

mod convert;
mod error;
mod norm;
mod pinv;
mod scalar;

pub use convert::{to_array2, to_dmatrix};
pub use error::LinalgError;
pub use norm::frobenius_norm;
pub use pinv::{DEFAULT_RCOND, PseudoInverse, pseudo_inverse};
pub use scalar::Scalar;
