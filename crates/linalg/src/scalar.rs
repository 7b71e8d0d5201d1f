//! Element type accepted by every SW-DMD stage.

use std::fmt::Debug;

use nalgebra::RealField;
use ndarray::LinalgScalar;

/// Real floating-point scalar usable on both sides of the ndarray/nalgebra
/// boundary.
///
/// [`RealField`] is required by the SVD, [`LinalgScalar`] by ndarray's `dot`.
/// The blanket impl covers `f32` and `f64`, so callers never implement this
/// trait by hand.
pub trait Scalar: RealField + LinalgScalar + Copy + Debug {}

impl<T> Scalar for T where T: RealField + LinalgScalar + Copy + Debug {}
