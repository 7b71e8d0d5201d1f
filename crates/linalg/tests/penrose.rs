//! Moore-Penrose conditions on seeded random matrices.

use approx::assert_abs_diff_eq;
use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use swdmd_linalg::{DEFAULT_RCOND, pseudo_inverse};

fn random_matrix(rows: usize, cols: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    Array2::from_shape_fn((rows, cols), |_| normal.sample(&mut rng))
}

fn assert_matrix_close(a: &Array2<f64>, b: &Array2<f64>, tol: f64) {
    assert_eq!(a.dim(), b.dim());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_abs_diff_eq!(*x, *y, epsilon = tol);
    }
}

/// Checks the four Penrose equations for `a` and its pseudo-inverse `p`.
fn assert_penrose(a: &Array2<f64>, p: &Array2<f64>) {
    let tol = 1e-9;
    // 1. A A⁺ A = A
    assert_matrix_close(&a.dot(p).dot(a), a, tol);
    // 2. A⁺ A A⁺ = A⁺
    assert_matrix_close(&p.dot(a).dot(p), p, tol);
    // 3. (A A⁺)ᵀ = A A⁺
    let ap = a.dot(p);
    assert_matrix_close(&ap.t().to_owned(), &ap, tol);
    // 4. (A⁺ A)ᵀ = A⁺ A
    let pa = p.dot(a);
    assert_matrix_close(&pa.t().to_owned(), &pa, tol);
}

#[test]
fn tall_full_rank() {
    let a = random_matrix(8, 3, 1);
    let pinv = pseudo_inverse(a.view(), DEFAULT_RCOND).unwrap();
    assert_eq!(pinv.rank(), 3);
    assert_eq!(pinv.inverse().dim(), (3, 8));
    assert_penrose(&a, pinv.inverse());
}

#[test]
fn wide_full_rank() {
    let a = random_matrix(3, 9, 2);
    let pinv = pseudo_inverse(a.view(), DEFAULT_RCOND).unwrap();
    assert_eq!(pinv.rank(), 3);
    assert_eq!(pinv.inverse().dim(), (9, 3));
    assert_penrose(&a, pinv.inverse());
}

#[test]
fn rank_deficient_product() {
    // (6 x 2) · (2 x 5) has rank 2.
    let a = random_matrix(6, 2, 3).dot(&random_matrix(2, 5, 4));
    let pinv = pseudo_inverse(a.view(), 1e-10).unwrap();
    assert_eq!(pinv.rank(), 2);
    assert_penrose(&a, pinv.inverse());
}

#[test]
fn least_squares_minimum_norm() {
    // Underdetermined system: x = A⁺ b solves A x = b with minimal ||x||.
    let a = random_matrix(2, 5, 5);
    let b = ndarray::array![1.0, -2.0];
    let pinv = pseudo_inverse(a.view(), DEFAULT_RCOND).unwrap();
    let x = pinv.inverse().dot(&b);
    let reproduced = a.dot(&x);
    assert_abs_diff_eq!(reproduced[0], 1.0, epsilon = 1e-10);
    assert_abs_diff_eq!(reproduced[1], -2.0, epsilon = 1e-10);

    // Any null-space perturbation increases the norm.
    let projector = Array2::<f64>::eye(5) - pinv.inverse().dot(&a);
    let z = projector.dot(&ndarray::array![1.0, 0.5, -0.25, 2.0, 0.0]);
    let norm = |v: &ndarray::Array1<f64>| v.dot(v).sqrt();
    assert!(norm(&(&x + &z)) > norm(&x));
}

#[test]
fn singular_values_reported() {
    let a = ndarray::array![[3.0, 0.0], [0.0, 0.0], [0.0, 4.0]];
    let pinv = pseudo_inverse(a.view(), DEFAULT_RCOND).unwrap();
    let mut sv = pinv.singular_values().to_vec();
    sv.sort_by(|x, y| y.partial_cmp(x).unwrap());
    assert_abs_diff_eq!(sv[0], 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(sv[1], 3.0, epsilon = 1e-12);
}
