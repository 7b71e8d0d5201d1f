//! End-to-end scenarios for `sliding_window_dmd`.

use approx::assert_abs_diff_eq;
use ndarray::{Array2, array, s};
use swdmd_core::{DmdError, SwDmdConfig, sliding_window_dmd, window_embed};
use swdmd_linalg::pseudo_inverse;

/// Cutoff for histories that are exactly rank deficient, where SVD round-off
/// would otherwise leave spurious singular values above `DEFAULT_RCOND`.
const RANK_DEFICIENT_RCOND: f64 = 1e-10;

/// 10 x 2 history of increasing integers: [[0, 1], [2, 3], ..., [18, 19]].
fn integer_ramp() -> Array2<f64> {
    Array2::from_shape_fn((10, 2), |(t, p)| (2 * t + p) as f64)
}

#[test]
fn integer_ramp_window_two() {
    let params = integer_ramp();
    let config = SwDmdConfig::new(2, 0, 6, 3).with_rcond(RANK_DEFICIENT_RCOND);
    let result = sliding_window_dmd(params.view(), &config).unwrap();

    let pred = result.predictions();
    assert_eq!(pred.dim(), (2, 3));
    let expected = array![[16.0, 18.0, 20.0], [17.0, 19.0, 21.0]];
    for (got, want) in pred.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*got, *want, epsilon = 1e-8);
    }
}

#[test]
fn integer_ramp_matches_hand_computed_operator() {
    let params = integer_ramp();
    let config = SwDmdConfig::new(2, 0, 6, 3).with_rcond(RANK_DEFICIENT_RCOND);
    let result = sliding_window_dmd(params.view(), &config).unwrap();
    let k = result.operator().k();
    assert_eq!(k.dim(), (2, 4));

    // X: windowed columns 0..6, X_prime: raw rows 2..8 transposed.
    let windowed = window_embed(params.view(), 2).unwrap();
    let x = windowed.slice(s![.., 0..6]);
    let x_prime = params.slice(s![2..8, ..]).reversed_axes();
    let pinv = pseudo_inverse(x, RANK_DEFICIENT_RCOND).unwrap();
    assert_eq!(pinv.rank(), 2);
    let hand_k = x_prime.dot(pinv.inverse());
    for (got, want) in k.iter().zip(hand_k.iter()) {
        assert_abs_diff_eq!(*got, *want, epsilon = 1e-9);
    }
    // The ramp is reproduced exactly on the fitting range.
    for (got, want) in k.dot(&x).iter().zip(x_prime.iter()) {
        assert_abs_diff_eq!(*got, *want, epsilon = 1e-9);
    }

    // Rollout by hand.
    let seed = windowed.column(6).to_owned();
    let p1 = k.dot(&seed);
    let w2 = array![seed[2], seed[3], p1[0], p1[1]];
    let p2 = k.dot(&w2);
    let w3 = array![p1[0], p1[1], p2[0], p2[1]];
    let p3 = k.dot(&w3);

    let pred = result.predictions();
    for (col, p) in [p1, p2, p3].iter().enumerate() {
        assert_abs_diff_eq!(pred[[0, col]], p[0], epsilon = 1e-9);
        assert_abs_diff_eq!(pred[[1, col]], p[1], epsilon = 1e-9);
    }
}

#[test]
fn f32_input_gives_f32_output() {
    let params = Array2::from_shape_fn((10, 2), |(t, p)| (2 * t + p) as f32);
    let config = SwDmdConfig::new(2, 0, 6, 3).with_rcond(1e-4);
    let result = sliding_window_dmd(params.view(), &config).unwrap();
    let pred: &Array2<f32> = result.predictions();
    assert_abs_diff_eq!(pred[[0, 0]], 16.0_f32, epsilon = 1e-2);
    assert_abs_diff_eq!(pred[[1, 2]], 21.0_f32, epsilon = 1e-2);
}

#[test]
fn deterministic() {
    let params = Array2::from_shape_fn((30, 3), |(t, p)| {
        let t = t as f64;
        (0.3 * t + p as f64).sin() * 0.97_f64.powf(t)
    });
    let config = SwDmdConfig::new(3, 2, 20, 5).with_rcond(RANK_DEFICIENT_RCOND);
    let a = sliding_window_dmd(params.view(), &config).unwrap();
    let b = sliding_window_dmd(params.view(), &config).unwrap();
    assert_eq!(a.predictions(), b.predictions());
    assert_eq!(a.operator().k(), b.operator().k());
}

#[test]
fn single_step_prediction() {
    let params = integer_ramp();
    let config = SwDmdConfig::new(2, 0, 6, 1).with_rcond(RANK_DEFICIENT_RCOND);
    let result = sliding_window_dmd(params.view(), &config).unwrap();
    assert_eq!(result.predictions().dim(), (2, 1));
    assert_abs_diff_eq!(result.predictions()[[0, 0]], 16.0, epsilon = 1e-8);
    assert_abs_diff_eq!(result.predictions()[[1, 0]], 17.0, epsilon = 1e-8);
}

#[test]
fn constant_history_is_rank_deficient_not_an_error() {
    let params = Array2::from_shape_fn((8, 3), |(_, p)| (p + 1) as f64);
    let config = SwDmdConfig::new(2, 0, 5, 4).with_rcond(RANK_DEFICIENT_RCOND);
    let result = sliding_window_dmd(params.view(), &config).unwrap();
    assert_eq!(result.operator().rank(), 1);
    for col in result.predictions().columns() {
        assert_abs_diff_eq!(col[0], 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(col[1], 2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(col[2], 3.0, epsilon = 1e-10);
    }
}

#[test]
fn zero_history_predicts_zero() {
    let params = Array2::<f64>::zeros((6, 2));
    let result = sliding_window_dmd(params.view(), &SwDmdConfig::new(1, 0, 3, 2)).unwrap();
    assert_eq!(result.operator().rank(), 0);
    assert!(result.predictions().iter().all(|&x| x == 0.0));
}

#[test]
fn range_errors_fail_fast() {
    let params = integer_ramp();
    let cases = [
        (SwDmdConfig::new(0, 0, 6, 3), "window"),
        (SwDmdConfig::new(11, 0, 1, 3), "too large"),
        (SwDmdConfig::new(2, 6, 6, 3), "empty"),
        (SwDmdConfig::new(2, 0, 9, 3), "bounds"),
        (SwDmdConfig::new(2, 0, usize::MAX, 3), "bounds"),
        (SwDmdConfig::new(2, 0, 6, 0), "pred"),
    ];
    for (config, label) in cases {
        let err = sliding_window_dmd(params.view(), &config).unwrap_err();
        let ok = match label {
            "window" => matches!(err, DmdError::InvalidWindowSize { .. }),
            "too large" => matches!(err, DmdError::WindowTooLarge { .. }),
            "empty" => matches!(err, DmdError::EmptyTimeRange { .. }),
            "bounds" => matches!(err, DmdError::TimeRangeOutOfBounds { .. }),
            _ => matches!(err, DmdError::InvalidPredictionLength),
        };
        assert!(ok, "{label}: unexpected error {err:?}");
    }
}
