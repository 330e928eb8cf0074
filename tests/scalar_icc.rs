//! Pinned reference values for the scalar ICC.

use shape_icc::{icc, icc_with_stats, DegenerateTerm, IccError, IccEstimator, MeasurementMatrix, VarianceDecomposition};

/// Shrout & Fleiss (1979), Table 2: 6 targets rated by 4 judges.
fn shrout_fleiss() -> MeasurementMatrix {
    MeasurementMatrix::from_rows(&[
        [9.0, 2.0, 5.0, 8.0],
        [6.0, 1.0, 3.0, 2.0],
        [8.0, 4.0, 6.0, 8.0],
        [7.0, 1.0, 2.0, 6.0],
        [10.0, 5.0, 6.0, 9.0],
        [6.0, 2.0, 4.0, 7.0],
    ])
    .unwrap()
}

fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() < tol,
        "{}: expected {}, got {}",
        what,
        expected,
        actual
    );
}

#[test]
fn additive_fixture_decomposition() {
    let m = MeasurementMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();

    assert_eq!(m.rater_means().as_slice(), &[3.0, 4.0]);
    assert_eq!(m.subject_means().as_slice(), &[1.5, 3.5, 5.5]);
    assert_eq!(m.grand_mean(), 3.5);

    let ms = IccEstimator::new().mean_squares(&m).unwrap();
    assert_close(ms.ss, 17.5, 1e-12, "SS");
    assert_close(ms.msr, 8.0, 1e-12, "MSR");
    assert_close(ms.msc, 1.5, 1e-12, "MSC");
    assert_close(ms.mse, 0.0, 1e-12, "MSE");

    assert_close(icc(&m).unwrap(), 0.888888888888889, 1e-9, "ICC");
}

#[test]
fn additive_fixture_has_no_f_test() {
    let m = MeasurementMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
    let err = icc_with_stats(&m).unwrap_err();
    assert_eq!(err, IccError::Degenerate(DegenerateTerm::FValueDenominator));
}

#[test]
fn shrout_fleiss_reference() {
    let result = icc_with_stats(&shrout_fleiss()).unwrap();

    assert_close(result.mean_squares.ss, 168.95833333333337, 1e-9, "SS");
    assert_close(result.mean_squares.msr, 11.241666666666669, 1e-9, "MSR");
    assert_close(result.mean_squares.msc, 32.486111111111114, 1e-9, "MSC");
    assert_close(result.mean_squares.mse, 1.0194444444444457, 1e-9, "MSE");

    assert_close(result.icc, 0.289763779527559, 1e-9, "ICC");
    assert_close(result.f_value, 11.027247956403258, 1e-7, "F");
    assert_close(result.lower_bound, 0.018786513374712124, 1e-6, "lower");
    assert_close(result.upper_bound, 0.7610843696489525, 1e-6, "upper");
    assert!(result.bounds_bracket_estimate());
}

#[test]
fn high_agreement_reference() {
    let m = MeasurementMatrix::from_rows(&[
        [1.0, 1.2, 0.9],
        [2.1, 2.0, 2.3],
        [3.2, 2.9, 3.1],
        [3.9, 4.2, 4.0],
        [5.1, 4.8, 5.3],
    ])
    .unwrap();
    let (icc, f, lower, upper) = icc_with_stats(&m).unwrap().as_tuple();

    assert_close(icc, 0.9874883535205641, 1e-9, "ICC");
    assert_close(f, 207.0833333333286, 1e-6, "F");
    assert_close(lower, 0.943205521279732, 1e-6, "lower");
    assert_close(upper, 0.9985833545272029, 1e-6, "upper");
}

#[test]
fn plain_and_full_entry_points_agree() {
    let m = shrout_fleiss();
    assert_eq!(icc(&m).unwrap(), icc_with_stats(&m).unwrap().icc);
}

#[test]
fn minimum_design_two_by_two() {
    let m = MeasurementMatrix::from_row_slice(2, 2, &[1.0, 2.0, 4.0, 3.5]).unwrap();
    let value = icc(&m).unwrap();
    assert!(value.is_finite());
}

#[test]
fn single_subject_is_degenerate() {
    let m = MeasurementMatrix::from_row_slice(1, 3, &[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(m.subjects(), 1);
    assert_eq!(
        icc(&m).unwrap_err(),
        IccError::Degenerate(DegenerateTerm::SubjectDegreesOfFreedom)
    );
}

#[test]
fn single_rater_is_degenerate() {
    let m = MeasurementMatrix::from_row_slice(4, 1, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(
        icc_with_stats(&m).unwrap_err(),
        IccError::Degenerate(DegenerateTerm::RaterDegreesOfFreedom)
    );
}

#[test]
fn constant_ratings_are_degenerate() {
    let m = MeasurementMatrix::from_row_slice(3, 3, &[2.5; 9]).unwrap();
    assert_eq!(
        icc(&m).unwrap_err(),
        IccError::Degenerate(DegenerateTerm::CoefficientDenominator)
    );
}

#[test]
fn null_correlation_changes_only_f() {
    let m = shrout_fleiss();
    let base = IccEstimator::new().analyze(&m).unwrap();
    let shifted = IccEstimator::new().null_correlation(0.1).analyze(&m).unwrap();

    assert_eq!(base.icc, shifted.icc);
    assert_eq!(base.lower_bound, shifted.lower_bound);
    assert_eq!(base.upper_bound, shifted.upper_bound);
    assert!(shifted.f_value < base.f_value);
}

#[test]
fn wider_interval_at_higher_confidence() {
    let m = shrout_fleiss();
    let ci90 = IccEstimator::new().confidence(0.90).analyze(&m).unwrap();
    let ci99 = IccEstimator::new().confidence(0.99).analyze(&m).unwrap();

    assert_close(ci90.lower_bound, 0.04290119154054006, 1e-6, "lower 90%");
    assert_close(ci90.upper_bound, 0.6910706066183562, 1e-6, "upper 90%");
    assert!(ci99.lower_bound < ci90.lower_bound);
    assert!(ci99.upper_bound > ci90.upper_bound);
}

#[test]
fn statistics_do_not_depend_on_measurement_scale() {
    let base = icc_with_stats(&shrout_fleiss()).unwrap();

    for factor in [1e100, 1e-100] {
        let scaled = MeasurementMatrix::new(shrout_fleiss().into_inner() * factor).unwrap();
        let result = icc_with_stats(&scaled)
            .unwrap_or_else(|err| panic!("scale {}: {}", factor, err));

        assert_close(result.icc, base.icc, 1e-9, "ICC");
        assert_close(result.f_value, base.f_value, 1e-7, "F");
        assert_close(result.lower_bound, base.lower_bound, 1e-9, "lower");
        assert_close(result.upper_bound, base.upper_bound, 1e-9, "upper");
    }
}
