use approx::assert_relative_eq;
use itera::root_finding::errors::FixedPointError;
use itera::root_finding::fixed_point::{fixed_point, FixedPointCfg};

type TestResult = Result<(), FixedPointError>;

#[test]
fn converges_to_dottie_number() -> TestResult {
    let g = |x: f64| x.cos();
    let cfg = FixedPointCfg::new().set_tol(1e-6)?;

    let res = fixed_point(g, 0.5, cfg)?;

    assert!(res.converged);
    assert!((res.root - 0.7390851332).abs() < 1e-6);
    assert_eq!(res.iterations, 34);
    Ok(())
}

#[test]
fn function_value_is_fixed_point_residual() -> TestResult {
    let g = |x: f64| x.cos();
    let cfg = FixedPointCfg::new().set_tol(1e-6)?;

    let res = fixed_point(g, 0.5, cfg)?;

    assert_eq!(res.function_value, (res.root - res.root.cos()).abs());
    assert!(res.function_value < 1e-6);
    Ok(())
}

#[test]
fn babylonian_map_finds_sqrt_3() -> TestResult {
    let g = |x: f64| 0.5 * (x + 3.0 / x);
    let cfg = FixedPointCfg::new().set_tol(1e-10)?;

    let res = fixed_point(g, 1.0, cfg)?;

    assert!(res.converged);
    assert_relative_eq!(res.root, 3.0_f64.sqrt(), max_relative = 1e-12);
    assert_eq!(res.iterations, 6);
    Ok(())
}

#[test]
fn converged_root_is_the_checked_iterate() -> TestResult {
    let g = |x: f64| x.cos();
    let cfg = FixedPointCfg::new().set_tol(1e-6)?;

    let res = fixed_point(g, 0.5, cfg)?;
    let last = res.last_step().expect("at least one iteration ran");

    assert_eq!(res.root, last.g_x);
    assert_eq!(res.error, last.error);
    Ok(())
}

#[test]
fn records_chain_through_the_iteration() -> TestResult {
    let g = |x: f64| x.cos();
    let cfg = FixedPointCfg::new().set_tol(1e-6)?;

    let res = fixed_point(g, 0.5, cfg)?;

    assert_eq!(res.iteration_data.len(), res.iterations);
    assert_eq!(res.iteration_data[0].x, 0.5);
    for pair in res.iteration_data.windows(2) {
        assert_eq!(pair[1].x, pair[0].g_x);
    }
    for step in &res.iteration_data {
        assert_eq!(step.error, (step.g_x - step.x).abs());
        assert!(step.error >= 0.0);
    }
    Ok(())
}

#[test]
fn divergent_map_exhausts_budget_without_error() -> TestResult {
    let g = |x: f64| 2.0 * x + 1.0;
    let cfg = FixedPointCfg::new().set_tol(1e-6)?.set_max_iterations(20)?;

    let res = fixed_point(g, 1.0, cfg)?;

    assert!(!res.converged);
    assert_eq!(res.iterations, 20);
    assert_eq!(res.iteration_data.len(), 20);
    Ok(())
}

#[test]
fn nan_map_exhausts_budget_without_panic() -> TestResult {
    let g = |_x: f64| f64::NAN;
    let cfg = FixedPointCfg::new().set_tol(1e-6)?.set_max_iterations(10)?;

    let res = fixed_point(g, 0.5, cfg)?;

    assert!(!res.converged);
    assert_eq!(res.iteration_data.len(), 10);
    assert!(res.root.is_nan());
    Ok(())
}

#[test]
fn invalid_guess_rejected() {
    let g = |x: f64| x.cos();
    let err = fixed_point(g, f64::INFINITY, FixedPointCfg::new()).unwrap_err();
    assert!(matches!(err, FixedPointError::InvalidGuess { .. }));
}
