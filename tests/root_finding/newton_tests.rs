use approx::assert_relative_eq;
use itera::root_finding::errors::NewtonError;
use itera::root_finding::newton::{newton_raphson, NewtonCfg};

type TestResult = Result<(), NewtonError>;

#[test]
fn finds_real_root_of_depressed_cubic() -> TestResult {
    let f = |x: f64| x * x * x - x - 1.0;
    let df = |x: f64| 3.0 * x * x - 1.0;
    let cfg = NewtonCfg::new().set_tol(1e-8)?;

    let res = newton_raphson(f, df, 1.5, cfg)?;

    assert!(res.converged);
    assert_relative_eq!(res.root, 1.3247179572, max_relative = 1e-9);
    assert_eq!(res.iterations, 5);
    assert!(res.function_value.abs() < 1e-10);
    Ok(())
}

#[test]
fn quadratic_convergence_stays_within_budget() -> TestResult {
    let f = |x: f64| x * x - 4.0;
    let df = |x: f64| 2.0 * x;
    let cfg = NewtonCfg::new().set_tol(1e-10)?;

    let res = newton_raphson(f, df, 1.5, cfg)?;

    assert!(res.converged);
    assert!(res.iterations <= 6);
    assert_relative_eq!(res.root, 2.0, max_relative = 1e-10);
    Ok(())
}

#[test]
fn records_reproduce_the_newton_update() -> TestResult {
    let f = |x: f64| x * x * x - x - 1.0;
    let df = |x: f64| 3.0 * x * x - 1.0;
    let cfg = NewtonCfg::new().set_tol(1e-8)?;

    let res = newton_raphson(f, df, 1.5, cfg)?;

    for step in &res.iteration_data {
        assert_eq!(step.x_next, step.x - step.f_x / step.df_x);
        assert_eq!(step.error, (step.x_next - step.x).abs());
    }
    Ok(())
}

#[test]
fn consecutive_records_chain() -> TestResult {
    let f = |x: f64| x * x - 4.0;
    let df = |x: f64| 2.0 * x;
    let cfg = NewtonCfg::new().set_tol(1e-10)?;

    let res = newton_raphson(f, df, 1.5, cfg)?;

    for pair in res.iteration_data.windows(2) {
        assert_eq!(pair[1].x, pair[0].x_next);
        assert_eq!(pair[1].iteration, pair[0].iteration + 1);
    }
    Ok(())
}

#[test]
fn converged_root_is_the_checked_iterate() -> TestResult {
    let f = |x: f64| x * x - 4.0;
    let df = |x: f64| 2.0 * x;
    let cfg = NewtonCfg::new().set_tol(1e-10)?;

    let res = newton_raphson(f, df, 1.5, cfg)?;
    let last = res.last_step().expect("at least one iteration ran");

    assert_eq!(res.root, last.x_next);
    assert_eq!(res.error, last.error);
    assert_eq!(res.function_value, f(res.root));
    Ok(())
}

#[test]
fn iteration_limit_returns_partial_result() -> TestResult {
    let f = |x: f64| x * x - 4.0;
    let df = |x: f64| 2.0 * x;
    let cfg = NewtonCfg::new().set_tol(1e-10)?.set_max_iterations(1)?;

    let res = newton_raphson(f, df, 100.0, cfg)?;

    assert!(!res.converged);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.iteration_data.len(), 1);
    // one step from 100: 100 - 9996/200
    assert_relative_eq!(res.root, 50.02, max_relative = 1e-12);
    Ok(())
}

#[test]
fn small_derivative_rejected() -> TestResult {
    let f = |_x: f64| 1.0;
    let df = |_x: f64| 0.0;
    let cfg = NewtonCfg::new().set_tol(1e-8)?;

    let err = newton_raphson(f, df, 1.0, cfg).unwrap_err();
    assert!(matches!(err, NewtonError::SmallDerivative { x, dfx } if x == 1.0 && dfx == 0.0));
    Ok(())
}

#[test]
fn nearly_flat_derivative_rejected() -> TestResult {
    let f = |_x: f64| 1.0;
    let df = |_x: f64| 1e-13;
    let cfg = NewtonCfg::new().set_tol(1e-8)?;

    let err = newton_raphson(f, df, 2.0, cfg).unwrap_err();
    assert!(matches!(err, NewtonError::SmallDerivative { .. }));
    Ok(())
}

#[test]
fn small_derivative_mid_run_rejected() -> TestResult {
    let f = |_x: f64| 1.0;
    let mut calls = 0u32;
    let df = move |_x: f64| {
        calls += 1;
        if calls == 1 {
            1.0
        } else {
            0.0
        }
    };
    let cfg = NewtonCfg::new().set_tol(1e-10)?;

    let err = newton_raphson(f, df, 5.0, cfg).unwrap_err();
    assert!(matches!(err, NewtonError::SmallDerivative { x, .. } if x == 4.0));
    Ok(())
}

#[test]
fn invalid_guess_rejected() {
    let f = |x: f64| x;
    let df = |_x: f64| 1.0;
    let err = newton_raphson(f, df, f64::NAN, NewtonCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonError::InvalidGuess { x0 } if x0.is_nan()));
}
