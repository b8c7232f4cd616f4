//! Integration tests for module exports.
//!
//! Verifies that the public modules and types are reachable via absolute
//! paths and compose the way downstream crates use them.

/// Surfaces are reachable from both the module and the re-export.
#[test]
fn test_surface_exports() {
    use pricer_core::market_data::surfaces::{
        FlatVol, ParametricVol, VolSurfaceEnum, VolatilitySurface, MIN_TIME_SCALING_EXPIRY,
        VOL_FLOOR,
    };
    use pricer_core::market_data::MarketDataError;

    let flat = FlatVol::new(0.2_f64).unwrap();
    let parametric = ParametricVol::new(0.2_f64, -0.1, 0.2).unwrap();

    assert_eq!(flat.volatility(100.0, 1.0, 100.0), 0.2);
    assert!(parametric.volatility(100.0, MIN_TIME_SCALING_EXPIRY, 100.0) >= VOL_FLOOR);

    let wrapped: VolSurfaceEnum<f64> = parametric.into();
    assert_eq!(
        wrapped.volatility(90.0, 0.5, 100.0),
        parametric.volatility(90.0, 0.5, 100.0)
    );

    let err: MarketDataError = FlatVol::new(-1.0_f64).unwrap_err();
    assert!(err.to_string().contains("-1"));
}

/// A surface shared by reference across threads must be usable generically.
#[test]
fn test_surface_shared_across_threads() {
    use pricer_core::market_data::surfaces::{ParametricVol, VolatilitySurface};

    fn lookup<S: VolatilitySurface<f64> + Sync>(surface: &S) -> Vec<f64> {
        std::thread::scope(|scope| {
            let handles: Vec<_> = [80.0, 100.0, 120.0]
                .into_iter()
                .map(|strike| scope.spawn(move || surface.volatility(strike, 1.0, 100.0)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        })
    }

    let surface = ParametricVol::new(0.25_f64, -0.2, 0.3).unwrap();
    let vols = lookup(&surface);

    assert_eq!(vols.len(), 3);
    assert!(vols[0] > vols[1], "put skew should lift low strikes");
}

/// Solvers and their error types are reachable via absolute paths.
#[test]
fn test_solver_exports() {
    use pricer_core::math::solvers::{BisectionSolver, NewtonRaphsonSolver, SolverConfig};
    use pricer_core::types::SolverError;

    let newton = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 50));
    let root = newton
        .find_root(|x: f64| x * x - 9.0, |x: f64| 2.0 * x, 1.0)
        .unwrap();
    assert!((root - 3.0).abs() < 1e-10);

    let bisection = BisectionSolver::new(SolverConfig::new(1e-12, 200));
    let root = bisection.find_root(|x: f64| x * x - 9.0, 0.0, 5.0).unwrap();
    assert!((root - 3.0).abs() < 1e-9);

    let err = bisection.find_root(|x: f64| x, 1.0, 1.0).unwrap_err();
    assert!(matches!(err, SolverError::InvalidBracket { .. }));
}
