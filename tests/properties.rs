use approx::assert_abs_diff_eq;
use nalgebra::DVector;

use compconv::convolution::convolutionengine::ConvolutionEngine;
use compconv::math::function::canonicalfunction::CanonicalFunction;
use compconv::math::function::namedfunction::NamedFunction;
use compconv::math::function::realfunction::RealFunction;
use compconv::verification::propertyverifier::PropertyVerifier;
use compconv::verification::testgrid::TestGrid;

const X_BOUNDS: (f64, f64) = (-3.0, 3.0);

fn verifier(sample_width: f64, test_points: usize) -> PropertyVerifier {
    let engine = ConvolutionEngine::new(sample_width, X_BOUNDS).unwrap();
    let test_grid = TestGrid::linspace(X_BOUNDS.0, X_BOUNDS.1, test_points).unwrap();
    PropertyVerifier::canonical(engine, test_grid)
}

#[test]
fn commutativity_holds_within_discretization_error() {
    let report = verifier(0.01, 50).check_commutativity().unwrap();
    assert_eq!(report.results().len(), 16);
    for result in report.results() {
        assert!(result.rmsd() < 1e-2, "{:?}: {}", result.functions(), result.rmsd());
    }
    assert!(report.mean_rmsd() < 5e-3, "mean rmsd {}", report.mean_rmsd());
}

#[test]
fn commutativity_error_shrinks_with_sample_width() {
    let coarse = verifier(0.05, 50).check_commutativity().unwrap();
    let fine = verifier(0.005, 50).check_commutativity().unwrap();
    assert!(fine.mean_rmsd() < coarse.mean_rmsd(), "{} !< {}", fine.mean_rmsd(), coarse.mean_rmsd());
}

#[test]
fn associativity_holds_within_discretization_error() {
    let report = verifier(0.02, 25).check_associativity().unwrap();
    assert_eq!(report.results().len(), 64);
    for result in report.results() {
        assert!(result.rmsd() < 2e-2, "{:?}: {}", result.functions(), result.rmsd());
    }
    assert!(report.mean_rmsd() < 1e-2, "mean rmsd {}", report.mean_rmsd());
}

#[test]
fn single_triple_associativity_at_fine_width() {
    let engine = ConvolutionEngine::new(0.01, X_BOUNDS).unwrap();
    let test_grid = TestGrid::linspace(X_BOUNDS.0, X_BOUNDS.1, 50).unwrap();
    let functions = vec![
        NamedFunction::canonical(CanonicalFunction::Rectangle),
        NamedFunction::canonical(CanonicalFunction::IsocelesTriangle),
    ];
    let report = PropertyVerifier::new(engine, functions, test_grid)
        .check_associativity()
        .unwrap();
    assert!(report.max_rmsd() < 1e-2, "max rmsd {}", report.max_rmsd());
}

#[test]
fn distributivity_is_exact_for_riemann_sums() {
    let report = verifier(0.01, 50).check_distributivity().unwrap();
    assert_eq!(report.results().len(), 64);
    assert!(report.max_rmsd() < 1e-12, "max rmsd {}", report.max_rmsd());
}

#[test]
fn scalar_and_array_evaluation_agree() {
    let engine = ConvolutionEngine::new(0.01, X_BOUNDS).unwrap();
    let gh = engine.convolve(&CanonicalFunction::RightTriangle, CanonicalFunction::Exponential);
    let f_gh = engine.convolve(&CanonicalFunction::Rectangle, gh);
    let x0 = 0.731;
    let xs = DVector::from_vec(vec![-1.0, x0, 2.2]);
    let ys = f_gh.values(&xs);
    assert_eq!(ys[1].to_bits(), f_gh.value(x0).to_bits());
}

#[test]
fn rectangle_self_convolution_end_to_end() {
    let engine = ConvolutionEngine::new(0.01, X_BOUNDS).unwrap();
    let rect = CanonicalFunction::Rectangle;
    let h = engine.convolve(&rect, rect);
    assert_abs_diff_eq!(h.value(0.0), 1.0, epsilon = 0.02);
    assert_abs_diff_eq!(h.value(0.5), 0.5, epsilon = 0.02);
    assert_abs_diff_eq!(h.value(1.0), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(h.value(2.0), 0.0, epsilon = 1e-12);

    let fine = ConvolutionEngine::new(0.001, X_BOUNDS).unwrap();
    assert_abs_diff_eq!(fine.convolve(&rect, rect).value(0.0), 1.0, epsilon = 3e-3);
}

#[test]
fn identity_deviation_shrinks_with_impulse_width() {
    let verifier = verifier(0.005, 50);
    let wide = verifier.check_identity(0.2).unwrap();
    let narrow = verifier.check_identity(0.02).unwrap();
    assert!(narrow.mean_rmsd() < wide.mean_rmsd());
    assert!(narrow.mean_rmsd() < 5e-2, "mean rmsd {}", narrow.mean_rmsd());
}

#[test]
fn coarse_sampling_surfaces_large_deviation_as_data() {
    let report = verifier(0.5, 50).check_commutativity().unwrap();
    assert!(report.mean_rmsd().is_finite());
    assert!(report.max_rmsd() > 1e-2);
}

#[test]
fn verify_all_reports_every_property() {
    let engine = ConvolutionEngine::new(0.05, X_BOUNDS).unwrap();
    let test_grid = TestGrid::linspace(-2.0, 2.0, 9).unwrap();
    let report = PropertyVerifier::canonical(engine, test_grid)
        .verify_all(Some(0.1))
        .unwrap();
    assert_eq!(report.commutativity().results().len(), 16);
    assert_eq!(report.associativity().results().len(), 64);
    assert_eq!(report.distributivity().results().len(), 64);
    assert_eq!(report.identity().unwrap().results().len(), 4);
    assert_eq!(report.test_grid_len(), 9);
    assert_eq!(report.x_bounds(), X_BOUNDS);
}
