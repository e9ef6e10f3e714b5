use approx::assert_abs_diff_eq;

use zerosum::algorithm::error::SolveError;
use zerosum::algorithm::game::{GameResult, solve_game};
use zerosum::algorithm::simplex::settings::Settings;
use zerosum::algorithm::simplex::strategy::pivot_rule::PivotRuleKind;
use zerosum::data::games::morra;
use zerosum::data::linear_algebra::matrix::DenseMatrix;
use zerosum::io::error::ImportError;
use zerosum::io::read_payoff_matrix;

use super::get_test_file_path;

fn read(name: &str) -> DenseMatrix<f64> {
    read_payoff_matrix(&get_test_file_path(name)).unwrap()
}

fn assert_equilibrium(payoff: &DenseMatrix<f64>, result: &GameResult<f64>) {
    for strategy in [result.strategy_x(), result.strategy_y()] {
        assert!(strategy.iter().all(|&probability| probability >= 0f64));
        assert_abs_diff_eq!(strategy.iter().sum::<f64>(), 1f64, epsilon = 1e-6);
    }
    for j in 0..payoff.nr_columns() {
        let column = payoff.column(j).unwrap();
        let expected = column.iter().zip(result.strategy_x()).map(|(a, x)| a * x).sum::<f64>();
        assert!(expected >= result.value() - 1e-6);
    }
    for row in payoff.rows() {
        let expected = row.iter().zip(result.strategy_y()).map(|(a, y)| a * y).sum::<f64>();
        assert!(expected <= result.value() + 1e-6);
    }
}

#[test]
fn lab() {
    let payoff = read("lab.txt");
    assert_eq!((payoff.nr_rows(), payoff.nr_columns()), (3, 3));

    let result = solve_game(&payoff, &Settings::default()).unwrap();
    assert_abs_diff_eq!(result.value(), 0f64, epsilon = 1e-9);
    assert_equilibrium(&payoff, &result);
}

#[test]
fn symmetric() {
    let payoff = read("symmetric.csv");

    for pivot_rule in [PivotRuleKind::LargestCoefficient, PivotRuleKind::FirstProfitable] {
        let settings = Settings::default().with_pivot_rule(pivot_rule);
        let result = solve_game(&payoff, &settings).unwrap();

        assert_abs_diff_eq!(result.value(), 2f64, epsilon = 1e-9);
        assert_abs_diff_eq!(result.strategy_x()[0], 0.5f64, epsilon = 1e-9);
        assert_abs_diff_eq!(result.strategy_y()[1], 0.5f64, epsilon = 1e-9);
    }
}

#[test]
fn morra_from_file() {
    let payoff = read("morra.txt");
    assert_eq!(payoff, morra(2));

    let result = solve_game(&payoff, &Settings::default()).unwrap();
    assert_abs_diff_eq!(result.value(), 0f64, epsilon = 1e-9);
    assert_equilibrium(&payoff, &result);
}

#[test]
fn single_precision() {
    let payoff = read_payoff_matrix::<f32>(&get_test_file_path("symmetric.csv")).unwrap();
    let settings = Settings::default().with_tolerance(1e-6f32);

    let result = solve_game(&payoff, &settings).unwrap();
    assert_abs_diff_eq!(result.value(), 2f32, epsilon = 1e-5);
}

#[test]
fn iteration_limit() {
    let settings = Settings::default().with_max_iterations(2);

    assert_eq!(
        solve_game(&read("lab.txt"), &settings),
        Err(SolveError::IterationLimitExceeded { limit: 2 }),
    );
}

#[test]
fn import_errors() {
    let result = read_payoff_matrix::<f64>(&get_test_file_path("ragged.txt"));
    assert!(matches!(result, Err(ImportError::Matrix(_))));

    match read_payoff_matrix::<f64>(&get_test_file_path("invalid.txt")) {
        Err(ImportError::Parse(error)) => assert_eq!(error.line_number(), Some(2)),
        other => panic!("unexpected result {:?}", other),
    }

    let result = read_payoff_matrix::<f64>(&get_test_file_path("missing.txt"));
    assert!(matches!(result, Err(ImportError::IO(_))));
}
