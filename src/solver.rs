//! Validated entry points: run one heuristic or compare several.

use log::{info, warn};

use crate::config::SolverConfig;
use crate::error::TransportError;
use crate::models::{Allocation, Method, TransportationProblem};
use crate::validation::ProblemValidator;

/// Solves `problem` with a single heuristic after checking balance.
///
/// # Errors
///
/// Returns [`TransportError::Imbalance`] without running the heuristic if
/// total supply and demand differ, or the heuristic's own error.
///
/// # Examples
///
/// ```
/// use u_transport::models::{Method, TransportationProblem};
/// use u_transport::{solve, SolverConfig};
///
/// let problem = TransportationProblem::new(
///     vec![15.0, 5.0],
///     vec![10.0, 10.0],
///     vec![vec![1.0, 2.0], vec![3.0, 4.0]],
/// ).unwrap();
///
/// let alloc = solve(&problem, Method::Russell, &SolverConfig::default()).unwrap();
/// assert_eq!(alloc.total_cost(), 40.0);
/// ```
pub fn solve(
    problem: &TransportationProblem,
    method: Method,
    config: &SolverConfig,
) -> Result<Allocation, TransportError> {
    let validator = ProblemValidator::new(config.tolerance());
    if let Err(err) = validator.validate(problem) {
        warn!("{method} not run: {err}");
        return Err(err);
    }
    run_checked(&validator, problem, method, config)
}

/// Runs every heuristic in `config.methods()` on the same problem.
///
/// Balance is checked once, up front; if it fails no heuristic runs.
///
/// # Examples
///
/// ```
/// use u_transport::models::{Method, TransportationProblem};
/// use u_transport::{compare, SolverConfig};
///
/// let problem = TransportationProblem::new(
///     vec![7.0, 9.0, 18.0],
///     vec![5.0, 8.0, 7.0, 14.0],
///     vec![
///         vec![19.0, 30.0, 50.0, 10.0],
///         vec![70.0, 30.0, 40.0, 60.0],
///         vec![40.0, 8.0, 70.0, 20.0],
///     ],
/// ).unwrap();
///
/// let comparison = compare(&problem, &SolverConfig::default()).unwrap();
/// assert_eq!(comparison.len(), 3);
/// assert_eq!(comparison.best().unwrap().method(), Method::Vogel);
/// ```
pub fn compare(
    problem: &TransportationProblem,
    config: &SolverConfig,
) -> Result<Comparison, TransportError> {
    let validator = ProblemValidator::new(config.tolerance());
    if let Err(err) = validator.validate(problem) {
        warn!("comparison not run: {err}");
        return Err(err);
    }

    let results = config
        .methods()
        .iter()
        .map(|&method| run_checked(&validator, problem, method, config))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Comparison { results })
}

fn run_checked(
    validator: &ProblemValidator,
    problem: &TransportationProblem,
    method: Method,
    config: &SolverConfig,
) -> Result<Allocation, TransportError> {
    let allocation = method.run(problem, config)?;
    let violations = validator.evaluate(problem, &allocation);
    if !violations.is_empty() {
        warn!("{method} allocation has violations: {violations:?}");
    }
    info!(
        "{method}: cost {} in {} steps",
        allocation.total_cost(),
        allocation.steps()
    );
    Ok(allocation)
}

/// Side-by-side results of several heuristics on one problem.
#[derive(Debug, Clone)]
pub struct Comparison {
    results: Vec<Allocation>,
}

impl Comparison {
    /// Result of `method`, if it was run.
    pub fn get(&self, method: Method) -> Option<&Allocation> {
        self.results.iter().find(|a| a.method() == method)
    }

    /// Results in the order they were run.
    pub fn iter(&self) -> impl Iterator<Item = &Allocation> {
        self.results.iter()
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if no heuristic was run.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Cheapest result; the earliest wins ties.
    pub fn best(&self) -> Option<&Allocation> {
        self.results.iter().fold(None, |best: Option<&Allocation>, a| match best {
            Some(b) if b.total_cost() <= a.total_cost() => Some(b),
            _ => Some(a),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::random_balanced;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn vam_example() -> TransportationProblem {
        TransportationProblem::new(
            vec![7.0, 9.0, 18.0],
            vec![5.0, 8.0, 7.0, 14.0],
            vec![
                vec![19.0, 30.0, 50.0, 10.0],
                vec![70.0, 30.0, 40.0, 60.0],
                vec![40.0, 8.0, 70.0, 20.0],
            ],
        )
        .expect("valid")
    }

    #[test]
    fn test_single_cell_all_methods() {
        let problem =
            TransportationProblem::new(vec![10.0], vec![10.0], vec![vec![5.0]]).expect("valid");
        let comparison = compare(&problem, &SolverConfig::default()).expect("balanced");
        for alloc in comparison.iter() {
            assert_eq!(alloc.to_rows(), vec![vec![10.0]]);
            assert_eq!(alloc.total_cost(), 50.0);
        }
    }

    #[test]
    fn test_compare_costs() {
        let comparison = compare(&vam_example(), &SolverConfig::default()).expect("balanced");
        let cost = |m| comparison.get(m).expect("run").total_cost();
        assert_eq!(cost(Method::NorthWest), 1015.0);
        assert_eq!(cost(Method::Vogel), 779.0);
        assert_eq!(cost(Method::Russell), 807.0);
        assert_eq!(comparison.best().expect("non-empty").method(), Method::Vogel);
    }

    #[test]
    fn test_compare_respects_method_list() {
        let config = SolverConfig::default().with_methods(&[Method::Russell]);
        let comparison = compare(&vam_example(), &config).expect("balanced");
        assert_eq!(comparison.len(), 1);
        assert!(comparison.get(Method::Vogel).is_none());
        assert!(comparison.get(Method::Russell).is_some());
    }

    #[test]
    fn test_best_prefers_earliest_on_tie() {
        let problem =
            TransportationProblem::new(vec![10.0], vec![10.0], vec![vec![5.0]]).expect("valid");
        let comparison = compare(&problem, &SolverConfig::default()).expect("balanced");
        assert_eq!(
            comparison.best().expect("non-empty").method(),
            Method::NorthWest
        );
    }

    #[test]
    fn test_empty_comparison() {
        let config = SolverConfig::default().with_methods(&[]);
        let comparison = compare(&vam_example(), &config).expect("balanced");
        assert!(comparison.is_empty());
        assert!(comparison.best().is_none());
    }

    #[test]
    fn test_imbalance_rejected() {
        let problem =
            TransportationProblem::new(vec![10.0], vec![9.0], vec![vec![1.0]]).expect("valid");
        let config = SolverConfig::default();
        assert_eq!(
            compare(&problem, &config).unwrap_err(),
            TransportError::Imbalance {
                supply: 10.0,
                demand: 9.0,
            }
        );
        for method in Method::ALL {
            assert!(matches!(
                solve(&problem, method, &config),
                Err(TransportError::Imbalance { .. })
            ));
        }
    }

    #[test]
    fn test_solve_matches_direct_run() {
        let problem = vam_example();
        let config = SolverConfig::default();
        for method in Method::ALL {
            let solved = solve(&problem, method, &config).expect("balanced");
            let direct = method.run(&problem, &config).expect("solvable");
            assert_eq!(solved, direct);
        }
    }

    #[test]
    fn test_fractional_quantities() {
        let problem = TransportationProblem::new(
            vec![0.1, 0.2],
            vec![0.15, 0.15],
            vec![vec![1.0, 2.0], vec![2.0, 1.0]],
        )
        .expect("valid");
        let config = SolverConfig::default();
        let validator = ProblemValidator::new(1e-6);
        for method in Method::ALL {
            let alloc = solve(&problem, method, &config).expect("balanced");
            assert!(validator.evaluate(&problem, &alloc).is_empty());
        }
    }

    #[test]
    fn test_tiny_quantities_fully_shipped() {
        let problem = TransportationProblem::new(
            vec![3e-10, 2e-10],
            vec![5e-10],
            vec![vec![1.0], vec![2.0]],
        )
        .expect("valid");
        let comparison = compare(&problem, &SolverConfig::default()).expect("balanced");
        for alloc in comparison.iter() {
            assert_eq!(alloc.steps(), 2, "{}", alloc.method());
            assert_eq!(alloc.basic_cells(), vec![(0, 0), (1, 0)]);
            assert!((alloc.column_sum(0) - 5e-10).abs() <= 1e-9 * 5e-10);
            assert!((alloc.total_cost() - 7e-10).abs() <= 1e-9 * 7e-10);
        }
    }

    proptest! {
        #[test]
        fn prop_feasible_and_bounded(
            seed in any::<u64>(),
            sources in 1usize..6,
            destinations in 1usize..6,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let problem = random_balanced(sources, destinations, 25, 15, &mut rng);
            let comparison = compare(&problem, &SolverConfig::default()).expect("balanced");
            let validator = ProblemValidator::default();

            for alloc in comparison.iter() {
                prop_assert!(validator.evaluate(&problem, alloc).is_empty());
                prop_assert!(alloc.total_cost() >= 0.0);
                prop_assert!(alloc.to_rows().iter().flatten().all(|&q| q >= 0.0));
                prop_assert!(alloc.steps() <= sources + destinations - 1);
            }
        }

        #[test]
        fn prop_problem_unchanged(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let problem = random_balanced(3, 4, 20, 9, &mut rng);
            let before = problem.clone();
            let _ = compare(&problem, &SolverConfig::default()).expect("balanced");
            prop_assert_eq!(problem, before);
        }
    }
}
