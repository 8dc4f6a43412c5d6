//! Random balanced problem instances.

use rand::Rng;

use crate::cost::CostMatrix;
use crate::models::TransportationProblem;

/// Generates a random, exactly balanced transportation problem.
///
/// Supplies are drawn from `1..=max_quantity`, demands split the total
/// supply at random cut points (a demand may be zero), and unit costs are
/// drawn from `0..=max_cost`. All values are integral, so totals balance
/// without rounding error.
///
/// # Panics
///
/// Panics if `num_sources`, `num_destinations` or `max_quantity` is zero.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_transport::generator::random_balanced;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let problem = random_balanced(3, 4, 20, 9, &mut rng);
/// assert_eq!(problem.num_sources(), 3);
/// assert_eq!(problem.num_destinations(), 4);
/// assert_eq!(problem.total_supply(), problem.total_demand());
/// ```
pub fn random_balanced<R: Rng>(
    num_sources: usize,
    num_destinations: usize,
    max_quantity: u32,
    max_cost: u32,
    rng: &mut R,
) -> TransportationProblem {
    assert!(num_sources > 0 && num_destinations > 0, "empty problem");
    assert!(max_quantity > 0, "max_quantity must be positive");

    let supply: Vec<u64> = (0..num_sources)
        .map(|_| u64::from(rng.random_range(1..=max_quantity)))
        .collect();
    let total: u64 = supply.iter().sum();

    let mut cuts: Vec<u64> = (0..num_destinations - 1)
        .map(|_| rng.random_range(0..=total))
        .collect();
    cuts.sort_unstable();
    let mut demand = Vec::with_capacity(num_destinations);
    let mut prev = 0;
    for cut in cuts.into_iter().chain(std::iter::once(total)) {
        demand.push((cut - prev) as f64);
        prev = cut;
    }

    let data = (0..num_sources * num_destinations)
        .map(|_| f64::from(rng.random_range(0..=max_cost)))
        .collect();
    let costs = CostMatrix::from_data(num_sources, num_destinations, data)
        .expect("buffer sized rows * cols");

    TransportationProblem::from_parts(
        supply.into_iter().map(|s| s as f64).collect(),
        demand,
        costs,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ProblemValidator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_balanced_and_applicable() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let problem = random_balanced(4, 5, 30, 12, &mut rng);
            assert!(ProblemValidator::new(0.0).validate(&problem).is_ok());
        }
    }

    #[test]
    fn test_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let problem = random_balanced(6, 3, 10, 5, &mut rng);
        assert!(problem.supply().iter().all(|&s| (1.0..=10.0).contains(&s)));
        assert!(problem.demand().iter().all(|&d| d >= 0.0));
        assert!(problem
            .costs()
            .as_slice()
            .iter()
            .all(|&c| (0.0..=5.0).contains(&c)));
    }

    #[test]
    fn test_deterministic_for_seed() {
        let a = random_balanced(3, 3, 10, 10, &mut StdRng::seed_from_u64(1));
        let b = random_balanced(3, 3, 10, 10, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_destination_takes_everything() {
        let mut rng = StdRng::seed_from_u64(3);
        let problem = random_balanced(4, 1, 10, 10, &mut rng);
        assert_eq!(problem.demand(), &[problem.total_supply()]);
    }
}
