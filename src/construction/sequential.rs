//! Time-window-aware sequential nearest-neighbor construction.
//!
//! # Algorithm
//!
//! Vehicles are filled one after another. Each route grows from the depot by
//! appending the nearest (by travel time) unrouted stop that the vehicle is
//! skilled for and whose addition keeps the whole route feasible, including
//! the lunch break and the shift limit. A vehicle is closed when no such stop
//! remains; stops no vehicle can take stay unassigned.
//!
//! # Complexity
//!
//! O(n² · m · L) where n = stops, m = vehicles and L = route length (each
//! candidate is checked by re-timing the route).
//!
//! # Reference
//!
//! Solomon, M.M. (1987). "Algorithms for the Vehicle Routing and Scheduling
//! Problems with Time Window Constraints", *Operations Research* 35(2), 254-265.

use crate::evaluation::RouteEvaluator;
use crate::models::{Route, Solution};

/// Builds an initial solution with a time-window-aware nearest neighbor.
///
/// The returned solution is evaluated and every route is feasible.
pub fn sequential_insertion(evaluator: &RouteEvaluator<'_>) -> Solution {
    let problem = evaluator.problem();
    let n = problem.num_stops();
    let mut routed = vec![false; n];
    let mut routes = Vec::with_capacity(problem.fleet().len());

    for vehicle in 0..problem.fleet().len() {
        let depot = problem.depot_node(vehicle);
        let mut current = depot;
        let mut stops: Vec<usize> = Vec::new();

        loop {
            let mut best: Option<(usize, f64)> = None;
            for s in 0..n {
                if routed[s] || !problem.can_serve(vehicle, s) {
                    continue;
                }
                let t = problem.durations().get(current, problem.demand()[s].node());
                if best.is_some_and(|(_, best_t)| t >= best_t) {
                    continue;
                }
                stops.push(s);
                let feasible = evaluator.is_feasible(vehicle, &stops);
                stops.pop();
                if feasible {
                    best = Some((s, t));
                }
            }

            match best {
                Some((next, _)) => {
                    routed[next] = true;
                    stops.push(next);
                    current = problem.demand()[next].node();
                }
                None => break,
            }
        }

        let (route, _) = evaluator.build_route(vehicle, &stops);
        routes.push(route);
    }

    let unassigned = (0..n).filter(|&s| !routed[s]).collect();
    let mut solution = Solution::new(routes, unassigned);
    evaluator.evaluate(&mut solution);
    solution
}

/// A solution where every vehicle stays home and every stop is unassigned.
///
/// The cost is already evaluated.
pub fn unassigned_solution(evaluator: &RouteEvaluator<'_>) -> Solution {
    let problem = evaluator.problem();
    let routes = (0..problem.fleet().len())
        .map(|v| Route::new(v, problem.depot_node(v)))
        .collect();
    let mut solution = Solution::new(routes, (0..problem.num_stops()).collect());
    evaluator.evaluate(&mut solution);
    solution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::TravelMatrix;
    use crate::evaluation::CostModel;
    use crate::instance::Instance;
    use crate::models::{Depot, Problem, ServiceStop, SkillSet, TimeInterval, Vehicle};

    fn tw(a: f64, b: f64) -> TimeInterval {
        TimeInterval::new(a, b).expect("valid")
    }

    /// Stops on a line, `gap` time units apart, depot at node 0.
    fn problem(stops: Vec<ServiceStop>, fleet: Vec<Vehicle>, gap: f64) -> Problem {
        let n = stops.len() + 1;
        let mut m = TravelMatrix::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                m.set_symmetric(i, j, gap * (j - i) as f64);
            }
        }
        let ids = (0..fleet.len()).collect();
        Problem::new(Instance {
            depots: vec![Depot::new(0, 0, 0.0, 0.0).with_vehicles(ids)],
            demand: stops,
            fleet,
            distances: m.clone(),
            durations: m,
            lunch: None,
            avg_driving_cost: 1.0,
        })
        .expect("valid")
    }

    #[test]
    fn test_all_feasible_single_route() {
        let stops = (0..3)
            .map(|i| ServiceStop::new(i, i + 1, tw(0.0, 100.0), 2.0))
            .collect();
        let p = problem(stops, vec![Vehicle::new(0, SkillSet::new(), 500.0, 1000.0, 1.0)], 1.0);
        let eval = RouteEvaluator::new(&p, CostModel::default());
        let sol = sequential_insertion(&eval);
        assert_eq!(sol.num_served(), 3);
        assert_eq!(sol.num_unassigned(), 0);
        assert_eq!(sol.route(0).stops(), vec![0, 1, 2]);
        assert!(eval.evaluate(&mut sol.clone()).is_empty());
    }

    #[test]
    fn test_tight_windows_force_split() {
        let stops = vec![
            ServiceStop::new(0, 1, tw(0.0, 2.0), 5.0),
            ServiceStop::new(1, 2, tw(0.0, 2.0), 5.0),
        ];
        let fleet = vec![
            Vehicle::new(0, SkillSet::new(), 500.0, 1000.0, 1.0),
            Vehicle::new(1, SkillSet::new(), 500.0, 1000.0, 1.0),
        ];
        let p = problem(stops, fleet, 1.0);
        let eval = RouteEvaluator::new(&p, CostModel::default());
        let sol = sequential_insertion(&eval);
        assert_eq!(sol.num_served(), 2);
        assert_eq!(sol.active_routes().count(), 2);
    }

    #[test]
    fn test_skills_respected() {
        let stops = vec![
            ServiceStop::new(0, 1, tw(0.0, 100.0), 1.0)
                .with_required_skills(SkillSet::from_iter(["gas"])),
            ServiceStop::new(1, 2, tw(0.0, 100.0), 1.0)
                .with_required_skills(SkillSet::from_iter(["water"])),
        ];
        let fleet = vec![Vehicle::new(0, SkillSet::from_iter(["gas"]), 500.0, 1000.0, 1.0)];
        let p = problem(stops, fleet, 1.0);
        let eval = RouteEvaluator::new(&p, CostModel::default());
        let sol = sequential_insertion(&eval);
        assert_eq!(sol.route(0).stops(), vec![0]);
        assert_eq!(sol.unassigned(), &[1]);
    }

    #[test]
    fn test_unassigned_solution() {
        let stops = vec![ServiceStop::new(0, 1, tw(0.0, 100.0), 1.0)];
        let p = problem(stops, vec![Vehicle::new(0, SkillSet::new(), 5.0, 10.0, 1.0)], 1.0);
        let eval = RouteEvaluator::new(&p, CostModel::default().with_unassigned_penalty(50.0));
        let sol = unassigned_solution(&eval);
        assert_eq!(sol.routes().len(), 1);
        assert_eq!(sol.num_served(), 0);
        assert_eq!(sol.objective(), 50.0);
    }
}
