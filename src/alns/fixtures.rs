//! Small problems shared by the operator and runner tests.

use crate::distance::TravelMatrix;
use crate::instance::Instance;
use crate::models::{Depot, Problem, ServiceStop, SkillSet, TimeInterval, Vehicle};

/// `n` stops on a line, 10 units apart, depot at node 0 and two idle-free
/// vehicles with long shifts.
pub(crate) fn line_problem(n: usize) -> Problem {
    let nodes = n + 1;
    let mut m = TravelMatrix::new(nodes);
    for i in 0..nodes {
        for j in (i + 1)..nodes {
            m.set_symmetric(i, j, 10.0 * (j - i) as f64);
        }
    }
    let demand = (0..n)
        .map(|i| ServiceStop::new(i, i + 1, TimeInterval::day(), 10.0))
        .collect();
    Problem::new(Instance {
        depots: vec![Depot::new(0, 0, 0.0, 0.0).with_vehicles(vec![0, 1])],
        demand,
        fleet: vec![
            Vehicle::new(0, SkillSet::new(), 20_000.0, 40_000.0, 0.01),
            Vehicle::new(1, SkillSet::new(), 20_000.0, 40_000.0, 0.01),
        ],
        distances: m.clone(),
        durations: m,
        lunch: None,
        avg_driving_cost: 1.0,
    })
    .expect("valid problem")
}
