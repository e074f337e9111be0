//! End-to-end searches on small instances.

use u_techroute::alns::{
    AlnsConfig, AlnsRunner, Criterion, CriterionConfig, DestroyOperator, GreedyInsertion,
    RandomRemoval, RegretInsertion, RelatedRemoval, RepairOperator, UpdateMethod, WorstRemoval,
};
use u_techroute::construction::{sequential_insertion, unassigned_solution};
use u_techroute::evaluation::{CostModel, RouteEvaluator};
use u_techroute::instance::{Instance, InstanceFormat};
use u_techroute::models::Problem;

const TWO_STOPS: &str = "\
numVehicles,numStops,numDepots,lunchStart,lunchEnd,lunchDuration
1,2,1,0,0,0
0,0,1000,2000,0.01
0,1,0,0.0,0.0
1,0,1.0,1.0,10,100,200,5
2,0,2.0,2.0,10,300,400,5
";

const TWO_STOPS_MATRICES: &str = r#"{
  "distances": [[0, 10, 20], [10, 0, 15], [20, 15, 0]],
  "durations": [[0, 10, 20], [10, 0, 15], [20, 15, 0]]
}"#;

fn two_stops() -> Problem {
    let instance = Instance::from_readers(
        TWO_STOPS.as_bytes(),
        TWO_STOPS_MATRICES.as_bytes(),
        InstanceFormat::default().with_avg_driving_cost(1.0),
    )
    .expect("valid instance");
    Problem::new(instance).expect("valid problem")
}

fn destroy_ops() -> Vec<Box<dyn DestroyOperator>> {
    vec![
        Box::new(RandomRemoval),
        Box::new(WorstRemoval::default()),
        Box::new(RelatedRemoval::default()),
    ]
}

fn repair_ops() -> Vec<Box<dyn RepairOperator>> {
    vec![Box::new(GreedyInsertion), Box::new(RegretInsertion::new())]
}

fn criteria() -> Vec<Criterion> {
    [
        CriterionConfig::RecordToRecordTravel {
            start: 5.0,
            end: 0.0,
            step: 0.5,
            method: UpdateMethod::Linear,
        },
        CriterionConfig::SimulatedAnnealing {
            start: 10.0,
            end: 0.1,
            step: 0.9,
            method: UpdateMethod::Exponential,
        },
    ]
    .iter()
    .map(|c| c.build().expect("valid criterion"))
    .collect()
}

#[test]
fn two_stops_converge_to_round_trip() {
    let problem = two_stops();
    let evaluator = RouteEvaluator::new(&problem, CostModel::default());
    let config = AlnsConfig::default().with_max_iterations(25).with_seed(11);

    for mut criterion in criteria() {
        let result = AlnsRunner::run(
            &evaluator,
            unassigned_solution(&evaluator),
            &destroy_ops(),
            &repair_ops(),
            &mut criterion,
            &config,
        )
        .expect("valid run");

        let best = &result.best;
        assert_eq!(best.num_unassigned(), 0);
        // depot -> 1 -> 2 -> depot, no overtime
        assert_eq!(best.route(0).stops(), vec![0, 1]);
        assert_eq!(best.total_overtime(), 0.0);
        assert!((best.objective() - 45.0).abs() < 1e-9, "{}", best.objective());
    }
}

#[test]
fn routes_in_best_solution_respect_windows() {
    let problem = two_stops();
    let evaluator = RouteEvaluator::new(&problem, CostModel::default());
    let config = AlnsConfig::default().with_max_iterations(25).with_seed(3);
    let mut criterion = criteria().remove(0);

    let result = AlnsRunner::run(
        &evaluator,
        sequential_insertion(&evaluator),
        &destroy_ops(),
        &repair_ops(),
        &mut criterion,
        &config,
    )
    .expect("valid run");

    let route = result.best.route(0);
    for visit in route.visits() {
        let window = problem.demand()[visit.stop].window();
        assert!(visit.horizon.arrival <= visit.horizon.service_start);
        assert!(window.contains(visit.horizon.service_start));
    }
    // leaves as late as the first window allows, then waits at the second stop
    assert_eq!(route.start(), 190.0);
    assert_eq!(route.visits()[0].horizon.service_start, 200.0);
    assert_eq!(route.visits()[1].horizon.service_start, 300.0);
    assert_eq!(route.end(), 330.0);
}

#[test]
fn unservable_stop_is_penalized_not_fatal() {
    let table = "\
h
1,2,1,0,0,0
0,1,A,1000,2000,0.01
0,1,0,0.0,0.0
1,1,A,1.0,1.0,10,100,200,5
2,1,B,2.0,2.0,10,300,400,5
";
    let instance = Instance::from_readers(
        table.as_bytes(),
        TWO_STOPS_MATRICES.as_bytes(),
        InstanceFormat::default().with_avg_driving_cost(1.0),
    )
    .expect("valid instance");
    let problem = Problem::new(instance).expect("valid problem");
    let cost = CostModel::default().with_unassigned_penalty(500.0);
    let evaluator = RouteEvaluator::new(&problem, cost);
    let config = AlnsConfig::default().with_max_iterations(20).with_seed(5);
    let mut criterion = criteria().remove(1);

    let result = AlnsRunner::run(
        &evaluator,
        unassigned_solution(&evaluator),
        &destroy_ops(),
        &repair_ops(),
        &mut criterion,
        &config,
    )
    .expect("valid run");

    assert_eq!(result.best.unassigned(), &[1]);
    assert_eq!(result.best.route(0).stops(), vec![0]);
    // 10 out and back plus the penalty
    assert!((result.best.objective() - 520.0).abs() < 1e-9);
}

#[test]
fn lunch_before_a_late_window_is_served() {
    let table = "\
h
1,1,1,200,900,60
0,0,5000,10000,1
0,1,0,0.0,0.0
1,0,0.0,0.0,50,500,510,0
";
    let matrices = r#"{"distances": [[0, 100], [100, 0]], "durations": [[0, 100], [100, 0]]}"#;
    let instance = Instance::from_readers(
        table.as_bytes(),
        matrices.as_bytes(),
        InstanceFormat::default().with_avg_driving_cost(1.0),
    )
    .expect("valid instance");
    let problem = Problem::new(instance).expect("valid problem");
    let evaluator = RouteEvaluator::new(&problem, CostModel::default());
    let config = AlnsConfig::default().with_max_iterations(20).with_seed(9);
    let mut criterion = criteria().remove(0);

    let result = AlnsRunner::run(
        &evaluator,
        unassigned_solution(&evaluator),
        &destroy_ops(),
        &repair_ops(),
        &mut criterion,
        &config,
    )
    .expect("valid run");

    assert!(result.best.unassigned().is_empty());
    assert_eq!(result.best.route(0).lunch(), Some(200.0));
    assert!((result.best.objective() - 200.0).abs() < 1e-9);
}
