//! Route evaluator that computes timing, lunch, overtime and feasibility.

use serde::{Deserialize, Serialize};

use crate::models::{
    CostBreakdown, PlanningHorizon, Problem, Route, Solution, Violation, ViolationType, Visit,
};

/// Objective weights that are not part of the instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// Cost charged per unserved stop.
    pub unassigned_penalty: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            unassigned_penalty: 1_000.0,
        }
    }
}

impl CostModel {
    /// Sets the per-stop penalty for leaving a stop unserved.
    pub fn with_unassigned_penalty(mut self, penalty: f64) -> Self {
        self.unassigned_penalty = penalty;
        self
    }
}

/// Raw schedule of one stop sequence from a fixed start time.
struct Timeline {
    horizons: Vec<PlanningHorizon>,
    end: f64,
    distance: f64,
    travel_time: f64,
    lunch: Option<f64>,
    lunch_missed: Option<f64>,
}

/// Evaluates routes by computing visit timing, the lunch break, overtime,
/// total distance, and by checking skills, windows, shift length and depot
/// hours.
///
/// # Timing
///
/// A route first gets a trial schedule leaving the depot at time zero. The
/// departure is then delayed by the largest amount that removes waiting
/// without pushing any service past its window (the forward slack of the
/// depot), and the final schedule is computed from there. If the delayed
/// schedule breaks a window or misses the break where the trial did not,
/// the trial schedule is kept.
///
/// The lunch break is placed greedily in both schedules: it is taken before
/// the first leg whose next event would fall after the lunch window opens,
/// and starts at the later of the current departure and the window opening.
///
/// # Examples
///
/// ```
/// use u_techroute::distance::TravelMatrix;
/// use u_techroute::evaluation::{CostModel, RouteEvaluator};
/// use u_techroute::instance::Instance;
/// use u_techroute::models::{Depot, Problem, ServiceStop, SkillSet, TimeInterval, Vehicle};
///
/// let mut m = TravelMatrix::new(2);
/// m.set_symmetric(0, 1, 600.0);
/// let problem = Problem::new(Instance {
///     depots: vec![Depot::new(0, 0, 0.0, 0.0).with_vehicles(vec![0])],
///     demand: vec![ServiceStop::new(0, 1, TimeInterval::new(3_600.0, 7_200.0).unwrap(), 900.0)],
///     fleet: vec![Vehicle::new(0, SkillSet::new(), 28_800.0, 36_000.0, 0.01)],
///     distances: m.clone(),
///     durations: m,
///     lunch: None,
///     avg_driving_cost: 0.0001,
/// })
/// .unwrap();
///
/// let evaluator = RouteEvaluator::new(&problem, CostModel::default());
/// let (route, violations) = evaluator.build_route(0, &[0]);
/// assert!(violations.is_empty());
/// // leaves just in time to start service when the window opens
/// assert_eq!(route.start(), 3_000.0);
/// assert_eq!(route.visits()[0].horizon.service_start, 3_600.0);
/// assert_eq!(route.end(), 5_100.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteEvaluator<'a> {
    problem: &'a Problem,
    cost: CostModel,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given problem.
    pub fn new(problem: &'a Problem, cost: CostModel) -> Self {
        Self { problem, cost }
    }

    /// The problem being evaluated.
    pub fn problem(&self) -> &'a Problem {
        self.problem
    }

    /// The objective weights.
    pub fn cost_model(&self) -> &CostModel {
        &self.cost
    }

    /// Builds a route for `vehicle` visiting `stops` in order.
    ///
    /// Returns the constructed route and any constraint violations found.
    pub fn build_route(&self, vehicle: usize, stops: &[usize]) -> (Route, Vec<Violation>) {
        let p = self.problem;
        let depot = p.depot_node(vehicle);
        let mut route = Route::new(vehicle, depot);
        let mut violations = Vec::new();
        if stops.is_empty() {
            return (route, violations);
        }

        for &s in stops {
            if !p.can_serve(vehicle, s) {
                violations.push(Violation::new(ViolationType::SkillMismatch { stop: s, vehicle }));
            }
        }

        let trial = self.timeline(vehicle, stops, 0.0, true);
        let delay = self.departure_delay(stops, &trial.horizons);
        let (start, timeline) = if delay > 0.0 {
            let delayed = self.timeline(vehicle, stops, delay, true);
            // the break can shift by less than the delay
            if self.timing_faults(stops, &delayed) > self.timing_faults(stops, &trial) {
                (0.0, trial)
            } else {
                (delay, delayed)
            }
        } else {
            (0.0, trial)
        };

        for (&s, horizon) in stops.iter().zip(&timeline.horizons) {
            let window = p.demand()[s].window();
            if window.is_violated(horizon.service_start) {
                violations.push(Violation::new(ViolationType::TimeWindowViolated {
                    stop: s,
                    service_start: horizon.service_start,
                    latest: window.latest(),
                }));
            }
            route.push_visit(Visit {
                stop: s,
                horizon: *horizon,
            });
        }

        if let (Some(earliest_start), Some(lunch)) = (timeline.lunch_missed, p.lunch()) {
            violations.push(Violation::new(ViolationType::LunchBreakMissed {
                vehicle,
                earliest_start,
                latest: lunch.window().latest(),
            }));
        }

        let v = &p.fleet()[vehicle];
        let duration = timeline.end - start;
        if duration > v.max_overtime() {
            violations.push(Violation::new(ViolationType::ShiftExceeded {
                vehicle,
                duration,
                max_duration: v.max_overtime(),
            }));
        }

        let closing = p.depots()[v.depot()].availability().latest();
        if timeline.end > closing {
            violations.push(Violation::new(ViolationType::DepotClosed {
                vehicle,
                end: timeline.end,
                closing,
            }));
        }

        route.set_times(start, timeline.end);
        route.set_totals(timeline.distance, timeline.travel_time, v.overtime(duration));
        route.set_lunch(timeline.lunch);
        (route, violations)
    }

    /// Returns `true` if the sequence is a feasible route for `vehicle`.
    pub fn is_feasible(&self, vehicle: usize, stops: &[usize]) -> bool {
        self.build_route(vehicle, stops).1.is_empty()
    }

    /// Cost of a single route: distance and overtime terms.
    pub fn route_cost(&self, route: &Route) -> f64 {
        let v = &self.problem.fleet()[route.vehicle()];
        route.distance() * self.problem.stats().avg_driving_cost
            + route.overtime() * v.overtime_cost()
    }

    /// Cost terms of a solution whose routes are up to date.
    pub fn cost_of(&self, solution: &Solution) -> CostBreakdown {
        let mut cost = CostBreakdown::default();
        for route in solution.routes() {
            cost.distance += route.distance() * self.problem.stats().avg_driving_cost;
            cost.overtime += route.overtime() * self.problem.fleet()[route.vehicle()].overtime_cost();
        }
        cost.unassigned = solution.num_unassigned() as f64 * self.cost.unassigned_penalty;
        cost
    }

    /// Rebuilds every route from its stop sequence and stores the cost.
    ///
    /// Returns all violations found.
    pub fn evaluate(&self, solution: &mut Solution) -> Vec<Violation> {
        let mut all = Vec::new();
        for vehicle in 0..solution.routes().len() {
            let stops = solution.route(vehicle).stops();
            let (route, mut violations) = self.build_route(vehicle, &stops);
            solution.set_route(route);
            all.append(&mut violations);
        }
        let cost = self.cost_of(solution);
        solution.set_cost(cost);
        all
    }

    /// Cost increase of inserting `stop` at `position` of `vehicle`'s route.
    ///
    /// Returns `None` when the vehicle lacks the skills or the resulting
    /// route is infeasible.
    pub fn insertion_cost(
        &self,
        solution: &Solution,
        vehicle: usize,
        stop: usize,
        position: usize,
    ) -> Option<f64> {
        if !self.problem.can_serve(vehicle, stop) {
            return None;
        }
        let current = solution.route(vehicle);
        let mut stops = current.stops();
        stops.insert(position.min(stops.len()), stop);
        let (route, violations) = self.build_route(vehicle, &stops);
        if !violations.is_empty() {
            return None;
        }
        Some(self.route_cost(&route) - self.route_cost(current))
    }

    /// Cheapest feasible insertion of `stop` into `vehicle`'s route.
    ///
    /// Returns `(position, cost increase)`.
    pub fn best_insertion(
        &self,
        solution: &Solution,
        vehicle: usize,
        stop: usize,
    ) -> Option<(usize, f64)> {
        let len = solution.route(vehicle).len();
        let mut best: Option<(usize, f64)> = None;
        for pos in 0..=len {
            if let Some(delta) = self.insertion_cost(solution, vehicle, stop, pos) {
                if best.is_none_or(|(_, d)| delta < d) {
                    best = Some((pos, delta));
                }
            }
        }
        best
    }

    /// Inserts `stop` at `position` and re-times the affected route.
    pub fn insert(&self, solution: &mut Solution, vehicle: usize, stop: usize, position: usize) {
        let mut stops = solution.route(vehicle).stops();
        stops.insert(position.min(stops.len()), stop);
        let (route, _) = self.build_route(vehicle, &stops);
        solution.set_route(route);
    }

    /// Ejects stops from infeasible routes until every route is feasible.
    ///
    /// Each infeasible route drops the stop whose removal yields the
    /// cheapest route, repeatedly, and the ejected stops join the
    /// unassigned list. Returns how many stops were ejected. The cost is
    /// recomputed.
    pub fn restore_feasibility(&self, solution: &mut Solution) -> usize {
        let mut ejected = 0;
        for vehicle in 0..solution.routes().len() {
            let mut stops = solution.route(vehicle).stops();
            let (mut route, mut violations) = self.build_route(vehicle, &stops);
            while !violations.is_empty() {
                let mut best: Option<(usize, Route, Vec<Violation>)> = None;
                for i in 0..stops.len() {
                    let mut trial = stops.clone();
                    trial.remove(i);
                    let (r, v) = self.build_route(vehicle, &trial);
                    let better = match &best {
                        None => true,
                        Some((_, br, bv)) => {
                            (v.len(), self.route_cost(&r)) < (bv.len(), self.route_cost(br))
                        }
                    };
                    if better {
                        best = Some((i, r, v));
                    }
                }
                let Some((i, r, v)) = best else { break };
                let stop = stops.remove(i);
                solution.add_unassigned(stop);
                ejected += 1;
                route = r;
                violations = v;
            }
            solution.set_route(route);
        }
        if ejected > 0 {
            tracing::trace!(ejected, "restored route feasibility");
        }
        let cost = self.cost_of(solution);
        solution.set_cost(cost);
        ejected
    }

    /// Window violations plus a missed break in a timeline.
    fn timing_faults(&self, stops: &[usize], timeline: &Timeline) -> usize {
        let late = stops
            .iter()
            .zip(&timeline.horizons)
            .filter(|&(&s, h)| self.problem.demand()[s].window().is_violated(h.service_start))
            .count();
        late + usize::from(timeline.lunch_missed.is_some())
    }

    /// Late departure: the largest start delay that removes waiting while
    /// keeping every service start within its window.
    fn departure_delay(&self, stops: &[usize], horizons: &[PlanningHorizon]) -> f64 {
        let mut waited = 0.0;
        let mut slack = f64::INFINITY;
        for (&s, h) in stops.iter().zip(horizons) {
            waited += h.waiting();
            let latest = self.problem.demand()[s].window().latest();
            slack = slack.min(waited + (latest - h.service_start));
        }
        slack.min(waited).max(0.0)
    }

    fn timeline(&self, vehicle: usize, stops: &[usize], start: f64, with_lunch: bool) -> Timeline {
        let p = self.problem;
        let depot = p.depot_node(vehicle);
        let lunch = if with_lunch { p.lunch() } else { None };

        let mut horizons = Vec::with_capacity(stops.len());
        let mut distance = 0.0;
        let mut travel_time = 0.0;
        let mut lunch_start = None;
        let mut lunch_missed = None;
        let mut pending = lunch.is_some();
        let mut time = start;
        let mut prev = depot;

        // the final leg returns to the depot, which never makes anyone wait
        let legs = stops
            .iter()
            .map(|&s| Some(s))
            .chain(std::iter::once(None));
        for next in legs {
            let node = next.map_or(depot, |s| p.demand()[s].node());
            let travel = p.durations().get(prev, node);
            let event = |depart: f64| match next {
                Some(s) => p.demand()[s].window().earliest().max(depart + travel),
                None => depart + travel,
            };

            if let (true, Some(l)) = (pending, lunch) {
                if l.applies_to(start, event(time)) {
                    let begin = time.max(l.window().earliest());
                    if begin > l.window().latest() {
                        lunch_missed = Some(begin);
                    }
                    lunch_start = Some(begin);
                    time = begin + l.duration();
                    pending = false;
                }
            }

            distance += p.distances().get(prev, node);
            travel_time += travel;
            let arrival = time + travel;
            match next {
                Some(s) => {
                    let stop = &p.demand()[s];
                    let service_start = arrival + stop.window().waiting_time(arrival);
                    let departure = service_start + stop.service_duration();
                    horizons.push(PlanningHorizon {
                        arrival,
                        service_start,
                        departure,
                    });
                    time = departure;
                }
                None => time = arrival,
            }
            prev = node;
        }

        Timeline {
            horizons,
            end: time,
            distance,
            travel_time,
            lunch: lunch_start,
            lunch_missed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::TravelMatrix;
    use crate::instance::Instance;
    use crate::models::{Depot, LunchBreak, ServiceStop, SkillSet, TimeInterval, Vehicle};

    fn tw(a: f64, b: f64) -> TimeInterval {
        TimeInterval::new(a, b).expect("valid")
    }

    /// One depot at node 0, stops on a line 100 time units apart.
    fn problem(windows: &[(f64, f64)], lunch: Option<LunchBreak>, shift: f64) -> Problem {
        let n = windows.len() + 1;
        let mut m = TravelMatrix::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                m.set_symmetric(i, j, 100.0 * (j - i) as f64);
            }
        }
        let demand = windows
            .iter()
            .enumerate()
            .map(|(i, &(a, b))| {
                ServiceStop::new(i, i + 1, tw(a, b), 50.0)
                    .with_required_skills(SkillSet::from_iter(["A"]))
            })
            .collect();
        Problem::new(Instance {
            depots: vec![Depot::new(0, 0, 0.0, 0.0).with_vehicles(vec![0, 1])],
            demand,
            fleet: vec![
                Vehicle::new(0, SkillSet::from_iter(["A"]), shift / 2.0, shift, 2.0),
                Vehicle::new(1, SkillSet::new(), shift / 2.0, shift, 2.0),
            ],
            distances: m.clone(),
            durations: m,
            lunch,
            avg_driving_cost: 0.5,
        })
        .expect("valid problem")
    }

    #[test]
    fn test_build_route_empty() {
        let p = problem(&[(0.0, 1000.0)], None, 10_000.0);
        let eval = RouteEvaluator::new(&p, CostModel::default());
        let (route, violations) = eval.build_route(0, &[]);
        assert!(route.is_empty());
        assert!(violations.is_empty());
        assert_eq!(route.distance(), 0.0);
        assert_eq!(eval.route_cost(&route), 0.0);
    }

    #[test]
    fn test_build_route_timing() {
        let p = problem(&[(0.0, 1000.0), (0.0, 1000.0)], None, 10_000.0);
        let eval = RouteEvaluator::new(&p, CostModel::default());
        let (route, violations) = eval.build_route(0, &[0, 1]);
        assert!(violations.is_empty());
        assert_eq!(route.start(), 0.0);
        let h = route.visits()[1].horizon;
        // 0 -> 100 arrive, 150 depart, 250 arrive second, 300 depart, 500 home
        assert_eq!(h.arrival, 250.0);
        assert_eq!(h.departure, 300.0);
        assert_eq!(route.end(), 500.0);
        assert_eq!(route.distance(), 400.0);
        assert_eq!(route.travel_time(), 400.0);
    }

    #[test]
    fn test_late_departure_removes_waiting() {
        let p = problem(&[(1000.0, 1200.0), (1000.0, 2000.0)], None, 10_000.0);
        let eval = RouteEvaluator::new(&p, CostModel::default());
        let (route, violations) = eval.build_route(0, &[0, 1]);
        assert!(violations.is_empty());
        assert_eq!(route.start(), 900.0);
        assert_eq!(route.visits()[0].horizon.waiting(), 0.0);
        assert_eq!(route.visits()[0].horizon.service_start, 1000.0);
        // second stop is reached at 1150 and served immediately
        assert_eq!(route.visits()[1].horizon.service_start, 1150.0);
        assert_eq!(route.duration(), 1400.0 - 900.0);
    }

    #[test]
    fn test_late_departure_respects_windows() {
        // waiting only at the second stop; the first window caps the delay
        let p = problem(&[(0.0, 120.0), (1000.0, 2000.0)], None, 10_000.0);
        let eval = RouteEvaluator::new(&p, CostModel::default());
        let (route, violations) = eval.build_route(0, &[0, 1]);
        assert!(violations.is_empty());
        assert_eq!(route.start(), 20.0);
        assert_eq!(route.visits()[0].horizon.service_start, 120.0);
        assert_eq!(route.visits()[1].horizon.service_start, 1000.0);
    }

    #[test]
    fn test_time_window_violation() {
        let p = problem(&[(0.0, 50.0)], None, 10_000.0);
        let eval = RouteEvaluator::new(&p, CostModel::default());
        let (_, violations) = eval.build_route(0, &[0]);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0].kind,
            ViolationType::TimeWindowViolated { stop: 0, .. }
        ));
    }

    #[test]
    fn test_skill_mismatch() {
        let p = problem(&[(0.0, 1000.0)], None, 10_000.0);
        let eval = RouteEvaluator::new(&p, CostModel::default());
        let (_, violations) = eval.build_route(1, &[0]);
        assert!(violations
            .iter()
            .any(|v| matches!(v.kind, ViolationType::SkillMismatch { stop: 0, vehicle: 1 })));
    }

    #[test]
    fn test_overtime_and_shift_limit() {
        // round trip 200 + service 50 = 250
        let p = problem(&[(0.0, 1000.0)], None, 400.0);
        let eval = RouteEvaluator::new(&p, CostModel::default());
        let (route, violations) = eval.build_route(0, &[0]);
        assert!(violations.is_empty());
        assert_eq!(route.overtime(), 50.0);
        assert_eq!(eval.route_cost(&route), 200.0 * 0.5 + 50.0 * 2.0);

        let tight = problem(&[(0.0, 1000.0)], None, 200.0);
        let eval = RouteEvaluator::new(&tight, CostModel::default());
        let (_, violations) = eval.build_route(0, &[0]);
        assert!(violations
            .iter()
            .any(|v| matches!(v.kind, ViolationType::ShiftExceeded { .. })));
    }

    #[test]
    fn test_depot_closed() {
        let p = problem(&[(86_350.0, 86_390.0)], None, 100_000.0);
        let eval = RouteEvaluator::new(&p, CostModel::default());
        let (_, violations) = eval.build_route(0, &[0]);
        assert!(violations
            .iter()
            .any(|v| matches!(v.kind, ViolationType::DepotClosed { .. })));
    }

    #[test]
    fn test_lunch_taken_before_crossing_leg() {
        let lunch = LunchBreak::new(tw(200.0, 400.0), 60.0);
        let p = problem(&[(0.0, 1000.0), (0.0, 1000.0)], lunch, 10_000.0);
        let eval = RouteEvaluator::new(&p, CostModel::default());
        let (route, violations) = eval.build_route(0, &[0, 1]);
        assert!(violations.is_empty());
        // first stop done at 150; the next arrival (250) crosses 200,
        // so lunch runs 200..260 and the second stop is reached at 360
        assert_eq!(route.lunch(), Some(200.0));
        assert_eq!(route.visits()[1].horizon.arrival, 360.0);
        assert_eq!(route.end(), 610.0);
    }

    #[test]
    fn test_lunch_before_late_window_keeps_stop_feasible() {
        // leaving at 0 works: lunch 200..260, arrive 360, serve at 500
        let mut m = TravelMatrix::new(2);
        m.set_symmetric(0, 1, 100.0);
        let p = Problem::new(Instance {
            depots: vec![Depot::new(0, 0, 0.0, 0.0).with_vehicles(vec![0])],
            demand: vec![ServiceStop::new(0, 1, tw(500.0, 510.0), 50.0)],
            fleet: vec![Vehicle::new(0, SkillSet::new(), 5_000.0, 10_000.0, 1.0)],
            distances: m.clone(),
            durations: m,
            lunch: LunchBreak::new(tw(200.0, 900.0), 60.0),
            avg_driving_cost: 1.0,
        })
        .expect("valid");
        let eval = RouteEvaluator::new(&p, CostModel::default());
        let (route, violations) = eval.build_route(0, &[0]);
        assert!(violations.is_empty(), "{violations:?}");
        assert_eq!(route.lunch(), Some(200.0));
        assert_eq!(route.visits()[0].horizon.service_start, 500.0);
        assert_eq!(route.start(), 140.0);

        let sol = Solution::new(vec![Route::new(0, 0)], vec![]);
        assert!(eval.best_insertion(&sol, 0, 0).is_some());
    }

    #[test]
    fn test_no_lunch_for_short_route() {
        let lunch = LunchBreak::new(tw(1000.0, 2000.0), 60.0);
        let p = problem(&[(0.0, 500.0)], lunch, 10_000.0);
        let eval = RouteEvaluator::new(&p, CostModel::default());
        let (route, violations) = eval.build_route(0, &[0]);
        assert!(violations.is_empty());
        assert_eq!(route.lunch(), None);
        assert_eq!(route.end(), 250.0);
    }

    #[test]
    fn test_lunch_missed() {
        // service runs 100..1100 and covers the whole lunch window
        let mut m = TravelMatrix::new(2);
        m.set_symmetric(0, 1, 100.0);
        let p = Problem::new(Instance {
            depots: vec![Depot::new(0, 0, 0.0, 0.0).with_vehicles(vec![0])],
            demand: vec![ServiceStop::new(0, 1, tw(0.0, 150.0), 1000.0)],
            fleet: vec![Vehicle::new(0, SkillSet::new(), 5_000.0, 10_000.0, 1.0)],
            distances: m.clone(),
            durations: m,
            lunch: LunchBreak::new(tw(200.0, 400.0), 60.0),
            avg_driving_cost: 0.5,
        })
        .expect("valid");
        let eval = RouteEvaluator::new(&p, CostModel::default());
        let (route, violations) = eval.build_route(0, &[0]);
        assert_eq!(route.lunch(), Some(1100.0));
        assert!(violations
            .iter()
            .any(|v| matches!(v.kind, ViolationType::LunchBreakMissed { .. })));
    }

    #[test]
    fn test_evaluate_solution_cost() {
        let p = problem(&[(0.0, 1000.0), (0.0, 1000.0)], None, 10_000.0);
        let eval = RouteEvaluator::new(&p, CostModel::default().with_unassigned_penalty(7.0));
        let mut sol = Solution::new(vec![Route::new(0, 0), Route::new(1, 0)], vec![1]);
        eval.insert(&mut sol, 0, 0, 0);
        let violations = eval.evaluate(&mut sol);
        assert!(violations.is_empty());
        assert_eq!(sol.cost().distance, 200.0 * 0.5);
        assert_eq!(sol.cost().unassigned, 7.0);
        assert_eq!(sol.objective(), 107.0);
    }

    #[test]
    fn test_best_insertion() {
        let p = problem(&[(0.0, 1000.0), (0.0, 1000.0)], None, 10_000.0);
        let eval = RouteEvaluator::new(&p, CostModel::default());
        let mut sol = Solution::new(vec![Route::new(0, 0), Route::new(1, 0)], vec![]);
        eval.insert(&mut sol, 0, 1, 0);
        // stop 0 lies between the depot and stop 1: no extra distance
        let (pos, delta) = eval.best_insertion(&sol, 0, 0).expect("feasible");
        assert_eq!(pos, 0);
        assert_eq!(delta, 0.0);
        assert!(eval.best_insertion(&sol, 1, 0).is_none());
    }

    #[test]
    fn test_restore_feasibility_ejects() {
        let p = problem(&[(0.0, 1000.0), (0.0, 50.0)], None, 10_000.0);
        let eval = RouteEvaluator::new(&p, CostModel::default());
        let mut sol = Solution::new(vec![Route::new(0, 0), Route::new(1, 0)], vec![]);
        eval.insert(&mut sol, 0, 0, 0);
        eval.insert(&mut sol, 0, 1, 1);
        let ejected = eval.restore_feasibility(&mut sol);
        assert_eq!(ejected, 1);
        assert_eq!(sol.unassigned(), &[1]);
        assert_eq!(sol.route(0).stops(), vec![0]);
        assert!(eval.evaluate(&mut sol).is_empty());
    }
}
