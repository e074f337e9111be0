//! Solution, cost and violation types.

use serde::{Deserialize, Serialize};

use super::Route;

/// Anything carrying a scalar objective value (lower is better).
///
/// Acceptance criteria only see candidates through this trait.
pub trait Objective {
    /// The objective value.
    fn objective(&self) -> f64;
}

impl Objective for f64 {
    fn objective(&self) -> f64 {
        *self
    }
}

/// A type of constraint violation in a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViolationType {
    /// The vehicle lacks a skill the stop requires.
    SkillMismatch {
        /// Stop index.
        stop: usize,
        /// Fleet index.
        vehicle: usize,
    },
    /// Service starts after the stop's window closes.
    TimeWindowViolated {
        /// Stop index.
        stop: usize,
        /// Computed service start.
        service_start: f64,
        /// Window close.
        latest: f64,
    },
    /// The lunch break cannot start inside its window.
    LunchBreakMissed {
        /// Fleet index.
        vehicle: usize,
        /// Earliest possible break start on this route.
        earliest_start: f64,
        /// Window close.
        latest: f64,
    },
    /// The shift is longer than the vehicle allows.
    ShiftExceeded {
        /// Fleet index.
        vehicle: usize,
        /// Shift length.
        duration: f64,
        /// Allowed shift length.
        max_duration: f64,
    },
    /// The vehicle returns after the depot closes.
    DepotClosed {
        /// Fleet index.
        vehicle: usize,
        /// Return time.
        end: f64,
        /// Depot closing time.
        closing: f64,
    },
}

/// A constraint violation in a solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// The three objective terms and their sum.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Distance times driving cost.
    pub distance: f64,
    /// Overtime times the vehicles' overtime cost.
    pub overtime: f64,
    /// Penalty for unserved stops.
    pub unassigned: f64,
}

impl CostBreakdown {
    /// Sum of all terms.
    pub fn total(&self) -> f64 {
        self.distance + self.overtime + self.unassigned
    }
}

/// A complete assignment of stops to vehicles.
///
/// Holds exactly one route per fleet vehicle, indexed by fleet position;
/// an empty route is an inactive vehicle. Every stop is either in exactly
/// one route or in `unassigned`.
///
/// # Examples
///
/// ```
/// use u_techroute::models::{Route, Solution};
///
/// let sol = Solution::new(vec![Route::new(0, 0), Route::new(1, 0)], vec![3, 4]);
/// assert_eq!(sol.routes().len(), 2);
/// assert_eq!(sol.num_unassigned(), 2);
/// assert_eq!(sol.num_served(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    routes: Vec<Route>,
    unassigned: Vec<usize>,
    cost: CostBreakdown,
}

impl Solution {
    /// Creates a solution from routes (one per vehicle) and unserved stops.
    ///
    /// The cost is zero until the solution is evaluated.
    pub fn new(routes: Vec<Route>, unassigned: Vec<usize>) -> Self {
        Self {
            routes,
            unassigned,
            cost: CostBreakdown::default(),
        }
    }

    /// Routes, indexed by fleet position.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Route of `vehicle`.
    pub fn route(&self, vehicle: usize) -> &Route {
        &self.routes[vehicle]
    }

    /// Replaces the route of `route.vehicle()`.
    pub fn set_route(&mut self, route: Route) {
        let v = route.vehicle();
        self.routes[v] = route;
    }

    /// Routes that visit at least one stop.
    pub fn active_routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().filter(|r| !r.is_empty())
    }

    /// Unserved stop indices.
    pub fn unassigned(&self) -> &[usize] {
        &self.unassigned
    }

    /// Number of unserved stops.
    pub fn num_unassigned(&self) -> usize {
        self.unassigned.len()
    }

    /// Marks a stop as unserved.
    pub fn add_unassigned(&mut self, stop: usize) {
        self.unassigned.push(stop);
    }

    /// Drains the unserved list.
    pub fn take_unassigned(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.unassigned)
    }

    /// Number of stops served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    /// Total distance across all routes.
    pub fn total_distance(&self) -> f64 {
        self.routes.iter().map(|r| r.distance()).sum()
    }

    /// Total overtime across all routes.
    pub fn total_overtime(&self) -> f64 {
        self.routes.iter().map(|r| r.overtime()).sum()
    }

    /// Takes `stop` out of whichever route serves it.
    ///
    /// Returns the vehicle it was removed from. The stop is not added to
    /// the unassigned list, and the route's timing is stale until the
    /// solution is evaluated again.
    pub fn remove_stop(&mut self, stop: usize) -> Option<usize> {
        self.routes
            .iter_mut()
            .find_map(|r| r.remove_stop(stop).then(|| r.vehicle()))
    }

    /// Stops currently served, in route order.
    pub fn served_stops(&self) -> Vec<usize> {
        self.routes.iter().flat_map(|r| r.stops()).collect()
    }

    /// Vehicle serving `stop`, if any.
    pub fn vehicle_of(&self, stop: usize) -> Option<usize> {
        self.routes
            .iter()
            .find(|r| r.contains(stop))
            .map(|r| r.vehicle())
    }

    /// Stop sequence of every route.
    pub fn sequences(&self) -> Vec<Vec<usize>> {
        self.routes.iter().map(|r| r.stops()).collect()
    }

    /// Cost terms from the last evaluation.
    pub fn cost(&self) -> &CostBreakdown {
        &self.cost
    }

    /// Objective value from the last evaluation.
    pub fn objective(&self) -> f64 {
        self.cost.total()
    }

    pub(crate) fn set_cost(&mut self, cost: CostBreakdown) {
        self.cost = cost;
    }
}

impl Objective for Solution {
    fn objective(&self) -> f64 {
        Solution::objective(self)
    }
}
