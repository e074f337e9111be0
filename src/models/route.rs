//! Route and visit types.

use serde::{Deserialize, Serialize};

use super::PlanningHorizon;

/// A single visit to a service stop within a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    /// Stop index (position in the problem's demand).
    pub stop: usize,
    /// Timing of this visit in this route.
    pub horizon: PlanningHorizon,
}

/// An ordered sequence of stop visits assigned to a single vehicle.
///
/// The route starts and ends at the vehicle's depot (not stored in `visits`).
/// An empty route means the vehicle stays home.
///
/// # Examples
///
/// ```
/// use u_techroute::models::{PlanningHorizon, Route, Visit};
///
/// let mut route = Route::new(0, 0);
/// route.push_visit(Visit {
///     stop: 1,
///     horizon: PlanningHorizon { arrival: 10.0, service_start: 12.0, departure: 20.0 },
/// });
/// assert_eq!(route.len(), 1);
/// assert_eq!(route.stops(), vec![1]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    vehicle: usize,
    depot: usize,
    visits: Vec<Visit>,
    start: f64,
    end: f64,
    distance: f64,
    travel_time: f64,
    overtime: f64,
    lunch: Option<f64>,
}

impl Route {
    /// Creates an empty route for `vehicle` based at matrix node `depot`.
    pub fn new(vehicle: usize, depot: usize) -> Self {
        Self {
            vehicle,
            depot,
            visits: Vec::new(),
            start: 0.0,
            end: 0.0,
            distance: 0.0,
            travel_time: 0.0,
            overtime: 0.0,
            lunch: None,
        }
    }

    /// Appends a visit to the end of this route.
    pub fn push_visit(&mut self, visit: Visit) {
        self.visits.push(visit);
    }

    /// Vehicle (fleet index) driving this route.
    pub fn vehicle(&self) -> usize {
        self.vehicle
    }

    /// Matrix node of the depot.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// The ordered visits.
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Number of stops (excluding the depot).
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// Returns `true` if the vehicle stays home.
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Stop indices in visit order.
    pub fn stops(&self) -> Vec<usize> {
        self.visits.iter().map(|v| v.stop).collect()
    }

    /// Returns `true` if `stop` is visited by this route.
    pub fn contains(&self, stop: usize) -> bool {
        self.visits.iter().any(|v| v.stop == stop)
    }

    /// Departure from the depot.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Return to the depot.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Shift length, `end - start`.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Total distance driven.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Total driving time.
    pub fn travel_time(&self) -> f64 {
        self.travel_time
    }

    /// Overtime beyond the vehicle's threshold.
    pub fn overtime(&self) -> f64 {
        self.overtime
    }

    /// Start of the lunch break, if one is taken on this route.
    pub fn lunch(&self) -> Option<f64> {
        self.lunch
    }

    /// Removes the visit to `stop`, returning `true` if it was present.
    ///
    /// Timing and totals are stale until the route is rebuilt.
    pub fn remove_stop(&mut self, stop: usize) -> bool {
        match self.visits.iter().position(|v| v.stop == stop) {
            Some(pos) => {
                self.visits.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_times(&mut self, start: f64, end: f64) {
        self.start = start;
        self.end = end;
    }

    pub(crate) fn set_totals(&mut self, distance: f64, travel_time: f64, overtime: f64) {
        self.distance = distance;
        self.travel_time = travel_time;
        self.overtime = overtime;
    }

    pub(crate) fn set_lunch(&mut self, lunch: Option<f64>) {
        self.lunch = lunch;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visit(stop: usize, t: f64) -> Visit {
        Visit {
            stop,
            horizon: PlanningHorizon {
                arrival: t,
                service_start: t,
                departure: t + 5.0,
            },
        }
    }

    #[test]
    fn test_route_empty() {
        let r = Route::new(2, 1);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.vehicle(), 2);
        assert_eq!(r.depot(), 1);
        assert_eq!(r.distance(), 0.0);
        assert_eq!(r.duration(), 0.0);
        assert!(r.lunch().is_none());
    }

    #[test]
    fn test_route_push_visit() {
        let mut r = Route::new(0, 0);
        r.push_visit(visit(5, 10.0));
        r.push_visit(visit(3, 20.0));
        assert_eq!(r.len(), 2);
        assert_eq!(r.stops(), vec![5, 3]);
        assert!(r.contains(3));
        assert!(!r.contains(4));
        assert!(r.remove_stop(5));
        assert!(!r.remove_stop(5));
        assert_eq!(r.stops(), vec![3]);
    }

    #[test]
    fn test_route_setters() {
        let mut r = Route::new(0, 0);
        r.set_times(100.0, 400.0);
        r.set_totals(50.0, 60.0, 20.0);
        r.set_lunch(Some(200.0));
        assert_eq!(r.duration(), 300.0);
        assert_eq!(r.distance(), 50.0);
        assert_eq!(r.travel_time(), 60.0);
        assert_eq!(r.overtime(), 20.0);
        assert_eq!(r.lunch(), Some(200.0));
    }
}
