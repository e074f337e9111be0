//! Time intervals, per-visit planning horizons and the lunch break.

use serde::{Deserialize, Serialize};

/// Length of the planning day in time units (seconds).
pub const DAY_END: f64 = 86_400.0;

/// A closed interval `[earliest, latest]` of time units.
///
/// For a service stop this is the interval during which service may legally
/// start; waiting is allowed when the vehicle arrives early.
///
/// # Examples
///
/// ```
/// use u_techroute::models::TimeInterval;
///
/// let tw = TimeInterval::new(100.0, 200.0).unwrap();
/// assert!(tw.contains(150.0));
/// assert!(!tw.contains(250.0));
/// assert_eq!(tw.length(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeInterval {
    earliest: f64,
    latest: f64,
}

impl TimeInterval {
    /// Creates a new interval.
    ///
    /// Returns `None` if `earliest > latest` or either bound is non-finite.
    pub fn new(earliest: f64, latest: f64) -> Option<Self> {
        if !earliest.is_finite() || !latest.is_finite() || earliest > latest {
            return None;
        }
        Some(Self { earliest, latest })
    }

    /// The whole planning day, `[0, 86400]`.
    pub fn day() -> Self {
        Self {
            earliest: 0.0,
            latest: DAY_END,
        }
    }

    /// Lower bound.
    pub fn earliest(&self) -> f64 {
        self.earliest
    }

    /// Upper bound.
    pub fn latest(&self) -> f64 {
        self.latest
    }

    /// `latest - earliest`.
    pub fn length(&self) -> f64 {
        self.latest - self.earliest
    }

    /// Returns `true` if `time` lies within the interval.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.earliest && time <= self.latest
    }

    /// Waiting time when arriving at `arrival` (zero once the interval is open).
    pub fn waiting_time(&self, arrival: f64) -> f64 {
        (self.earliest - arrival).max(0.0)
    }

    /// Returns `true` if starting at `time` is too late.
    pub fn is_violated(&self, time: f64) -> bool {
        time > self.latest
    }

    /// Length of the intersection with `other` (zero when disjoint).
    pub fn overlap(&self, other: &TimeInterval) -> f64 {
        (self.latest.min(other.latest) - self.earliest.max(other.earliest)).max(0.0)
    }

    /// Length of the smallest interval covering both.
    pub fn span_with(&self, other: &TimeInterval) -> f64 {
        self.latest.max(other.latest) - self.earliest.min(other.earliest)
    }
}

/// Timestamps of one stop inside one candidate route.
///
/// Owned by the route's visit and recomputed on every rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanningHorizon {
    /// Arrival at the stop.
    pub arrival: f64,
    /// Start of service (`>= arrival`).
    pub service_start: f64,
    /// End of service, when the vehicle leaves.
    pub departure: f64,
}

impl PlanningHorizon {
    /// Idle time between arrival and service start.
    pub fn waiting(&self) -> f64 {
        self.service_start - self.arrival
    }
}

/// Lunch break shared by all technicians.
///
/// The break must start within `window` and lasts `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LunchBreak {
    window: TimeInterval,
    duration: f64,
}

impl LunchBreak {
    /// Creates a lunch break. Returns `None` for a negative or non-finite duration.
    pub fn new(window: TimeInterval, duration: f64) -> Option<Self> {
        if !duration.is_finite() || duration < 0.0 {
            return None;
        }
        Some(Self { window, duration })
    }

    /// Interval in which the break must start.
    pub fn window(&self) -> &TimeInterval {
        &self.window
    }

    /// Duration of the break.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Returns `true` if a route spanning `[start, end]` must take the break.
    pub fn applies_to(&self, start: f64, end: f64) -> bool {
        self.duration > 0.0 && start < self.window.latest() && end > self.window.earliest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_valid() {
        let tw = TimeInterval::new(10.0, 20.0).expect("valid");
        assert_eq!(tw.earliest(), 10.0);
        assert_eq!(tw.latest(), 20.0);
        assert_eq!(tw.length(), 10.0);
    }

    #[test]
    fn test_interval_invalid() {
        assert!(TimeInterval::new(20.0, 10.0).is_none());
        assert!(TimeInterval::new(f64::NAN, 10.0).is_none());
        assert!(TimeInterval::new(10.0, f64::INFINITY).is_none());
        assert!(TimeInterval::new(5.0, 5.0).is_some());
    }

    #[test]
    fn test_interval_waiting_and_violation() {
        let tw = TimeInterval::new(10.0, 20.0).expect("valid");
        assert!((tw.waiting_time(5.0) - 5.0).abs() < 1e-10);
        assert_eq!(tw.waiting_time(15.0), 0.0);
        assert!(!tw.is_violated(20.0));
        assert!(tw.is_violated(20.1));
    }

    #[test]
    fn test_overlap_and_span() {
        let a = TimeInterval::new(0.0, 10.0).expect("valid");
        let b = TimeInterval::new(5.0, 20.0).expect("valid");
        let c = TimeInterval::new(30.0, 40.0).expect("valid");
        assert_eq!(a.overlap(&b), 5.0);
        assert_eq!(b.overlap(&a), 5.0);
        assert_eq!(a.overlap(&c), 0.0);
        assert_eq!(a.span_with(&c), 40.0);
    }

    #[test]
    fn test_day() {
        let d = TimeInterval::day();
        assert_eq!(d.earliest(), 0.0);
        assert_eq!(d.latest(), DAY_END);
    }

    #[test]
    fn test_horizon_waiting() {
        let h = PlanningHorizon {
            arrival: 5.0,
            service_start: 9.0,
            departure: 12.0,
        };
        assert_eq!(h.waiting(), 4.0);
    }

    #[test]
    fn test_lunch_applies() {
        let lunch = LunchBreak::new(TimeInterval::new(100.0, 200.0).expect("valid"), 30.0)
            .expect("valid");
        assert!(lunch.applies_to(50.0, 150.0));
        assert!(!lunch.applies_to(0.0, 100.0));
        assert!(!lunch.applies_to(200.0, 300.0));
        assert!(LunchBreak::new(TimeInterval::day(), -1.0).is_none());
    }
}
