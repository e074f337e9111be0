//! Service stops (customer visits).

use serde::{Deserialize, Serialize};

use super::{SkillSet, TimeInterval};

/// A service visit requested by a customer.
///
/// Instances come in two flavours, one carrying a `priority` column and one
/// a `profit_forecast` column, so both are optional.
///
/// # Examples
///
/// ```
/// use u_techroute::models::{ServiceStop, SkillSet, TimeInterval};
///
/// let stop = ServiceStop::new(12, 3, TimeInterval::new(28_800.0, 36_000.0).unwrap(), 1_800.0)
///     .with_required_skills(SkillSet::from_iter(["gas"]))
///     .with_profit_forecast(120.0);
/// assert_eq!(stop.node(), 3);
/// assert_eq!(stop.profit_forecast(), Some(120.0));
/// assert_eq!(stop.priority(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStop {
    id: usize,
    node: usize,
    lat: f64,
    lng: f64,
    service_duration: f64,
    window: TimeInterval,
    required_skills: SkillSet,
    priority: Option<f64>,
    profit_forecast: Option<f64>,
}

impl ServiceStop {
    /// Creates a stop with no skill requirements at coordinates (0, 0).
    pub fn new(id: usize, node: usize, window: TimeInterval, service_duration: f64) -> Self {
        Self {
            id,
            node,
            lat: 0.0,
            lng: 0.0,
            service_duration,
            window,
            required_skills: SkillSet::new(),
            priority: None,
            profit_forecast: None,
        }
    }

    /// Sets the coordinates.
    pub fn with_location(mut self, lat: f64, lng: f64) -> Self {
        self.lat = lat;
        self.lng = lng;
        self
    }

    /// Sets the skills a technician needs for this visit.
    pub fn with_required_skills(mut self, skills: SkillSet) -> Self {
        self.required_skills = skills;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the profit forecast.
    pub fn with_profit_forecast(mut self, profit: f64) -> Self {
        self.profit_forecast = Some(profit);
        self
    }

    /// Identifier from the instance file.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Global node index in the travel matrices.
    pub fn node(&self) -> usize {
        self.node
    }

    /// Latitude.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Time on site.
    pub fn service_duration(&self) -> f64 {
        self.service_duration
    }

    /// Interval in which service may start.
    pub fn window(&self) -> &TimeInterval {
        &self.window
    }

    /// Skills required to perform the service.
    pub fn required_skills(&self) -> &SkillSet {
        &self.required_skills
    }

    /// Priority, when the instance provides one.
    pub fn priority(&self) -> Option<f64> {
        self.priority
    }

    /// Expected profit, when the instance provides one.
    pub fn profit_forecast(&self) -> Option<f64> {
        self.profit_forecast
    }

    /// Temporal distance between the earliest service starts of two stops.
    ///
    /// Symmetric and non-negative.
    pub fn service_start_distance(&self, other: &ServiceStop) -> f64 {
        (self.window.earliest() - other.window.earliest()).abs()
    }
}
