//! Technician vehicle with skills and overtime parameters.

use serde::{Deserialize, Serialize};

use super::{ServiceStop, SkillSet};

/// A technician's vehicle.
///
/// Working time beyond `overtime_threshold` is overtime, charged at
/// `overtime_cost` per time unit. `max_overtime` caps the whole shift: a
/// route may not last longer than it.
///
/// # Examples
///
/// ```
/// use u_techroute::models::{SkillSet, Vehicle};
///
/// let v = Vehicle::new(3, SkillSet::from_iter(["electric"]), 28_800.0, 36_000.0, 0.5);
/// assert_eq!(v.id(), 3);
/// assert_eq!(v.overtime(30_000.0), 1_200.0);
/// assert_eq!(v.overtime(20_000.0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    id: usize,
    skills: SkillSet,
    overtime_threshold: f64,
    max_overtime: f64,
    overtime_cost: f64,
    depot: usize,
}

impl Vehicle {
    /// Creates a vehicle based at depot 0.
    pub fn new(
        id: usize,
        skills: SkillSet,
        overtime_threshold: f64,
        max_overtime: f64,
        overtime_cost: f64,
    ) -> Self {
        Self {
            id,
            skills,
            overtime_threshold,
            max_overtime,
            overtime_cost,
            depot: 0,
        }
    }

    /// Sets the home depot (position in the depot list).
    pub fn with_depot(mut self, depot: usize) -> Self {
        self.depot = depot;
        self
    }

    pub(crate) fn set_depot(&mut self, depot: usize) {
        self.depot = depot;
    }

    /// Identifier from the instance file.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Skills this technician holds.
    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    /// Regular working time; anything beyond is overtime.
    pub fn overtime_threshold(&self) -> f64 {
        self.overtime_threshold
    }

    /// Maximum shift length, overtime included.
    pub fn max_overtime(&self) -> f64 {
        self.max_overtime
    }

    /// Cost per unit of overtime.
    pub fn overtime_cost(&self) -> f64 {
        self.overtime_cost
    }

    /// Home depot (position in the depot list).
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Returns `true` if this vehicle's skills cover the stop's requirements.
    pub fn can_serve(&self, stop: &ServiceStop) -> bool {
        self.skills.covers(stop.required_skills())
    }

    /// Overtime incurred by a route lasting `duration`.
    pub fn overtime(&self, duration: f64) -> f64 {
        (duration - self.overtime_threshold).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeInterval;

    #[test]
    fn test_vehicle_new() {
        let v = Vehicle::new(0, SkillSet::new(), 100.0, 150.0, 2.0);
        assert_eq!(v.id(), 0);
        assert_eq!(v.depot(), 0);
        assert_eq!(v.overtime_threshold(), 100.0);
        assert_eq!(v.max_overtime(), 150.0);
        assert_eq!(v.overtime_cost(), 2.0);
        assert!(v.skills().is_empty());
    }

    #[test]
    fn test_with_depot() {
        let v = Vehicle::new(0, SkillSet::new(), 1.0, 1.0, 0.0).with_depot(2);
        assert_eq!(v.depot(), 2);
    }

    #[test]
    fn test_can_serve() {
        let v = Vehicle::new(0, SkillSet::from_iter(["A", "B"]), 1.0, 2.0, 0.0);
        let easy = ServiceStop::new(0, 1, TimeInterval::day(), 5.0)
            .with_required_skills(SkillSet::from_iter(["A"]));
        let hard = ServiceStop::new(1, 2, TimeInterval::day(), 5.0)
            .with_required_skills(SkillSet::from_iter(["A", "C"]));
        assert!(v.can_serve(&easy));
        assert!(!v.can_serve(&hard));
    }

    #[test]
    fn test_overtime() {
        let v = Vehicle::new(0, SkillSet::new(), 100.0, 150.0, 2.0);
        assert_eq!(v.overtime(90.0), 0.0);
        assert_eq!(v.overtime(100.0), 0.0);
        assert_eq!(v.overtime(130.0), 30.0);
    }
}
