//! Skill sets and the stop → vehicle service map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{ServiceStop, Vehicle};

/// An ordered set of skill labels.
///
/// # Examples
///
/// ```
/// use u_techroute::models::SkillSet;
///
/// let tech = SkillSet::from_iter(["A", "B"]);
/// assert!(tech.covers(&SkillSet::from_iter(["A"])));
/// assert!(!tech.covers(&SkillSet::from_iter(["A", "C"])));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    /// Creates an empty skill set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a skill label.
    pub fn insert(&mut self, skill: impl Into<String>) {
        self.0.insert(skill.into());
    }

    /// Returns `true` if every skill in `required` is present here.
    pub fn covers(&self, required: &SkillSet) -> bool {
        required.0.is_subset(&self.0)
    }

    /// Number of skills.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over skill labels in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// For each stop, the ordered list of fleet indices able to serve it.
///
/// Built once from the fleet and demand; `vehicle ∈ map[stop]` iff the
/// vehicle's skills cover the stop's required skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceMap {
    eligible: Vec<Vec<usize>>,
}

impl ServiceMap {
    /// Builds the map with an O(|demand|·|fleet|) scan.
    pub fn build(demand: &[ServiceStop], fleet: &[Vehicle]) -> Self {
        let eligible = demand
            .iter()
            .map(|stop| {
                fleet
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| v.can_serve(stop))
                    .map(|(vi, _)| vi)
                    .collect()
            })
            .collect();
        Self { eligible }
    }

    /// Vehicles able to serve `stop`.
    pub fn vehicles_for(&self, stop: usize) -> &[usize] {
        &self.eligible[stop]
    }

    /// Returns `true` if `vehicle` may serve `stop`.
    pub fn allows(&self, stop: usize, vehicle: usize) -> bool {
        self.eligible[stop].binary_search(&vehicle).is_ok()
    }

    /// Stops no vehicle can serve.
    pub fn orphans(&self) -> Vec<usize> {
        self.eligible
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_empty())
            .map(|(s, _)| s)
            .collect()
    }

    /// Number of stops covered by the map.
    pub fn len(&self) -> usize {
        self.eligible.len()
    }

    /// Returns `true` if the map covers no stops.
    pub fn is_empty(&self) -> bool {
        self.eligible.is_empty()
    }
}
