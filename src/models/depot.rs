//! Depot where technicians start and end their day.

use serde::{Deserialize, Serialize};

use super::TimeInterval;

/// A depot with its assigned vehicles.
///
/// Depots are open the whole planning day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depot {
    id: usize,
    node: usize,
    lat: f64,
    lng: f64,
    availability: TimeInterval,
    vehicles: Vec<usize>,
}

impl Depot {
    /// Creates a depot at the given matrix node.
    pub fn new(id: usize, node: usize, lat: f64, lng: f64) -> Self {
        Self {
            id,
            node,
            lat,
            lng,
            availability: TimeInterval::day(),
            vehicles: Vec::new(),
        }
    }

    /// Assigns fleet indices to this depot.
    pub fn with_vehicles(mut self, vehicles: Vec<usize>) -> Self {
        self.vehicles = vehicles;
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

    /// Opening hours.
    pub fn availability(&self) -> &TimeInterval {
        &self.availability
    }

    /// Fleet indices based here.
    pub fn vehicles(&self) -> &[usize] {
        &self.vehicles
    }
}
