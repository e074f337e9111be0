//! The immutable routing universe.

use serde::Serialize;

use crate::construction::{SymmetricDifference, WindowDissimilarity};
use crate::distance::TravelMatrix;
use crate::error::{Error, Result};
use crate::instance::Instance;

use super::{Depot, LunchBreak, NormalizationStats, ServiceMap, ServiceStop, Vehicle};

/// Kind of a node in the visualization graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    /// A depot.
    Depot,
    /// A service stop.
    Stop,
}

/// A node as handed to a visualization collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// Global node index.
    pub index: usize,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
    /// Depot or stop.
    pub kind: NodeKind,
}

/// Depots, fleet, demand, matrices and derived data.
///
/// Built once by an explicit call and then shared by reference with every
/// component; nothing mutates it afterwards. Stops are addressed by their
/// position in [`demand`](Problem::demand), vehicles by their position in
/// [`fleet`](Problem::fleet).
#[derive(Debug)]
pub struct Problem {
    depots: Vec<Depot>,
    demand: Vec<ServiceStop>,
    fleet: Vec<Vehicle>,
    distances: TravelMatrix,
    durations: TravelMatrix,
    lunch: Option<LunchBreak>,
    service_map: ServiceMap,
    stats: NormalizationStats,
    dissimilarity: Box<dyn WindowDissimilarity>,
}

impl Problem {
    /// Builds a problem using [`SymmetricDifference`] as the window measure.
    pub fn new(instance: Instance) -> Result<Self> {
        Self::with_dissimilarity(instance, SymmetricDifference)
    }

    /// Builds a problem with a caller-supplied window dissimilarity.
    ///
    /// Validates cross references and matrix shapes, binds every vehicle to
    /// its depot, builds the service map and computes the statistics.
    pub fn with_dissimilarity<W>(instance: Instance, dissimilarity: W) -> Result<Self>
    where
        W: WindowDissimilarity + 'static,
    {
        let Instance {
            depots,
            demand,
            mut fleet,
            distances,
            durations,
            lunch,
            avg_driving_cost,
        } = instance;

        if demand.is_empty() {
            return Err(Error::data("demand", "instance contains no service stops"));
        }

        let nodes = depots.len() + demand.len();
        for (name, m) in [("distances", &distances), ("durations", &durations)] {
            if m.size() != nodes {
                return Err(Error::data(
                    name,
                    format!(
                        "matrix has {} nodes but the instance has {} depots and {} stops",
                        m.size(),
                        depots.len(),
                        demand.len()
                    ),
                ));
            }
            m.validate(name)?;
        }

        for (di, depot) in depots.iter().enumerate() {
            if depot.node() != di {
                return Err(Error::data(
                    format!("depot {}", depot.id()),
                    format!("expected node index {di}, found {}", depot.node()),
                ));
            }
        }
        for (si, stop) in demand.iter().enumerate() {
            if stop.node() != depots.len() + si {
                return Err(Error::data(
                    format!("stop {}", stop.id()),
                    format!(
                        "expected node index {}, found {}",
                        depots.len() + si,
                        stop.node()
                    ),
                ));
            }
            if !(stop.service_duration() >= 0.0) {
                return Err(Error::data(
                    format!("stop {}", stop.id()),
                    "service duration must be non-negative",
                ));
            }
        }

        let mut home: Vec<Option<usize>> = vec![None; fleet.len()];
        for (di, depot) in depots.iter().enumerate() {
            for &vi in depot.vehicles() {
                let slot = home.get_mut(vi).ok_or_else(|| {
                    Error::data(
                        format!("depot {}", depot.id()),
                        format!("vehicle index {vi} out of range (fleet has {})", fleet.len()),
                    )
                })?;
                if let Some(other) = slot.replace(di) {
                    return Err(Error::data(
                        format!("depot {}", depot.id()),
                        format!("vehicle index {vi} is already assigned to depot position {other}"),
                    ));
                }
            }
        }
        for (vi, vehicle) in fleet.iter_mut().enumerate() {
            let depot = home[vi].ok_or_else(|| {
                Error::data(
                    format!("vehicle {}", vehicle.id()),
                    "vehicle is not assigned to any depot",
                )
            })?;
            vehicle.set_depot(depot);
            if !(vehicle.overtime_threshold() >= 0.0)
                || vehicle.overtime_threshold() > vehicle.max_overtime()
            {
                return Err(Error::data(
                    format!("vehicle {}", vehicle.id()),
                    format!(
                        "overtime threshold {} must be within [0, max overtime {}]",
                        vehicle.overtime_threshold(),
                        vehicle.max_overtime()
                    ),
                ));
            }
            if !(vehicle.overtime_cost() >= 0.0) {
                return Err(Error::data(
                    format!("vehicle {}", vehicle.id()),
                    "overtime cost must be non-negative",
                ));
            }
        }

        let service_map = ServiceMap::build(&demand, &fleet);
        for orphan in service_map.orphans() {
            tracing::warn!(
                stop = demand[orphan].id(),
                "no vehicle has the skills to serve this stop; it will stay unassigned"
            );
        }

        let stats = NormalizationStats::compute(
            &demand,
            &durations,
            depots.len(),
            &dissimilarity,
            avg_driving_cost,
        )?;

        tracing::info!(
            depots = depots.len(),
            vehicles = fleet.len(),
            stops = demand.len(),
            "problem loaded"
        );

        Ok(Self {
            depots,
            demand,
            fleet,
            distances,
            durations,
            lunch,
            service_map,
            stats,
            dissimilarity: Box::new(dissimilarity),
        })
    }

    /// Depots, in node order.
    pub fn depots(&self) -> &[Depot] {
        &self.depots
    }

    /// Service stops, in node order.
    pub fn demand(&self) -> &[ServiceStop] {
        &self.demand
    }

    /// All vehicles.
    pub fn fleet(&self) -> &[Vehicle] {
        &self.fleet
    }

    /// Travel distance matrix.
    pub fn distances(&self) -> &TravelMatrix {
        &self.distances
    }

    /// Travel time matrix.
    pub fn durations(&self) -> &TravelMatrix {
        &self.durations
    }

    /// Shared lunch break, if any.
    pub fn lunch(&self) -> Option<&LunchBreak> {
        self.lunch.as_ref()
    }

    /// Stop → eligible vehicles.
    pub fn service_map(&self) -> &ServiceMap {
        &self.service_map
    }

    /// Normalization statistics.
    pub fn stats(&self) -> &NormalizationStats {
        &self.stats
    }

    /// Number of service stops.
    pub fn num_stops(&self) -> usize {
        self.demand.len()
    }

    /// Matrix node of the depot `vehicle` starts from.
    pub fn depot_node(&self, vehicle: usize) -> usize {
        self.depots[self.fleet[vehicle].depot()].node()
    }

    /// Returns `true` if `vehicle` has the skills for `stop`.
    pub fn can_serve(&self, vehicle: usize, stop: usize) -> bool {
        self.service_map.allows(stop, vehicle)
    }

    /// Temporal distance between the earliest starts of two stops.
    pub fn service_time_start_distance(&self, a: usize, b: usize) -> f64 {
        self.demand[a].service_start_distance(&self.demand[b])
    }

    /// Window dissimilarity between two stops.
    pub fn time_window_dissimilarity(&self, a: usize, b: usize) -> f64 {
        self.dissimilarity
            .dissimilarity(self.demand[a].window(), self.demand[b].window())
    }

    /// Travel time between two stops.
    pub fn stop_travel_time(&self, a: usize, b: usize) -> f64 {
        self.durations
            .get(self.demand[a].node(), self.demand[b].node())
    }

    /// Nodes for a graph rendering, depots first.
    pub fn nodes(&self) -> Vec<Node> {
        let depots = self.depots.iter().map(|d| Node {
            index: d.node(),
            lat: d.lat(),
            lng: d.lng(),
            kind: NodeKind::Depot,
        });
        let stops = self.demand.iter().map(|s| Node {
            index: s.node(),
            lat: s.lat(),
            lng: s.lng(),
            kind: NodeKind::Stop,
        });
        depots.chain(stops).collect()
    }
}
