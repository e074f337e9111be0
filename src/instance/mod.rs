//! Instance ingestion.
//!
//! An instance is a CSV table (description row, vehicle rows, depot rows,
//! stop rows) plus a JSON document holding the distance and duration
//! matrices. [`Instance`] is the raw, validated-on-read content; hand it to
//! [`Problem::new`](crate::models::Problem::new) to derive the lookup data.

mod reader;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::distance::TravelMatrix;
use crate::error::Result;
use crate::models::{Depot, LunchBreak, ServiceStop, Vehicle, DEFAULT_AVG_DRIVING_COST};

/// Column layout of the stop rows after the skill list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StopSchema {
    /// `lat, lng, duration, earliest, latest, profit`
    #[default]
    Profit,
    /// `priority, lat, lng, duration, earliest, latest`
    Priority,
    /// `priority, lat, lng, duration, earliest, latest, profit`
    PriorityAndProfit,
}

/// Reading options not contained in the files themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstanceFormat {
    /// Layout of the stop rows.
    pub stop_schema: StopSchema,
    /// Driving cost per distance unit.
    pub avg_driving_cost: f64,
}

impl Default for InstanceFormat {
    fn default() -> Self {
        Self {
            stop_schema: StopSchema::default(),
            avg_driving_cost: DEFAULT_AVG_DRIVING_COST,
        }
    }
}

impl InstanceFormat {
    /// Sets the stop row layout.
    pub fn with_stop_schema(mut self, schema: StopSchema) -> Self {
        self.stop_schema = schema;
        self
    }

    /// Sets the driving cost per distance unit.
    pub fn with_avg_driving_cost(mut self, cost: f64) -> Self {
        self.avg_driving_cost = cost;
        self
    }
}

/// Raw instance content.
///
/// Depots occupy matrix nodes `0..depots.len()`, stops follow in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    /// Depots with the fleet indices based at each.
    pub depots: Vec<Depot>,
    /// Service stops.
    pub demand: Vec<ServiceStop>,
    /// All vehicles.
    pub fleet: Vec<Vehicle>,
    /// Travel distances between nodes.
    pub distances: TravelMatrix,
    /// Travel times between nodes.
    pub durations: TravelMatrix,
    /// Shared lunch break.
    pub lunch: Option<LunchBreak>,
    /// Driving cost per distance unit.
    pub avg_driving_cost: f64,
}

impl Instance {
    /// Reads an instance table and a matrix document from disk.
    pub fn from_paths(
        table: impl AsRef<Path>,
        matrices: impl AsRef<Path>,
        format: InstanceFormat,
    ) -> Result<Self> {
        let table = BufReader::new(File::open(table)?);
        let matrices = BufReader::new(File::open(matrices)?);
        Self::from_readers(table, matrices, format)
    }

    /// Reads an instance from any pair of readers.
    pub fn from_readers<T: Read, M: Read>(
        table: T,
        matrices: M,
        format: InstanceFormat,
    ) -> Result<Self> {
        let table = reader::read_table(table, format.stop_schema)?;
        let (distances, durations) = reader::read_matrices(matrices)?;
        tracing::debug!(
            vehicles = table.fleet.len(),
            depots = table.depots.len(),
            stops = table.demand.len(),
            nodes = distances.size(),
            "instance read"
        );
        Ok(Self {
            depots: table.depots,
            demand: table.demand,
            fleet: table.fleet,
            distances,
            durations,
            lunch: table.lunch,
            avg_driving_cost: format.avg_driving_cost,
        })
    }
}
