//! Normalization statistics over the demand.
//!
//! Destroy and repair scoring mixes travel time, temporal distance and
//! window shape. These maxima bring each dimension into a comparable range.

use serde::{Deserialize, Serialize};

use crate::construction::WindowDissimilarity;
use crate::distance::TravelMatrix;
use crate::error::{Error, Result};

use super::ServiceStop;

/// Default driving cost per distance unit.
pub const DEFAULT_AVG_DRIVING_COST: f64 = 0.0001;

/// Maxima computed once after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizationStats {
    /// Largest `|earliest_i - earliest_j|` over stop pairs.
    pub max_service_start_distance: f64,
    /// Largest window dissimilarity over stop pairs.
    pub max_time_window_distance: f64,
    /// Longest stop window.
    pub max_time_window_length: f64,
    /// Longest service duration.
    pub max_service_time: f64,
    /// The two largest travel times between stops, ascending.
    pub max_travel_times: Vec<f64>,
    /// Driving cost per distance unit.
    pub avg_driving_cost: f64,
}

impl NormalizationStats {
    /// Scans the demand once (O(n²) in the number of stops).
    ///
    /// Depots are skipped: their day-long windows contain every stop window.
    /// Fails when `demand` is empty because no maximum is defined.
    pub fn compute<W: WindowDissimilarity + ?Sized>(
        demand: &[ServiceStop],
        durations: &TravelMatrix,
        first_stop_node: usize,
        dissimilarity: &W,
        avg_driving_cost: f64,
    ) -> Result<Self> {
        if demand.is_empty() {
            return Err(Error::data(
                "demand",
                "at least one service stop is required to compute normalization statistics",
            ));
        }

        let mut max_start = 0.0_f64;
        let mut max_tw = 0.0_f64;
        for (i, a) in demand.iter().enumerate() {
            for b in &demand[i..] {
                max_start = max_start.max(a.service_start_distance(b));
                max_tw = max_tw.max(dissimilarity.dissimilarity(a.window(), b.window()));
            }
        }

        let max_time_window_length = demand
            .iter()
            .map(|s| s.window().length())
            .fold(0.0, f64::max);
        let max_service_time = demand
            .iter()
            .map(|s| s.service_duration())
            .fold(0.0, f64::max);

        let mut travel: Vec<f64> = durations.block_values(first_stop_node).collect();
        travel.sort_by(f64::total_cmp);
        let max_travel_times = travel[travel.len().saturating_sub(2)..].to_vec();

        Ok(Self {
            max_service_start_distance: max_start,
            max_time_window_distance: max_tw,
            max_time_window_length,
            max_service_time,
            max_travel_times,
            avg_driving_cost,
        })
    }

    /// Largest travel time between two stops.
    pub fn max_travel_time(&self) -> f64 {
        self.max_travel_times.last().copied().unwrap_or(0.0)
    }

    /// Scales `value` by `max`, or returns it unchanged when `max` is zero.
    ///
    /// A zero maximum means every stop looks the same along that dimension,
    /// so there is nothing to discriminate.
    pub fn normalize(value: f64, max: f64) -> f64 {
        if max > 0.0 {
            value / max
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construction::SymmetricDifference;
    use crate::models::TimeInterval;
    use proptest::prelude::*;

    fn stop(i: usize, a: f64, b: f64, service: f64) -> ServiceStop {
        ServiceStop::new(i, i + 1, TimeInterval::new(a, b).expect("valid"), service)
    }

    fn matrix(n: usize) -> TravelMatrix {
        let mut m = TravelMatrix::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                m.set_symmetric(i, j, (i * 10 + j) as f64);
            }
        }
        m
    }

    #[test]
    fn test_compute_maxima() {
        let demand = vec![
            stop(0, 100.0, 200.0, 10.0),
            stop(1, 150.0, 400.0, 30.0),
            stop(2, 90.0, 100.0, 5.0),
        ];
        let stats =
            NormalizationStats::compute(&demand, &matrix(4), 1, &SymmetricDifference, 0.5)
                .expect("valid");
        assert_eq!(stats.max_service_start_distance, 60.0);
        assert_eq!(stats.max_time_window_length, 250.0);
        assert_eq!(stats.max_service_time, 30.0);
        // [90,100] vs [150,400]: no overlap, lengths 10 + 250
        assert_eq!(stats.max_time_window_distance, 260.0);
        // stop block of the 4-node matrix: 12, 13, 23 (each twice) and zeros
        assert_eq!(stats.max_travel_times, vec![23.0, 23.0]);
        assert_eq!(stats.max_travel_time(), 23.0);
        assert_eq!(stats.avg_driving_cost, 0.5);
    }

    #[test]
    fn test_single_stop_is_zero() {
        let demand = vec![stop(0, 100.0, 200.0, 10.0)];
        let stats =
            NormalizationStats::compute(&demand, &matrix(2), 1, &SymmetricDifference, 1.0)
                .expect("valid");
        assert_eq!(stats.max_service_start_distance, 0.0);
        assert_eq!(stats.max_time_window_distance, 0.0);
        assert_eq!(stats.max_travel_times, vec![0.0]);
    }

    #[test]
    fn test_empty_demand_fails() {
        let err = NormalizationStats::compute(&[], &matrix(1), 1, &SymmetricDifference, 1.0)
            .expect_err("empty demand");
        assert!(err.is_data());
    }

    #[test]
    fn test_normalize_zero_denominator() {
        assert_eq!(NormalizationStats::normalize(5.0, 10.0), 0.5);
        assert_eq!(NormalizationStats::normalize(5.0, 0.0), 5.0);
    }

    proptest! {
        #[test]
        fn prop_start_distance_symmetric_and_maximal(
            earliest in prop::collection::vec(0.0f64..86_400.0, 1..12),
        ) {
            let demand: Vec<ServiceStop> = earliest
                .iter()
                .enumerate()
                .map(|(i, &a)| stop(i, a, a + 600.0, 10.0))
                .collect();
            let stats = NormalizationStats::compute(
                &demand,
                &matrix(demand.len() + 1),
                1,
                &SymmetricDifference,
                1.0,
            )
            .expect("valid");

            let mut scan = 0.0_f64;
            for a in &demand {
                for b in &demand {
                    prop_assert_eq!(a.service_start_distance(b), b.service_start_distance(a));
                    scan = scan.max(a.service_start_distance(b));
                }
            }
            prop_assert_eq!(stats.max_service_start_distance, scan);
        }
    }
}
