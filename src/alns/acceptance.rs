//! Acceptance criteria.
//!
//! Each criterion decides whether a candidate replaces the current solution
//! and then tightens its own schedule (threshold or temperature). The value
//! used to judge iteration `k` is the one produced by the update of
//! iteration `k - 1`.
//!
//! # References
//!
//! - Santini, A., Ropke, S. & Hvattum, L.M. (2018). "A comparison of
//!   acceptance criteria for the adaptive large neighbourhood search
//!   metaheuristic", *Journal of Heuristics* 24(5), 783-815.
//! - Dueck, G. & Scheuer, T. (1990). "Threshold accepting", *Journal of
//!   Computational Physics* 90(1), 161-175.
//! - Kirkpatrick, S., Gelatt, C.D. & Vecchi, M.P. (1983). "Optimization by
//!   Simulated Annealing", *Science* 220(4598), 671-680.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Objective;
use crate::random::RandomSource;

/// How a schedule value moves towards its end value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UpdateMethod {
    /// `v' = v - step`
    #[default]
    Linear,
    /// `v' = step * v`
    Exponential,
}

/// One schedule step, floored at `end`.
///
/// # Examples
///
/// ```
/// use u_techroute::alns::{update, UpdateMethod};
///
/// assert_eq!(update(10.0, 2.0, 2.0, UpdateMethod::Linear), 8.0);
/// assert_eq!(update(3.0, 2.0, 2.0, UpdateMethod::Linear), 2.0);
/// assert_eq!(update(100.0, 1.0, 0.5, UpdateMethod::Exponential), 50.0);
/// ```
pub fn update(value: f64, end: f64, step: f64, method: UpdateMethod) -> f64 {
    let next = match method {
        UpdateMethod::Linear => value - step,
        UpdateMethod::Exponential => step * value,
    };
    next.max(end)
}

/// Decides whether a candidate becomes the new current solution.
///
/// Called once per search iteration. Implementations may keep internal state
/// that evolves with every call.
pub trait AcceptanceCriterion {
    /// Returns `true` if `candidate` should replace `current`.
    fn accept<S: Objective>(
        &mut self,
        rng: &mut dyn RandomSource,
        best: &S,
        current: &S,
        candidate: &S,
    ) -> bool;
}

fn validate_schedule(
    start: f64,
    end: f64,
    step: f64,
    method: UpdateMethod,
    strictly_positive: bool,
) -> Result<()> {
    let positive = |v: f64| if strictly_positive { v > 0.0 } else { v >= 0.0 };
    if !start.is_finite() || !positive(start) {
        return Err(Error::config(
            "start",
            format!("must be {}, got {start}", bound_name(strictly_positive)),
        ));
    }
    if !end.is_finite() || !positive(end) {
        return Err(Error::config(
            "end",
            format!("must be {}, got {end}", bound_name(strictly_positive)),
        ));
    }
    if !step.is_finite() || step < 0.0 {
        return Err(Error::config("step", format!("must be >= 0, got {step}")));
    }
    if start < end {
        return Err(Error::config(
            "start",
            format!("must be >= end ({end}), got {start}"),
        ));
    }
    if method == UpdateMethod::Exponential && step > 1.0 {
        return Err(Error::config(
            "step",
            format!("must be <= 1 for exponential updating, got {step}"),
        ));
    }
    Ok(())
}

fn bound_name(strictly_positive: bool) -> &'static str {
    if strictly_positive {
        "> 0"
    } else {
        ">= 0"
    }
}

/// Record-to-Record Travel.
///
/// Accepts a candidate whose objective exceeds the best by at most the
/// current threshold.
///
/// # Examples
///
/// ```
/// use u_techroute::alns::{AcceptanceCriterion, RecordToRecordTravel, UpdateMethod};
/// use u_techroute::random::SeededRandom;
///
/// let mut rrt = RecordToRecordTravel::new(5.0, 0.0, 1.0, UpdateMethod::Linear).unwrap();
/// let mut rng = SeededRandom::new(0);
/// // 105 - 100 = 5 <= 5
/// assert!(rrt.accept(&mut rng, &100.0, &110.0, &105.0));
/// // threshold is now 4
/// assert!(!rrt.accept(&mut rng, &100.0, &110.0, &105.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecordToRecordTravel {
    start: f64,
    end: f64,
    step: f64,
    method: UpdateMethod,
    threshold: f64,
}

impl RecordToRecordTravel {
    /// Creates the criterion.
    ///
    /// Both thresholds must be `>= 0`, `start >= end`, `step >= 0`, and
    /// `step <= 1` for exponential updating.
    pub fn new(start: f64, end: f64, step: f64, method: UpdateMethod) -> Result<Self> {
        validate_schedule(start, end, step, method, false)?;
        Ok(Self {
            start,
            end,
            step,
            method,
            threshold: start,
        })
    }

    /// Initial threshold.
    pub fn start_threshold(&self) -> f64 {
        self.start
    }

    /// Floor of the threshold.
    pub fn end_threshold(&self) -> f64 {
        self.end
    }

    /// Update step.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Update method.
    pub fn method(&self) -> UpdateMethod {
        self.method
    }

    /// Threshold used by the next call.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl AcceptanceCriterion for RecordToRecordTravel {
    fn accept<S: Objective>(
        &mut self,
        _rng: &mut dyn RandomSource,
        best: &S,
        _current: &S,
        candidate: &S,
    ) -> bool {
        let accepted = candidate.objective() - best.objective() <= self.threshold;
        self.threshold = update(self.threshold, self.end, self.step, self.method);
        accepted
    }
}

/// Simulated Annealing with the Metropolis rule.
///
/// Keeps the full history of temperatures (starting with the initial one),
/// computed probabilities and decisions for inspection. The history never
/// influences later decisions.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedAnnealing {
    start: f64,
    end: f64,
    step: f64,
    method: UpdateMethod,
    temperature: f64,
    temperatures: Vec<f64>,
    probabilities: Vec<f64>,
    decisions: Vec<bool>,
}

impl SimulatedAnnealing {
    /// Creates the criterion.
    ///
    /// Both temperatures must be `> 0`, `start >= end`, `step >= 0`, and
    /// `step <= 1` for exponential updating.
    pub fn new(start: f64, end: f64, step: f64, method: UpdateMethod) -> Result<Self> {
        validate_schedule(start, end, step, method, true)?;
        Ok(Self {
            start,
            end,
            step,
            method,
            temperature: start,
            temperatures: vec![start],
            probabilities: Vec::new(),
            decisions: Vec::new(),
        })
    }

    /// Initial temperature.
    pub fn start_temperature(&self) -> f64 {
        self.start
    }

    /// Floor of the temperature.
    pub fn end_temperature(&self) -> f64 {
        self.end
    }

    /// Update step.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Update method.
    pub fn method(&self) -> UpdateMethod {
        self.method
    }

    /// Temperature used by the next call.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Every temperature so far, starting with the initial one.
    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    /// Acceptance probability computed at each call.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Decision taken at each call.
    pub fn decisions(&self) -> &[bool] {
        &self.decisions
    }
}

impl AcceptanceCriterion for SimulatedAnnealing {
    fn accept<S: Objective>(
        &mut self,
        rng: &mut dyn RandomSource,
        _best: &S,
        current: &S,
        candidate: &S,
    ) -> bool {
        let probability = ((current.objective() - candidate.objective()) / self.temperature).exp();
        let accepted = probability >= 1.0 || rng.uniform() <= probability;

        self.probabilities.push(probability);
        self.decisions.push(accepted);
        self.temperature = update(self.temperature, self.end, self.step, self.method);
        self.temperatures.push(self.temperature);
        accepted
    }
}

/// Serializable description of an acceptance criterion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CriterionConfig {
    /// See [`RecordToRecordTravel`].
    RecordToRecordTravel {
        /// Initial threshold.
        start: f64,
        /// Threshold floor.
        end: f64,
        /// Update step.
        step: f64,
        /// Update method.
        #[serde(default)]
        method: UpdateMethod,
    },
    /// See [`SimulatedAnnealing`].
    SimulatedAnnealing {
        /// Initial temperature.
        start: f64,
        /// Temperature floor.
        end: f64,
        /// Update step.
        step: f64,
        /// Update method.
        #[serde(default)]
        method: UpdateMethod,
    },
}

impl CriterionConfig {
    /// Validates the parameters and builds the criterion.
    pub fn build(&self) -> Result<Criterion> {
        match *self {
            CriterionConfig::RecordToRecordTravel {
                start,
                end,
                step,
                method,
            } => RecordToRecordTravel::new(start, end, step, method).map(Criterion::from),
            CriterionConfig::SimulatedAnnealing {
                start,
                end,
                step,
                method,
            } => SimulatedAnnealing::new(start, end, step, method).map(Criterion::from),
        }
    }
}

/// Either built-in criterion behind one type.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// Record-to-Record Travel.
    RecordToRecordTravel(RecordToRecordTravel),
    /// Simulated Annealing.
    SimulatedAnnealing(SimulatedAnnealing),
}

impl From<RecordToRecordTravel> for Criterion {
    fn from(c: RecordToRecordTravel) -> Self {
        Criterion::RecordToRecordTravel(c)
    }
}

impl From<SimulatedAnnealing> for Criterion {
    fn from(c: SimulatedAnnealing) -> Self {
        Criterion::SimulatedAnnealing(c)
    }
}

impl AcceptanceCriterion for Criterion {
    fn accept<S: Objective>(
        &mut self,
        rng: &mut dyn RandomSource,
        best: &S,
        current: &S,
        candidate: &S,
    ) -> bool {
        match self {
            Criterion::RecordToRecordTravel(c) => c.accept(rng, best, current, candidate),
            Criterion::SimulatedAnnealing(c) => c.accept(rng, best, current, candidate),
        }
    }
}
