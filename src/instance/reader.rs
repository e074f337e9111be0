//! CSV table and JSON matrix readers.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;

use crate::distance::TravelMatrix;
use crate::error::{Error, Result};
use crate::models::{Depot, LunchBreak, ServiceStop, SkillSet, TimeInterval, Vehicle};

use super::StopSchema;

/// Everything read from the instance table.
#[derive(Debug)]
pub(super) struct Table {
    pub fleet: Vec<Vehicle>,
    pub depots: Vec<Depot>,
    pub demand: Vec<ServiceStop>,
    pub lunch: Option<LunchBreak>,
}

#[derive(Debug, Deserialize)]
struct MatrixDocument {
    distances: Vec<Vec<f64>>,
    durations: Vec<Vec<f64>>,
}

/// Reads `{ "distances": [[..]], "durations": [[..]] }`.
pub(super) fn read_matrices<R: Read>(reader: R) -> Result<(TravelMatrix, TravelMatrix)> {
    let doc: MatrixDocument = serde_json::from_reader(reader)?;
    let distances = TravelMatrix::from_rows("distances", doc.distances)?;
    let durations = TravelMatrix::from_rows("durations", doc.durations)?;
    if distances.size() != durations.size() {
        return Err(Error::data(
            "matrices",
            format!(
                "distances has {} nodes but durations has {}",
                distances.size(),
                durations.size()
            ),
        ));
    }
    Ok((distances, durations))
}

/// Cursor over the cells of one data row.
struct Row<'a> {
    record: &'a StringRecord,
    /// 1-based data row number (the header line is not counted).
    number: usize,
    col: usize,
}

impl<'a> Row<'a> {
    fn new(record: &'a StringRecord, number: usize) -> Self {
        Self {
            record,
            number,
            col: 0,
        }
    }

    fn context(&self, field: &str) -> String {
        format!("row {}, {field}", self.number)
    }

    fn cell(&mut self, field: &str) -> Result<&'a str> {
        let value = self
            .record
            .get(self.col)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::data(self.context(field), "missing value"))?;
        self.col += 1;
        Ok(value)
    }

    fn number(&mut self, field: &str) -> Result<f64> {
        let raw = self.cell(field)?;
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(Error::data(
                self.context(field),
                format!("expected a number, found `{raw}`"),
            )),
        }
    }

    /// A non-negative integer, possibly written as `3.0`.
    fn count(&mut self, field: &str) -> Result<usize> {
        let v = self.number(field)?;
        if v < 0.0 || v.fract() != 0.0 {
            return Err(Error::data(
                self.context(field),
                format!("expected a non-negative integer, found {v}"),
            ));
        }
        Ok(v as usize)
    }

    fn skills(&mut self) -> Result<SkillSet> {
        let n = self.count("skill count")?;
        let mut skills = SkillSet::new();
        for _ in 0..n {
            skills.insert(normalize_label(self.cell("skill")?));
        }
        Ok(skills)
    }
}

/// Numeric labels read as floats (`1.0`) compare equal to integers (`1`).
fn normalize_label(raw: &str) -> String {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 => format!("{}", v as i64),
        _ => raw.to_string(),
    }
}

fn interval(row: &Row<'_>, field: &str, earliest: f64, latest: f64) -> Result<TimeInterval> {
    TimeInterval::new(earliest, latest).ok_or_else(|| {
        Error::data(
            row.context(field),
            format!("window [{earliest}, {latest}] is reversed"),
        )
    })
}

/// Reads the instance table. The first line is a column header and is skipped.
pub(super) fn read_table<R: Read>(reader: R, schema: StopSchema) -> Result<Table> {
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let records = csv.records().collect::<std::result::Result<Vec<_>, _>>()?;
    let mut rows = records.iter().enumerate().map(|(i, r)| Row::new(r, i + 1));

    let mut next_row = |what: &str| {
        rows.next().ok_or_else(|| {
            Error::data("instance table", format!("unexpected end of table, expected {what}"))
        })
    };

    let mut desc = next_row("the description row")?;
    let num_vehicles = desc.count("vehicle count")?;
    let num_stops = desc.count("stop count")?;
    let num_depots = desc.count("depot count")?;
    let lunch_start = desc.number("lunch start")?;
    let lunch_end = desc.number("lunch end")?;
    let lunch_duration = desc.number("lunch duration")?;
    let window = interval(&desc, "lunch window", lunch_start, lunch_end)?;
    let lunch = LunchBreak::new(window, lunch_duration).ok_or_else(|| {
        Error::data(desc.context("lunch duration"), "duration must be non-negative")
    })?;

    let declared = num_vehicles
        .saturating_add(num_depots)
        .saturating_add(num_stops);
    let remaining = records.len() - 1;
    if declared > remaining {
        return Err(Error::data(
            desc.context("vehicle count"),
            format!(
                "description declares {num_vehicles} vehicles, {num_depots} depots and \
                 {num_stops} stops but the table has {remaining} rows after it"
            ),
        ));
    }

    let mut fleet = Vec::with_capacity(num_vehicles);
    for _ in 0..num_vehicles {
        let mut row = next_row("a vehicle row")?;
        let id = row.count("vehicle id")?;
        let skills = row.skills()?;
        let threshold = row.number("overtime threshold")?;
        let max_overtime = row.number("max overtime")?;
        let cost = row.number("overtime cost")?;
        fleet.push(Vehicle::new(id, skills, threshold, max_overtime, cost));
    }

    let mut depots = Vec::with_capacity(num_depots);
    for node in 0..num_depots {
        let mut row = next_row("a depot row")?;
        let id = row.count("depot id")?;
        let n = row.count("vehicle count")?;
        let mut vehicles = Vec::new();
        for _ in 0..n {
            let v = row.count("vehicle index")?;
            if v >= num_vehicles {
                return Err(Error::data(
                    row.context("vehicle index"),
                    format!("vehicle index {v} out of range (fleet has {num_vehicles})"),
                ));
            }
            vehicles.push(v);
        }
        let lat = row.number("lat")?;
        let lng = row.number("lng")?;
        depots.push(Depot::new(id, node, lat, lng).with_vehicles(vehicles));
    }

    let mut demand = Vec::with_capacity(num_stops);
    for i in 0..num_stops {
        let mut row = next_row("a stop row")?;
        let id = row.count("stop id")?;
        let skills = row.skills()?;
        let priority = match schema {
            StopSchema::Profit => None,
            StopSchema::Priority | StopSchema::PriorityAndProfit => Some(row.number("priority")?),
        };
        let lat = row.number("lat")?;
        let lng = row.number("lng")?;
        let duration = row.number("service duration")?;
        if duration < 0.0 {
            return Err(Error::data(
                row.context("service duration"),
                format!("must be non-negative, found {duration}"),
            ));
        }
        let earliest = row.number("earliest")?;
        let latest = row.number("latest")?;
        let window = interval(&row, "service window", earliest, latest)?;
        let profit = match schema {
            StopSchema::Priority => None,
            StopSchema::Profit | StopSchema::PriorityAndProfit => Some(row.number("profit")?),
        };

        let mut stop = ServiceStop::new(id, num_depots + i, window, duration)
            .with_location(lat, lng)
            .with_required_skills(skills);
        if let Some(p) = priority {
            stop = stop.with_priority(p);
        }
        if let Some(p) = profit {
            stop = stop.with_profit_forecast(p);
        }
        demand.push(stop);
    }

    Ok(Table {
        fleet,
        depots,
        demand,
        lunch: Some(lunch),
    })
}
