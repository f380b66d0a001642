use std::io;

use csv::{ReaderBuilder, StringRecord, Writer};
use ordered_float::OrderedFloat;
use thiserror::Error;
use tracing::debug;

use crate::geo::{GeoError, GeoPoint};

#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("line {line}: missing field `{field}`")]
    MissingField { line: u64, field: &'static str },
    #[error("line {line}: `{field}` is not a number: {value:?}")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
    },
    #[error("line {line}: {source}")]
    InvalidPoint { line: u64, source: GeoError },
}

#[derive(Clone, Debug)]
pub struct BatchOptions {
    pub origin: GeoPoint,
    /// Without a radius every row is kept and `within` is left empty.
    pub radius: Option<f64>,
    pub include_outside: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DistanceRow {
    pub id: String,
    pub distance: f64,
    pub within: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub points: usize,
    pub within: usize,
    pub written: usize,
    pub max_distance: Option<f64>,
}

fn field<'r>(
    record: &'r StringRecord,
    idx: usize,
    name: &'static str,
    line: u64,
) -> Result<&'r str, BatchError> {
    record
        .get(idx)
        .map(str::trim)
        .ok_or(BatchError::MissingField { line, field: name })
}

fn number(
    record: &StringRecord,
    idx: usize,
    name: &'static str,
    line: u64,
) -> Result<f64, BatchError> {
    let raw = field(record, idx, name, line)?;
    raw.parse().map_err(|_| BatchError::InvalidNumber {
        line,
        field: name,
        value: raw.to_string(),
    })
}

/// Reads `id,lat,lon` rows (header line required).
pub fn read_points<R: io::Read>(reader: R) -> Result<Vec<(String, GeoPoint)>, BatchError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut points = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let id = field(&record, 0, "id", line)?.to_string();
        let lat = number(&record, 1, "lat", line)?;
        let lon = number(&record, 2, "lon", line)?;
        let point = GeoPoint::try_new(lat, lon)
            .map_err(|source| BatchError::InvalidPoint { line, source })?;
        points.push((id, point));
    }
    Ok(points)
}

/// Distance of every point from the origin, nearest first.
pub fn compute(points: &[(String, GeoPoint)], options: &BatchOptions) -> Vec<DistanceRow> {
    let mut rows: Vec<DistanceRow> = points
        .iter()
        .map(|(id, point)| DistanceRow {
            id: id.clone(),
            distance: options.origin.distance_to(point),
            within: options.radius.map(|r| options.origin.is_within_radius(point, r)),
        })
        .collect();
    rows.sort_by_key(|row| OrderedFloat(row.distance));
    rows
}

pub fn write_rows<W: io::Write>(writer: W, rows: &[DistanceRow]) -> Result<(), BatchError> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(["id", "distance_m", "within"])?;
    for row in rows {
        let within = row.within.map(|w| w.to_string()).unwrap_or_default();
        let distance = format!("{:.6}", row.distance);
        wtr.write_record([row.id.as_str(), distance.as_str(), within.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn summarize(rows: &[DistanceRow]) -> Summary {
    Summary {
        points: rows.len(),
        within: rows.iter().filter(|r| r.within == Some(true)).count(),
        written: 0,
        max_distance: rows.iter().map(|r| OrderedFloat(r.distance)).max().map(|d| d.0),
    }
}

/// Reads points, ranks them by distance from `options.origin`, and writes
/// the kept rows as CSV when a writer is given.
pub fn run<R: io::Read, W: io::Write>(
    reader: R,
    writer: Option<W>,
    options: &BatchOptions,
) -> Result<Summary, BatchError> {
    let points = read_points(reader)?;
    debug!(points = points.len(), origin = %options.origin, "loaded points");

    let rows = compute(&points, options);
    let mut summary = summarize(&rows);

    let kept: Vec<DistanceRow> = rows
        .into_iter()
        .filter(|r| options.include_outside || r.within != Some(false))
        .collect();
    summary.written = kept.len();

    if let Some(writer) = writer {
        write_rows(writer, &kept)?;
    }
    debug!(
        within = summary.within,
        written = summary.written,
        "batch finished"
    );
    Ok(summary)
}
