use crate::error::{DashboardError, Result};
use crate::models::{BaseTable, CollisionRecord};
use crate::utils::constants::*;
use crate::utils::coordinates::{is_missing_value, parse_coordinate};
use crate::utils::datetime::parse_crash_datetime;
use csv::StringRecord;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Positions of the consumed columns within a CSV header row
#[derive(Debug)]
struct ColumnIndex {
    crash_date: usize,
    crash_time: usize,
    latitude: usize,
    longitude: usize,
    persons_injured: usize,
    pedestrians_injured: usize,
    cyclists_injured: usize,
    motorists_injured: usize,
    on_street_name: usize,
    passthrough: Vec<(usize, String)>,
}

impl ColumnIndex {
    fn from_headers(headers: &[String]) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DashboardError::MissingColumn(name.to_string()))
        };

        let mut index = Self {
            crash_date: find(COL_CRASH_DATE)?,
            crash_time: find(COL_CRASH_TIME)?,
            latitude: find(COL_LATITUDE)?,
            longitude: find(COL_LONGITUDE)?,
            persons_injured: find(COL_PERSONS_INJURED)?,
            pedestrians_injured: find(COL_PEDESTRIANS_INJURED)?,
            cyclists_injured: find(COL_CYCLISTS_INJURED)?,
            motorists_injured: find(COL_MOTORISTS_INJURED)?,
            on_street_name: find(COL_ON_STREET_NAME)?,
            passthrough: Vec::new(),
        };

        let consumed = [
            index.crash_date,
            index.crash_time,
            index.latitude,
            index.longitude,
            index.persons_injured,
            index.pedestrians_injured,
            index.cyclists_injured,
            index.motorists_injured,
            index.on_street_name,
        ];
        index.passthrough = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| !consumed.contains(i))
            .map(|(i, h)| (i, h.clone()))
            .collect();

        Ok(index)
    }
}

/// Parses the collisions CSV export into a [`BaseTable`]
#[derive(Debug, Default)]
pub struct CollisionReader;

impl CollisionReader {
    pub fn new() -> Self {
        Self
    }

    /// Read a local CSV file
    pub fn read_file(&self, path: &Path, max_rows: usize) -> Result<BaseTable> {
        let file = File::open(path)?;
        self.read_table(file, max_rows)
    }

    /// Read at most `max_rows` data rows from `source`.
    ///
    /// Rows missing a latitude or longitude are dropped after the row limit
    /// is applied, so the table may hold fewer than `max_rows` records. A
    /// row whose date/time cannot be parsed fails the whole read.
    pub fn read_table<R: Read>(&self, source: R, max_rows: usize) -> Result<BaseTable> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(source);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();
        let columns = ColumnIndex::from_headers(&headers)?;

        let mut records = Vec::new();
        let mut raw_rows = 0usize;
        let mut dropped = 0usize;

        for (i, result) in reader.records().take(max_rows).enumerate() {
            let row = result?;
            raw_rows += 1;

            match self.parse_row(&row, i + 1, &columns)? {
                Some(record) => records.push(record),
                None => dropped += 1,
            }
        }

        info!(
            "Parsed {} collision records from {} rows ({} without coordinates dropped)",
            records.len(),
            raw_rows,
            dropped
        );

        Ok(BaseTable::new(records))
    }

    /// Parse one data row; `Ok(None)` when the row lacks coordinates
    fn parse_row(
        &self,
        row: &StringRecord,
        row_number: usize,
        columns: &ColumnIndex,
    ) -> Result<Option<CollisionRecord>> {
        let cell = |i: usize| row.get(i).unwrap_or("");

        let date = cell(columns.crash_date);
        let time = cell(columns.crash_time);
        let timestamp = parse_crash_datetime(date, time).ok_or_else(|| {
            DashboardError::DateTimeParse {
                row: row_number,
                value: format!("{} {}", date.trim(), time.trim()),
            }
        })?;

        let latitude = parse_coordinate(cell(columns.latitude))?;
        let longitude = parse_coordinate(cell(columns.longitude))?;
        let (latitude, longitude) = match (latitude, longitude) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => {
                debug!("Row {} has no coordinates, skipping", row_number);
                return Ok(None);
            }
        };

        let count = |i: usize, column: &str| parse_count(cell(i), row_number, column);

        let mut record = CollisionRecord::new(timestamp, latitude, longitude).with_injuries(
            count(columns.persons_injured, COL_PERSONS_INJURED)?,
            count(columns.pedestrians_injured, COL_PEDESTRIANS_INJURED)?,
            count(columns.cyclists_injured, COL_CYCLISTS_INJURED)?,
            count(columns.motorists_injured, COL_MOTORISTS_INJURED)?,
        );

        let street = cell(columns.on_street_name).trim();
        if !street.is_empty() {
            record.on_street_name = Some(street.to_string());
        }

        record.extra = columns
            .passthrough
            .iter()
            .map(|(i, name)| (name.clone(), cell(*i).to_string()))
            .collect::<BTreeMap<_, _>>();

        Ok(Some(record))
    }
}

/// Injury counts.
///
/// A missing cell (blank or an NA spelling) counts as zero, so such a row
/// passes an injury threshold of 0 but no higher one and never ranks.
fn parse_count(value: &str, row: usize, column: &str) -> Result<u32> {
    if is_missing_value(value) {
        return Ok(0);
    }

    value
        .trim()
        .parse::<u32>()
        .map_err(|_| DashboardError::InvalidCount {
            row,
            column: column.to_string(),
            value: value.to_string(),
        })
}
