use chrono::NaiveDateTime;
use validator::Validate;

use crate::error::{DashboardError, Result};
use crate::models::{BaseTable, VictimCategory};
use crate::utils::constants::HOURS_PER_DAY;
use crate::utils::coordinates::is_within_nyc_bounds;

#[derive(Debug)]
pub struct DatasetSummary {
    pub total_records: usize,
    pub time_range: (NaiveDateTime, NaiveDateTime),
    pub geographic_bounds: GeographicBounds,
    pub injuries: InjuryTotals,
    pub data_quality: DataQuality,
    pub busiest_hour: (u32, usize),
}

#[derive(Debug, Default)]
pub struct InjuryTotals {
    pub persons: u64,
    pub pedestrians: u64,
    pub cyclists: u64,
    pub motorists: u64,
}

impl InjuryTotals {
    pub fn for_category(&self, category: VictimCategory) -> u64 {
        match category {
            VictimCategory::Pedestrians => self.pedestrians,
            VictimCategory::Cyclists => self.cyclists,
            VictimCategory::Motorists => self.motorists,
        }
    }
}

#[derive(Debug)]
pub struct DataQuality {
    pub total_records: usize,
    /// Coordinates outside the valid latitude/longitude ranges
    pub invalid_coordinates: usize,
    /// Valid coordinates that still fall outside the city (often 0,0)
    pub outside_city: usize,
    pub missing_street: usize,
}

impl DataQuality {
    pub fn outside_city_percentage(&self) -> f64 {
        (self.outside_city as f64 / self.total_records as f64) * 100.0
    }

    pub fn missing_street_percentage(&self) -> f64 {
        (self.missing_street as f64 / self.total_records as f64) * 100.0
    }
}

#[derive(Debug)]
pub struct GeographicBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

pub struct DatasetAnalyzer;

impl DatasetAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, table: &BaseTable) -> Result<DatasetSummary> {
        let records = table.records();
        let first = records
            .first()
            .ok_or(DashboardError::EmptyInput("a dataset summary"))?;

        let mut min_time = first.timestamp;
        let mut max_time = first.timestamp;
        let mut min_lat = first.latitude;
        let mut max_lat = first.latitude;
        let mut min_lon = first.longitude;
        let mut max_lon = first.longitude;

        let mut injuries = InjuryTotals::default();
        let mut per_hour = [0usize; HOURS_PER_DAY as usize];
        let mut invalid_coordinates = 0;
        let mut outside_city = 0;
        let mut missing_street = 0;

        for record in records {
            min_time = min_time.min(record.timestamp);
            max_time = max_time.max(record.timestamp);
            min_lat = min_lat.min(record.latitude);
            max_lat = max_lat.max(record.latitude);
            min_lon = min_lon.min(record.longitude);
            max_lon = max_lon.max(record.longitude);

            injuries.persons += u64::from(record.persons_injured);
            injuries.pedestrians += u64::from(record.pedestrians_injured);
            injuries.cyclists += u64::from(record.cyclists_injured);
            injuries.motorists += u64::from(record.motorists_injured);

            per_hour[record.hour() as usize] += 1;

            if record.validate().is_err() {
                invalid_coordinates += 1;
            } else if !is_within_nyc_bounds(record.latitude, record.longitude) {
                outside_city += 1;
            }

            if record.street().is_none() {
                missing_street += 1;
            }
        }

        // Earliest hour wins a tie
        let busiest_hour = per_hour
            .iter()
            .enumerate()
            .fold((0u32, 0usize), |best, (hour, &count)| {
                if count > best.1 {
                    (hour as u32, count)
                } else {
                    best
                }
            });

        Ok(DatasetSummary {
            total_records: records.len(),
            time_range: (min_time, max_time),
            geographic_bounds: GeographicBounds {
                min_lat,
                max_lat,
                min_lon,
                max_lon,
            },
            injuries,
            data_quality: DataQuality {
                total_records: records.len(),
                invalid_coordinates,
                outside_city,
                missing_street,
            },
            busiest_hour,
        })
    }
}

impl Default for DatasetAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetSummary {
    pub fn summary(&self) -> String {
        format!(
            "Collisions: {} records\n\
            Time Range: {} to {}\n\
            Injured: {} persons ({} pedestrians, {} cyclists, {} motorists)\n\
            Busiest Hour: {}:00 ({} collisions)\n\
            Coverage: {:.4}..{:.4} lat, {:.4}..{:.4} lon",
            self.total_records,
            self.time_range.0,
            self.time_range.1,
            self.injuries.persons,
            self.injuries.pedestrians,
            self.injuries.cyclists,
            self.injuries.motorists,
            self.busiest_hour.0,
            self.busiest_hour.1,
            self.geographic_bounds.min_lat,
            self.geographic_bounds.max_lat,
            self.geographic_bounds.min_lon,
            self.geographic_bounds.max_lon,
        )
    }

    pub fn detailed_summary(&self) -> String {
        format!(
            "{}\n\n\
            Data Quality:\n\
            - Invalid coordinates: {}\n\
            - Outside NYC bounds: {} ({:.1}%)\n\
            - Missing street name: {} ({:.1}%)",
            self.summary(),
            self.data_quality.invalid_coordinates,
            self.data_quality.outside_city,
            self.data_quality.outside_city_percentage(),
            self.data_quality.missing_street,
            self.data_quality.missing_street_percentage(),
        )
    }
}
