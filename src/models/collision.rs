use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

use crate::models::GeoPoint;

/// One collision event with the columns the dashboard consumes lifted into
/// typed fields. Any other source column is kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CollisionRecord {
    pub timestamp: NaiveDateTime,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    pub persons_injured: u32,
    pub pedestrians_injured: u32,
    pub cyclists_injured: u32,
    pub motorists_injured: u32,

    pub on_street_name: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl CollisionRecord {
    pub fn new(timestamp: NaiveDateTime, latitude: f64, longitude: f64) -> Self {
        Self {
            timestamp,
            latitude,
            longitude,
            persons_injured: 0,
            pedestrians_injured: 0,
            cyclists_injured: 0,
            motorists_injured: 0,
            on_street_name: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_injuries(
        mut self,
        persons: u32,
        pedestrians: u32,
        cyclists: u32,
        motorists: u32,
    ) -> Self {
        self.persons_injured = persons;
        self.pedestrians_injured = pedestrians;
        self.cyclists_injured = cyclists;
        self.motorists_injured = motorists;
        self
    }

    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.on_street_name = Some(street.into());
        self
    }

    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    pub fn minute(&self) -> u32 {
        self.timestamp.minute()
    }

    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    pub fn street(&self) -> Option<&str> {
        self.on_street_name.as_deref()
    }

    /// Passthrough column lookup by its lowercased source name
    pub fn field(&self, name: &str) -> Option<&str> {
        self.extra.get(name).map(String::as_str)
    }
}
