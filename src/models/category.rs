use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DashboardError;
use crate::models::CollisionRecord;

/// Which injury-count column drives the street ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VictimCategory {
    Pedestrians,
    Cyclists,
    Motorists,
}

impl VictimCategory {
    pub const ALL: [VictimCategory; 3] = [
        VictimCategory::Pedestrians,
        VictimCategory::Cyclists,
        VictimCategory::Motorists,
    ];

    pub fn count_of(&self, record: &CollisionRecord) -> u32 {
        match self {
            VictimCategory::Pedestrians => record.pedestrians_injured,
            VictimCategory::Cyclists => record.cyclists_injured,
            VictimCategory::Motorists => record.motorists_injured,
        }
    }

    /// Source column holding this category's count
    pub fn column_name(&self) -> &'static str {
        match self {
            VictimCategory::Pedestrians => "number_of_pedestrians_injured",
            VictimCategory::Cyclists => "number_of_cyclists_injured",
            VictimCategory::Motorists => "number_of_motorists_injured",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VictimCategory::Pedestrians => "Pedestrians",
            VictimCategory::Cyclists => "Cyclists",
            VictimCategory::Motorists => "Motorists",
        }
    }
}

impl FromStr for VictimCategory {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pedestrians" => Ok(VictimCategory::Pedestrians),
            "cyclists" => Ok(VictimCategory::Cyclists),
            "motorists" => Ok(VictimCategory::Motorists),
            other => Err(DashboardError::InvalidArgument(format!(
                "unknown victim category '{}', expected one of pedestrians, cyclists, motorists",
                other
            ))),
        }
    }
}

impl std::fmt::Display for VictimCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
