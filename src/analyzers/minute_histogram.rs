use serde::{Deserialize, Serialize};

use crate::models::CollisionRecord;
use crate::utils::constants::MINUTES_PER_HOUR;

/// Collision counts for each minute of an hour, always 60 buckets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinuteHistogram {
    buckets: [usize; MINUTES_PER_HOUR],
}

/// One bar of the minute chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinuteBar {
    pub minute: u32,
    pub crashes: usize,
}

impl MinuteHistogram {
    pub fn buckets(&self) -> &[usize; MINUTES_PER_HOUR] {
        &self.buckets
    }

    pub fn get(&self, minute: usize) -> Option<usize> {
        self.buckets.get(minute).copied()
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().sum()
    }

    /// Busiest minute; the earliest wins a tie. `None` for an empty histogram.
    pub fn peak(&self) -> Option<MinuteBar> {
        let mut best: Option<MinuteBar> = None;
        for bar in self.bars() {
            if bar.crashes > 0 && best.map_or(true, |b| bar.crashes > b.crashes) {
                best = Some(bar);
            }
        }
        best
    }

    pub fn bars(&self) -> Vec<MinuteBar> {
        self.buckets
            .iter()
            .enumerate()
            .map(|(minute, &crashes)| MinuteBar {
                minute: minute as u32,
                crashes,
            })
            .collect()
    }
}

/// Bin records by the minute of their timestamp. The hour is not checked;
/// callers pass an hour-filtered subset.
pub fn minute_histogram(records: &[CollisionRecord]) -> MinuteHistogram {
    let mut buckets = [0usize; MINUTES_PER_HOUR];
    for record in records {
        if let Some(bucket) = buckets.get_mut(record.minute() as usize) {
            *bucket += 1;
        }
    }
    MinuteHistogram { buckets }
}
