use std::sync::Arc;

use crate::models::CollisionRecord;

/// Immutable snapshot of the cleaned dataset.
///
/// Cloning shares the same allocation; there is no way to mutate the rows
/// once the table is built, so a loaded table can be handed to any number
/// of readers.
#[derive(Debug, Clone)]
pub struct BaseTable {
    records: Arc<[CollisionRecord]>,
}

impl BaseTable {
    pub fn new(records: Vec<CollisionRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn records(&self) -> &[CollisionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CollisionRecord> {
        self.records.iter()
    }

    /// True when both handles point at the same loaded snapshot
    pub fn shares_snapshot(&self, other: &BaseTable) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

impl From<Vec<CollisionRecord>> for BaseTable {
    fn from(records: Vec<CollisionRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a BaseTable {
    type Item = &'a CollisionRecord;
    type IntoIter = std::slice::Iter<'a, CollisionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_clone_shares_snapshot() {
        let timestamp = NaiveDate::from_ymd_opt(2022, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let table = BaseTable::new(vec![CollisionRecord::new(timestamp, 40.7, -73.9)]);
        let shared = table.clone();

        assert!(table.shares_snapshot(&shared));
        assert_eq!(shared.len(), 1);
        assert!(!BaseTable::empty().shares_snapshot(&table));
        assert!(BaseTable::empty().is_empty());
    }
}
