use crate::models::{BaseTable, CollisionRecord};
use crate::utils::constants::HOURS_PER_DAY;

/// Records whose timestamp falls within `hour`. Hours outside 0-23 match
/// nothing.
pub fn filter_by_hour(table: &BaseTable, hour: i64) -> Vec<CollisionRecord> {
    table
        .iter()
        .filter(|r| i64::from(r.hour()) == hour)
        .cloned()
        .collect()
}

/// Caption for an hour window, e.g. `23:00 and 0:00`
pub fn hour_window_label(hour: i64) -> String {
    format!("{}:00 and {}:00", hour, (hour + 1).rem_euclid(HOURS_PER_DAY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn table(times: &[(u32, u32)]) -> BaseTable {
        let date = NaiveDate::from_ymd_opt(2021, 9, 11).unwrap();
        times
            .iter()
            .map(|&(h, m)| CollisionRecord::new(date.and_hms_opt(h, m, 0).unwrap(), 40.7, -73.9))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_filter_by_hour() {
        let base = table(&[(8, 15), (9, 0), (9, 59), (10, 0), (21, 9)]);
        let records = filter_by_hour(&base, 9);

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.hour() == 9));
        assert_eq!(records[0].minute(), 0);
        assert_eq!(records[1].minute(), 59);
    }

    #[test]
    fn test_filter_leaves_table_untouched() {
        let base = table(&[(9, 0), (10, 0)]);
        let _ = filter_by_hour(&base, 9);
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_out_of_range_hour_is_empty() {
        let base = table(&[(0, 0), (23, 59)]);
        assert!(filter_by_hour(&base, 24).is_empty());
        assert!(filter_by_hour(&base, -1).is_empty());
        assert_eq!(filter_by_hour(&base, 23).len(), 1);
    }

    #[test]
    fn test_hour_window_label() {
        assert_eq!(hour_window_label(1), "1:00 and 2:00");
        assert_eq!(hour_window_label(23), "23:00 and 0:00");
    }
}
