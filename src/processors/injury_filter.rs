use crate::models::{BaseTable, GeoPoint};

/// Coordinates of every collision with at least `min_injured` people hurt,
/// in table order.
///
/// Thresholds outside the slider range are accepted: anything at or below
/// zero keeps every row, anything above the largest count keeps none.
pub fn filter_by_injured(table: &BaseTable, min_injured: i64) -> Vec<GeoPoint> {
    table
        .iter()
        .filter(|r| i64::from(r.persons_injured) >= min_injured)
        .map(|r| r.position())
        .filter(|p| p.latitude.is_finite() && p.longitude.is_finite())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CollisionRecord;
    use chrono::NaiveDate;

    fn table(injured: &[u32]) -> BaseTable {
        let timestamp = NaiveDate::from_ymd_opt(2021, 9, 11)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        injured
            .iter()
            .enumerate()
            .map(|(i, &n)| {
                CollisionRecord::new(timestamp, 40.0 + i as f64, -73.0 - i as f64)
                    .with_injuries(n, 0, 0, n)
            })
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_threshold_keeps_order() {
        let points = filter_by_injured(&table(&[0, 2, 5]), 2);
        assert_eq!(
            points,
            vec![GeoPoint::new(41.0, -74.0), GeoPoint::new(42.0, -75.0)]
        );
    }

    #[test]
    fn test_every_point_meets_threshold() {
        let base = table(&[0, 3, 1, 7, 2, 0, 19]);
        for min in 0..=19 {
            let expected: Vec<GeoPoint> = base
                .iter()
                .filter(|r| i64::from(r.persons_injured) >= min)
                .map(|r| r.position())
                .collect();
            assert_eq!(filter_by_injured(&base, min), expected);
        }
    }

    #[test]
    fn test_out_of_range_thresholds() {
        let base = table(&[0, 2, 5]);
        assert_eq!(filter_by_injured(&base, -4).len(), 3);
        assert!(filter_by_injured(&base, 100).is_empty());
        assert!(filter_by_injured(&BaseTable::empty(), 0).is_empty());
    }

    #[test]
    fn test_non_finite_coordinates_dropped() {
        let timestamp = NaiveDate::from_ymd_opt(2021, 9, 11)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let base: BaseTable = vec![
            CollisionRecord::new(timestamp, f64::NAN, -73.9).with_injuries(1, 0, 0, 1),
            CollisionRecord::new(timestamp, 40.7, -73.9).with_injuries(1, 0, 0, 1),
        ]
        .into();

        assert_eq!(filter_by_injured(&base, 1), vec![GeoPoint::new(40.7, -73.9)]);
    }
}
