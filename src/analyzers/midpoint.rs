use crate::models::{CollisionRecord, GeoPoint};

/// Mean latitude and mean longitude of `records`.
///
/// Returns `None` for an empty slice; the mean is undefined there and
/// callers pick their own fallback centre.
pub fn midpoint(records: &[CollisionRecord]) -> Option<GeoPoint> {
    if records.is_empty() {
        return None;
    }

    let (lat_sum, lon_sum) = records
        .iter()
        .fold((0.0f64, 0.0f64), |(lat, lon), r| (lat + r.latitude, lon + r.longitude));
    let n = records.len() as f64;

    Some(GeoPoint::new(lat_sum / n, lon_sum / n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(latitude: f64, longitude: f64) -> CollisionRecord {
        let timestamp = NaiveDate::from_ymd_opt(2021, 9, 11)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap();
        CollisionRecord::new(timestamp, latitude, longitude)
    }

    #[test]
    fn test_single_record_is_exact() {
        let only = record(40.667202, -73.8665);
        assert_eq!(midpoint(&[only]), Some(GeoPoint::new(40.667202, -73.8665)));
    }

    #[test]
    fn test_mean_of_points() {
        let point = midpoint(&[record(40.0, -74.0), record(41.0, -73.0)]).unwrap();
        assert!((point.latitude - 40.5).abs() < 1e-12);
        assert!((point.longitude - -73.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input_is_none() {
        assert_eq!(midpoint(&[]), None);
    }
}
