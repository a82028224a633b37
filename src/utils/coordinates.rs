use crate::error::{DashboardError, Result};
use crate::utils::constants::{
    MISSING_VALUE_TOKENS, NYC_MAX_LAT, NYC_MAX_LON, NYC_MIN_LAT, NYC_MIN_LON,
};

/// Whether a cell holds no value: blank, or one of the NA spellings
pub fn is_missing_value(cell: &str) -> bool {
    let trimmed = cell.trim();
    trimmed.is_empty() || MISSING_VALUE_TOKENS.contains(&trimmed)
}

/// Parse a coordinate cell.
///
/// Missing cells and non-finite numbers (`inf`, `NaN` in any spelling)
/// yield `Ok(None)`; anything else must be a decimal number.
pub fn parse_coordinate(coord_str: &str) -> Result<Option<f64>> {
    if is_missing_value(coord_str) {
        return Ok(None);
    }

    let value = coord_str.trim().parse::<f64>().map_err(|_| {
        DashboardError::InvalidCoordinate(format!("Invalid coordinate value: '{}'", coord_str))
    })?;

    Ok(value.is_finite().then_some(value))
}

/// Whether a point falls inside the five boroughs' bounding box
pub fn is_within_nyc_bounds(latitude: f64, longitude: f64) -> bool {
    (NYC_MIN_LAT..=NYC_MAX_LAT).contains(&latitude)
        && (NYC_MIN_LON..=NYC_MAX_LON).contains(&longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate() {
        assert!((parse_coordinate("40.7128").unwrap().unwrap() - 40.7128).abs() < 0.000001);
        assert!((parse_coordinate(" -74.0060 ").unwrap().unwrap() - -74.006).abs() < 0.000001);
        assert_eq!(parse_coordinate("").unwrap(), None);
        assert_eq!(parse_coordinate("   ").unwrap(), None);
    }

    #[test]
    fn test_missing_and_non_finite_coordinates() {
        for cell in ["NaN", "nan", "NA", "N/A", "NULL", "<NA>", " NaN ", "inf", "-inf", "infinity"] {
            assert_eq!(parse_coordinate(cell).unwrap(), None, "cell {:?}", cell);
        }
    }

    #[test]
    fn test_is_missing_value() {
        assert!(is_missing_value(""));
        assert!(is_missing_value("NA"));
        assert!(is_missing_value("null"));
        assert!(!is_missing_value("0"));
        assert!(!is_missing_value("NAN STREET"));
    }

    #[test]
    fn test_invalid_coordinate() {
        assert!(parse_coordinate("40:42:46").is_err());
        assert!(parse_coordinate("north").is_err());
    }

    #[test]
    fn test_nyc_bounds() {
        assert!(is_within_nyc_bounds(40.7128, -74.0060)); // City Hall
        assert!(is_within_nyc_bounds(40.6413, -73.7781)); // JFK
        assert!(!is_within_nyc_bounds(0.0, 0.0));
        assert!(!is_within_nyc_bounds(42.6526, -73.7562)); // Albany
    }
}
