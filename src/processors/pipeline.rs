use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analyzers::{midpoint, minute_histogram, MinuteBar};
use crate::models::{BaseTable, CollisionRecord, GeoPoint, VictimCategory};
use crate::processors::injury_filter::filter_by_injured;
use crate::processors::street_ranking::{top_dangerous_streets, StreetCount};
use crate::processors::time_filter::{filter_by_hour, hour_window_label};
use crate::settings::{LayerSettings, Settings, ViewSettings};
use crate::utils::constants::{DEFAULT_CENTER_LAT, DEFAULT_CENTER_LON, DEFAULT_TOP_K};

/// Widget values for one render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardParams {
    pub min_injured: i64,
    pub hour: i64,
    pub category: VictimCategory,
    pub top_k: usize,
    pub show_raw: bool,
}

impl Default for DashboardParams {
    fn default() -> Self {
        Self {
            min_injured: 0,
            hour: 1,
            category: VictimCategory::Pedestrians,
            top_k: DEFAULT_TOP_K,
            show_raw: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityPoint {
    pub timestamp: NaiveDateTime,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
}

/// Hour-filtered points for the hexagon layer plus where to centre it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityLayer {
    pub points: Vec<DensityPoint>,
    /// `None` when the hour has no collisions
    pub centroid: Option<GeoPoint>,
    pub view: ViewState,
    pub layer: LayerSettings,
}

/// Everything the sinks need for one render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub params: DashboardParams,
    pub map_points: Vec<GeoPoint>,
    pub window_label: String,
    pub density: DensityLayer,
    pub minute_chart: Vec<MinuteBar>,
    pub ranking: Vec<StreetCount>,
    pub raw_records: Option<Vec<CollisionRecord>>,
}

impl DashboardView {
    pub fn hour_collisions(&self) -> usize {
        self.density.points.len()
    }
}

/// Recomputes every dashboard output from the base table for one set of
/// widget values. Holds no per-render state.
#[derive(Debug, Clone, Default)]
pub struct DashboardPipeline {
    view: ViewSettings,
    layer: LayerSettings,
}

impl DashboardPipeline {
    pub fn new(view: ViewSettings, layer: LayerSettings) -> Self {
        Self { view, layer }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.view, settings.layer)
    }

    pub fn render(&self, table: &BaseTable, params: &DashboardParams) -> DashboardView {
        let map_points = filter_by_injured(table, params.min_injured);

        let hour_records = filter_by_hour(table, params.hour);
        let centroid = midpoint(&hour_records);
        let center =
            centroid.unwrap_or_else(|| GeoPoint::new(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LON));

        let histogram = minute_histogram(&hour_records);
        let ranking = top_dangerous_streets(table, params.category, params.top_k);

        debug!(
            "Rendered dashboard: {} map points, {} collisions in hour {}, {} ranked streets",
            map_points.len(),
            hour_records.len(),
            params.hour,
            ranking.len()
        );

        let points = hour_records
            .iter()
            .map(|r| DensityPoint {
                timestamp: r.timestamp,
                latitude: r.latitude,
                longitude: r.longitude,
            })
            .collect();

        DashboardView {
            params: params.clone(),
            map_points,
            window_label: hour_window_label(params.hour),
            density: DensityLayer {
                points,
                centroid,
                view: ViewState {
                    latitude: center.latitude,
                    longitude: center.longitude,
                    zoom: self.view.zoom,
                    pitch: self.view.pitch,
                },
                layer: self.layer,
            },
            minute_chart: histogram.bars(),
            ranking,
            raw_records: params.show_raw.then_some(hour_records),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn table() -> BaseTable {
        let date = NaiveDate::from_ymd_opt(2021, 9, 11).unwrap();
        vec![
            CollisionRecord::new(date.and_hms_opt(1, 5, 0).unwrap(), 40.0, -74.0)
                .with_injuries(0, 0, 0, 0)
                .with_street("A"),
            CollisionRecord::new(date.and_hms_opt(1, 5, 0).unwrap(), 41.0, -73.0)
                .with_injuries(2, 2, 0, 0)
                .with_street("B"),
            CollisionRecord::new(date.and_hms_opt(7, 40, 0).unwrap(), 40.5, -73.5)
                .with_injuries(5, 0, 5, 0)
                .with_street("C"),
        ]
        .into()
    }

    #[test]
    fn test_render_default_params() {
        let view = DashboardPipeline::default().render(&table(), &DashboardParams::default());

        assert_eq!(view.map_points.len(), 3);
        assert_eq!(view.hour_collisions(), 2);
        assert_eq!(view.window_label, "1:00 and 2:00");
        assert_eq!(view.minute_chart.len(), 60);
        assert_eq!(view.minute_chart[5].crashes, 2);
        assert_eq!(view.density.centroid, Some(GeoPoint::new(40.5, -73.5)));
        assert_eq!(view.density.view.zoom, 11.0);
        assert_eq!(view.ranking, vec![StreetCount::new("B", 2)]);
        assert!(view.raw_records.is_none());
    }

    #[test]
    fn test_empty_hour_falls_back_to_default_center() {
        let params = DashboardParams {
            hour: 12,
            show_raw: true,
            ..DashboardParams::default()
        };
        let view = DashboardPipeline::default().render(&table(), &params);

        assert!(view.density.centroid.is_none());
        assert_eq!(view.density.view.latitude, DEFAULT_CENTER_LAT);
        assert_eq!(view.density.view.longitude, DEFAULT_CENTER_LON);
        assert!(view.minute_chart.iter().all(|b| b.crashes == 0));
        assert_eq!(view.raw_records, Some(Vec::new()));
    }

    #[test]
    fn test_raw_records_are_hour_filtered() {
        let params = DashboardParams {
            hour: 7,
            min_injured: 3,
            category: VictimCategory::Cyclists,
            show_raw: true,
            ..DashboardParams::default()
        };
        let view = DashboardPipeline::default().render(&table(), &params);

        assert_eq!(view.map_points, vec![GeoPoint::new(40.5, -73.5)]);
        let raw = view.raw_records.unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].street(), Some("C"));
        assert_eq!(view.ranking, vec![StreetCount::new("C", 5)]);
    }
}
