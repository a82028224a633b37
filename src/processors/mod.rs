pub mod injury_filter;
pub mod pipeline;
pub mod street_ranking;
pub mod time_filter;

pub use injury_filter::filter_by_injured;
pub use pipeline::{DashboardParams, DashboardPipeline, DashboardView, DensityLayer, DensityPoint};
pub use street_ranking::{top_dangerous_streets, StreetCount};
pub use time_filter::{filter_by_hour, hour_window_label};
