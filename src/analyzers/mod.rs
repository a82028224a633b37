pub mod dataset_analyzer;
pub mod midpoint;
pub mod minute_histogram;

pub use dataset_analyzer::{DatasetAnalyzer, DatasetSummary};
pub use midpoint::midpoint;
pub use minute_histogram::{minute_histogram, MinuteBar, MinuteHistogram};
