pub mod constants;
pub mod coordinates;
pub mod datetime;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use coordinates::parse_coordinate;
pub use datetime::parse_crash_datetime;
pub use filename::generate_default_export_filename;
pub use progress::ProgressReporter;
