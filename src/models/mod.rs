pub mod category;
pub mod collision;
pub mod geo;
pub mod table;

pub use category::VictimCategory;
pub use collision::CollisionRecord;
pub use geo::GeoPoint;
pub use table::BaseTable;
