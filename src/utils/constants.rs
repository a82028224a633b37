/// Upstream dataset (NYC Open Data, Motor Vehicle Collisions - Crashes)
pub const DEFAULT_DATA_URL: &str = "https://data.cityofnewyork.us/resource/h9gi-nx95.csv";
pub const DEFAULT_MAX_ROWS: usize = 100_000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Source column names (after lowercasing)
pub const COL_CRASH_DATE: &str = "crash_date";
pub const COL_CRASH_TIME: &str = "crash_time";
pub const COL_LATITUDE: &str = "latitude";
pub const COL_LONGITUDE: &str = "longitude";
pub const COL_PERSONS_INJURED: &str = "number_of_persons_injured";
pub const COL_PEDESTRIANS_INJURED: &str = "number_of_pedestrians_injured";
pub const COL_CYCLISTS_INJURED: &str = "number_of_cyclists_injured";
pub const COL_MOTORISTS_INJURED: &str = "number_of_motorists_injured";
pub const COL_ON_STREET_NAME: &str = "on_street_name";

/// Cell values the export tooling writes for a missing value
pub const MISSING_VALUE_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Dashboard widget ranges
pub const MAX_INJURED_THRESHOLD: i64 = 19;
pub const HOURS_PER_DAY: i64 = 24;
pub const MINUTES_PER_HOUR: usize = 60;
pub const DEFAULT_TOP_K: usize = 10;

/// Map view used when a filtered subset has no rows (NYC City Hall)
pub const DEFAULT_CENTER_LAT: f64 = 40.7128;
pub const DEFAULT_CENTER_LON: f64 = -74.0060;

/// NYC geographic bounds
pub const NYC_MIN_LAT: f64 = 40.4;
pub const NYC_MAX_LAT: f64 = 41.0;
pub const NYC_MIN_LON: f64 = -74.3;
pub const NYC_MAX_LON: f64 = -73.6;

/// Density layer defaults
pub const DEFAULT_ZOOM: f64 = 11.0;
pub const DEFAULT_PITCH: f64 = 50.0;
pub const DEFAULT_HEX_RADIUS: u32 = 100;
pub const DEFAULT_ELEVATION_SCALE: u32 = 4;
pub const DEFAULT_ELEVATION_RANGE: [u32; 2] = [0, 1000];

/// Processing defaults
pub const DEFAULT_ROW_GROUP_SIZE: usize = 10000;
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Parquet compression options
pub const COMPRESSION_SNAPPY: &str = "snappy";
pub const COMPRESSION_GZIP: &str = "gzip";
pub const COMPRESSION_LZ4: &str = "lz4";
pub const COMPRESSION_ZSTD: &str = "zstd";
pub const COMPRESSION_NONE: &str = "none";
