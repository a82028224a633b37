use crate::error::{DashboardError, Result};
use crate::models::CollisionRecord;
use crate::utils::constants::{
    COMPRESSION_GZIP, COMPRESSION_LZ4, COMPRESSION_NONE, COMPRESSION_SNAPPY, COMPRESSION_ZSTD,
    DEFAULT_ROW_GROUP_SIZE,
};
use arrow::array::*;
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use chrono::DateTime;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ArrowWriter;
use parquet::basic::{Compression, GzipLevel, ZstdLevel};
use parquet::file::properties::WriterProperties;
use parquet::file::reader::{FileReader, SerializedFileReader};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

/// Exports collision records (typed columns only) to Parquet
pub struct ParquetWriter {
    compression: Compression,
    row_group_size: usize,
}

impl ParquetWriter {
    pub fn new() -> Self {
        Self {
            compression: Compression::SNAPPY,
            row_group_size: DEFAULT_ROW_GROUP_SIZE,
        }
    }

    pub fn with_compression(mut self, compression: &str) -> Result<Self> {
        self.compression = match compression.to_lowercase().as_str() {
            COMPRESSION_SNAPPY => Compression::SNAPPY,
            COMPRESSION_GZIP => Compression::GZIP(GzipLevel::default()),
            COMPRESSION_LZ4 => Compression::LZ4,
            COMPRESSION_ZSTD => Compression::ZSTD(ZstdLevel::default()),
            COMPRESSION_NONE => Compression::UNCOMPRESSED,
            _ => {
                return Err(DashboardError::InvalidArgument(format!(
                    "Unsupported compression: {}",
                    compression
                )))
            }
        };
        Ok(self)
    }

    pub fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    /// Write records in batches of `batch_size`. Nothing is written for an
    /// empty slice.
    pub fn write_records(
        &self,
        records: &[CollisionRecord],
        path: &Path,
        batch_size: usize,
    ) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let schema = Self::create_schema();
        let file = File::create(path)?;
        let props = WriterProperties::builder()
            .set_compression(self.compression)
            .set_max_row_group_size(self.row_group_size)
            .build();

        let mut writer = ArrowWriter::try_new(file, schema.clone(), Some(props))?;

        for chunk in records.chunks(batch_size.max(1)) {
            let batch = Self::records_to_batch(chunk, schema.clone())?;
            writer.write(&batch)?;
        }

        writer.close()?;
        Ok(())
    }

    fn create_schema() -> Arc<Schema> {
        let fields = vec![
            Field::new(
                "timestamp",
                DataType::Timestamp(TimeUnit::Millisecond, None),
                false,
            ),
            Field::new("latitude", DataType::Float64, false),
            Field::new("longitude", DataType::Float64, false),
            Field::new("persons_injured", DataType::UInt32, false),
            Field::new("pedestrians_injured", DataType::UInt32, false),
            Field::new("cyclists_injured", DataType::UInt32, false),
            Field::new("motorists_injured", DataType::UInt32, false),
            Field::new("on_street_name", DataType::Utf8, true),
        ];

        Arc::new(Schema::new(fields))
    }

    fn records_to_batch(records: &[CollisionRecord], schema: Arc<Schema>) -> Result<RecordBatch> {
        let timestamps: Vec<i64> = records
            .iter()
            .map(|r| r.timestamp.and_utc().timestamp_millis())
            .collect();
        let latitudes: Vec<f64> = records.iter().map(|r| r.latitude).collect();
        let longitudes: Vec<f64> = records.iter().map(|r| r.longitude).collect();
        let persons: Vec<u32> = records.iter().map(|r| r.persons_injured).collect();
        let pedestrians: Vec<u32> = records.iter().map(|r| r.pedestrians_injured).collect();
        let cyclists: Vec<u32> = records.iter().map(|r| r.cyclists_injured).collect();
        let motorists: Vec<u32> = records.iter().map(|r| r.motorists_injured).collect();
        let streets: Vec<Option<&str>> = records.iter().map(|r| r.street()).collect();

        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(TimestampMillisecondArray::from(timestamps)),
                Arc::new(Float64Array::from(latitudes)),
                Arc::new(Float64Array::from(longitudes)),
                Arc::new(UInt32Array::from(persons)),
                Arc::new(UInt32Array::from(pedestrians)),
                Arc::new(UInt32Array::from(cyclists)),
                Arc::new(UInt32Array::from(motorists)),
                Arc::new(StringArray::from(streets)),
            ],
        )?;

        Ok(batch)
    }

    /// Read up to `limit` records back from an export
    pub fn read_records(&self, path: &Path, limit: usize) -> Result<Vec<CollisionRecord>> {
        let file = File::open(path)?;
        let parquet_reader = ParquetRecordBatchReaderBuilder::try_new(file)?
            .with_batch_size(limit.clamp(1, 8192))
            .build()?;

        let mut records = Vec::new();

        for batch_result in parquet_reader {
            let batch = batch_result?;

            let timestamps = column::<TimestampMillisecondArray>(&batch, 0, "timestamp")?;
            let latitudes = column::<Float64Array>(&batch, 1, "latitude")?;
            let longitudes = column::<Float64Array>(&batch, 2, "longitude")?;
            let persons = column::<UInt32Array>(&batch, 3, "persons_injured")?;
            let pedestrians = column::<UInt32Array>(&batch, 4, "pedestrians_injured")?;
            let cyclists = column::<UInt32Array>(&batch, 5, "cyclists_injured")?;
            let motorists = column::<UInt32Array>(&batch, 6, "motorists_injured")?;
            let streets = column::<StringArray>(&batch, 7, "on_street_name")?;

            for i in 0..batch.num_rows() {
                if records.len() >= limit {
                    return Ok(records);
                }

                let timestamp = DateTime::from_timestamp_millis(timestamps.value(i))
                    .ok_or_else(|| {
                        DashboardError::InvalidFormat(format!(
                            "timestamp out of range: {}",
                            timestamps.value(i)
                        ))
                    })?
                    .naive_utc();

                let mut record =
                    CollisionRecord::new(timestamp, latitudes.value(i), longitudes.value(i))
                        .with_injuries(
                            persons.value(i),
                            pedestrians.value(i),
                            cyclists.value(i),
                            motorists.value(i),
                        );
                if !streets.is_null(i) {
                    record.on_street_name = Some(streets.value(i).to_string());
                }
                records.push(record);
            }
        }

        Ok(records)
    }

    pub fn get_file_info(&self, path: &Path) -> Result<ParquetFileInfo> {
        let file = File::open(path)?;
        let reader = SerializedFileReader::new(file)?;
        let metadata = reader.metadata();

        let row_groups = metadata.num_row_groups();
        let row_group_sizes = (0..row_groups)
            .map(|i| metadata.row_group(i).num_rows())
            .collect();

        Ok(ParquetFileInfo {
            total_rows: metadata.file_metadata().num_rows(),
            row_groups: row_groups as i32,
            row_group_sizes,
            file_size: std::fs::metadata(path)?.len(),
            compression: self.compression,
        })
    }
}

impl Default for ParquetWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn column<'a, T: 'static>(batch: &'a RecordBatch, index: usize, name: &str) -> Result<&'a T> {
    batch
        .column(index)
        .as_any()
        .downcast_ref::<T>()
        .ok_or_else(|| DashboardError::InvalidFormat(format!("Invalid {} column type", name)))
}

#[derive(Debug)]
pub struct ParquetFileInfo {
    pub total_rows: i64,
    pub row_groups: i32,
    pub row_group_sizes: Vec<i64>,
    pub file_size: u64,
    pub compression: Compression,
}

impl ParquetFileInfo {
    pub fn summary(&self) -> String {
        format!(
            "Parquet File Summary:\n\
            - Total rows: {}\n\
            - Row groups: {}\n\
            - File size: {:.2} MB\n\
            - Compression: {:?}\n\
            - Avg rows per group: {:.0}",
            self.total_rows,
            self.row_groups,
            self.file_size as f64 / 1_048_576.0, // Convert to MB
            self.compression,
            self.total_rows as f64 / self.row_groups.max(1) as f64
        )
    }
}
