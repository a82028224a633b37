use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::constants::{COMPRESSION_SNAPPY, DEFAULT_CHUNK_SIZE};

#[derive(Parser)]
#[command(name = "collision-dashboard")]
#[command(about = "Explore NYC motor vehicle collision data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Settings file [default: ./collision-dashboard.{toml,yaml,json} if present]"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Read a local CSV export instead of fetching the dataset"
    )]
    pub source_file: Option<PathBuf>,

    #[arg(long, global = true, help = "Maximum rows to load [default: from settings]")]
    pub max_rows: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render every dashboard panel for one set of widget values
    Dashboard {
        #[arg(
            long,
            default_value = "0",
            allow_hyphen_values = true,
            help = "Minimum persons injured for the map (slider range 0-19)"
        )]
        min_injured: i64,

        #[arg(
            long,
            default_value = "1",
            allow_hyphen_values = true,
            help = "Hour of day for the density layer and minute chart (0-23)"
        )]
        hour: i64,

        #[arg(
            short,
            long,
            default_value = "pedestrians",
            help = "Victim category for the street ranking: pedestrians, cyclists or motorists"
        )]
        category: String,

        #[arg(long, help = "Number of ranked streets [default: from settings]")]
        top_k: Option<usize>,

        #[arg(long, help = "Include the hour-filtered raw records")]
        show_raw: bool,

        #[arg(short, long, default_value = "text", help = "Output format: text or json")]
        format: String,

        #[arg(long, default_value = "5", help = "Map points and raw rows listed in text output")]
        preview: usize,
    },

    /// Summarize the loaded dataset
    Info,

    /// Export records to a Parquet file
    Export {
        #[arg(
            short,
            long,
            help = "Output Parquet file path [default: output/collisions-{YYMMDD}.parquet]"
        )]
        output_file: Option<PathBuf>,

        #[arg(long, help = "Only export collisions in this hour of day")]
        hour: Option<i64>,

        #[arg(
            short,
            long,
            default_value = COMPRESSION_SNAPPY,
            help = "snappy, gzip, lz4, zstd or none"
        )]
        compression: String,

        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,
    },
}
