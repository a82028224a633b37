use anyhow::Context;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{info, warn, Level};

use crate::analyzers::DatasetAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::models::{BaseTable, VictimCategory};
use crate::processors::{filter_by_hour, hour_window_label, DashboardParams, DashboardPipeline};
use crate::readers::{CachedDatasetProvider, DatasetProvider, FileSource, HttpSource};
use crate::settings::Settings;
use crate::utils::constants::{HOURS_PER_DAY, MAX_INJURED_THRESHOLD};
use crate::utils::filename::generate_default_export_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::{OutputFormat, ParquetWriter, ReportWriter};

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    let max_rows = cli.max_rows.unwrap_or(settings.max_rows);
    let provider = build_provider(cli.source_file, &settings)?;

    match cli.command {
        Commands::Dashboard {
            min_injured,
            hour,
            category,
            top_k,
            show_raw,
            format,
            preview,
        } => {
            // Bad widget values are rejected before any fetch
            let category: VictimCategory = category.parse()?;
            let format: OutputFormat = format.parse()?;

            if !(0..=MAX_INJURED_THRESHOLD).contains(&min_injured) {
                warn!("min-injured {} is outside the slider range 0-19", min_injured);
            }
            if !(0..HOURS_PER_DAY).contains(&hour) {
                warn!("hour {} is outside 0-23, time-of-day panels will be empty", hour);
            }

            let silent = format == OutputFormat::Json;
            let table = load_table(provider.as_ref(), max_rows, silent).await?;

            let params = DashboardParams {
                min_injured,
                hour,
                category,
                top_k: top_k.unwrap_or(settings.top_k),
                show_raw,
            };
            let view = DashboardPipeline::from_settings(&settings).render(&table, &params);

            let report = ReportWriter::new(format)
                .with_map_preview(preview)
                .render(&view)?;
            println!("{}", report);
        }

        Commands::Info => {
            let table = load_table(provider.as_ref(), max_rows, false).await?;
            let summary = DatasetAnalyzer::new()
                .analyze(&table)
                .context("Cannot summarize dataset")?;

            println!("\n{}", summary.detailed_summary());
        }

        Commands::Export {
            output_file,
            hour,
            compression,
            chunk_size,
        } => {
            let writer = ParquetWriter::new().with_compression(&compression)?;
            let output_file = output_file.unwrap_or_else(generate_default_export_filename);

            let table = load_table(provider.as_ref(), max_rows, false).await?;
            let records = match hour {
                Some(h) => {
                    println!("Exporting collisions between {}", hour_window_label(h));
                    filter_by_hour(&table, h)
                }
                None => table.records().to_vec(),
            };

            if records.is_empty() {
                println!("No records to write");
                return Ok(());
            }

            if let Some(parent) = output_file.parent() {
                std::fs::create_dir_all(parent)?;
            }

            println!(
                "Writing {} records to {}...",
                records.len(),
                output_file.display()
            );
            writer
                .write_records(&records, &output_file, chunk_size)
                .with_context(|| format!("Failed to write {}", output_file.display()))?;

            let file_info = writer.get_file_info(&output_file)?;
            println!("\n{}", file_info.summary());
        }
    }

    Ok(())
}

fn build_provider(
    source_file: Option<PathBuf>,
    settings: &Settings,
) -> anyhow::Result<Box<dyn DatasetProvider>> {
    let provider: Box<dyn DatasetProvider> = match source_file {
        Some(path) => Box::new(CachedDatasetProvider::new(FileSource::new(path))),
        None => {
            let timeout = Duration::from_secs(settings.request_timeout_secs);
            let source = HttpSource::new(&settings.data_url, timeout)
                .context("Failed to build HTTP client")?;
            Box::new(CachedDatasetProvider::new(source))
        }
    };
    Ok(provider)
}

async fn load_table(
    provider: &dyn DatasetProvider,
    max_rows: usize,
    silent: bool,
) -> anyhow::Result<BaseTable> {
    let progress = ProgressReporter::new_spinner("Loading collision data...", silent);

    let table = provider
        .load(max_rows)
        .await
        .context("Failed to load collision data")?;

    progress.finish_with_message(&format!("Loaded {} collisions", table.len()));
    info!("Base table ready with {} records", table.len());
    Ok(table)
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Cannot create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}
