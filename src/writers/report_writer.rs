use std::str::FromStr;

use crate::error::{DashboardError, Result};
use crate::processors::DashboardView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(DashboardError::InvalidArgument(format!(
                "Unsupported output format: {}",
                s
            ))),
        }
    }
}

/// Renders a [`DashboardView`] for the terminal or for a downstream client
pub struct ReportWriter {
    format: OutputFormat,
    map_preview: usize,
}

impl ReportWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            map_preview: 5,
        }
    }

    /// How many map points / raw rows the text report lists
    pub fn with_map_preview(mut self, rows: usize) -> Self {
        self.map_preview = rows;
        self
    }

    pub fn render(&self, view: &DashboardView) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
            OutputFormat::Text => Ok(self.render_text(view)),
        }
    }

    fn render_text(&self, view: &DashboardView) -> String {
        let params = &view.params;
        let mut lines = vec![
            "Motor Vehicle Collisions in New York City".to_string(),
            String::new(),
            "Where are the most people injured due to motor vehicle accidents in NYC?".to_string(),
            format!(
                "- {} locations with at least {} persons injured",
                view.map_points.len(),
                params.min_injured
            ),
        ];
        lines.extend(
            view.map_points
                .iter()
                .take(self.map_preview)
                .map(|p| format!("  {}", p)),
        );

        lines.push(String::new());
        lines.push("How many collisions occur at a given time of day?".to_string());
        lines.push(format!(
            "- Vehicle collisions between {}: {}",
            view.window_label,
            view.hour_collisions()
        ));
        lines.push(match view.density.centroid {
            Some(center) => format!("- Centred on {}", center),
            None => "- No collisions recorded in this hour".to_string(),
        });

        lines.push(String::new());
        lines.push(format!("Breakdown by minute between {}", view.window_label));
        let max = view
            .minute_chart
            .iter()
            .map(|b| b.crashes)
            .max()
            .unwrap_or(0);
        for bar in view.minute_chart.iter().filter(|b| b.crashes > 0) {
            let width = (bar.crashes * 40 / max).max(1);
            lines.push(format!(
                "  {:02} | {:<40} {}",
                bar.minute,
                "#".repeat(width),
                bar.crashes
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "Top {} dangerous streets by affected {}",
            params.top_k,
            params.category.display_name().to_lowercase()
        ));
        if view.ranking.is_empty() {
            lines.push("  (none)".to_string());
        }
        for (i, entry) in view.ranking.iter().enumerate() {
            lines.push(format!("  {:>2}. {:<40} {}", i + 1, entry.street, entry.count));
        }

        if let Some(records) = &view.raw_records {
            lines.push(String::new());
            lines.push(format!("Raw Data ({} records)", records.len()));
            for record in records.iter().take(self.map_preview) {
                lines.push(format!(
                    "  {} {:.5},{:.5} injured={} street={}",
                    record.timestamp,
                    record.latitude,
                    record.longitude,
                    record.persons_injured,
                    record.street().unwrap_or("-")
                ));
            }
        }

        lines.join("\n")
    }
}
