use anyhow::Result;
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::patterns::UrlPattern;
use crate::report::{render_summary, DateRange, ReportSummary, UrlRecord};
use crate::report_id::{base_address, ReportId};

/// Matches, strips query strings, dedups and sorts.
pub fn extract_base_urls(text: &str, pattern: &UrlPattern) -> Vec<String> {
    let unique: BTreeSet<&str> = pattern
        .find_all(text)
        .into_iter()
        .map(base_address)
        .collect();
    unique.into_iter().map(str::to_string).collect()
}

/// Earliest and latest report dates among `urls`, if any carry a report id.
pub fn infer_date_range(urls: &[String], prefix: &str) -> Option<DateRange> {
    let mut dates = urls
        .iter()
        .filter_map(|url| ReportId::from_url(url, prefix))
        .map(|id| id.date());
    let first = dates.next()?;
    let (from, to) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
    DateRange::new(from, to).ok()
}

pub fn build_summary(text: &str, config: &ExtractorConfig, pattern: &UrlPattern) -> ReportSummary {
    let start_time = Instant::now();
    let urls = extract_base_urls(text, pattern);

    let date_range = if config.infer_dates {
        match infer_date_range(&urls, pattern.prefix()) {
            Some(range) => {
                info!(action = "infer", component = "date_range", from = %range.from(), to = %range.to(), "Date range taken from report ids");
                range
            }
            None => {
                warn!(
                    action = "infer",
                    component = "date_range",
                    "No report ids with dates found, keeping configured range"
                );
                config.date_range
            }
        }
    } else {
        config.date_range
    };

    let logs: Vec<UrlRecord> = urls.into_iter().map(|url| UrlRecord { url }).collect();
    info!(
        action = "complete",
        component = "url_extraction",
        unique_urls = logs.len(),
        input_bytes = text.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Extracted report URLs"
    );

    ReportSummary::new(
        config.guild.clone(),
        config.source.clone(),
        config.raids.clone(),
        logs,
        date_range,
    )
}

pub fn read_log(path: &Path) -> Result<String, ExtractError> {
    info!(action = "read", component = "log_input", file_path = ?path, "Reading log file");
    fs::read_to_string(path).map_err(|source| ExtractError::InputRead {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_summary(path: &Path, json: &str) -> Result<(), ExtractError> {
    info!(action = "write", component = "summary_output", file_path = ?path, bytes = json.len(), "Writing summary");
    fs::write(path, json).map_err(|source| ExtractError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Where the rendered summary goes.
pub enum Destination<'a> {
    File(&'a Path),
    Stdout,
}

/// Reads the configured log, builds the summary and writes it out.
pub fn run(config: &ExtractorConfig, destination: Destination<'_>) -> Result<ReportSummary> {
    let total_start_time = Instant::now();
    info!(
        action = "start",
        component = "extraction",
        guild = %config.guild,
        "Starting log URL extraction"
    );

    let pattern = UrlPattern::new(&config.prefix)?;
    let text = read_log(&config.input)?;
    let summary = build_summary(&text, config, &pattern);
    drop(text);

    let json = render_summary(&summary)?;
    match destination {
        Destination::File(path) => write_summary(path, &json)?,
        Destination::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|source| ExtractError::OutputWrite {
                    path: "<stdout>".into(),
                    source,
                })?;
        }
    }

    info!(
        action = "complete",
        component = "extraction",
        total_logs = summary.total_logs(),
        duration_ms = total_start_time.elapsed().as_millis(),
        "Extraction completed successfully"
    );
    Ok(summary)
}

pub fn print_summary(summary: &ReportSummary, output: &Path) {
    let range = summary.date_range();

    println!("\n--- {} Raid Logs ---", summary.guild());
    println!(
        "Date range: {} to {} ({} days)",
        range.from(),
        range.to(),
        crate::utils::format_number(range.days().max(0) as u64)
    );
    println!(
        "Unique report URLs: {}",
        crate::utils::format_number(summary.total_logs() as u64)
    );
    println!("Written to {}", output.display());
}
