use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct UrlRecord {
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            anyhow::bail!("Date range starts after it ends: {} > {}", from, to);
        }
        Ok(Self { from, to })
    }

    pub fn parse(from: &str, to: &str) -> Result<Self> {
        Self::new(parse_date(from)?, parse_date(to)?)
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days()
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .with_context(|| format!("Invalid date '{value}', expected YYYY-MM-DD"))
}

/// The document written for one guild log.
///
/// `totalLogs` is derived from `logs` when the summary is built and the
/// fields are read-only afterwards, so the two cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    guild: String,
    source: String,
    raids: Vec<String>,
    logs: Vec<UrlRecord>,
    total_logs: usize,
    date_range: DateRange,
}

impl ReportSummary {
    pub fn new(
        guild: String,
        source: String,
        raids: Vec<String>,
        logs: Vec<UrlRecord>,
        date_range: DateRange,
    ) -> Self {
        let total_logs = logs.len();
        Self {
            guild,
            source,
            raids,
            logs,
            total_logs,
            date_range,
        }
    }

    pub fn guild(&self) -> &str {
        &self.guild
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn raids(&self) -> &[String] {
        &self.raids
    }

    pub fn logs(&self) -> &[UrlRecord] {
        &self.logs
    }

    pub fn total_logs(&self) -> usize {
        self.total_logs
    }

    pub fn date_range(&self) -> DateRange {
        self.date_range
    }
}

/// Pretty JSON with two-space indentation and a trailing newline.
pub fn render_summary(summary: &ReportSummary) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(summary).context("Failed to serialize report summary")?;
    json.push('\n');
    Ok(json)
}
