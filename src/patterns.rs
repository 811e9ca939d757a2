use anyhow::{Context, Result};
use regex::Regex;
use std::time::Instant;
use tracing::info;
use url::Url;

pub const DEFAULT_PREFIX: &str = "https://uwu-logs.xyz/reports/";

// Letters, digits, underscore, hyphen and slash. `?` and `#` end a match.
const PATH_CLASS: &str = r"[\w\-/]+";

/// Compiled matcher for report links that start with a fixed prefix.
#[derive(Debug, Clone)]
pub struct UrlPattern {
    prefix: String,
    regex: Regex,
}

impl UrlPattern {
    pub fn new(prefix: &str) -> Result<Self> {
        let start_time = Instant::now();
        validate_prefix(prefix)?;

        let source = format!("{}{}", regex::escape(prefix), PATH_CLASS);
        let regex = Regex::new(&source)
            .with_context(|| format!("Failed to compile URL pattern for prefix {prefix}"))?;

        info!(
            action = "complete",
            component = "pattern_compile",
            prefix = prefix,
            duration_ms = start_time.elapsed().as_millis(),
            "Compiled report URL pattern"
        );
        Ok(Self {
            prefix: prefix.to_string(),
            regex,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Every non-overlapping match, left to right.
    pub fn find_all<'h>(&self, text: &'h str) -> Vec<&'h str> {
        self.regex.find_iter(text).map(|m| m.as_str()).collect()
    }
}

pub fn validate_prefix(prefix: &str) -> Result<()> {
    let url = Url::parse(prefix).with_context(|| format!("Invalid URL prefix: {prefix}"))?;
    if !matches!(url.scheme(), "https" | "http") {
        anyhow::bail!("URL prefix must use http or https, got '{}'", url.scheme());
    }
    if url.host_str().is_none() {
        anyhow::bail!("URL prefix has no host: {prefix}");
    }
    Ok(())
}
