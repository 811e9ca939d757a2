use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::patterns::{validate_prefix, DEFAULT_PREFIX};
use crate::report::DateRange;
use crate::Args;

pub const DEFAULT_CONFIG_FILE: &str = "raidlogs.toml";

const DEFAULT_INPUT: &str = "data/noxus/log.md";
const DEFAULT_OUTPUT: &str = "data/noxus/noxus-raid-logs.json";
const DEFAULT_GUILD: &str = "NOXUS";
const DEFAULT_RAIDS: [&str; 2] = ["Icecrown", "Ruby Sanctum"];
const DEFAULT_FROM: &str = "2025-08-30";
const DEFAULT_TO: &str = "2026-01-18";

/// Everything one extraction run needs. Built once, then only read.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub guild: String,
    pub source: String,
    pub raids: Vec<String>,
    pub date_range: DateRange,
    pub prefix: String,
    pub infer_dates: bool,
}

impl ExtractorConfig {
    /// Built-in settings for the NOXUS guild log.
    pub fn noxus() -> Result<Self> {
        Ok(Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            guild: DEFAULT_GUILD.to_string(),
            source: DEFAULT_INPUT.to_string(),
            raids: DEFAULT_RAIDS.iter().map(|r| r.to_string()).collect(),
            date_range: DateRange::parse(DEFAULT_FROM, DEFAULT_TO)?,
            prefix: DEFAULT_PREFIX.to_string(),
            infer_dates: false,
        })
    }
}

/// On-disk form of the configuration. Every key is optional.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub guild: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub raids: Option<Vec<String>>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub prefix: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: FileConfig = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {:?}", path))?;
        info!(action = "loaded", component = "config_file", file_path = ?path, "Loaded config file");
        Ok(config)
    }

    fn defaults() -> Self {
        Self {
            input: Some(PathBuf::from(DEFAULT_INPUT)),
            output: Some(PathBuf::from(DEFAULT_OUTPUT)),
            guild: Some(DEFAULT_GUILD.to_string()),
            source: None,
            raids: Some(DEFAULT_RAIDS.iter().map(|r| r.to_string()).collect()),
            from: Some(DEFAULT_FROM.to_string()),
            to: Some(DEFAULT_TO.to_string()),
            prefix: Some(DEFAULT_PREFIX.to_string()),
        }
    }
}

/// Layers built-in defaults, the config file and command-line flags, in that
/// order of increasing precedence.
pub fn resolve(args: &Args) -> Result<ExtractorConfig> {
    let file = match args.config.as_deref() {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {:?}", path);
            }
            Some(FileConfig::load(path)?)
        }
        None => {
            let default_file = Path::new(DEFAULT_CONFIG_FILE);
            if default_file.exists() {
                Some(FileConfig::load(default_file)?)
            } else {
                None
            }
        }
    };

    resolve_with(args, file.unwrap_or_default())
}

pub fn resolve_with(args: &Args, file: FileConfig) -> Result<ExtractorConfig> {
    let mut config = ExtractorConfig::noxus()?;

    let input = args.input.clone().or(file.input);
    let source = args.source.clone().or(file.source);

    if let Some(input) = input {
        config.input = input;
    }
    config.source = source.unwrap_or_else(|| config.input.display().to_string());

    if let Some(output) = args.output.clone().or(file.output) {
        config.output = output;
    }
    if let Some(guild) = args.guild.clone().or(file.guild) {
        config.guild = guild;
    }
    if !args.raids.is_empty() {
        config.raids = args.raids.clone();
    } else if let Some(raids) = file.raids {
        config.raids = raids;
    }

    let from = args.from.clone().or(file.from);
    let to = args.to.clone().or(file.to);
    if from.is_some() || to.is_some() {
        let from = from.unwrap_or_else(|| config.date_range.from().to_string());
        let to = to.unwrap_or_else(|| config.date_range.to().to_string());
        config.date_range = DateRange::parse(&from, &to)?;
    }

    if let Some(prefix) = args.prefix.clone().or(file.prefix) {
        validate_prefix(&prefix)?;
        config.prefix = prefix;
    }
    config.infer_dates = args.infer_dates;

    Ok(config)
}

pub fn init_default_config() -> Result<()> {
    let default_file = Path::new(DEFAULT_CONFIG_FILE);

    if default_file.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first if you want to reinitialize.",
            DEFAULT_CONFIG_FILE
        );
    }

    write_default_config(default_file)?;
    println!("Created {} with default settings", DEFAULT_CONFIG_FILE);

    Ok(())
}

pub fn write_default_config(path: &Path) -> Result<()> {
    let content =
        toml::to_string_pretty(&FileConfig::defaults()).context("Failed to encode default config")?;
    fs::write(path, content).with_context(|| format!("Failed to write config file {:?}", path))?;
    Ok(())
}
