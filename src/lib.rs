pub mod args;
pub mod config;
pub mod error;
pub mod extractor;
pub mod patterns;
pub mod report;
pub mod report_id;
pub mod utils;

pub use args::Args;
pub use config::{init_default_config, ExtractorConfig};
pub use error::ExtractError;
pub use extractor::{build_summary, extract_base_urls, run, Destination};
pub use report::{render_summary, DateRange, ReportSummary, UrlRecord};
