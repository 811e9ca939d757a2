use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Strips the query string, if any.
pub fn base_address(url: &str) -> &str {
    match url.find('?') {
        Some(idx) => &url[..idx],
        None => url,
    }
}

/// A report id of the form `YY-MM-DD--HH-MM--Character--Server`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportId {
    pub started_at: NaiveDateTime,
    pub character: String,
    pub server: String,
}

impl ReportId {
    pub fn parse(segment: &str) -> Option<Self> {
        let mut parts = segment.splitn(4, "--");
        let date = parts.next()?;
        let time = parts.next()?;
        let character = parts.next()?;
        let server = parts.next()?;

        if character.is_empty() || server.is_empty() {
            return None;
        }

        // uwu-logs ids carry a two-digit year
        let date = NaiveDate::parse_from_str(&format!("20{date}"), "%Y-%m-%d").ok()?;
        let time = NaiveTime::parse_from_str(time, "%H-%M").ok()?;

        Some(Self {
            started_at: date.and_time(time),
            character: character.to_string(),
            server: server.to_string(),
        })
    }

    /// Pulls the id out of the first path segment after `prefix`.
    pub fn from_url(url: &str, prefix: &str) -> Option<Self> {
        let rest = base_address(url).strip_prefix(prefix)?;
        let segment = rest.split('/').next()?;
        Self::parse(segment)
    }

    pub fn date(&self) -> NaiveDate {
        self.started_at.date()
    }
}
