//! Text report assembly shared by every resource kind

use chrono::{DateTime, NaiveDate, Utc};

/// Field lines of one record
#[derive(Debug, Default)]
pub struct RecordBlock {
    lines: Vec<String>,
}

impl RecordBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `Label: value` when `show` is set
    pub fn field(&mut self, show: bool, label: &str, value: impl std::fmt::Display) {
        if show {
            self.lines.push(format!("{}: {}", label, value));
        }
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

/// `word` for one item, `words` otherwise
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// Trailing line of every report
pub fn summary_line(count: usize) -> String {
    format!("(Returned {} {})", count, pluralize("result", count))
}

/// Join record blocks with blank lines and append the summary
pub fn render_report(blocks: Vec<RecordBlock>) -> String {
    let count = blocks.len();
    let mut parts: Vec<String> = blocks.iter().map(RecordBlock::render).collect();
    parts.push(summary_line(count));
    parts.join("\n\n")
}

/// Parse the timestamps the platform sends (RFC 3339 or a bare date)
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Coarse relative time, e.g. "3 days ago"
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds();
    if secs < 0 {
        return "in the future".to_string();
    }

    const UNITS: [(i64, &str); 6] = [
        (365 * 24 * 3600, "year"),
        (30 * 24 * 3600, "month"),
        (7 * 24 * 3600, "week"),
        (24 * 3600, "day"),
        (3600, "hour"),
        (60, "minute"),
    ];

    for (unit_secs, unit) in UNITS {
        let n = secs / unit_secs;
        if n >= 1 {
            return format!("{} {} ago", n, pluralize(unit, n as usize));
        }
    }
    "just now".to_string()
}

/// Absolute plus relative rendering of a create date
///
/// Values that do not parse are shown verbatim.
pub fn format_date(raw: Option<&str>, now: DateTime<Utc>) -> String {
    match raw {
        None => String::new(),
        Some(raw) => match parse_timestamp(raw) {
            Some(dt) => format!(
                "{} ({})",
                dt.format("%Y-%m-%d %H:%M:%S UTC"),
                time_ago(dt, now)
            ),
            None => raw.to_string(),
        },
    }
}
