//! Run statistics and reporting
//!
//! [`RunStats`] is owned by the command driving the export and lent as
//! `&mut` to the paginator and fetcher, which bump its counters as calls
//! complete. It stays readable after an interrupted run so the partial
//! numbers can still be reported.

use chrono::{DateTime, Duration, Utc};
use std::fmt;

const RULE_WIDTH: usize = 60;

/// Counters for one export run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    /// Non-empty ID pages received
    pub pages: usize,

    /// Resource IDs received from the query endpoint
    pub ids_retrieved: usize,

    /// Records received from the entities endpoint
    pub resources_retrieved: usize,

    /// Records written to the output file
    pub resources_written: usize,

    /// Query endpoint calls, successful or not
    pub api_calls_queries: usize,

    /// Entities endpoint calls, successful or not
    pub api_calls_entities: usize,

    /// Hydration batches that contributed no records because they failed
    pub failed_batches: usize,

    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start time
    pub fn start(&mut self) {
        self.started_at = Some(Utc::now());
        self.finished_at = None;
    }

    /// Record the end time
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn total_api_calls(&self) -> usize {
        self.api_calls_queries + self.api_calls_entities
    }

    /// Wall-clock duration, once both timestamps are set
    pub fn elapsed(&self) -> Option<Duration> {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Duration as `H:MM:SS`, or `Unknown` while the run is open
    pub fn elapsed_display(&self) -> String {
        match self.elapsed() {
            Some(duration) => format_duration(duration),
            None => "Unknown".to_string(),
        }
    }

    /// Log the statistics as one structured event
    pub fn log_summary(&self) {
        tracing::info!(
            pages = self.pages,
            ids_retrieved = self.ids_retrieved,
            resources_retrieved = self.resources_retrieved,
            resources_written = self.resources_written,
            api_calls_queries = self.api_calls_queries,
            api_calls_entities = self.api_calls_entities,
            failed_batches = self.failed_batches,
            duration = %self.elapsed_display(),
            "Run statistics"
        );
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{rule}")?;
        writeln!(f, "EXECUTION STATISTICS")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Resource IDs retrieved:    {}", group(self.ids_retrieved))?;
        writeln!(f, "Resources retrieved:       {}", group(self.resources_retrieved))?;
        writeln!(f, "Resources written:         {}", group(self.resources_written))?;
        writeln!(f, "ID pages:                  {}", group(self.pages))?;
        writeln!(f, "API calls (queries):       {}", group(self.api_calls_queries))?;
        writeln!(f, "API calls (entities):      {}", group(self.api_calls_entities))?;
        writeln!(f, "Total API calls:           {}", group(self.total_api_calls()))?;
        writeln!(f, "Failed batches:            {}", group(self.failed_batches))?;
        writeln!(f, "Execution time:            {}", self.elapsed_display())?;
        write!(f, "{rule}")
    }
}

/// `H:MM:SS`, fractional seconds dropped
fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    format!(
        "{}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Thousands separators: 1234567 -> "1,234,567"
fn group(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
