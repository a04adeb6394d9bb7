//! Export settings and boundary clamping

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Maximum IDs per query request accepted by the API
pub const MAX_QUERY_LIMIT: u32 = 1000;

/// Maximum IDs per entities request accepted by the API
pub const MAX_BATCH_SIZE: usize = 100;

/// Pause after every hydration batch
pub const DEFAULT_RATE_LIMIT_DELAY: Duration = Duration::from_millis(100);

/// Default output file
pub const DEFAULT_OUTPUT: &str = "cloud_assets.json";

/// How records reach the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    /// Collect every record, then write the array in one pass
    Buffered,
    /// Write each page's records as soon as they are hydrated
    Streaming,
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportMode::Buffered => write!(f, "buffered"),
            ExportMode::Streaming => write!(f, "streaming"),
        }
    }
}

/// Settings for one export run
#[derive(Debug, Clone)]
pub struct ExportSettings {
    /// Export mode
    pub mode: ExportMode,

    /// Optional FQL filter
    pub filter: Option<String>,

    /// Output JSON file
    pub output: PathBuf,

    /// IDs per query request (1-1000)
    pub limit: u32,

    /// IDs per entities request (1-100)
    pub batch_size: usize,

    /// Pause after every hydration batch
    pub rate_limit_delay: Duration,
}

impl ExportSettings {
    /// Settings with default limit, batch size and delay
    pub fn new(mode: ExportMode, output: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            filter: None,
            output: output.into(),
            limit: MAX_QUERY_LIMIT,
            batch_size: MAX_BATCH_SIZE,
            rate_limit_delay: DEFAULT_RATE_LIMIT_DELAY,
        }
    }

    /// Set the FQL filter; blank filters are dropped
    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter.filter(|f| !f.trim().is_empty());
        self
    }

    /// Set the query limit (clamped by [`normalize`](Self::normalize))
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the hydration batch size (clamped by [`normalize`](Self::normalize))
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the inter-batch pause
    pub fn with_rate_limit_delay(mut self, delay: Duration) -> Self {
        self.rate_limit_delay = delay;
        self
    }

    /// Clamp limit and batch size into the ranges the API accepts
    ///
    /// Returns one warning per adjusted value.
    pub fn normalize(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();

        let limit = clamp_query_limit(self.limit);
        self.limit = limit.value;
        warnings.extend(limit.warning);

        let batch_size = clamp_batch_size(self.batch_size);
        self.batch_size = batch_size.value;
        warnings.extend(batch_size.warning);

        warnings
    }
}

/// A value forced into range, with the warning to show if it changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clamped<T> {
    pub value: T,
    pub warning: Option<String>,
}

/// Clamp a query limit to 1..=1000
pub fn clamp_query_limit(requested: u32) -> Clamped<u32> {
    if requested > MAX_QUERY_LIMIT {
        Clamped {
            value: MAX_QUERY_LIMIT,
            warning: Some(format!(
                "limit cannot exceed {MAX_QUERY_LIMIT}. Setting to {MAX_QUERY_LIMIT}."
            )),
        }
    } else if requested == 0 {
        Clamped {
            value: 1,
            warning: Some("limit must be at least 1. Setting to 1.".to_string()),
        }
    } else {
        Clamped {
            value: requested,
            warning: None,
        }
    }
}

/// Clamp a hydration batch size to 1..=100
pub fn clamp_batch_size(requested: usize) -> Clamped<usize> {
    if requested > MAX_BATCH_SIZE {
        Clamped {
            value: MAX_BATCH_SIZE,
            warning: Some(format!(
                "batch_size cannot exceed {MAX_BATCH_SIZE}. Setting to {MAX_BATCH_SIZE}."
            )),
        }
    } else if requested == 0 {
        Clamped {
            value: 1,
            warning: Some("batch_size must be at least 1. Setting to 1.".to_string()),
        }
    } else {
        Clamped {
            value: requested,
            warning: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1000, 1000, false ; "at maximum")]
    #[test_case(5000, 1000, true ; "above maximum")]
    #[test_case(250, 250, false ; "in range")]
    #[test_case(0, 1, true ; "zero")]
    fn test_clamp_query_limit(requested: u32, expected: u32, warns: bool) {
        let clamped = clamp_query_limit(requested);
        assert_eq!(clamped.value, expected);
        assert_eq!(clamped.warning.is_some(), warns);
    }

    #[test_case(100, 100, false ; "at maximum")]
    #[test_case(500, 100, true ; "above maximum")]
    #[test_case(7, 7, false ; "in range")]
    #[test_case(0, 1, true ; "zero")]
    fn test_clamp_batch_size(requested: usize, expected: usize, warns: bool) {
        let clamped = clamp_batch_size(requested);
        assert_eq!(clamped.value, expected);
        assert_eq!(clamped.warning.is_some(), warns);
    }

    #[test]
    fn test_normalize_reports_each_adjustment() {
        let mut settings = ExportSettings::new(ExportMode::Buffered, DEFAULT_OUTPUT)
            .with_limit(2000)
            .with_batch_size(500);

        let warnings = settings.normalize();

        assert_eq!(settings.limit, 1000);
        assert_eq!(settings.batch_size, 100);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[1].contains("batch_size cannot exceed 100"));
    }

    #[test]
    fn test_normalize_is_silent_for_defaults() {
        let mut settings = ExportSettings::new(ExportMode::Streaming, DEFAULT_OUTPUT);
        assert!(settings.normalize().is_empty());
    }

    #[test]
    fn test_blank_filter_dropped() {
        let settings = ExportSettings::new(ExportMode::Buffered, DEFAULT_OUTPUT)
            .with_filter(Some("  ".to_string()));
        assert!(settings.filter.is_none());

        let settings = ExportSettings::new(ExportMode::Buffered, DEFAULT_OUTPUT)
            .with_filter(Some("active:true".to_string()));
        assert_eq!(settings.filter.as_deref(), Some("active:true"));
    }

    #[test]
    fn test_export_mode_display() {
        assert_eq!(ExportMode::Buffered.to_string(), "buffered");
        assert_eq!(ExportMode::Streaming.to_string(), "streaming");
    }
}
