//! Export orchestration
//!
//! This module provides the export pipeline:
//! - Cursor pagination over resource IDs ([`IdPaginator`])
//! - Batched detail hydration ([`DetailFetcher`])
//! - Buffered and streaming JSON output ([`writer`])
//! - Run statistics and reporting ([`RunStats`])
//! - Orchestration of the above ([`ExportCoordinator`])

pub mod coordinator;
pub mod fetcher;
pub mod paginator;
pub mod settings;
pub mod summary;
pub mod writer;

pub use coordinator::{ExportCoordinator, ExportOutcome};
pub use fetcher::{BatchOutcome, DetailFetcher, Hydration};
pub use paginator::{IdPage, IdPaginator};
pub use settings::{
    clamp_batch_size, clamp_query_limit, ExportMode, ExportSettings, DEFAULT_OUTPUT,
    MAX_BATCH_SIZE, MAX_QUERY_LIMIT,
};
pub use summary::RunStats;
pub use writer::{bytes_to_mb, write_buffered, StreamingJsonWriter};
