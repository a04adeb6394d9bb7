//! CrowdStrike Falcon Cloud Security Assets adapter
//!
//! This module provides the API trait used by the export pipeline, the
//! `reqwest`-based production client, and the request/response models.

pub mod api;
pub mod client;
pub mod models;

pub use api::AssetsApi;
pub use client::FalconClient;
pub use models::{ApiErrorDetail, ApiResponse, EntitiesBody, QueryBody, QueryMeta, QueryRequest};
