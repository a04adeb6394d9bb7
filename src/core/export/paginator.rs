//! Cursor-based ID pagination
//!
//! The query endpoint caps offset pagination at 10,000 results; walking the
//! `after` cursor from `meta.next` has no such cap. Each call to
//! [`IdPaginator::next_page`] issues exactly one query request.
//!
//! Enumeration ends when:
//! - the response carries no (or an empty) next cursor,
//! - a page holds zero identifiers, even with a cursor,
//! - the call fails or returns a non-200 status (pages already yielded are kept),
//! - the server hands back a cursor it already issued.
//!
//! Blank identifiers are dropped from a page with a warning; the rest of the
//! page is kept.

use super::settings::MAX_QUERY_LIMIT;
use super::summary::RunStats;
use crate::adapters::falcon::{AssetsApi, QueryRequest};
use crate::domain::ids::ResourceId;
use std::collections::HashSet;

/// One page of resource identifiers
#[derive(Debug, Clone, PartialEq)]
pub struct IdPage {
    /// 1-based page number
    pub number: usize,

    /// Identifiers in server order, blanks removed
    pub ids: Vec<ResourceId>,

    /// Whether the server issued a cursor for a further page
    pub has_more: bool,
}

/// Lazy walk over every resource ID matching a filter
pub struct IdPaginator<'a> {
    api: &'a dyn AssetsApi,
    filter: Option<String>,
    limit: u32,
    cursor: Option<String>,
    seen_cursors: HashSet<String>,
    pages: usize,
    exhausted: bool,
}

impl<'a> IdPaginator<'a> {
    /// Start a walk from the first page
    ///
    /// `limit` is expected to be clamped by the caller; it is forced into
    /// 1..=1000 here as well.
    pub fn new(api: &'a dyn AssetsApi, filter: Option<String>, limit: u32) -> Self {
        Self {
            api,
            filter,
            limit: limit.clamp(1, MAX_QUERY_LIMIT),
            cursor: None,
            seen_cursors: HashSet::new(),
            pages: 0,
            exhausted: false,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Fetch the next page, or `None` once enumeration has ended
    pub async fn next_page(&mut self, stats: &mut RunStats) -> Option<IdPage> {
        if self.exhausted {
            return None;
        }

        let number = self.pages + 1;
        let request = QueryRequest::new(self.limit)
            .with_filter(self.filter.clone())
            .with_after(self.cursor.take());

        tracing::info!(page = number, limit = self.limit, "Requesting resource IDs");

        stats.api_calls_queries += 1;
        let response = match self.api.query_assets(&request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(page = number, error = %e, "Error querying IDs, stopping pagination");
                self.exhausted = true;
                return None;
            }
        };

        if !response.is_success() {
            tracing::error!(
                page = number,
                status = response.status_code,
                error = %response.error_summary(),
                "ID query failed, stopping pagination"
            );
            self.exhausted = true;
            return None;
        }

        let body = response.body;
        let next = body.next_cursor().map(str::to_string);
        if number == 1 {
            if let Some(total) = body.total() {
                tracing::info!(total, "Server reports matching resources");
            }
        }

        let mut ids = body.resources;
        if ids.is_empty() {
            tracing::info!(page = number, "Page returned no IDs, pagination complete");
            self.exhausted = true;
            return None;
        }

        let returned = ids.len();
        ids.retain(|id| !id.is_blank());
        if ids.len() < returned {
            tracing::warn!(
                page = number,
                dropped = returned - ids.len(),
                "Dropped blank resource IDs"
            );
        }

        self.pages = number;
        stats.pages += 1;
        stats.ids_retrieved += ids.len();

        match next {
            Some(cursor) if !self.seen_cursors.insert(cursor.clone()) => {
                tracing::warn!(
                    page = number,
                    "Server repeated an earlier pagination cursor, stopping pagination"
                );
                self.exhausted = true;
            }
            Some(cursor) => self.cursor = Some(cursor),
            None => self.exhausted = true,
        }

        tracing::info!(
            page = number,
            count = ids.len(),
            total_ids = stats.ids_retrieved,
            "Got {} IDs",
            ids.len()
        );

        Some(IdPage {
            number,
            ids,
            has_more: !self.exhausted,
        })
    }

    /// Drain every remaining page into one list
    pub async fn collect_all(mut self, stats: &mut RunStats) -> Vec<ResourceId> {
        let mut all_ids = Vec::new();
        while let Some(page) = self.next_page(stats).await {
            all_ids.extend(page.ids);
        }

        tracing::info!(
            count = all_ids.len(),
            pages = self.pages,
            "Completed: retrieved {} total resource IDs",
            all_ids.len()
        );
        all_ids
    }
}
