// SPDX-License-Identifier: MPL-2.0
//! Access to the adverse-news service: wire types and the HTTP client.

pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{
    Article, PaginatedSearches, SearchRecord, SearchResultResponse, SearchStatus, SearchSummary,
};
