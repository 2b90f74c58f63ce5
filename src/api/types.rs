// SPDX-License-Identifier: MPL-2.0
//! Wire types for the adverse-news service and the local record model.
//!
//! Nested business objects inside an [`Article`] may arrive either as
//! structured JSON or as raw strings depending on how the service processed
//! the source document. They are carried opaquely as [`serde_json::Value`]
//! and only ever formatted for display.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Lifecycle of a submitted search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Pending,
    Completed,
    Error,
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStatus::Pending => write!(f, "Pending"),
            SearchStatus::Completed => write!(f, "Completed"),
            SearchStatus::Error => write!(f, "Error"),
        }
    }
}

/// One row of the records table: a submitted name-search and its outcome.
///
/// Listed records come from the service; freshly submitted ones are created
/// locally with [`SearchRecord::pending`] and move to `Completed` or `Error`
/// when the submission resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRecord {
    pub id: String,
    pub names: String,
    /// RFC 3339 timestamp, displayed as-is.
    pub created_at: String,
    pub status: SearchStatus,
    /// Number of articles the search produced, when known.
    pub results_count: Option<u32>,
}

impl SearchRecord {
    /// Creates a local record for a submission that is still in flight.
    #[must_use]
    pub fn pending(id: String, names: String) -> Self {
        Self {
            id,
            names,
            created_at: chrono::Utc::now().to_rfc3339(),
            status: SearchStatus::Pending,
            results_count: None,
        }
    }

    /// Converts a listing summary into a table record.
    #[must_use]
    pub fn from_summary(summary: SearchSummary) -> Self {
        // The service does not report errors in summaries; searches that
        // found nothing are still being processed from its point of view.
        let status = if summary.adverse_news_found {
            SearchStatus::Completed
        } else {
            SearchStatus::Pending
        };

        Self {
            id: summary.id,
            names: summary.names,
            created_at: summary.created_at,
            status,
            results_count: Some(summary.results_count),
        }
    }
}

/// One entry of `GET /adversenews/searches`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SearchSummary {
    pub id: String,
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub names: String,
    #[serde(default)]
    pub adverse_news_found: bool,
    #[serde(default)]
    pub results_count: u32,
    #[serde(default)]
    pub adverse_news_ids: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub search_duration_ms: f64,
}

/// Response of `GET /adversenews/searches`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PaginatedSearches {
    #[serde(default)]
    pub items: Vec<SearchSummary>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total_pages: u32,
}

/// Full result set for one search, as returned by
/// `GET /adversenews/searches/{id}` and `POST /adversenews/searches`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SearchResultResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub names: String,
    #[serde(default)]
    pub total_hits: u32,
    pub search_id: String,
    #[serde(default)]
    pub search_duration_ms: f64,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub results: Vec<Article>,
}

/// One adverse-news hit belonging to a search's result set.
///
/// Every business field is display-only payload; the inspector interprets
/// nothing here except [`Article::image_source`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Article {
    pub id: String,
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default)]
    pub adverse_news_found: bool,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub newspaper_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub severity_level: Option<String>,
    #[serde(default)]
    pub overall_risk_score: Option<f64>,
    #[serde(default)]
    pub priority_level: Option<String>,
    #[serde(default)]
    pub relevance_score: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,

    // Opaque payload: structured JSON or raw string, never interpreted.
    #[serde(default)]
    pub newspaper_metadata: Value,
    #[serde(default)]
    pub article_identification: Value,
    #[serde(default)]
    pub adverse_news_classification: Value,
    #[serde(default)]
    pub summary: Value,
    #[serde(default)]
    pub risk_assessment: Value,
    #[serde(default)]
    pub risk_scoring: Value,
}

impl Article {
    /// Identifier of the scanned image to fetch for this article, if any.
    ///
    /// The service occasionally emits an empty string instead of omitting
    /// the field; both mean "no image".
    #[must_use]
    pub fn image_source(&self) -> Option<&str> {
        self.image_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Short human-readable summary, regardless of whether the service sent
    /// a structured summary object or a plain string.
    #[must_use]
    pub fn brief_summary(&self) -> Option<&str> {
        match &self.summary {
            Value::String(text) if !text.is_empty() => Some(text),
            Value::Object(fields) => fields
                .get("brief_summary")
                .and_then(Value::as_str)
                .filter(|text| !text.is_empty()),
            _ => None,
        }
    }
}
