// SPDX-License-Identifier: MPL-2.0
//! Fetch lifecycle for one record's multi-article result set.
//!
//! Every fetch carries a generation tag. Results whose tag no longer
//! matches the controller's current generation are discarded, so a slow
//! response for a previously selected record can never overwrite the
//! detail of the record selected after it.

use crate::api::{Article, SearchResultResponse};
use crate::error::{Error, Result};

/// Observable state of the detail fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// No record selected.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The result set arrived and holds at least one article.
    Loaded(SearchResultResponse),
    /// The fetch succeeded but the record has no articles.
    NoDetail,
    /// The fetch failed; the error is kept for display.
    Failed(Error),
}

/// Controller owning the result set of the currently inspected record.
#[derive(Debug, Clone)]
pub struct DetailFetch {
    state: DetailState,
    generation: u64,
}

impl Default for DetailFetch {
    fn default() -> Self {
        Self {
            state: DetailState::Idle,
            generation: 0,
        }
    }
}

impl DetailFetch {
    /// Starts a new fetch, invalidating any fetch still in flight.
    ///
    /// Returns the generation tag the caller must attach to the request so
    /// the response can be matched in [`DetailFetch::apply`].
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = DetailState::Loading;
        self.generation
    }

    /// Applies a finished fetch. Returns whether the result was accepted;
    /// stale generations are dropped without touching the state.
    pub fn apply(&mut self, generation: u64, result: Result<SearchResultResponse>) -> bool {
        if generation != self.generation {
            return false;
        }

        self.state = match result {
            Ok(response) if response.results.is_empty() => DetailState::NoDetail,
            Ok(response) => DetailState::Loaded(response),
            Err(error) => DetailState::Failed(error),
        };
        true
    }

    /// Drops the result set and invalidates any fetch still in flight.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.state = DetailState::Idle;
    }

    #[must_use]
    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Tag the next applied result must carry.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, DetailState::Loading)
    }

    /// Articles of the loaded result set, empty in every other state.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        match &self.state {
            DetailState::Loaded(response) => &response.results,
            _ => &[],
        }
    }
}
