// SPDX-License-Identifier: MPL-2.0
//! Position tracking through the articles of one result set.
//!
//! Navigation saturates at both ends; there is no wrap-around. The
//! navigator holds only the index, never the articles themselves.

/// Snapshot of the navigator for rendering pager controls.
///
/// `position` is 1-based for display ("Article 2 of 5"); it is 0 only when
/// the result set is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    pub position: usize,
    pub total: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Saturating cursor over the current result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArticleNavigator {
    index: usize,
    total: usize,
}

impl ArticleNavigator {
    /// Rebinds the navigator to a freshly fetched result set, back at the
    /// first article.
    pub fn reset_for(&mut self, total: usize) {
        self.index = 0;
        self.total = total;
    }

    /// Advances to the next article. Returns whether the index changed.
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Steps back to the previous article. Returns whether the index changed.
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Current 0-based index into the result set.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of articles in the bound result set.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.index + 1 < self.total
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Snapshot for the pager row.
    #[must_use]
    pub fn info(&self) -> NavigationInfo {
        NavigationInfo {
            position: if self.total == 0 { 0 } else { self.index + 1 },
            total: self.total,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }
}
