// SPDX-License-Identifier: MPL-2.0
//! `adverse_lens` is a desktop dashboard for adverse-news screening built
//! with the Iced GUI framework.
//!
//! It lists saved name searches, fetches the matched articles for a selected
//! record, and inspects each article's scanned newspaper image with an
//! interactive pan/zoom viewer.

#![doc(html_root_url = "https://docs.rs/adverse_lens/0.1.0")]

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
