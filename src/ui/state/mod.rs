// SPDX-License-Identifier: MPL-2.0
//! Interaction state kept apart from the widgets that render it.

pub mod viewport;

pub use viewport::{ViewportTransform, Zoom};
