// SPDX-License-Identifier: MPL-2.0
//! Screen components and the visual vocabulary they share.
//!
//! [`records`] and [`inspector`] are the two screens, each an Elm-style
//! component owning its state and messages. The rest is shared between
//! them: [`design_tokens`] and [`styles`] carry the visual constants,
//! [`theming`] selects light or dark, [`state`] holds the pan/zoom
//! viewport transform, and [`widgets`] draws the transformed image.

pub mod design_tokens;
pub mod inspector;
pub mod records;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
