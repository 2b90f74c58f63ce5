// SPDX-License-Identifier: MPL-2.0
//! Which of the two screens owns the window.

/// The records table or the result detail inspector; exactly one is
/// visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Records,
    Inspector,
}
