// SPDX-License-Identifier: MPL-2.0
//! The application-level message and startup flags.

use crate::ui::inspector;
use crate::ui::records;

/// Umbrella message: one variant per screen component, unwrapped again
/// by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Records(records::Message),
    Inspector(inspector::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional service root override (e.g. `http://screening.internal:8000`).
    pub api_url: Option<String>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
}
