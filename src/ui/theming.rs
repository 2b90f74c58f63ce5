// SPDX-License-Identifier: MPL-2.0
//! Theme selection persisted in the settings file.

use dark_light;
use iced::Theme;
use serde::{Deserialize, Serialize};

/// The three values `theme_mode` accepts in `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Parses a settings value, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    /// The iced theme this mode resolves to. `System` asks the desktop
    /// through `dark_light` and falls back to dark when detection fails.
    #[must_use]
    pub fn theme(self) -> Theme {
        let dark = match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        };

        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_modes_resolve_without_probing_the_desktop() {
        assert!(matches!(ThemeMode::Light.theme(), Theme::Light));
        assert!(matches!(ThemeMode::Dark.theme(), Theme::Dark));
    }

    #[test]
    fn system_mode_resolves_to_one_of_the_two_themes() {
        let theme = ThemeMode::System.theme();
        assert!(matches!(theme, Theme::Light | Theme::Dark));
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(ThemeMode::from_name("Light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_name(" DARK "), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_name("system"), Some(ThemeMode::System));
        assert_eq!(ThemeMode::from_name("solarized"), None);
    }

    #[test]
    fn round_trips_through_toml() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }

        let rendered = toml::to_string(&Wrapper {
            mode: ThemeMode::Light,
        })
        .expect("serialize theme mode");
        assert!(rendered.contains("light"));

        let parsed: Wrapper = toml::from_str("mode = \"dark\"").expect("parse theme mode");
        assert_eq!(parsed.mode, ThemeMode::Dark);
    }
}
