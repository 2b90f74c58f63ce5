// SPDX-License-Identifier: MPL-2.0
//! Button styles shared by the records table and the inspector.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Color and elevation for one button state. [`Look::build`] applies the
/// corner radius and pixel snapping every button in the app shares.
struct Look {
    fill: Color,
    text: Color,
    outline: Color,
    shadow: Shadow,
}

impl Look {
    fn build(self) -> button::Style {
        button::Style {
            background: Some(Background::Color(self.fill)),
            text_color: self.text,
            border: Border {
                color: self.outline,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: self.shadow,
            snap: true,
        }
    }
}

fn muted(theme: &Theme, light_fill: Color) -> Look {
    Look {
        fill: match theme {
            Theme::Light => light_fill,
            _ => palette::GRAY_700,
        },
        text: palette::GRAY_400,
        outline: palette::GRAY_400,
        shadow: shadow::NONE,
    }
}

/// Brand-colored button for the actions that drive the workflow:
/// submitting a search and opening a result.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => Look {
            fill: palette::PRIMARY_400,
            text: palette::WHITE,
            outline: palette::PRIMARY_500,
            shadow: shadow::MD,
        },
        button::Status::Disabled => muted(theme, palette::GRAY_200),
        _ => Look {
            fill: palette::PRIMARY_500,
            text: palette::WHITE,
            outline: palette::PRIMARY_600,
            shadow: shadow::SM,
        },
    }
    .build()
}

/// Quiet button for navigation and dismissal: pager arrows, article
/// stepping, Back and Close.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let on_light = matches!(theme, Theme::Light);
    let text = if on_light {
        palette::GRAY_900
    } else {
        palette::WHITE
    };

    match status {
        button::Status::Hovered => Look {
            fill: if on_light {
                palette::GRAY_200
            } else {
                palette::GRAY_600
            },
            text,
            outline: palette::PRIMARY_500,
            shadow: shadow::SM,
        },
        button::Status::Disabled => muted(theme, palette::GRAY_100),
        _ => Look {
            fill: if on_light {
                palette::GRAY_100
            } else {
                palette::GRAY_700
            },
            text,
            outline: palette::GRAY_400,
            shadow: shadow::NONE,
        },
    }
    .build()
}

/// Toolbar chips floating over the expanded image. The labels sit on a
/// translucent black scrim that darkens as the pointer engages, so they
/// stay readable on any article image.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        Look {
            fill: Color {
                a: alpha,
                ..palette::BLACK
            },
            text: text_color,
            outline: Color::TRANSPARENT,
            shadow: shadow::MD,
        }
        .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(style: &button::Style) -> Color {
        match style.background {
            Some(Background::Color(color)) => color,
            _ => panic!("expected a solid fill"),
        }
    }

    #[test]
    fn primary_loses_its_brand_fill_when_disabled() {
        let active = primary(&Theme::Light, button::Status::Active);
        let off = primary(&Theme::Light, button::Status::Disabled);

        assert_eq!(fill(&active), palette::PRIMARY_500);
        assert_ne!(fill(&off), palette::PRIMARY_500);
        assert_eq!(off.shadow.blur_radius, 0.0);
    }

    #[test]
    fn secondary_text_follows_the_theme() {
        let light = secondary(&Theme::Light, button::Status::Active);
        let dark = secondary(&Theme::Dark, button::Status::Active);

        assert_eq!(light.text_color, palette::GRAY_900);
        assert_eq!(dark.text_color, palette::WHITE);
    }

    #[test]
    fn overlay_scrim_darkens_on_hover() {
        let style = overlay(palette::WHITE, 0.5, 0.8);
        let resting = style(&Theme::Dark, button::Status::Active);
        let hovered = style(&Theme::Dark, button::Status::Hovered);

        assert!(fill(&hovered).a > fill(&resting).a);
        assert_eq!(resting.text_color, palette::WHITE);
    }
}
