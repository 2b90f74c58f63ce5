// SPDX-License-Identifier: MPL-2.0
//! The visual constants every screen draws from: palette, spacing on a
//! 4px grid, type sizes, strokes, and elevation. Components name a token
//! instead of hard-coding a color or size.

use iced::Color;

pub mod palette {
    use super::Color;

    const fn gray(level: f32) -> Color {
        Color::from_rgb(level, level, level)
    }

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Neutral ramp, darkest first.
    pub const GRAY_900: Color = gray(0.1);
    pub const GRAY_700: Color = gray(0.3);
    pub const GRAY_600: Color = gray(0.35);
    pub const GRAY_400: Color = gray(0.4);
    pub const GRAY_200: Color = gray(0.75);
    pub const GRAY_100: Color = gray(0.85);

    // Brand blues for primary actions and focus accents.
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Severity colors for status badges and error panels.
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

pub mod opacity {
    /// Resting scrim behind the overlay toolbar chips.
    pub const OVERLAY_MEDIUM: f32 = 0.5;

    /// Scrim under a hovered chip.
    pub const OVERLAY_HOVER: f32 = 0.8;

    /// Scrim under a pressed chip.
    pub const OVERLAY_PRESSED: f32 = 0.9;

    /// Backdrop dimming the detail sheet behind the expanded image.
    pub const BACKDROP: f32 = 0.85;

    /// Fill of semi-transparent panels.
    pub const SURFACE: f32 = 0.95;
}

/// Gaps and padding, in half steps of an 8px grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    /// Height of the inline image preview in the detail sheet.
    pub const PREVIEW_HEIGHT: f32 = 280.0;

    /// Maximum width of the detail sheet content column.
    pub const DETAIL_WIDTH: f32 = 720.0;

    /// Width of the search name input on the records screen.
    pub const SEARCH_INPUT_WIDTH: f32 = 320.0;
}

pub mod typography {
    /// Screen headings.
    pub const TITLE_LG: f32 = 30.0;

    /// Record names and the detail sheet title.
    pub const TITLE_MD: f32 = 20.0;

    /// Section headers and article headlines.
    pub const TITLE_SM: f32 = 18.0;

    /// Running text: summaries, labels, table cells.
    pub const BODY: f32 = 14.0;

    /// Badges, timestamps, and the article position readout.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;

    /// Large enough to render any badge as a pill.
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    const fn drop_shadow(y: f32, blur: f32) -> Shadow {
        Shadow {
            color: palette::BLACK,
            offset: Vector { x: 0.0, y },
            blur_radius: blur,
        }
    }

    pub const NONE: Shadow = drop_shadow(0.0, 0.0);
    pub const SM: Shadow = drop_shadow(2.0, 4.0);
    pub const MD: Shadow = drop_shadow(4.0, 8.0);
}

// Every scale must stay strictly ordered.
const _: () = {
    assert!(palette::GRAY_900.r < palette::GRAY_700.r);
    assert!(palette::GRAY_700.r < palette::GRAY_600.r);
    assert!(palette::GRAY_600.r < palette::GRAY_400.r);
    assert!(palette::GRAY_400.r < palette::GRAY_200.r);
    assert!(palette::GRAY_200.r < palette::GRAY_100.r);

    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_HOVER);
    assert!(opacity::OVERLAY_HOVER < opacity::OVERLAY_PRESSED);
    assert!(opacity::BACKDROP < 1.0 && opacity::SURFACE < 1.0);

    assert!(spacing::XXS < spacing::XS && spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD && spacing::MD < spacing::LG);
    assert!(spacing::LG < spacing::XL);

    assert!(typography::CAPTION < typography::BODY);
    assert!(typography::BODY < typography::TITLE_SM);
    assert!(typography::TITLE_SM < typography::TITLE_MD);
    assert!(typography::TITLE_MD < typography::TITLE_LG);

    assert!(border::WIDTH_SM < border::WIDTH_MD);
    assert!(radius::SM < radius::MD && radius::MD < radius::LG);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_steps_stay_on_the_grid() {
        let steps = [
            spacing::XXS,
            spacing::XS,
            spacing::SM,
            spacing::MD,
            spacing::LG,
            spacing::XL,
        ];
        for step in steps {
            assert_eq!(step % 4.0, 0.0);
        }
        assert_eq!(spacing::MD, spacing::XS * 2.0);
    }
}
