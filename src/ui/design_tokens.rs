// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, opacity, size and radius used by the gallery lives here.

## Organization

- **Palette**: Base and accent colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Frame, indicator and button sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_gallery::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
assert!(padding > 0.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// Retro-wave accent used by the header grid and letter glow (#CF33D9).
    pub const NEON_MAGENTA: Color = Color::from_rgb8(0xCF, 0x33, 0xD9);

    /// Night backdrop behind the header grid (#0c141f).
    pub const NIGHT: Color = Color::from_rgb8(0x0C, 0x14, 0x1F);

    /// Second title color for the "wave" half.
    pub const WAVE_CYAN: Color = Color::from_rgb8(0x33, 0xE0, 0xF2);

    /// Translucent wedge behind the title.
    pub const TITLE_WEDGE: Color = Color::from_rgba8(5, 5, 5, 0.33);

    /// Placeholder panel shown while an image loads or after it fails.
    pub const PLACEHOLDER: Color = Color::from_rgb(0.32, 0.32, 0.34);

    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Idle indicator pills.
    pub const INDICATOR_IDLE: f32 = 0.3;
    /// Disabled navigation buttons.
    pub const DISABLED: f32 = 0.3;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Caption strip under the fullscreen image.
    pub const CAPTION_STRIP: f32 = 0.6;
    pub const OVERLAY_STRONG: f32 = 0.7;
    /// Fullscreen viewer backdrop.
    pub const BACKDROP: f32 = 0.8;
    /// Resting subtitle opacity.
    pub const SUBTITLE: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;

    /// Round previous/next buttons.
    pub const NAV_BUTTON: f32 = 48.0;
    /// Round close button of the viewer.
    pub const CLOSE_BUTTON: f32 = 40.0;

    /// Indicator pill size; the active pill is stretched vertically.
    pub const INDICATOR_WIDTH: f32 = 8.0;
    pub const INDICATOR_HEIGHT: f32 = 32.0;
    pub const INDICATOR_ACTIVE_STRETCH: f32 = 1.25;

    /// Frame proportions in scene units (white border around the picture).
    pub const FRAME_WIDTH: f32 = 3.5;
    pub const FRAME_HEIGHT: f32 = 2.7;
    pub const PICTURE_WIDTH: f32 = 3.3;
    pub const PICTURE_HEIGHT: f32 = 2.5;

    /// Share of the carousel height the frame area occupies.
    pub const STAGE_HEIGHT_RATIO: f32 = 0.8;

    /// Header grid cell size.
    pub const GRID_CELL: f32 = 30.0;
    pub const GRID_LINE: f32 = 2.0;

    /// Largest width the fullscreen image may take.
    pub const VIEWER_MAX_WIDTH: f32 = 896.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale. The retro title is the only display size; everything
    //! else is body text.

    /// Retro-wave title letters.
    pub const DISPLAY: f32 = 56.0;

    /// Viewer caption.
    pub const TITLE_MD: f32 = 20.0;

    /// Subtitle and the `N / M` counter.
    pub const BODY_LG: f32 = 20.0;

    pub const BODY: f32 = 14.0;

    /// Navigation hint.
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    // The picture must fit inside its frame.
    assert!(sizing::PICTURE_WIDTH < sizing::FRAME_WIDTH);
    assert!(sizing::PICTURE_HEIGHT < sizing::FRAME_HEIGHT);
    assert!(sizing::INDICATOR_ACTIVE_STRETCH > 1.0);

    assert!(typography::DISPLAY > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);
};
