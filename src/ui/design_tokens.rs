// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the design system's tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (tonal scales from 10 = lightest to 100 = darkest)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_primer::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Dim a disabled control
let dimmed = Color {
    a: opacity::DISABLED,
    ..palette::NEUTRAL_100
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;

    // Primary (blue)
    pub const PRIMARY_20: Color = Color::from_rgb8(0xE6, 0xF2, 0xFF);
    pub const PRIMARY_30: Color = Color::from_rgb8(0xA8, 0xDE, 0xF8);
    pub const PRIMARY_50: Color = Color::from_rgb8(0x49, 0xAE, 0xDE);
    pub const PRIMARY_80: Color = Color::from_rgb8(0x00, 0x64, 0x93);
    pub const PRIMARY_90: Color = Color::from_rgb8(0x00, 0x32, 0x5A);

    // Tertiary (violet)
    pub const TERTIARY_30: Color = Color::from_rgb8(0xE4, 0xDF, 0xFF);
    pub const TERTIARY_70: Color = Color::from_rgb8(0x5B, 0x52, 0xAB);

    // Neutral (grayscale)
    pub const NEUTRAL_10: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);
    pub const NEUTRAL_30: Color = Color::from_rgb8(0xF1, 0xF0, 0xF4);
    pub const NEUTRAL_40: Color = Color::from_rgb8(0xE3, 0xE2, 0xE6);
    pub const NEUTRAL_50: Color = Color::from_rgb8(0x90, 0x90, 0x94);
    pub const NEUTRAL_60: Color = Color::from_rgb8(0x76, 0x77, 0x7A);
    pub const NEUTRAL_70: Color = Color::from_rgb8(0x5D, 0x5E, 0x61);
    pub const NEUTRAL_80: Color = Color::from_rgb8(0x45, 0x47, 0x4A);
    pub const NEUTRAL_90: Color = Color::from_rgb8(0x2F, 0x30, 0x33);
    pub const NEUTRAL_100: Color = Color::from_rgb8(0x1C, 0x1B, 0x1F);

    // Semantic colors: `*_MAIN` for text/borders, `*_ACCENT` for tinted surfaces
    pub const DANGER_MAIN: Color = Color::from_rgb8(0xBA, 0x1A, 0x1A);
    pub const DANGER_ACCENT: Color = Color::from_rgb8(0xFF, 0xED, 0xEA);
    pub const WARNING_MAIN: Color = Color::from_rgb8(0xEE, 0xA6, 0x04);
    pub const WARNING_ACCENT: Color = Color::from_rgb8(0xFF, 0xF7, 0xE4);
    pub const SUCCESS_MAIN: Color = Color::from_rgb8(0x00, 0x7A, 0x0D);
    pub const SUCCESS_ACCENT: Color = Color::from_rgb8(0xD6, 0xFF, 0xDA);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Disabled controls and options
    pub const DISABLED: f32 = 0.5;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Secondary text such as a notification body
    pub const SECONDARY_TEXT: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 40.0;

    /// Leading avatar of an option carrying a photo
    pub const AVATAR: f32 = 24.0;

    // Component widths
    pub const SNACKBAR_MAX_WIDTH: f32 = 448.0;

    /// Distance a notification travels while sliding in or out
    pub const SNACKBAR_SLIDE: f32 = 16.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Body: Primary content text
    //! - Caption: Secondary, supporting text

    /// Large body - Select value, notification title
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Field labels, notification body
    pub const BODY: f32 = 14.0;

    /// Caption - Error messages, option tags
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Input fields, option lists
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Focus ring
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    const SHADOW_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.15);

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const LG: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    // Opacity validation
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::DISABLED > 0.0 && opacity::DISABLED < 1.0);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);

    // Typography validation
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
