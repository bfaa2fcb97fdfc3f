//! Status-keyed styling for the plant artwork.

use plantsim_schemas::PlantStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }
}

pub const POT_LIGHT: Color = Color::from_hex(0xD2691E);
pub const POT_DARK: Color = Color::from_hex(0xA0522D);
pub const FRUIT_LIGHT: Color = Color::from_hex(0xFF0000);
pub const FRUIT_DARK: Color = Color::from_hex(0xDC143C);
pub const FLOWER: Color = Color::from_hex(0xFFB6C1);
pub const FLOWER_CENTER: Color = Color::from_hex(0xFFEE00);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantTheme {
    pub label: Color,
    pub stem: Color,
    pub leaf_dark: Color,
    pub leaf_light: Color,
    pub leaf_vein: Color,
    /// Draw a frost overlay.
    pub frost: bool,
    /// Clockwise tilt of the stem around the pot rim, in degrees.
    pub stem_rotation_deg: f64,
    pub leaves_wilted: bool,
    pub flowers_visible: bool,
    pub flowers_falling: bool,
    pub fruits_visible: bool,
}

pub fn theme_for(status: PlantStatus) -> PlantTheme {
    let dry = matches!(status, PlantStatus::Wilted | PlantStatus::Dried);

    let (stem, leaf_dark, leaf_light, leaf_vein) = if dry {
        (
            Color::from_hex(0x704214),
            Color::from_hex(0xC4A484),
            Color::from_hex(0xBDB76B),
            Color::from_hex(0x8B4513),
        )
    } else {
        (
            Color::from_hex(0x5A3A22),
            Color::from_hex(0x228B22),
            Color::from_hex(0x3CB371),
            Color::from_hex(0x1A671A),
        )
    };

    let label = match status {
        PlantStatus::Wilted | PlantStatus::Dried => Color::from_hex(0xCA8A04),
        PlantStatus::Frozen => Color::from_hex(0x60A5FA),
        PlantStatus::Broken => Color::from_hex(0x6B7280),
        PlantStatus::Fruiting => Color::from_hex(0xEC4899),
        PlantStatus::Healthy | PlantStatus::Windy => Color::from_hex(0x16A34A),
    };

    let stem_rotation_deg = match status {
        PlantStatus::Windy => -4.0,
        PlantStatus::Broken => 80.0,
        _ => 0.0,
    };

    PlantTheme {
        label,
        stem,
        leaf_dark,
        leaf_light,
        leaf_vein,
        frost: status == PlantStatus::Frozen,
        stem_rotation_deg,
        leaves_wilted: dry,
        flowers_visible: matches!(
            status,
            PlantStatus::Fruiting | PlantStatus::Windy | PlantStatus::Broken
        ),
        flowers_falling: matches!(status, PlantStatus::Windy | PlantStatus::Broken),
        fruits_visible: status == PlantStatus::Fruiting,
    }
}
