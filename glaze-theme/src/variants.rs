//! Built-in chrome theme variants.
//!
//! Six variants cover the regular light/dark pair and the four
//! high-contrast renditions the OS ships. Each variant resolves to a chrome
//! palette and, combined with the live accent palette, produces the
//! resource dictionary the engine overlays on a theme transition.

use peniko::Color;

use crate::accent::AccentPalette;
use crate::resources::{ResourceValue, ThemeDictionary};

/// The logical theme the engine reports after variant resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalTheme {
    /// Regular light appearance.
    Light,
    /// Regular dark appearance.
    Dark,
    /// A system high-contrast theme is active.
    HighContrast,
}

/// A built-in chrome theme variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    /// Regular light variant.
    Light,
    /// Regular dark variant.
    Dark,
    /// High-contrast black.
    HcBlack,
    /// High-contrast white.
    HcWhite,
    /// First numbered high-contrast variant.
    Hc1,
    /// Second numbered high-contrast variant.
    Hc2,
}

impl ThemeVariant {
    /// The short resource name of the variant.
    pub fn resource_name(self) -> &'static str {
        match self {
            ThemeVariant::Light => "light",
            ThemeVariant::Dark => "dark",
            ThemeVariant::HcBlack => "hcblack",
            ThemeVariant::HcWhite => "hcwhite",
            ThemeVariant::Hc1 => "hc1",
            ThemeVariant::Hc2 => "hc2",
        }
    }

    /// The source identity of the variant's built-in dictionary.
    pub fn source_uri(self) -> String {
        format!("glaze:theme/{}", self.resource_name())
    }

    /// Whether this is one of the high-contrast variants.
    pub fn is_high_contrast(self) -> bool {
        matches!(
            self,
            ThemeVariant::HcBlack | ThemeVariant::HcWhite | ThemeVariant::Hc1 | ThemeVariant::Hc2
        )
    }
}

/// Resolve a variant and logical theme from the sampled OS state.
///
/// High contrast wins over everything and selects among the four
/// high-contrast variants by substring match against the OS theme name;
/// otherwise the light/dark preference decides.
pub fn resolve(theme_name: &str, use_light: bool, high_contrast: bool) -> (ThemeVariant, LogicalTheme) {
    if high_contrast {
        let variant = if theme_name.contains("hcblack") {
            ThemeVariant::HcBlack
        } else if theme_name.contains("hcwhite") {
            ThemeVariant::HcWhite
        } else if theme_name.contains("hc1") {
            ThemeVariant::Hc1
        } else {
            ThemeVariant::Hc2
        };
        (variant, LogicalTheme::HighContrast)
    } else if use_light {
        (ThemeVariant::Light, LogicalTheme::Light)
    } else {
        (ThemeVariant::Dark, LogicalTheme::Dark)
    }
}

/// The chrome-level colors of one variant.
#[derive(Debug, Clone, Copy)]
pub struct ChromePalette {
    /// Window background behind the client area.
    pub window_background: Color,
    /// Primary window text.
    pub window_text: Color,
    /// Raised surface fill.
    pub surface: Color,
    /// Alternate surface fill for stripes and hover states.
    pub surface_alt: Color,
    /// Separator and outline color.
    pub border: Color,
    /// Fill for interactive controls.
    pub control_fill: Color,
    /// Selection highlight color.
    pub selection: Color,
}

impl ChromePalette {
    /// Palette for the regular light variant.
    pub fn light() -> Self {
        Self {
            window_background: Color::from_rgb8(243, 243, 243),
            window_text: Color::from_rgb8(27, 27, 27),
            surface: Color::from_rgb8(251, 251, 251),
            surface_alt: Color::from_rgb8(238, 238, 238),
            border: Color::from_rgb8(214, 214, 214),
            control_fill: Color::from_rgb8(253, 253, 253),
            selection: Color::from_rgb8(0, 120, 212),
        }
    }

    /// Palette for the regular dark variant.
    pub fn dark() -> Self {
        Self {
            window_background: Color::from_rgb8(32, 32, 32),
            window_text: Color::from_rgb8(255, 255, 255),
            surface: Color::from_rgb8(43, 43, 43),
            surface_alt: Color::from_rgb8(51, 51, 51),
            border: Color::from_rgb8(69, 69, 69),
            control_fill: Color::from_rgb8(45, 45, 45),
            selection: Color::from_rgb8(76, 194, 255),
        }
    }

    /// Palette for the high-contrast black variant.
    pub fn hc_black() -> Self {
        Self {
            window_background: Color::from_rgb8(0, 0, 0),
            window_text: Color::from_rgb8(255, 255, 255),
            surface: Color::from_rgb8(0, 0, 0),
            surface_alt: Color::from_rgb8(0, 0, 0),
            border: Color::from_rgb8(255, 255, 255),
            control_fill: Color::from_rgb8(0, 0, 0),
            selection: Color::from_rgb8(26, 235, 255),
        }
    }

    /// Palette for the high-contrast white variant.
    pub fn hc_white() -> Self {
        Self {
            window_background: Color::from_rgb8(255, 255, 255),
            window_text: Color::from_rgb8(0, 0, 0),
            surface: Color::from_rgb8(255, 255, 255),
            surface_alt: Color::from_rgb8(255, 255, 255),
            border: Color::from_rgb8(0, 0, 0),
            control_fill: Color::from_rgb8(255, 255, 255),
            selection: Color::from_rgb8(55, 0, 110),
        }
    }

    /// Palette for the first numbered high-contrast variant.
    pub fn hc1() -> Self {
        Self {
            window_background: Color::from_rgb8(0, 0, 0),
            window_text: Color::from_rgb8(255, 255, 255),
            surface: Color::from_rgb8(0, 0, 0),
            surface_alt: Color::from_rgb8(0, 0, 0),
            border: Color::from_rgb8(255, 255, 255),
            control_fill: Color::from_rgb8(0, 0, 0),
            selection: Color::from_rgb8(0, 255, 0),
        }
    }

    /// Palette for the second numbered high-contrast variant.
    pub fn hc2() -> Self {
        Self {
            window_background: Color::from_rgb8(0, 0, 0),
            window_text: Color::from_rgb8(255, 255, 255),
            surface: Color::from_rgb8(0, 0, 0),
            surface_alt: Color::from_rgb8(0, 0, 0),
            border: Color::from_rgb8(255, 255, 255),
            control_fill: Color::from_rgb8(0, 0, 0),
            selection: Color::from_rgb8(255, 255, 0),
        }
    }

    /// Palette for the given variant.
    pub fn for_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Light => Self::light(),
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::HcBlack => Self::hc_black(),
            ThemeVariant::HcWhite => Self::hc_white(),
            ThemeVariant::Hc1 => Self::hc1(),
            ThemeVariant::Hc2 => Self::hc2(),
        }
    }
}

/// Build the resource dictionary of a variant.
///
/// Chrome-level entries come from the variant palette; the accent entries
/// come from the caller's effective accent palette so a masked provider
/// yields the fallback color everywhere.
pub fn dictionary(variant: ThemeVariant, accents: &AccentPalette) -> ThemeDictionary {
    let palette = ChromePalette::for_variant(variant);
    let mut dict = ThemeDictionary::new(variant.source_uri());
    dict.insert("chrome.window.background", ResourceValue::Color(palette.window_background));
    dict.insert("chrome.window.text", ResourceValue::Color(palette.window_text));
    dict.insert("chrome.surface", ResourceValue::Color(palette.surface));
    dict.insert("chrome.surface.alt", ResourceValue::Color(palette.surface_alt));
    dict.insert("chrome.border", ResourceValue::Color(palette.border));
    dict.insert("chrome.control.fill", ResourceValue::Color(palette.control_fill));
    dict.insert("chrome.selection", ResourceValue::Color(palette.selection));
    dict.insert("chrome.accent", ResourceValue::Color(accents.accent));
    dict.insert("chrome.accent.light1", ResourceValue::Color(accents.light1));
    dict.insert("chrome.accent.light2", ResourceValue::Color(accents.light2));
    dict.insert("chrome.accent.light3", ResourceValue::Color(accents.light3));
    dict.insert("chrome.accent.dark1", ResourceValue::Color(accents.dark1));
    dict.insert("chrome.accent.dark2", ResourceValue::Color(accents.dark2));
    dict.insert("chrome.accent.dark3", ResourceValue::Color(accents.dark3));
    dict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_high_contrast() {
        let (variant, logical) = resolve("hcwhite.theme", true, true);
        assert_eq!(variant, ThemeVariant::HcWhite);
        assert_eq!(logical, LogicalTheme::HighContrast);

        let (variant, _) = resolve("hcblack.theme", false, true);
        assert_eq!(variant, ThemeVariant::HcBlack);

        let (variant, _) = resolve("hc1.theme", false, true);
        assert_eq!(variant, ThemeVariant::Hc1);

        // unknown high-contrast names fall back to the second numbered variant
        let (variant, _) = resolve("custom.theme", false, true);
        assert_eq!(variant, ThemeVariant::Hc2);
    }

    #[test]
    fn test_resolve_light_dark() {
        assert_eq!(resolve("aero.theme", true, false).0, ThemeVariant::Light);
        assert_eq!(resolve("aero.theme", false, false).1, LogicalTheme::Dark);
    }

    #[test]
    fn test_dictionary_carries_accent_palette() {
        let accents = AccentPalette::splat(Color::from_rgb8(9, 8, 7));
        let dict = dictionary(ThemeVariant::Dark, &accents);
        assert_eq!(dict.source(), "glaze:theme/dark");
        assert_eq!(dict.get("chrome.accent").unwrap().as_color().unwrap().to_rgba8().r, 9);
        assert_eq!(dict.len(), 14);
    }
}
