//! Templates, color schemes and resolved themes

use crate::{Color, DocModelError, Result};
use serde::{Deserialize, Serialize};

/// Visual template applied to every slide of a presentation.
///
/// The set is closed: renderers match exhaustively on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Modern,
    Professional,
    Minimal,
    Creative,
}

impl Template {
    pub const ALL: [Template; 4] = [
        Template::Modern,
        Template::Professional,
        Template::Minimal,
        Template::Creative,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Template::Modern => "Modern",
            Template::Professional => "Professional",
            Template::Minimal => "Minimal",
            Template::Creative => "Creative",
        }
    }

    /// Resolve the concrete palette for this template under a color scheme
    pub fn theme(&self, scheme: &ColorScheme) -> Theme {
        match self {
            Template::Modern => Theme {
                primary: scheme.primary,
                secondary: scheme.secondary,
                background: scheme.background,
                text: scheme.text,
                accent: scheme.accent,
                border: scheme.primary.with_alpha(0x40),
            },
            Template::Professional => Theme {
                primary: scheme.primary,
                secondary: scheme.secondary,
                background: scheme.background,
                text: scheme.text,
                accent: scheme.accent,
                border: scheme.primary,
            },
            Template::Minimal => Theme {
                primary: scheme.primary,
                secondary: scheme.secondary,
                background: Color::WHITE,
                text: Color::rgb(0x1f, 0x29, 0x37),
                accent: scheme.accent,
                border: Color::rgb(0xe5, 0xe7, 0xeb),
            },
            Template::Creative => Theme {
                primary: scheme.primary,
                secondary: scheme.secondary,
                background: scheme.background,
                text: scheme.text,
                accent: scheme.accent,
                border: scheme.accent,
            },
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A named palette chosen by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub name: String,
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub text: Color,
    pub accent: Color,
}

impl ColorScheme {
    fn preset(name: &str, colors: [u32; 5]) -> Self {
        let c = |v: u32| Color::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8);
        Self {
            name: name.to_string(),
            primary: c(colors[0]),
            secondary: c(colors[1]),
            background: c(colors[2]),
            text: c(colors[3]),
            accent: c(colors[4]),
        }
    }

    pub fn ocean_blue() -> Self {
        Self::preset("Ocean Blue", [0x0ea5e9, 0x0369a1, 0xf0f9ff, 0x0c4a6e, 0x38bdf8])
    }

    pub fn forest_green() -> Self {
        Self::preset("Forest Green", [0x10b981, 0x059669, 0xf0fdf4, 0x064e3b, 0x34d399])
    }

    pub fn sunset_orange() -> Self {
        Self::preset("Sunset Orange", [0xf97316, 0xea580c, 0xfff7ed, 0x7c2d12, 0xfb923c])
    }

    pub fn royal_purple() -> Self {
        Self::preset("Royal Purple", [0xa855f7, 0x9333ea, 0xfaf5ff, 0x581c87, 0xc084fc])
    }

    /// The fixed set of selectable schemes, default first
    pub fn presets() -> Vec<ColorScheme> {
        vec![
            Self::ocean_blue(),
            Self::forest_green(),
            Self::sunset_orange(),
            Self::royal_purple(),
        ]
    }

    /// Look up a preset by name, case-insensitively
    pub fn by_name(name: &str) -> Result<ColorScheme> {
        Self::presets()
            .into_iter()
            .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| DocModelError::UnknownColorScheme(name.to_string()))
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::ocean_blue()
    }
}

/// Fully resolved palette used by renderers. Derived, never user-authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub border: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_order_and_default() {
        let names: Vec<_> = ColorScheme::presets().into_iter().map(|s| s.name).collect();
        assert_eq!(names, ["Ocean Blue", "Forest Green", "Sunset Orange", "Royal Purple"]);
        assert_eq!(ColorScheme::default().primary.to_hex(), "#0ea5e9");
    }

    #[test]
    fn test_by_name() {
        assert_eq!(ColorScheme::by_name("forest green").unwrap().accent.to_hex(), "#34d399");
        assert!(ColorScheme::by_name("Neon").is_err());
    }

    #[test]
    fn test_minimal_pins_background_and_text() {
        let scheme = ColorScheme::royal_purple();
        let theme = Template::Minimal.theme(&scheme);
        assert_eq!(theme.background, Color::WHITE);
        assert_eq!(theme.text.to_hex(), "#1f2937");
        assert_eq!(theme.primary, scheme.primary);

        let modern = Template::Modern.theme(&scheme);
        assert_eq!(modern.background, scheme.background);
    }

    #[test]
    fn test_template_serde() {
        assert_eq!(serde_json::to_string(&Template::Creative).unwrap(), "\"creative\"");
        let t: Template = serde_json::from_str("\"professional\"").unwrap();
        assert_eq!(t, Template::Professional);
        assert!(serde_json::from_str::<Template>("\"vibrant-yellow\"").is_err());
    }
}
