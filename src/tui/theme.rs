//! Theme definitions for the TUI.
//!
//! This module provides color themes that can be swapped to change
//! the visual appearance of the interface.

use ratatui::style::Color;

/// A complete color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Name of the theme
    pub name: &'static str,

    // === Borders ===
    /// Primary border color
    pub border: Color,
    /// Dimmed/secondary border color
    pub border_dim: Color,
    /// Highlighted/focused border color
    pub border_highlight: Color,

    // === Text ===
    /// Primary text color
    pub text: Color,
    /// Dimmed/secondary text (labels, hints)
    pub text_dim: Color,
    /// Title text color
    pub text_title: Color,

    // === Status indicators ===
    /// Positive/confirmation state
    pub success: Color,
    /// Attention state (selection limits, filters)
    pub warning: Color,
    /// Error state (track not found)
    pub error: Color,
    /// Informational accents
    pub info: Color,

    // === Basin badges ===
    /// North Indian Ocean
    pub basin_nio: Color,
    /// South Indian Ocean
    pub basin_sio: Color,
    /// Any other basin label
    pub basin_other: Color,

    // === UI elements ===
    /// Selected row background
    pub selection_bg: Color,
    /// Selected row text
    pub selection_fg: Color,
    /// Current page number and checked comparison boxes
    pub accent: Color,
    /// Keybinding hints
    pub key_hint: Color,
    /// Background color
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    /// Default theme - cyan accent with standard terminal colors
    pub fn default_theme() -> Self {
        Self {
            name: "Default",

            border: Color::Cyan,
            border_dim: Color::DarkGray,
            border_highlight: Color::Cyan,

            text: Color::White,
            text_dim: Color::DarkGray,
            text_title: Color::Cyan,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Cyan,

            basin_nio: Color::Green,
            basin_sio: Color::Blue,
            basin_other: Color::Magenta,

            selection_bg: Color::DarkGray,
            selection_fg: Color::White,
            accent: Color::Yellow,
            key_hint: Color::Yellow,
            background: Color::Black,
        }
    }

    /// Catppuccin Mocha - warm pastel theme
    pub fn catppuccin_mocha() -> Self {
        Self {
            name: "Catppuccin Mocha",

            border: Color::Rgb(180, 190, 254),           // Lavender
            border_dim: Color::Rgb(88, 91, 112),         // Surface2
            border_highlight: Color::Rgb(203, 166, 247), // Mauve

            text: Color::Rgb(205, 214, 244),       // Text
            text_dim: Color::Rgb(147, 153, 178),   // Overlay1
            text_title: Color::Rgb(180, 190, 254), // Lavender

            success: Color::Rgb(166, 227, 161), // Green
            warning: Color::Rgb(249, 226, 175), // Yellow
            error: Color::Rgb(243, 139, 168),   // Red
            info: Color::Rgb(137, 220, 235),    // Sky

            basin_nio: Color::Rgb(166, 227, 161),   // Green
            basin_sio: Color::Rgb(116, 199, 236),   // Sapphire
            basin_other: Color::Rgb(203, 166, 247), // Mauve

            selection_bg: Color::Rgb(69, 71, 90),    // Surface1
            selection_fg: Color::Rgb(205, 214, 244), // Text
            accent: Color::Rgb(250, 179, 135),       // Peach
            key_hint: Color::Rgb(249, 226, 175),     // Yellow
            background: Color::Rgb(30, 30, 46),      // Base
        }
    }

    /// Gruvbox Dark - warm retro theme
    pub fn gruvbox() -> Self {
        Self {
            name: "Gruvbox",

            border: Color::Rgb(254, 128, 25),            // Orange
            border_dim: Color::Rgb(80, 73, 69),          // Bg2
            border_highlight: Color::Rgb(142, 192, 124), // Aqua

            text: Color::Rgb(235, 219, 178),      // Fg
            text_dim: Color::Rgb(146, 131, 116),  // Gray
            text_title: Color::Rgb(254, 128, 25), // Orange

            success: Color::Rgb(184, 187, 38), // Green
            warning: Color::Rgb(250, 189, 47), // Yellow
            error: Color::Rgb(251, 73, 52),    // Red
            info: Color::Rgb(131, 165, 152),   // Blue

            basin_nio: Color::Rgb(184, 187, 38),    // Green
            basin_sio: Color::Rgb(131, 165, 152),   // Blue
            basin_other: Color::Rgb(211, 134, 155), // Purple

            selection_bg: Color::Rgb(60, 56, 54),    // Bg1
            selection_fg: Color::Rgb(235, 219, 178), // Fg
            accent: Color::Rgb(142, 192, 124),       // Aqua
            key_hint: Color::Rgb(250, 189, 47),      // Yellow
            background: Color::Rgb(40, 40, 40),      // Bg0
        }
    }

    /// Nord - cool, muted arctic theme
    pub fn nord() -> Self {
        Self {
            name: "Nord",

            border: Color::Rgb(136, 192, 208),   // Frost cyan
            border_dim: Color::Rgb(76, 86, 106), // Polar Night 3
            border_highlight: Color::Rgb(143, 188, 187), // Frost teal

            text: Color::Rgb(236, 239, 244),       // Snow Storm 0
            text_dim: Color::Rgb(76, 86, 106),     // Polar Night 3
            text_title: Color::Rgb(136, 192, 208), // Frost cyan

            success: Color::Rgb(163, 190, 140), // Aurora green
            warning: Color::Rgb(235, 203, 139), // Aurora yellow
            error: Color::Rgb(191, 97, 106),    // Aurora red
            info: Color::Rgb(129, 161, 193),    // Frost blue

            basin_nio: Color::Rgb(163, 190, 140),   // Aurora green
            basin_sio: Color::Rgb(129, 161, 193),   // Frost blue
            basin_other: Color::Rgb(180, 142, 173), // Aurora purple

            selection_bg: Color::Rgb(59, 66, 82), // Polar Night 2
            selection_fg: Color::Rgb(236, 239, 244), // Snow Storm 0
            accent: Color::Rgb(143, 188, 187),    // Frost teal
            key_hint: Color::Rgb(235, 203, 139),  // Aurora yellow
            background: Color::Rgb(46, 52, 64),   // Polar Night 0
        }
    }

    /// Get a theme by name
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default_theme()),
            "catppuccin" | "catppuccin-mocha" | "catppuccin_mocha" => {
                Some(Self::catppuccin_mocha())
            }
            "gruvbox" => Some(Self::gruvbox()),
            "nord" => Some(Self::nord()),
            _ => None,
        }
    }

    /// List all available theme names
    pub fn available_themes() -> &'static [&'static str] {
        &["default", "catppuccin", "gruvbox", "nord"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_theme_resolves() {
        for name in Theme::available_themes() {
            assert!(Theme::by_name(name).is_some(), "{}", name);
        }
    }

    #[test]
    fn test_by_name_is_case_insensitive() {
        assert!(Theme::by_name("NORD").is_some());
        assert!(Theme::by_name("Catppuccin-Mocha").is_some());
    }

    #[test]
    fn test_unknown_theme_is_none() {
        assert!(Theme::by_name("solarized").is_none());
    }

    #[test]
    fn test_default_theme() {
        assert_eq!(Theme::default().name, "Default");
    }
}
