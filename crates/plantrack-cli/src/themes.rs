//! Terminal themes and the ANSI styler used for plan views

use crossterm::style::{style, Color, Stylize};
use once_cell::sync::Lazy;
use std::collections::HashMap;

use plantrack_core::config::DEFAULT_THEME;
use plantrack_core::{Styler, ThemeColor};

/// Global theme registry
pub static THEME_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

/// Colors for each named style a plan view may request
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub display_name: String,
    pub tool_title: Color,
    pub text: Color,
    pub muted: Color,
    pub dim: Color,
    pub accent: Color,
    pub success: Color,
}

impl Theme {
    pub fn color(&self, color: ThemeColor) -> Color {
        match color {
            ThemeColor::ToolTitle => self.tool_title,
            ThemeColor::Text => self.text,
            ThemeColor::Muted => self.muted,
            ThemeColor::Dim => self.dim,
            ThemeColor::Accent => self.accent,
            ThemeColor::Success => self.success,
        }
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

fn plantrack() -> Theme {
    Theme {
        name: DEFAULT_THEME.to_string(),
        display_name: "Plantrack".to_string(),
        tool_title: rgb(255, 140, 66),
        text: rgb(230, 230, 230),
        muted: rgb(160, 160, 170),
        dim: rgb(110, 110, 120),
        accent: rgb(97, 175, 239),
        success: rgb(152, 195, 121),
    }
}

/// Uses the terminal's own palette
fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        display_name: "Terminal".to_string(),
        tool_title: Color::Yellow,
        text: Color::Reset,
        muted: Color::Grey,
        dim: Color::DarkGrey,
        accent: Color::Cyan,
        success: Color::Green,
    }
}

fn dracula() -> Theme {
    Theme {
        name: "dracula".to_string(),
        display_name: "Dracula".to_string(),
        tool_title: rgb(255, 121, 198),
        text: rgb(248, 248, 242),
        muted: rgb(189, 147, 249),
        dim: rgb(98, 114, 164),
        accent: rgb(139, 233, 253),
        success: rgb(80, 250, 123),
    }
}

fn nord() -> Theme {
    Theme {
        name: "nord".to_string(),
        display_name: "Nord".to_string(),
        tool_title: rgb(136, 192, 208),
        text: rgb(236, 239, 244),
        muted: rgb(216, 222, 233),
        dim: rgb(76, 86, 106),
        accent: rgb(129, 161, 193),
        success: rgb(163, 190, 140),
    }
}

fn gruvbox_dark() -> Theme {
    Theme {
        name: "gruvbox_dark".to_string(),
        display_name: "Gruvbox Dark".to_string(),
        tool_title: rgb(254, 128, 25),
        text: rgb(235, 219, 178),
        muted: rgb(189, 174, 147),
        dim: rgb(146, 131, 116),
        accent: rgb(131, 165, 152),
        success: rgb(184, 187, 38),
    }
}

/// Registry of all available themes
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    ordered_names: Vec<String>,
    default: Theme,
}

impl ThemeRegistry {
    /// Create a new registry with all built-in themes
    pub fn new() -> Self {
        let mut registry = Self {
            themes: HashMap::new(),
            ordered_names: Vec::new(),
            default: plantrack(),
        };

        registry.register(plantrack());
        registry.register(terminal());
        registry.register(dracula());
        registry.register(nord());
        registry.register(gruvbox_dark());

        registry
    }

    fn register(&mut self, theme: Theme) {
        self.ordered_names.push(theme.name.clone());
        self.themes.insert(theme.name.clone(), theme);
    }

    /// Get a theme by name, or the default theme
    pub fn get_or_default(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or(&self.default)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// List all themes in registration order
    pub fn list(&self) -> Vec<(&String, &Theme)> {
        self.ordered_names
            .iter()
            .filter_map(|name| self.themes.get(name).map(|t| (name, t)))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.themes.len()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Styler emitting ANSI escape sequences for a theme
pub struct AnsiStyler<'a> {
    theme: &'a Theme,
}

impl<'a> AnsiStyler<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Styler for AnsiStyler<'_> {
    fn fg(&self, color: ThemeColor, text: &str) -> String {
        style(text).with(self.theme.color(color)).to_string()
    }

    fn bold(&self, text: &str) -> String {
        style(text).bold().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.get_or_default("no-such-theme").name, DEFAULT_THEME);
        assert_eq!(registry.get_or_default("nord").name, "nord");
        assert!(registry.contains("dracula"));
    }

    #[test]
    fn test_list_keeps_registration_order() {
        let registry = ThemeRegistry::new();
        let names: Vec<&str> = registry.list().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names[0], DEFAULT_THEME);
        assert_eq!(names.len(), registry.count());
    }

    #[test]
    fn test_ansi_styler_wraps_text() {
        let theme = THEME_REGISTRY.get_or_default("nord");
        let styler = AnsiStyler::new(theme);
        let styled = styler.fg(ThemeColor::Success, "done");
        assert!(styled.contains("done"));
        assert!(styler.bold("x").contains('x'));
    }
}
