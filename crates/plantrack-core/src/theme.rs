//! Styling seam between plan views and the host's rendering layer
//!
//! Views only ask for a named color or emphasis; the host decides what that
//! means (ANSI escapes, widget spans, or nothing at all).

/// Named colors a view may request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeColor {
    ToolTitle,
    Text,
    Muted,
    Dim,
    Accent,
    Success,
}

impl ThemeColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeColor::ToolTitle => "toolTitle",
            ThemeColor::Text => "text",
            ThemeColor::Muted => "muted",
            ThemeColor::Dim => "dim",
            ThemeColor::Accent => "accent",
            ThemeColor::Success => "success",
        }
    }
}

/// Applies named styles to text
pub trait Styler {
    /// Color text with a named theme color
    fn fg(&self, color: ThemeColor, text: &str) -> String;

    /// Emphasize text
    fn bold(&self, text: &str) -> String;
}

/// Styler that returns text unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn fg(&self, _color: ThemeColor, text: &str) -> String {
        text.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }
}
