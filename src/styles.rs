//! Colour themes and style helpers.
//!
//! The palette follows the FitNourish brand: green for primary actions and
//! success, amber for warnings, soft white cards on dark backgrounds.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

/// Brand green (#16A34A).
pub const BRAND_GREEN: Color = Color::Rgb(22, 163, 74);

static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Replace the global theme. Call at startup and after the config changes.
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::new(theme_type);
}

pub fn theme() -> Theme {
    THEME
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// No colours at all, only modifiers (`NO_COLOR`)
    #[serde(alias = "no-color", alias = "no_color")]
    NoColor,
}

impl FromStr for ThemeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(ThemeType::Dark),
            "light" => Ok(ThemeType::Light),
            "nocolor" | "no-color" | "no_color" => Ok(ThemeType::NoColor),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

impl fmt::Display for ThemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThemeType::Dark => "dark",
            ThemeType::Light => "light",
            ThemeType::NoColor => "nocolor",
        })
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,
    /// Buttons, titles, focused borders
    pub primary: Color,
    /// Macro pills and stat highlights
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub highlight_bg: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    pub const fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            primary: BRAND_GREEN,
            accent: Color::LightGreen,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::LightRed,
            text: Color::White,
            text_muted: Color::DarkGray,
            border: Color::DarkGray,
            highlight_bg: Color::Rgb(20, 83, 45),
        }
    }

    pub const fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            primary: Color::Rgb(21, 128, 61),
            accent: Color::Rgb(22, 101, 52),
            success: Color::Green,
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::DarkGray,
            border: Color::Gray,
            highlight_bg: Color::Rgb(220, 252, 231),
        }
    }

    /// Palette is unused; every helper falls back to modifiers.
    pub const fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            primary: Color::Reset,
            accent: Color::Reset,
            success: Color::Reset,
            warning: Color::Reset,
            error: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            border: Color::Reset,
            highlight_bg: Color::Reset,
        }
    }

    fn is_plain(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    /// `fg` in colour themes, `fallback` modifiers in the plain one.
    fn fg_or(&self, fg: Color, fallback: Modifier) -> Style {
        if self.is_plain() {
            Style::default().add_modifier(fallback)
        } else {
            Style::default().fg(fg)
        }
    }

    pub fn title_style(&self) -> Style {
        self.fg_or(self.primary, Modifier::empty())
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        self.fg_or(self.text, Modifier::empty())
    }

    pub fn muted_style(&self) -> Style {
        self.fg_or(self.text_muted, Modifier::DIM)
    }

    pub fn accent_style(&self) -> Style {
        self.fg_or(self.accent, Modifier::BOLD)
    }

    pub fn success_style(&self) -> Style {
        self.fg_or(self.success, Modifier::BOLD)
    }

    pub fn warning_style(&self) -> Style {
        self.fg_or(self.warning, Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        self.fg_or(self.error, Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        self.fg_or(self.border, Modifier::empty())
    }

    pub fn border_focused_style(&self) -> Style {
        self.fg_or(self.primary, Modifier::BOLD)
    }

    /// Selected menu card or button.
    pub fn highlight_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(self.text)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Filled green button.
    pub fn button_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(Color::White)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn disabled_style(&self) -> Style {
        self.fg_or(self.text_muted, Modifier::DIM)
    }
}
