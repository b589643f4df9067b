//! Centralized theme and color scheme for the TUI.
//!
//! Every view reads colors through [`colors()`], so switching the theme at
//! runtime restyles the whole dashboard on the next frame.

use crate::model::{CorrelationStrength, LagCategory, TabId};
use ratatui::prelude::*;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

/// Semantic colors for the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Correlation strength colors
    pub strong: Color,
    pub moderate: Color,
    pub weak: Color,

    // Lag category colors
    pub without_lag: Color,
    pub with_lag: Color,

    // UI element colors
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Badge foreground colors (for text on colored backgrounds)
    pub badge_fg_dark: Color,
    pub badge_fg_light: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark theme (default)
    pub const fn dark() -> Self {
        Self {
            strong: Color::Green,
            moderate: Color::Yellow,
            weak: Color::Gray,

            without_lag: Color::Rgb(59, 130, 246),
            with_lag: Color::Rgb(139, 92, 246),

            primary: Color::Cyan,
            secondary: Color::Blue,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,
        }
    }

    /// Light theme
    pub const fn light() -> Self {
        Self {
            strong: Color::Rgb(0, 128, 0),
            moderate: Color::Rgb(180, 140, 0),
            weak: Color::Rgb(100, 100, 100),

            without_lag: Color::Rgb(37, 99, 235),
            with_lag: Color::Rgb(109, 40, 217),

            primary: Color::Rgb(0, 100, 150),
            secondary: Color::Rgb(0, 0, 150),
            accent: Color::Rgb(180, 140, 0),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(180, 180, 180),
            background_alt: Color::Rgb(240, 240, 245),
            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(100, 100, 100),

            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 140, 0),
            error: Color::Rgb(200, 0, 0),

            // Reversed for light theme
            badge_fg_dark: Color::Rgb(30, 30, 30),
            badge_fg_light: Color::White,
        }
    }

    /// High contrast theme (accessibility)
    pub const fn high_contrast() -> Self {
        Self {
            strong: Color::LightGreen,
            moderate: Color::LightYellow,
            weak: Color::White,

            without_lag: Color::LightBlue,
            with_lag: Color::LightMagenta,

            primary: Color::LightCyan,
            secondary: Color::LightBlue,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            background_alt: Color::Rgb(20, 20, 20),
            text: Color::White,
            text_muted: Color::Gray,

            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,
        }
    }

    /// Color for a correlation strength bucket
    pub const fn correlation_color(&self, strength: CorrelationStrength) -> Color {
        match strength {
            CorrelationStrength::Strong => self.strong,
            CorrelationStrength::Moderate => self.moderate,
            CorrelationStrength::Weak => self.weak,
        }
    }

    /// Color for a lag category
    pub const fn category_color(&self, category: LagCategory) -> Color {
        match category {
            LagCategory::WithoutLag => self.without_lag,
            LagCategory::WithLag => self.with_lag,
        }
    }

    /// Color for a signed improvement percentage
    pub fn delta_color(&self, pct: f64) -> Color {
        if pct > 0.0 {
            self.success
        } else if pct < 0.0 {
            self.error
        } else {
            self.text_muted
        }
    }

    /// Parse a `#RRGGBB` record color, falling back to `primary`.
    pub fn record_color(&self, hex: &str) -> Color {
        Color::from_str(hex).unwrap_or(self.primary)
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            name: "dark",
        }
    }

    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    THEME.read().unwrap_or_else(PoisonError::into_inner).name
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }
}

// ============================================================================
// Badge Rendering Helpers
// ============================================================================

/// Render a correlation strength badge
pub fn strength_badge(strength: CorrelationStrength) -> Span<'static> {
    let scheme = colors();
    Span::styled(
        format!(" {} ", strength.label().to_uppercase()),
        Style::default()
            .fg(scheme.badge_fg_dark)
            .bg(scheme.correlation_color(strength))
            .bold(),
    )
}

/// Render a lag category badge
pub fn category_badge(category: LagCategory) -> Span<'static> {
    let scheme = colors();
    Span::styled(
        format!(" {} ", category.short_label().to_uppercase()),
        Style::default()
            .fg(scheme.badge_fg_light)
            .bg(scheme.category_color(category))
            .bold(),
    )
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Tab-specific footer hints
pub struct FooterHints;

impl FooterHints {
    /// Hints for a tab; `None` is the not-found fallback.
    pub fn for_tab(tab: Option<TabId>) -> Vec<(&'static str, &'static str)> {
        let mut hints = Self::global();

        match tab {
            Some(TabId::ModelsWithoutLag | TabId::ModelsWithLag | TabId::Comparison) => {
                hints.insert(0, ("i", "icons"));
            }
            Some(_) => {}
            None => {
                hints.insert(0, ("1-7", "pick a tab"));
            }
        }

        hints
    }

    /// Global hints (always shown)
    pub fn global() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Tab/←→", "switch"),
            ("1-7", "jump"),
            ("T", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}
