//! Dark and light color themes.
//!
//! `ThemeMode::Auto` asks the OS via `dark-light`; detection failures fall
//! back to the dark theme.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic colors used by every widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders, titles and emphasis
    pub primary: Color,
    /// Focus and the highlighted row
    pub accent: Color,
    /// Connected state and enabled flags
    pub success: Color,
    /// Failures and disabled flags
    pub error: Color,
    /// Loading state and retry hints
    pub warning: Color,

    /// Body text
    pub text: Color,
    /// Labels
    pub text_secondary: Color,
    /// Hints and empty states
    pub text_muted: Color,

    /// Screen background
    pub background: Color,
    /// Selected row background
    pub highlight_bg: Color,

    /// Free price label
    pub price_free: Color,
    /// Paid price label
    pub price_paid: Color,
    /// GIF badge
    pub badge_gif: Color,
    /// AR badge
    pub badge_ar: Color,
}

impl Theme {
    /// Resolves a configured mode to a concrete theme.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Follows the OS appearance setting.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Theme for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,

            price_free: Color::Green,
            price_paid: Color::LightYellow,
            badge_gif: Color::Magenta,
            badge_ar: Color::LightBlue,
        }
    }

    /// Theme for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),

            price_free: Color::Rgb(0, 128, 0),
            price_paid: Color::Rgb(150, 80, 0),
            badge_gif: Color::Rgb(140, 0, 140),
            badge_ar: Color::Rgb(0, 90, 180),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mode_explicit() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }

    #[test]
    fn test_contrast() {
        let dark = Theme::dark();
        assert_eq!(dark.text, Color::White);
        assert_eq!(dark.background, Color::Black);

        let light = Theme::light();
        assert_eq!(light.text, Color::Black);
        assert_eq!(light.background, Color::White);
        assert_ne!(light.accent, Color::Yellow);
    }

    #[test]
    fn test_badges_distinguishable() {
        for theme in [Theme::dark(), Theme::light()] {
            assert_ne!(theme.badge_gif, theme.badge_ar);
            assert_ne!(theme.price_free, theme.price_paid);
        }
    }

    #[test]
    fn test_detect_does_not_panic() {
        let theme = Theme::detect();
        assert!(theme == Theme::dark() || theme == Theme::light());
    }
}
