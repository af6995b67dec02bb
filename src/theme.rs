//! Day/night palette and the colours the HUD derives from the snapshot.

use iced::Color;
use iced::Theme as IcedTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl From<crate::config::ThemeMode> for Theme {
    fn from(mode: crate::config::ThemeMode) -> Self {
        match mode {
            crate::config::ThemeMode::Night => Theme::Dark,
            crate::config::ThemeMode::Day => Theme::Light,
        }
    }
}

impl From<Theme> for IcedTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => IcedTheme::Light,
            Theme::Dark => IcedTheme::Dark,
        }
    }
}

impl Theme {
    pub fn car_color(self, rainbow_hue: Option<f32>) -> Color {
        match rainbow_hue {
            Some(hue) => hue_to_color(hue),
            None => match self {
                Theme::Light => Color::from_rgb(0.85, 0.2, 0.2),
                Theme::Dark => Color::from_rgb(1.0, 0.35, 0.3),
            },
        }
    }

    /// Text colour for stops the visitor has not scrolled to yet.
    pub fn unrevealed_text(self) -> Color {
        match self {
            Theme::Light => Color::from_rgba(0.2, 0.2, 0.2, 0.35),
            Theme::Dark => Color::from_rgba(0.9, 0.9, 0.9, 0.3),
        }
    }
}

/// Fully saturated colour for a hue in degrees.
pub fn hue_to_color(hue: f32) -> Color {
    let hue = if hue.is_finite() {
        hue.rem_euclid(360.0)
    } else {
        0.0
    };
    let sector = hue / 60.0;
    let x = 1.0 - (sector % 2.0 - 1.0).abs();
    let (r, g, b) = match sector as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    Color::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        assert_eq!(hue_to_color(0.0), Color::from_rgb(1.0, 0.0, 0.0));
        assert_eq!(hue_to_color(120.0), Color::from_rgb(0.0, 1.0, 0.0));
        assert_eq!(hue_to_color(240.0), Color::from_rgb(0.0, 0.0, 1.0));
        assert_eq!(hue_to_color(360.0), hue_to_color(0.0));
    }

    #[test]
    fn rainbow_overrides_theme_colour() {
        assert_eq!(Theme::Dark.car_color(Some(240.0)), hue_to_color(240.0));
        assert_ne!(Theme::Dark.car_color(None), Theme::Light.car_color(None));
    }
}
