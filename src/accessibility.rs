//! Window-wide display accessibility: font size, font family, high contrast.
//!
//! Settings are projected into a single stylesheet which the UI loads into one
//! global `CssProvider`; every change is a full overwrite, so applying the
//! same settings twice is harmless.

use crate::constants::{DEFAULT_FONT_SIZE_PX, MAX_FONT_SIZE_PX, MIN_FONT_SIZE_PX};

/// Font family options offered by the accessibility panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    #[default]
    Inter,
    OpenDyslexic,
    Lexend,
}

impl FontFamily {
    pub const ALL: [FontFamily; 3] = [
        FontFamily::Inter,
        FontFamily::OpenDyslexic,
        FontFamily::Lexend,
    ];

    /// Label shown in the font selector.
    pub fn label(self) -> &'static str {
        match self {
            FontFamily::Inter => "Estándar (Inter)",
            FontFamily::OpenDyslexic => "Dislexia (Open Dyslexic)",
            FontFamily::Lexend => "Legible (Lexend)",
        }
    }

    /// Family name as it appears in the generated stylesheet.
    pub fn css_name(self) -> &'static str {
        match self {
            FontFamily::Inter => "Inter",
            FontFamily::OpenDyslexic => "Open Dyslexic",
            FontFamily::Lexend => "Lexend",
        }
    }
}

/// Display settings applied to the whole window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibilitySettings {
    pub font_size_px: i32,
    pub font_family: FontFamily,
    pub high_contrast: bool,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            font_size_px: DEFAULT_FONT_SIZE_PX,
            font_family: FontFamily::default(),
            high_contrast: false,
        }
    }
}

impl AccessibilitySettings {
    /// Sets the font size, clamped to the supported range.
    pub fn set_font_size(&mut self, px: i32) {
        self.font_size_px = px.clamp(MIN_FONT_SIZE_PX, MAX_FONT_SIZE_PX);
    }

    /// Full stylesheet for the current settings. Font properties inherit from
    /// the window node down to every child widget.
    pub fn css(&self) -> String {
        let mut css = format!(
            "window {{ font-family: \"{}\"; font-size: {}px; }}\n",
            self.font_family.css_name(),
            self.font_size_px
        );
        if self.high_contrast {
            css.push_str(HIGH_CONTRAST_CSS);
        }
        css
    }
}

const HIGH_CONTRAST_CSS: &str = "\
window, headerbar, list, .card { background-color: #000000; color: #ffffff; }\n\
textview, textview text { background-color: #000000; color: #ffffff; caret-color: #ffffff; }\n\
button { background-image: none; background-color: #1a1a1a; color: #ffffff; border: 1px solid #ffffff; }\n\
button.suggested-action { background-color: #ffff00; color: #000000; }\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_size_clamps_to_supported_range() {
        let mut settings = AccessibilitySettings::default();
        settings.set_font_size(5);
        assert_eq!(settings.font_size_px, MIN_FONT_SIZE_PX);
        settings.set_font_size(99);
        assert_eq!(settings.font_size_px, MAX_FONT_SIZE_PX);
    }

    #[test]
    fn boundary_sizes_pass_through_exactly() {
        let mut settings = AccessibilitySettings::default();
        for px in MIN_FONT_SIZE_PX..=MAX_FONT_SIZE_PX {
            settings.set_font_size(px);
            assert_eq!(settings.font_size_px, px);
            assert!(settings.css().contains(&format!("font-size: {}px", px)));
        }
    }

    #[test]
    fn css_reflects_selected_family() {
        let settings = AccessibilitySettings {
            font_family: FontFamily::Lexend,
            ..Default::default()
        };
        assert!(settings.css().contains("font-family: \"Lexend\""));
    }

    #[test]
    fn high_contrast_rules_toggle() {
        let mut settings = AccessibilitySettings::default();
        assert!(!settings.css().contains("#000000"));
        settings.high_contrast = true;
        assert!(settings.css().contains("#000000"));
    }

    #[test]
    fn every_family_has_distinct_label() {
        let labels: Vec<_> = FontFamily::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels.len(), 3);
        assert!(labels.windows(2).all(|w| w[0] != w[1]));
    }
}
