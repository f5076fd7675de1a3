//! Styling shared by the element generators.
//!
//! A theme is plain data and can be loaded from JSON. Colors are written as
//! `[r, g, b, a]` byte arrays:
//!
//! ```json
//! { "text_color": [0, 0, 0, 255], "checker_content_centered": true }
//! ```
//! Missing keys fall back to [`ElementTheme::plain`]. The byte arrays are
//! written by the `rgba` adapters below, not by peniko's `serde` feature,
//! which stores float components.

use peniko::{Color, color::palette};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid theme: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementTheme {
    /// Color of centered text; `None` keeps the host default.
    #[serde(with = "rgba_option")]
    pub text_color: Option<Color>,
    #[serde(with = "rgba")]
    pub button_title_color: Color,
    #[serde(with = "rgba_option")]
    pub button_background: Option<Color>,
    #[serde(with = "rgba")]
    pub checker_tint: Color,
    #[serde(with = "rgba")]
    pub checker_title_color: Color,
    /// Gap between the checker icon and its title.
    pub checker_spacing: f32,
    /// Center the checker's icon and title inside the control instead of
    /// pinning them to the leading edge.
    pub checker_content_centered: bool,
}

impl Default for ElementTheme {
    fn default() -> Self {
        Self::plain()
    }
}

impl ElementTheme {
    pub const CHECKED_SYMBOL: &'static str = "checkmark.circle.fill";
    pub const UNCHECKED_SYMBOL: &'static str = "checkmark.circle";

    /// Platform default colors.
    pub fn plain() -> Self {
        Self {
            text_color: None,
            button_title_color: palette::css::BLACK,
            button_background: None,
            checker_tint: palette::css::LIGHT_GRAY,
            checker_title_color: Color::from_rgba8(60, 60, 67, 77),
            checker_spacing: 5.0,
            checker_content_centered: false,
        }
    }

    /// Blue text, blue buttons, centered checkers.
    pub fn accent() -> Self {
        let blue = Color::from_rgb8(0, 122, 255);
        Self {
            text_color: Some(blue),
            button_background: Some(blue),
            checker_content_centered: true,
            ..Self::plain()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn checker_symbol(checked: bool) -> &'static str {
        if checked {
            Self::CHECKED_SYMBOL
        } else {
            Self::UNCHECKED_SYMBOL
        }
    }
}

mod rgba {
    use peniko::Color;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(crate::style::rgba8(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let [r, g, b, a] = <[u8; 4]>::deserialize(deserializer)?;
        Ok(Color::from_rgba8(r, g, b, a))
    }
}

pub(crate) mod rgba_option {
    use peniko::Color;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        color: &Option<Color>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match color {
            Some(color) => serializer.serialize_some(&crate::style::rgba8(*color)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Color>, D::Error> {
        Ok(Option::<[u8; 4]>::deserialize(deserializer)?
            .map(|[r, g, b, a]| Color::from_rgba8(r, g, b, a)))
    }
}
