//! Visual properties of a view.
//!
//! Layout constraints live in a plain [`taffy::Style`] on every view; this
//! module only holds what taffy does not know about: colors, text alignment
//! and font.

use peniko::Color;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Natural,
    Left,
    Center,
    Right,
}

/// Text styles mirroring the platform's dynamic type categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Font {
    #[default]
    Body,
    Footnote,
}

impl Font {
    /// Point size used by the headless text metrics.
    pub fn size(self) -> f32 {
        match self {
            Font::Body => 17.0,
            Font::Footnote => 13.0,
        }
    }

    pub fn line_height(self) -> f32 {
        (self.size() * 1.2).ceil()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Appearance {
    pub background: Option<Color>,
    /// Text or title color.
    pub color: Option<Color>,
    /// Tint applied to template images.
    pub tint: Option<Color>,
    pub text_align: TextAlign,
    pub font: Font,
}

impl Appearance {
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn tint(mut self, color: Color) -> Self {
        self.tint = Some(color);
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }
}

/// Returns the color as `[r, g, b, a]` bytes, which is handy for comparisons.
pub fn rgba8(color: Color) -> [u8; 4] {
    let c = color.to_rgba8();
    [c.r, c.g, c.b, c.a]
}
