use std::fmt;

use floem_reactive::{RwSignal, SignalGet};
use taffy::geometry::Size;

use crate::style::Appearance;

/// What a view shows and the state its control keeps.
///
/// Control state that user input changes lives in signals so that the
/// element generators can subscribe to it.
#[derive(Clone)]
pub enum Widget {
    /// A plain container, also used for spacers.
    Empty,
    Stack,
    Scroll,
    Label {
        text: String,
    },
    TextInput {
        placeholder: String,
        buffer: RwSignal<String>,
    },
    Button {
        title: String,
    },
    Segmented {
        items: Vec<String>,
        selected: RwSignal<usize>,
    },
    /// A container that tracks touches and a selected flag.
    Control {
        selected: bool,
    },
    /// A named system symbol.
    Image {
        symbol: String,
    },
}

impl Widget {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Widget::Empty => "Empty",
            Widget::Stack => "Stack",
            Widget::Scroll => "Scroll",
            Widget::Label { .. } => "Label",
            Widget::TextInput { .. } => "TextInput",
            Widget::Button { .. } => "Button",
            Widget::Segmented { .. } => "Segmented",
            Widget::Control { .. } => "Control",
            Widget::Image { .. } => "Image",
        }
    }

    /// The visible text of labels and buttons, or the current contents of a text input.
    pub fn text(&self) -> Option<String> {
        match self {
            Widget::Label { text } => Some(text.clone()),
            Widget::Button { title } => Some(title.clone()),
            Widget::TextInput { buffer, .. } => buffer.try_get_untracked(),
            _ => None,
        }
    }

    /// Size of the content before any constraint is applied, using fixed
    /// per-font glyph metrics instead of real shaping.
    pub fn intrinsic_size(&self, appearance: &Appearance) -> Size<f32> {
        let font = appearance.font;
        let line = font.line_height();
        let text_width = |text: &str| text.chars().count() as f32 * font.size() * 0.5;
        match self {
            Widget::Label { text } => Size {
                width: text_width(text),
                height: line,
            },
            Widget::TextInput {
                placeholder,
                buffer,
            } => {
                let text = buffer.try_get_untracked().unwrap_or_default();
                Size {
                    width: text_width(&text).max(text_width(placeholder)),
                    height: line + 8.0,
                }
            }
            Widget::Button { title } => Size {
                width: text_width(title) + 24.0,
                height: line + 12.0,
            },
            Widget::Segmented { items, .. } => Size {
                width: items.iter().map(|item| text_width(item) + 20.0).sum(),
                height: 32.0,
            },
            Widget::Image { .. } => Size {
                width: line,
                height: line,
            },
            Widget::Empty | Widget::Stack | Widget::Scroll | Widget::Control { .. } => Size::ZERO,
        }
    }
}

impl fmt::Debug for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Widget::Label { text } => f.debug_struct("Label").field("text", text).finish(),
            Widget::TextInput {
                placeholder,
                buffer,
            } => f
                .debug_struct("TextInput")
                .field("placeholder", placeholder)
                .field("text", &buffer.try_get_untracked())
                .finish(),
            Widget::Button { title } => f.debug_struct("Button").field("title", title).finish(),
            Widget::Segmented { items, selected } => f
                .debug_struct("Segmented")
                .field("items", items)
                .field("selected", &selected.try_get_untracked())
                .finish(),
            Widget::Control { selected } => {
                f.debug_struct("Control").field("selected", selected).finish()
            }
            Widget::Image { symbol } => f.debug_struct("Image").field("symbol", symbol).finish(),
            Widget::Empty | Widget::Stack | Widget::Scroll => f.write_str(self.kind_name()),
        }
    }
}
