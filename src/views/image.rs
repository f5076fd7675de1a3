use crate::{ViewId, view::View, widget::Widget};

/// An image showing a named system symbol.
pub struct Image {
    id: ViewId,
}

impl View for Image {
    fn id(&self) -> ViewId {
        self.id
    }
}

pub fn image(symbol: impl Into<String>) -> Image {
    Image {
        id: ViewId::new(Widget::Image {
            symbol: symbol.into(),
        }),
    }
}

/// Swap the symbol shown by the image view `id`.
pub fn set_image_symbol(id: ViewId, symbol: &str) {
    id.update_widget(|widget| {
        if let Widget::Image { symbol: current } = widget {
            *current = symbol.to_string();
        }
    });
}
