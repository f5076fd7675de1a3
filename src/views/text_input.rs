use floem_reactive::{RwSignal, SignalUpdate};

use crate::{
    ViewId,
    event::{Event, EventListener, EventPropagation},
    view::View,
    views::Decorators,
    widget::Widget,
};

/// An editable single line text field backed by a `String` signal.
pub struct TextInput {
    id: ViewId,
}

impl View for TextInput {
    fn id(&self) -> ViewId {
        self.id
    }
}

/// Creates a text field that writes every edit into `buffer`.
pub fn text_input(buffer: RwSignal<String>) -> TextInput {
    let id = ViewId::new(Widget::TextInput {
        placeholder: String::new(),
        buffer,
    });
    TextInput { id }.on_event(EventListener::TextInput, move |event| {
        if let Event::TextInput(text) = event {
            // A disposed buffer means nobody observes the field anymore.
            buffer.try_update(|current| *current = text.clone());
        }
        EventPropagation::Stop
    })
}

impl TextInput {
    pub fn placeholder(self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.id.update_widget(|widget| {
            if let Widget::TextInput { placeholder, .. } = widget {
                *placeholder = text;
            }
        });
        self
    }
}
