use crate::{ViewId, view::View, widget::Widget};

/// A single line of static text.
pub struct Label {
    id: ViewId,
}

impl View for Label {
    fn id(&self) -> ViewId {
        self.id
    }
}

pub fn label(text: impl Into<String>) -> Label {
    Label {
        id: ViewId::new(Widget::Label { text: text.into() }),
    }
}

impl Label {
    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.id.update_widget(|widget| {
            if let Widget::Label { text: current } = widget {
                *current = text;
            }
        });
    }
}
