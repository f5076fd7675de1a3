use crate::{ViewId, view::View, views::Decorators, widget::Widget};

pub struct Button {
    id: ViewId,
}

impl View for Button {
    fn id(&self) -> ViewId {
        self.id
    }
}

pub fn button(title: impl Into<String>) -> Button {
    Button::new(title)
}

impl Button {
    pub fn new(title: impl Into<String>) -> Self {
        let id = ViewId::new(Widget::Button {
            title: title.into(),
        });
        Button { id }
    }

    pub fn action(self, on_press: impl Fn() + 'static) -> Self {
        self.on_tap(on_press)
    }
}
