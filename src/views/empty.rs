use crate::{ViewId, view::View, views::ParentView, widget::Widget};

/// An empty container. On its own it is a spacer; with children it is a plain box.
pub struct Empty {
    pub(crate) id: ViewId,
}

impl View for Empty {
    fn id(&self) -> ViewId {
        self.id
    }
}

impl ParentView for Empty {}

pub fn empty() -> Empty {
    Empty {
        id: ViewId::new(Widget::Empty),
    }
}
