use crate::{ViewId, view::View, views::ParentView, widget::Widget};

/// A container that reacts to touches and carries a selected flag.
pub struct Control {
    id: ViewId,
}

impl View for Control {
    fn id(&self) -> ViewId {
        self.id
    }
}

impl ParentView for Control {}

pub fn control(selected: bool) -> Control {
    Control {
        id: ViewId::new(Widget::Control { selected }),
    }
}

/// Update the selected flag of the control view `id`.
pub fn set_control_selected(id: ViewId, selected: bool) {
    id.update_widget(|widget| {
        if let Widget::Control { selected: current } = widget {
            *current = selected;
        }
    });
}
