//! Scroll View

use taffy::{
    geometry::Point,
    style::{FlexDirection, Overflow},
};

use crate::{ViewId, view::View, views::ParentView, widget::Widget};

/// A vertically scrolling container.
///
/// The content spans the scroll view's width and keeps its own height; the
/// scroll view itself sizes to the content unless a height is set on it.
pub struct Scroll {
    id: ViewId,
}

impl View for Scroll {
    fn id(&self) -> ViewId {
        self.id
    }
}

impl ParentView for Scroll {}

pub fn scroll(child: impl View) -> Scroll {
    let id = ViewId::new(Widget::Scroll);
    id.update_style(|s| {
        s.overflow = Point {
            x: Overflow::Visible,
            y: Overflow::Scroll,
        };
        s.scrollbar_width = 0.0;
        s.flex_direction = FlexDirection::Column;
    });
    id.add_child(child.id());
    Scroll { id }
}

impl Scroll {
    /// The single content view of this scroll view.
    pub fn content(&self) -> Option<ViewId> {
        self.id.children().first().copied()
    }
}
