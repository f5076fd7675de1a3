use floem_reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::{
    ViewId,
    event::{Event, EventListener, EventPropagation},
    view::View,
    views::Decorators,
    widget::Widget,
};

/// A horizontal row of mutually exclusive segments.
pub struct Segmented {
    id: ViewId,
}

impl View for Segmented {
    fn id(&self) -> ViewId {
        self.id
    }
}

/// Creates a segmented control whose selection is kept in `selected`.
///
/// Picking the segment that is already selected does not write the signal,
/// and neither does picking an index past the last segment.
pub fn segmented<S: Into<String>>(
    items: impl IntoIterator<Item = S>,
    selected: RwSignal<usize>,
) -> Segmented {
    let items: Vec<String> = items.into_iter().map(Into::into).collect();
    let len = items.len();
    let id = ViewId::new(Widget::Segmented { items, selected });
    Segmented { id }.on_event(EventListener::SelectSegment, move |event| {
        if let Event::SelectSegment(index) = *event {
            if index >= len {
                tracing::warn!(index, len, "segment index out of range");
            } else if selected.try_get_untracked().is_some_and(|current| current != index) {
                selected.try_update(|current| *current = index);
            }
        }
        EventPropagation::Stop
    })
}
