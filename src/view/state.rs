use std::rc::Rc;

use peniko::kurbo::Rect;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{
    event::{EventCallback, EventListener},
    style::Appearance,
    widget::Widget,
};

pub(crate) type EventListenerVec = SmallVec<[Rc<EventCallback>; 1]>;

/// View state stores everything the host keeps about a single view.
pub struct ViewState {
    pub(crate) widget: Widget,
    pub(crate) style: taffy::style::Style,
    pub(crate) appearance: Appearance,
    pub(crate) event_listeners: FxHashMap<EventListener, EventListenerVec>,
    /// Absolute rectangle from the last layout pass.
    pub(crate) layout_rect: Rect,
    pub(crate) debug_name: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Widget::Empty)
    }
}

impl ViewState {
    pub(crate) fn new(widget: Widget) -> Self {
        Self {
            widget,
            style: taffy::style::Style::DEFAULT,
            appearance: Appearance::default(),
            event_listeners: FxHashMap::default(),
            layout_rect: Rect::ZERO,
            debug_name: None,
        }
    }

    pub(crate) fn add_event_listener(&mut self, listener: EventListener, action: Rc<EventCallback>) {
        self.event_listeners
            .entry(listener)
            .or_default()
            .push(action);
    }
}
