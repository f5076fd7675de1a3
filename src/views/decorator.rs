//! # Decorator trait
//! The decorator trait is the primary interface for extending the appearance and functionality of ['View']s.

use std::rc::Rc;

use crate::{
    event::{Event, EventListener, EventPropagation},
    style::Appearance,
    view::View,
};

pub trait Decorators: View + Sized {
    /// Alter the layout style of the view.
    ///
    /// ```rust,ignore
    /// empty().style(|s| s.size.height = length(12.0));
    /// ```
    fn style(self, style: impl FnOnce(&mut taffy::style::Style)) -> Self {
        self.id().update_style(style);
        self
    }

    /// Alter the visual appearance of the view.
    fn appearance(self, appearance: impl FnOnce(Appearance) -> Appearance) -> Self {
        self.id()
            .update_appearance(|current| *current = appearance(std::mem::take(current)));
        self
    }

    /// Add an event handler for the given [`EventListener`].
    fn on_event(
        self,
        listener: EventListener,
        action: impl Fn(&Event) -> EventPropagation + 'static,
    ) -> Self {
        self.id().add_event_listener(listener, Rc::new(action));
        self
    }

    /// Add a handler for taps on this view or any of its descendants.
    ///
    /// The tap stops propagating once this handler ran.
    fn on_tap(self, action: impl Fn() + 'static) -> Self {
        self.on_event(EventListener::Tap, move |_| {
            action();
            EventPropagation::Stop
        })
    }

    fn debug_name(self, name: impl Into<String>) -> Self {
        self.id().set_debug_name(name);
        self
    }
}

impl<V: View> Decorators for V {}

/// Views that can hold children.
pub trait ParentView: View + Sized {
    fn child(self, child: impl View) -> Self {
        self.id().add_child(child.id());
        self
    }

    fn children<V: View>(self, children: impl IntoIterator<Item = V>) -> Self {
        let id = self.id();
        for child in children {
            id.add_child(child.id());
        }
        self
    }
}
