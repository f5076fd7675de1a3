#![deny(missing_docs)]
//! # `ViewId`s
//!
//! [`ViewId`]s are unique identifiers for views.
//! They're used to identify views in the view tree.

use std::{cell::RefCell, rc::Rc};

use peniko::kurbo::Rect;
use slotmap::new_key_type;

use super::{VIEW_STORAGE, ViewState};
use crate::{
    event::{Event, EventCallback, EventListener, EventPropagation},
    style::Appearance,
    widget::Widget,
};

new_key_type! {
    /// A small unique identifier for a view in the host tree.
    ///
    /// This id is how you can access and modify a view, including accessing children views and updating state.
    pub struct ViewId;
}

impl ViewId {
    /// Create a new view holding `widget`, with a default style and appearance.
    pub fn new(widget: Widget) -> ViewId {
        VIEW_STORAGE.with_borrow_mut(|s| {
            let id = s.view_ids.insert(());
            s.states
                .insert(id, Rc::new(RefCell::new(ViewState::new(widget))));
            id
        })
    }

    /// Check if this ViewId is still valid (exists in the view storage).
    ///
    /// A ViewId becomes invalid when it has been removed from the view tree.
    pub fn is_valid(&self) -> bool {
        VIEW_STORAGE.with_borrow(|s| s.view_ids.contains_key(*self))
    }

    /// Remove this view and all of its children from the view storage.
    pub fn remove(&self) {
        for child in self.children() {
            child.remove();
        }
        VIEW_STORAGE.with_borrow_mut(|s| {
            // Remove self from parent's children list
            if let Some(Some(parent)) = s.parent.get(*self)
                && let Some(children) = s.children.get_mut(*parent)
            {
                children.retain(|c| c != self);
            }
            // SecondaryMaps don't auto-clean when the primary key is removed.
            s.children.remove(*self);
            s.parent.remove(*self);
            s.states.remove(*self);
            s.view_ids.remove(*self);
        });
    }

    /// Access the shared state of this view.
    ///
    /// Removed views share a single stale state so that callers never panic.
    pub fn state(&self) -> Rc<RefCell<ViewState>> {
        VIEW_STORAGE.with_borrow(|s| {
            s.states
                .get(*self)
                .cloned()
                .unwrap_or_else(|| s.stale_view_state.clone())
        })
    }

    /// Append `child` to this view's list of children.
    ///
    /// A child that already had a parent is detached from it first.
    pub fn add_child(&self, child: ViewId) {
        VIEW_STORAGE.with_borrow_mut(|s| {
            if !s.view_ids.contains_key(*self) || !s.view_ids.contains_key(child) {
                return;
            }
            if let Some(Some(old_parent)) = s.parent.get(child).copied()
                && let Some(children) = s.children.get_mut(old_parent)
            {
                children.retain(|c| *c != child);
            }
            if let Some(children) = s.children.entry(*self) {
                children.or_default().push(child);
            }
            s.parent.insert(child, Some(*self));
        });
    }

    /// Get the list of `ViewId`s of this view's children, in insertion order.
    pub fn children(&self) -> Vec<ViewId> {
        VIEW_STORAGE.with_borrow(|s| s.children.get(*self).cloned().unwrap_or_default())
    }

    /// Get access to the children of this view without cloning them.
    pub fn with_children<R>(&self, mut children: impl FnMut(&[ViewId]) -> R) -> R {
        VIEW_STORAGE.with_borrow(|s| children(s.children.get(*self).map_or(&[], |v| v)))
    }

    /// Get the `ViewId` that has been set as this `ViewId`'s parent
    pub fn parent(&self) -> Option<ViewId> {
        VIEW_STORAGE.with_borrow(|s| s.parent.get(*self).copied().flatten())
    }

    /// Get the topmost ancestor of this view, or the view itself when it is detached.
    pub fn root(&self) -> ViewId {
        VIEW_STORAGE.with_borrow(|s| s.root_view_id(*self))
    }

    /// All descendants of this view in depth-first, insertion order.
    pub fn descendants(&self) -> Vec<ViewId> {
        let mut out = Vec::new();
        let mut pending: Vec<ViewId> = self.children().into_iter().rev().collect();
        while let Some(id) = pending.pop() {
            out.push(id);
            pending.extend(id.children().into_iter().rev());
        }
        out
    }

    /// A copy of the widget this view renders.
    pub fn widget(&self) -> Widget {
        self.state().borrow().widget.clone()
    }

    /// Mutate the widget of this view in place.
    pub fn update_widget(&self, f: impl FnOnce(&mut Widget)) {
        f(&mut self.state().borrow_mut().widget);
    }

    /// The layout style of this view.
    pub fn style(&self) -> taffy::style::Style {
        self.state().borrow().style.clone()
    }

    /// Mutate the layout style of this view.
    pub fn update_style(&self, f: impl FnOnce(&mut taffy::style::Style)) {
        f(&mut self.state().borrow_mut().style);
    }

    /// The visual appearance of this view.
    pub fn appearance(&self) -> Appearance {
        self.state().borrow().appearance.clone()
    }

    /// Mutate the visual appearance of this view.
    pub fn update_appearance(&self, f: impl FnOnce(&mut Appearance)) {
        f(&mut self.state().borrow_mut().appearance);
    }

    /// Add a callback that is run when `listener` fires on this view.
    pub fn add_event_listener(&self, listener: EventListener, action: Rc<EventCallback>) {
        self.state()
            .borrow_mut()
            .add_event_listener(listener, action);
    }

    /// Run the listeners registered for `event` on this view.
    ///
    /// Returns `None` if this view has no listener for the event.
    pub fn apply_event(&self, event: &Event) -> Option<EventPropagation> {
        let listener = event.listener();
        // Handlers may touch this view's state, so they run without the borrow held.
        let handlers = self.state().borrow().event_listeners.get(&listener).cloned()?;
        let mut handled = false;
        for handler in handlers {
            handled |= handler(event).is_processed();
        }
        Some(if handled {
            EventPropagation::Stop
        } else {
            EventPropagation::Continue
        })
    }

    /// Get the absolute rectangle computed by the last layout pass.
    pub fn layout_rect(&self) -> Rect {
        self.state().borrow().layout_rect
    }

    pub(crate) fn set_layout_rect(&self, rect: Rect) {
        self.state().borrow_mut().layout_rect = rect;
    }

    /// Set a name that is used instead of the widget kind in debug output.
    pub fn set_debug_name(&self, name: impl Into<String>) {
        self.state().borrow_mut().debug_name = Some(name.into());
    }

    /// A short human readable name for this view.
    pub fn debug_name(&self) -> String {
        let state = self.state();
        let state = state.borrow();
        state
            .debug_name
            .clone()
            .unwrap_or_else(|| state.widget.kind_name().to_string())
    }
}
