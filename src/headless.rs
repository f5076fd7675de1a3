//! Headless harness for UI testing.
//!
//! This module drives a view tree without a window: it lays the tree out
//! with the headless text metrics and delivers synthetic user input to
//! single views, bubbling it up to their ancestors like a real touch would.
//!
//! # Example
//!
//! ```rust,ignore
//! use element_stack::{prelude::*, headless::HeadlessHarness};
//!
//! let form = ElementStack::new(ConcreteElementGenerator::new());
//! form.add_arranged_elements(&[Element::checker("Remember me", false)]);
//!
//! let mut harness = HeadlessHarness::new(form.id());
//! harness.rebuild()?;
//! let checker = harness.find_first(|id| matches!(id.widget(), Widget::Control { .. }));
//! harness.tap(checker.unwrap());
//! ```

use std::fmt::Write;

use taffy::geometry::Size;

use crate::{
    ViewId,
    event::Event,
    layout::{LayoutError, compute_layout},
};

/// Result of an event dispatch operation.
#[derive(Debug, Clone)]
pub struct EventResult {
    /// Whether the event was handled (propagation stopped).
    pub handled: bool,
    /// The view whose listener stopped propagation.
    pub handled_by: Option<ViewId>,
}

/// A headless harness over the tree rooted at a single view.
pub struct HeadlessHarness {
    root: ViewId,
    width: f32,
}

impl HeadlessHarness {
    /// Create a new headless harness with the given root view.
    ///
    /// The tree is laid out 375 points wide.
    pub fn new(root: ViewId) -> Self {
        Self::new_with_width(root, 375.0)
    }

    pub fn new_with_width(root: ViewId, width: f32) -> Self {
        Self { root, width }
    }

    /// Get the root view ID.
    pub fn root_id(&self) -> ViewId {
        self.root
    }

    /// Set the available width. Takes effect on the next [`rebuild`](Self::rebuild).
    pub fn set_width(&mut self, width: f32) -> &mut Self {
        self.width = width;
        self
    }

    /// Run the layout pass and store every view's rectangle.
    ///
    /// This must be called after any change to view styles or structure
    /// before layout rectangles are read.
    pub fn rebuild(&mut self) -> Result<Size<f32>, LayoutError> {
        compute_layout(self.root, self.width)
    }

    /// Deliver `event` to `target`, then to each ancestor until a listener
    /// stops propagation.
    pub fn dispatch_event(&mut self, target: ViewId, event: Event) -> EventResult {
        let mut current = Some(target);
        while let Some(id) = current {
            if id
                .apply_event(&event)
                .is_some_and(|propagation| propagation.is_processed())
            {
                tracing::trace!(?event, ?target, handled_by = ?id, "event handled");
                return EventResult {
                    handled: true,
                    handled_by: Some(id),
                };
            }
            current = id.parent();
        }
        tracing::trace!(?event, ?target, "event not handled");
        EventResult {
            handled: false,
            handled_by: None,
        }
    }

    /// Simulate a touch up inside `target`.
    pub fn tap(&mut self, target: ViewId) -> EventResult {
        self.dispatch_event(target, Event::Tap)
    }

    /// Replace the contents of the text field `target` with `text`.
    pub fn input_text(&mut self, target: ViewId, text: &str) -> EventResult {
        self.dispatch_event(target, Event::TextInput(text.to_string()))
    }

    /// Pick the segment at `index` of the segmented control `target`.
    pub fn select_segment(&mut self, target: ViewId, index: usize) -> EventResult {
        self.dispatch_event(target, Event::SelectSegment(index))
    }

    /// All views under the root, depth first, for which `predicate` holds.
    pub fn find_all(&self, predicate: impl Fn(ViewId) -> bool) -> Vec<ViewId> {
        std::iter::once(self.root)
            .chain(self.root.descendants())
            .filter(|id| predicate(*id))
            .collect()
    }

    pub fn find_first(&self, predicate: impl Fn(ViewId) -> bool) -> Option<ViewId> {
        self.find_all(predicate).into_iter().next()
    }

    /// Get the layout rectangle of a view from the last rebuild.
    pub fn get_layout_rect(&self, id: ViewId) -> peniko::kurbo::Rect {
        id.layout_rect()
    }

    /// An indented outline of the tree with each view's widget and frame.
    pub fn dump_tree(&self) -> String {
        let mut out = String::new();
        dump(self.root, 0, &mut out);
        out
    }
}

fn dump(id: ViewId, depth: usize, out: &mut String) {
    let rect = id.layout_rect();
    let _ = writeln!(
        out,
        "{:indent$}{} {:?} @ ({:.1}, {:.1}) {:.1}x{:.1}",
        "",
        id.debug_name(),
        id.widget(),
        rect.x0,
        rect.y0,
        rect.width(),
        rect.height(),
        indent = depth * 2,
    );
    for child in id.children() {
        dump(child, depth + 1, out);
    }
}
