//! Testing utilities for element stacks.
//!
//! This crate provides callback recorders and a prelude on top of the
//! headless harness, for testing generated views without a window.
//!
//! # Example
//!
//! ```rust,ignore
//! use element_stack_test::prelude::*;
//!
//! #[test]
//! fn test_checker_reports_toggle() {
//!     let recorder = CallbackRecorder::new();
//!
//!     let form = arrange(&[
//!         Element::checker("Remember me", false).with_checker_tapped(recorder.record()),
//!     ]);
//!
//!     let mut harness = HeadlessHarness::new(form.id());
//!     harness.tap(form.arranged_views()[0]);
//!
//!     assert_eq!(recorder.calls(), vec![true]);
//! }
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use element_stack::prelude::*;

// Re-export the harness from element-stack
pub use element_stack::headless::*;

pub use element_stack::ViewId;

/// Prelude module for convenient imports in tests.
pub mod prelude {
    pub use super::{CallbackRecorder, Unit, arrange, arrange_flat, find_kind, text_of};
    pub use element_stack::headless::*;
    pub use element_stack::prelude::*;
    pub use element_stack::taffy::style::Dimension;
    pub use element_stack::{DisposeBag, ViewId};
}

/// Records every value an element callback is invoked with.
///
/// Clones share the same record, so a clone can be moved into the callback
/// while this one is kept for assertions.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = CallbackRecorder::new();
/// let element = Element::segmented(["a", "b"], 0).with_segment_tapped(recorder.record());
/// // ... select segment 1 ...
/// assert_eq!(recorder.calls(), vec![1]);
/// ```
pub struct CallbackRecorder<T> {
    calls: Rc<RefCell<Vec<T>>>,
}

impl<T> Clone for CallbackRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

impl<T> Default for CallbackRecorder<T> {
    fn default() -> Self {
        Self {
            calls: Rc::default(),
        }
    }
}

impl<T: Clone + 'static> CallbackRecorder<T> {
    /// Create a new recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that records its argument.
    pub fn record(&self) -> impl Fn(T) + 'static {
        let calls = self.calls.clone();
        move |value| calls.borrow_mut().push(value)
    }

    /// Returns the recorded values in call order.
    pub fn calls(&self) -> Vec<T> {
        self.calls.borrow().clone()
    }

    /// Returns the number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Returns the most recent value, if any.
    pub fn last(&self) -> Option<T> {
        self.calls.borrow().last().cloned()
    }

    /// Clear all recorded calls.
    pub fn reset(&self) {
        self.calls.borrow_mut().clear();
    }
}

/// Stand-in value recorded for callbacks without an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit;

impl CallbackRecorder<Unit> {
    /// A no-argument callback, for buttons.
    pub fn record_tap(&self) -> impl Fn() + 'static {
        let calls = self.calls.clone();
        move || calls.borrow_mut().push(Unit)
    }
}

impl CallbackRecorder<String> {
    /// A callback for text inputs, which pass the text by reference.
    pub fn record_text(&self) -> impl Fn(&str) + 'static {
        let calls = self.calls.clone();
        move |text| calls.borrow_mut().push(text.to_string())
    }
}

/// Arrange `elements` in a fresh stack built by [`ConcreteElementGenerator`].
pub fn arrange(elements: &[Element]) -> ElementStack<ConcreteElementGenerator> {
    let stack = ElementStack::new(ConcreteElementGenerator::new());
    stack.add_arranged_elements(elements);
    stack
}

/// Arrange `elements` in a fresh stack built by [`AccentElementGenerator`].
pub fn arrange_flat(elements: &[FlatElement]) -> ElementStack<AccentElementGenerator> {
    let stack = ElementStack::new(AccentElementGenerator::new());
    stack.add_arranged_elements(elements);
    stack
}

/// All views under `root` (inclusive) whose widget has the given kind name.
pub fn find_kind(root: ViewId, kind: &str) -> Vec<ViewId> {
    HeadlessHarness::new(root).find_all(|id| id.widget().kind_name() == kind)
}

/// The text of a label, button or text field view.
pub fn text_of(id: ViewId) -> Option<String> {
    id.widget().text()
}
