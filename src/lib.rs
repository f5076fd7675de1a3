//! # element-stack
//! Declarative arrangement of form-like elements in a stack view.
//!
//! Describe *what* a screen contains as a list of [`Element`]s and let an
//! [`ElementGenerator`] decide *how* each one is built and styled. An
//! [`ElementStack`] owns the generator and appends one view per element, in
//! order.
//!
//! ## Example: Login form
//! ```rust
//! use element_stack::prelude::*;
//!
//! let form = ElementStack::new(ConcreteElementGenerator::new());
//! form.add_arranged_elements(&[
//!     Element::segmented(["Sign in", "Register"], 0),
//!     Element::spacer(15.0),
//!     Element::input("User Name: ", Some("Email/Phone/ID"))
//!         .with_text_changed(|text| println!("user name: {text}")),
//!     Element::spacer(10.0),
//!     Element::checker("Remember me", false)
//!         .with_checker_tapped(|checked| println!("checked: {checked}")),
//!     Element::button("Sign in"),
//! ]);
//! assert_eq!(form.arranged_views().len(), 6);
//! ```
//!
//! ## Generators
//! Generators differ in the elements they accept and the [`ElementTheme`]
//! they apply. [`ConcreteElementGenerator`] handles every [`Element`],
//! including scrollable groups that hold a nested stack.
//! [`AccentElementGenerator`] is restricted to [`FlatElement`]s, so asking it
//! for a scrollable group is a type error rather than a runtime failure.
//!
//! ## Views
//! Elements are built from small views in a retained tree. Every view is a
//! [`ViewId`] into thread-local storage holding its [`Widget`](widget::Widget),
//! a [`taffy`] layout style and an [`Appearance`](style::Appearance). A
//! `ViewId` never owns its view, so generators keep them as back references
//! without extending any lifetime.
//!
//! ## State management
//! Control state lives in [`floem_reactive`] signals. The subscriptions that
//! forward control changes to element callbacks are effects inside the
//! generator's [`DisposeBag`]; dropping the generator disposes them.
//!
//! ## Testing
//! [`headless::HeadlessHarness`] lays a tree out with deterministic text
//! metrics and dispatches synthetic taps, text input and segment selection.

pub mod element;
pub mod element_stack;
pub mod event;
pub mod generator;
pub mod headless;
pub mod layout;
pub mod style;
pub mod theme;
pub mod view;
pub mod views;
pub mod widget;

pub use element::{Element, ElementDescriptor, ElementKind, FlatElement, UnsupportedElement};
pub use element_stack::{ElementStack, StackConfig};
pub use floem_reactive as reactive;
pub use generator::{
    AccentElementGenerator, ConcreteElementGenerator, DisposeBag, ElementGenerator,
};
pub use layout::{LayoutError, compute_layout};
pub use peniko;
pub use peniko::kurbo;
pub use taffy;
pub use theme::{ElementTheme, ThemeError};
pub use view::{View, ViewId};

pub mod prelude {
    pub use crate::element::{Element, ElementDescriptor, ElementKind, FlatElement};
    pub use crate::element_stack::{ElementStack, StackConfig};
    pub use crate::generator::{AccentElementGenerator, ConcreteElementGenerator, ElementGenerator};
    pub use crate::style::{Appearance, Font, TextAlign, rgba8};
    pub use crate::theme::ElementTheme;
    pub use crate::views::*;
    pub use crate::widget::Widget;
    pub use crate::{View, ViewId};
    pub use floem_reactive::{RwSignal, SignalGet, SignalUpdate};
    pub use peniko::Color;
    pub use peniko::color::palette;
}
