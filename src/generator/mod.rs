//! # Element generators
//!
//! A generator is the strategy an [`ElementStack`](crate::ElementStack)
//! delegates to: it turns one element description into one view subtree and
//! configures that view once it sits in the stack.
//!
//! Which elements a generator accepts is fixed by its associated
//! [`ElementGenerator::Element`] type. [`ConcreteElementGenerator`] takes the
//! full [`Element`](crate::Element) set; [`AccentElementGenerator`] takes
//! [`FlatElement`](crate::FlatElement), so handing it a scrollable group does
//! not compile.

mod accent;
mod builders;
mod concrete;
mod dispose;

pub use accent::AccentElementGenerator;
pub use concrete::ConcreteElementGenerator;
pub use dispose::DisposeBag;

use crate::{ViewId, element::ElementDescriptor};

pub trait ElementGenerator {
    type Element: ElementDescriptor;

    /// Build the view for `element`. Called before the view is inserted.
    fn element_view(&self, element: &Self::Element) -> ViewId;

    /// Apply sizing that only makes sense once `view` is in the stack.
    fn configure_view(&self, view: ViewId, element: &Self::Element);

    /// Called once with the stack this generator builds views for.
    fn attach_container(&self, _stack: ViewId) {}

    /// Build, append and configure every element, in order.
    fn add_arranged_elements(&self, elements: &[Self::Element], stack: ViewId) {
        let _span =
            tracing::debug_span!("add_arranged_elements", ?stack, count = elements.len()).entered();
        for element in elements {
            let view = self.element_view(element);
            stack.add_child(view);
            self.configure_view(view, element);
            tracing::trace!(kind = %element.kind(), ?view, "element arranged");
        }
    }
}
