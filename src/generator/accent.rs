use std::cell::Cell;

use super::{DisposeBag, ElementGenerator, builders};
use crate::{ViewId, element::FlatElement, theme::ElementTheme};

/// Generator for [`FlatElement`]s, styled with [`ElementTheme::accent`] by
/// default.
pub struct AccentElementGenerator {
    bag: DisposeBag,
    theme: ElementTheme,
    container: Cell<Option<ViewId>>,
}

impl Default for AccentElementGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl AccentElementGenerator {
    pub fn new() -> Self {
        Self::with_dispose_bag(DisposeBag::new())
    }

    pub fn with_dispose_bag(bag: DisposeBag) -> Self {
        Self {
            bag,
            theme: ElementTheme::accent(),
            container: Cell::new(None),
        }
    }

    pub fn with_theme(mut self, theme: ElementTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn theme(&self) -> &ElementTheme {
        &self.theme
    }

    pub fn dispose_bag(&self) -> &DisposeBag {
        &self.bag
    }

    /// The stack this generator is attached to, while that view is alive.
    pub fn container_view(&self) -> Option<ViewId> {
        self.container.get().filter(ViewId::is_valid)
    }
}

impl ElementGenerator for AccentElementGenerator {
    type Element = FlatElement;

    fn element_view(&self, element: &FlatElement) -> ViewId {
        match element {
            FlatElement::CenteredText { title } => builders::centered_text(title, &self.theme),
            FlatElement::CommonInput {
                label,
                placeholder,
                on_text_changed,
            } => builders::common_input(
                &self.bag,
                label,
                placeholder.as_deref(),
                on_text_changed.clone(),
            ),
            FlatElement::Button { title, on_tapped } => {
                builders::button_view(&self.bag, title, on_tapped.clone(), &self.theme)
            }
            FlatElement::Segmented {
                items,
                default_index,
                on_tapped,
            } => builders::segmented_control(&self.bag, items, *default_index, on_tapped.clone()),
            FlatElement::Checker {
                title,
                checked,
                on_tapped,
            } => builders::checker(&self.bag, title, *checked, on_tapped.clone(), &self.theme),
            FlatElement::Spacer { .. } => builders::spacer(),
        }
    }

    fn configure_view(&self, view: ViewId, element: &FlatElement) {
        match element {
            FlatElement::Spacer { height } => builders::fix_height(view, *height),
            FlatElement::CenteredText { .. }
            | FlatElement::CommonInput { .. }
            | FlatElement::Button { .. }
            | FlatElement::Segmented { .. }
            | FlatElement::Checker { .. } => {}
        }
    }

    fn attach_container(&self, stack: ViewId) {
        self.container.set(Some(stack));
    }
}
