use std::cell::{Cell, RefCell};

use taffy::style_helpers::percent;

use super::{DisposeBag, ElementGenerator, builders};
use crate::{
    ViewId,
    element::Element,
    element_stack::{ElementStack, StackConfig},
    theme::ElementTheme,
    view::View,
    views::{Alignment, Distribution, scroll},
};

/// Generator for the full [`Element`] set, including nested scrollable groups.
///
/// Each scrollable group gets its own [`ElementStack`] with a fresh generator
/// sharing this one's theme. Those nested stacks are owned here, so their
/// subscriptions end when this generator is dropped.
pub struct ConcreteElementGenerator {
    bag: DisposeBag,
    theme: ElementTheme,
    container: Cell<Option<ViewId>>,
    nested: RefCell<Vec<ElementStack<ConcreteElementGenerator>>>,
}

impl Default for ConcreteElementGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ConcreteElementGenerator {
    pub fn new() -> Self {
        Self::with_dispose_bag(DisposeBag::new())
    }

    pub fn with_dispose_bag(bag: DisposeBag) -> Self {
        Self {
            bag,
            theme: ElementTheme::plain(),
            container: Cell::new(None),
            nested: RefCell::new(Vec::new()),
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

    /// Stack views created for scrollable groups, in creation order.
    pub fn nested_stacks(&self) -> Vec<ViewId> {
        self.nested.borrow().iter().map(ElementStack::id).collect()
    }

    fn scrollable(&self, elements: &[Element]) -> ViewId {
        let generator = ConcreteElementGenerator::new().with_theme(self.theme.clone());
        let nested = ElementStack::with_config(
            generator,
            StackConfig {
                distribution: Distribution::EqualSpacing,
                alignment: Alignment::Fill,
                ..StackConfig::default()
            },
        );
        nested.id().update_style(|s| {
            s.min_size.height = percent(1.0);
            s.flex_shrink = 0.0;
        });
        nested.add_arranged_elements(elements);
        let view = scroll(&nested).id();
        tracing::debug!(stack = ?nested.id(), count = elements.len(), "nested stack created");
        self.nested.borrow_mut().push(nested);
        view
    }
}

impl ElementGenerator for ConcreteElementGenerator {
    type Element = Element;

    fn element_view(&self, element: &Element) -> ViewId {
        match element {
            Element::CenteredText { title } => builders::centered_text(title, &self.theme),
            Element::CommonInput {
                label,
                placeholder,
                on_text_changed,
            } => builders::common_input(
                &self.bag,
                label,
                placeholder.as_deref(),
                on_text_changed.clone(),
            ),
            Element::Button { title, on_tapped } => {
                builders::button_view(&self.bag, title, on_tapped.clone(), &self.theme)
            }
            Element::Segmented {
                items,
                default_index,
                on_tapped,
            } => builders::segmented_control(&self.bag, items, *default_index, on_tapped.clone()),
            Element::Checker {
                title,
                checked,
                on_tapped,
            } => builders::checker(&self.bag, title, *checked, on_tapped.clone(), &self.theme),
            Element::Spacer { .. } => builders::spacer(),
            Element::ScrollableGroup { elements, .. } => self.scrollable(elements),
        }
    }

    fn configure_view(&self, view: ViewId, element: &Element) {
        match element {
            Element::Spacer { height } => builders::fix_height(view, *height),
            Element::ScrollableGroup { height, .. } => {
                if *height > 0.0 {
                    builders::fix_height(view, *height);
                }
            }
            Element::CenteredText { .. }
            | Element::CommonInput { .. }
            | Element::Button { .. }
            | Element::Segmented { .. }
            | Element::Checker { .. } => {}
        }
    }

    fn attach_container(&self, stack: ViewId) {
        self.container.set(Some(stack));
    }
}
