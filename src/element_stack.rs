//! The element stack container.

use peniko::Color;
use serde::{Deserialize, Serialize};

use crate::{
    ViewId,
    generator::ElementGenerator,
    view::View,
    views::{Alignment, Axis, Distribution, Stack, v_stack},
};

/// Layout knobs of an [`ElementStack`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    pub axis: Axis,
    pub distribution: Distribution,
    pub alignment: Alignment,
    pub spacing: f32,
    #[serde(with = "crate::theme::rgba_option")]
    pub background: Option<Color>,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            distribution: Distribution::EqualSpacing,
            alignment: Alignment::Fill,
            spacing: 0.0,
            background: None,
        }
    }
}

impl StackConfig {
    fn apply(&self, stack: &Stack) {
        stack.set_axis(self.axis);
        stack.set_distribution(self.distribution);
        stack.set_alignment(self.alignment);
        stack.set_spacing(self.spacing);
        if let Some(background) = self.background {
            stack
                .id()
                .update_appearance(|a| a.background = Some(background));
        }
    }
}

/// A stack view whose children are described by elements and built by a
/// generator `G`.
///
/// ```rust,ignore
/// let form = ElementStack::new(ConcreteElementGenerator::new());
/// form.add_arranged_elements(&[
///     Element::centered_text("Sign in"),
///     Element::spacer(12.0),
///     Element::button("Continue").with_tapped(|| println!("continue")),
/// ]);
/// ```
pub struct ElementStack<G: ElementGenerator> {
    stack: Stack,
    generator: G,
}

impl<G: ElementGenerator + Default> Default for ElementStack<G> {
    fn default() -> Self {
        Self::new(G::default())
    }
}

impl<G: ElementGenerator> ElementStack<G> {
    /// A vertical stack with fill alignment and equal spacing.
    pub fn new(generator: G) -> Self {
        Self::with_config(generator, StackConfig::default())
    }

    pub fn with_config(generator: G, config: StackConfig) -> Self {
        let stack = v_stack();
        config.apply(&stack);
        generator.attach_container(stack.id());
        Self { stack, generator }
    }

    pub fn id(&self) -> ViewId {
        self.stack.id()
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Append one view per element, in order. Earlier views are left untouched.
    pub fn add_arranged_elements(&self, elements: &[G::Element]) {
        self.generator
            .add_arranged_elements(elements, self.stack.id());
    }

    /// The views appended so far, in order.
    pub fn arranged_views(&self) -> Vec<ViewId> {
        self.stack.id().children()
    }
}

impl<G: ElementGenerator> View for ElementStack<G> {
    fn id(&self) -> ViewId {
        self.stack.id()
    }
}
