use serde::{Deserialize, Serialize};
use taffy::{
    geometry::Size,
    style::{AlignItems, FlexDirection, JustifyContent},
    style_helpers::length,
};

use crate::{ViewId, view::View, views::ParentView, widget::Widget};

/// The direction children are arranged in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

/// How children share the stack's length along its axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    #[default]
    Fill,
    EqualSpacing,
}

/// How children are placed across the stack's axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Fill,
    Leading,
    Center,
    Trailing,
}

/// A linear container laying its children out one after another.
pub struct Stack {
    id: ViewId,
}

impl View for Stack {
    fn id(&self) -> ViewId {
        self.id
    }
}

impl ParentView for Stack {}

pub fn stack(axis: Axis) -> Stack {
    let stack = Stack {
        id: ViewId::new(Widget::Stack),
    };
    stack.set_axis(axis);
    stack
}

/// A stack which arranges children in a column. See also [`h_stack`].
pub fn v_stack() -> Stack {
    stack(Axis::Vertical)
}

/// A stack which arranges children in a row. See also [`v_stack`].
pub fn h_stack() -> Stack {
    stack(Axis::Horizontal)
}

impl Stack {
    pub fn set_axis(&self, axis: Axis) {
        self.id.update_style(|s| {
            s.flex_direction = match axis {
                Axis::Vertical => FlexDirection::Column,
                Axis::Horizontal => FlexDirection::Row,
            };
        });
    }

    pub fn set_distribution(&self, distribution: Distribution) {
        self.id.update_style(|s| {
            s.justify_content = match distribution {
                Distribution::Fill => None,
                Distribution::EqualSpacing => Some(JustifyContent::SpaceBetween),
            };
        });
    }

    pub fn set_alignment(&self, alignment: Alignment) {
        self.id.update_style(|s| {
            s.align_items = Some(match alignment {
                Alignment::Fill => AlignItems::Stretch,
                Alignment::Leading => AlignItems::FlexStart,
                Alignment::Center => AlignItems::Center,
                Alignment::Trailing => AlignItems::FlexEnd,
            });
        });
    }

    pub fn set_spacing(&self, spacing: f32) {
        self.id.update_style(|s| {
            s.gap = Size {
                width: length(spacing),
                height: length(spacing),
            };
        });
    }
}
