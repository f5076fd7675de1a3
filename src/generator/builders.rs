//! View builders shared by the generators.
//!
//! Every builder returns the root of exactly one subtree. Builders for
//! interactive elements keep their control state in signals owned by the
//! generator's [`DisposeBag`] and forward changes to the element's callback.

use floem_reactive::SignalUpdate;
use taffy::{
    geometry::Size,
    style::{AlignItems, FlexDirection, JustifyContent},
    style_helpers::{length, zero},
};

use super::DisposeBag;
use crate::{
    ViewId,
    element::{CheckerTapped, SegmentTapped, Tapped, TextChanged},
    style::{Font, TextAlign},
    theme::ElementTheme,
    view::View,
    views::{
        Decorators, ParentView, button, control, empty, image, label, segmented,
        set_control_selected, set_image_symbol, text_input,
    },
};

pub(crate) fn centered_text(title: &str, theme: &ElementTheme) -> ViewId {
    let text_color = theme.text_color;
    label(title)
        .appearance(|a| {
            let a = a.text_align(TextAlign::Center);
            match text_color {
                Some(color) => a.color(color),
                None => a,
            }
        })
        .id()
}

/// A prompt label hugging its text, followed by a field taking the rest of the row.
pub(crate) fn common_input(
    bag: &DisposeBag,
    prompt: &str,
    placeholder: Option<&str>,
    on_text_changed: Option<TextChanged>,
) -> ViewId {
    let buffer = bag.create_rw_signal(String::new());
    if let Some(on_text_changed) = on_text_changed {
        bag.subscribe(buffer, true, move |text: String| on_text_changed(&text));
    }

    let prompt = label(prompt)
        .appearance(|a| a.text_align(TextAlign::Left))
        .style(|s| s.flex_shrink = 0.0);
    let field = text_input(buffer)
        .placeholder(placeholder.unwrap_or_default())
        .style(|s| {
            s.flex_grow = 1.0;
            s.flex_basis = zero();
        });

    empty()
        .style(|s| {
            s.flex_direction = FlexDirection::Row;
            s.align_items = Some(AlignItems::Center);
        })
        .child(prompt)
        .child(field)
        .id()
}

pub(crate) fn button_view(
    bag: &DisposeBag,
    title: &str,
    on_tapped: Option<Tapped>,
    theme: &ElementTheme,
) -> ViewId {
    let taps = bag.create_rw_signal(0_usize);
    if let Some(on_tapped) = on_tapped {
        bag.subscribe(taps, false, move |_| on_tapped());
    }

    let title_color = theme.button_title_color;
    let background = theme.button_background;
    button(title)
        .appearance(|a| {
            let a = a.color(title_color);
            match background {
                Some(color) => a.background(color),
                None => a,
            }
        })
        .action(move || {
            taps.try_update(|count| *count += 1);
        })
        .id()
}

pub(crate) fn segmented_control(
    bag: &DisposeBag,
    items: &[String],
    default_index: usize,
    on_tapped: Option<SegmentTapped>,
) -> ViewId {
    if default_index >= items.len() {
        tracing::debug!(
            default_index,
            len = items.len(),
            "default segment out of range, nothing selected"
        );
    }
    let selected = bag.create_rw_signal(default_index);
    if let Some(on_tapped) = on_tapped {
        bag.subscribe(selected, false, move |index| on_tapped(index));
    }
    segmented(items.iter().cloned(), selected).id()
}

/// A tappable row of a check mark icon and a footnote title.
///
/// Every tap on the control flips its state, even without a callback.
pub(crate) fn checker(
    bag: &DisposeBag,
    title: &str,
    checked: bool,
    on_tapped: Option<CheckerTapped>,
    theme: &ElementTheme,
) -> ViewId {
    let state = bag.create_rw_signal(checked);

    let row = |s: &mut taffy::style::Style| {
        s.flex_direction = FlexDirection::Row;
        s.align_items = Some(AlignItems::Center);
    };
    let control = control(checked).style(row);
    let control_id = control.id();

    // Centered checkers hold icon and title in a content box centered in the control.
    let content = if theme.checker_content_centered {
        control_id.update_style(|s| s.justify_content = Some(JustifyContent::Center));
        let content = empty().debug_name("CheckerContent").style(row).id();
        control_id.add_child(content);
        content
    } else {
        control_id
    };
    let spacing = theme.checker_spacing;
    content.update_style(|s| {
        s.gap = Size {
            width: length(spacing),
            height: zero(),
        };
    });

    let tint = theme.checker_tint;
    let icon = image(ElementTheme::checker_symbol(checked))
        .appearance(|a| a.tint(tint))
        .style(|s| s.flex_shrink = 0.0)
        .id();
    let title_color = theme.checker_title_color;
    let title = label(title)
        .appearance(|a| a.color(title_color).font(Font::Footnote))
        .style(|s| s.flex_shrink = 0.0)
        .id();
    content.add_child(icon);
    content.add_child(title);

    bag.subscribe(state, false, move |checked: bool| {
        set_image_symbol(icon, ElementTheme::checker_symbol(checked));
        set_control_selected(control_id, checked);
        if let Some(on_tapped) = &on_tapped {
            on_tapped(checked);
        }
    });

    control
        .on_tap(move || {
            state.try_update(|checked| *checked = !*checked);
        })
        .id()
}

pub(crate) fn spacer() -> ViewId {
    empty().id()
}

/// Pin `view` to `height` along the stack axis. Negative heights collapse to zero.
pub(crate) fn fix_height(view: ViewId, height: f32) {
    view.update_style(|s| {
        s.size.height = length(height.max(0.0));
        s.flex_shrink = 0.0;
    });
}
