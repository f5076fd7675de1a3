//! Tests for the layout of arranged elements.
//!
//! These tests verify that:
//! - Spacers take exactly their height
//! - Scrollable groups size to their content unless given a height
//! - Arranged views fill the stack's width
//! - Input rows give the field the space the prompt leaves

use element_stack_test::prelude::*;

const WIDTH: f32 = 375.0;

fn laid_out(elements: &[Element]) -> (ElementStack<ConcreteElementGenerator>, HeadlessHarness) {
    let stack = arrange(elements);
    let mut harness = HeadlessHarness::new_with_width(stack.id(), WIDTH);
    harness.rebuild().expect("layout");
    (stack, harness)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.01
}

// =============================================================================
// Spacers
// =============================================================================

#[test]
fn test_spacer_takes_its_height() {
    let (stack, harness) = laid_out(&[
        Element::centered_text("top"),
        Element::spacer(15.0),
        Element::centered_text("bottom"),
    ]);
    let views = stack.arranged_views();
    let spacer = harness.get_layout_rect(views[1]);
    assert!(approx(spacer.height(), 15.0), "spacer height {}", spacer.height());

    let top = harness.get_layout_rect(views[0]);
    let bottom = harness.get_layout_rect(views[2]);
    assert!(approx(bottom.y0 - top.y1, 15.0));
}

#[test]
fn test_zero_spacer_collapses() {
    let (stack, harness) = laid_out(&[Element::spacer(0.0), Element::centered_text("a")]);
    let views = stack.arranged_views();
    assert!(approx(harness.get_layout_rect(views[0]).height(), 0.0));
    assert!(approx(harness.get_layout_rect(views[1]).y0, 0.0));
}

#[test]
fn test_stack_height_is_sum_of_spacers() {
    let (stack, mut harness) = laid_out(&[
        Element::spacer(10.0),
        Element::spacer(20.0),
        Element::spacer(30.0),
    ]);
    let size = harness.rebuild().unwrap();
    assert_eq!(size.height, 60.0);
    assert!(approx(harness.get_layout_rect(stack.id()).height(), 60.0));
}

// =============================================================================
// Scrollable Groups
// =============================================================================

#[test]
fn test_auto_group_has_no_fixed_height() {
    let (stack, _harness) = laid_out(&[Element::scrollable(
        0.0,
        vec![Element::centered_text("a"), Element::centered_text("b")],
    )]);
    let group = stack.arranged_views()[0];
    assert_eq!(group.style().size.height, Dimension::auto());
}

#[test]
fn test_auto_group_sizes_to_content() {
    let (stack, harness) = laid_out(&[Element::scrollable(
        0.0,
        vec![
            Element::spacer(20.0),
            Element::spacer(20.0),
            Element::spacer(20.0),
        ],
    )]);
    let group = stack.arranged_views()[0];
    assert!(approx(harness.get_layout_rect(group).height(), 60.0));
}

#[test]
fn test_fixed_group_clips_taller_content() {
    let content: Vec<Element> = (0..10).map(|_| Element::spacer(30.0)).collect();
    let (stack, harness) = laid_out(&[Element::scrollable(80.0, content), Element::spacer(5.0)]);
    let views = stack.arranged_views();

    assert_eq!(views[0].style().size.height, Dimension::length(80.0));
    let group = harness.get_layout_rect(views[0]);
    assert!(approx(group.height(), 80.0), "group height {}", group.height());
    assert!(approx(harness.get_layout_rect(views[1]).y0, 80.0));

    let nested = views[0].children()[0];
    assert!(approx(harness.get_layout_rect(nested).height(), 300.0));
}

#[test]
fn test_nested_stack_spans_the_group_width() {
    let (stack, harness) = laid_out(&[Element::scrollable(
        50.0,
        vec![Element::centered_text("inside")],
    )]);
    let nested = stack.arranged_views()[0].children()[0];
    assert!(approx(harness.get_layout_rect(nested).width(), WIDTH as f64));
}

// =============================================================================
// Widths
// =============================================================================

#[test]
fn test_arranged_views_fill_the_width() {
    let (stack, harness) = laid_out(&[
        Element::centered_text("title"),
        Element::button("Sign in"),
        Element::checker("Remember me", false),
    ]);
    for view in stack.arranged_views() {
        let rect = harness.get_layout_rect(view);
        assert!(approx(rect.x0, 0.0));
        assert!(approx(rect.width(), WIDTH as f64), "{}", view.debug_name());
    }
}

#[test]
fn test_input_field_takes_remaining_width() {
    let (stack, harness) = laid_out(&[Element::input("User Name: ", Some("Email/Phone/ID"))]);
    let row = stack.arranged_views()[0];
    let children = row.children();
    let prompt = harness.get_layout_rect(children[0]);
    let field = harness.get_layout_rect(children[1]);

    assert!(prompt.width() > 0.0);
    assert!(approx(field.x0, prompt.x1));
    assert!(approx(field.x1, WIDTH as f64));
}

#[test]
fn test_narrower_width_relayouts() {
    let (stack, mut harness) = laid_out(&[Element::button("Sign in")]);
    harness.set_width(200.0);
    harness.rebuild().unwrap();
    let button = stack.arranged_views()[0];
    assert!(approx(harness.get_layout_rect(button).width(), 200.0));
}
