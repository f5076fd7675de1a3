//! Tests for the lifetime of element subscriptions.
//!
//! These tests verify that:
//! - Callbacks stop once the generator is dropped
//! - Nested stacks are released with their outer generator
//! - Views outlive the subscriptions and still accept events

use element_stack_test::prelude::*;

#[test]
fn test_dropped_stack_stops_callbacks() {
    let taps = CallbackRecorder::new();
    let checks = CallbackRecorder::new();
    let texts = CallbackRecorder::new();
    let stack = arrange(&[
        Element::button("Go").with_tapped(taps.record_tap()),
        Element::checker("Remember me", false).with_checker_tapped(checks.record()),
        Element::input("Name", None).with_text_changed(texts.record_text()),
    ]);
    let root = stack.id();
    let button = find_kind(root, "Button")[0];
    let checker = find_kind(root, "Control")[0];
    let field = find_kind(root, "TextInput")[0];
    texts.reset();

    drop(stack);

    let mut harness = HeadlessHarness::new(root);
    harness.tap(button);
    harness.tap(checker);
    harness.input_text(field, "late");

    assert_eq!(taps.count(), 0);
    assert_eq!(checks.count(), 0);
    assert_eq!(texts.count(), 0);
    assert!(root.is_valid(), "views are not owned by the generator");
    assert!(matches!(checker.widget(), Widget::Control { selected: false }));
}

#[test]
fn test_nested_callbacks_end_with_outer_generator() {
    let recorder = CallbackRecorder::new();
    let stack = arrange(&[Element::scrollable(
        0.0,
        vec![Element::segmented(["a", "b"], 0).with_segment_tapped(recorder.record())],
    )]);
    let root = stack.id();
    let segmented = find_kind(root, "Segmented")[0];

    let mut harness = HeadlessHarness::new(root);
    harness.select_segment(segmented, 1);
    assert_eq!(recorder.calls(), vec![1]);

    drop(stack);
    harness.select_segment(segmented, 0);
    assert_eq!(recorder.calls(), vec![1]);
}

#[test]
fn test_injected_bag_is_used() {
    let recorder = CallbackRecorder::new();
    let generator = ConcreteElementGenerator::with_dispose_bag(DisposeBag::new());
    let stack = ElementStack::new(generator);
    stack.add_arranged_elements(&[Element::button("Go").with_tapped(recorder.record_tap())]);

    let button = stack.arranged_views()[0];
    HeadlessHarness::new(stack.id()).tap(button);
    assert_eq!(recorder.count(), 1);
}

#[test]
fn test_container_handle_is_cleared_when_view_is_removed() {
    let stack = arrange(&[Element::spacer(1.0)]);
    let root = stack.id();
    root.remove();
    assert!(!root.is_valid());
    assert_eq!(stack.generator().container_view(), None);
}
