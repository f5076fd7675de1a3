//! Tests that element callbacks only run for their own control's changes.
//!
//! These tests verify that:
//! - Signals read inside a callback do not re-run it when they change
//! - This holds for checkers, inputs, segmented controls and buttons

use element_stack_test::prelude::*;

/// A signal outside any element, read by the callbacks under test.
fn external_signal(bag: &DisposeBag) -> RwSignal<i32> {
    bag.create_rw_signal(0)
}

#[test]
fn test_checker_callback_ignores_external_signal() {
    let bag = DisposeBag::new();
    let external = external_signal(&bag);
    let recorder = CallbackRecorder::new();
    let record = recorder.record();
    let stack = arrange(&[Element::checker("Remember me", false).with_checker_tapped(
        move |checked| {
            external.get();
            record(checked);
        },
    )]);
    let checker = stack.arranged_views()[0];

    HeadlessHarness::new(stack.id()).tap(checker);
    external.set(1);
    external.set(2);
    assert_eq!(recorder.calls(), vec![true]);
}

#[test]
fn test_input_callback_ignores_external_signal() {
    let bag = DisposeBag::new();
    let external = external_signal(&bag);
    let recorder = CallbackRecorder::new();
    let record = recorder.record_text();
    let stack = arrange(&[Element::input("Name", None).with_text_changed(move |text| {
        external.get();
        record(text);
    })]);
    assert_eq!(recorder.count(), 1);

    external.set(1);
    assert_eq!(recorder.count(), 1);

    let field = find_kind(stack.id(), "TextInput")[0];
    HeadlessHarness::new(stack.id()).input_text(field, "Ada");
    external.set(2);
    assert_eq!(recorder.calls(), vec!["", "Ada"]);
}

#[test]
fn test_segmented_callback_ignores_external_signal() {
    let bag = DisposeBag::new();
    let external = external_signal(&bag);
    let recorder = CallbackRecorder::new();
    let record = recorder.record();
    let stack = arrange(&[
        Element::segmented(["a", "b"], 0).with_segment_tapped(move |index| {
            external.get();
            record(index);
        }),
    ]);
    let segmented = stack.arranged_views()[0];

    HeadlessHarness::new(stack.id()).select_segment(segmented, 1);
    external.set(1);
    assert_eq!(recorder.calls(), vec![1]);
}

#[test]
fn test_button_callback_ignores_external_signal() {
    let bag = DisposeBag::new();
    let external = external_signal(&bag);
    let recorder = CallbackRecorder::new();
    let record = recorder.record_tap();
    let stack = arrange(&[Element::button("Go").with_tapped(move || {
        external.get();
        record();
    })]);
    let button = stack.arranged_views()[0];

    HeadlessHarness::new(stack.id()).tap(button);
    external.set(1);
    assert_eq!(recorder.calls(), vec![Unit]);
}
