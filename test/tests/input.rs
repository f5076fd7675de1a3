//! Tests for common input elements.
//!
//! These tests verify that:
//! - The row holds the prompt and a text field with the placeholder
//! - The callback sees the current text on subscription and every edit

use element_stack_test::prelude::*;

fn field_of(row: ViewId) -> ViewId {
    find_kind(row, "TextInput")[0]
}

#[test]
fn test_row_holds_prompt_and_field() {
    let stack = arrange(&[Element::input("Password: ", Some("Password"))]);
    let row = stack.arranged_views()[0];
    let children = row.children();

    assert_eq!(children.len(), 2);
    assert_eq!(text_of(children[0]).as_deref(), Some("Password: "));
    match children[1].widget() {
        Widget::TextInput { placeholder, .. } => assert_eq!(placeholder, "Password"),
        other => panic!("expected a text input, got {other:?}"),
    }
}

#[test]
fn test_missing_placeholder_is_empty() {
    let stack = arrange(&[Element::input("Name", None)]);
    match field_of(stack.arranged_views()[0]).widget() {
        Widget::TextInput { placeholder, .. } => assert!(placeholder.is_empty()),
        other => panic!("expected a text input, got {other:?}"),
    }
}

#[test]
fn test_callback_sees_current_text_then_edits() {
    let recorder = CallbackRecorder::new();
    let stack = arrange(&[
        Element::input("User Name: ", Some("Email/Phone/ID")).with_text_changed(recorder.record_text())
    ]);
    assert_eq!(recorder.calls(), vec![String::new()]);

    let field = field_of(stack.arranged_views()[0]);
    let mut harness = HeadlessHarness::new(stack.id());
    assert!(harness.input_text(field, "a").handled);
    harness.input_text(field, "ab");

    assert_eq!(recorder.calls(), vec!["", "a", "ab"]);
    assert_eq!(text_of(field).as_deref(), Some("ab"));
}

#[test]
fn test_editing_without_callback_updates_the_field() {
    let stack = arrange(&[Element::input("Name", None)]);
    let field = field_of(stack.arranged_views()[0]);
    HeadlessHarness::new(stack.id()).input_text(field, "Ada");
    assert_eq!(text_of(field).as_deref(), Some("Ada"));
}
