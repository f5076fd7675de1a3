//! Builds the same login form with both generators, lays both out without a
//! window and logs the resulting trees.
//!
//! Run with `RUST_LOG=debug` to also see the arrangement spans.

use element_stack::{
    LayoutError,
    headless::HeadlessHarness,
    peniko::color::palette,
    prelude::*,
    taffy::style_helpers::length,
};
use tracing_subscriber::EnvFilter;

fn login_elements() -> Vec<Element> {
    vec![
        Element::segmented(["Sign in", "Register"], 0),
        Element::spacer(15.0),
        Element::input("User Name: ", Some("Email/Phone/ID"))
            .with_text_changed(|text| tracing::info!("user name: {text:?}")),
        Element::spacer(15.0),
        Element::input("Password: ", Some("Password"))
            .with_text_changed(|text| tracing::info!("password: {text:?}")),
        Element::spacer(10.0),
        Element::checker("Remember user name", false)
            .with_checker_tapped(|checked| tracing::info!("checked: {checked}")),
        Element::spacer(10.0),
        Element::button("Sign in"),
    ]
}

fn form_config() -> StackConfig {
    StackConfig {
        background: Some(palette::css::LIGHT_GRAY.with_alpha(0.1)),
        ..StackConfig::default()
    }
}

fn main() -> Result<(), LayoutError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let concrete = ElementStack::with_config(ConcreteElementGenerator::new(), form_config());
    concrete.add_arranged_elements(&login_elements());

    let accent = ElementStack::with_config(AccentElementGenerator::new(), form_config());
    match FlatElement::try_from_elements(login_elements()) {
        Ok(elements) => accent.add_arranged_elements(&elements),
        Err(err) => tracing::error!("{err}"),
    }

    let screen = v_stack()
        .style(|s| {
            s.padding.left = length(20.0);
            s.padding.right = length(20.0);
            s.gap.height = length(10.0);
        })
        .child(&concrete)
        .child(&accent);

    let mut harness = HeadlessHarness::new(screen.id());
    let size = harness.rebuild()?;
    tracing::info!(width = size.width, height = size.height, "screen laid out");

    // Play the part of a user on the first form.
    let field = harness.find_first(|id| matches!(id.widget(), Widget::TextInput { .. }));
    let checker = harness.find_first(|id| matches!(id.widget(), Widget::Control { .. }));
    if let (Some(field), Some(checker)) = (field, checker) {
        harness.input_text(field, "ada@example.com");
        harness.tap(checker);
        harness.rebuild()?;
    }

    tracing::info!("view tree:\n{}", harness.dump_tree());
    Ok(())
}
