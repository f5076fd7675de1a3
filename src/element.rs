//! Element descriptions.
//!
//! An element says *what* to show, never *how*: turning it into views is the
//! job of an [`ElementGenerator`](crate::generator::ElementGenerator).
//! [`Element`] is the full set; [`FlatElement`] is the same set minus nested
//! scrollable groups, for generators that cannot build those.

use std::{fmt, rc::Rc};

/// Called with the text field's contents.
pub type TextChanged = Rc<dyn Fn(&str)>;
/// Called when a button is tapped.
pub type Tapped = Rc<dyn Fn()>;
/// Called with the index of the newly selected segment.
pub type SegmentTapped = Rc<dyn Fn(usize)>;
/// Called with the checker's new state.
pub type CheckerTapped = Rc<dyn Fn(bool)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    CenteredText,
    CommonInput,
    Button,
    Segmented,
    Checker,
    Spacer,
    ScrollableGroup,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::CenteredText => "centered text",
            ElementKind::CommonInput => "common input",
            ElementKind::Button => "button",
            ElementKind::Segmented => "segmented control",
            ElementKind::Checker => "checker",
            ElementKind::Spacer => "spacer",
            ElementKind::ScrollableGroup => "scrollable group",
        };
        f.write_str(name)
    }
}

#[derive(Clone)]
pub enum Element {
    CenteredText {
        title: String,
    },
    /// A leading prompt followed by a text field.
    CommonInput {
        label: String,
        placeholder: Option<String>,
        on_text_changed: Option<TextChanged>,
    },
    Button {
        title: String,
        on_tapped: Option<Tapped>,
    },
    Segmented {
        items: Vec<String>,
        default_index: usize,
        on_tapped: Option<SegmentTapped>,
    },
    /// A tappable check mark with a title.
    Checker {
        title: String,
        checked: bool,
        on_tapped: Option<CheckerTapped>,
    },
    /// Empty space of a fixed height.
    Spacer {
        height: f32,
    },
    /// A scroll view holding its own stack of elements.
    ///
    /// A `height` of `0.0` sizes the group to its content.
    ScrollableGroup {
        height: f32,
        elements: Vec<Element>,
    },
}

#[derive(Clone)]
pub enum FlatElement {
    CenteredText {
        title: String,
    },
    CommonInput {
        label: String,
        placeholder: Option<String>,
        on_text_changed: Option<TextChanged>,
    },
    Button {
        title: String,
        on_tapped: Option<Tapped>,
    },
    Segmented {
        items: Vec<String>,
        default_index: usize,
        on_tapped: Option<SegmentTapped>,
    },
    Checker {
        title: String,
        checked: bool,
        on_tapped: Option<CheckerTapped>,
    },
    Spacer {
        height: f32,
    },
}

/// Common surface of the element sets a generator can accept.
pub trait ElementDescriptor {
    fn kind(&self) -> ElementKind;
}

impl ElementDescriptor for Element {
    fn kind(&self) -> ElementKind {
        self.element_kind()
    }
}

impl ElementDescriptor for FlatElement {
    fn kind(&self) -> ElementKind {
        self.element_kind()
    }
}

/// A [`FlatElement`] was requested for an element kind it cannot describe.
#[derive(Debug, thiserror::Error)]
#[error("{kind} elements cannot be arranged by a flat generator")]
pub struct UnsupportedElement {
    pub kind: ElementKind,
}

impl Element {
    pub fn centered_text(title: impl Into<String>) -> Self {
        Element::CenteredText {
            title: title.into(),
        }
    }

    pub fn input(label: impl Into<String>, placeholder: Option<&str>) -> Self {
        Element::CommonInput {
            label: label.into(),
            placeholder: placeholder.map(str::to_string),
            on_text_changed: None,
        }
    }

    pub fn button(title: impl Into<String>) -> Self {
        Element::Button {
            title: title.into(),
            on_tapped: None,
        }
    }

    pub fn segmented<S: Into<String>>(
        items: impl IntoIterator<Item = S>,
        default_index: usize,
    ) -> Self {
        Element::Segmented {
            items: items.into_iter().map(Into::into).collect(),
            default_index,
            on_tapped: None,
        }
    }

    pub fn checker(title: impl Into<String>, checked: bool) -> Self {
        Element::Checker {
            title: title.into(),
            checked,
            on_tapped: None,
        }
    }

    pub fn spacer(height: f32) -> Self {
        Element::Spacer { height }
    }

    pub fn scrollable(height: f32, elements: Vec<Element>) -> Self {
        Element::ScrollableGroup { height, elements }
    }

    /// Attach a text change callback. No-op for other kinds.
    pub fn with_text_changed(mut self, f: impl Fn(&str) + 'static) -> Self {
        if let Element::CommonInput {
            on_text_changed, ..
        } = &mut self
        {
            *on_text_changed = Some(Rc::new(f));
        }
        self
    }

    /// Attach a tap callback to a button. No-op for other kinds.
    pub fn with_tapped(mut self, f: impl Fn() + 'static) -> Self {
        if let Element::Button { on_tapped, .. } = &mut self {
            *on_tapped = Some(Rc::new(f));
        }
        self
    }

    /// Attach a selection callback to a segmented control. No-op for other kinds.
    pub fn with_segment_tapped(mut self, f: impl Fn(usize) + 'static) -> Self {
        if let Element::Segmented { on_tapped, .. } = &mut self {
            *on_tapped = Some(Rc::new(f));
        }
        self
    }

    /// Attach a toggle callback to a checker. No-op for other kinds.
    pub fn with_checker_tapped(mut self, f: impl Fn(bool) + 'static) -> Self {
        if let Element::Checker { on_tapped, .. } = &mut self {
            *on_tapped = Some(Rc::new(f));
        }
        self
    }

    pub(crate) fn element_kind(&self) -> ElementKind {
        match self {
            Element::CenteredText { .. } => ElementKind::CenteredText,
            Element::CommonInput { .. } => ElementKind::CommonInput,
            Element::Button { .. } => ElementKind::Button,
            Element::Segmented { .. } => ElementKind::Segmented,
            Element::Checker { .. } => ElementKind::Checker,
            Element::Spacer { .. } => ElementKind::Spacer,
            Element::ScrollableGroup { .. } => ElementKind::ScrollableGroup,
        }
    }
}

impl FlatElement {
    pub(crate) fn element_kind(&self) -> ElementKind {
        match self {
            FlatElement::CenteredText { .. } => ElementKind::CenteredText,
            FlatElement::CommonInput { .. } => ElementKind::CommonInput,
            FlatElement::Button { .. } => ElementKind::Button,
            FlatElement::Segmented { .. } => ElementKind::Segmented,
            FlatElement::Checker { .. } => ElementKind::Checker,
            FlatElement::Spacer { .. } => ElementKind::Spacer,
        }
    }

    /// Convert a whole list, failing on the first scrollable group.
    pub fn try_from_elements(
        elements: impl IntoIterator<Item = Element>,
    ) -> Result<Vec<FlatElement>, UnsupportedElement> {
        elements.into_iter().map(FlatElement::try_from).collect()
    }
}

impl From<FlatElement> for Element {
    fn from(element: FlatElement) -> Self {
        match element {
            FlatElement::CenteredText { title } => Element::CenteredText { title },
            FlatElement::CommonInput {
                label,
                placeholder,
                on_text_changed,
            } => Element::CommonInput {
                label,
                placeholder,
                on_text_changed,
            },
            FlatElement::Button { title, on_tapped } => Element::Button { title, on_tapped },
            FlatElement::Segmented {
                items,
                default_index,
                on_tapped,
            } => Element::Segmented {
                items,
                default_index,
                on_tapped,
            },
            FlatElement::Checker {
                title,
                checked,
                on_tapped,
            } => Element::Checker {
                title,
                checked,
                on_tapped,
            },
            FlatElement::Spacer { height } => Element::Spacer { height },
        }
    }
}

impl TryFrom<Element> for FlatElement {
    type Error = UnsupportedElement;

    fn try_from(element: Element) -> Result<Self, Self::Error> {
        Ok(match element {
            Element::CenteredText { title } => FlatElement::CenteredText { title },
            Element::CommonInput {
                label,
                placeholder,
                on_text_changed,
            } => FlatElement::CommonInput {
                label,
                placeholder,
                on_text_changed,
            },
            Element::Button { title, on_tapped } => FlatElement::Button { title, on_tapped },
            Element::Segmented {
                items,
                default_index,
                on_tapped,
            } => FlatElement::Segmented {
                items,
                default_index,
                on_tapped,
            },
            Element::Checker {
                title,
                checked,
                on_tapped,
            } => FlatElement::Checker {
                title,
                checked,
                on_tapped,
            },
            Element::Spacer { height } => FlatElement::Spacer { height },
            Element::ScrollableGroup { .. } => {
                return Err(UnsupportedElement {
                    kind: ElementKind::ScrollableGroup,
                });
            }
        })
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::ScrollableGroup { height, elements } => f
                .debug_struct("ScrollableGroup")
                .field("height", height)
                .field("elements", elements)
                .finish(),
            Element::CenteredText { title } => {
                f.debug_struct("CenteredText").field("title", title).finish()
            }
            Element::CommonInput {
                label,
                placeholder,
                on_text_changed,
            } => f
                .debug_struct("CommonInput")
                .field("label", label)
                .field("placeholder", placeholder)
                .field("on_text_changed", &on_text_changed.is_some())
                .finish(),
            Element::Button { title, on_tapped } => f
                .debug_struct("Button")
                .field("title", title)
                .field("on_tapped", &on_tapped.is_some())
                .finish(),
            Element::Segmented {
                items,
                default_index,
                on_tapped,
            } => f
                .debug_struct("Segmented")
                .field("items", items)
                .field("default_index", default_index)
                .field("on_tapped", &on_tapped.is_some())
                .finish(),
            Element::Checker {
                title,
                checked,
                on_tapped,
            } => f
                .debug_struct("Checker")
                .field("title", title)
                .field("checked", checked)
                .field("on_tapped", &on_tapped.is_some())
                .finish(),
            Element::Spacer { height } => f.debug_struct("Spacer").field("height", height).finish(),
        }
    }
}

impl fmt::Debug for FlatElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Element::from(self.clone()), f)
    }
}
