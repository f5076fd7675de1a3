//! # The host view tree
//!
//! Views are identified by a [`ViewId`]. The id is a small copyable key into
//! thread-local storage that holds the [`Widget`](crate::widget::Widget), the
//! layout [`taffy::Style`], the visual [`Appearance`](crate::style::Appearance)
//! and the event listeners of every view.
//!
//! A [`ViewId`] never keeps a view alive. Once a view is removed, every
//! accessor falls back to an empty state and [`ViewId::is_valid`] returns
//! `false`, which makes ids safe to hold as non-owning back references.

mod id;
pub(crate) mod state;
mod storage;

pub use id::ViewId;
pub use state::ViewState;
pub(crate) use storage::*;

/// Anything that is backed by a single view in the tree.
pub trait View {
    fn id(&self) -> ViewId;
}

impl<V: View> View for &V {
    fn id(&self) -> ViewId {
        V::id(self)
    }
}
