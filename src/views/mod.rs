//! # Built-in views
//!
//! Small builders over a [`ViewId`](crate::ViewId). Each constructor creates
//! the view in the host tree right away; the returned struct only carries the
//! id so that [`Decorators`] and [`ParentView`] can be chained on it.

mod button;
pub use button::*;

mod control;
pub use control::*;

mod decorator;
pub use decorator::*;

mod empty;
pub use empty::*;

mod image;
pub use image::*;

mod label;
pub use label::*;

pub mod scroll;
pub use scroll::{Scroll, scroll};

mod segmented;
pub use segmented::*;

mod stack;
pub use stack::*;

mod text_input;
pub use text_input::*;
