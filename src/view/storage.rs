use std::{cell::RefCell, rc::Rc};

use slotmap::{SecondaryMap, SlotMap};

use super::{ViewId, state::ViewState};

thread_local! {
    pub(crate) static VIEW_STORAGE: RefCell<ViewStorage> = Default::default();
}

pub(crate) struct ViewStorage {
    pub(crate) view_ids: SlotMap<ViewId, ()>,
    pub(crate) children: SecondaryMap<ViewId, Vec<ViewId>>,
    // the parent of a View
    pub(crate) parent: SecondaryMap<ViewId, Option<ViewId>>,
    pub(crate) states: SecondaryMap<ViewId, Rc<RefCell<ViewState>>>,
    /// Handed out for ids that were removed, so lookups never panic.
    pub(crate) stale_view_state: Rc<RefCell<ViewState>>,
}

impl Default for ViewStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewStorage {
    pub fn new() -> Self {
        Self {
            view_ids: Default::default(),
            children: Default::default(),
            parent: Default::default(),
            states: Default::default(),
            stale_view_state: Rc::new(RefCell::new(ViewState::default())),
        }
    }

    /// Returns the deepest view ID encountered traversing parents.
    pub(crate) fn root_view_id(&self, id: ViewId) -> ViewId {
        match self.parent.get(id).copied().flatten() {
            Some(parent) => self.root_view_id(parent),
            None => id,
        }
    }
}
