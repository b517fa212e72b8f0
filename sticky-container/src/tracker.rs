use alloc::rc::{Rc, Weak};
use core::cell::RefCell;
use core::fmt;

use crate::{EdgeKind, StickyAccessor};

/// A header or footer component that decides which sticky index is pinned.
///
/// Trackers never hold on to the container. Each event carries a [`StickyAccessor`] borrowed
/// from the container's current state, and trackers resolve layouts, data and renderers through
/// it.
pub trait EdgeTracker<D, E, C> {
    /// Receives a copy of the latest visible-index set.
    fn on_visible_indices_changed(&mut self, all: &[usize], source: &StickyAccessor<'_, D, E, C>);

    /// Receives the vertical scroll offset reported by the host.
    fn on_scroll(&mut self, offset_y: f64, source: &StickyAccessor<'_, D, E, C>);
}

pub type TrackerRef<D, E, C> = Rc<RefCell<dyn EdgeTracker<D, E, C>>>;

/// A non-owning back-reference to a mounted tracker.
pub(crate) struct TrackerSlot<D, E, C> {
    edge: EdgeKind,
    handle: Option<Weak<RefCell<dyn EdgeTracker<D, E, C>>>>,
}

impl<D, E, C> TrackerSlot<D, E, C> {
    pub(crate) fn new(edge: EdgeKind) -> Self {
        Self { edge, handle: None }
    }

    pub(crate) fn edge(&self) -> EdgeKind {
        self.edge
    }

    /// Stores `tracker` if it differs by identity from the current handle.
    ///
    /// Returns the newly bound tracker when the identity changed to a live tracker, so the
    /// caller can replay state to it.
    pub(crate) fn rebind(
        &mut self,
        tracker: Option<&TrackerRef<D, E, C>>,
    ) -> Option<TrackerRef<D, E, C>> {
        let current = self.get();
        let unchanged = match (&current, tracker) {
            (None, None) => true,
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        };
        if unchanged {
            return None;
        }
        self.handle = tracker.map(Rc::downgrade);
        tracker.cloned()
    }

    pub(crate) fn clear(&mut self) {
        self.handle = None;
    }

    pub(crate) fn get(&self) -> Option<TrackerRef<D, E, C>> {
        self.handle.as_ref().and_then(Weak::upgrade)
    }

    pub(crate) fn is_bound(&self) -> bool {
        self.handle.is_some()
    }
}

impl<D, E, C> fmt::Debug for TrackerSlot<D, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.handle {
            None => "empty",
            Some(weak) if weak.strong_count() == 0 => "dead",
            Some(_) => "live",
        };
        write!(f, "{:?}({state})", self.edge())
    }
}
