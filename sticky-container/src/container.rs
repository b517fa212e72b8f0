use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use crate::binding::validate_children;
use crate::tracker::TrackerSlot;
use crate::{
    ChildRef, ContainerStyle, EdgeKind, EdgeTracker, HostBinding, HostHandle, HostProps, Result,
    ScrollEvent, StickyAccessor, StickyContainerOptions, TrackerRef,
};

/// What the container wants on screen for the current configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StickyFrame<'a> {
    pub style: ContainerStyle,
    /// Sticky indices for the header tracker; `None` means no header tracker is mounted.
    pub header: Option<&'a [usize]>,
    /// Sticky indices for the footer tracker; `None` means no footer tracker is mounted.
    pub footer: Option<&'a [usize]>,
}

/// Coordinates sticky header/footer trackers over a single virtualization host.
///
/// The container is headless and single-threaded. Your adapter drives it:
/// - forward the host's visibility and scroll callbacks to [`Self::on_visible_indices_changed`]
///   and [`Self::on_scroll`]
/// - report the live host with [`Self::set_host_ref`]
/// - report mounted trackers with [`Self::set_header_ref`] / [`Self::set_footer_ref`]
///
/// Every relay completes synchronously: when an event method returns, both trackers have seen
/// the new state, followed by the embedding application's own listener (if any).
pub struct StickyContainer<D, E, C> {
    options: StickyContainerOptions<D, E, C>,
    child: HostProps<D, E, C>,
    binding: HostBinding<D, E, C>,
    host: Option<HostHandle>,
    header: TrackerSlot<D, E, C>,
    footer: TrackerSlot<D, E, C>,
    visible_indices: Vec<usize>,
}

impl<D, E, C> StickyContainer<D, E, C> {
    /// Attaches to the single host child in `children`.
    ///
    /// Fails with [`crate::ConfigurationError`] unless there is exactly one child providing a
    /// data source, a layout source and a row renderer, with its ref (if any) given as a
    /// callback.
    pub fn new(
        options: StickyContainerOptions<D, E, C>,
        children: impl IntoIterator<Item = HostProps<D, E, C>>,
    ) -> Result<Self> {
        let (child, binding) = validate_children(children)?;
        options.check_sorted();
        sdebug!(
            header = options.sticky_header_indices.is_some(),
            footer = options.sticky_footer_indices.is_some(),
            "StickyContainer::new"
        );
        Ok(Self {
            options,
            child,
            binding,
            host: None,
            header: TrackerSlot::new(EdgeKind::Header),
            footer: TrackerSlot::new(EdgeKind::Footer),
            visible_indices: Vec::new(),
        })
    }

    /// Applies new options and children.
    ///
    /// The children are validated first; on error nothing changes. On success the binding is
    /// replaced whole, so queries never mix old and new providers. Trackers for edges that are
    /// no longer configured are released.
    pub fn update(
        &mut self,
        options: StickyContainerOptions<D, E, C>,
        children: impl IntoIterator<Item = HostProps<D, E, C>>,
    ) -> Result<()> {
        let (child, binding) = validate_children(children)?;
        options.check_sorted();
        sdebug!(?binding, "StickyContainer::update");

        let ref_changed = !same_child_ref(self.child.child_ref.as_ref(), child.child_ref.as_ref());
        let previous = core::mem::replace(&mut self.child, child);
        self.binding = binding;
        self.options = options;

        if self.options.sticky_header_indices.is_none() && self.header.is_bound() {
            sdebug!("header tracker released");
            self.header.clear();
        }
        if self.options.sticky_footer_indices.is_none() && self.footer.is_bound() {
            sdebug!("footer tracker released");
            self.footer.clear();
        }

        if ref_changed && self.host.is_some() {
            if let Some(ChildRef::Callback(old)) = &previous.child_ref {
                old(None);
            }
            self.forward_host_ref();
        }
        Ok(())
    }

    /// Clones the current options and applies `f`, keeping the current child and binding.
    pub fn update_options(&mut self, f: impl FnOnce(&mut StickyContainerOptions<D, E, C>)) {
        let mut next = self.options.clone();
        f(&mut next);
        next.check_sorted();
        self.options = next;
        if self.options.sticky_header_indices.is_none() {
            self.header.clear();
        }
        if self.options.sticky_footer_indices.is_none() {
            self.footer.clear();
        }
    }

    pub fn options(&self) -> &StickyContainerOptions<D, E, C> {
        &self.options
    }

    pub fn child(&self) -> &HostProps<D, E, C> {
        &self.child
    }

    pub fn binding(&self) -> &HostBinding<D, E, C> {
        &self.binding
    }

    pub fn host(&self) -> Option<&HostHandle> {
        self.host.as_ref()
    }

    /// The most recent visible-index set reported by the host.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible_indices
    }

    /// Describes the container view and which trackers should be mounted.
    pub fn render(&self) -> StickyFrame<'_> {
        StickyFrame {
            style: self.options.style.unwrap_or_default(),
            header: self.options.sticky_header_indices.as_deref(),
            footer: self.options.sticky_footer_indices.as_deref(),
        }
    }

    /// The query surface over the current binding and host.
    pub fn accessor(&self) -> StickyAccessor<'_, D, E, C> {
        StickyAccessor::new(
            &self.binding,
            self.host.as_ref(),
            self.options.override_row_renderer.as_ref(),
            &self.visible_indices,
        )
    }

    /// Records the live host (or `None` once it unmounts) and forwards it to the embedding
    /// application's ref callback.
    pub fn set_host_ref(&mut self, host: Option<HostHandle>) {
        sdebug!(attached = host.is_some(), "host ref");
        self.host = host;
        self.forward_host_ref();
    }

    fn forward_host_ref(&self) {
        if let Some(ChildRef::Callback(f)) = &self.child.child_ref {
            f(self.host.as_ref());
        }
    }

    /// Binds the header tracker. Passing the same tracker again is a no-op; a different one
    /// (including the first) immediately receives the current visible-index set.
    ///
    /// A tracker is only accepted while header sticky indices are configured.
    pub fn set_header_ref(&mut self, tracker: Option<&TrackerRef<D, E, C>>) {
        self.bind(EdgeKind::Header, tracker);
    }

    /// Binds the footer tracker. See [`Self::set_header_ref`].
    pub fn set_footer_ref(&mut self, tracker: Option<&TrackerRef<D, E, C>>) {
        self.bind(EdgeKind::Footer, tracker);
    }

    fn bind(&mut self, edge: EdgeKind, tracker: Option<&TrackerRef<D, E, C>>) {
        let (configured, slot) = match edge {
            EdgeKind::Header => (
                self.options.sticky_header_indices.is_some(),
                &mut self.header,
            ),
            EdgeKind::Footer => (
                self.options.sticky_footer_indices.is_some(),
                &mut self.footer,
            ),
        };
        if !configured {
            if tracker.is_some() {
                swarn!(?edge, "no sticky indices configured for this edge; tracker not bound");
            }
            slot.clear();
            return;
        }
        if let Some(tracker) = slot.rebind(tracker) {
            sdebug!(
                ?edge,
                visible = self.visible_indices.len(),
                "tracker bound, replaying visible indices"
            );
            self.replay(&tracker);
        }
    }

    pub fn tracker(&self, edge: EdgeKind) -> Option<TrackerRef<D, E, C>> {
        match edge {
            EdgeKind::Header => self.header.get(),
            EdgeKind::Footer => self.footer.get(),
        }
    }

    fn replay(&self, tracker: &TrackerRef<D, E, C>) {
        tracker
            .borrow_mut()
            .on_visible_indices_changed(&self.visible_indices, &self.accessor());
    }

    /// Relays a visibility change from the host.
    ///
    /// The stored set is updated before any tracker is called, so trackers querying the
    /// accessor observe the new state. Trackers are called header first, then footer, then the
    /// embedding listener receives the untouched `(all, now, not_now)` triple.
    pub fn on_visible_indices_changed(&mut self, all: &[usize], now: &[usize], not_now: &[usize]) {
        strace!(
            all = all.len(),
            now = now.len(),
            not_now = not_now.len(),
            "on_visible_indices_changed"
        );
        self.visible_indices.clear();
        self.visible_indices.extend_from_slice(all);

        let source = self.accessor();
        self.for_each_tracker(|tracker| {
            tracker.on_visible_indices_changed(&self.visible_indices, &source);
        });

        if let Some(listener) = &self.child.on_visible_indices_changed {
            listener(all, now, not_now);
        }
    }

    /// Relays a scroll event from the host.
    ///
    /// Trackers only receive `offset_y`; the embedding listener receives the raw event and both
    /// offsets.
    pub fn on_scroll(&self, raw_event: &ScrollEvent, offset_x: f64, offset_y: f64) {
        strace!(offset_x, offset_y, "on_scroll");
        let source = self.accessor();
        self.for_each_tracker(|tracker| tracker.on_scroll(offset_y, &source));

        if let Some(listener) = &self.child.on_scroll {
            listener(raw_event, offset_x, offset_y);
        }
    }

    fn for_each_tracker(&self, mut f: impl FnMut(&mut dyn EdgeTracker<D, E, C>)) {
        for slot in [&self.header, &self.footer] {
            match slot.get() {
                Some(tracker) => f(&mut *tracker.borrow_mut()),
                None if slot.is_bound() => {
                    swarn!(edge = ?slot.edge(), "tracker dropped without unmount; skipping relay");
                }
                None => {}
            }
        }
    }
}

fn same_child_ref(a: Option<&ChildRef>, b: Option<&ChildRef>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(ChildRef::Callback(a)), Some(ChildRef::Callback(b))) => Rc::ptr_eq(a, b),
        (Some(ChildRef::Slot(a)), Some(ChildRef::Slot(b))) => Rc::ptr_eq(a, b),
        _ => false,
    }
}

impl<D, E, C> fmt::Debug for StickyContainer<D, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StickyContainer")
            .field("options", &self.options)
            .field("child", &self.child)
            .field("binding", &self.binding)
            .field("host", &self.host.is_some())
            .field("header", &self.header)
            .field("footer", &self.footer)
            .field("visible_indices", &self.visible_indices)
            .finish()
    }
}
