use alloc::rc::Rc;
use alloc::sync::Arc;
use core::cell::RefCell;
use core::fmt;

use crate::{DataSource, Dimension, Layout, LayoutSource, RowRenderer, ScrollEvent};

/// The live virtualization host (the list engine that measures, pools and mounts rows).
///
/// Every query may return `None` while the host has not measured or rendered yet.
pub trait VirtualHost {
    /// The measured layout of `index`, or `None` if it has not been measured (e.g. it is far
    /// outside the rendered window).
    fn layout(&self, index: usize) -> Option<Layout>;

    /// The size of the rendered viewport.
    fn rendered_size(&self) -> Option<Dimension>;

    /// The size of the whole scrollable content.
    fn content_dimension(&self) -> Option<Dimension>;
}

pub type HostHandle = Rc<dyn VirtualHost>;

/// Embedding listener for `(all, entered_now, exited_now)` visibility changes.
pub type VisibleIndicesListener = Arc<dyn Fn(&[usize], &[usize], &[usize]) + Send + Sync>;

/// Embedding listener for `(raw_event, offset_x, offset_y)` scroll events.
pub type ScrollListener = Arc<dyn Fn(&ScrollEvent, f64, f64) + Send + Sync>;

/// How the embedding application wants to receive the host reference.
#[derive(Clone)]
pub enum ChildRef {
    /// Called with the host handle whenever it is (re)delivered, and with `None` on unmount.
    Callback(Rc<dyn Fn(Option<&HostHandle>)>),
    /// An object slot. Not supported: the container needs to intercept the ref.
    Slot(Rc<RefCell<Option<HostHandle>>>),
}

impl ChildRef {
    pub fn callback(f: impl Fn(Option<&HostHandle>) + 'static) -> Self {
        Self::Callback(Rc::new(f))
    }
}

impl fmt::Debug for ChildRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callback(_) => f.write_str("Callback(..)"),
            Self::Slot(_) => f.write_str("Slot(..)"),
        }
    }
}

/// Configuration of the single host child of a sticky container.
///
/// The three capabilities are optional here so that a malformed child can be described and
/// rejected at attach time.
pub struct HostProps<D, E, C> {
    pub data_source: Option<Arc<dyn DataSource<D>>>,
    pub layout_source: Option<Arc<dyn LayoutSource>>,
    pub row_renderer: Option<RowRenderer<D, E, C>>,
    pub extended_state: Option<Arc<E>>,
    /// Distance of the list from its window edge; the pinned overlay sits this far from the
    /// viewport edge. Treated as `0.0` when absent.
    pub distance_from_window: Option<f64>,
    pub on_visible_indices_changed: Option<VisibleIndicesListener>,
    pub on_scroll: Option<ScrollListener>,
    pub child_ref: Option<ChildRef>,
}

impl<D, E, C> HostProps<D, E, C> {
    /// Creates props with all three required capabilities.
    pub fn new(
        data_source: impl DataSource<D> + 'static,
        layout_source: impl LayoutSource + 'static,
        row_renderer: impl Fn(&crate::LayoutType, &D, usize, Option<&E>) -> C + Send + Sync + 'static,
    ) -> Self {
        Self {
            data_source: Some(Arc::new(data_source)),
            layout_source: Some(Arc::new(layout_source)),
            row_renderer: Some(Arc::new(row_renderer)),
            ..Self::empty()
        }
    }

    /// Creates props with no capabilities at all.
    pub fn empty() -> Self {
        Self {
            data_source: None,
            layout_source: None,
            row_renderer: None,
            extended_state: None,
            distance_from_window: None,
            on_visible_indices_changed: None,
            on_scroll: None,
            child_ref: None,
        }
    }

    pub fn with_data_source(mut self, data_source: Option<Arc<dyn DataSource<D>>>) -> Self {
        self.data_source = data_source;
        self
    }

    pub fn with_layout_source(mut self, layout_source: Option<Arc<dyn LayoutSource>>) -> Self {
        self.layout_source = layout_source;
        self
    }

    pub fn with_row_renderer(mut self, row_renderer: Option<RowRenderer<D, E, C>>) -> Self {
        self.row_renderer = row_renderer;
        self
    }

    pub fn with_extended_state(mut self, extended_state: Option<E>) -> Self {
        self.extended_state = extended_state.map(Arc::new);
        self
    }

    pub fn with_distance_from_window(mut self, distance_from_window: Option<f64>) -> Self {
        self.distance_from_window = distance_from_window;
        self
    }

    pub fn with_on_visible_indices_changed(
        mut self,
        f: Option<impl Fn(&[usize], &[usize], &[usize]) + Send + Sync + 'static>,
    ) -> Self {
        self.on_visible_indices_changed = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scroll(
        mut self,
        f: Option<impl Fn(&ScrollEvent, f64, f64) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_child_ref(mut self, child_ref: Option<ChildRef>) -> Self {
        self.child_ref = child_ref;
        self
    }
}

impl<D, E, C> Clone for HostProps<D, E, C> {
    fn clone(&self) -> Self {
        Self {
            data_source: self.data_source.clone(),
            layout_source: self.layout_source.clone(),
            row_renderer: self.row_renderer.clone(),
            extended_state: self.extended_state.clone(),
            distance_from_window: self.distance_from_window,
            on_visible_indices_changed: self.on_visible_indices_changed.clone(),
            on_scroll: self.on_scroll.clone(),
            child_ref: self.child_ref.clone(),
        }
    }
}

impl<D, E, C> fmt::Debug for HostProps<D, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostProps")
            .field("data_source", &self.data_source.is_some())
            .field("layout_source", &self.layout_source.is_some())
            .field("row_renderer", &self.row_renderer.is_some())
            .field("extended_state", &self.extended_state.is_some())
            .field("distance_from_window", &self.distance_from_window)
            .field("child_ref", &self.child_ref)
            .finish_non_exhaustive()
    }
}
