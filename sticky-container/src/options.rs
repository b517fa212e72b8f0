use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{ContainerStyle, LayoutType, RowRenderer};

/// Configuration for [`crate::StickyContainer`].
///
/// Like the host props, callback fields are stored in `Arc`s so the options are cheap to clone
/// and update.
pub struct StickyContainerOptions<D, E, C> {
    /// Indices pinned to the top edge once they scroll past it. Must be sorted ascending; every
    /// later index pushes the previous one off the edge. `None` means no header tracker.
    pub sticky_header_indices: Option<Vec<usize>>,
    /// Same as `sticky_header_indices`, pinned to the bottom edge.
    pub sticky_footer_indices: Option<Vec<usize>>,
    /// When set, trackers render pinned items with this instead of the host's row renderer.
    pub override_row_renderer: Option<RowRenderer<D, E, C>>,
    pub style: Option<ContainerStyle>,
}

impl<D, E, C> StickyContainerOptions<D, E, C> {
    pub fn new() -> Self {
        Self {
            sticky_header_indices: None,
            sticky_footer_indices: None,
            override_row_renderer: None,
            style: None,
        }
    }

    pub fn with_sticky_header_indices(mut self, indices: Option<Vec<usize>>) -> Self {
        self.sticky_header_indices = indices;
        self
    }

    pub fn with_sticky_footer_indices(mut self, indices: Option<Vec<usize>>) -> Self {
        self.sticky_footer_indices = indices;
        self
    }

    pub fn with_override_row_renderer(
        mut self,
        f: Option<impl Fn(&LayoutType, &D, usize, Option<&E>) -> C + Send + Sync + 'static>,
    ) -> Self {
        self.override_row_renderer = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_style(mut self, style: Option<ContainerStyle>) -> Self {
        self.style = style;
        self
    }

    pub(crate) fn check_sorted(&self) {
        for (_name, indices) in [
            ("sticky_header_indices", &self.sticky_header_indices),
            ("sticky_footer_indices", &self.sticky_footer_indices),
        ] {
            let Some(indices) = indices else {
                continue;
            };
            if !indices.windows(2).all(|w| w[0] <= w[1]) {
                swarn!(field = _name, ?indices, "sticky indices are not sorted ascending");
            }
        }
    }
}

impl<D, E, C> Default for StickyContainerOptions<D, E, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, E, C> Clone for StickyContainerOptions<D, E, C> {
    fn clone(&self) -> Self {
        Self {
            sticky_header_indices: self.sticky_header_indices.clone(),
            sticky_footer_indices: self.sticky_footer_indices.clone(),
            override_row_renderer: self.override_row_renderer.clone(),
            style: self.style,
        }
    }
}

impl<D, E, C> core::fmt::Debug for StickyContainerOptions<D, E, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StickyContainerOptions")
            .field("sticky_header_indices", &self.sticky_header_indices)
            .field("sticky_footer_indices", &self.sticky_footer_indices)
            .field(
                "override_row_renderer",
                &self.override_row_renderer.is_some(),
            )
            .field("style", &self.style)
            .finish()
    }
}
