use core::fmt;

use crate::{
    Dimension, HostBinding, HostHandle, IndexOutOfRange, Layout, LayoutType, RowRenderer,
};

/// The read-only query surface handed to edge trackers.
///
/// An accessor borrows the container's current binding, so every answer it gives comes from a
/// single, consistent set of providers. All queries are side-effect free.
pub struct StickyAccessor<'a, D, E, C> {
    binding: &'a HostBinding<D, E, C>,
    host: Option<&'a HostHandle>,
    override_row_renderer: Option<&'a RowRenderer<D, E, C>>,
    visible_indices: &'a [usize],
}

impl<'a, D, E, C> StickyAccessor<'a, D, E, C> {
    pub(crate) fn new(
        binding: &'a HostBinding<D, E, C>,
        host: Option<&'a HostHandle>,
        override_row_renderer: Option<&'a RowRenderer<D, E, C>>,
        visible_indices: &'a [usize],
    ) -> Self {
        Self {
            binding,
            host,
            override_row_renderer,
            visible_indices,
        }
    }

    /// The measured layout of `index`.
    ///
    /// `None` when no host is attached yet or the host has not measured `index`. Trackers treat
    /// this as "do not pin yet".
    pub fn layout_for_index(&self, index: usize) -> Option<Layout> {
        self.host.and_then(|host| host.layout(index))
    }

    /// The payload at `index`, straight from the bound data source.
    pub fn data_for_index(&self, index: usize) -> Result<D, IndexOutOfRange> {
        self.binding.data_source().get_data_for_index(index)
    }

    pub fn layout_type_for_index(&self, index: usize) -> LayoutType {
        self.binding
            .layout_source()
            .get_layout_type_for_index(index)
    }

    pub fn extended_state(&self) -> Option<&'a E> {
        self.binding.extended_state()
    }

    pub fn rendered_viewport_size(&self) -> Option<Dimension> {
        self.host.and_then(|host| host.rendered_size())
    }

    pub fn content_size(&self) -> Option<Dimension> {
        self.host.and_then(|host| host.content_dimension())
    }

    /// The host's row renderer.
    pub fn row_renderer(&self) -> &'a RowRenderer<D, E, C> {
        self.binding.row_renderer()
    }

    pub fn override_row_renderer(&self) -> Option<&'a RowRenderer<D, E, C>> {
        self.override_row_renderer
    }

    /// The renderer trackers must use for pinned items: the override when configured, the
    /// host's row renderer otherwise.
    pub fn sticky_row_renderer(&self) -> &'a RowRenderer<D, E, C> {
        self.override_row_renderer
            .unwrap_or_else(|| self.binding.row_renderer())
    }

    /// Renders `index` with [`Self::sticky_row_renderer`].
    pub fn render_index(&self, index: usize) -> Result<C, IndexOutOfRange> {
        let data = self.data_for_index(index)?;
        let layout_type = self.layout_type_for_index(index);
        let render = self.sticky_row_renderer();
        Ok(render(&layout_type, &data, index, self.extended_state()))
    }

    /// Fixed distance between a pinned overlay and its viewport edge.
    pub fn edge_offset(&self) -> f64 {
        self.binding.edge_offset()
    }

    /// The most recent visible-index set, already updated for the event being relayed.
    pub fn visible_indices(&self) -> &'a [usize] {
        self.visible_indices
    }

    pub fn len(&self) -> usize {
        self.binding.data_source().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<D, E, C> Clone for StickyAccessor<'_, D, E, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, E, C> Copy for StickyAccessor<'_, D, E, C> {}

impl<D, E, C> fmt::Debug for StickyAccessor<'_, D, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StickyAccessor")
            .field("binding", self.binding)
            .field("host", &self.host.is_some())
            .field(
                "override_row_renderer",
                &self.override_row_renderer.is_some(),
            )
            .field("visible_indices", &self.visible_indices)
            .finish()
    }
}
