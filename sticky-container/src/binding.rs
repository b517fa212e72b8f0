use alloc::sync::Arc;
use core::fmt;

use crate::{
    ChildRef, ConfigurationError, DataSource, HostProps, LayoutSource, MissingCapabilities,
    RowRenderer,
};

/// Snapshot of the attached host's contract.
///
/// A binding is only ever built whole from validated [`HostProps`] and replaced whole; there is
/// no way to patch a single provider in place.
pub struct HostBinding<D, E, C> {
    data_source: Arc<dyn DataSource<D>>,
    layout_source: Arc<dyn LayoutSource>,
    row_renderer: RowRenderer<D, E, C>,
    extended_state: Option<Arc<E>>,
    edge_offset: f64,
}

impl<D, E, C> HostBinding<D, E, C> {
    /// Checks that `props` satisfies the host capability set and captures it.
    pub fn extract(props: &HostProps<D, E, C>) -> Result<Self, ConfigurationError> {
        let mut missing = MissingCapabilities::empty();
        if props.data_source.is_none() {
            missing.insert(MissingCapabilities::DATA_SOURCE);
        }
        if props.layout_source.is_none() {
            missing.insert(MissingCapabilities::LAYOUT_SOURCE);
        }
        if props.row_renderer.is_none() {
            missing.insert(MissingCapabilities::ROW_RENDERER);
        }

        let (Some(data_source), Some(layout_source), Some(row_renderer)) = (
            props.data_source.clone(),
            props.layout_source.clone(),
            props.row_renderer.clone(),
        ) else {
            return Err(ConfigurationError::WrongChildType {
                children: 1,
                missing,
            });
        };

        if let Some(ChildRef::Slot(_)) = props.child_ref {
            return Err(ConfigurationError::RefNotAsFunction);
        }

        Ok(Self {
            data_source,
            layout_source,
            row_renderer,
            extended_state: props.extended_state.clone(),
            edge_offset: props.distance_from_window.unwrap_or(0.0),
        })
    }

    pub fn data_source(&self) -> &Arc<dyn DataSource<D>> {
        &self.data_source
    }

    pub fn layout_source(&self) -> &Arc<dyn LayoutSource> {
        &self.layout_source
    }

    pub fn row_renderer(&self) -> &RowRenderer<D, E, C> {
        &self.row_renderer
    }

    pub fn extended_state(&self) -> Option<&E> {
        self.extended_state.as_deref()
    }

    pub fn edge_offset(&self) -> f64 {
        self.edge_offset
    }
}

/// Validates the container's children and returns the single host child.
///
/// Exactly one child is accepted, and it must provide a data source, a layout source and a row
/// renderer.
pub fn validate_children<D, E, C>(
    children: impl IntoIterator<Item = HostProps<D, E, C>>,
) -> Result<(HostProps<D, E, C>, HostBinding<D, E, C>), ConfigurationError> {
    let mut children = children.into_iter();
    let child = match (children.next(), children.next()) {
        (Some(child), None) => child,
        (None, _) => {
            return Err(ConfigurationError::WrongChildType {
                children: 0,
                missing: MissingCapabilities::empty(),
            });
        }
        (Some(_), Some(_)) => {
            return Err(ConfigurationError::WrongChildType {
                children: 2 + children.count(),
                missing: MissingCapabilities::empty(),
            });
        }
    };
    let binding = HostBinding::extract(&child)?;
    Ok((child, binding))
}

impl<D, E, C> Clone for HostBinding<D, E, C> {
    fn clone(&self) -> Self {
        Self {
            data_source: Arc::clone(&self.data_source),
            layout_source: Arc::clone(&self.layout_source),
            row_renderer: Arc::clone(&self.row_renderer),
            extended_state: self.extended_state.clone(),
            edge_offset: self.edge_offset,
        }
    }
}

impl<D, E, C> fmt::Debug for HostBinding<D, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostBinding")
            .field("len", &self.data_source.len())
            .field("extended_state", &self.extended_state.is_some())
            .field("edge_offset", &self.edge_offset)
            .finish_non_exhaustive()
    }
}
