use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{IndexOutOfRange, LayoutType};

/// Resolves item payloads by index.
pub trait DataSource<D>: Send + Sync {
    /// Number of items backing the list.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the payload at `index`, or [`IndexOutOfRange`] when `index >= len()`.
    fn get_data_for_index(&self, index: usize) -> Result<D, IndexOutOfRange>;
}

impl<D: Clone + Send + Sync> DataSource<D> for Vec<D> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get_data_for_index(&self, index: usize) -> Result<D, IndexOutOfRange> {
        self.get(index).cloned().ok_or(IndexOutOfRange {
            index,
            len: Vec::len(self),
        })
    }
}

impl<D: Clone + Send + Sync> DataSource<D> for Arc<[D]> {
    fn len(&self) -> usize {
        <[D]>::len(self)
    }

    fn get_data_for_index(&self, index: usize) -> Result<D, IndexOutOfRange> {
        self.get(index).cloned().ok_or(IndexOutOfRange {
            index,
            len: <[D]>::len(self),
        })
    }
}

/// Resolves the renderer dispatch key of an item.
pub trait LayoutSource: Send + Sync {
    fn get_layout_type_for_index(&self, index: usize) -> LayoutType;
}

impl<F> LayoutSource for F
where
    F: Fn(usize) -> LayoutType + Send + Sync,
{
    fn get_layout_type_for_index(&self, index: usize) -> LayoutType {
        self(index)
    }
}

/// Produces visual content for `(type, data, index, extended_state)`.
pub type RowRenderer<D, E, C> = Arc<dyn Fn(&LayoutType, &D, usize, Option<&E>) -> C + Send + Sync>;
