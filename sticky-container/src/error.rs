//! Error types for the sticky container.

use core::fmt::{self, Write};

use bitflags::bitflags;
use thiserror::Error;

bitflags! {
    /// Host capabilities a child failed to provide.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MissingCapabilities: u8 {
        const DATA_SOURCE = 1 << 0;
        const LAYOUT_SOURCE = 1 << 1;
        const ROW_RENDERER = 1 << 2;
    }
}

impl fmt::Display for MissingCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        for (i, (name, _)) in self.iter_names().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            for c in name.chars() {
                f.write_char(c.to_ascii_lowercase())?;
            }
        }
        Ok(())
    }
}

/// Structural misuse of the container. Always fatal, never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The container needs exactly one virtualization host child that provides a data source,
    /// a layout source and a row renderer.
    #[error(
        "sticky container needs exactly one list host child with data_source, layout_source and \
         row_renderer (got {children} children, missing: {missing})"
    )]
    WrongChildType {
        children: usize,
        missing: MissingCapabilities,
    },

    /// The child's ref was supplied as an object slot instead of a callback.
    #[error("the list host child must receive its ref as a callback, not as an object slot")]
    RefNotAsFunction,
}

/// A requested index has no backing data.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("index {index} is out of range for a data source of length {len}")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StickyError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    IndexOutOfRange(#[from] IndexOutOfRange),
}

/// Result type for sticky container operations.
pub type Result<T> = core::result::Result<T, StickyError>;
