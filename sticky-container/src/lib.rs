//! Headless coordination of sticky headers/footers over a virtualized list.
//!
//! For ready-made header/footer trackers, see the `sticky-tracker` crate.
//!
//! A [`StickyContainer`] sits between a virtualization host (the list engine that recycles rows
//! as the user scrolls) and two edge trackers (header and footer). It:
//! - validates that it wraps exactly one host providing data, layout types and a row renderer
//! - captures those providers as a [`HostBinding`], replaced whole on every update
//! - remembers the latest visible-index set and replays it to trackers that mount late
//! - relays visibility and scroll events to both trackers, then to the embedding listener
//! - answers tracker queries (layout, data, type, extended state, sizes) via [`StickyAccessor`]
//!
//! It is UI-agnostic and single-threaded. A UI layer is expected to provide:
//! - host events (`on_visible_indices_changed`, `on_scroll`)
//! - the live host handle and tracker handles as they mount/unmount
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod accessor;
mod binding;
mod container;
mod error;
mod host;
mod options;
mod source;
mod tracker;
mod types;


pub use accessor::StickyAccessor;
pub use binding::{HostBinding, validate_children};
pub use container::{StickyContainer, StickyFrame};
pub use error::{ConfigurationError, IndexOutOfRange, MissingCapabilities, Result, StickyError};
pub use host::{ChildRef, HostHandle, HostProps, ScrollListener, VirtualHost, VisibleIndicesListener};
pub use options::StickyContainerOptions;
pub use source::{DataSource, LayoutSource, RowRenderer};
pub use tracker::{EdgeTracker, TrackerRef};
pub use types::{ContainerStyle, Dimension, EdgeKind, Layout, LayoutType, Point, ScrollEvent};
