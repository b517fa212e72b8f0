//! Header/footer edge trackers for the `sticky-container` crate.
//!
//! `sticky-container` coordinates events and answers queries but never decides what is pinned.
//! This crate provides that decision as a small, framework-neutral state machine:
//!
//! - [`StickyHeader`] pins the last sticky index that has scrolled past the top edge
//! - [`StickyFooter`] pins the first sticky index that has not yet scrolled into view at the
//!   bottom edge
//! - the next sticky item pushes the pinned one off its edge as it approaches
//!
//! Trackers hold no UI objects. Bind them to a container and read [`StickySnapshot`] (pinned
//! index, visibility, translation) each frame.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod object;
mod policy;

#[cfg(test)]
mod tests;

pub use object::{StickyFooter, StickyHeader, StickyObject, StickySnapshot};
pub use policy::{EdgePolicy, FooterPolicy, HeaderPolicy};
