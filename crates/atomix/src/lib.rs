//! # Atomix - Atomic CSS Runtime
//!
//! The runtime half of the atomic-CSS toolkit: composes many resolved class
//! references into one winning style per CSS property, independent of source
//! declaration order, and renders the result as `class`/`style` attribute
//! strings.
//!
//! ## Quick Start
//!
//! ```rust
//! use acss::types::{PropEntry, PropertyMap};
//! use atomix::{StyleFragment, merge};
//!
//! let mut base = PropertyMap::new();
//! base.set("color", PropEntry::Present("x1f3d".into()));
//!
//! let mut hover = PropertyMap::new();
//! hover.set("color:hover", PropEntry::Present("x9ab2".into()));
//!
//! let merged = merge(
//!     &[StyleFragment::new(base), StyleFragment::new(hover)],
//!     None,
//! );
//! assert_eq!(merged.class_attribute, "x1f3d x9ab2");
//! ```
//!
//! Merging is pure and allocation-light; a fresh result is produced per
//! composition call and owns nothing beyond its two strings.

pub mod merge;

pub use merge::{MergedStyle, StyleFragment, merge};
