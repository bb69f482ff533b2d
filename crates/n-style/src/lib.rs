//! # n-style — soft surface style resolution
//!
//! Turns an ambient lighting snapshot and an element's elevation into a
//! style descriptor: a background fill plus a pair of opposing shadows that
//! make a flat rectangle read as raised, inset, concave or convex.
//!
//! # Architecture
//!
//! ```text
//! AmbientContext { color, angle, elevation_depth, dent_depth }
//!     │                                   ElevationMode
//!     ▼                                        │
//! geometry.rs:   angle + depth → shadow offset │
//!     │                                        │
//!     ▼                                        ▼
//! resolve.rs:    mode → formula (enum-keyed table of plain fns)
//!     │          n_color::Color::adjust for the light/dark variants
//!     ▼
//! descriptor.rs: StyleDescriptor { background, box_shadow[2] } → CSS
//! ```
//!
//! Everything here is pure. The context is always passed explicitly, so
//! any number of renderers may resolve styles from the same snapshot
//! concurrently.

// Shadow offsets are dx/dy pairs; the names are the convention.
#![allow(clippy::similar_names)]

pub mod context;
pub mod descriptor;
pub mod elevation;
pub mod geometry;
pub mod resolve;

pub use context::AmbientContext;
pub use descriptor::{Background, LinearGradient, ShadowLayer, StyleDescriptor};
pub use elevation::{ElevationMode, UnknownElevation};
pub use resolve::{resolve, resolve_tag};
