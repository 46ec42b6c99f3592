// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The preference controllers are pure state machines over these traits, so
//! their resolution and sync logic is unit-testable without a real browser
//! host. Infrastructure adapters provide the concrete implementations.
//!
//! # Available Ports
//!
//! - [`storage`]: Durable key-value preference store (browser local storage)
//! - [`page`]: Page URL access (query parameter read / history-replace write)
//! - [`scheme`]: OS-level color scheme probe
//! - [`document`]: Document root attributes (`lang`, `data-theme`)
//!
//! # Design Notes
//!
//! - The execution model is single-threaded and event-driven, so trait
//!   methods take `&self` and adapters use interior mutability
//! - Writes are fire-and-forget: the underlying host primitives are assumed
//!   local and non-failing, so no write surfaces an error to the caller

pub mod document;
pub mod page;
pub mod scheme;
pub mod storage;

// Re-export main types for convenience
pub use document::{DocumentRoot, MemoryDocument};
pub use page::{PageLocation, PageUrl, SharedPage};
pub use scheme::{FixedScheme, SchemeDetector};
pub use storage::{MemoryStore, PreferenceStore};
