// SPDX-License-Identifier: MPL-2.0
//! Application layer - host-environment capabilities.
//!
//! This module contains the port traits the preference controllers depend on:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - The preference controllers (`prefs`) depend only on the port traits
//! - Infrastructure adapters implement the port traits
//! - The prerender binary wires concrete adapters into the controllers

pub mod port;
