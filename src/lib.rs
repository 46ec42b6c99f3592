// SPDX-License-Identifier: MPL-2.0
//! `folio_core` is the localization and preference-persistence core of a
//! bilingual (Spanish/English) portfolio site.
//!
//! It provides the two preference controllers the rest of the site hangs
//! off: active display language (with dotted-key translation lookup) and
//! light/dark theme. On top of them sits the SEO head generator.
//! Host-environment access (durable storage, the page URL, the OS color
//! scheme, the document root) is injected through port traits, so the
//! resolution and sync logic runs unchanged in tests, in the prerender
//! binary, and behind a real browser host.

#![doc(html_root_url = "https://docs.rs/folio_core/0.3.0")]

pub mod application;
pub mod config;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod prefs;
pub mod seo;
