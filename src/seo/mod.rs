// SPDX-License-Identifier: MPL-2.0
//! SEO metadata generation.
//!
//! The head generator is a read-only consumer of the preference core: it
//! takes the active language, the `translate` lookup, and the current page
//! URL, and produces the localized `<head>` block (title, description,
//! canonical and alternate links, Open Graph/Twitter tags, JSON-LD schema
//! graph). It never mutates either controller.

pub mod head;
pub mod site;

pub use head::HeadMeta;
pub use site::SiteMeta;
