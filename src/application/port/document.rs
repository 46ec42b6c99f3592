// SPDX-License-Identifier: MPL-2.0
//! Document root port definition.
//!
//! The controllers mirror their state onto the document root element:
//! `data-theme` carries the active theme (CSS palettes key off it) and
//! `lang` carries the active language code. These two attributes are the
//! only hooks external styling and SEO machinery need.

use std::cell::RefCell;
use std::collections::BTreeMap;

/// Port for attributes on the document root element.
pub trait DocumentRoot {
    /// Sets attribute `name` to `value` on the document root.
    fn set_root_attribute(&self, name: &str, value: &str);
}

/// In-memory [`DocumentRoot`] that records attributes for inspection.
///
/// Used by unit tests and by the prerender binary, which reads the recorded
/// attributes back when emitting the `<html>` tag.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    attributes: RefCell<BTreeMap<String, String>>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads back a recorded attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }
}

impl DocumentRoot for MemoryDocument {
    fn set_root_attribute(&self, name: &str, value: &str) {
        self.attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_document_records_attributes() {
        let document = MemoryDocument::new();
        assert_eq!(document.attribute("data-theme"), None);

        document.set_root_attribute("data-theme", "dark");
        assert_eq!(document.attribute("data-theme").as_deref(), Some("dark"));

        document.set_root_attribute("data-theme", "light");
        assert_eq!(document.attribute("data-theme").as_deref(), Some("light"));
    }
}
