// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the site core.
//!
//! This module provides the bilingual translation layer:
//!
//! - [`Lang`], the enumerated display language (Spanish or English)
//! - [`catalog`], nested TOML dictionaries embedded in the binary and the
//!   dotted-key lookup over them
//! - [`keys`], the typed key space used by first-party callers
//!
//! A lookup that breaks at any depth degrades to the key itself instead of
//! failing, so a missing dictionary entry shows up in the rendered output
//! as a visible-but-harmless label.

pub mod catalog;
pub mod keys;

pub use catalog::Catalog;

use std::fmt;

/// Active display language. Exactly one of the two values at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lang {
    #[default]
    Es,
    En,
}

impl Lang {
    /// Storage key and URL query parameter carrying the language.
    pub const KEY: &'static str = "lang";

    /// Parses the wire form (`"es"`/`"en"`). Anything else, including a
    /// value corrupted by external tooling, reads as absent.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "es" => Some(Lang::Es),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }

    /// The other language.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Lang::Es => Lang::En,
            Lang::En => Lang::Es,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
