// SPDX-License-Identifier: MPL-2.0
//! Translation catalogs: per-language nested dictionaries and the dotted-key
//! lookup over them.
//!
//! Dictionaries live in `assets/i18n/<lang>.toml` and are embedded into the
//! binary at build time. Each file is an arbitrarily nested TOML table whose
//! leaves are display strings; a dotted key like `nav.about` addresses one
//! leaf. Dictionaries are loaded once and never mutated afterwards.

use crate::error::{Error, Result};
use crate::i18n::Lang;
use rust_embed::RustEmbed;
use std::collections::{BTreeMap, BTreeSet};
use toml::{Table, Value};
use tracing::warn;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// The per-language dictionaries.
#[derive(Debug, Default)]
pub struct Catalog {
    tables: BTreeMap<Lang, Table>,
}

impl Catalog {
    /// An empty catalog. Every lookup falls back to the key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads all embedded `assets/i18n/*.toml` dictionaries.
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded dictionary is not valid TOML.
    pub fn embedded() -> Result<Self> {
        let mut catalog = Self::new();
        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(stem) = filename.strip_suffix(".toml") else {
                continue;
            };
            let Some(lang) = Lang::parse(stem) else {
                warn!("Catalog::embedded: skipping unsupported locale file {filename}");
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                let src = String::from_utf8_lossy(content.data.as_ref());
                catalog.load_str(lang, &src)?;
            }
        }
        Ok(catalog)
    }

    /// Parses `src` as a nested TOML dictionary for `lang`.
    ///
    /// # Errors
    ///
    /// Returns an error when `src` is not valid TOML.
    pub fn load_str(&mut self, lang: Lang, src: &str) -> Result<()> {
        let table: Table =
            toml::from_str(src).map_err(|err| Error::Catalog(format!("{lang}: {err}")))?;
        self.tables.insert(lang, table);
        Ok(())
    }

    /// Walks `key` (split on `.`) through the dictionary of `lang`.
    ///
    /// Returns `None` at any break in the walk: missing language, missing
    /// node, a non-table node with segments left, or a terminal node that
    /// is not a string.
    #[must_use]
    pub fn lookup(&self, lang: Lang, key: &str) -> Option<&str> {
        let table = self.tables.get(&lang)?;
        let mut segments = key.split('.');
        let mut node = table.get(segments.next()?)?;
        for segment in segments {
            node = node.as_table()?.get(segment)?;
        }
        node.as_str()
    }

    /// Resolves `key` against the dictionary of `lang`, degrading to the
    /// key itself when the walk breaks (fallback-to-key policy).
    #[must_use]
    pub fn translate(&self, lang: Lang, key: &str) -> String {
        self.lookup(lang, key)
            .map_or_else(|| key.to_string(), str::to_string)
    }

    /// Whether a dictionary is loaded for `lang`.
    #[must_use]
    pub fn has_language(&self, lang: Lang) -> bool {
        self.tables.contains_key(&lang)
    }

    /// All dotted keys of `lang` that resolve to a string leaf.
    ///
    /// Used by the key-space audits that keep the two dictionaries in sync.
    #[must_use]
    pub fn leaf_keys(&self, lang: Lang) -> BTreeSet<String> {
        let mut keys = BTreeSet::new();
        if let Some(table) = self.tables.get(&lang) {
            collect_leaves(table, None, &mut keys);
        }
        keys
    }
}

fn collect_leaves(table: &Table, prefix: Option<&str>, out: &mut BTreeSet<String>) {
    for (name, value) in table {
        let dotted = match prefix {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name.clone(),
        };
        match value {
            Value::Table(nested) => collect_leaves(nested, Some(&dotted), out),
            Value::String(_) => {
                out.insert(dotted);
            }
            _ => {}
        }
    }
}
