// SPDX-License-Identifier: MPL-2.0
//! Page URL port definition and the [`PageUrl`] value type.
//!
//! The language controller mirrors the active language into the page URL's
//! `lang` query parameter using an in-place history replace: no navigation
//! entry is added and no reload happens. This module abstracts that access
//! behind [`PageLocation`] and provides [`PageUrl`], a small parsed form of
//! a page address (optional origin, path, ordered query parameters).

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Port for the current page URL.
///
/// `None` for this capability means a non-interactive render (no page
/// context at all), in which case language resolution short-circuits to the
/// default.
pub trait PageLocation {
    /// Reads the value of query parameter `name`, if present.
    fn query_param(&self, name: &str) -> Option<String>;

    /// Rewrites query parameter `name` to `value` in place
    /// (history-replace semantics).
    fn replace_query_param(&self, name: &str, value: &str);
}

/// A parsed page address: optional origin, path, and ordered query pairs.
///
/// Query parameters keep their relative order across rewrites; replacing a
/// parameter updates the first occurrence in place and drops duplicates,
/// matching `URLSearchParams.set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrl {
    origin: String,
    path: String,
    query: Vec<(String, String)>,
}

impl PageUrl {
    /// Parses a page address like `/`, `/?lang=en` or
    /// `https://example.com/page?a=1`.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let (base, query_str) = match input.split_once('?') {
            Some((base, query)) => (base, Some(query)),
            None => (input, None),
        };

        let (origin, path) = split_origin(base);

        let mut query = Vec::new();
        if let Some(qs) = query_str {
            for pair in qs.split('&').filter(|p| !p.is_empty()) {
                match pair.split_once('=') {
                    Some((name, value)) => query.push((name.to_string(), value.to_string())),
                    None => query.push((pair.to_string(), String::new())),
                }
            }
        }

        Self {
            origin,
            path: if path.is_empty() {
                "/".to_string()
            } else {
                path.to_string()
            },
            query,
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path plus query string, without the origin.
    #[must_use]
    pub fn relative(&self) -> String {
        let mut out = self.path.clone();
        if let Some(qs) = self.query_string() {
            out.push('?');
            out.push_str(&qs);
        }
        out
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces the first occurrence of `name` in place, dropping any
    /// duplicates; appends if absent.
    pub fn set(&mut self, name: &str, value: &str) {
        let mut found = false;
        self.query.retain_mut(|(n, v)| {
            if n == name {
                if found {
                    return false;
                }
                found = true;
                *v = value.to_string();
            }
            true
        });
        if !found {
            self.query.push((name.to_string(), value.to_string()));
        }
    }

    /// Removes every occurrence of `name`.
    pub fn remove(&mut self, name: &str) {
        self.query.retain(|(n, _)| n != name);
    }

    fn query_string(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }
        Some(
            self.query
                .iter()
                .map(|(n, v)| {
                    if v.is_empty() {
                        n.clone()
                    } else {
                        format!("{}={}", n, v)
                    }
                })
                .collect::<Vec<_>>()
                .join("&"),
        )
    }
}

impl fmt::Display for PageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin, self.relative())
    }
}

/// Splits `https://host/path` into origin and path; bare paths have an
/// empty origin.
fn split_origin(base: &str) -> (String, String) {
    if let Some(scheme_end) = base.find("://") {
        let after_scheme = scheme_end + 3;
        match base[after_scheme..].find('/') {
            Some(slash) => {
                let split = after_scheme + slash;
                (base[..split].to_string(), base[split..].to_string())
            }
            None => (base.to_string(), String::new()),
        }
    } else {
        (String::new(), base.to_string())
    }
}

/// Shared, mutable [`PageUrl`] implementing [`PageLocation`].
///
/// Clones share the same underlying URL, so a controller's in-place rewrite
/// is observable from the root that built the page.
#[derive(Debug, Clone)]
pub struct SharedPage {
    inner: Rc<RefCell<PageUrl>>,
}

impl SharedPage {
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(PageUrl::parse(input))),
        }
    }

    /// A copy of the URL as it currently stands.
    #[must_use]
    pub fn snapshot(&self) -> PageUrl {
        self.inner.borrow().clone()
    }
}

impl PageLocation for SharedPage {
    fn query_param(&self, name: &str) -> Option<String> {
        self.inner.borrow().get(name).map(str::to_string)
    }

    fn replace_query_param(&self, name: &str, value: &str) {
        self.inner.borrow_mut().set(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_path_without_query() {
        let url = PageUrl::parse("/");
        assert_eq!(url.path(), "/");
        assert_eq!(url.get("lang"), None);
        assert_eq!(url.to_string(), "/");
    }

    #[test]
    fn parse_reads_query_parameters() {
        let url = PageUrl::parse("/?lang=en&ref=news");
        assert_eq!(url.get("lang"), Some("en"));
        assert_eq!(url.get("ref"), Some("news"));
    }

    #[test]
    fn parse_absolute_url_keeps_origin() {
        let url = PageUrl::parse("https://example.com/page?a=1");
        assert_eq!(url.path(), "/page");
        assert_eq!(url.to_string(), "https://example.com/page?a=1");
        assert_eq!(url.relative(), "/page?a=1");
    }

    #[test]
    fn set_replaces_in_place_preserving_order() {
        let mut url = PageUrl::parse("/?a=1&lang=es&b=2");
        url.set("lang", "en");
        assert_eq!(url.to_string(), "/?a=1&lang=en&b=2");
    }

    #[test]
    fn set_appends_when_absent() {
        let mut url = PageUrl::parse("/?a=1");
        url.set("lang", "es");
        assert_eq!(url.to_string(), "/?a=1&lang=es");
    }

    #[test]
    fn set_drops_duplicate_occurrences() {
        let mut url = PageUrl::parse("/?lang=es&x=1&lang=en");
        url.set("lang", "en");
        assert_eq!(url.to_string(), "/?lang=en&x=1");
    }

    #[test]
    fn remove_strips_all_occurrences() {
        let mut url = PageUrl::parse("/?utm_source=a&x=1&utm_source=b");
        url.remove("utm_source");
        assert_eq!(url.to_string(), "/?x=1");
    }

    #[test]
    fn valueless_parameter_round_trips() {
        let mut url = PageUrl::parse("/?flag&x=1");
        assert_eq!(url.get("flag"), Some(""));
        url.remove("flag");
        assert_eq!(url.to_string(), "/?x=1");
    }

    #[test]
    fn shared_page_clones_observe_rewrites() {
        let page = SharedPage::parse("/?lang=es");
        let observer = page.clone();

        page.replace_query_param("lang", "en");
        assert_eq!(observer.snapshot().get("lang"), Some("en"));
    }

    #[test]
    fn empty_path_normalizes_to_root() {
        let url = PageUrl::parse("");
        assert_eq!(url.path(), "/");
    }
}
