// SPDX-License-Identifier: MPL-2.0
//! Typed key space for first-party dictionary lookups.
//!
//! Callers inside the crate reference dictionary entries through these
//! constants instead of string literals, so a typo is caught by the
//! key-space audit below rather than silently falling back to the key at
//! runtime. The runtime fallback remains only as a defensive last resort.

pub const SEO_TITLE: &str = "seo.title";
pub const SEO_DESCRIPTION: &str = "seo.description";

pub const NAV_ABOUT: &str = "nav.about";
pub const NAV_SKILLS: &str = "nav.skills";
pub const NAV_EXPERIENCE: &str = "nav.experience";
pub const NAV_PROJECTS: &str = "nav.projects";
pub const NAV_CONTACT: &str = "nav.contact";

/// Every key declared above, for the key-space audit.
pub const ALL: &[&str] = &[
    SEO_TITLE,
    SEO_DESCRIPTION,
    NAV_ABOUT,
    NAV_SKILLS,
    NAV_EXPERIENCE,
    NAV_PROJECTS,
    NAV_CONTACT,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Lang};

    #[test]
    fn every_declared_key_resolves_in_both_dictionaries() {
        let catalog = Catalog::embedded().expect("embedded dictionaries parse");
        for key in ALL {
            for lang in [Lang::Es, Lang::En] {
                assert!(
                    catalog.lookup(lang, key).is_some(),
                    "key {key:?} does not resolve for {lang}"
                );
            }
        }
    }
}
