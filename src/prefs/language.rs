// SPDX-License-Identifier: MPL-2.0
//! Language preference controller.
//!
//! Resolves the active language from three ordered sources (URL query
//! parameter, persisted storage, hard-coded default), exposes the
//! [`LanguagePreference::translate`] lookup, and keeps the language
//! mirrored into storage, the page URL, and the document root `lang`
//! attribute on every change, including the initial mount.

use crate::application::port::{DocumentRoot, PageLocation, PreferenceStore};
use crate::i18n::{Catalog, Lang};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::debug;

thread_local! {
    static ACTIVE: RefCell<Vec<Rc<LanguagePreference>>> = const { RefCell::new(Vec::new()) };
}

/// Single source of truth for the active display language.
pub struct LanguagePreference {
    lang: Cell<Lang>,
    catalog: Rc<Catalog>,
    store: Rc<dyn PreferenceStore>,
    page: Option<Rc<dyn PageLocation>>,
    document: Option<Rc<dyn DocumentRoot>>,
}

impl LanguagePreference {
    /// Resolution priority for the initial language.
    ///
    /// 1. No page context at all (non-interactive render): the default.
    /// 2. URL query parameter `lang`, if exactly `es`/`en`.
    /// 3. Persisted storage key `lang`, if exactly `es`/`en`.
    /// 4. The default (`es`).
    ///
    /// A malformed value at any source reads as absent and falls through.
    #[must_use]
    pub fn resolve_initial(page: Option<&dyn PageLocation>, store: &dyn PreferenceStore) -> Lang {
        let Some(page) = page else {
            return Lang::default();
        };
        if let Some(lang) = page.query_param(Lang::KEY).as_deref().and_then(Lang::parse) {
            return lang;
        }
        if let Some(lang) = store.get(Lang::KEY).as_deref().and_then(Lang::parse) {
            return lang;
        }
        Lang::default()
    }

    /// The active language.
    #[must_use]
    pub fn lang(&self) -> Lang {
        self.lang.get()
    }

    /// Switches the active language and re-syncs storage, URL, and
    /// document. Setting the current language again is a no-op.
    pub fn set(&self, lang: Lang) {
        if self.lang.get() == lang {
            return;
        }
        debug!("LanguagePreference::set: {} -> {}", self.lang.get(), lang);
        self.lang.set(lang);
        self.sync();
    }

    /// Switches to the other language.
    pub fn toggle(&self) {
        self.set(self.lang.get().toggled());
    }

    /// Resolves a dotted dictionary key against the active language,
    /// falling back to the key itself when no translation exists.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.catalog.translate(self.lang.get(), key)
    }

    fn sync(&self) {
        let lang = self.lang.get();
        self.store.set(Lang::KEY, lang.as_str());
        if let Some(page) = &self.page {
            page.replace_query_param(Lang::KEY, lang.as_str());
        }
        if let Some(document) = &self.document {
            document.set_root_attribute(Lang::KEY, lang.as_str());
        }
    }
}

/// Root-level owner of the language controller.
///
/// Mounted once per page session; hands the controller to consumers
/// through [`LanguageProvider::scope`].
pub struct LanguageProvider {
    preference: Rc<LanguagePreference>,
}

impl LanguageProvider {
    /// Resolves the initial language and issues the first sync.
    ///
    /// `page` is `None` for non-interactive renders, which resolve to the
    /// default language.
    pub fn mount(
        catalog: Rc<Catalog>,
        store: Rc<dyn PreferenceStore>,
        page: Option<Rc<dyn PageLocation>>,
        document: Option<Rc<dyn DocumentRoot>>,
    ) -> Self {
        let lang = LanguagePreference::resolve_initial(page.as_deref(), store.as_ref());
        debug!("LanguageProvider::mount: resolved initial language {lang}");
        let preference = Rc::new(LanguagePreference {
            lang: Cell::new(lang),
            catalog,
            store,
            page,
            document,
        });
        preference.sync();
        Self { preference }
    }

    /// Direct handle for root-level wiring (the SEO head builder, the
    /// prerender binary). Consumers inside the tree use [`use_language`].
    #[must_use]
    pub fn preference(&self) -> Rc<LanguagePreference> {
        Rc::clone(&self.preference)
    }

    /// Runs `f` with this provider active on the current thread.
    pub fn scope<R>(&self, f: impl FnOnce() -> R) -> R {
        ACTIVE.with(|stack| stack.borrow_mut().push(Rc::clone(&self.preference)));
        let _guard = ScopeGuard;
        f()
    }
}

struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        ACTIVE.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// The language controller of the innermost active provider scope.
///
/// # Panics
///
/// Panics when called outside a [`LanguageProvider::scope`]. This is a
/// programming-error guard, not a recoverable condition.
#[must_use]
pub fn use_language() -> Rc<LanguagePreference> {
    ACTIVE
        .with(|stack| stack.borrow().last().cloned())
        .expect("use_language must be used within LanguageProvider")
}
