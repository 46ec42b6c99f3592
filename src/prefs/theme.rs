// SPDX-License-Identifier: MPL-2.0
//! Theme preference controller.
//!
//! Resolves the active color theme from persisted storage or the OS-level
//! color scheme, and keeps it mirrored into storage and the document root
//! `data-theme` attribute (the hook CSS palettes key off) on every change,
//! including the initial mount.

use crate::application::port::{DocumentRoot, PreferenceStore, SchemeDetector};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use tracing::debug;

thread_local! {
    static ACTIVE: RefCell<Vec<Rc<ThemePreference>>> = const { RefCell::new(Vec::new()) };
}

/// Active color theme. Exactly one of the two values at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Storage key carrying the theme.
    pub const KEY: &'static str = "theme";

    /// Document root attribute consumed by CSS selectors.
    pub const ATTRIBUTE: &'static str = "data-theme";

    /// Parses the wire form (`"light"`/`"dark"`). Anything else reads as
    /// absent.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single source of truth for the active color theme.
pub struct ThemePreference {
    theme: Cell<Theme>,
    store: Rc<dyn PreferenceStore>,
    document: Rc<dyn DocumentRoot>,
}

impl ThemePreference {
    /// Resolution priority for the initial theme.
    ///
    /// 1. Persisted storage key `theme`, if exactly `light`/`dark`.
    /// 2. Dark, when the OS reports a dark preference.
    /// 3. Light.
    #[must_use]
    pub fn resolve_initial(store: &dyn PreferenceStore, scheme: &dyn SchemeDetector) -> Theme {
        if let Some(theme) = store.get(Theme::KEY).as_deref().and_then(Theme::parse) {
            return theme;
        }
        if scheme.prefers_dark() {
            return Theme::Dark;
        }
        Theme::Light
    }

    /// The active theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Switches the active theme and re-syncs storage and the document
    /// attribute. Setting the current theme again is a no-op.
    pub fn set(&self, theme: Theme) {
        if self.theme.get() == theme {
            return;
        }
        debug!("ThemePreference::set: {} -> {}", self.theme.get(), theme);
        self.theme.set(theme);
        self.sync();
    }

    /// Switches to the other theme.
    pub fn toggle(&self) {
        self.set(self.theme.get().toggled());
    }

    fn sync(&self) {
        let theme = self.theme.get();
        self.store.set(Theme::KEY, theme.as_str());
        self.document
            .set_root_attribute(Theme::ATTRIBUTE, theme.as_str());
    }
}

/// Root-level owner of the theme controller.
pub struct ThemeProvider {
    preference: Rc<ThemePreference>,
}

impl ThemeProvider {
    /// Resolves the initial theme and issues the first sync, so storage
    /// and the document attribute are consistent from the first paint.
    pub fn mount(
        store: Rc<dyn PreferenceStore>,
        scheme: &dyn SchemeDetector,
        document: Rc<dyn DocumentRoot>,
    ) -> Self {
        let theme = ThemePreference::resolve_initial(store.as_ref(), scheme);
        debug!("ThemeProvider::mount: resolved initial theme {theme}");
        let preference = Rc::new(ThemePreference {
            theme: Cell::new(theme),
            store,
            document,
        });
        preference.sync();
        Self { preference }
    }

    /// Direct handle for root-level wiring. Consumers inside the tree use
    /// [`use_theme`].
    #[must_use]
    pub fn preference(&self) -> Rc<ThemePreference> {
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

/// The theme controller of the innermost active provider scope.
///
/// # Panics
///
/// Panics when called outside a [`ThemeProvider::scope`]. This is a
/// programming-error guard, not a recoverable condition.
#[must_use]
pub fn use_theme() -> Rc<ThemePreference> {
    ACTIVE
        .with(|stack| stack.borrow().last().cloned())
        .expect("use_theme must be used within ThemeProvider")
}
