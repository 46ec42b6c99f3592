// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests over the preference core: real settings-file storage,
//! a shared page URL, and the prerendered head block.

use folio_core::application::port::{
    DocumentRoot, FixedScheme, MemoryDocument, PreferenceStore, SharedPage,
};
use folio_core::config::{self, Config};
use folio_core::i18n::{Catalog, Lang};
use folio_core::infrastructure::SettingsStore;
use folio_core::prefs::{LanguageProvider, Theme, ThemeProvider};
use folio_core::seo::{HeadMeta, SiteMeta};
use std::rc::Rc;
use tempfile::tempdir;

fn catalog() -> Rc<Catalog> {
    Rc::new(Catalog::embedded().expect("embedded dictionaries parse"))
}

#[test]
fn language_preference_survives_a_reload() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    // First session: user switches to English.
    {
        let store = Rc::new(SettingsStore::from_path(path.clone()));
        let page = SharedPage::parse("/");
        let provider =
            LanguageProvider::mount(catalog(), store, Some(Rc::new(page)), None);
        provider.preference().set(Lang::En);
    }

    // Reload: no URL parameter, the stored preference wins.
    let store = Rc::new(SettingsStore::from_path(path));
    let page = SharedPage::parse("/");
    let provider = LanguageProvider::mount(catalog(), store, Some(Rc::new(page)), None);
    assert_eq!(provider.preference().lang(), Lang::En);
}

#[test]
fn url_parameter_outranks_the_settings_file() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");
    config::save_to_path(
        &Config {
            language: Some("es".to_string()),
            theme: None,
        },
        &path,
    )
    .expect("failed to seed settings");

    let store = Rc::new(SettingsStore::from_path(path));
    let page = SharedPage::parse("/?lang=en");
    let provider = LanguageProvider::mount(catalog(), store, Some(Rc::new(page)), None);
    assert_eq!(provider.preference().lang(), Lang::En);
}

#[test]
fn theme_preference_survives_a_reload_regardless_of_os_scheme() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    {
        let store = Rc::new(SettingsStore::from_path(path.clone()));
        let provider = ThemeProvider::mount(
            store,
            &FixedScheme(false),
            Rc::new(MemoryDocument::new()) as Rc<dyn DocumentRoot>,
        );
        provider.preference().set(Theme::Dark);
    }

    let store = Rc::new(SettingsStore::from_path(path));
    let provider = ThemeProvider::mount(
        store,
        &FixedScheme(false),
        Rc::new(MemoryDocument::new()) as Rc<dyn DocumentRoot>,
    );
    assert_eq!(provider.preference().theme(), Theme::Dark);
}

#[test]
fn controllers_own_disjoint_settings_fields() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let store = Rc::new(SettingsStore::from_path(path.clone()));
    let page = SharedPage::parse("/");
    let language = LanguageProvider::mount(
        catalog(),
        Rc::clone(&store) as Rc<dyn PreferenceStore>,
        Some(Rc::new(page)),
        None,
    );
    let theme = ThemeProvider::mount(
        Rc::clone(&store) as Rc<dyn PreferenceStore>,
        &FixedScheme(true),
        Rc::new(MemoryDocument::new()) as Rc<dyn DocumentRoot>,
    );

    language.preference().set(Lang::En);
    theme.preference().set(Theme::Light);

    let saved = config::load_from_path(&path).expect("settings file readable");
    assert_eq!(saved.language.as_deref(), Some("en"));
    assert_eq!(saved.theme.as_deref(), Some("light"));
}

#[test]
fn prerendered_head_matches_the_mounted_preferences() {
    let dir = tempdir().expect("failed to create temp dir");
    let store = Rc::new(SettingsStore::from_path(dir.path().join("settings.toml")));
    let page = SharedPage::parse("/?lang=en&utm_source=newsletter");
    let document = Rc::new(MemoryDocument::new());

    let theme_provider = ThemeProvider::mount(
        Rc::clone(&store) as Rc<dyn PreferenceStore>,
        &FixedScheme(true),
        Rc::clone(&document) as Rc<dyn DocumentRoot>,
    );
    let language_provider = LanguageProvider::mount(
        catalog(),
        store,
        Some(Rc::new(page.clone())),
        Some(Rc::clone(&document) as Rc<dyn DocumentRoot>),
    );

    let site = SiteMeta::default();
    let html = language_provider.scope(|| {
        theme_provider.scope(|| {
            let language = folio_core::prefs::use_language();
            let head = HeadMeta::build(
                &site,
                language.lang(),
                |key| language.translate(key),
                &page.snapshot(),
            );
            head.render_html(folio_core::prefs::use_theme().theme())
        })
    });

    assert!(html.starts_with("<html lang=\"en\" data-theme=\"dark\">"));
    assert!(html.contains("<title>Nicolas Duran Garces — Portfolio</title>"));
    // Tracking parameter stripped from the canonical URL, lang kept.
    assert!(html.contains(
        "<link rel=\"canonical\" href=\"https://nicolasdurangarces.com/?lang=en\">"
    ));
    assert!(!html.contains("utm_source"));

    // The document root attributes were driven by the controllers.
    assert_eq!(document.attribute("lang").as_deref(), Some("en"));
    assert_eq!(document.attribute("data-theme").as_deref(), Some("dark"));
}
