use folio_core::application::port::{MemoryDocument, SharedPage};
use folio_core::i18n::{Catalog, Lang};
use folio_core::infrastructure::{SettingsStore, SystemScheme};
use folio_core::prefs::{use_language, use_theme, LanguageProvider, Theme, ThemeProvider};
use folio_core::seo::{HeadMeta, SiteMeta};
use std::path::PathBuf;
use std::rc::Rc;

/// Prerenders the localized `<head>` block for one page address.
///
/// Flags: `--url <page>` (default `/`), `--lang es|en`, `--theme
/// light|dark`, `--config-dir <dir>`.
fn main() -> folio_core::error::Result<()> {
    let mut args = pico_args::Arguments::from_env();

    let lang_flag: Option<String> = args.opt_value_from_str("--lang").unwrap_or(None);
    let theme_flag: Option<String> = args.opt_value_from_str("--theme").unwrap_or(None);
    let url_flag: Option<String> = args.opt_value_from_str("--url").unwrap_or(None);
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or(None);

    let store = Rc::new(SettingsStore::open(config_dir.map(PathBuf::from))?);
    let page = SharedPage::parse(url_flag.as_deref().unwrap_or("/"));
    let document = Rc::new(MemoryDocument::new());
    let catalog = Rc::new(Catalog::embedded()?);

    let theme_provider = ThemeProvider::mount(store.clone(), &SystemScheme, document.clone());
    let language_provider = LanguageProvider::mount(
        catalog,
        store,
        Some(Rc::new(page.clone())),
        Some(document.clone()),
    );

    // Explicit flags act as a user switching preference after load.
    if let Some(lang) = lang_flag.as_deref().and_then(Lang::parse) {
        language_provider.preference().set(lang);
    }
    if let Some(theme) = theme_flag.as_deref().and_then(Theme::parse) {
        theme_provider.preference().set(theme);
    }

    let site = SiteMeta::default();
    let html = language_provider.scope(|| {
        theme_provider.scope(|| {
            let language = use_language();
            let head = HeadMeta::build(
                &site,
                language.lang(),
                |key| language.translate(key),
                &page.snapshot(),
            );
            head.render_html(use_theme().theme())
        })
    });

    print!("{html}");
    Ok(())
}
