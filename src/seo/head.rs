// SPDX-License-Identifier: MPL-2.0
//! Localized `<head>` block generation.
//!
//! [`HeadMeta::build`] assembles everything the page head needs from the
//! active language, the translation lookup, and the current page URL. The
//! canonical URL is the page address with tracking parameters stripped;
//! hreflang alternates point the crawler at both language variants.

use crate::application::port::PageUrl;
use crate::i18n::{keys, Lang};
use crate::prefs::Theme;
use crate::seo::SiteMeta;
use chrono::Datelike;
use serde_json::json;

/// Query parameters never allowed into the canonical URL.
pub const TRACKING_PARAMS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_content",
    "utm_term",
    "ref",
];

const ROBOTS: &str = "index, follow, max-snippet:-1, max-image-preview:large, max-video-preview:-1";
const THEME_COLOR: &str = "#0b0c10";

/// Search descriptions longer than this get truncated with an ellipsis.
const DESCRIPTION_LIMIT: usize = 155;
const DESCRIPTION_TRUNCATED_LEN: usize = 152;

/// The assembled head metadata for one render of the page.
#[derive(Debug, Clone)]
pub struct HeadMeta {
    pub html_lang: Lang,
    pub title: String,
    pub description: String,
    /// Open Graph locale tag (`es_CO` or `en_US`).
    pub locale: String,
    pub canonical_url: String,
    pub og_image: String,
    pub keywords: Option<String>,
    pub robots: String,
    pub author: String,
    pub site_name: String,
    pub copyright: String,
    pub twitter: Option<String>,
    /// `(hreflang, href)` pairs for the alternate links.
    pub alternates: Vec<(String, String)>,
    /// JSON-LD schema graph (`Person`, `WebSite`, `BreadcrumbList`).
    pub schema_graph: serde_json::Value,
}

impl HeadMeta {
    /// Assembles the head metadata for the current page render.
    ///
    /// `translate` is the language controller's lookup; it is only read,
    /// never driven to mutate anything.
    pub fn build(
        site: &SiteMeta,
        lang: Lang,
        translate: impl Fn(&str) -> String,
        page: &PageUrl,
    ) -> Self {
        let locale = match lang {
            Lang::Es => site.locale.clone(),
            Lang::En => site.alternate_locale.clone(),
        };
        let title = translate(keys::SEO_TITLE);
        let description = truncate_description(&translate(keys::SEO_DESCRIPTION));
        let canonical_url = canonical_url(site, page);
        let og_image = site.absolute_url(&site.image);
        let keywords = if site.keywords.is_empty() {
            None
        } else {
            Some(site.keywords.join(", "))
        };
        let copyright = format!("{} {}", chrono::Utc::now().year(), site.author);
        let alternates = vec![
            ("es-CO".to_string(), site.absolute_url("/")),
            ("en-US".to_string(), site.absolute_url("/?lang=en")),
            ("x-default".to_string(), site.absolute_url("/")),
        ];
        let schema_graph = schema_graph(site, &locale, &description, &canonical_url, &translate);

        Self {
            html_lang: lang,
            title,
            description,
            locale,
            canonical_url,
            og_image,
            keywords,
            robots: ROBOTS.to_string(),
            author: site.author.clone(),
            site_name: site.site_name.clone(),
            copyright,
            twitter: site.twitter.clone(),
            alternates,
            schema_graph,
        }
    }

    /// Renders the `<html>` opening tag and the full `<head>` block.
    #[must_use]
    pub fn render_html(&self, theme: Theme) -> String {
        let mut out = String::new();
        let mut line = |s: String| {
            out.push_str(&s);
            out.push('\n');
        };

        line(format!(
            "<html lang=\"{}\" data-theme=\"{}\">",
            self.html_lang, theme
        ));
        line("<head>".to_string());
        line(format!("  <title>{}</title>", escape(&self.title)));
        line(meta_name("description", &self.description));
        if let Some(keywords) = &self.keywords {
            line(meta_name("keywords", keywords));
        }
        line(meta_name("robots", &self.robots));
        line(meta_name("author", &self.author));
        line(meta_name("application-name", &self.site_name));
        line(meta_name("theme-color", THEME_COLOR));
        line(meta_name("apple-mobile-web-app-title", &self.author));
        line(meta_name("format-detection", "telephone=no"));
        line(meta_name("copyright", &self.copyright));
        line(meta_name("viewport", "width=device-width, initial-scale=1"));
        line(format!(
            "  <link rel=\"canonical\" href=\"{}\">",
            escape(&self.canonical_url)
        ));
        for (hreflang, href) in &self.alternates {
            line(format!(
                "  <link rel=\"alternate\" hreflang=\"{}\" href=\"{}\">",
                escape(hreflang),
                escape(href)
            ));
        }

        line(meta_property("og:type", "website"));
        line(meta_property("og:site_name", &self.site_name));
        line(meta_property("og:title", &self.title));
        line(meta_property("og:description", &self.description));
        line(meta_property("og:url", &self.canonical_url));
        line(meta_property("og:locale", &self.locale));
        line(meta_property("og:image", &self.og_image));
        line(meta_property("og:image:secure_url", &self.og_image));
        line(meta_property(
            "og:image:alt",
            &format!("{} portfolio preview", self.author),
        ));

        line(meta_name("twitter:card", "summary_large_image"));
        if let Some(twitter) = &self.twitter {
            line(meta_name("twitter:site", twitter));
            line(meta_name("twitter:creator", twitter));
        }
        line(meta_name("twitter:title", &self.title));
        line(meta_name("twitter:description", &self.description));
        line(meta_name("twitter:image", &self.og_image));
        line(meta_name(
            "twitter:image:alt",
            &format!("{} portfolio preview", self.author),
        ));

        line(format!(
            "  <script type=\"application/ld+json\">{}</script>",
            self.schema_graph
        ));
        line("</head>".to_string());
        out
    }
}

/// Page address with tracking parameters stripped, made absolute.
fn canonical_url(site: &SiteMeta, page: &PageUrl) -> String {
    let mut cleaned = page.clone();
    for param in TRACKING_PARAMS {
        cleaned.remove(param);
    }
    site.absolute_url(&cleaned.relative())
}

fn truncate_description(raw: &str) -> String {
    if raw.chars().count() <= DESCRIPTION_LIMIT {
        return raw.to_string();
    }
    let mut truncated: String = raw.chars().take(DESCRIPTION_TRUNCATED_LEN).collect();
    truncated.push('…');
    truncated
}

fn schema_graph(
    site: &SiteMeta,
    locale: &str,
    description: &str,
    canonical_url: &str,
    translate: &impl Fn(&str) -> String,
) -> serde_json::Value {
    let breadcrumbs: Vec<serde_json::Value> = [
        ("#about", keys::NAV_ABOUT),
        ("#skills", keys::NAV_SKILLS),
        ("#experience", keys::NAV_EXPERIENCE),
        ("#projects", keys::NAV_PROJECTS),
        ("#contact", keys::NAV_CONTACT),
    ]
    .iter()
    .enumerate()
    .map(|(index, (id, key))| {
        json!({
            "@type": "ListItem",
            "position": index + 1,
            "name": translate(key),
            "item": site.absolute_url(&format!("/{id}")),
        })
    })
    .collect();

    json!({
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": "Person",
                "name": site.author,
                "jobTitle": site.job_title,
                "description": description,
                "url": canonical_url,
                "sameAs": site.same_as,
                "email": format!("mailto:{}", site.contact.email),
                "contactPoint": {
                    "@type": "ContactPoint",
                    "contactType": "professional inquiries",
                    "email": site.contact.email,
                    "description": site.contact.availability,
                },
                "address": {
                    "@type": "PostalAddress",
                    "addressLocality": site.contact.location,
                    "addressCountry": "CO",
                },
                "knowsAbout": site.keywords,
                "worksFor": {
                    "@type": "Organization",
                    "name": site.works_for,
                },
            },
            {
                "@type": "WebSite",
                "name": site.site_name,
                "url": site.absolute_url("/"),
                "inLanguage": locale,
                "description": description,
                "publisher": {
                    "@type": "Person",
                    "name": site.author,
                },
                "potentialAction": {
                    "@type": "ContactAction",
                    "target": site.absolute_url("/#contact"),
                },
            },
            {
                "@type": "BreadcrumbList",
                "itemListElement": breadcrumbs,
            },
        ],
    })
}

fn meta_name(name: &str, content: &str) -> String {
    format!(
        "  <meta name=\"{}\" content=\"{}\">",
        escape(name),
        escape(content)
    )
}

fn meta_property(property: &str, content: &str) -> String {
    format!(
        "  <meta property=\"{}\" content=\"{}\">",
        escape(property),
        escape(content)
    )
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;

    fn catalog() -> Catalog {
        Catalog::embedded().expect("embedded dictionaries parse")
    }

    fn build(lang: Lang, page: &str) -> HeadMeta {
        let catalog = catalog();
        HeadMeta::build(
            &SiteMeta::default(),
            lang,
            |key| catalog.translate(lang, key),
            &PageUrl::parse(page),
        )
    }

    #[test]
    fn title_and_locale_follow_the_language() {
        let head = build(Lang::Es, "/");
        assert_eq!(head.title, "Nicolas Duran Garces — Portafolio");
        assert_eq!(head.locale, "es_CO");

        let head = build(Lang::En, "/?lang=en");
        assert_eq!(head.title, "Nicolas Duran Garces — Portfolio");
        assert_eq!(head.locale, "en_US");
    }

    #[test]
    fn canonical_url_strips_tracking_params_and_keeps_others() {
        let head = build(Lang::Es, "/?utm_source=x&lang=es&utm_campaign=y&ref=news");
        assert_eq!(
            head.canonical_url,
            "https://nicolasdurangarces.com/?lang=es"
        );
    }

    #[test]
    fn canonical_url_of_clean_root_is_the_origin_root() {
        let head = build(Lang::Es, "/");
        assert_eq!(head.canonical_url, "https://nicolasdurangarces.com/");
    }

    #[test]
    fn alternates_cover_both_language_variants() {
        let head = build(Lang::Es, "/");
        assert_eq!(
            head.alternates,
            vec![
                (
                    "es-CO".to_string(),
                    "https://nicolasdurangarces.com/".to_string()
                ),
                (
                    "en-US".to_string(),
                    "https://nicolasdurangarces.com/?lang=en".to_string()
                ),
                (
                    "x-default".to_string(),
                    "https://nicolasdurangarces.com/".to_string()
                ),
            ]
        );
    }

    #[test]
    fn description_is_truncated_past_the_limit() {
        let long = "x".repeat(200);
        let head = HeadMeta::build(
            &SiteMeta::default(),
            Lang::Es,
            |key| {
                if key == keys::SEO_DESCRIPTION {
                    long.clone()
                } else {
                    key.to_string()
                }
            },
            &PageUrl::parse("/"),
        );
        assert_eq!(head.description.chars().count(), 153);
        assert!(head.description.ends_with('…'));
    }

    #[test]
    fn description_at_the_limit_is_kept_whole() {
        let exact = "y".repeat(155);
        let head = HeadMeta::build(
            &SiteMeta::default(),
            Lang::Es,
            |key| {
                if key == keys::SEO_DESCRIPTION {
                    exact.clone()
                } else {
                    key.to_string()
                }
            },
            &PageUrl::parse("/"),
        );
        assert_eq!(head.description, exact);
    }

    #[test]
    fn breadcrumbs_carry_localized_nav_labels() {
        let head = build(Lang::Es, "/");
        let graph = head.schema_graph["@graph"].as_array().expect("graph array");
        let breadcrumbs = &graph[2]["itemListElement"];
        assert_eq!(breadcrumbs[0]["name"], "Sobre mí");
        assert_eq!(
            breadcrumbs[0]["item"],
            "https://nicolasdurangarces.com/#about"
        );
        assert_eq!(breadcrumbs[4]["name"], "Contacto");
    }

    #[test]
    fn schema_graph_describes_person_and_website() {
        let head = build(Lang::En, "/?lang=en");
        let graph = head.schema_graph["@graph"].as_array().expect("graph array");
        assert_eq!(graph[0]["@type"], "Person");
        assert_eq!(graph[0]["email"], "mailto:niduga@outlook.es");
        assert_eq!(
            graph[0]["contactPoint"]["description"],
            "Disponible para roles backend senior, arquitectura y consultoría DevOps."
        );
        assert_eq!(graph[1]["@type"], "WebSite");
        assert_eq!(graph[1]["inLanguage"], "en_US");
    }

    #[test]
    fn render_html_carries_root_attributes_and_escapes_content() {
        let head = build(Lang::En, "/?lang=en");
        let html = head.render_html(Theme::Dark);

        assert!(html.starts_with("<html lang=\"en\" data-theme=\"dark\">"));
        assert!(html.contains("<title>Nicolas Duran Garces — Portfolio</title>"));
        assert!(html.contains("og:locale\" content=\"en_US\""));
        // No twitter handle configured, so no twitter:site tag.
        assert!(!html.contains("twitter:site"));
        assert!(html.contains("twitter:card"));
    }

    #[test]
    fn escape_covers_attribute_metacharacters() {
        assert_eq!(escape("a & b <c>\"d\""), "a &amp; b &lt;c&gt;&quot;d&quot;");
    }

    #[test]
    fn render_html_includes_json_ld_script() {
        let head = build(Lang::Es, "/");
        let html = head.render_html(Theme::Light);
        assert!(html.contains("<script type=\"application/ld+json\">"));
        assert!(html.contains("\"@context\":\"https://schema.org\""));
    }
}
