// SPDX-License-Identifier: MPL-2.0
//! Site-wide SEO configuration.
//!
//! One value of [`SiteMeta`] describes the site: author identity, canonical
//! origin, locale pair, keywords, and social links. The default value
//! carries the live site's data.

/// Contact details published in the schema graph.
#[derive(Debug, Clone)]
pub struct Contact {
    pub email: String,
    pub location: String,
    pub availability: String,
}

/// Site-wide SEO configuration.
#[derive(Debug, Clone)]
pub struct SiteMeta {
    pub author: String,
    pub job_title: String,
    pub site_name: String,
    pub site_url: String,
    /// Open Graph locale for Spanish (`es_CO`).
    pub locale: String,
    /// Open Graph locale for English (`en_US`).
    pub alternate_locale: String,
    pub keywords: Vec<String>,
    pub twitter: Option<String>,
    /// Site-relative path of the preview image.
    pub image: String,
    pub same_as: Vec<String>,
    pub contact: Contact,
    pub works_for: String,
}

impl SiteMeta {
    /// Resolves `path` against the site origin. Absolute URLs pass
    /// through unchanged; the origin's trailing slash is normalized away.
    #[must_use]
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            return path.to_string();
        }
        let base = self.site_url.strip_suffix('/').unwrap_or(&self.site_url);
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            author: "Nicolas Duran Garces".to_string(),
            job_title: "Ingeniero de software backend".to_string(),
            site_name: "Nicolas Duran Garces · Software Engineer".to_string(),
            site_url: "https://nicolasdurangarces.com".to_string(),
            locale: "es_CO".to_string(),
            alternate_locale: "en_US".to_string(),
            keywords: [
                "Nicolas Duran Garces",
                "Ingeniero de software",
                "Software engineer Colombia",
                "Backend Python",
                "FastAPI",
                "Desarrollador React",
                "DevOps",
                "Arquitectura limpia",
                "Docker",
                "Nginx",
            ]
            .map(str::to_string)
            .to_vec(),
            twitter: None,
            image: "/assets/avatar.jpg".to_string(),
            same_as: [
                "https://github.com/NicolasDuranGarces",
                "https://www.linkedin.com/in/garcesnicolas/",
                "mailto:niduga@outlook.es",
            ]
            .map(str::to_string)
            .to_vec(),
            contact: Contact {
                email: "niduga@outlook.es".to_string(),
                location: "Bogotá, Colombia".to_string(),
                availability: "Disponible para roles backend senior, arquitectura y \
                               consultoría DevOps."
                    .to_string(),
            },
            works_for: "Freelance / Consultor independiente".to_string(),
        }
    }
}
