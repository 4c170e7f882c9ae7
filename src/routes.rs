//! Site route table.

use std::fmt;

/// A page address on the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    PrivacyPolicy,
    TermsOfService,
    AboutUs,
    Contact,
    /// `/partner/:partnerId`. The id is not checked against the directory.
    Partner(String),
    NotFound,
}

impl Route {
    /// Match a request path. Query strings, fragments, and a trailing
    /// slash are ignored; anything unmatched is [`Route::NotFound`].
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["privacy-policy"] => Self::PrivacyPolicy,
            ["terms-of-service"] => Self::TermsOfService,
            ["about-us"] => Self::AboutUs,
            ["contact"] => Self::Contact,
            ["partner", id] => Self::Partner((*id).to_string()),
            _ => Self::NotFound,
        }
    }

    /// Canonical path. `NotFound` has none and renders as `*`.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::PrivacyPolicy => "/privacy-policy".to_string(),
            Self::TermsOfService => "/terms-of-service".to_string(),
            Self::AboutUs => "/about-us".to_string(),
            Self::Contact => "/contact".to_string(),
            Self::Partner(id) => format!("/partner/{id}"),
            Self::NotFound => "*".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
