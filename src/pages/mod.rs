//! Page composition: CMS content merged with static fallback copy.
//!
//! Builders are pure functions of their [`Fetch`] inputs and the reader's
//! language; [`load`] is the only place that talks to a [`ContentApi`].
//! A failed or empty fetch always degrades to static copy, never to an error.

mod about;
mod contact;
mod footer;
mod home;
mod legal;
mod partner;


pub use about::about_page;
pub use contact::{contact_facts, contact_page};
pub use footer::footer_blocks;
pub use home::home_page;
pub use legal::{privacy_page, privacy_teaser, terms_page, terms_teaser, truncate_text};
pub use partner::{not_found_page, partner_page};

use serde::Serialize;
use vitrine_client::ContentApi;
use vitrine_core::i18n::Language;

use crate::fetch::Fetch;
use crate::i18n::t;
use crate::routes::Route;

/// A rendered page, independent of output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub path: String,
    pub lang: Language,
    pub title: String,
    pub blocks: Vec<Block>,
}

/// One displayable unit of a page, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading {
        text: String,
    },
    Paragraph {
        text: String,
    },
    Card {
        title: String,
        body: String,
        /// In-page anchor id (`/terms-of-service#acceptance`).
        #[serde(skip_serializing_if = "Option::is_none")]
        anchor: Option<String>,
    },
    Facts {
        items: Vec<Fact>,
    },
    List {
        title: String,
        items: Vec<String>,
    },
    Link {
        label: String,
        href: String,
    },
}

/// A label/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

impl Fact {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl Block {
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading { text: text.into() }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn card(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Card {
            title: title.into(),
            body: body.into(),
            anchor: None,
        }
    }

    pub fn anchored_card(
        title: impl Into<String>,
        body: impl Into<String>,
        anchor: impl Into<String>,
    ) -> Self {
        Self::Card {
            title: title.into(),
            body: body.into(),
            anchor: Some(anchor.into()),
        }
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Placeholder page while content is in flight.
fn loading_page(path: &str, lang: Language, title: &str) -> Page {
    Page {
        path: path.to_string(),
        lang,
        title: title.to_string(),
        blocks: vec![Block::paragraph(t("common.loading", lang))],
    }
}

/// Fetch whatever `route` needs, build its page and append the footer.
///
/// Every page fetches the contact record for its footer. Requests for one
/// page run concurrently; they are independent and may complete in any
/// order.
pub async fn load(route: &Route, api: &dyn ContentApi, lang: Language) -> Page {
    let (mut page, contact) = match route {
        Route::Home => {
            let (contact, privacy, terms) = tokio::join!(
                api.contact_info(),
                api.privacy_policy(),
                api.terms_of_service()
            );
            let contact = Fetch::from_result("contact", contact);
            let page = home_page(
                lang,
                &contact,
                &Fetch::from_result("privacy policy", privacy),
                &Fetch::from_result("terms of service", terms),
            );
            (page, contact)
        }
        Route::PrivacyPolicy => {
            let (doc, contact) = tokio::join!(api.privacy_policy(), api.contact_info());
            let doc = Fetch::from_result("privacy policy", doc);
            (privacy_page(lang, &doc), Fetch::from_result("contact", contact))
        }
        Route::TermsOfService => {
            let (doc, contact) = tokio::join!(api.terms_of_service(), api.contact_info());
            let doc = Fetch::from_result("terms of service", doc);
            (terms_page(lang, &doc), Fetch::from_result("contact", contact))
        }
        Route::AboutUs => {
            let (about, contact) = tokio::join!(api.about_us(), api.contact_info());
            let about = Fetch::from_result("about us", about);
            (about_page(lang, &about), Fetch::from_result("contact", contact))
        }
        Route::Contact => {
            let contact = Fetch::from_result("contact", api.contact_info().await);
            (contact_page(lang, &contact), contact)
        }
        Route::Partner(id) => (
            partner_page(lang, id),
            Fetch::from_result("contact", api.contact_info().await),
        ),
        Route::NotFound => (
            not_found_page(lang),
            Fetch::from_result("contact", api.contact_info().await),
        ),
    };
    page.blocks.extend(footer_blocks(lang, &contact));
    page
}
