//! Contact details: homepage section and the contact page.

use vitrine_core::content::ContactData;
use vitrine_core::i18n::{resolve, Language};

use super::{loading_page, Block, Fact, Page};
use crate::fetch::Fetch;
use crate::i18n::t;
use crate::routes::Route;

/// Label/value rows for whatever contact details the CMS returned.
/// Rows without a value are left out.
pub fn contact_facts(lang: Language, contact: &ContactData) -> Vec<Fact> {
    let mut facts = Vec::new();
    if let Some(email) = &contact.email {
        facts.push(Fact::new(t("contact.email", lang), email));
    }

    let phones: Vec<&str> = [&contact.telephone_1, &contact.telephone_2]
        .into_iter()
        .filter_map(|p| p.as_deref())
        .collect();
    if !phones.is_empty() {
        facts.push(Fact::new(t("contact.phone", lang), phones.join(" / ")));
    }

    if let Some(fax) = &contact.telephone_fixe {
        facts.push(Fact::new(t("contact.fax", lang), fax));
    }

    if contact.adresse.is_some() {
        let location: Vec<String> = [&contact.adresse, &contact.ville]
            .into_iter()
            .map(|f| resolve(f.as_ref(), lang, ""))
            .filter(|s| !s.is_empty())
            .collect();
        if !location.is_empty() {
            facts.push(Fact::new(t("contact.location", lang), location.join(", ")));
        }
    }

    if let Some(hours) = &contact.horaires {
        facts.push(Fact::new(t("contact.hours", lang), hours));
    }
    facts
}

/// Section heading, welcome line and detail rows shared by both views.
pub(super) fn contact_blocks(lang: Language, contact: &Fetch<ContactData>) -> Vec<Block> {
    let data = contact.ready();
    let subtitle = resolve(
        data.and_then(|c| c.message_acceuil.as_ref()),
        lang,
        t("contact.subtitle", lang),
    );

    let mut blocks = vec![
        Block::heading(t("contact.title", lang)),
        Block::paragraph(subtitle),
    ];
    let facts = data.map(|c| contact_facts(lang, c)).unwrap_or_default();
    if !facts.is_empty() {
        blocks.push(Block::Facts { items: facts });
    }
    blocks
}

pub fn contact_page(lang: Language, contact: &Fetch<ContactData>) -> Page {
    let path = Route::Contact.path();
    if contact.is_loading() {
        return loading_page(&path, lang, t("contact.title", lang));
    }

    let mut blocks = contact_blocks(lang, contact);
    // The heading doubles as the page title.
    blocks.remove(0);
    blocks.push(Block::paragraph(t("contact.getStartedDesc", lang)));
    blocks.push(Block::paragraph(t("contact.formHint", lang)));
    blocks.push(Block::link(t("common.backToHome", lang), "/"));

    Page {
        path,
        lang,
        title: t("contact.title", lang).to_string(),
        blocks,
    }
}
