//! Homepage: hero, legal teasers, contact section, partner strip.

use vitrine_core::content::{ContactData, PolicyDocument};
use vitrine_core::i18n::Language;
use vitrine_core::partners;

use super::contact::contact_blocks;
use super::{privacy_teaser, terms_teaser, Block, Page};
use crate::fetch::Fetch;
use crate::i18n::t;
use crate::routes::Route;

/// Assemble the homepage. Each section degrades on its own: one failed
/// fetch never blanks the others.
pub fn home_page(
    lang: Language,
    contact: &Fetch<ContactData>,
    privacy: &Fetch<Option<PolicyDocument>>,
    terms: &Fetch<Option<PolicyDocument>>,
) -> Page {
    let mut blocks = vec![
        Block::paragraph(t("hero.subtitle", lang)),
        Block::link(t("hero.cta", lang), Route::Contact.path()),
    ];

    blocks.push(Block::heading(t("partners.title", lang)));
    blocks.push(Block::paragraph(t("partners.subtitle", lang)));
    for p in partners::all() {
        blocks.push(Block::link(p.name, Route::Partner(p.id.to_string()).path()));
    }

    blocks.extend(privacy_teaser(lang, privacy));
    blocks.extend(terms_teaser(lang, terms));

    blocks.extend(contact_blocks(lang, contact));
    blocks.push(Block::paragraph(t("contact.getStartedDesc", lang)));
    blocks.push(Block::link(t("contact.title", lang), Route::Contact.path()));

    Page {
        path: Route::Home.path(),
        lang,
        title: t("hero.title", lang).to_string(),
        blocks,
    }
}
