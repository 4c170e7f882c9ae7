//! Site footer, appended to every page by [`load`](super::load).

use vitrine_core::content::ContactData;
use vitrine_core::i18n::Language;

use super::{contact_facts, Block, Fact};
use crate::fetch::Fetch;
use crate::i18n::t;

/// `(label key, href)` for the page-links column.
const PAGE_LINKS: &[(&str, &str)] = &[
    ("nav.partnerships", "/#partnerships"),
    ("nav.aboutUs", "/about-us"),
    ("nav.privacy", "/privacy-policy"),
    ("footer.termsOfService", "/terms-of-service"),
    ("nav.contact", "/contact"),
];

/// Footer blocks: blurb, page links, contact rows, social links, copyright.
/// Contact and social rows only appear when the contact fetch succeeded.
pub fn footer_blocks(lang: Language, contact: &Fetch<ContactData>) -> Vec<Block> {
    let mut blocks = vec![
        Block::paragraph(t("footer.description", lang)),
        Block::heading(t("footer.company", lang)),
    ];
    blocks.extend(
        PAGE_LINKS
            .iter()
            .map(|(key, href)| Block::link(t(key, lang), *href)),
    );

    if let Some(c) = contact.ready() {
        let mut facts = contact_facts(lang, c);
        if let Some(site) = c.website_label() {
            facts.push(Fact::new(t("footer.website", lang), site));
        }
        if !facts.is_empty() {
            blocks.push(Block::heading(t("footer.contactUs", lang)));
            blocks.push(Block::Facts { items: facts });
        }

        let social = c.social_links();
        if !social.is_empty() {
            blocks.push(Block::heading(t("footer.followUs", lang)));
            blocks.extend(social.into_iter().map(|(name, url)| Block::link(name, url)));
        }
    }

    blocks.push(Block::paragraph(t("footer.copyright", lang)));
    blocks
}
