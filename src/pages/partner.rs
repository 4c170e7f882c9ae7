//! Partner detail and not-found pages.
//!
//! Partner records are compiled-in English copy; only the surrounding
//! labels follow the reader's language.

use vitrine_core::i18n::Language;
use vitrine_core::partners::{self, Partner};

use super::{Block, Fact, Page};
use crate::i18n::{partner_since, t};
use crate::routes::Route;

fn detail_blocks(lang: Language, p: &Partner) -> Vec<Block> {
    let mut facts = vec![
        Fact::new(t("partner.industry", lang), p.industry),
        Fact::new(t("partner.founded", lang), p.founded),
        Fact::new(t("partner.headquarters", lang), p.headquarters),
    ];
    if let Some(site) = p.website {
        facts.push(Fact::new(t("partner.website", lang), site));
    }

    let mut blocks = vec![
        Block::paragraph(p.description),
        Block::Facts { items: facts },
        Block::heading(t("partner.about", lang)),
        Block::paragraph(p.about),
        Block::heading(t("partner.collaboration", lang)),
        Block::paragraph(partner_since(lang, p.collaboration.start_date)),
        Block::List {
            title: t("partner.services", lang).to_string(),
            items: p
                .collaboration
                .services
                .iter()
                .map(|s| s.to_string())
                .collect(),
        },
        Block::card(t("partner.impact", lang), p.collaboration.impact),
        Block::heading(t("partner.stats", lang)),
        Block::Facts {
            items: p.stats.iter().map(|s| Fact::new(s.label, s.value)).collect(),
        },
    ];
    if !p.gallery.is_empty() {
        blocks.push(Block::List {
            title: t("partner.gallery", lang).to_string(),
            items: p.gallery.iter().map(|g| g.to_string()).collect(),
        });
    }
    blocks
}

/// Detail page for `id`, or the partner not-found view.
pub fn partner_page(lang: Language, id: &str) -> Page {
    let path = Route::Partner(id.to_string()).path();
    let (title, mut blocks) = match partners::find_by_id(id) {
        Some(p) => (p.name.to_string(), detail_blocks(lang, p)),
        None => (
            t("partner.notFound", lang).to_string(),
            vec![Block::paragraph(t("partner.notFoundDesc", lang))],
        ),
    };
    blocks.push(Block::link(t("common.backToHome", lang), "/"));

    Page {
        path,
        lang,
        title,
        blocks,
    }
}

/// Catch-all page for unknown routes.
pub fn not_found_page(lang: Language) -> Page {
    Page {
        path: Route::NotFound.path(),
        lang,
        title: t("notFound.title", lang).to_string(),
        blocks: vec![
            Block::paragraph(t("notFound.message", lang)),
            Block::link(t("common.backToHome", lang), "/"),
        ],
    }
}
