//! Privacy policy and terms of service: homepage teasers and full pages.
//!
//! Both documents share one shape, so both pages are driven by a
//! `LegalCopy` table that names their static strings and fallback cards.

use tracing::debug;
use vitrine_core::content::PolicyDocument;
use vitrine_core::i18n::{resolve, Language};

use super::{loading_page, Block, Page};
use crate::fetch::Fetch;
use crate::i18n::{last_updated, t, version_line};

/// Teaser bodies longer than this are cut.
const TEASER_BODY_CHARS: usize = 120;

/// Static copy for one legal document.
struct LegalCopy {
    path: &'static str,
    what: &'static str,
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    read_more: &'static str,
    /// `(anchor, title key, body key)` shown when the CMS has no sections.
    fallback: &'static [(&'static str, &'static str, &'static str)],
    /// How many CMS sections the homepage teaser shows.
    teaser_sections: usize,
    /// Teaser cards link into the full page and have truncated bodies.
    teaser_deep_links: bool,
}

const PRIVACY: LegalCopy = LegalCopy {
    path: "/privacy-policy",
    what: "privacy policy",
    title: "privacy.title",
    subtitle: "privacy.subtitle",
    description: "privacy.description",
    read_more: "privacy.readMore",
    fallback: &[
        (
            "data-protection",
            "privacy.dataProtection",
            "privacy.dataProtectionDesc",
        ),
        ("encryption", "privacy.encryption", "privacy.encryptionDesc"),
        (
            "transparency",
            "privacy.transparency",
            "privacy.transparencyDesc",
        ),
        ("compliance", "privacy.compliance", "privacy.complianceDesc"),
    ],
    teaser_sections: 4,
    teaser_deep_links: false,
};

const TERMS: LegalCopy = LegalCopy {
    path: "/terms-of-service",
    what: "terms of service",
    title: "terms.title",
    subtitle: "terms.subtitle",
    description: "terms.description",
    read_more: "terms.readMore",
    fallback: &[
        (
            "acceptance",
            "terms.acceptance.title",
            "terms.acceptance.content",
        ),
        (
            "user-rights",
            "terms.userRights.title",
            "terms.userRights.content",
        ),
        (
            "limitations",
            "terms.limitations.title",
            "terms.limitations.content",
        ),
    ],
    teaser_sections: 3,
    teaser_deep_links: true,
};

/// Cut `text` to `max` characters, trimmed, with a trailing `...`.
pub fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut.trim())
}

/// `(anchor, title, body)` for every titled CMS section, in source order.
fn cms_sections(doc: &PolicyDocument, lang: Language) -> Vec<(String, String, String)> {
    doc.sections()
        .enumerate()
        .map(|(i, (titre, paragraphe))| {
            (
                format!("section-{i}"),
                resolve(Some(titre), lang, ""),
                resolve(Some(paragraphe), lang, ""),
            )
        })
        .collect()
}

fn fallback_sections(copy: &LegalCopy, lang: Language) -> Vec<(String, String, String)> {
    copy.fallback
        .iter()
        .map(|(anchor, title, body)| {
            (
                anchor.to_string(),
                t(title, lang).to_string(),
                t(body, lang).to_string(),
            )
        })
        .collect()
}

fn teaser(copy: &LegalCopy, lang: Language, doc: &Fetch<Option<PolicyDocument>>) -> Vec<Block> {
    let mut sections = doc
        .record()
        .map(|d| cms_sections(d, lang))
        .unwrap_or_default();
    sections.truncate(copy.teaser_sections);
    if sections.is_empty() {
        sections = fallback_sections(copy, lang);
    }

    let path = copy.path;
    let mut blocks = vec![
        Block::heading(t(copy.title, lang)),
        Block::paragraph(t(copy.subtitle, lang)),
    ];
    for (anchor, title, body) in sections {
        if copy.teaser_deep_links {
            blocks.push(Block::anchored_card(
                title,
                truncate_text(&body, TEASER_BODY_CHARS),
                anchor.clone(),
            ));
            blocks.push(Block::link(
                t("terms.continueReading", lang),
                format!("{path}#{anchor}"),
            ));
        } else {
            blocks.push(Block::card(title, body));
        }
    }
    blocks.push(Block::paragraph(t(copy.description, lang)));
    blocks.push(Block::link(t(copy.read_more, lang), path));
    blocks
}

fn document_page(copy: &LegalCopy, lang: Language, doc: &Fetch<Option<PolicyDocument>>) -> Page {
    if doc.is_loading() {
        return loading_page(copy.path, lang, t(copy.title, lang));
    }

    let record = doc.record();
    let title = resolve(
        record.and_then(|d| d.titre.as_ref()),
        lang,
        t(copy.title, lang),
    );

    let mut blocks = Vec::new();
    let mut sections = Vec::new();
    if let Some(d) = record {
        if let Some(version) = &d.version {
            blocks.push(Block::paragraph(version_line(lang, version)));
        }
        if let Some(date) = d.created_on() {
            blocks.push(Block::paragraph(last_updated(lang, date)));
        }
        let intro = resolve(d.intro(), lang, "");
        if !intro.is_empty() {
            blocks.push(Block::paragraph(intro));
        }
        sections = cms_sections(d, lang);
    }
    if sections.is_empty() {
        debug!("{}: no sections from the CMS, using fallback copy", copy.what);
        sections = fallback_sections(copy, lang);
    }

    blocks.extend(
        sections
            .into_iter()
            .map(|(anchor, title, body)| Block::anchored_card(title, body, anchor)),
    );
    blocks.push(Block::link(t("common.backToHome", lang), "/"));

    Page {
        path: copy.path.to_string(),
        lang,
        title,
        blocks,
    }
}

/// Homepage privacy section: up to four CMS sections, else the fallback cards.
pub fn privacy_teaser(lang: Language, doc: &Fetch<Option<PolicyDocument>>) -> Vec<Block> {
    teaser(&PRIVACY, lang, doc)
}

/// Homepage terms section: up to three CMS sections with truncated bodies
/// and deep links, else the fallback cards.
pub fn terms_teaser(lang: Language, doc: &Fetch<Option<PolicyDocument>>) -> Vec<Block> {
    teaser(&TERMS, lang, doc)
}

/// Full privacy policy page.
pub fn privacy_page(lang: Language, doc: &Fetch<Option<PolicyDocument>>) -> Page {
    document_page(&PRIVACY, lang, doc)
}

/// Full terms of service page.
pub fn terms_page(lang: Language, doc: &Fetch<Option<PolicyDocument>>) -> Page {
    document_page(&TERMS, lang, doc)
}
