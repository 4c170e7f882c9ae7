//! About-us page.

use vitrine_core::content::AboutUsData;
use vitrine_core::i18n::{resolve, Language};

use super::{loading_page, Block, Page};
use crate::fetch::Fetch;
use crate::i18n::t;
use crate::routes::Route;

pub fn about_page(lang: Language, about: &Fetch<Option<AboutUsData>>) -> Page {
    let path = Route::AboutUs.path();
    if about.is_loading() {
        return loading_page(&path, lang, t("aboutPage.title", lang));
    }

    let record = about.record();
    let title = resolve(
        record.and_then(|a| a.titre.as_ref()),
        lang,
        t("aboutPage.title", lang),
    );

    let mut blocks = Vec::new();
    if let Some(a) = record {
        let intro = resolve(a.contenu.as_ref(), lang, "");
        if !intro.is_empty() {
            blocks.push(Block::paragraph(intro));
        }
        let sections = [
            ("aboutPage.mission", &a.mission),
            ("aboutPage.vision", &a.vision),
            ("aboutPage.values", &a.valeurs),
            ("aboutPage.whoWeServe", &a.qui_nous_servons),
            ("aboutPage.whyChooseUs", &a.pourquoi_choisir_nous),
        ];
        for (key, field) in sections {
            let body = resolve(field.as_ref(), lang, "");
            if !body.is_empty() {
                blocks.push(Block::card(t(key, lang), body));
            }
        }
    }

    blocks.push(Block::heading(t("aboutPage.getInTouch", lang)));
    blocks.push(Block::paragraph(t("aboutPage.getInTouchText", lang)));
    for key in ["aboutPage.email", "aboutPage.phone", "aboutPage.address"] {
        blocks.push(Block::paragraph(t(key, lang)));
    }
    blocks.push(Block::link(t("common.backToHome", lang), "/"));

    Page {
        path,
        lang,
        title,
        blocks,
    }
}
