//! Format helpers for strings with interpolation.

use chrono::NaiveDate;
use vitrine_core::i18n::Language;

/// "Version 2" line under a legal document title.
pub fn version_line(lang: Language, version: &str) -> String {
    match lang {
        Language::Fr => format!("Version {version}"),
        Language::Ar => format!("الإصدار {version}"),
        Language::En => format!("Version {version}"),
    }
}

/// "Last updated" line, with the date in the reader's usual order.
pub fn last_updated(lang: Language, date: NaiveDate) -> String {
    match lang {
        Language::Fr => format!("Dernière mise à jour : {}", date.format("%d/%m/%Y")),
        Language::Ar => format!("آخر تحديث: {}", date.format("%Y/%m/%d")),
        Language::En => format!("Last updated: {}", date.format("%B %-d, %Y")),
    }
}

/// "Partner since 2020".
pub fn partner_since(lang: Language, year: &str) -> String {
    match lang {
        Language::Fr => format!("Partenaire depuis {year}"),
        Language::Ar => format!("شريك منذ {year}"),
        Language::En => format!("Partner since {year}"),
    }
}

/// Error line when the contact form could not be delivered.
pub fn contact_failed(lang: Language, reason: &str) -> String {
    match lang {
        Language::Fr => format!("Échec de l'envoi du message : {reason}"),
        Language::Ar => format!("تعذر إرسال الرسالة: {reason}"),
        Language::En => format!("Failed to send message: {reason}"),
    }
}
