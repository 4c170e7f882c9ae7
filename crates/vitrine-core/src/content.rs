//! CMS content records.
//!
//! Every field is optional: pages degrade to static copy when the API
//! omits something, so deserialization is deliberately lenient and never
//! rejects a record over a missing or oddly shaped field.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::VitrineError;
use crate::i18n::MultilingualText;

/// One displayable unit of long-form content. Source order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSection {
    Intro {
        text: MultilingualText,
    },
    Section {
        titre: MultilingualText,
        paragraphe: MultilingualText,
    },
    /// A section type this engine does not render.
    Other(String),
}

impl ContentSection {
    /// Parse one entry of a `contenu` list. Non-objects yield `None`.
    pub fn from_json(item: &Value) -> Option<Self> {
        let obj = item.as_object()?;
        let field = |name: &str| {
            obj.get(name)
                .map(MultilingualText::from_json)
                .unwrap_or_default()
        };
        let kind = obj.get("type").and_then(Value::as_str).unwrap_or_default();
        Some(match kind {
            "intro" => {
                let text = field("text");
                // Older records put the intro body under `paragraphe`.
                let text = if text.is_empty() {
                    field("paragraphe")
                } else {
                    text
                };
                Self::Intro { text }
            }
            "section" => Self::Section {
                titre: field("titre"),
                paragraphe: field("paragraphe"),
            },
            other => Self::Other(other.to_string()),
        })
    }

    /// Normalize a whole `contenu` value.
    ///
    /// A list is parsed entry by entry. A bare multilingual object becomes a
    /// single intro section. Anything else is empty.
    pub fn list_from_json(value: &Value) -> Vec<Self> {
        match value {
            Value::Array(items) => items.iter().filter_map(Self::from_json).collect(),
            Value::Object(_) => {
                let text = MultilingualText::from_json(value);
                if text.is_empty() {
                    Vec::new()
                } else {
                    vec![Self::Intro { text }]
                }
            }
            _ => Vec::new(),
        }
    }
}

impl<'de> Deserialize<'de> for ContentSection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value).unwrap_or_else(|| Self::Other(String::new())))
    }
}

fn sections<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<ContentSection>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(ContentSection::list_from_json(&value))
}

/// Only a JSON `true` marks a record active. `1`, `"true"` and friends do not.
fn active_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        Value::Null => None,
        _ => Some(false),
    })
}

/// Accept strings and numbers (`"2"` or `2`), drop everything else.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Contact details shown on the homepage and the contact page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactData {
    #[serde(deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub telephone_1: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub telephone_2: Option<String>,
    /// Landline, shown as "Fax".
    #[serde(deserialize_with = "lenient_string")]
    pub telephone_fixe: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub horaires: Option<String>,
    pub adresse: Option<MultilingualText>,
    pub ville: Option<MultilingualText>,
    pub message_acceuil: Option<MultilingualText>,
    #[serde(deserialize_with = "lenient_string")]
    pub site_web: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub facebook: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub instagram: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub linkedin: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub x: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub tiktok: Option<String>,
}

impl ContactData {
    /// Website without its `http://` or `https://` scheme, for display.
    pub fn website_label(&self) -> Option<&str> {
        let site = self.site_web.as_deref()?;
        Some(
            site.strip_prefix("https://")
                .or_else(|| site.strip_prefix("http://"))
                .unwrap_or(site),
        )
    }

    /// `(network, url)` for every social profile the CMS returned.
    pub fn social_links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Facebook", &self.facebook),
            ("Instagram", &self.instagram),
            ("LinkedIn", &self.linkedin),
            ("X", &self.x),
            ("TikTok", &self.tiktok),
        ]
        .into_iter()
        .filter_map(|(name, url)| url.as_deref().map(|u| (name, u)))
        .collect()
    }
}

/// A versioned legal document (privacy policy or terms of service).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PolicyDocument {
    pub titre: Option<MultilingualText>,
    #[serde(deserialize_with = "sections")]
    pub contenu: Vec<ContentSection>,
    #[serde(deserialize_with = "lenient_string")]
    pub version: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub date_creation: Option<String>,
    #[serde(deserialize_with = "active_flag")]
    pub active: Option<bool>,
}

pub type PrivacyPolicyData = PolicyDocument;
pub type TermsData = PolicyDocument;

impl PolicyDocument {
    /// Only an explicit `true` marks the current document.
    pub fn is_active(&self) -> bool {
        self.active == Some(true)
    }

    /// First intro section, if any.
    pub fn intro(&self) -> Option<&MultilingualText> {
        self.contenu.iter().find_map(|s| match s {
            ContentSection::Intro { text } => Some(text),
            _ => None,
        })
    }

    /// Titled sections in display order.
    pub fn sections(&self) -> impl Iterator<Item = (&MultilingualText, &MultilingualText)> {
        self.contenu.iter().filter_map(|s| match s {
            ContentSection::Section { titre, paragraphe } => Some((titre, paragraphe)),
            _ => None,
        })
    }

    /// Creation date, from either an RFC 3339 timestamp or a plain date.
    pub fn created_on(&self) -> Option<NaiveDate> {
        let raw = self.date_creation.as_deref()?.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.date_naive());
        }
        let date_part = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }
}

/// The "about us" page record. The CMS sends these fields as
/// `{lang, value}` pair lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AboutUsData {
    pub titre: Option<MultilingualText>,
    pub contenu: Option<MultilingualText>,
    pub mission: Option<MultilingualText>,
    pub vision: Option<MultilingualText>,
    pub valeurs: Option<MultilingualText>,
    pub qui_nous_servons: Option<MultilingualText>,
    pub pourquoi_choisir_nous: Option<MultilingualText>,
}

/// A message submitted through the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Trim every field and reject submissions the backend would bounce.
    ///
    /// Subject is optional; name, email and message are not. The email
    /// check is shallow: one `@` with text on both sides.
    pub fn validated(self) -> Result<Self, VitrineError> {
        let msg = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        };
        if msg.name.is_empty() {
            return Err(VitrineError::Validation("name is required".into()));
        }
        if msg.message.is_empty() {
            return Err(VitrineError::Validation("message is required".into()));
        }
        match msg.email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(msg),
            _ => Err(VitrineError::Validation(format!(
                "invalid email address: {:?}",
                msg.email
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{resolve, Language};
    use serde_json::json;

    #[test]
    fn test_policy_document_parsing() {
        let doc: PolicyDocument = serde_json::from_value(json!({
            "titre": {"en": "Privacy Policy", "fr": "Politique de confidentialité"},
            "contenu": [
                {"type": "intro", "text": {"en": "We care."}},
                {"type": "section", "titre": {"en": "Data"}, "paragraphe": {"en": "We store little."}},
                {"type": "banner", "image": "x.png"},
                {"type": "section", "titre": {"en": "Cookies"}, "paragraphe": {"en": "None."}}
            ],
            "version": 3,
            "date_creation": "2024-05-01T10:00:00Z",
            "active": true
        }))
        .unwrap();

        assert!(doc.is_active());
        assert_eq!(doc.version.as_deref(), Some("3"));
        assert_eq!(doc.contenu.len(), 4);
        assert_eq!(doc.contenu[2], ContentSection::Other("banner".into()));
        assert_eq!(resolve(doc.intro(), Language::Fr, ""), "We care.");
        let titles: Vec<_> = doc
            .sections()
            .map(|(t, _)| resolve(Some(t), Language::En, ""))
            .collect();
        assert_eq!(titles, vec!["Data", "Cookies"]);
        assert_eq!(
            doc.created_on(),
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
    }

    #[test]
    fn test_intro_falls_back_to_paragraphe() {
        let doc: PolicyDocument = serde_json::from_value(json!({
            "contenu": [{"type": "intro", "paragraphe": {"fr": "Texte"}}]
        }))
        .unwrap();
        assert_eq!(resolve(doc.intro(), Language::En, ""), "Texte");
    }

    #[test]
    fn test_object_contenu_becomes_intro() {
        let doc: PolicyDocument = serde_json::from_value(json!({
            "contenu": {"en": "Single block"}
        }))
        .unwrap();
        assert_eq!(doc.contenu.len(), 1);
        assert_eq!(resolve(doc.intro(), Language::Ar, ""), "Single block");
        assert_eq!(doc.sections().count(), 0);
    }

    #[test]
    fn test_missing_and_null_fields() {
        let doc: PolicyDocument =
            serde_json::from_value(json!({"contenu": null, "active": null})).unwrap();
        assert!(doc.contenu.is_empty());
        assert!(!doc.is_active());
        assert!(doc.titre.is_none());
        assert!(doc.created_on().is_none());
    }

    #[test]
    fn test_contact_links() {
        let contact: ContactData = serde_json::from_value(json!({
            "site_web": "https://www.toorrii.dz",
            "facebook": "https://facebook.com/toorrii",
            "x": "https://x.com/toorrii",
            "tiktok": "",
            "linkedin": null
        }))
        .unwrap();
        assert_eq!(contact.website_label(), Some("www.toorrii.dz"));
        assert_eq!(
            contact.social_links(),
            vec![
                ("Facebook", "https://facebook.com/toorrii"),
                ("X", "https://x.com/toorrii"),
            ]
        );

        let plain = ContactData {
            site_web: Some("http://toorrii.dz".into()),
            ..Default::default()
        };
        assert_eq!(plain.website_label(), Some("toorrii.dz"));
        let bare = ContactData {
            site_web: Some("toorrii.dz".into()),
            ..Default::default()
        };
        assert_eq!(bare.website_label(), Some("toorrii.dz"));
        assert!(ContactData::default().website_label().is_none());
        assert!(ContactData::default().social_links().is_empty());
    }

    #[test]
    fn test_non_bool_active_is_inactive() {
        for raw in [json!(1), json!("true"), json!("yes"), json!({"on": true})] {
            let doc: PolicyDocument =
                serde_json::from_value(json!({"active": raw, "version": "1"})).unwrap();
            assert_eq!(doc.active, Some(false), "active = {raw}");
            assert!(!doc.is_active());
            assert_eq!(doc.version.as_deref(), Some("1"));
        }
        let doc: PolicyDocument = serde_json::from_value(json!({"active": false})).unwrap();
        assert!(!doc.is_active());
    }

    #[test]
    fn test_plain_date_creation() {
        let doc = PolicyDocument {
            date_creation: Some("2023-11-20".into()),
            ..Default::default()
        };
        assert_eq!(doc.created_on(), NaiveDate::from_ymd_opt(2023, 11, 20));

        let garbage = PolicyDocument {
            date_creation: Some("yesterday".into()),
            ..Default::default()
        };
        assert!(garbage.created_on().is_none());
    }

    #[test]
    fn test_contact_data_parsing() {
        let contact: ContactData = serde_json::from_value(json!({
            "email": "hello@example.dz",
            "telephone_1": "+213 555 00 00",
            "telephone_2": null,
            "telephone_fixe": 21300000,
            "adresse": {"fr": "12 rue Didouche", "en": "12 Didouche St."},
            "ville": [{"lang": "fr", "value": "Alger"}],
            "message_acceuil": "not multilingual"
        }))
        .unwrap();
        assert_eq!(contact.email.as_deref(), Some("hello@example.dz"));
        assert!(contact.telephone_2.is_none());
        assert_eq!(contact.telephone_fixe.as_deref(), Some("21300000"));
        assert_eq!(
            resolve(contact.ville.as_ref(), Language::En, ""),
            "Alger"
        );
        assert_eq!(
            resolve(contact.message_acceuil.as_ref(), Language::En, "default"),
            "default"
        );
    }

    #[test]
    fn test_about_us_pair_lists() {
        let about: AboutUsData = serde_json::from_value(json!({
            "titre": [{"lang": "en", "value": "About"}, {"lang": "ar", "value": "من نحن"}],
            "mission": [{"lang": "fr", "value": "Notre mission"}]
        }))
        .unwrap();
        assert_eq!(resolve(about.titre.as_ref(), Language::Ar, ""), "من نحن");
        assert_eq!(resolve(about.mission.as_ref(), Language::En, ""), "Notre mission");
        assert!(about.vision.is_none());
    }

    #[test]
    fn test_contact_message_validation() {
        let ok = ContactMessage {
            name: "  Amina ".into(),
            email: "amina@example.dz".into(),
            subject: String::new(),
            message: "Hello".into(),
        }
        .validated()
        .unwrap();
        assert_eq!(ok.name, "Amina");

        let bad_email = ContactMessage {
            name: "Amina".into(),
            email: "amina@".into(),
            subject: "s".into(),
            message: "Hello".into(),
        };
        assert!(matches!(
            bad_email.validated(),
            Err(VitrineError::Validation(_))
        ));

        let no_message = ContactMessage {
            name: "Amina".into(),
            email: "a@b".into(),
            subject: "s".into(),
            message: "   ".into(),
        };
        assert!(no_message.validated().is_err());
    }
}
