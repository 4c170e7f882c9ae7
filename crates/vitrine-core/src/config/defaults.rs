//! Default values for every config field.

use crate::i18n::Language;

pub(super) fn default_language() -> Language {
    Language::En
}
pub(super) fn default_log_level() -> String {
    "info".to_string()
}
pub(super) fn default_base_url() -> String {
    "http://127.0.0.1:8000/api".to_string()
}
pub(super) fn default_contact_path() -> String {
    "/home/contacte/".to_string()
}
pub(super) fn default_contact_submit_path() -> String {
    "/admins/contacte/ajouter/".to_string()
}
pub(super) fn default_privacy_policy_path() -> String {
    "/home/politique_confidentialite/".to_string()
}
pub(super) fn default_terms_path() -> String {
    "/home/conditions_utilisation/".to_string()
}
pub(super) fn default_about_us_path() -> String {
    "/home/a_propos/".to_string()
}
