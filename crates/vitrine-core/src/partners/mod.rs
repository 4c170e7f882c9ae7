//! Partner directory: organizations showcased on the site.
//!
//! The list is compiled in and immutable. At this size a linear scan is
//! all the lookup needs.

mod data;

use serde::Serialize;

/// A partner organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partner {
    /// Unique key, used in `/partner/:id` routes.
    pub id: &'static str,
    pub name: &'static str,
    /// Asset path of the partner logo.
    pub logo: &'static str,
    /// One-line summary of the partnership.
    pub description: &'static str,
    pub industry: &'static str,
    pub founded: &'static str,
    pub headquarters: &'static str,
    pub about: &'static str,
    pub collaboration: Collaboration,
    pub stats: &'static [Stat],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<&'static str>,
    pub gallery: &'static [&'static str],
}

/// What the partnership covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collaboration {
    /// Year the collaboration started.
    pub start_date: &'static str,
    pub services: &'static [&'static str],
    pub impact: &'static str,
}

/// A headline figure, e.g. "Daily Passengers" / "5,000+".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

/// Every partner, in showcase order.
pub fn all() -> &'static [Partner] {
    data::PARTNERS
}

/// Look up a partner by id. `None` means the caller should render a
/// not-found view.
pub fn find_by_id(id: &str) -> Option<&'static Partner> {
    data::PARTNERS.iter().find(|p| p.id == id)
}
