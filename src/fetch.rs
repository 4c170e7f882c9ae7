//! Tri-state wrapper for data a page depends on.

use std::fmt::Display;
use tracing::warn;

/// Outcome of loading one piece of page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch<T> {
    /// Request still in flight.
    Loading,
    /// Request failed; the page shows fallback copy.
    Failed(String),
    Ready(T),
}

impl<T> Fetch<T> {
    /// Wrap a service result. Failures are logged, never propagated.
    pub fn from_result<E: Display>(what: &str, result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => {
                warn!("{what}: fetch failed, rendering fallback content: {e}");
                Self::Failed(e.to_string())
            }
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl<T> Fetch<Option<T>> {
    /// The record, when the request succeeded and found one.
    pub fn record(&self) -> Option<&T> {
        self.ready().and_then(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let ok: Fetch<u8> = Fetch::from_result("test", Ok::<_, String>(7));
        assert_eq!(ok.ready(), Some(&7));

        let failed: Fetch<u8> = Fetch::from_result("test", Err("API Error: Not Found"));
        assert_eq!(failed, Fetch::Failed("API Error: Not Found".into()));
        assert!(failed.ready().is_none());
    }

    #[test]
    fn test_record() {
        assert_eq!(Fetch::Ready(Some(1)).record(), Some(&1));
        assert_eq!(Fetch::<Option<u8>>::Ready(None).record(), None);
        assert_eq!(Fetch::<Option<u8>>::Loading.record(), None);
        assert!(Fetch::<Option<u8>>::Loading.is_loading());
    }
}
