//! Picking the one record a page shows out of a CMS list.

use vitrine_core::content::PolicyDocument;

/// Records that carry a "this is the current one" flag.
pub trait Activatable {
    fn is_active(&self) -> bool;
}

impl Activatable for PolicyDocument {
    fn is_active(&self) -> bool {
        PolicyDocument::is_active(self)
    }
}

/// Select the current record from a list.
///
/// The first item flagged active wins regardless of position. Without one,
/// the last item (the most recently published) is used. An empty list
/// yields `None`.
pub fn select_current<T: Activatable>(items: Vec<T>) -> Option<T> {
    match items.iter().position(Activatable::is_active) {
        Some(idx) => items.into_iter().nth(idx),
        None => items.into_iter().last(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(version: &str, active: Option<bool>) -> PolicyDocument {
        PolicyDocument {
            version: Some(version.to_string()),
            active,
            ..Default::default()
        }
    }

    fn version(d: Option<PolicyDocument>) -> Option<String> {
        d.and_then(|d| d.version)
    }

    #[test]
    fn test_active_item_wins_regardless_of_order() {
        let lists = [
            vec![doc("1", Some(true)), doc("2", Some(false)), doc("3", None)],
            vec![doc("2", Some(false)), doc("1", Some(true)), doc("3", None)],
            vec![doc("3", None), doc("2", Some(false)), doc("1", Some(true))],
        ];
        for list in lists {
            assert_eq!(version(select_current(list)), Some("1".into()));
        }
    }

    #[test]
    fn test_first_active_wins_when_several() {
        let list = vec![doc("1", Some(false)), doc("2", Some(true)), doc("3", Some(true))];
        assert_eq!(version(select_current(list)), Some("2".into()));
    }

    #[test]
    fn test_no_active_falls_back_to_last() {
        let list = vec![doc("1", Some(false)), doc("2", None), doc("3", Some(false))];
        assert_eq!(version(select_current(list)), Some("3".into()));
    }

    #[test]
    fn test_single_inactive_item() {
        assert_eq!(
            version(select_current(vec![doc("only", Some(false))])),
            Some("only".into())
        );
    }

    #[test]
    fn test_empty_list_is_none() {
        assert!(select_current(Vec::<PolicyDocument>::new()).is_none());
    }
}
