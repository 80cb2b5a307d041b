//! Selection resolver: single vs multiple selection.

use crate::keys::{KeyList, NodeKey};

/// Apply a selection click on `key`.
///
/// Single mode always yields `[key]`. Multiple mode toggles `key`: removed when
/// already selected, appended otherwise.
pub fn select(selected: KeyList, key: &NodeKey, multiple: bool) -> KeyList {
    if !multiple {
        return KeyList::from_iter([key]);
    }
    let mut next = selected;
    let present = next.contains(key.as_str());
    next.toggle(!present, key);
    next
}

/// Selection a tree starts with.
///
/// Checkable trees drive state through checks, so any supplied selection is
/// discarded for them.
pub fn initial_selection(supplied: KeyList, checkable: bool) -> KeyList {
    if checkable {
        KeyList::new()
    } else {
        supplied
    }
}
