//! Plain-text outline rendering for snapshot tests.
//!
//! [`render_outline`] writes the visible part of a tree, one node per line:
//!
//! ```text
//! - [-] Fruit *
//!     [x] Apple
//!     [ ] Pear (disabled)
//! + [ ] Vegetables
//! ```
//!
//! - `-` / `+`: expanded / collapsed node with children. Leaves get two spaces.
//! - `[x]` / `[-]` / `[ ]`: checked / half checked / unchecked, only on
//!   checkable nodes.
//! - `*`: selected. `(disabled)`: effectively disabled.
//!
//! Children of collapsed nodes are not written. Lines are indented by four
//! spaces per level and joined with `'\n'`, without a trailing newline.

use crate::keys::Walk;
use crate::registry::NodeId;
use crate::tree::Tree;

/// Render the visible outline of `tree`.
pub fn render_outline(tree: &Tree) -> String {
    let registry = tree.registry();
    let mut lines = Vec::new();
    registry.traverse_all(|key, id| {
        let expanded = tree.is_expanded(key.as_str());
        lines.push(outline_line(tree, id, expanded));
        Walk::from(expanded)
    });
    lines.join("\n")
}

fn outline_line(tree: &Tree, id: NodeId, expanded: bool) -> String {
    let registry = tree.registry();
    let flags = tree.flags();
    let Some(data) = registry.get(id) else {
        return String::new();
    };
    let key = data.key.as_str();

    let mut line = "    ".repeat(registry.ancestors(id).len());
    line.push_str(match (registry.children(id).is_empty(), expanded) {
        (true, _) => "  ",
        (false, true) => "- ",
        (false, false) => "+ ",
    });
    if data.is_checkable(flags.checkable) {
        line.push_str(if tree.is_checked(key) {
            "[x] "
        } else if tree.is_half_checked(key) {
            "[-] "
        } else {
            "[ ] "
        });
    }
    line.push_str(data.label());
    if tree.is_selected(key) {
        line.push_str(" *");
    }
    if data.is_disabled(flags.disabled) {
        line.push_str(" (disabled)");
    }
    line
}

// ===========================================================================
// Tests
// ===========================================================================
