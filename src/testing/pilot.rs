//! Pilot: programmatic interaction with a headless tree.
//!
//! The `Pilot` wraps a [`Tree`] and a [`NotificationQueue`]. Its methods
//! simulate the user gestures a rendered tree would turn into commands
//! (clicking a title, ticking a checkbox, toggling a switcher) and collect the
//! resulting notifications for inspection.

use crate::config::TreeConfig;
use crate::error::{LoadError, TreeError};
use crate::event::{Command, Notification, NotificationQueue};
use crate::loader::LoadData;
use crate::registry::TreeItem;
use crate::tree::Tree;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless tree driver for testing.
///
/// # Examples
///
/// ```
/// use canopy::config::TreeConfig;
/// use canopy::registry::TreeItem;
/// use canopy::testing::Pilot;
///
/// let mut pilot = Pilot::new(
///     TreeConfig::new().with_checkable(true),
///     [TreeItem::new("a").with_children([TreeItem::new("b"), TreeItem::new("c")])],
/// )
/// .unwrap();
/// pilot.check("b");
/// assert!(pilot.tree().is_half_checked("a"));
/// assert_eq!(pilot.take_notifications().len(), 1);
/// ```
#[derive(Debug)]
pub struct Pilot {
    tree: Tree,
    queue: NotificationQueue,
}

impl Pilot {
    /// Create a tree from `config`, mount `items` and attach it.
    pub fn new(
        config: TreeConfig,
        items: impl IntoIterator<Item = TreeItem>,
    ) -> Result<Self, TreeError> {
        let mut tree = Tree::new(config);
        tree.mount(items)?;
        tree.attach();
        Ok(Self::from_tree(tree))
    }

    /// Drive an already built tree.
    pub fn from_tree(tree: Tree) -> Self {
        Self {
            tree,
            queue: NotificationQueue::new(),
        }
    }

    // ── Gestures ─────────────────────────────────────────────────────

    /// Send `command` and queue its notifications.
    pub fn send(&mut self, command: Command) {
        let notifications = self.tree.handle(command);
        self.queue.extend(notifications);
    }

    /// Click a node's title.
    pub fn click(&mut self, key: &str) {
        self.send(Command::select(key));
    }

    /// Tick a node's checkbox.
    pub fn check(&mut self, key: &str) {
        self.send(Command::check(key, true));
    }

    /// Untick a node's checkbox.
    pub fn uncheck(&mut self, key: &str) {
        self.send(Command::check(key, false));
    }

    /// Open a node's switcher.
    pub fn expand(&mut self, key: &str) {
        self.toggle_switcher(key, true);
    }

    /// Close a node's switcher.
    pub fn collapse(&mut self, key: &str) {
        self.toggle_switcher(key, false);
    }

    fn toggle_switcher(&mut self, key: &str, expanded: bool) {
        let command = Command::toggle_expand(key, expanded, &self.tree.state().expanded_keys);
        self.send(command);
    }

    pub fn expand_all(&mut self) {
        self.send(Command::ExpandAll);
    }

    /// Lazy-load the children of `key` and queue the resulting notification.
    pub async fn load<L: LoadData>(&mut self, key: &str, loader: &L) -> Result<(), LoadError<L::Error>> {
        let notifications = self.tree.load_children(key, loader).await?;
        self.queue.extend(notifications);
        Ok(())
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Drain the queued notifications, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.queue.drain()
    }

    /// The most recent queued notification.
    pub fn last_notification(&self) -> Option<&Notification> {
        self.queue.last()
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    /// Render the visible outline of the tree.
    pub fn render(&self) -> String {
        super::snapshot::render_outline(&self.tree)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
