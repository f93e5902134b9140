//! Sidebar menu compiler.
//!
//! Builds the role-scoped menu model a navigation component renders. Leaves
//! become links under the role namespace (`/{role}/{path}`), parents become
//! plain-text expanders holding their children. Icons are passed through.
//!
//! The role is an uninterpreted string; compiling the same tree once per role
//! yields one menu per role without touching the tree.
//!
//! # Example
//!
//! ```
//! use nav_compiler::{Label, SidebarEntry, compile_sidebar};
//! use nav_tree::NavigationNode;
//!
//! let tree: Vec<NavigationNode<(), &str>> = vec![
//!     NavigationNode::new()
//!         .name("Reports")
//!         .child(NavigationNode::new().name("Sales").path("sales")),
//! ];
//!
//! let menu = compile_sidebar(&tree, "admin");
//! assert_eq!(menu[0].key, "Reports");
//! assert_eq!(menu[0].label, Label::text("Reports"));
//!
//! let Some(SidebarEntry::Item(sales)) = menu[0].child_entries().first() else {
//!     panic!("expected a child item");
//! };
//! assert_eq!(sales.label.target(), Some("/admin/sales"));
//! ```

use nav_tree::NavigationNode;
use serde::Serialize;

use crate::error::{CompileError, NodeLocation};
use crate::options::{CompileOptions, MissingFieldPolicy};

/// Menu entry label.
///
/// Serializes as a bare string for text and as `{text, to}` for links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Label {
    /// Plain text (parents and path-less leaves).
    Text(String),
    /// Navigable link.
    Link {
        /// Display text.
        text: String,
        /// Link target.
        #[serde(rename = "to")]
        target: String,
    },
}

impl Label {
    /// Plain text label.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Link label.
    #[must_use]
    pub fn link(text: impl Into<String>, target: impl Into<String>) -> Self {
        Self::Link {
            text: text.into(),
            target: target.into(),
        }
    }

    /// Display text.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) | Self::Link { text, .. } => text,
        }
    }

    /// Link target, or `None` for plain text.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Link { target, .. } => Some(target),
        }
    }
}

/// Menu item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarItem<I> {
    /// Selection/expansion key, taken from the node name. Not deduplicated.
    pub key: String,
    /// Displayed label.
    pub label: Label,
    /// Icon passed through from the node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<I>,
    /// Child entries; `Some` for parents, `None` for leaves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SidebarEntry<I>>>,
}

impl<I> SidebarItem<I> {
    /// True if this item is an expandable parent.
    pub fn is_parent(&self) -> bool {
        self.children.is_some()
    }

    /// Child entries, or an empty slice for leaves.
    pub fn child_entries(&self) -> &[SidebarEntry<I>] {
        self.children.as_deref().unwrap_or_default()
    }
}

/// Slot in a parent's children list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SidebarEntry<I> {
    /// Menu item.
    Item(SidebarItem<I>),
    /// Empty slot left by a nameless child under
    /// [`MissingFieldPolicy::PassThrough`]. Serializes as `null`.
    Placeholder,
}

impl<I> SidebarEntry<I> {
    /// The item, or `None` for a placeholder.
    pub fn as_item(&self) -> Option<&SidebarItem<I>> {
        match self {
            Self::Item(item) => Some(item),
            Self::Placeholder => None,
        }
    }
}

/// Link target for `path` under the `role` namespace.
#[must_use]
pub fn role_link(role: &str, path: &str) -> String {
    format!("/{role}/{path}")
}

/// Compile a sidebar menu with default options.
///
/// Nameless children and parents are skipped, and only top-level nodes and
/// their direct children are visited.
#[must_use]
pub fn compile_sidebar<E, I: Clone>(
    nodes: &[NavigationNode<E, I>],
    role: &str,
) -> Vec<SidebarItem<I>> {
    // The skip policy has no failure path.
    compile_sidebar_with(nodes, role, &CompileOptions::default()).unwrap_or_default()
}

/// Compile a sidebar menu.
///
/// # Errors
///
/// Returns [`CompileError::MissingField`] for the first nameless child or
/// parent when the policy is [`MissingFieldPolicy::Reject`].
pub fn compile_sidebar_with<E, I: Clone>(
    nodes: &[NavigationNode<E, I>],
    role: &str,
    options: &CompileOptions,
) -> Result<Vec<SidebarItem<I>>, CompileError> {
    let mut items = Vec::with_capacity(nodes.len());
    let mut location = NodeLocation::default();

    for (index, node) in nodes.iter().enumerate() {
        location.push(index);
        let item = if node.has_children() {
            parent_item(node, role, 1, options, &mut location)?
        } else if let (Some(name), Some(path)) = (&node.name, &node.path) {
            Some(SidebarItem {
                key: name.clone(),
                label: Label::link(name.clone(), role_link(role, path)),
                icon: node.icon.clone(),
                children: None,
            })
        } else {
            None
        };
        items.extend(item);
        location.pop();
    }

    tracing::debug!(
        nodes = nodes.len(),
        items = items.len(),
        role,
        policy = %options.missing_fields,
        "Compiled sidebar menu"
    );
    Ok(items)
}

/// Build an expander item for a node with children at `level`.
///
/// Returns `None` when a nameless parent is skipped.
fn parent_item<E, I: Clone>(
    node: &NavigationNode<E, I>,
    role: &str,
    level: usize,
    options: &CompileOptions,
    location: &mut NodeLocation,
) -> Result<Option<SidebarItem<I>>, CompileError> {
    let key = match &node.name {
        Some(name) => name.clone(),
        None => match options.missing_fields {
            MissingFieldPolicy::PassThrough => {
                tracing::debug!(location = %location, "Emitting nameless menu parent");
                String::new()
            }
            MissingFieldPolicy::Skip => {
                tracing::warn!(location = %location, "Skipping nameless menu parent");
                return Ok(None);
            }
            MissingFieldPolicy::Reject => return Err(CompileError::missing("name", location)),
        },
    };

    let children = child_entries(node.child_nodes(), role, level + 1, options, location)?;

    Ok(Some(SidebarItem {
        label: Label::Text(key.clone()),
        key,
        icon: node.icon.clone(),
        children: Some(children),
    }))
}

/// Build the entries for one level of children.
fn child_entries<E, I: Clone>(
    children: &[NavigationNode<E, I>],
    role: &str,
    level: usize,
    options: &CompileOptions,
    location: &mut NodeLocation,
) -> Result<Vec<SidebarEntry<I>>, CompileError> {
    if !options.visits(level) {
        return Ok(Vec::new());
    }

    let mut entries = Vec::with_capacity(children.len());
    for (index, child) in children.iter().enumerate() {
        location.push(index);
        let Some(name) = &child.name else {
            match options.missing_fields {
                MissingFieldPolicy::PassThrough => {
                    tracing::debug!(location = %location, "Leaving placeholder for nameless entry");
                    entries.push(SidebarEntry::Placeholder);
                }
                MissingFieldPolicy::Skip => {
                    tracing::warn!(location = %location, "Skipping nameless menu entry");
                }
                MissingFieldPolicy::Reject => return Err(CompileError::missing("name", location)),
            }
            location.pop();
            continue;
        };

        let item = if child.has_children() && options.visits(level + 1) {
            parent_item(child, role, level, options, location)?
        } else {
            let label = match &child.path {
                Some(path) => Label::link(name.clone(), role_link(role, path)),
                None => Label::Text(name.clone()),
            };
            Some(SidebarItem {
                key: name.clone(),
                label,
                icon: child.icon.clone(),
                children: None,
            })
        };
        entries.extend(item.map(SidebarEntry::Item));
        location.pop();
    }

    Ok(entries)
}
