//! Declarative navigation tree types for navc.
//!
//! A navigation tree is an ordered list of [`NavigationNode`]s describing the
//! navigable sections of an application. The same tree feeds both the route
//! table and the sidebar menu compilers in `nav-compiler`.
//!
//! The element and icon payloads are opaque to this crate: `E` is whatever
//! renderable unit the consuming router expects, `I` whatever visual token the
//! menu component expects.
//!
//! # Example
//!
//! ```
//! use nav_tree::NavigationNode;
//!
//! let tree: Vec<NavigationNode<&str, &str>> = vec![
//!     NavigationNode::new()
//!         .name("Dashboard")
//!         .path("dashboard")
//!         .element("DashboardPage"),
//!     NavigationNode::new()
//!         .name("Reports")
//!         .icon("chart")
//!         .child(NavigationNode::new().name("Sales").path("sales")),
//! ];
//!
//! assert!(tree[0].is_routable());
//! assert!(tree[1].has_children());
//! assert_eq!(tree[1].depth(), 2);
//! ```

/// Declarative unit describing one navigable section.
///
/// Every field is optional. What a node contributes depends on which fields
/// are present:
/// - a route needs both `path` and `element`
/// - a menu entry needs `name`, and a clickable menu link additionally needs `path`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct NavigationNode<E, I> {
    /// Display label.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    /// URL path segment.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub path: Option<String>,
    /// Content to render when this path is active.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub element: Option<E>,
    /// Visual token shown next to the menu entry.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub icon: Option<I>,
    /// Nested entries. `Some(vec![])` is distinct from `None`: a node with an
    /// empty children list is still an expandable parent in the menu.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub children: Option<Vec<NavigationNode<E, I>>>,
}

impl<E, I> Default for NavigationNode<E, I> {
    fn default() -> Self {
        Self {
            name: None,
            path: None,
            element: None,
            icon: None,
            children: None,
        }
    }
}

impl<E, I> NavigationNode<E, I> {
    /// Create an empty node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display label.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the URL path segment.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the element reference.
    #[must_use]
    pub fn element(mut self, element: E) -> Self {
        self.element = Some(element);
        self
    }

    /// Set the icon token.
    #[must_use]
    pub fn icon(mut self, icon: I) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Append a child, creating the children list if absent.
    #[must_use]
    pub fn child(mut self, child: NavigationNode<E, I>) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Replace the children list.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = NavigationNode<E, I>>) -> Self {
        self.children = Some(children.into_iter().collect());
        self
    }

    /// True if the node has both a path and an element.
    pub fn is_routable(&self) -> bool {
        self.path.is_some() && self.element.is_some()
    }

    /// True if a children list is present (even if empty).
    pub fn has_children(&self) -> bool {
        self.children.is_some()
    }

    /// Child nodes, or an empty slice when absent.
    pub fn child_nodes(&self) -> &[NavigationNode<E, I>] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Number of levels in the subtree rooted at this node (a leaf is 1).
    pub fn depth(&self) -> usize {
        1 + self
            .child_nodes()
            .iter()
            .map(NavigationNode::depth)
            .max()
            .unwrap_or(0)
    }
}

/// Number of levels in a whole tree (0 for an empty tree).
pub fn tree_depth<E, I>(nodes: &[NavigationNode<E, I>]) -> usize {
    nodes.iter().map(NavigationNode::depth).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    type Node = NavigationNode<&'static str, &'static str>;

    #[test]
    fn test_new_node_is_empty() {
        let node = Node::new();

        assert_eq!(node, Node::default());
        assert!(node.name.is_none());
        assert!(!node.is_routable());
        assert!(!node.has_children());
    }

    #[test]
    fn test_builder_sets_fields() {
        let node = Node::new()
            .name("Dashboard")
            .path("dashboard")
            .element("DashEl")
            .icon("home");

        assert_eq!(node.name.as_deref(), Some("Dashboard"));
        assert_eq!(node.path.as_deref(), Some("dashboard"));
        assert_eq!(node.element, Some("DashEl"));
        assert_eq!(node.icon, Some("home"));
        assert!(node.is_routable());
    }

    #[test]
    fn test_path_without_element_is_not_routable() {
        let node = Node::new().name("NoElem").path("/x");

        assert!(!node.is_routable());
    }

    #[test]
    fn test_child_appends_in_order() {
        let node = Node::new()
            .name("Reports")
            .child(Node::new().name("Sales"))
            .child(Node::new().name("Costs"));

        let names: Vec<_> = node
            .child_nodes()
            .iter()
            .filter_map(|c| c.name.as_deref())
            .collect();
        assert_eq!(names, vec!["Sales", "Costs"]);
    }

    #[test]
    fn test_empty_children_list_is_present() {
        let node = Node::new().name("Empty").children(Vec::new());

        assert!(node.has_children());
        assert!(node.child_nodes().is_empty());
    }

    #[test]
    fn test_depth_counts_levels() {
        let leaf = Node::new().name("Leaf");
        let two = Node::new().child(Node::new());
        let three = Node::new().child(Node::new()).child(Node::new().child(Node::new()));

        assert_eq!(leaf.depth(), 1);
        assert_eq!(two.depth(), 2);
        assert_eq!(three.depth(), 3);
        assert_eq!(tree_depth(&[leaf, two, three]), 3);
        assert_eq!(tree_depth::<&str, &str>(&[]), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_yaml_tree() {
        let yaml = r"
- name: Dashboard
  path: dashboard
  element: DashboardPage
  icon: home
- name: Reports
  children:
    - name: Sales
      path: sales
";
        let tree: Vec<NavigationNode<String, String>> = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].element.as_deref(), Some("DashboardPage"));
        assert_eq!(tree[0].icon.as_deref(), Some("home"));
        assert!(tree[0].children.is_none());
        assert_eq!(tree[1].child_nodes()[0].path.as_deref(), Some("sales"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let json = r#"[{"name": "Typo", "chidren": []}]"#;

        let result: Result<Vec<NavigationNode<String, String>>, _> = serde_json::from_str(json);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("chidren"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_skips_absent_fields() {
        let node: NavigationNode<String, String> = NavigationNode::new().name("Only");

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json, serde_json::json!({"name": "Only"}));
    }
}
