//! Route table compiler.
//!
//! Flattens a navigation tree into the ordered `{path, element}` list a
//! router consumes.
//!
//! Top-level nodes contribute a route only when they have both a `path` and
//! an `element`. Children are flattened into the same list right after their
//! parent; an incomplete child is handled according to the
//! [`MissingFieldPolicy`]; a child whose own children are visited is a
//! grouping node and, like a top-level node, contributes a route only when
//! complete. Only `max_depth` levels are visited (two by
//! default), so grandchildren are never flattened unless asked for. Child
//! paths are emitted verbatim, without prefixing the parent path.
//!
//! # Example
//!
//! ```
//! use nav_compiler::compile_routes;
//! use nav_tree::NavigationNode;
//!
//! let tree: Vec<NavigationNode<&str, ()>> = vec![
//!     NavigationNode::new().name("Dash").path("/dash").element("DashEl"),
//!     NavigationNode::new().name("NoElem").path("/x"),
//! ];
//!
//! let routes = compile_routes(&tree);
//! assert_eq!(routes.len(), 1);
//! assert_eq!(routes[0].path.as_deref(), Some("/dash"));
//! assert_eq!(routes[0].element, Some("DashEl"));
//! ```

use nav_tree::NavigationNode;
use serde::Serialize;

use crate::error::{CompileError, NodeLocation};
use crate::options::{CompileOptions, MissingFieldPolicy};

/// Route table entry.
///
/// Both fields are always `Some` unless the entry was produced from an
/// incomplete child under [`MissingFieldPolicy::PassThrough`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Route<E> {
    /// URL path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Content to render for this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<E>,
}

impl<E> Route<E> {
    /// Create a complete route.
    #[must_use]
    pub fn new(path: impl Into<String>, element: E) -> Self {
        Self {
            path: Some(path.into()),
            element: Some(element),
        }
    }

    /// True if both path and element are present.
    pub fn is_complete(&self) -> bool {
        self.path.is_some() && self.element.is_some()
    }
}

/// Compile a route table with default options.
///
/// Incomplete children are skipped, and only top-level nodes and their
/// direct children are visited.
#[must_use]
pub fn compile_routes<E: Clone, I>(nodes: &[NavigationNode<E, I>]) -> Vec<Route<E>> {
    // The skip policy has no failure path.
    compile_routes_with(nodes, &CompileOptions::default()).unwrap_or_default()
}

/// Compile a route table.
///
/// # Errors
///
/// Returns [`CompileError::MissingField`] for the first incomplete child when
/// the policy is [`MissingFieldPolicy::Reject`].
pub fn compile_routes_with<E: Clone, I>(
    nodes: &[NavigationNode<E, I>],
    options: &CompileOptions,
) -> Result<Vec<Route<E>>, CompileError> {
    let mut routes = Vec::with_capacity(nodes.len());
    let mut location = NodeLocation::default();

    for (index, node) in nodes.iter().enumerate() {
        location.push(index);
        if let (Some(path), Some(element)) = (&node.path, &node.element) {
            routes.push(Route::new(path.clone(), element.clone()));
        }
        if let Some(children) = &node.children {
            collect_child_routes(children, 2, options, &mut location, &mut routes)?;
        }
        location.pop();
    }

    tracing::debug!(
        nodes = nodes.len(),
        routes = routes.len(),
        policy = %options.missing_fields,
        "Compiled route table"
    );
    Ok(routes)
}

/// Append routes for one level of children, descending while `level` is
/// within `max_depth`.
///
/// A child whose own children are visited is a grouping node and is judged
/// like a top-level node; only leaves go through the missing-field policy.
fn collect_child_routes<E: Clone, I>(
    children: &[NavigationNode<E, I>],
    level: usize,
    options: &CompileOptions,
    location: &mut NodeLocation,
    routes: &mut Vec<Route<E>>,
) -> Result<(), CompileError> {
    if !options.visits(level) {
        return Ok(());
    }

    for (index, child) in children.iter().enumerate() {
        location.push(index);
        let descends = child.has_children() && options.visits(level + 1);
        if child.is_routable() {
            routes.push(Route {
                path: child.path.clone(),
                element: child.element.clone(),
            });
        } else if !descends {
            // Grouping nodes follow the top-level rule: a route only if complete.
            let field = if child.path.is_none() { "path" } else { "element" };
            match options.missing_fields {
                MissingFieldPolicy::PassThrough => {
                    tracing::debug!(location = %location, field, "Emitting incomplete route");
                    routes.push(Route {
                        path: child.path.clone(),
                        element: child.element.clone(),
                    });
                }
                MissingFieldPolicy::Skip => {
                    tracing::warn!(location = %location, field, "Skipping incomplete route");
                }
                MissingFieldPolicy::Reject => {
                    return Err(CompileError::missing(field, location));
                }
            }
        }
        if descends {
            collect_child_routes(child.child_nodes(), level + 1, options, location, routes)?;
        }
        location.pop();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    type Node = NavigationNode<&'static str, &'static str>;

    fn options(policy: MissingFieldPolicy) -> CompileOptions {
        CompileOptions::with_policy(policy)
    }

    fn sample_tree() -> Vec<Node> {
        vec![
            Node::new().name("Dash").path("/dash").element("DashEl"),
            Node::new()
                .name("Reports")
                .child(Node::new().name("Sales").path("sales").element("SalesEl"))
                .child(Node::new().name("Costs").path("costs").element("CostsEl")),
            Node::new().name("Profile").path("profile").element("ProfileEl"),
        ]
    }

    #[test]
    fn test_empty_tree_returns_empty_table() {
        let routes = compile_routes::<&str, &str>(&[]);

        assert!(routes.is_empty());
    }

    #[test]
    fn test_completeness_filter_excludes_node_without_element() {
        let tree = vec![
            Node::new().name("Dash").path("/dash").element("DashEl"),
            Node::new().name("NoElem").path("/x"),
        ];

        let routes = compile_routes(&tree);

        assert_eq!(routes, vec![Route::new("/dash", "DashEl")]);
    }

    #[test]
    fn test_top_level_without_path_is_not_routed() {
        let tree = vec![Node::new().name("Orphan").element("OrphanEl")];

        for policy in [
            MissingFieldPolicy::PassThrough,
            MissingFieldPolicy::Skip,
            MissingFieldPolicy::Reject,
        ] {
            let routes = compile_routes_with(&tree, &options(policy)).unwrap();
            assert!(routes.is_empty(), "policy {policy}");
        }
    }

    #[test]
    fn test_children_flattened_after_parent_in_order() {
        let routes = compile_routes(&sample_tree());

        let paths: Vec<_> = routes.iter().filter_map(|r| r.path.as_deref()).collect();
        assert_eq!(paths, vec!["/dash", "sales", "costs", "profile"]);
    }

    #[test]
    fn test_parent_with_route_and_children() {
        let tree = vec![
            Node::new()
                .name("Settings")
                .path("settings")
                .element("SettingsEl")
                .child(Node::new().name("Account").path("account").element("AccountEl")),
        ];

        let routes = compile_routes(&tree);

        assert_eq!(
            routes,
            vec![
                Route::new("settings", "SettingsEl"),
                Route::new("account", "AccountEl"),
            ]
        );
    }

    #[test]
    fn test_child_path_is_not_prefixed_with_parent_path() {
        let tree = vec![
            Node::new()
                .path("/parent")
                .element("ParentEl")
                .child(Node::new().path("child").element("ChildEl")),
        ];

        let routes = compile_routes(&tree);

        assert_eq!(routes[1].path.as_deref(), Some("child"));
    }

    #[test]
    fn test_grandchildren_not_visited_by_default() {
        let tree = vec![
            Node::new().name("Top").child(
                Node::new()
                    .path("child")
                    .element("ChildEl")
                    .child(Node::new().path("grandchild").element("GrandEl")),
            ),
        ];

        let routes = compile_routes(&tree);

        assert_eq!(routes, vec![Route::new("child", "ChildEl")]);
    }

    #[test]
    fn test_deeper_levels_visited_with_max_depth() {
        let tree = vec![
            Node::new().name("Top").child(
                Node::new()
                    .path("child")
                    .element("ChildEl")
                    .child(Node::new().path("grandchild").element("GrandEl")),
            ),
        ];
        let options = CompileOptions {
            max_depth: 3,
            ..CompileOptions::default()
        };

        let routes = compile_routes_with(&tree, &options).unwrap();

        assert_eq!(
            routes,
            vec![
                Route::new("child", "ChildEl"),
                Route::new("grandchild", "GrandEl"),
            ]
        );
    }

    #[test]
    fn test_grouping_child_follows_top_level_rule_when_descending() {
        let tree = vec![
            Node::new().name("Top").child(
                Node::new()
                    .name("Group")
                    .child(Node::new().name("Leaf").path("leaf").element("LeafEl")),
            ),
        ];

        for policy in [
            MissingFieldPolicy::PassThrough,
            MissingFieldPolicy::Skip,
            MissingFieldPolicy::Reject,
        ] {
            let options = CompileOptions {
                missing_fields: policy,
                max_depth: 3,
            };

            let routes = compile_routes_with(&tree, &options).unwrap();

            assert_eq!(routes, vec![Route::new("leaf", "LeafEl")], "policy {policy}");
        }
    }

    #[test]
    fn test_grouping_child_is_leaf_at_depth_boundary() {
        let tree = vec![
            Node::new().name("Top").child(
                Node::new()
                    .name("Group")
                    .child(Node::new().name("Leaf").path("leaf").element("LeafEl")),
            ),
        ];

        let err = compile_routes_with(&tree, &options(MissingFieldPolicy::Reject)).unwrap_err();

        assert_eq!(err.to_string(), "nodes[0].children[0]: missing required field 'path'");
    }

    #[test]
    fn test_max_depth_one_ignores_children() {
        let options = CompileOptions {
            max_depth: 1,
            ..CompileOptions::default()
        };

        let routes = compile_routes_with(&sample_tree(), &options).unwrap();

        let paths: Vec<_> = routes.iter().filter_map(|r| r.path.as_deref()).collect();
        assert_eq!(paths, vec!["/dash", "profile"]);
    }

    #[test]
    fn test_pass_through_emits_incomplete_children() {
        let tree = vec![
            Node::new()
                .name("Reports")
                .child(Node::new().name("Sales").path("sales"))
                .child(Node::new().name("Label").element("LabelEl")),
        ];

        let routes =
            compile_routes_with(&tree, &options(MissingFieldPolicy::PassThrough)).unwrap();

        assert_eq!(
            routes,
            vec![
                Route {
                    path: Some("sales".to_owned()),
                    element: None,
                },
                Route {
                    path: None,
                    element: Some("LabelEl"),
                },
            ]
        );
        assert!(routes.iter().all(|r| !r.is_complete()));
    }

    #[test]
    fn test_skip_omits_incomplete_children() {
        let tree = vec![
            Node::new()
                .name("Reports")
                .child(Node::new().name("Sales").path("sales"))
                .child(Node::new().name("Costs").path("costs").element("CostsEl")),
        ];

        let routes = compile_routes_with(&tree, &options(MissingFieldPolicy::Skip)).unwrap();

        assert_eq!(routes, vec![Route::new("costs", "CostsEl")]);
    }

    #[test]
    fn test_reject_reports_first_incomplete_child() {
        let tree = vec![
            Node::new().name("Dash").path("/dash").element("DashEl"),
            Node::new()
                .name("Reports")
                .child(Node::new().name("Costs").path("costs").element("CostsEl"))
                .child(Node::new().name("Sales").path("sales")),
        ];

        let err = compile_routes_with(&tree, &options(MissingFieldPolicy::Reject)).unwrap_err();

        let CompileError::MissingField { field, location } = err;
        assert_eq!(field, "element");
        assert_eq!(location.indices(), &[1, 1]);
    }

    #[test]
    fn test_reject_names_missing_path_first() {
        let tree = vec![Node::new().child(Node::new().name("Nothing"))];

        let err = compile_routes_with(&tree, &options(MissingFieldPolicy::Reject)).unwrap_err();

        assert!(err.to_string().contains("'path'"));
    }

    #[test]
    fn test_compile_is_idempotent() {
        let tree = sample_tree();

        assert_eq!(compile_routes(&tree), compile_routes(&tree));
    }

    #[test]
    fn test_route_serialization_skips_missing_fields() {
        let complete = Route::new("/dash", "DashEl");
        let partial: Route<&str> = Route {
            path: Some("sales".to_owned()),
            element: None,
        };

        let complete_json = serde_json::to_value(&complete).unwrap();
        let partial_json = serde_json::to_value(&partial).unwrap();

        assert_eq!(complete_json, serde_json::json!({"path": "/dash", "element": "DashEl"}));
        assert_eq!(partial_json, serde_json::json!({"path": "sales"}));
    }
}
