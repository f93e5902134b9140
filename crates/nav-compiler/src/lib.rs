//! Route table and sidebar menu compilers for navc.
//!
//! This crate provides two pure transformations over a [`NavigationNode`]
//! tree:
//! - [`compile_routes`]: flat ordered route table for a router
//! - [`compile_sidebar`]: role-scoped hierarchical menu model
//!
//! Both are stateless and read the tree without mutating it, so one tree can
//! be compiled repeatedly, per role, and from several threads at once. The
//! `_with` variants take [`CompileOptions`] to choose the depth and the
//! [`MissingFieldPolicy`] for incomplete nodes.
//!
//! # Quick Start
//!
//! ```
//! use nav_compiler::{compile_routes, compile_sidebar};
//! use nav_tree::NavigationNode;
//!
//! let tree: Vec<NavigationNode<&str, &str>> = vec![
//!     NavigationNode::new()
//!         .name("Dashboard")
//!         .path("dashboard")
//!         .element("DashboardPage")
//!         .icon("home"),
//! ];
//!
//! let routes = compile_routes(&tree);
//! let menu = compile_sidebar(&tree, "admin");
//!
//! assert_eq!(routes[0].path.as_deref(), Some("dashboard"));
//! assert_eq!(menu[0].label.target(), Some("/admin/dashboard"));
//! ```

mod error;
mod options;
mod routes;
mod sidebar;

pub use error::{CompileError, NodeLocation};
pub use options::{CompileOptions, DEFAULT_MAX_DEPTH, MissingFieldPolicy, ParsePolicyError};
pub use routes::{Route, compile_routes, compile_routes_with};
pub use sidebar::{
    Label, SidebarEntry, SidebarItem, compile_sidebar, compile_sidebar_with, role_link,
};

// Re-export the input type for convenience
pub use nav_tree::NavigationNode;
