//! Compilation errors.

use std::fmt;

/// Position of a node in the input tree, as a list of sibling indices.
///
/// Displays as `nodes[2].children[0]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeLocation(Vec<usize>);

impl NodeLocation {
    /// Location built from explicit indices.
    #[must_use]
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Sibling indices from the top level down.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Tree level of the node (1 for top-level nodes).
    pub fn level(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn push(&mut self, index: usize) {
        self.0.push(index);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

impl fmt::Display for NodeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut indices = self.0.iter();
        match indices.next() {
            Some(first) => write!(f, "nodes[{first}]")?,
            None => return f.write_str("nodes"),
        }
        for index in indices {
            write!(f, ".children[{index}]")?;
        }
        Ok(())
    }
}

/// Error returned by the strict compiler entry points.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// A node lacks a field required for its output entry.
    #[error("{location}: missing required field '{field}'")]
    MissingField {
        /// Field name (`name`, `path` or `element`).
        field: &'static str,
        /// Position of the offending node.
        location: NodeLocation,
    },
}

impl CompileError {
    pub(crate) fn missing(field: &'static str, location: &NodeLocation) -> Self {
        Self::MissingField {
            field,
            location: location.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_display_top_level() {
        assert_eq!(NodeLocation::new(vec![3]).to_string(), "nodes[3]");
    }

    #[test]
    fn test_location_display_nested() {
        let location = NodeLocation::new(vec![2, 0, 5]);

        assert_eq!(location.to_string(), "nodes[2].children[0].children[5]");
        assert_eq!(location.level(), 3);
    }

    #[test]
    fn test_location_display_empty() {
        assert_eq!(NodeLocation::default().to_string(), "nodes");
    }

    #[test]
    fn test_missing_field_message() {
        let err = CompileError::missing("element", &NodeLocation::new(vec![1, 0]));

        assert_eq!(
            err.to_string(),
            "nodes[1].children[0]: missing required field 'element'"
        );
    }
}
