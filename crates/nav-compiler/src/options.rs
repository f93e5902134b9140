//! Compiler options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default number of tree levels visited: top-level nodes and their children.
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// How a compiler treats a node that lacks a field its output needs.
///
/// Applies to nodes below the top level (route children, sidebar children)
/// and to nameless sidebar parents. A top-level node without `path` and
/// `element` simply has no route, and a top-level node without `name` simply
/// has no menu entry, under every policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingFieldPolicy {
    /// Emit the entry anyway: incomplete routes carry `None` fields and
    /// nameless sidebar children leave a placeholder slot.
    PassThrough,
    /// Leave the entry out.
    #[default]
    Skip,
    /// Fail the compilation with [`CompileError::MissingField`](crate::CompileError).
    Reject,
}

impl MissingFieldPolicy {
    /// Policy name as written in configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PassThrough => "pass-through",
            Self::Skip => "skip",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for MissingFieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown policy name.
#[derive(Debug, thiserror::Error)]
#[error("unknown missing-field policy '{0}' (expected pass-through, skip or reject)")]
pub struct ParsePolicyError(String);

impl FromStr for MissingFieldPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pass-through" => Ok(Self::PassThrough),
            "skip" => Ok(Self::Skip),
            "reject" => Ok(Self::Reject),
            other => Err(ParsePolicyError(other.to_owned())),
        }
    }
}

/// Options shared by both compilers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    /// Treatment of incomplete nodes.
    pub missing_fields: MissingFieldPolicy,
    /// Number of tree levels visited (1 = top level only). Values below 1
    /// are treated as 1.
    pub max_depth: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            missing_fields: MissingFieldPolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CompileOptions {
    /// Options with the given policy and the default depth.
    #[must_use]
    pub fn with_policy(missing_fields: MissingFieldPolicy) -> Self {
        Self {
            missing_fields,
            ..Self::default()
        }
    }

    /// True if nodes at `level` (1-based) are visited.
    pub(crate) fn visits(&self, level: usize) -> bool {
        level <= self.max_depth.max(1)
    }
}
