//! Pattern rewriter
//!
//! One-off refactorings applied to node sources in place:
//! - `hoist`: moves `Initialize(title, category)` into expression-bodied overrides
//! - `modifiers`: narrows the visibility of the node data overrides
//! - `operation`: what happens to a single file
//! - `processor`: single-file and recursive folder drivers

pub mod hoist;
pub mod modifiers;
pub mod operation;
pub mod processor;

use crate::error::{Error, Result};
use std::fmt::Display;
use std::str::FromStr;

pub use hoist::TitleCategoryHoist;
pub use modifiers::ModifierRewrite;
pub use operation::RewriteOperation;
pub use processor::{FailurePolicy, FileProcessor, PathMode, RewriteOptions, RewriteSummary};

/// A whole-file text transformation.
///
/// Implementations return the input unchanged when there is nothing to do.
pub trait Transform {
    /// Short name used in log messages.
    fn name(&self) -> &'static str;

    /// Produces the rewritten file body.
    fn apply(&self, text: &str) -> Result<String>;
}

/// The fixed set of rewrites selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteMode {
    TitleCategory,
    GetNodeData,
    SetNodeData,
}

impl RewriteMode {
    pub const ALL: [RewriteMode; 3] =
        [RewriteMode::TitleCategory, RewriteMode::GetNodeData, RewriteMode::SetNodeData];

    pub fn as_str(&self) -> &'static str {
        match self {
            RewriteMode::TitleCategory => "title-category",
            RewriteMode::GetNodeData => "get-node-data",
            RewriteMode::SetNodeData => "set-node-data",
        }
    }

    /// Builds the transform for this mode.
    pub fn transform(&self) -> Result<Box<dyn Transform>> {
        Ok(match self {
            RewriteMode::TitleCategory => Box::new(TitleCategoryHoist::new()?),
            RewriteMode::GetNodeData => Box::new(modifiers::GET_NODE_DATA),
            RewriteMode::SetNodeData => Box::new(modifiers::SET_NODE_DATA),
        })
    }
}

impl FromStr for RewriteMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        RewriteMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| Error::UnknownMode { mode: s.to_string() })
    }
}

impl Display for RewriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
