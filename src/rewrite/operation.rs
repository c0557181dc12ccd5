use std::path::PathBuf;

/// Outcome of running a transform over one path.
#[derive(Debug, PartialEq, Eq)]
pub enum RewriteOperation {
    /// The transform changed the text; `content` replaces the file.
    Rewrite { target: PathBuf, content: String },
    /// The transform found nothing to change.
    Unchanged { target: PathBuf },
    /// The path is not a rewrite candidate.
    Skip { source: PathBuf },
}

impl RewriteOperation {
    /// Gets a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            RewriteOperation::Rewrite { target, .. } => {
                format!("{}Rewriting '{}'", prefix, target.display())
            }
            RewriteOperation::Unchanged { target } => {
                format!("{}Leaving '{}' unchanged (nothing to rewrite)", prefix, target.display())
            }
            RewriteOperation::Skip { source } => {
                format!("{}Skipping '{}'", prefix, source.display())
            }
        }
    }
}
