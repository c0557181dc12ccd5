use crate::{
    constants::DEFAULT_EXTENSION,
    error::{Error, Result},
    ext::PathExt,
    ioutils::{read_file, write_file},
};
use clap::ValueEnum;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::{debug, error, info, warn};
use std::fmt::Display;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use super::{operation::RewriteOperation, Transform};

/// Whether the given path is a single file or the root of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathMode {
    #[default]
    File,
    Folder,
}

/// What a folder rewrite does when one file fails.
#[derive(Debug, Clone, ValueEnum, Copy, PartialEq, Eq, Default)]
#[value(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failing file; files already rewritten stay rewritten.
    #[default]
    Abort,
    /// Log the failure and carry on with the remaining files.
    Continue,
}

impl Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FailurePolicy::Abort => "abort",
            FailurePolicy::Continue => "continue",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone)]
pub struct RewriteOptions {
    pub path_mode: PathMode,
    /// Extension of candidate files, without the leading dot.
    pub extension: String,
    /// Glob patterns, relative to the folder root, that are never visited.
    pub excludes: Vec<String>,
    pub failure_policy: FailurePolicy,
    pub dry_run: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            path_mode: PathMode::default(),
            extension: DEFAULT_EXTENSION.to_string(),
            excludes: Vec::new(),
            failure_policy: FailurePolicy::default(),
            dry_run: false,
        }
    }
}

/// Per-run counts reported once the traversal is done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    pub rewritten: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RewriteSummary {
    fn record(&mut self, operation: &RewriteOperation) {
        match operation {
            RewriteOperation::Rewrite { .. } => self.rewritten += 1,
            RewriteOperation::Unchanged { .. } => self.unchanged += 1,
            RewriteOperation::Skip { .. } => self.skipped += 1,
        }
    }
}

impl Display for RewriteSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rewritten, {} unchanged, {} skipped, {} failed",
            self.rewritten, self.unchanged, self.skipped, self.failed
        )
    }
}

/// Applies one transform to a file or to every matching file under a folder.
pub struct FileProcessor<'a> {
    transform: &'a dyn Transform,
    options: &'a RewriteOptions,
    excludes: GlobSet,
}

impl<'a> FileProcessor<'a> {
    pub fn new(transform: &'a dyn Transform, options: &'a RewriteOptions) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &options.excludes {
            debug!("Adding exclude pattern: {pattern}");
            builder.add(Glob::new(pattern)?);
        }
        Ok(Self { transform, options, excludes: builder.build()? })
    }

    /// Entry point: dispatches on the configured path mode.
    pub fn process_path(&self, path: &Path) -> Result<RewriteSummary> {
        match self.options.path_mode {
            PathMode::File => self.process_single_file(path),
            PathMode::Folder => self.process_all_files(path),
        }
    }

    fn process_single_file(&self, path: &Path) -> Result<RewriteSummary> {
        if path.is_dir() {
            return Err(Error::NotAFile { path: path.display().to_string() });
        }

        let operation = if path.has_extension(&self.options.extension) {
            self.plan(path)?
        } else {
            warn!(
                "'{}' does not have the .{} extension, leaving it alone",
                path.display(),
                self.options.extension
            );
            RewriteOperation::Skip { source: path.to_path_buf() }
        };
        self.handle_operation(&operation)?;

        let mut summary = RewriteSummary::default();
        summary.record(&operation);
        Ok(summary)
    }

    /// Walks `root` depth-first and rewrites every matching file.
    pub fn process_all_files(&self, root: &Path) -> Result<RewriteSummary> {
        let mut summary = RewriteSummary::default();
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !self.is_excluded(root, entry));

        for dir_entry in walker {
            let result = dir_entry.map_err(Error::from).and_then(|entry| self.process_entry(&entry));
            match result {
                Ok(Some(operation)) => summary.record(&operation),
                Ok(None) => {}
                Err(e) => match self.options.failure_policy {
                    FailurePolicy::Abort => return Err(e),
                    FailurePolicy::Continue => {
                        error!("{e}");
                        summary.failed += 1;
                    }
                },
            }
        }

        Ok(summary)
    }

    fn process_entry(&self, entry: &DirEntry) -> Result<Option<RewriteOperation>> {
        if entry.file_type().is_dir() {
            return Ok(None);
        }

        let path = entry.path();
        if !path.has_extension(&self.options.extension) {
            debug!("Ignoring '{}'", path.display());
            return Ok(Some(RewriteOperation::Skip { source: path.to_path_buf() }));
        }

        self.plan(path)
            .and_then(|operation| self.handle_operation(&operation).map(|_| operation))
            .map(Some)
            .map_err(|e| Error::RewriteFailed { path: path.display().to_string(), e: e.to_string() })
    }

    fn is_excluded(&self, root: &Path, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let excluded = self.excludes.is_match(relative);
        if excluded {
            debug!("Excluding '{}'", entry.path().display());
        }
        excluded
    }

    /// Reads `path` and runs the transform over it without touching the disk.
    pub fn plan(&self, path: &Path) -> Result<RewriteOperation> {
        let original = read_file(path)?;
        let rewritten = self.transform.apply(&original)?;
        let target = path.to_path_buf();

        if rewritten == original {
            Ok(RewriteOperation::Unchanged { target })
        } else {
            Ok(RewriteOperation::Rewrite { target, content: rewritten })
        }
    }

    fn handle_operation(&self, operation: &RewriteOperation) -> Result<()> {
        if let RewriteOperation::Rewrite { target, content } = operation {
            if !self.options.dry_run {
                write_file(content, target)?;
            }
        }
        info!("{}: {}", self.transform.name(), operation.get_message(self.options.dry_run));
        Ok(())
    }
}
