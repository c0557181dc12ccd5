use std::path::Path;

/// Extension trait for Path used when filtering rewrite candidates.
pub trait PathExt {
    /// Returns true when the file name ends with `.<extension>`.
    ///
    /// The comparison is case-sensitive and the extension is given without the
    /// leading dot.
    ///
    /// # Examples
    /// ```
    /// use nodegen::ext::PathExt;
    /// use std::path::Path;
    ///
    /// assert!(Path::new("Nodes/AddNode.cs").has_extension("cs"));
    /// assert!(!Path::new("Nodes/AddNode.cs.meta").has_extension("cs"));
    /// ```
    fn has_extension(&self, extension: &str) -> bool;
}

impl PathExt for Path {
    fn has_extension(&self, extension: &str) -> bool {
        let extension = extension.trim_start_matches('.');
        self.extension().and_then(|ext| ext.to_str()).is_some_and(|ext| ext == extension)
    }
}
