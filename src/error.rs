use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to walk directory. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Failed to parse exclude pattern. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Failed to compile pattern. Original error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// A declaration line did not carry enough tokens for its shape.
    #[error("Malformed declaration on line {line_number}: '{line}' (expected {expected} tokens, found {found}).")]
    MalformedLine { line_number: usize, line: String, expected: usize, found: usize },

    /// A pattern the source convention requires was missing from the file.
    #[error("Pattern '{pattern}' not found while {context}.")]
    PatternNotFound { pattern: String, context: String },

    #[error("Invalid mode \"{mode}\"")]
    UnknownMode { mode: String },

    #[error("Cannot proceed: '{path}' is not a file. Use --folder to process a directory.")]
    NotAFile { path: String },

    #[error("Cannot rewrite '{path}'. Original error: {e}")]
    RewriteFailed { path: String, e: String },

    #[error("{failed} file(s) failed to rewrite.")]
    IncompleteRewrite { failed: usize },
}

/// Convenience type alias for Results with nodegen's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
