/// Handles argument parsing and command dispatch.
pub mod cli;

/// Fixed tables and defaults.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// Property boilerplate generation.
pub mod generator;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Template rendering for generated code.
pub mod renderer;

/// In-place refactorings of node sources.
pub mod rewrite;
