//! Constants used throughout nodegen

/// Editor widget used for each scalar type the graph editor knows how to draw.
pub const EDITOR_WIDGETS: &[(&str, &str)] = &[
    ("float", "FloatField"),
    ("int", "IntegerField"),
    ("bool", "Toggle"),
    ("string", "TextField"),
    ("float3", "Vector3Field"),
];

/// Types the editor cannot display; they never get a field or a backing value.
pub const EDITOR_OPAQUE_TYPES: &[&str] = &["GeometryData", "CurveData"];

/// Input token that introduces a type alias line.
pub const ALIAS_CODE: &str = "u";

/// File extension the rewriter treats as a source file.
pub const DEFAULT_EXTENSION: &str = "cs";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Runtime accessor tags
pub mod tags {
    pub const INPUT: &str = "[In]";
    pub const SETTING: &str = "[Setting]";
    pub const OUTPUT: &str = "[Out]";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
