use log::debug;
use nodegen::cli::{RewriteArgs, RewriteRunner};
use nodegen::rewrite::{FailurePolicy, RewriteSummary};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Copies a fixture tree into `dest` so tests never mutate repository files.
pub fn copy_tree(source: &Path, dest: &Path) {
    for entry in WalkDir::new(source).into_iter().filter_map(Result::ok) {
        let rel = entry.path().strip_prefix(source).unwrap();
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

/// Prints a diff of files and their contents between two directories.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let collect = |root: &Path| -> std::collections::HashSet<std::path::PathBuf> {
        WalkDir::new(root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.path().is_file())
            .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
            .collect()
    };
    let files1 = collect(dir1);
    let files2 = collect(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);

    for file in files1.difference(&files2) {
        println!("  + {:?} (only in actual)", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?} (only in expected)", file);
    }
    for file in files1.intersection(&files2) {
        let actual = fs::read_to_string(dir1.join(file)).unwrap_or_default();
        let expected = fs::read_to_string(dir2.join(file)).unwrap_or_default();
        if actual != expected {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{}", actual);
            println!("  --- Expected content:\n{}", expected);
        }
    }
    println!("=== End of Comparison ===\n");
}

pub fn rewrite_args(mode: &str, path: &Path, folder: bool) -> RewriteArgs {
    RewriteArgs {
        mode: mode.to_string(),
        path: path.to_path_buf(),
        file: !folder,
        folder,
        extension: "cs".to_string(),
        excludes: Vec::new(),
        on_error: FailurePolicy::Abort,
        dry_run: false,
    }
}

/// Copies `input_dir` to a scratch folder, rewrites it in folder mode, and
/// asserts the result matches `expected_dir` byte for byte.
pub fn run_and_assert(mode: &str, input_dir: &str, expected_dir: &str) -> RewriteSummary {
    let tmp_dir = tempfile::tempdir().unwrap();
    copy_tree(Path::new(input_dir), tmp_dir.path());

    let summary = RewriteRunner::new(rewrite_args(mode, tmp_dir.path(), true))
        .run()
        .unwrap()
        .expect("mode should be known");

    match dir_diff::is_different(tmp_dir.path(), expected_dir) {
        Ok(true) => {
            print_dir_diff(tmp_dir.path(), Path::new(expected_dir));
            panic!("Directories differ. See above for details.");
        }
        Ok(false) => {}
        Err(e) => debug!("Error comparing directories: {e:?}"),
    }
    assert!(!dir_diff::is_different(tmp_dir.path(), expected_dir).unwrap());
    summary
}
