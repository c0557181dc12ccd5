use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::{constants::STDIN_INDICATOR, error::Result};

/// Opens the generator input: stdin for `None` or `-`, otherwise the named file.
pub fn open_input(input: Option<&str>) -> Result<Box<dyn BufRead>> {
    match input {
        None | Some(STDIN_INDICATOR) => Ok(Box::new(BufReader::new(std::io::stdin()))),
        Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
    }
}

pub fn read_file<P: AsRef<Path>>(source_path: P) -> Result<String> {
    Ok(std::fs::read_to_string(source_path.as_ref())?)
}

/// Overwrites `dest_path` with `content`. No backup is kept.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    Ok(std::fs::write(dest_path.as_ref(), content)?)
}
