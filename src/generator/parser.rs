use crate::{
    constants::ALIAS_CODE,
    error::{Error, Result},
};
use log::{debug, trace};
use std::io::BufRead;

use super::property::{Category, Declarations, Property, TypeAlias};

/// Minimum token count for both line shapes.
const MIN_TOKENS: usize = 3;

/// A single parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Alias(TypeAlias),
    Property(Property),
}

/// Parses one declaration line.
///
/// Returns `Ok(None)` for a blank line, which callers treat as the end of
/// input.
///
/// # Arguments
/// * `line` - Raw line without its terminator
/// * `line_number` - 1-based position used in error messages
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<Entry>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(None);
    }
    if tokens.len() < MIN_TOKENS {
        return Err(Error::MalformedLine {
            line_number,
            line: line.to_string(),
            expected: MIN_TOKENS,
            found: tokens.len(),
        });
    }

    let entry = if tokens[0] == ALIAS_CODE {
        Entry::Alias(TypeAlias { alias: tokens[1].to_string(), target: tokens[2].to_string() })
    } else {
        Entry::Property(Property::new(
            Category::from_code(tokens[0]),
            tokens[1],
            tokens[2],
            tokens.get(3).map(|value| value.to_string()),
        ))
    };
    Ok(Some(entry))
}

/// Reads declarations until the first blank line or end of input.
pub fn parse_declarations(reader: impl BufRead) -> Result<Declarations> {
    let mut declarations = Declarations::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        trace!("Read line {}: {line:?}", index + 1);
        match parse_line(&line, index + 1)? {
            Some(Entry::Alias(alias)) => {
                debug!("Parsed alias: {alias}");
                declarations.aliases.push(alias);
            }
            Some(Entry::Property(property)) => {
                debug!(
                    "Parsed {} property '{}' of type '{}'",
                    property.category, property.identifier, property.type_name
                );
                declarations.properties.push(property);
            }
            None => break,
        }
    }

    Ok(declarations)
}

/// Convenience wrapper over [`parse_declarations`] for in-memory input.
pub fn parse_str(input: &str) -> Result<Declarations> {
    parse_declarations(input.as_bytes())
}
