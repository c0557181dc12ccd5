//! Replaces the `Initialize(title, category);` constructor call with
//! expression-bodied `Title` and `Category` overrides placed right after the
//! class header.
//!
//! The file is handled as a list of line records. The call line is removed
//! and the two overrides are inserted as structural edits on that list, so
//! no character offsets have to be kept in sync between the two steps.

use crate::error::{Error, Result};
use log::debug;
use regex::Regex;
use std::borrow::Cow;

use super::Transform;

const CALL_PATTERN: &str = r"Initialize\((.*?), (.*?)\);";
const ANCHOR_PATTERN: &str = r"public class (.*?) \{";

/// Extra indentation of the hoisted members relative to the class header.
const MEMBER_INDENT: &str = "    ";

/// One line of the file together with its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Line<'a> {
    /// Byte offset of the line in the original text; `None` for inserted lines.
    start: Option<usize>,
    body: Cow<'a, str>,
    ending: &'a str,
}

impl<'a> Line<'a> {
    fn inserted(body: String, ending: &'a str) -> Self {
        Self { start: None, body: Cow::Owned(body), ending }
    }

    fn indentation(&self) -> &str {
        let trimmed = self.body.trim_start();
        &self.body[..self.body.len() - trimmed.len()]
    }

    fn contains_offset(&self, offset: usize) -> bool {
        self.start.is_some_and(|start| offset >= start && offset < start + self.body.len())
    }
}

fn split_lines(text: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut start = 0;
    for raw in text.split_inclusive('\n') {
        let body_len = if raw.ends_with("\r\n") {
            raw.len() - 2
        } else if raw.ends_with('\n') {
            raw.len() - 1
        } else {
            raw.len()
        };
        lines.push(Line {
            start: Some(start),
            body: Cow::Borrowed(&raw[..body_len]),
            ending: &raw[body_len..],
        });
        start += raw.len();
    }
    lines
}

fn join_lines(lines: &[Line<'_>]) -> String {
    let mut text = String::new();
    for line in lines {
        text.push_str(&line.body);
        text.push_str(line.ending);
    }
    text
}

/// Cuts the byte range `start..end` out of a line body. Returns `None` when
/// only whitespace would be left, meaning the whole line goes.
fn cut_span(body: &str, start: usize, end: usize) -> Option<String> {
    let before = &body[..start];
    let after = &body[end..];
    if before.trim().is_empty() && after.trim().is_empty() {
        return None;
    }
    if before.trim().is_empty() {
        Some(format!("{before}{}", after.trim_start()))
    } else {
        Some(format!("{}{after}", before.trim_end()))
    }
}

/// Hoists the first `Initialize(title, category);` match in the file.
///
/// The match is purely textual: a commented-out call above the live one is
/// the one that gets hoisted.
pub struct TitleCategoryHoist {
    call: Regex,
    anchor: Regex,
}

impl TitleCategoryHoist {
    pub fn new() -> Result<Self> {
        Ok(Self {
            call: Regex::new(CALL_PATTERN)?,
            anchor: Regex::new(ANCHOR_PATTERN)?,
        })
    }
}

impl Transform for TitleCategoryHoist {
    fn name(&self) -> &'static str {
        "title-category"
    }

    fn apply(&self, text: &str) -> Result<String> {
        let Some(captures) = self.call.captures(text) else {
            return Ok(text.to_string());
        };
        let Some(call) = captures.get(0) else {
            return Ok(text.to_string());
        };
        let title = &captures[1];
        let category = &captures[2];
        debug!("Hoisting title {title} and category {category}");

        let mut lines = split_lines(text);

        let call_index = lines
            .iter()
            .position(|line| line.contains_offset(call.start()))
            .ok_or_else(|| Error::PatternNotFound {
                pattern: CALL_PATTERN.to_string(),
                context: "locating the Initialize line to remove".to_string(),
            })?;
        let line_start = lines[call_index].start.unwrap_or_default();
        match cut_span(&lines[call_index].body, call.start() - line_start, call.end() - line_start) {
            Some(rest) => lines[call_index].body = Cow::Owned(rest),
            None => {
                lines.remove(call_index);
            }
        }

        let anchor_index = lines
            .iter()
            .position(|line| self.anchor.is_match(&line.body))
            .ok_or_else(|| Error::PatternNotFound {
                pattern: ANCHOR_PATTERN.to_string(),
                context: "locating the class header".to_string(),
            })?;

        let anchor = &lines[anchor_index];
        let indent = format!("{}{MEMBER_INDENT}", anchor.indentation());
        let (anchor_ending, last_ending) = match anchor.ending {
            "" => ("\n", ""),
            ending => (ending, ending),
        };
        lines[anchor_index].ending = anchor_ending;

        let members = [
            Line::inserted(
                format!("{indent}protected override string Title => {title};"),
                anchor_ending,
            ),
            Line::inserted(
                format!("{indent}protected override NodeCategory Category => {category};"),
                last_ending,
            ),
        ];
        for (offset, member) in members.into_iter().enumerate() {
            lines.insert(anchor_index + 1 + offset, member);
        }

        Ok(join_lines(&lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADD_NODE: &str = r#"using GeometryGraph.Runtime.Graph;

namespace GeometryGraph.Editor {
    public class AddNode : AbstractNode<GeometryGraph.Runtime.Graph.AddNode> {
        private GraphFrameworkPort aPort;

        public override void CreateNode() {
            Initialize("Add", NodeCategory.Math);
            aPort = GraphFrameworkPort.Create("A", this);
        }
    }
}
"#;

    fn hoist(text: &str) -> Result<String> {
        TitleCategoryHoist::new().unwrap().apply(text)
    }

    #[test]
    fn hoists_title_and_category_after_class_header() {
        let expected = r#"using GeometryGraph.Runtime.Graph;

namespace GeometryGraph.Editor {
    public class AddNode : AbstractNode<GeometryGraph.Runtime.Graph.AddNode> {
        protected override string Title => "Add";
        protected override NodeCategory Category => NodeCategory.Math;
        private GraphFrameworkPort aPort;

        public override void CreateNode() {
            aPort = GraphFrameworkPort.Create("A", this);
        }
    }
}
"#;
        assert_eq!(hoist(ADD_NODE).unwrap(), expected);
    }

    #[test]
    fn other_lines_keep_their_order() {
        let output = hoist(ADD_NODE).unwrap();
        let original: Vec<&str> =
            ADD_NODE.lines().filter(|line| !line.contains("Initialize(")).collect();
        let remaining: Vec<&str> = output
            .lines()
            .filter(|line| !line.contains("protected override"))
            .collect();
        assert_eq!(original, remaining);
    }

    #[test]
    fn without_call_text_is_unchanged() {
        let text = "public class Empty {\n}\n";
        assert_eq!(hoist(text).unwrap(), text);
    }

    #[test]
    fn second_run_is_a_no_op() {
        let once = hoist(ADD_NODE).unwrap();
        assert_eq!(hoist(&once).unwrap(), once);
    }

    #[test]
    fn keeps_crlf_line_endings() {
        let text = ADD_NODE.replace('\n', "\r\n");
        let output = hoist(&text).unwrap();
        assert!(output.contains(
            "{\r\n        protected override string Title => \"Add\";\r\n"
        ));
        assert!(!output.contains("Initialize("));
        assert_eq!(output.matches('\n').count(), output.matches("\r\n").count());
    }

    #[test]
    fn missing_class_header_is_not_found() {
        let text = "void CreateNode() {\n    Initialize(\"Add\", NodeCategory.Math);\n}\n";
        assert!(matches!(hoist(text), Err(Error::PatternNotFound { .. })));
    }

    #[test]
    fn call_sharing_a_line_keeps_the_surrounding_code() {
        let text = "public class A {\n    void F() { Initialize(\"A\", NodeCategory.Math); }\n}\n";
        let expected = "public class A {\n    protected override string Title => \"A\";\n    protected override NodeCategory Category => NodeCategory.Math;\n    void F() { }\n}\n";
        assert_eq!(hoist(text).unwrap(), expected);
    }

    #[test]
    fn trailing_comment_survives_on_its_own_line() {
        let text = ADD_NODE.replace(
            "Initialize(\"Add\", NodeCategory.Math);",
            "Initialize(\"Add\", NodeCategory.Math); // legacy",
        );
        let output = hoist(&text).unwrap();
        assert!(output.contains("        protected override string Title => \"Add\";\n"));
        assert!(output.contains("        public override void CreateNode() {\n            // legacy\n            aPort"));
        assert!(!output.contains("Initialize("));
    }

    #[test]
    fn first_textual_match_is_the_one_hoisted() {
        let text = "public class A {\n    // Initialize(\"Old\", NodeCategory.Old);\n    void F() {\n        Initialize(\"New\", NodeCategory.Math);\n    }\n}\n";
        let output = hoist(text).unwrap();
        assert!(output.contains("Title => \"Old\";"));
        assert!(output.contains("    //\n"));
    }

    #[test]
    fn cut_span_drops_whitespace_only_lines() {
        assert_eq!(cut_span("    Call();  ", 4, 11), None);
        assert_eq!(cut_span("    Call(); // c", 4, 11).as_deref(), Some("    // c"));
        assert_eq!(cut_span("    f { Call(); }", 8, 15).as_deref(), Some("    f { }"));
    }

    #[test]
    fn captured_expressions_are_kept_verbatim() {
        let text = "public class A {\n    void F() {\n        Initialize(Titles.For(\"a\"), Categories.Math);\n    }\n}\n";
        let output = hoist(text).unwrap();
        assert!(output.contains("    protected override string Title => Titles.For(\"a\");\n"));
        assert!(output.contains("    protected override NodeCategory Category => Categories.Math;\n"));
    }

    #[test]
    fn split_and_join_round_trip() {
        for text in ["", "a", "a\n", "a\r\nb", "a\n\nb\n"] {
            assert_eq!(join_lines(&split_lines(text)), text);
        }
    }
}
