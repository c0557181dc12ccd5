use crate::{error::Result, renderer::TemplateRenderer};
use clap::ValueEnum;
use serde_json::Value;
use std::fmt::Display;

use super::{property::Property, property_context};

pub const ACCESSOR_TEMPLATE_NAME: &str = "runtime_accessor";

pub const ACCESSOR_TEMPLATE: &str = "{% if tag %}{{ tag }} {% endif %}\
public {{ type_name }} {{ identifier }} { get; private set; }\
{% if default_value is not none %} = {{ default_value }};{% endif %}";

/// How runtime accessors are annotated with their category.
#[derive(Debug, Clone, ValueEnum, Copy, PartialEq, Eq, Default)]
#[value(rename_all = "lowercase")]
pub enum TagStyle {
    /// Attribute-style `[In]`, `[Setting]`, `[Out]` prefixes.
    #[default]
    Bracketed,
    /// Plain auto-properties.
    #[value(name = "none")]
    Untagged,
}

impl Display for TagStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TagStyle::Bracketed => "bracketed",
            TagStyle::Untagged => "none",
        };
        write!(f, "{s}")
    }
}

/// Renders one accessor line per property, in the order given.
pub fn render_runtime(
    engine: &dyn TemplateRenderer,
    properties: &[Property],
    tag_style: TagStyle,
) -> Result<String> {
    let mut lines = Vec::with_capacity(properties.len());
    for property in properties {
        let mut context = property_context(property);
        if let (TagStyle::Bracketed, Some(map)) = (tag_style, context.as_object_mut()) {
            map.insert("tag".to_string(), Value::from(property.category.tag()));
        }
        lines.push(engine.render_named(ACCESSOR_TEMPLATE_NAME, &context)?);
    }
    Ok(lines.join("\n").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{get_template_engine, parser::parse_str};

    fn render(input: &str, tag_style: TagStyle) -> String {
        let engine = get_template_engine().unwrap();
        let declarations = parse_str(input).unwrap();
        render_runtime(&engine, &declarations.sorted_properties(), tag_style).unwrap()
    }

    #[test]
    fn bracketed_end_to_end() {
        let output = render("i float Radius\ns bool Enabled true\no float3 Result\n", TagStyle::Bracketed);
        let expected = "\
[In] public float Radius { get; private set; }
[Setting] public bool Enabled { get; private set; } = true;
[Out] public float3 Result { get; private set; }";
        assert_eq!(output, expected);
    }

    #[test]
    fn untagged_style_starts_at_public() {
        let output = render("o float3 Result\ni float Radius\n", TagStyle::Untagged);
        let expected = "\
public float Radius { get; private set; }
public float3 Result { get; private set; }";
        assert_eq!(output, expected);
    }

    #[test]
    fn opaque_types_are_still_rendered() {
        let output = render("s GeometryData Shape\n", TagStyle::Bracketed);
        assert_eq!(output, "[Setting] public GeometryData Shape { get; private set; }");
    }

    #[test]
    fn one_line_per_property() {
        let input = "i float A\ni int B\ns bool C false\no float D\nx string E \"e\"\n";
        let output = render(input, TagStyle::Bracketed);
        assert_eq!(output.lines().count(), parse_str(input).unwrap().properties.len());
    }

    #[test]
    fn display_tag_style_variants() {
        assert_eq!(TagStyle::Bracketed.to_string(), "bracketed");
        assert_eq!(TagStyle::Untagged.to_string(), "none");
    }
}
