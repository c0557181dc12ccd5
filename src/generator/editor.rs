//! Editor-side boilerplate: graph ports, inspector fields, and the values
//! backing them.

use crate::{error::Result, renderer::TemplateRenderer};

use super::{property::Property, property_context};

pub const PORT_TEMPLATE_NAME: &str = "editor_port";
pub const FIELD_TEMPLATE_NAME: &str = "editor_field";
pub const VALUE_TEMPLATE_NAME: &str = "editor_value";

pub const PORT_TEMPLATE: &str =
    "private GraphFrameworkPort {{ identifier | lower_first }}Port;";

pub const FIELD_TEMPLATE: &str = "{% set widget = type_name | editor_widget %}\
private {% if widget %}{{ widget }}{% else %}FieldTypeFor<{{ type_name }}>{% endif %} \
{{ identifier | lower_first }}Field;";

pub const VALUE_TEMPLATE: &str = "private {{ type_name }} {{ identifier | lower_first }}\
{% if default_value is not none %} = {{ default_value }}{% endif %};";

/// Renders the ports, fields and values blocks for already sorted properties.
///
/// Ports cover every non-setting property. Fields and values skip outputs and
/// editor-opaque types. Blocks are separated by a blank line and the result is
/// trimmed, so empty blocks collapse at the edges.
pub fn render_editor(engine: &dyn TemplateRenderer, properties: &[Property]) -> Result<String> {
    let mut ports = Vec::new();
    for property in properties.iter().filter(|p| p.category.has_port()) {
        ports.push(engine.render_named(PORT_TEMPLATE_NAME, &property_context(property))?);
    }

    let mut fields = Vec::new();
    let mut values = Vec::new();
    for property in properties.iter().filter(|p| p.is_editable()) {
        let context = property_context(property);
        fields.push(engine.render_named(FIELD_TEMPLATE_NAME, &context)?);
        values.push(engine.render_named(VALUE_TEMPLATE_NAME, &context)?);
    }

    let block = format!(
        "{}\n\n{}\n\n{}",
        ports.join("\n").trim(),
        fields.join("\n").trim(),
        values.join("\n").trim()
    );
    Ok(block.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{get_template_engine, parser::parse_str};

    fn render(input: &str) -> String {
        let engine = get_template_engine().unwrap();
        let declarations = parse_str(input).unwrap();
        render_editor(&engine, &declarations.sorted_properties()).unwrap()
    }

    #[test]
    fn output_only_gets_a_port_and_nothing_else() {
        assert_eq!(render("o float Result\n"), "private GraphFrameworkPort resultPort;");
    }

    #[test]
    fn opaque_setting_produces_no_output() {
        assert_eq!(render("s GeometryData Shape\n"), "");
    }

    #[test]
    fn opaque_input_keeps_its_port() {
        assert_eq!(render("i CurveData Curve\n"), "private GraphFrameworkPort curvePort;");
    }

    #[test]
    fn renders_all_three_blocks() {
        let output = render("o float3 Result\ns bool Enabled true\ni float Radius 1.0f\ni Quaternion Rotation\n");
        let expected = "\
private GraphFrameworkPort radiusPort;
private GraphFrameworkPort rotationPort;
private GraphFrameworkPort resultPort;

private FloatField radiusField;
private FieldTypeFor<Quaternion> rotationField;
private Toggle enabledField;

private float radius = 1.0f;
private Quaternion rotation;
private bool enabled = true;";
        assert_eq!(output, expected);
    }

    #[test]
    fn settings_only_has_no_ports_block() {
        assert_eq!(
            render("s int Count 3\n"),
            "private IntegerField countField;\n\nprivate int count = 3;"
        );
    }
}
