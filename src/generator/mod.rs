//! Declaration generator
//!
//! Turns terse property lines into node boilerplate:
//! - `parser`: reads the line grammar into [`Declarations`]
//! - `property`: categories, descriptors and the fixed lookup tables
//! - `editor`: ports, inspector fields and backing values
//! - `runtime`: tagged auto-property accessors

pub mod editor;
pub mod parser;
pub mod property;
pub mod runtime;

use crate::{
    error::Result,
    renderer::{MiniJinjaRenderer, TemplateRenderer},
};
use log::debug;
use serde_json::json;

pub use parser::{parse_declarations, parse_str};
pub use property::{Category, Declarations, Property, TypeAlias};
pub use runtime::TagStyle;

/// Which blocks to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    Editor,
    Runtime,
    #[default]
    Both,
}

impl OutputMode {
    pub fn includes_editor(&self) -> bool {
        matches!(self, OutputMode::Editor | OutputMode::Both)
    }

    pub fn includes_runtime(&self) -> bool {
        matches!(self, OutputMode::Runtime | OutputMode::Both)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    pub mode: OutputMode,
    pub tag_style: TagStyle,
}

/// Builds a renderer with every generator template registered.
pub fn get_template_engine() -> Result<MiniJinjaRenderer> {
    let mut engine = MiniJinjaRenderer::new();
    engine.add_template(editor::PORT_TEMPLATE_NAME, editor::PORT_TEMPLATE)?;
    engine.add_template(editor::FIELD_TEMPLATE_NAME, editor::FIELD_TEMPLATE)?;
    engine.add_template(editor::VALUE_TEMPLATE_NAME, editor::VALUE_TEMPLATE)?;
    engine.add_template(runtime::ACCESSOR_TEMPLATE_NAME, runtime::ACCESSOR_TEMPLATE)?;
    Ok(engine)
}

pub(crate) fn property_context(property: &Property) -> serde_json::Value {
    json!({
        "type_name": property.type_name,
        "identifier": property.identifier,
        "default_value": property.default_value,
    })
}

/// Produces the complete generator output.
///
/// Alias lines come first, then the editor block, then the runtime block, one
/// group per line. Without properties only the aliases are returned, and an
/// empty string means there is nothing to print.
pub fn generate(
    engine: &dyn TemplateRenderer,
    declarations: &Declarations,
    options: GenerateOptions,
) -> Result<String> {
    let mut sections = Vec::new();

    if !declarations.aliases.is_empty() {
        let aliases: Vec<String> =
            declarations.aliases.iter().map(ToString::to_string).collect();
        sections.push(aliases.join("\n"));
    }

    if declarations.properties.is_empty() {
        debug!("No properties parsed, skipping property blocks");
        return Ok(sections.join("\n"));
    }

    let properties = declarations.sorted_properties();
    debug!("Rendering {} properties in {:?} mode", properties.len(), options.mode);

    if options.mode.includes_editor() {
        sections.push(editor::render_editor(engine, &properties)?);
    }
    if options.mode.includes_runtime() {
        sections.push(runtime::render_runtime(engine, &properties, options.tag_style)?);
    }

    Ok(sections.join("\n"))
}
