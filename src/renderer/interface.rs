use crate::error::Result;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Adds a template to the renderer's template collection.
    ///
    /// # Arguments
    /// * `name` - Name to identify the template
    /// * `template` - Template content as string
    fn add_template(&mut self, name: &'static str, template: &'static str) -> Result<()>;

    /// Renders a previously added template with the given context.
    ///
    /// # Arguments
    /// * `name` - Name the template was registered under
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text
    fn render_named(&self, name: &str, context: &serde_json::Value) -> Result<String>;
}
