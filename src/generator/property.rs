use crate::constants::{tags, EDITOR_OPAQUE_TYPES, EDITOR_WIDGETS};
use std::fmt::Display;

/// Which side of a node a property lives on.
///
/// The declaration order is the sort order: inputs first, then settings,
/// then outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Input,
    Setting,
    Output,
}

impl Category {
    /// Resolves a category from its input code. Anything other than `i` or
    /// `o` is a setting.
    pub fn from_code(code: &str) -> Self {
        match code {
            "i" => Category::Input,
            "o" => Category::Output,
            _ => Category::Setting,
        }
    }

    /// Attribute tag placed in front of runtime accessors.
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Input => tags::INPUT,
            Category::Setting => tags::SETTING,
            Category::Output => tags::OUTPUT,
        }
    }

    /// Settings are edited in place and can't be wired to other nodes.
    pub fn has_port(&self) -> bool {
        !matches!(self, Category::Setting)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Category::Input => "input",
            Category::Setting => "setting",
            Category::Output => "output",
        };
        write!(f, "{s}")
    }
}

/// One parsed property line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub category: Category,
    pub type_name: String,
    pub identifier: String,
    pub default_value: Option<String>,
}

impl Property {
    pub fn new(
        category: Category,
        type_name: impl Into<String>,
        identifier: impl Into<String>,
        default_value: Option<String>,
    ) -> Self {
        Self {
            category,
            type_name: type_name.into(),
            identifier: identifier.into(),
            default_value,
        }
    }

    /// Whether the editor gets a field and a backing value for this property.
    pub fn is_editable(&self) -> bool {
        self.category != Category::Output && !is_editor_opaque(&self.type_name)
    }
}

/// A `u <alias> <target>` line, echoed verbatim ahead of the generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAlias {
    pub alias: String,
    pub target: String,
}

impl Display for TypeAlias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "using {} = {};", self.alias, self.target)
    }
}

/// Everything read from one input stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    pub aliases: Vec<TypeAlias>,
    pub properties: Vec<Property>,
}

impl Declarations {
    /// Properties in render order.
    pub fn sorted_properties(&self) -> Vec<Property> {
        let mut properties = self.properties.clone();
        sort_properties(&mut properties);
        properties
    }
}

/// Stable sort by category only; entries of the same category keep their
/// input order.
pub fn sort_properties(properties: &mut [Property]) {
    properties.sort_by_key(|property| property.category);
}

pub fn editor_widget(type_name: &str) -> Option<&'static str> {
    EDITOR_WIDGETS
        .iter()
        .find(|(name, _)| *name == type_name)
        .map(|(_, widget)| *widget)
}

pub fn is_editor_opaque(type_name: &str) -> bool {
    EDITOR_OPAQUE_TYPES.contains(&type_name)
}

/// Lowercases exactly the first character and leaves the rest alone.
///
/// This is not a camel-case conversion: `"HTTPPort"` becomes `"hTTPPort"`.
pub fn lower_first(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
