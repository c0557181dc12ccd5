pub use crate::generator::property::lower_first;

/// Filter form of the widget table lookup; yields an empty string for types
/// without a dedicated widget.
pub fn editor_widget(type_name: &str) -> String {
    crate::generator::property::editor_widget(type_name)
        .map(str::to_string)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_widget_known_type() {
        assert_eq!(editor_widget("bool"), "Toggle");
    }

    #[test]
    fn test_editor_widget_unknown_type() {
        assert_eq!(editor_widget("GeometryData"), "");
    }
}
