//! Style Helpers
//!
//! Small builders for class lists and inline styles fed to CSS transitions.

/// `base` followed by every modifier whose flag is set
pub fn class_list(base: &str, modifiers: &[(&str, bool)]) -> String {
    let mut out = base.to_string();
    for (name, on) in modifiers {
        if *on {
            out.push(' ');
            out.push_str(name);
        }
    }
    out
}

/// Inline style for a transformed, stacked element
pub fn transform_style(rotation: f32, z_index: i32) -> String {
    format!("transform: rotate({}deg); z-index: {};", rotation, z_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list() {
        assert_eq!(class_list("tab", &[]), "tab");
        assert_eq!(
            class_list("tab", &[("active", true), ("disabled", false), ("bold", true)]),
            "tab active bold"
        );
    }

    #[test]
    fn test_transform_style() {
        assert_eq!(transform_style(-10.0, 2), "transform: rotate(-10deg); z-index: 2;");
        assert_eq!(transform_style(0.0, 0), "transform: rotate(0deg); z-index: 0;");
    }
}
