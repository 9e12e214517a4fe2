//! CSS class prefix resolution

/// Brand token every default prefix starts with.
pub const BRAND: &str = "ant";

/// Resolve the class prefix for a component.
///
/// A non-empty `custom` prefix wins; otherwise the suffix is namespaced with
/// [`BRAND`], e.g. `"form"` becomes `"ant-form"`.
pub fn prefix_cls(suffix: &str, custom: Option<&str>) -> String {
    match custom {
        Some(custom) if !custom.is_empty() => custom.to_string(),
        _ => format!("{}-{}", BRAND, suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefix() {
        assert_eq!(prefix_cls("form", None), "ant-form");
        assert_eq!(prefix_cls("col", None), "ant-col");
    }

    #[test]
    fn test_custom_prefix_wins() {
        assert_eq!(prefix_cls("form", Some("custom")), "custom");
    }

    #[test]
    fn test_empty_custom_prefix_falls_back() {
        assert_eq!(prefix_cls("form", Some("")), "ant-form");
    }
}
