//! Container class-name composition.
//!
//! Every routed view gets one of two default container classes (the ordinary
//! route class or the persistent-chrome "fixed" class), which the caller can
//! chain onto, transform, or disable entirely.

use std::fmt;

/// Default container class for ordinary page routes.
pub const ROUTE_CLASS: &str = "passage--route";

/// Default container class for persistent chrome (app bars, footers) that
/// keeps rendering while pages transition underneath it.
pub const FIXED_CLASS: &str = "passage--fixed";

/// Boxed class-name transform, called with the default class as its base.
pub type ClassTransform = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Caller-supplied container class: a literal chained after the default
/// class, or a transform over it.
pub enum ClassName {
    /// Appended to the default class as-is.
    Literal(String),
    /// Invoked with the default class; its output is appended.
    Transform(ClassTransform),
}

impl ClassName {
    /// Create a transform class name from a closure.
    pub fn transform(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self::Transform(Box::new(f))
    }
}

impl fmt::Debug for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(class) => f.debug_tuple("Literal").field(class).finish(),
            Self::Transform(_) => f.write_str("Transform(..)"),
        }
    }
}

impl From<&str> for ClassName {
    fn from(class: &str) -> Self {
        Self::Literal(class.to_string())
    }
}

impl From<String> for ClassName {
    fn from(class: String) -> Self {
        Self::Literal(class)
    }
}

/// Select the default container class for a route.
pub fn default_class(fixed: bool) -> &'static str {
    if fixed { FIXED_CLASS } else { ROUTE_CLASS }
}

/// Compose the container class for a routed view.
///
/// # Arguments
/// * `disable_style` - Suppress the default class entirely.
/// * `custom` - Optional caller-supplied class or transform.
/// * `default_class` - The route or fixed default class.
///
/// # Returns
/// With `disable_style` set, the custom literal, the transform applied to an
/// empty base, or an empty string; the default class is never included.
/// Otherwise the default class, with the custom class chained after it.
pub fn compose(disable_style: bool, custom: Option<&ClassName>, default_class: &str) -> String {
    if disable_style {
        return match custom {
            Some(ClassName::Literal(class)) => class.clone(),
            Some(ClassName::Transform(transform)) => transform(""),
            None => String::new(),
        };
    }

    match custom {
        Some(ClassName::Literal(class)) => format!("{} {}", default_class, class),
        Some(ClassName::Transform(transform)) => {
            format!("{} {}", default_class, transform(default_class))
        }
        None => default_class.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_class_selection() {
        assert_eq!(default_class(false), ROUTE_CLASS);
        assert_eq!(default_class(true), FIXED_CLASS);
    }

    #[test]
    fn test_compose_without_custom() {
        assert_eq!(compose(false, None, ROUTE_CLASS), "passage--route");
        assert_eq!(compose(true, None, ROUTE_CLASS), "");
    }

    #[test]
    fn test_compose_chains_literal_after_default() {
        let custom = ClassName::from("my-x");
        assert_eq!(
            compose(false, Some(&custom), FIXED_CLASS),
            "passage--fixed my-x"
        );
    }

    #[test]
    fn test_compose_disabled_returns_literal_only() {
        let custom = ClassName::from("my-x");
        assert_eq!(compose(true, Some(&custom), ROUTE_CLASS), "my-x");
    }

    #[test]
    fn test_compose_transform_receives_default() {
        let custom = ClassName::transform(|base| format!("{}-dark", base));
        assert_eq!(
            compose(false, Some(&custom), ROUTE_CLASS),
            "passage--route passage--route-dark"
        );
    }

    #[test]
    fn test_compose_disabled_transform_receives_empty_base() {
        let custom = ClassName::transform(|base| format!("{}custom", base));
        assert_eq!(compose(true, Some(&custom), ROUTE_CLASS), "custom");
    }

    #[test]
    fn test_disabled_never_contains_default_token() {
        let customs = [
            None,
            Some(ClassName::from("my-x")),
            Some(ClassName::transform(|base| format!("{}-suffixed", base))),
        ];
        for custom in &customs {
            let composed = compose(true, custom.as_ref(), ROUTE_CLASS);
            assert!(
                composed.split_whitespace().all(|token| token != ROUTE_CLASS),
                "default class leaked into {:?}",
                composed
            );
        }
    }
}
