//! Transition descriptors: the raw, heterogeneous transition configuration
//! supplied by the application.
//!
//! This module provides:
//! - `TransitionDescriptor`: tagged union over the supported descriptor shapes
//! - `DescriptorFactory`: boxed zero-argument factory producing engine props
//! - `TransitionDescriptor::from_json`: classification of untyped JSON input,
//!   with a no-op fallback for unrecognized shapes
//!
//! # Example
//!
//! ```ignore
//! use passage_core::descriptor::TransitionDescriptor;
//!
//! // A class-name prefix the engine toggles css classes for
//! let named = TransitionDescriptor::named("fade");
//!
//! // Raw engine props, handed over verbatim
//! let props = TransitionDescriptor::from_json(serde_json::json!({ "enter": 500 }));
//! ```

use std::fmt;

use serde_json::{Map, Value};
use tracing::warn;

/// Ordered property map handed to the animation engine.
pub type PropsMap = Map<String, Value>;

/// Zero-argument factory producing a JSON value that should be an object.
pub type DescriptorFactory = Box<dyn Fn() -> Value + Send + Sync>;

/// The raw transition configuration supplied by the application.
///
/// Owned by the composition root and read, never mutated, by route bindings.
#[derive(Default)]
pub enum TransitionDescriptor {
    /// A css class-name prefix; the engine animates by toggling class names
    /// derived from it.
    Named(String),
    /// Raw engine props, forwarded after a shallow copy.
    Props(PropsMap),
    /// Deferred props: invoked exactly once per resolution.
    Factory(DescriptorFactory),
    /// Anything else, including absent/null. Resolves to a no-op passthrough.
    #[default]
    Unrecognized,
}

impl TransitionDescriptor {
    /// Create a named (class-driven) descriptor.
    pub fn named(prefix: impl Into<String>) -> Self {
        Self::Named(prefix.into())
    }

    /// Create a props descriptor from an engine prop map.
    pub fn props(props: PropsMap) -> Self {
        Self::Props(props)
    }

    /// Create a factory descriptor from a closure.
    pub fn factory(factory: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Self::Factory(Box::new(factory))
    }

    /// Classify an untyped JSON value into a descriptor.
    ///
    /// Strings become `Named`, objects become `Props`, and null becomes
    /// `Unrecognized` (no transition configured). Any other shape also
    /// becomes `Unrecognized`, logged at WARN because it is almost always a
    /// configuration mistake rather than an intentional absence.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::String(prefix) => Self::Named(prefix),
            Value::Object(props) => Self::Props(props),
            Value::Null => Self::Unrecognized,
            other => {
                warn!(
                    kind = json_kind(&other),
                    "unrecognized transition descriptor, falling back to no-op passthrough"
                );
                Self::Unrecognized
            }
        }
    }

    /// Short name of the descriptor shape, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Named(_) => "named",
            Self::Props(_) => "props",
            Self::Factory(_) => "factory",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Check if this descriptor is class-driven.
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    /// Check if this descriptor carries or produces engine props.
    pub fn is_engine_managed(&self) -> bool {
        matches!(self, Self::Props(_) | Self::Factory(_))
    }
}

impl fmt::Debug for TransitionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(prefix) => f.debug_tuple("Named").field(prefix).finish(),
            Self::Props(props) => f.debug_tuple("Props").field(props).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
            Self::Unrecognized => f.write_str("Unrecognized"),
        }
    }
}

impl From<&str> for TransitionDescriptor {
    fn from(prefix: &str) -> Self {
        Self::Named(prefix.to_string())
    }
}

impl From<String> for TransitionDescriptor {
    fn from(prefix: String) -> Self {
        Self::Named(prefix)
    }
}

impl From<PropsMap> for TransitionDescriptor {
    fn from(props: PropsMap) -> Self {
        Self::Props(props)
    }
}

/// JSON type name of a value, for diagnostics and error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// Descriptors live in the composition root and are read from every binding.
static_assertions::assert_impl_all!(TransitionDescriptor: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_string() {
        let descriptor = TransitionDescriptor::from_json(json!("fade"));
        assert!(matches!(descriptor, TransitionDescriptor::Named(ref p) if p == "fade"));
        assert!(descriptor.is_named());
        assert_eq!(descriptor.kind(), "named");
    }

    #[test]
    fn test_from_json_object() {
        let descriptor = TransitionDescriptor::from_json(json!({ "enter": 500 }));
        match descriptor {
            TransitionDescriptor::Props(ref props) => {
                assert_eq!(props.get("enter"), Some(&json!(500)));
            }
            other => panic!("expected props descriptor, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_null_is_unrecognized() {
        let descriptor = TransitionDescriptor::from_json(Value::Null);
        assert!(matches!(descriptor, TransitionDescriptor::Unrecognized));
    }

    #[test]
    fn test_from_json_other_shapes_are_unrecognized() {
        for value in [json!(42), json!(true), json!([1, 2, 3])] {
            let descriptor = TransitionDescriptor::from_json(value);
            assert!(matches!(descriptor, TransitionDescriptor::Unrecognized));
        }
    }

    #[test]
    fn test_from_json_preserves_prop_order() {
        let descriptor =
            TransitionDescriptor::from_json(json!({ "z": 1, "a": 2, "m": 3 }));
        match descriptor {
            TransitionDescriptor::Props(props) => {
                let keys: Vec<_> = props.keys().cloned().collect();
                assert_eq!(keys, vec!["z", "a", "m"]);
            }
            other => panic!("expected props descriptor, got {:?}", other),
        }
    }

    #[test]
    fn test_conversions() {
        assert!(TransitionDescriptor::from("slide").is_named());
        assert!(TransitionDescriptor::from("slide".to_string()).is_named());

        let mut props = PropsMap::new();
        props.insert("appear".to_string(), json!(true));
        assert!(TransitionDescriptor::from(props).is_engine_managed());

        let factory = TransitionDescriptor::factory(|| json!({}));
        assert!(factory.is_engine_managed());
        assert_eq!(factory.kind(), "factory");
    }

    #[test]
    fn test_default_is_unrecognized() {
        assert!(matches!(
            TransitionDescriptor::default(),
            TransitionDescriptor::Unrecognized
        ));
    }

    #[test]
    fn test_debug_formatting() {
        assert_eq!(
            format!("{:?}", TransitionDescriptor::named("fade")),
            "Named(\"fade\")"
        );
        assert_eq!(
            format!("{:?}", TransitionDescriptor::factory(|| Value::Null)),
            "Factory(..)"
        );
    }

    #[test]
    fn test_json_kind_names() {
        assert_eq!(json_kind(&json!(null)), "null");
        assert_eq!(json_kind(&json!(1.5)), "number");
        assert_eq!(json_kind(&json!("x")), "string");
        assert_eq!(json_kind(&json!([])), "array");
        assert_eq!(json_kind(&json!({})), "object");
    }
}
