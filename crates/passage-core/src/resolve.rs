//! Descriptor resolution: normalizing a `TransitionDescriptor` into an
//! engine-ready `ResolvedTransition`.
//!
//! Resolution is an exhaustive match over the descriptor, evaluated in
//! priority order:
//! 1. `Named` becomes a class-driven transition with the timeout applied.
//! 2. `Props` becomes an engine-managed transition with a shallow copy of
//!    the props.
//! 3. `Factory` is invoked exactly once and its object result is treated as
//!    case 2; a non-object result is an explicit error, and a panic inside
//!    the factory propagates to the caller.
//! 4. `Unrecognized` becomes the no-op passthrough.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::descriptor::{PropsMap, TransitionDescriptor, json_kind};
use crate::error::{ResolveError, Result};

/// The normalized, engine-ready transition configuration.
///
/// Exactly one of the two shapes exists per resolution: class-driven with an
/// optional timeout, or fully engine-managed props.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResolvedTransition {
    /// The engine animates by toggling css class names derived from
    /// `class_prefix`.
    Css {
        /// Prefix for the phase classes (`{prefix}-enter`, ...).
        class_prefix: String,
        /// Transition duration in milliseconds, if configured.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timeout_ms: Option<f32>,
    },
    /// The engine receives the props verbatim and manages the full
    /// enter/exit lifecycle itself.
    Engine {
        /// Engine props, in author order.
        props: PropsMap,
    },
}

impl ResolvedTransition {
    /// The no-op passthrough: engine-managed with no props.
    pub fn passthrough() -> Self {
        Self::Engine {
            props: PropsMap::new(),
        }
    }

    /// Check if this transition is class-driven.
    pub fn css_mode(&self) -> bool {
        matches!(self, Self::Css { .. })
    }

    /// Get the class prefix, if class-driven.
    pub fn class_prefix(&self) -> Option<&str> {
        match self {
            Self::Css { class_prefix, .. } => Some(class_prefix),
            Self::Engine { .. } => None,
        }
    }

    /// Get the timeout in milliseconds, if class-driven and configured.
    pub fn timeout_ms(&self) -> Option<f32> {
        match self {
            Self::Css { timeout_ms, .. } => *timeout_ms,
            Self::Engine { .. } => None,
        }
    }

    /// Get the engine props, if engine-managed.
    pub fn props(&self) -> Option<&PropsMap> {
        match self {
            Self::Css { .. } => None,
            Self::Engine { props } => Some(props),
        }
    }

    /// Check if this is the no-op passthrough.
    pub fn is_passthrough(&self) -> bool {
        matches!(self, Self::Engine { props } if props.is_empty())
    }
}

/// Normalize a transition descriptor into an engine-ready transition.
///
/// # Arguments
/// * `descriptor` - The raw descriptor, usually the composition root's.
/// * `timeout_ms` - Timeout applied to class-driven transitions.
///
/// # Returns
/// The resolved transition, or an error if a factory produced a non-object
/// value. Side effects: none beyond the single factory invocation.
pub fn resolve(
    descriptor: &TransitionDescriptor,
    timeout_ms: Option<f32>,
) -> Result<ResolvedTransition> {
    let resolved = match descriptor {
        TransitionDescriptor::Named(prefix) => ResolvedTransition::Css {
            class_prefix: prefix.clone(),
            timeout_ms,
        },
        TransitionDescriptor::Props(props) => ResolvedTransition::Engine {
            props: props.clone(),
        },
        // A panic inside the factory is a fatal configuration error and
        // propagates to the caller.
        TransitionDescriptor::Factory(factory) => match factory() {
            Value::Object(props) => ResolvedTransition::Engine { props },
            other => {
                return Err(ResolveError::FactoryResult {
                    kind: json_kind(&other),
                });
            }
        },
        TransitionDescriptor::Unrecognized => ResolvedTransition::passthrough(),
    };

    debug!(
        descriptor = descriptor.kind(),
        css_mode = resolved.css_mode(),
        "resolved transition descriptor"
    );
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_resolve_named() {
        let descriptor = TransitionDescriptor::named("fade");
        let resolved = resolve(&descriptor, Some(300.0)).unwrap();

        assert_eq!(
            resolved,
            ResolvedTransition::Css {
                class_prefix: "fade".to_string(),
                timeout_ms: Some(300.0),
            }
        );
        assert!(resolved.css_mode());
        assert_eq!(resolved.class_prefix(), Some("fade"));
        assert_eq!(resolved.timeout_ms(), Some(300.0));
        assert_eq!(resolved.props(), None);
    }

    #[test]
    fn test_resolve_named_without_timeout() {
        let descriptor = TransitionDescriptor::named("slide");
        let resolved = resolve(&descriptor, None).unwrap();

        assert!(resolved.css_mode());
        assert_eq!(resolved.timeout_ms(), None);
    }

    #[test]
    fn test_resolve_props_is_shallow_copy() {
        let mut props = PropsMap::new();
        props.insert("enter".to_string(), json!(500));
        props.insert("nested".to_string(), json!({ "deep": true }));
        let descriptor = TransitionDescriptor::props(props.clone());

        let resolved = resolve(&descriptor, Some(300.0)).unwrap();
        assert!(!resolved.css_mode());
        assert_eq!(resolved.props(), Some(&props));
        // The timeout only applies to class-driven transitions.
        assert_eq!(resolved.timeout_ms(), None);
    }

    #[test]
    fn test_resolve_factory_invoked_exactly_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let descriptor = TransitionDescriptor::factory(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            json!({ "appear": true })
        });

        let resolved = resolve(&descriptor, None).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!resolved.css_mode());
        assert_eq!(
            resolved.props().and_then(|p| p.get("appear")),
            Some(&json!(true))
        );
    }

    #[test]
    fn test_resolve_factory_non_object_is_error() {
        let descriptor = TransitionDescriptor::factory(|| json!(42));
        let err = resolve(&descriptor, None).unwrap_err();
        assert_eq!(err, ResolveError::FactoryResult { kind: "number" });

        let descriptor = TransitionDescriptor::factory(|| json!(["a", "b"]));
        let err = resolve(&descriptor, None).unwrap_err();
        assert_eq!(err, ResolveError::FactoryResult { kind: "array" });
    }

    #[test]
    #[should_panic(expected = "factory blew up")]
    fn test_resolve_factory_panic_propagates() {
        let descriptor = TransitionDescriptor::factory(|| panic!("factory blew up"));
        let _ = resolve(&descriptor, None);
    }

    #[test]
    fn test_resolve_unrecognized_is_passthrough() {
        let resolved = resolve(&TransitionDescriptor::Unrecognized, Some(300.0)).unwrap();
        assert_eq!(resolved, ResolvedTransition::passthrough());
        assert!(resolved.is_passthrough());
        assert!(!resolved.css_mode());
        assert_eq!(resolved.props().map(|p| p.len()), Some(0));
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let descriptor = TransitionDescriptor::named("push");
        let first = resolve(&descriptor, Some(200.0)).unwrap();
        let second = resolve(&descriptor, Some(200.0)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolved_transition_serialization() {
        let resolved = ResolvedTransition::Css {
            class_prefix: "fade".to_string(),
            timeout_ms: Some(300.0),
        };
        let json = serde_json::to_string(&resolved).unwrap();
        assert!(json.contains("\"type\":\"css\""));
        assert!(json.contains("fade"));

        let parsed: ResolvedTransition = serde_json::from_str(&json).unwrap();
        assert_eq!(resolved, parsed);
    }

    #[test]
    fn test_resolve_props_preserves_order() {
        let descriptor = TransitionDescriptor::from_json(json!({
            "z": 1,
            "a": 2,
        }));
        let resolved = resolve(&descriptor, None).unwrap();
        let keys: Vec<_> = resolved.props().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }
}
