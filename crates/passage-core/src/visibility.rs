//! Route-match state and the visibility contract derived from it.
//!
//! This module provides:
//! - `RouteMatch`: the router's match signal for one route, read-only here
//! - `ViewVisibility`: per-update lifecycle flags (active, mount timing,
//!   unmount timing) derived from match state and the resolved transition

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::resolve::ResolvedTransition;

/// Whether the route owning a binding is the one active in the router.
///
/// Produced by the external router on every navigation; bindings only read
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RouteMatch {
    /// The router matched this route.
    Matched {
        /// Path params extracted by the router, e.g. `{"id": "42"}`.
        #[serde(default)]
        params: HashMap<String, String>,
    },
    /// The router is showing some other route.
    Unmatched,
}

impl RouteMatch {
    /// Create a match with no params.
    pub fn matched() -> Self {
        Self::Matched {
            params: HashMap::new(),
        }
    }

    /// Create a match carrying the router's path params.
    pub fn matched_with(params: HashMap<String, String>) -> Self {
        Self::Matched { params }
    }

    /// Check if the route is currently matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    /// Get the path params, if matched.
    pub fn params(&self) -> Option<&HashMap<String, String>> {
        match self {
            Self::Matched { params } => Some(params),
            Self::Unmatched => None,
        }
    }

    /// Look up a single path param by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params().and_then(|p| p.get(name)).map(String::as_str)
    }
}

impl Default for RouteMatch {
    fn default() -> Self {
        Self::Unmatched
    }
}

/// Lifecycle flags for one routed view, recomputed on every update.
///
/// A pure derivation of the current match state and resolved transition;
/// carries no state between computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewVisibility {
    /// True iff the route is currently matched.
    pub active: bool,
    /// Defer creating the view until the route first becomes active.
    /// Class-driven transitions mount eagerly instead, so their enter
    /// classes can be observed from the start.
    pub mount_on_enter: bool,
    /// Views always leave the tree once their exit animation completes.
    pub unmount_on_exit: bool,
}

impl ViewVisibility {
    /// Derive the visibility flags for one update.
    pub fn derive(route_match: &RouteMatch, transition: &ResolvedTransition) -> Self {
        Self {
            active: route_match.is_matched(),
            mount_on_enter: !transition.css_mode(),
            unmount_on_exit: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::TransitionDescriptor;
    use crate::resolve::resolve;

    fn css_transition() -> ResolvedTransition {
        resolve(&TransitionDescriptor::named("fade"), Some(300.0)).unwrap()
    }

    fn engine_transition() -> ResolvedTransition {
        resolve(&TransitionDescriptor::Unrecognized, None).unwrap()
    }

    #[test]
    fn test_active_tracks_match_state() {
        let visibility = ViewVisibility::derive(&RouteMatch::matched(), &css_transition());
        assert!(visibility.active);

        let visibility = ViewVisibility::derive(&RouteMatch::Unmatched, &css_transition());
        assert!(!visibility.active);
    }

    #[test]
    fn test_mount_on_enter_is_inverse_of_css_mode() {
        let visibility = ViewVisibility::derive(&RouteMatch::matched(), &css_transition());
        assert!(!visibility.mount_on_enter);

        let visibility = ViewVisibility::derive(&RouteMatch::matched(), &engine_transition());
        assert!(visibility.mount_on_enter);
    }

    #[test]
    fn test_unmount_on_exit_is_unconditional() {
        for route_match in [RouteMatch::matched(), RouteMatch::Unmatched] {
            for transition in [css_transition(), engine_transition()] {
                let visibility = ViewVisibility::derive(&route_match, &transition);
                assert!(visibility.unmount_on_exit);
            }
        }
    }

    #[test]
    fn test_match_params() {
        let mut params = HashMap::new();
        params.insert("id".to_string(), "42".to_string());
        let route_match = RouteMatch::matched_with(params);

        assert!(route_match.is_matched());
        assert_eq!(route_match.param("id"), Some("42"));
        assert_eq!(route_match.param("missing"), None);
        assert_eq!(RouteMatch::Unmatched.param("id"), None);
    }

    #[test]
    fn test_match_serialization() {
        let route_match = RouteMatch::matched();
        let json = serde_json::to_string(&route_match).unwrap();
        assert!(json.contains("\"type\":\"matched\""));

        let parsed: RouteMatch = serde_json::from_str(&json).unwrap();
        assert_eq!(route_match, parsed);

        // Params default to empty when absent.
        let parsed: RouteMatch = serde_json::from_str(r#"{"type":"matched"}"#).unwrap();
        assert_eq!(parsed, RouteMatch::matched());
    }

    #[test]
    fn test_default_is_unmatched() {
        assert_eq!(RouteMatch::default(), RouteMatch::Unmatched);
    }
}
