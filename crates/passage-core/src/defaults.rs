//! App-wide transition defaults, constructed once at the composition root.

use serde_json::Value;

use crate::descriptor::{PropsMap, TransitionDescriptor};

/// The composition root's transition configuration, passed read-only into
/// every binding update.
///
/// Replaces tree-wide implicit context: whoever owns the route bindings owns
/// one of these and hands a reference to each `update` call. Changing it
/// between updates is observed by all bindings on their next update.
#[derive(Debug, Default)]
pub struct TransitionDefaults {
    /// The global descriptor every route resolves against.
    pub descriptor: TransitionDescriptor,
    /// Default timeout in milliseconds for class-driven transitions.
    pub timeout_ms: Option<f32>,
    /// Engine props applied to every route; per-route transition props take
    /// precedence over these.
    pub engine_props: PropsMap,
}

impl TransitionDefaults {
    /// Create defaults around a descriptor, with no timeout or global props.
    pub fn new(descriptor: TransitionDescriptor) -> Self {
        Self {
            descriptor,
            timeout_ms: None,
            engine_props: PropsMap::new(),
        }
    }

    /// Set the default timeout for class-driven transitions.
    pub fn with_timeout_ms(mut self, timeout_ms: f32) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Add an engine prop applied to every route.
    pub fn with_engine_prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.engine_props.insert(key.into(), value);
        self
    }
}

// The composition root may be shared by reference across bindings on other
// threads between synchronous updates.
static_assertions::assert_impl_all!(TransitionDefaults: Send, Sync);
