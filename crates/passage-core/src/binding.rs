//! Per-route orchestration: options, the mounted latch, frame production,
//! and exit-driven unmounting.
//!
//! This module provides:
//! - `RouteOptions`: the per-route configuration surface, all fields
//!   defaulted
//! - `RouteBinding`: ties descriptor resolution, visibility derivation, and
//!   class composition together for one route entry and talks to the
//!   animation engine through `TransitionFrame`s

use serde_json::Value;
use tracing::{debug, trace};

use crate::class_name::{self, ClassName};
use crate::defaults::TransitionDefaults;
use crate::descriptor::PropsMap;
use crate::engine::{EngineConfig, TransitionFrame};
use crate::error::Result;
use crate::events::EngineEvent;
use crate::resolve::resolve;
use crate::screen::ScreenAdapter;
use crate::visibility::{RouteMatch, ViewVisibility};

/// Per-route configuration surface. All fields have defaults.
#[derive(Debug, Default)]
pub struct RouteOptions {
    /// Suppress default class injection.
    pub disable_style: bool,
    /// Custom container class or class transform.
    pub class_name: Option<ClassName>,
    /// Select the persistent-chrome default class instead of the route one.
    pub fixed: bool,
    /// Wrap rendered content in the screen adapter.
    pub screen: bool,
    /// Forwarded to the screen adapter when `screen` is set.
    pub screen_props: PropsMap,
    /// Merged on top of the resolved transition, highest precedence.
    pub transition_props: PropsMap,
    /// Forwarded verbatim to the container element.
    pub container_props: PropsMap,
    /// Remaining caller props, forwarded verbatim to the external router.
    pub router_props: PropsMap,
}

impl RouteOptions {
    /// Create options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress default class injection.
    pub fn with_disable_style(mut self, disable_style: bool) -> Self {
        self.disable_style = disable_style;
        self
    }

    /// Set the custom container class or transform.
    pub fn with_class_name(mut self, class_name: impl Into<ClassName>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Use the persistent-chrome default class.
    pub fn with_fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    /// Wrap rendered content in the screen adapter.
    pub fn with_screen(mut self, screen: bool) -> Self {
        self.screen = screen;
        self
    }

    /// Add a prop forwarded to the screen adapter.
    pub fn with_screen_prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.screen_props.insert(key.into(), value);
        self
    }

    /// Add a transition prop merged on top of the resolved transition.
    pub fn with_transition_prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.transition_props.insert(key.into(), value);
        self
    }

    /// Add a prop forwarded verbatim to the container element.
    pub fn with_container_prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.container_props.insert(key.into(), value);
        self
    }

    /// Add a prop forwarded verbatim to the external router.
    pub fn with_router_prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.router_props.insert(key.into(), value);
        self
    }
}

/// Orchestrates resolution, visibility, and lifecycle for one route entry.
///
/// State machine: two states, matched and unmatched, driven solely by the
/// router's match signal. The `mounted` latch tracks whether the view exists
/// in the tree; it is lifecycle bookkeeping, not resolution state. Every
/// update re-resolves and re-derives from current inputs.
#[derive(Debug)]
pub struct RouteBinding {
    route_id: String,
    options: RouteOptions,
    route_match: RouteMatch,
    mounted: bool,
    initialized: bool,
}

impl RouteBinding {
    /// Create a binding for one route.
    pub fn new(route_id: impl Into<String>, options: RouteOptions) -> Self {
        Self {
            route_id: route_id.into(),
            options,
            route_match: RouteMatch::Unmatched,
            mounted: false,
            initialized: false,
        }
    }

    /// Get the route ID.
    pub fn route_id(&self) -> &str {
        &self.route_id
    }

    /// Get the route options.
    pub fn options(&self) -> &RouteOptions {
        &self.options
    }

    /// Get the match state from the latest update.
    pub fn route_match(&self) -> &RouteMatch {
        &self.route_match
    }

    /// Check if the view currently exists in the tree.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Props for the external router, forwarded verbatim.
    pub fn router_props(&self) -> &PropsMap {
        &self.options.router_props
    }

    /// Recompute the frame for the latest match signal.
    ///
    /// Resolves the global descriptor, derives visibility, advances the
    /// mounted latch, composes the container class, and layers the override
    /// props (global engine props, then per-route transition props on top).
    /// Identical inputs yield identical frames; only the mounted latch and
    /// the factory invocation a factory descriptor implies carry effects.
    pub fn update(
        &mut self,
        route_match: RouteMatch,
        defaults: &TransitionDefaults,
    ) -> Result<TransitionFrame> {
        let transition = resolve(&defaults.descriptor, defaults.timeout_ms)?;
        let visibility = ViewVisibility::derive(&route_match, &transition);

        if visibility.active {
            self.mounted = true;
        } else if !self.initialized && !visibility.mount_on_enter {
            // Class-driven views exist from the first update even while
            // unmatched, so their enter classes are observable. After an
            // exit unmounts them, re-mounting waits for the next match.
            self.mounted = true;
        }
        self.initialized = true;
        self.route_match = route_match;

        let class_name = class_name::compose(
            self.options.disable_style,
            self.options.class_name.as_ref(),
            class_name::default_class(self.options.fixed),
        );

        let mut overrides = defaults.engine_props.clone();
        for (key, value) in &self.options.transition_props {
            overrides.insert(key.clone(), value.clone());
        }

        trace!(
            route_id = %self.route_id,
            active = visibility.active,
            mounted = self.mounted,
            "route binding updated"
        );

        Ok(TransitionFrame {
            route_id: self.route_id.clone(),
            mounted: self.mounted,
            visibility,
            class_name,
            container_props: self.options.container_props.clone(),
            config: EngineConfig {
                transition,
                overrides,
            },
        })
    }

    /// Feed an engine lifecycle event back into the binding.
    ///
    /// `ExitFinished` for an inactive route clears the mounted latch. Events
    /// for other routes are ignored, as is an `ExitFinished` that arrives
    /// after the route matched again.
    pub fn absorb_event(&mut self, event: &EngineEvent) {
        if event.route_id() != self.route_id {
            return;
        }
        if matches!(event, EngineEvent::ExitFinished { .. })
            && !self.route_match.is_matched()
            && self.mounted
        {
            debug!(route_id = %self.route_id, "exit finished, unmounting view");
            self.mounted = false;
        }
    }

    /// Produce the view content for the current state.
    ///
    /// Returns `None` while unmounted. The content callback receives the
    /// typed match state and may branch on it; when the `screen` option is
    /// set the produced content is wrapped by the screen adapter with the
    /// route's screen props.
    pub fn render<V>(
        &self,
        screen: &dyn ScreenAdapter<V>,
        content: impl FnOnce(&RouteMatch) -> V,
    ) -> Option<V> {
        if !self.mounted {
            return None;
        }
        let view = content(&self.route_match);
        if self.options.screen {
            Some(screen.wrap(&self.options.screen_props, view))
        } else {
            Some(view)
        }
    }
}

// Bindings may be owned by hosts that update them off the main thread.
static_assertions::assert_impl_all!(RouteBinding: Send);
