//! The seam between route bindings and the external animation engine.
//!
//! This module provides:
//! - `AnimationEngine`: the trait the timed visual work hides behind
//! - `TransitionFrame`: the per-update handoff from a binding to the engine
//! - `EngineConfig`: resolved transition plus override props, with
//!   `flatten` producing the single engine-facing prop map
//! - `TransitionPhase`: the css class vocabulary for appear/enter/exit

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::descriptor::PropsMap;
use crate::events::EventQueue;
use crate::resolve::ResolvedTransition;
use crate::visibility::ViewVisibility;

/// Animation phase of a routed view.
///
/// Class-driven engines toggle the phase classes derived from the resolved
/// class prefix; `Appear` is the first-mount pass for views that start out
/// active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPhase {
    /// First mount of an already-active view.
    Appear,
    /// The view is entering.
    Enter,
    /// The view is exiting.
    Exit,
}

impl TransitionPhase {
    /// Class applied for the whole phase, e.g. `fade-enter`.
    pub fn class_name(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.suffix())
    }

    /// Class applied while the phase is animating, e.g. `fade-enter-active`.
    pub fn active_class_name(&self, prefix: &str) -> String {
        format!("{}-{}-active", prefix, self.suffix())
    }

    fn suffix(&self) -> &'static str {
        match self {
            Self::Appear => "appear",
            Self::Enter => "enter",
            Self::Exit => "exit",
        }
    }
}

/// Resolved transition plus the override props layered on top of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// The normalized transition from descriptor resolution.
    pub transition: ResolvedTransition,
    /// Merged global and per-route override props, highest precedence.
    pub overrides: PropsMap,
}

impl EngineConfig {
    /// Create a config with no overrides.
    pub fn new(transition: ResolvedTransition) -> Self {
        Self {
            transition,
            overrides: PropsMap::new(),
        }
    }

    /// Flatten to the single engine-facing prop map.
    ///
    /// Class-driven transitions contribute `class_prefix` and `timeout_ms`
    /// entries; engine-managed transitions contribute their resolved props.
    /// Overrides are merged on top and win either way, so a per-route
    /// `timeout_ms` override takes precedence over the resolved one.
    pub fn flatten(&self) -> PropsMap {
        let mut props = match &self.transition {
            ResolvedTransition::Css {
                class_prefix,
                timeout_ms,
            } => {
                let mut props = PropsMap::new();
                props.insert(
                    "class_prefix".to_string(),
                    Value::String(class_prefix.clone()),
                );
                if let Some(timeout_ms) = timeout_ms {
                    props.insert("timeout_ms".to_string(), Value::from(*timeout_ms));
                }
                props
            }
            ResolvedTransition::Engine { props } => props.clone(),
        };

        for (key, value) in &self.overrides {
            props.insert(key.clone(), value.clone());
        }
        props
    }
}

/// One synchronous handoff from a route binding to the animation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionFrame {
    /// The route this frame belongs to.
    pub route_id: String,
    /// Whether the view currently exists in the tree.
    pub mounted: bool,
    /// Lifecycle flags derived for this update.
    pub visibility: ViewVisibility,
    /// Composed container class.
    pub class_name: String,
    /// Props forwarded verbatim to the container element.
    pub container_props: PropsMap,
    /// Transition configuration for the engine.
    pub config: EngineConfig,
}

/// External collaborator that performs the timed visual work.
///
/// `apply` is called once per binding update with the latest frame; the
/// engine reports lifecycle progress by pushing events onto `events`.
/// Cancellation of in-flight animations on rapid match toggling is the
/// engine's responsibility, not the binding's.
pub trait AnimationEngine {
    /// Consume one frame.
    fn apply(&mut self, frame: &TransitionFrame, events: &mut EventQueue);
}

// Ensure frames can cross threads between synchronous updates.
static_assertions::assert_impl_all!(TransitionFrame: Send);
static_assertions::assert_impl_all!(EngineConfig: Send);
