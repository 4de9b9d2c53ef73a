//! Transition-descriptor resolution and routed-view lifecycle.
//!
//! This crate provides:
//! - **Descriptor resolution**: a named class, raw props, or a factory
//!   closure normalized into one engine-ready transition
//! - **Visibility**: mount/unmount/active flags derived from route-match
//!   state and the resolved transition
//! - **Class composition**: default container classes chained with caller
//!   overrides
//! - **Route bindings**: per-route orchestration against pluggable router,
//!   animation engine, and screen collaborators
//!
//! # Architecture
//!
//! ```text
//! TransitionDefaults (composition root)     Router match signal
//!   └── descriptor / timeout / props          │
//!                  │                          │
//!                  ▼                          ▼
//!             RouteBinding ──resolve()──► ResolvedTransition
//!                  │                          │
//!                  ├── ViewVisibility ◄───────┘
//!                  ├── composed container class
//!                  ▼
//!           TransitionFrame ──► AnimationEngine ──► EngineEvent
//!                  ▲                                    │
//!                  └──────────── absorb_event ◄─────────┘
//! ```

pub mod binding;
pub mod class_name;
pub mod defaults;
pub mod descriptor;
pub mod engine;
pub mod error;
pub mod events;
pub mod resolve;
pub mod screen;
pub mod visibility;

pub use binding::{RouteBinding, RouteOptions};
pub use class_name::{ClassName, ClassTransform, FIXED_CLASS, ROUTE_CLASS, compose, default_class};
pub use defaults::TransitionDefaults;
pub use descriptor::{DescriptorFactory, PropsMap, TransitionDescriptor};
pub use engine::{AnimationEngine, EngineConfig, TransitionFrame, TransitionPhase};
pub use error::{ResolveError, Result};
pub use events::{EngineEvent, EventQueue};
pub use resolve::{ResolvedTransition, resolve};
pub use screen::{NoScreen, ScreenAdapter};
pub use visibility::{RouteMatch, ViewVisibility};
