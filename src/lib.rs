//! # SnowFX
//!
//! A falling-snow particle overlay with a tick-driven motion scheduler.
//!
//! ## Features
//!
//! - **Particle Factory**: Seedable generation of particle populations from a configuration
//! - **Motion Orchestration**: Endless fall / drift / rotate cycles per particle, with clean stop semantics
//! - **Render Binding**: Pure projection to transforms, plus a pass-through overlay layer directive
//! - **Lifecycle Management**: Atomic population rebuilds on configuration or viewport changes
//! - **ECS Integration**: A `bevy_ecs` resource and system that drive the overlay from a frame clock
//!
//! ## Architecture Design
//!
//! This crate follows the **Anemic Domain Model (贫血模型)** pattern:
//! - **State**: Pure data structures (`Particle`, `Orchestration`, `MotionPlayer`)
//! - **Service**: Behaviour as associated functions (`MotionOrchestrator`, `PlaybackService`, `RenderBinding`)
//! - **System**: ECS systems for scheduling (`snow_update_system`)
//!
//! ### Example
//!
//! ```rust
//! use snowfx::config::{SnowConfig, Viewport};
//! use snowfx::snow::LifecycleManager;
//!
//! let mut overlay = LifecycleManager::with_seed(SnowConfig::default(), Viewport::new(400.0, 800.0), 1);
//! overlay.mount();
//! for _ in 0..60 {
//!     overlay.tick(1000.0 / 60.0);
//! }
//! let frames = overlay.frames();
//! assert_eq!(frames.len(), 50);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Errors, logging and shared macros
//! - [`config`]: Configuration loading and normalization
//! - [`animation`]: Keyframe tracks and clip playback
//! - [`snow`]: Particle factory, motion orchestration, render binding and lifecycle
//! - [`ecs`]: ECS resources for the frame clock and viewport

/// Errors, logging and shared macros
pub mod core;
/// Configuration system
pub mod config;
/// Animation primitives with keyframes
pub mod animation;
/// Snow overlay: particles, motion, rendering and lifecycle
pub mod snow;
/// ECS resources
pub mod ecs;

pub use crate::core::{SnowFxError, SnowFxResult};
