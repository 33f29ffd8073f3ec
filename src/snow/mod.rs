//! 雪花覆盖层模块
//!
//! 数据流：
//!
//! ```text
//! SnowConfig ──► ParticleFactory ──► Particle[]
//!                                      │
//!                                      ▼
//!                 MotionOrchestrator（每粒子一个 Orchestration，循环下落/漂移/旋转）
//!                                      │
//!                                      ▼
//!                 RenderBinding ──► VisualFrame[] + OverlayLayer
//!
//! LifecycleManager 监督整个粒子群的启动/停止边界
//! ```
//!
//! ## 使用示例
//!
//! ```rust
//! use snowfx::config::{SnowConfig, Viewport};
//! use snowfx::snow::LifecycleManager;
//!
//! let mut manager = LifecycleManager::with_seed(SnowConfig::default(), Viewport::new(400.0, 800.0), 7);
//! manager.mount();
//! manager.tick(16.0);
//! assert_eq!(manager.frames().len(), 50);
//!
//! let retired = manager.unmount();
//! assert!(retired.all_stopped());
//! ```

pub mod bounds;
pub mod factory;
pub mod lifecycle;
pub mod liveness;
pub mod orchestration;
pub mod orchestrator;
pub mod particle;
pub mod policy;
pub mod render;
pub mod system;

#[cfg(test)]
mod property_tests;

pub use bounds::{MotionBounds, DRIFT_LIMIT, EXIT_MARGIN, SPAWN_OFFSET_MAX, SPAWN_OFFSET_MIN};
pub use factory::ParticleFactory;
pub use lifecycle::{LifecycleManager, Population, TickReport};
pub use liveness::{LivenessFlag, LivenessToken};
pub use orchestration::{
    CompletionOutcome, CycleCompletion, DiscardReason, Orchestration, OrchestrationState,
};
pub use orchestrator::MotionOrchestrator;
pub use particle::{MotionParameters, Particle};
pub use policy::{CycleResetPolicy, ReRandomizeParameters, ReuseParameters};
pub use render::{OverlayLayer, Palette, PointerEvents, RenderBinding, VisualFrame};
pub use system::{snow_update_system, OverlayFrames, SnowOverlay};
