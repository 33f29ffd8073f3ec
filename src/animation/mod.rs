//! 动画系统模块
//!
//! 提供按时长做线性插值、并在结束时给出完成通知的运动原语。
//! 雪花的下落、漂移和旋转都建立在这里的关键帧轨道之上。
//!
//! ## 使用示例
//!
//! ```rust
//! use snowfx::animation::{CycleClip, CycleSpec, MotionPlayer, PlaybackService, PlaybackStatus};
//!
//! let clip = CycleClip::new(CycleSpec {
//!     spawn_y: -100.0,
//!     fall_target: 850.0,
//!     spawn_x: 200.0,
//!     drift: 30.0,
//!     duration_ms: 8000.0,
//!     delay_ms: 0.0,
//! });
//!
//! let mut player = MotionPlayer::new();
//! PlaybackService::play(&mut player, clip);
//! assert_eq!(PlaybackService::advance(&mut player, 4000.0), PlaybackStatus::Playing);
//! assert_eq!(PlaybackService::advance(&mut player, 4000.0), PlaybackStatus::Finished);
//! ```

pub mod clip;
pub mod keyframe;
pub mod player;
pub mod service;

pub use clip::{CycleClip, CycleSpec, MotionSample, FULL_TURN_DEGREES};
pub use keyframe::{Keyframe, KeyframeTrack};
pub use player::{MotionPlayer, PlaybackStatus};
pub use service::PlaybackService;
