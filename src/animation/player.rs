use super::clip::CycleClip;

/// 片段播放器 (贫血模型 - 纯数据结构)
///
/// 遵循贫血模型设计原则：
/// - MotionPlayer: 纯数据结构 ← 本文件
/// - PlaybackService: 业务逻辑封装 → service.rs
///
/// ```ignore
/// use snowfx::animation::{MotionPlayer, PlaybackService};
///
/// let mut player = MotionPlayer::default();
/// PlaybackService::play(&mut player, clip);
/// PlaybackService::advance(&mut player, 16.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotionPlayer {
    /// 当前播放的片段
    pub current_clip: Option<CycleClip>,
    /// 当前播放时间 (毫秒)
    pub current_time: f32,
    /// 是否正在播放
    pub playing: bool,
}

impl MotionPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 一次推进之后的播放状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// 没有在播放
    Idle,
    /// 仍处于启动延迟中
    Delayed,
    /// 正在播放
    Playing,
    /// 本次推进中到达终点（每个片段只报告一次）
    Finished,
}
