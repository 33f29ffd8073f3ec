//! 播放服务层
//!
//! 遵循贫血模型，将片段播放逻辑封装在Service中

use super::clip::{CycleClip, MotionSample};
use super::player::{MotionPlayer, PlaybackStatus};

/// 播放服务 - 封装片段播放逻辑
pub struct PlaybackService;

impl PlaybackService {
    /// 播放片段，从头开始
    pub fn play(player: &mut MotionPlayer, clip: CycleClip) {
        player.current_clip = Some(clip);
        player.current_time = 0.0;
        player.playing = true;
    }

    /// 停止播放，保留当前时间和片段，采样值冻结在停止时刻
    pub fn stop(player: &mut MotionPlayer) {
        player.playing = false;
    }

    /// 推进播放时间
    ///
    /// 到达终点时时间被钳制在片段总时长，并只返回一次 `Finished`。
    pub fn advance(player: &mut MotionPlayer, delta_ms: f32) -> PlaybackStatus {
        if !player.playing {
            return PlaybackStatus::Idle;
        }

        let Some(clip) = &player.current_clip else {
            player.playing = false;
            return PlaybackStatus::Idle;
        };

        let delta = if delta_ms.is_finite() { delta_ms.max(0.0) } else { 0.0 };
        player.current_time += delta;

        let total = clip.total_ms();
        if player.current_time >= total {
            player.current_time = total;
            player.playing = false;
            PlaybackStatus::Finished
        } else if player.current_time < clip.delay_ms {
            PlaybackStatus::Delayed
        } else {
            PlaybackStatus::Playing
        }
    }

    /// 采样当前时间的运动值
    pub fn sample(player: &MotionPlayer) -> Option<MotionSample> {
        player
            .current_clip
            .as_ref()
            .map(|clip| clip.sample(player.current_time))
    }
}
