//! 运动参数的取值范围与采样
//!
//! 工厂和编排器共用同一组范围，保证初始参数和每周期重新随机的参数同分布。

use crate::config::{SnowConfig, Viewport};
use rand::Rng;

/// 生成区上沿（视口顶部之上）
pub const SPAWN_OFFSET_MIN: f32 = -150.0;
/// 生成区下沿
pub const SPAWN_OFFSET_MAX: f32 = -50.0;
/// 粒子越过视口底部的距离
pub const EXIT_MARGIN: f32 = 50.0;
/// 漂移半振幅上限
pub const DRIFT_LIMIT: f32 = 50.0;
/// 不透明度范围
pub const OPACITY_MIN: f32 = 0.5;
pub const OPACITY_MAX: f32 = 1.0;

/// 归一化之后的运动范围
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionBounds {
    pub size: (f32, f32),
    pub speed: (f32, f32),
    pub viewport: Viewport,
    pub stagger_start: bool,
}

impl MotionBounds {
    pub fn from_config(config: &SnowConfig, viewport: Viewport) -> Self {
        Self {
            size: config.size_range(),
            speed: config.speed_range(),
            viewport: viewport.normalized(),
            stagger_start: config.stagger_start,
        }
    }

    /// 每个周期下落的终点
    pub fn fall_target(&self) -> f32 {
        self.viewport.height + EXIT_MARGIN
    }

    pub fn sample_size<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        uniform(rng, self.size.0, self.size.1)
    }

    pub fn sample_duration<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        uniform(rng, self.speed.0, self.speed.1)
    }

    pub fn sample_drift<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        uniform(rng, -DRIFT_LIMIT, DRIFT_LIMIT)
    }

    pub fn sample_spawn_offset<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        uniform(rng, SPAWN_OFFSET_MIN, SPAWN_OFFSET_MAX)
    }

    /// 零宽视口退化为原点
    pub fn sample_spawn_x<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        uniform(rng, 0.0, self.viewport.width)
    }

    pub fn sample_opacity<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        uniform(rng, OPACITY_MIN, OPACITY_MAX)
    }

    /// 首个周期的启动延迟，`[0, duration]`
    pub fn sample_start_delay<R: Rng + ?Sized>(&self, rng: &mut R, duration_ms: f32) -> f32 {
        if self.stagger_start {
            uniform(rng, 0.0, duration_ms)
        } else {
            0.0
        }
    }
}

/// `[lo, hi]` 上的均匀采样，接近 `f32::MAX` 的有限边界也不会溢出
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if lo < hi {
        let t: f32 = rng.gen();
        (lo * (1.0 - t) + hi * t).clamp(lo, hi)
    } else {
        lo
    }
}
