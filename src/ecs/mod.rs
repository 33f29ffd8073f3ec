//! ECS 资源
//!
//! 帧时钟和视口尺寸，由宿主每帧写入，`snow_update_system` 读取。

use crate::config::Viewport;
use bevy_ecs::prelude::*;

#[derive(Resource, Clone, Copy, Debug)]
pub struct Time {
    pub delta_seconds: f32,
    pub elapsed_seconds: f64,
    pub fixed_time_step: f64,
}

impl Default for Time {
    fn default() -> Self {
        Self {
            delta_seconds: 0.0,
            elapsed_seconds: 0.0,
            fixed_time_step: 1.0 / 60.0,
        }
    }
}

impl Time {
    /// 推进一帧
    pub fn advance(&mut self, delta_seconds: f32) {
        let delta = if delta_seconds.is_finite() { delta_seconds.max(0.0) } else { 0.0 };
        self.delta_seconds = delta;
        self.elapsed_seconds += delta as f64;
    }

    /// 以固定步长推进一帧
    pub fn step_fixed(&mut self) {
        self.advance(self.fixed_time_step as f32);
    }

    pub fn delta_millis(&self) -> f32 {
        self.delta_seconds * 1000.0
    }
}

/// 宿主视口尺寸，只读共享状态
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportSize(pub Viewport);
