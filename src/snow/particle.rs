//! 雪花粒子数据

use crate::animation::MotionSample;

/// 单个下落的雪花
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// 粒子群内的稳定标识（创建时的下标）
    pub id: usize,
    /// 垂直位置，每帧由渲染绑定读取
    pub vertical_position: f32,
    /// 水平位置
    pub horizontal_position: f32,
    /// 不透明度，生命周期内不变
    pub opacity: f32,
    /// 旋转角度，[0, 360)
    pub rotation_degrees: f32,
    /// 尺寸 (px)
    pub size: f32,
    /// 当前周期的下落时长 (ms)
    pub fall_duration_ms: f32,
    /// 水平漂移的半振幅，有符号
    pub drift_magnitude: f32,
    /// 漂移围绕的水平锚点，跨周期保持不变
    pub spawn_x: f32,
}

/// 每个周期可以重新随机的运动参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParameters {
    pub fall_duration_ms: f32,
    pub drift_magnitude: f32,
}

impl Particle {
    pub fn motion_parameters(&self) -> MotionParameters {
        MotionParameters {
            fall_duration_ms: self.fall_duration_ms,
            drift_magnitude: self.drift_magnitude,
        }
    }

    pub(crate) fn apply_sample(&mut self, sample: &MotionSample) {
        self.vertical_position = sample.vertical;
        self.horizontal_position = sample.horizontal;
        self.rotation_degrees = sample.rotation;
    }

    /// 当前周期内水平位置允许的范围
    pub fn drift_range(&self) -> (f32, f32) {
        let amplitude = self.drift_magnitude.abs();
        (self.spawn_x - amplitude, self.spawn_x + amplitude)
    }
}
