use super::keyframe::KeyframeTrack;

/// 一个完整的旋转角度
pub const FULL_TURN_DEGREES: f32 = 360.0;

/// 一个下落周期的动画片段
///
/// 三条轨道同时开始、同时结束：下落、水平漂移（三角波）、旋转（一整圈后归零）。
/// 可选的启动延迟排在三条轨道之前。
#[derive(Debug, Clone, PartialEq)]
pub struct CycleClip {
    /// 启动延迟 (毫秒)
    pub delay_ms: f32,
    /// 周期时长 (毫秒)
    pub duration_ms: f32,
    /// 垂直位置轨道
    pub fall: KeyframeTrack,
    /// 水平位置轨道
    pub drift: KeyframeTrack,
    /// 旋转角度轨道
    pub rotate: KeyframeTrack,
}

/// 某一时刻三条轨道的采样值
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    pub vertical: f32,
    pub horizontal: f32,
    pub rotation: f32,
}

/// 构造周期片段所需的参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleSpec {
    pub spawn_y: f32,
    pub fall_target: f32,
    pub spawn_x: f32,
    pub drift: f32,
    pub duration_ms: f32,
    pub delay_ms: f32,
}

impl CycleClip {
    pub fn new(cycle: CycleSpec) -> Self {
        let duration = cycle.duration_ms.max(0.0);
        Self {
            delay_ms: cycle.delay_ms.max(0.0),
            duration_ms: duration,
            fall: KeyframeTrack::linear(cycle.spawn_y, cycle.fall_target, duration),
            drift: KeyframeTrack::triangle(cycle.spawn_x, cycle.spawn_x + cycle.drift, duration),
            rotate: KeyframeTrack::linear(0.0, FULL_TURN_DEGREES, duration).snap_to(0.0),
        }
    }

    /// 延迟加周期的总时长
    pub fn total_ms(&self) -> f32 {
        self.delay_ms + self.duration_ms
    }

    /// 采样，`time_ms` 从片段开始（包含延迟）计时
    ///
    /// 到达总时长时直接返回终点值，不经过 `time_ms - delay_ms` 的浮点减法。
    pub fn sample(&self, time_ms: f32) -> MotionSample {
        if time_ms >= self.total_ms() {
            return self.end_sample();
        }
        let local = (time_ms - self.delay_ms).max(0.0);
        let rotation = self.rotate.sample(local).unwrap_or(0.0);
        MotionSample {
            vertical: self.fall.sample(local).unwrap_or(0.0),
            horizontal: self.drift.sample(local).unwrap_or(0.0),
            // 浮点舍入可能在周期末尾产生 360.0，与 0° 等价
            rotation: rotation.rem_euclid(FULL_TURN_DEGREES),
        }
    }

    /// 周期结束时的值：下落终点、漂移锚点、旋转归零
    pub fn end_sample(&self) -> MotionSample {
        MotionSample {
            vertical: self.fall.end_value().unwrap_or(0.0),
            horizontal: self.drift.end_value().unwrap_or(0.0),
            rotation: self.rotate.end_value().unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle() -> CycleSpec {
        CycleSpec {
            spawn_y: -100.0,
            fall_target: 850.0,
            spawn_x: 200.0,
            drift: -40.0,
            duration_ms: 10_000.0,
            delay_ms: 2_000.0,
        }
    }

    #[test]
    fn test_delay_holds_start_values() {
        let clip = CycleClip::new(cycle());
        let s = clip.sample(1_000.0);
        assert_eq!(s.vertical, -100.0);
        assert_eq!(s.horizontal, 200.0);
        assert_eq!(s.rotation, 0.0);
        assert_eq!(clip.total_ms(), 12_000.0);
    }

    #[test]
    fn test_mid_cycle_values() {
        let clip = CycleClip::new(cycle());
        let s = clip.sample(7_000.0);
        assert!((s.vertical - 375.0).abs() < 0.01);
        assert!((s.horizontal - 160.0).abs() < 0.01);
        assert!((s.rotation - 180.0).abs() < 0.01);
    }

    #[test]
    fn test_end_values() {
        let clip = CycleClip::new(cycle());
        let s = clip.sample(12_000.0);
        assert_eq!(s.vertical, 850.0);
        assert_eq!(s.horizontal, 200.0);
        assert_eq!(s.rotation, 0.0);
    }

    #[test]
    fn test_end_values_exact_with_fractional_delay() {
        for step in 0..2_000 {
            let delay_ms = step as f32 * 0.019;
            let clip = CycleClip::new(CycleSpec {
                spawn_y: -80.0,
                fall_target: 850.0,
                spawn_x: 50.0,
                drift: 12.5,
                duration_ms: 868.267,
                delay_ms,
            });
            let s = clip.sample(clip.total_ms());
            assert_eq!(s.vertical, 850.0, "delay {}", delay_ms);
            assert_eq!(s.horizontal, 50.0, "delay {}", delay_ms);
            assert_eq!(s.rotation, 0.0, "delay {}", delay_ms);
            assert_eq!(clip.sample(clip.total_ms() + 5.0), clip.end_sample());
        }
    }
}
