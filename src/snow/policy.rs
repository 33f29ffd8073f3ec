//! 周期重置策略
//!
//! 每个周期结束时决定下一周期的运动参数。水平锚点 `spawn_x` 不归策略管，
//! 它在整个粒子生命周期内保持不变。

use super::bounds::MotionBounds;
use super::particle::MotionParameters;
use rand::RngCore;
use std::fmt;

/// 周期重置策略
pub trait CycleResetPolicy: Send + Sync + fmt::Debug {
    /// 策略名称，用于日志
    fn name(&self) -> &'static str;

    /// 计算下一周期的参数
    fn next_parameters(
        &self,
        current: MotionParameters,
        bounds: &MotionBounds,
        rng: &mut dyn RngCore,
    ) -> MotionParameters;
}

/// 每周期从初始范围重新随机时长和漂移（默认）
#[derive(Debug, Clone, Copy, Default)]
pub struct ReRandomizeParameters;

impl CycleResetPolicy for ReRandomizeParameters {
    fn name(&self) -> &'static str {
        "re-randomize"
    }

    fn next_parameters(
        &self,
        _current: MotionParameters,
        bounds: &MotionBounds,
        rng: &mut dyn RngCore,
    ) -> MotionParameters {
        MotionParameters {
            fall_duration_ms: bounds.sample_duration(rng),
            drift_magnitude: bounds.sample_drift(rng),
        }
    }
}

/// 沿用创建时的参数，每个周期完全相同
#[derive(Debug, Clone, Copy, Default)]
pub struct ReuseParameters;

impl CycleResetPolicy for ReuseParameters {
    fn name(&self) -> &'static str {
        "reuse"
    }

    fn next_parameters(
        &self,
        current: MotionParameters,
        _bounds: &MotionBounds,
        _rng: &mut dyn RngCore,
    ) -> MotionParameters {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SnowConfig, Viewport};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn current() -> MotionParameters {
        MotionParameters {
            fall_duration_ms: 12345.0,
            drift_magnitude: 12.0,
        }
    }

    #[test]
    fn test_reuse_keeps_parameters() {
        let bounds = MotionBounds::from_config(&SnowConfig::default(), Viewport::default());
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(ReuseParameters.next_parameters(current(), &bounds, &mut rng), current());
    }

    #[test]
    fn test_rerandomize_stays_in_bounds() {
        let config = SnowConfig {
            min_speed: 1000.0,
            max_speed: 2000.0,
            ..Default::default()
        };
        let bounds = MotionBounds::from_config(&config, Viewport::default());
        let mut rng = StdRng::seed_from_u64(0);

        let mut changed = false;
        for _ in 0..50 {
            let next = ReRandomizeParameters.next_parameters(current(), &bounds, &mut rng);
            assert!((1000.0..=2000.0).contains(&next.fall_duration_ms));
            assert!(next.drift_magnitude.abs() <= 50.0);
            changed |= next != current();
        }
        assert!(changed);
    }
}
