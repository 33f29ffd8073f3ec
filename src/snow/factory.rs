//! 粒子工厂
//!
//! 给定配置、视口和随机源，生成初始粒子群。对随机源而言是纯函数：
//! 相同种子得到相同粒子。

use super::bounds::MotionBounds;
use super::particle::Particle;
use crate::config::{SnowConfig, Viewport};
use rand::Rng;

/// 粒子工厂
pub struct ParticleFactory;

impl ParticleFactory {
    /// 生成恰好 `config.count` 个粒子，`count <= 0` 时为空
    pub fn build<R: Rng + ?Sized>(config: &SnowConfig, viewport: Viewport, rng: &mut R) -> Vec<Particle> {
        let bounds = MotionBounds::from_config(config, viewport);
        Self::build_with_bounds(config.particle_count(), &bounds, rng)
    }

    pub fn build_with_bounds<R: Rng + ?Sized>(
        count: usize,
        bounds: &MotionBounds,
        rng: &mut R,
    ) -> Vec<Particle> {
        (0..count).map(|id| Self::spawn(id, bounds, rng)).collect()
    }

    fn spawn<R: Rng + ?Sized>(id: usize, bounds: &MotionBounds, rng: &mut R) -> Particle {
        let size = bounds.sample_size(rng);
        let fall_duration_ms = bounds.sample_duration(rng);
        let drift_magnitude = bounds.sample_drift(rng);
        let spawn_x = bounds.sample_spawn_x(rng);

        Particle {
            id,
            // 初始高度错开，粒子不会同时从顶部出现
            vertical_position: bounds.sample_spawn_offset(rng),
            horizontal_position: spawn_x,
            opacity: bounds.sample_opacity(rng),
            rotation_degrees: 0.0,
            size,
            fall_duration_ms,
            drift_magnitude,
            spawn_x,
        }
    }
}
