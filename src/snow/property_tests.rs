//! 运动编排属性测试
//!
//! 使用proptest在随机种子、配置和帧间隔上验证周期不变量

use crate::config::{SnowConfig, Viewport};
use crate::snow::bounds::{MotionBounds, EXIT_MARGIN, SPAWN_OFFSET_MAX, SPAWN_OFFSET_MIN};
use crate::snow::factory::ParticleFactory;
use crate::snow::liveness::LivenessFlag;
use crate::snow::orchestration::{CompletionOutcome, Orchestration};
use crate::snow::orchestrator::MotionOrchestrator;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn config_strategy() -> impl Strategy<Value = SnowConfig> {
    (
        0.0f32..40.0,
        0.0f32..40.0,
        50.0f32..3000.0,
        50.0f32..3000.0,
        any::<bool>(),
    )
        .prop_map(|(a, b, c, d, stagger)| SnowConfig {
            count: 1,
            min_size: a,
            max_size: b,
            min_speed: c,
            max_speed: d,
            stagger_start: stagger,
            ..Default::default()
        })
}

fn viewport_strategy() -> impl Strategy<Value = Viewport> {
    (0.0f32..2000.0, 0.0f32..2000.0).prop_map(|(w, h)| Viewport::new(w, h))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cycles_respect_motion_invariants(
        seed in any::<u64>(),
        config in config_strategy(),
        viewport in viewport_strategy(),
        frame_ms in 4.0f32..120.0,
    ) {
        let bounds = MotionBounds::from_config(&config, viewport);
        let mut rng = StdRng::seed_from_u64(seed);
        let particle = ParticleFactory::build_with_bounds(1, &bounds, &mut rng).remove(0);
        let flag = LivenessFlag::new();
        let mut orch = Orchestration::new(particle, flag.token());
        let orchestrator = MotionOrchestrator::with_default_policy(bounds);
        orchestrator.start(&mut orch, &mut rng);

        let mut completed_cycles = 0;
        let mut last_y = orch.particle().vertical_position;

        for _ in 0..2_000 {
            // 周期开始时位于生成带内
            prop_assert!(orch.spawn_offset() >= SPAWN_OFFSET_MIN);
            prop_assert!(orch.spawn_offset() <= SPAWN_OFFSET_MAX);

            let completion = orchestrator.advance(&mut orch, frame_ms);
            let p = orch.particle();

            // 周期内单调下落
            prop_assert!(p.vertical_position >= last_y - 1e-3);
            // 漂移不越界
            let (lo, hi) = p.drift_range();
            prop_assert!(p.horizontal_position >= lo - 1e-3);
            prop_assert!(p.horizontal_position <= hi + 1e-3);
            // 旋转始终在 [0, 360)
            prop_assert!(p.rotation_degrees >= 0.0 && p.rotation_degrees < 360.0);

            if let Some(done) = completion {
                prop_assert_eq!(p.vertical_position, viewport.height + EXIT_MARGIN);
                prop_assert_eq!(p.horizontal_position, p.spawn_x);
                prop_assert_eq!(p.rotation_degrees, 0.0);

                let spawn_x = p.spawn_x;
                prop_assert_eq!(orchestrator.complete(&mut orch, done, &mut rng), CompletionOutcome::Rearmed);
                completed_cycles += 1;

                // 重置先于下一周期的任何读取
                prop_assert!(orch.particle().vertical_position < 0.0);
                prop_assert_eq!(orch.particle().spawn_x, spawn_x);
            }
            last_y = orch.particle().vertical_position;
        }

        // 帧间隔与周期上限保证至少完成过一次
        prop_assert!(completed_cycles >= 1);
    }

    #[test]
    fn stop_never_resurrects(
        seed in any::<u64>(),
        viewport in viewport_strategy(),
        epsilon in 0.5f32..50.0,
    ) {
        let config = SnowConfig {
            count: 1,
            min_speed: 500.0,
            max_speed: 1500.0,
            stagger_start: false,
            ..Default::default()
        };
        let bounds = MotionBounds::from_config(&config, viewport);
        let mut rng = StdRng::seed_from_u64(seed);
        let particle = ParticleFactory::build_with_bounds(1, &bounds, &mut rng).remove(0);
        let flag = LivenessFlag::new();
        let mut orch = Orchestration::new(particle, flag.token());
        let orchestrator = MotionOrchestrator::with_default_policy(bounds);
        orchestrator.start(&mut orch, &mut rng);

        let d = orch.particle().fall_duration_ms;
        prop_assert!(orchestrator.advance(&mut orch, d - epsilon).is_none());

        flag.revoke();
        MotionOrchestrator::stop(&mut orch);
        let frozen = orch.particle().clone();

        for _ in 0..10 {
            prop_assert!(orchestrator.advance(&mut orch, d).is_none());
        }
        prop_assert_eq!(orch.cycles_started(), 1);
        prop_assert_eq!(orch.particle(), &frozen);
        prop_assert!(!MotionOrchestrator::stop(&mut orch));
    }

    #[test]
    fn factory_sizes_within_normalized_bounds(
        seed in any::<u64>(),
        a in 0.0f32..100.0,
        b in 0.0f32..100.0,
        count in -5i32..200,
    ) {
        let config = SnowConfig {
            count,
            min_size: a,
            max_size: b,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = ParticleFactory::build(&config, Viewport::default(), &mut rng);

        prop_assert_eq!(particles.len(), count.max(0) as usize);
        let (lo, hi) = (a.min(b), a.max(b));
        for p in &particles {
            prop_assert!(p.size >= lo && p.size <= hi);
            prop_assert!(p.vertical_position < 0.0);
            prop_assert!(p.opacity > 0.0 && p.opacity <= 1.0);
        }
    }
}
