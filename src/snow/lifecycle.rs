//! 生命周期管理器
//!
//! 维护"当前配置 → 正在运行的编排集合"的映射。
//!
//! 配置（数量、尺寸范围、速度范围、视口尺寸）变化时：
//! 1. 撤销所有运行中编排的存活标记
//! 2. 逐个停止
//! 3. 通过工厂重建粒子群
//! 4. 为每个新粒子启动编排
//!
//! 卸载只执行 1-2。这里是唯一能撤销存活标记的地方。

use super::bounds::MotionBounds;
use super::factory::ParticleFactory;
use super::liveness::LivenessFlag;
use super::orchestration::{CompletionOutcome, Orchestration, OrchestrationState};
use super::orchestrator::MotionOrchestrator;
use super::policy::{CycleResetPolicy, ReRandomizeParameters};
use super::render::{OverlayLayer, Palette, RenderBinding, VisualFrame};
use crate::config::{SnowConfig, Viewport};
use crate::core::LOG_TARGET;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::Arc;

/// 退役的粒子群
///
/// 重建或卸载时交还给调用方，其中的编排都已停止；丢弃即销毁。
#[derive(Debug, Default)]
pub struct Population {
    orchestrations: Vec<Orchestration>,
}

impl Population {
    pub fn len(&self) -> usize {
        self.orchestrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orchestrations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Orchestration> {
        self.orchestrations.iter()
    }

    pub fn all_stopped(&self) -> bool {
        self.orchestrations.iter().all(Orchestration::is_stopped)
    }
}

/// 一次 tick 的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// 本帧产出的完成通知数
    pub completions: usize,
    /// 开始了下一周期的数量
    pub rearmed: usize,
    /// 被丢弃的通知数
    pub discarded: usize,
}

/// 生命周期管理器
pub struct LifecycleManager<R: RngCore = StdRng> {
    config: SnowConfig,
    viewport: Viewport,
    policy: Arc<dyn CycleResetPolicy>,
    orchestrator: MotionOrchestrator,
    flags: Vec<LivenessFlag>,
    orchestrations: Vec<Orchestration>,
    palette: Palette,
    rng: R,
    mounted: bool,
}

impl LifecycleManager<StdRng> {
    /// 使用系统熵作为随机源
    pub fn new(config: SnowConfig, viewport: Viewport) -> Self {
        Self::with_rng(config, viewport, StdRng::from_entropy())
    }

    /// 使用固定种子，便于复现
    pub fn with_seed(config: SnowConfig, viewport: Viewport, seed: u64) -> Self {
        Self::with_rng(config, viewport, StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> LifecycleManager<R> {
    pub fn with_rng(config: SnowConfig, viewport: Viewport, rng: R) -> Self {
        let viewport = viewport.normalized();
        let policy: Arc<dyn CycleResetPolicy> = Arc::new(ReRandomizeParameters);
        Self {
            orchestrator: MotionOrchestrator::new(
                MotionBounds::from_config(&config, viewport),
                Arc::clone(&policy),
            ),
            palette: Palette::from_config(&config),
            config,
            viewport,
            policy,
            flags: Vec::new(),
            orchestrations: Vec::new(),
            rng,
            mounted: false,
        }
    }

    /// 替换周期重置策略，在挂载前调用
    pub fn with_policy(mut self, policy: Arc<dyn CycleResetPolicy>) -> Self {
        self.policy = policy;
        self.orchestrator = MotionOrchestrator::new(*self.orchestrator.bounds(), Arc::clone(&self.policy));
        self
    }

    /// 挂载：构建并启动粒子群
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.rebuild();
    }

    /// 卸载：停止所有编排，不再重建
    pub fn unmount(&mut self) -> Population {
        if !self.mounted {
            return Population::default();
        }
        self.mounted = false;
        let retired = self.retire();
        tracing::debug!(target: LOG_TARGET, stopped = retired.len(), "Snow overlay unmounted");
        retired
    }

    /// 应用新配置
    ///
    /// 影响运动的参数变化时整体替换粒子群并返回退役的旧粒子群；
    /// 只改颜色、字符或样式时保留正在运行的粒子。
    pub fn configure(&mut self, config: SnowConfig) -> Population {
        let needs_rebuild = config.rebuild_key() != self.config.rebuild_key();
        self.palette = Palette::from_config(&config);
        self.config = config;

        if !needs_rebuild || !self.mounted {
            return Population::default();
        }
        self.replace_population()
    }

    /// 视口尺寸变化，等同于一次配置变化
    pub fn resize(&mut self, viewport: Viewport) -> Population {
        let viewport = viewport.normalized();
        if viewport == self.viewport {
            return Population::default();
        }
        self.viewport = viewport;

        if !self.mounted {
            return Population::default();
        }
        self.replace_population()
    }

    /// 推进一帧
    ///
    /// 先推进所有编排并收集完成通知，再统一投递。
    /// 下一周期的位置重置都在本次调用内完成，之后读取的帧不会出现残留值。
    pub fn tick(&mut self, delta_ms: f32) -> TickReport {
        let mut report = TickReport::default();
        if !self.mounted {
            return report;
        }

        let pending: Vec<(usize, _)> = self
            .orchestrations
            .iter_mut()
            .enumerate()
            .filter_map(|(index, orch)| {
                self.orchestrator
                    .advance(orch, delta_ms)
                    .map(|completion| (index, completion))
            })
            .collect();

        report.completions = pending.len();
        for (index, completion) in pending {
            let orchestration = &mut self.orchestrations[index];
            match self.orchestrator.complete(orchestration, completion, &mut self.rng) {
                CompletionOutcome::Rearmed => report.rearmed += 1,
                CompletionOutcome::Discarded(_) => report.discarded += 1,
            }
        }
        report
    }

    /// 当前所有粒子的可视帧，未挂载时为空
    pub fn frames(&self) -> Vec<VisualFrame> {
        if !self.mounted {
            return Vec::new();
        }
        self.orchestrations
            .iter()
            .map(|orch| RenderBinding::project(orch.particle(), &self.palette))
            .collect()
    }

    /// 覆盖层布局指令
    pub fn layer(&self) -> OverlayLayer {
        RenderBinding::layer(&self.config, self.viewport)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn config(&self) -> &SnowConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn orchestrations(&self) -> &[Orchestration] {
        &self.orchestrations
    }

    /// 指定状态的编排数量
    pub fn count_in_state(&self, state: OrchestrationState) -> usize {
        self.orchestrations.iter().filter(|o| o.state() == state).count()
    }

    fn replace_population(&mut self) -> Population {
        let retired = self.retire();
        self.rebuild();
        tracing::debug!(
            target: LOG_TARGET,
            retired = retired.len(),
            active = self.orchestrations.len(),
            "Snow population rebuilt"
        );
        retired
    }

    /// 步骤 1-2：撤销存活标记并停止
    fn retire(&mut self) -> Population {
        for flag in self.flags.drain(..) {
            flag.revoke();
        }
        let mut orchestrations = std::mem::take(&mut self.orchestrations);
        for orchestration in &mut orchestrations {
            MotionOrchestrator::stop(orchestration);
        }
        Population { orchestrations }
    }

    /// 步骤 3-4：重建并启动
    fn rebuild(&mut self) {
        let bounds = MotionBounds::from_config(&self.config, self.viewport);
        self.orchestrator = MotionOrchestrator::new(bounds, Arc::clone(&self.policy));

        let particles =
            ParticleFactory::build_with_bounds(self.config.particle_count(), &bounds, &mut self.rng);

        self.flags = Vec::with_capacity(particles.len());
        self.orchestrations = Vec::with_capacity(particles.len());
        for particle in particles {
            let flag = LivenessFlag::new();
            let mut orchestration = Orchestration::new(particle, flag.token());
            self.orchestrator.start(&mut orchestration, &mut self.rng);
            self.flags.push(flag);
            self.orchestrations.push(orchestration);
        }

        tracing::debug!(
            target: LOG_TARGET,
            count = self.orchestrations.len(),
            policy = self.policy.name(),
            "Snow population started"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(count: i32) -> LifecycleManager {
        let config = SnowConfig {
            count,
            ..Default::default()
        };
        LifecycleManager::with_seed(config, Viewport::new(400.0, 800.0), 2024)
    }

    #[test]
    fn test_mount_starts_population() {
        let mut m = manager(50);
        assert!(m.frames().is_empty());

        m.mount();
        assert!(m.is_mounted());
        assert_eq!(m.orchestrations().len(), 50);
        assert_eq!(m.count_in_state(OrchestrationState::Running), 50);
        assert_eq!(m.frames().len(), 50);
    }

    #[test]
    fn test_mount_twice_keeps_population() {
        let mut m = manager(10);
        m.mount();
        let first: Vec<_> = m.orchestrations().iter().map(|o| o.particle().clone()).collect();
        m.mount();
        let second: Vec<_> = m.orchestrations().iter().map(|o| o.particle().clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_configure_replaces_population() {
        let mut m = manager(50);
        m.mount();

        let retired = m.configure(SnowConfig {
            count: 25,
            ..Default::default()
        });

        assert_eq!(retired.len(), 50);
        assert!(retired.all_stopped());
        assert!(retired.iter().all(|o| !o.is_live()));
        assert_eq!(m.count_in_state(OrchestrationState::Running), 25);
        assert_eq!(m.orchestrations().len(), 25);
    }

    #[test]
    fn test_palette_change_keeps_population() {
        let mut m = manager(5);
        m.mount();
        m.tick(500.0);
        let before: Vec<_> = m.orchestrations().iter().map(|o| o.particle().clone()).collect();

        let retired = m.configure(SnowConfig {
            count: 5,
            color: "#87CEEB".into(),
            ..Default::default()
        });

        assert!(retired.is_empty());
        let after: Vec<_> = m.orchestrations().iter().map(|o| o.particle().clone()).collect();
        assert_eq!(before, after);
        assert_ne!(m.frames()[0].color, crate::config::Color::WHITE);
    }

    #[test]
    fn test_resize_rebuilds() {
        let mut m = manager(8);
        m.mount();

        assert!(m.resize(Viewport::new(400.0, 800.0)).is_empty());

        let retired = m.resize(Viewport::new(1024.0, 768.0));
        assert_eq!(retired.len(), 8);
        assert!(retired.all_stopped());
        assert_eq!(m.viewport(), Viewport::new(1024.0, 768.0));
        assert!(m
            .orchestrations()
            .iter()
            .all(|o| o.particle().spawn_x <= 1024.0));
    }

    #[test]
    fn test_configure_while_unmounted_defers() {
        let mut m = manager(3);
        assert!(m
            .configure(SnowConfig {
                count: 7,
                ..Default::default()
            })
            .is_empty());
        m.mount();
        assert_eq!(m.orchestrations().len(), 7);
    }

    #[test]
    fn test_unmount_stops_everything() {
        let mut m = manager(20);
        m.mount();
        m.tick(3000.0);

        let retired = m.unmount();
        assert_eq!(retired.len(), 20);
        assert!(retired.all_stopped());
        assert!(m.orchestrations().is_empty());
        assert!(m.frames().is_empty());
        assert_eq!(m.tick(100_000.0), TickReport::default());
        assert!(m.unmount().is_empty());
    }

    #[test]
    fn test_tick_rearms_completed_cycles() {
        let mut m = LifecycleManager::with_seed(
            SnowConfig {
                count: 10,
                min_speed: 100.0,
                max_speed: 100.0,
                stagger_start: false,
                ..Default::default()
            },
            Viewport::new(400.0, 800.0),
            1,
        );
        m.mount();

        let report = m.tick(150.0);
        assert_eq!(report.completions, 10);
        assert_eq!(report.rearmed, 10);
        assert_eq!(report.discarded, 0);
        assert!(m.orchestrations().iter().all(|o| o.cycles_started() == 2));
        assert!(m.frames().iter().all(|f| f.position.y < 0.0));
    }

    #[test]
    fn test_empty_population_is_inert() {
        let mut m = manager(0);
        m.mount();
        assert!(m.frames().is_empty());
        assert_eq!(m.tick(16.0), TickReport::default());
    }
}
