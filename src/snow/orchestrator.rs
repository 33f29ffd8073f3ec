//! 运动编排器
//!
//! 为每个粒子驱动无限循环的周期：每个周期并行运行下落、漂移、旋转三段运动，
//! 结束后产出一个完成通知；投递通知时才决定是否开始下一周期。
//!
//! 调度是单线程协作式的，由外部帧时钟调用 [`MotionOrchestrator::advance`] 推进。
//! 停止在任何时刻都有效：即使完成通知已经产出但尚未投递，投递时的存活检查和
//! 代号检查也会把它丢弃。

use super::bounds::MotionBounds;
use super::orchestration::{
    CompletionOutcome, CycleCompletion, DiscardReason, Orchestration, OrchestrationState,
};
use super::particle::MotionParameters;
use super::policy::{CycleResetPolicy, ReRandomizeParameters};
use crate::animation::{CycleClip, CycleSpec, PlaybackService, PlaybackStatus};
use crate::core::LOG_TARGET;
use rand::RngCore;
use std::sync::Arc;

/// 运动编排器
#[derive(Debug, Clone)]
pub struct MotionOrchestrator {
    bounds: MotionBounds,
    policy: Arc<dyn CycleResetPolicy>,
}

impl MotionOrchestrator {
    pub fn new(bounds: MotionBounds, policy: Arc<dyn CycleResetPolicy>) -> Self {
        Self { bounds, policy }
    }

    /// 使用默认的重新随机策略
    pub fn with_default_policy(bounds: MotionBounds) -> Self {
        Self::new(bounds, Arc::new(ReRandomizeParameters))
    }

    pub fn bounds(&self) -> &MotionBounds {
        &self.bounds
    }

    pub fn policy(&self) -> &Arc<dyn CycleResetPolicy> {
        &self.policy
    }

    /// 启动编排：`Created → Running`，并排入首个周期
    ///
    /// 首个周期沿用工厂生成的参数和初始高度，可带随机启动延迟。
    /// 对非 `Created` 状态调用无效，返回 `false`。
    pub fn start(&self, orchestration: &mut Orchestration, rng: &mut dyn RngCore) -> bool {
        if orchestration.state != OrchestrationState::Created {
            return false;
        }

        let params = orchestration.particle.motion_parameters();
        let spawn_y = orchestration.particle.vertical_position;
        let delay_ms = self.bounds.sample_start_delay(rng, params.fall_duration_ms);

        orchestration.state = OrchestrationState::Running;
        self.arm_cycle(orchestration, params, spawn_y, delay_ms);
        true
    }

    /// 推进一帧
    ///
    /// 把采样值写回粒子；周期在本帧结束时返回完成通知。
    /// 结束时的值固定为：下落终点、水平锚点、旋转 0°。
    pub fn advance(&self, orchestration: &mut Orchestration, delta_ms: f32) -> Option<CycleCompletion> {
        if orchestration.state != OrchestrationState::Running {
            return None;
        }

        let status = PlaybackService::advance(&mut orchestration.player, delta_ms);
        if status == PlaybackStatus::Idle {
            return None;
        }

        if let Some(sample) = PlaybackService::sample(&orchestration.player) {
            orchestration.particle.apply_sample(&sample);
        }

        (status == PlaybackStatus::Finished).then(|| CycleCompletion {
            particle_id: orchestration.particle.id,
            generation: orchestration.generation,
            cycle: orchestration.cycles_started,
        })
    }

    /// 投递完成通知
    ///
    /// 只有存活、处于运行状态、且通知代号与当前代号一致时才开始下一周期。
    /// 其余情况静默丢弃，从不重新排期。
    pub fn complete(
        &self,
        orchestration: &mut Orchestration,
        completion: CycleCompletion,
        rng: &mut dyn RngCore,
    ) -> CompletionOutcome {
        let reason = if !orchestration.token.is_live() {
            Some(DiscardReason::NotLive)
        } else if orchestration.state != OrchestrationState::Running {
            Some(DiscardReason::NotRunning)
        } else if completion.generation != orchestration.generation {
            Some(DiscardReason::StaleGeneration)
        } else {
            None
        };

        if let Some(reason) = reason {
            tracing::trace!(
                target: LOG_TARGET,
                particle = completion.particle_id,
                cycle = completion.cycle,
                ?reason,
                "Discarding cycle completion"
            );
            return CompletionOutcome::Discarded(reason);
        }

        let current = orchestration.particle.motion_parameters();
        let params = self.policy.next_parameters(current, &self.bounds, rng);
        let spawn_y = self.bounds.sample_spawn_offset(rng);
        self.arm_cycle(orchestration, params, spawn_y, 0.0);
        CompletionOutcome::Rearmed
    }

    /// 停止编排：`Running → Stopping → Stopped`
    ///
    /// 幂等；返回状态是否发生了变化。停止后粒子值冻结在当前帧。
    pub fn stop(orchestration: &mut Orchestration) -> bool {
        match orchestration.state {
            OrchestrationState::Stopping | OrchestrationState::Stopped => false,
            OrchestrationState::Created | OrchestrationState::Running => {
                orchestration.state = OrchestrationState::Stopping;
                PlaybackService::stop(&mut orchestration.player);
                // 让所有已产出但未投递的通知失效
                orchestration.generation += 1;
                orchestration.state = OrchestrationState::Stopped;
                true
            }
        }
    }

    /// 开始一个周期
    ///
    /// 垂直位置在新运动开始之前重置，读取方不会看到上一周期的残留值。
    fn arm_cycle(
        &self,
        orchestration: &mut Orchestration,
        params: MotionParameters,
        spawn_y: f32,
        delay_ms: f32,
    ) {
        let particle = &mut orchestration.particle;
        particle.fall_duration_ms = params.fall_duration_ms;
        particle.drift_magnitude = params.drift_magnitude;
        particle.vertical_position = spawn_y;
        particle.horizontal_position = particle.spawn_x;
        particle.rotation_degrees = 0.0;

        let clip = CycleClip::new(CycleSpec {
            spawn_y,
            fall_target: self.bounds.fall_target(),
            spawn_x: particle.spawn_x,
            drift: params.drift_magnitude,
            duration_ms: params.fall_duration_ms,
            delay_ms,
        });

        orchestration.spawn_offset = spawn_y;
        orchestration.generation += 1;
        orchestration.cycles_started += 1;
        PlaybackService::play(&mut orchestration.player, clip);
    }
}
