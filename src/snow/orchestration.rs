//! 单个粒子的编排状态机
//!
//! 状态转换：`Created → Running → Stopping → Stopped`。
//! `Running` 在每个周期完成后自我循环，直到被停止。

use super::liveness::LivenessToken;
use super::particle::Particle;
use crate::animation::MotionPlayer;

/// 编排状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrchestrationState {
    /// 已创建，尚未启动
    Created,
    /// 周期运行中
    Running,
    /// 正在停止
    Stopping,
    /// 已停止，不会再排期
    Stopped,
}

/// 周期完成通知
///
/// 携带发出时的代号；代号与编排当前代号不一致即为过期通知。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleCompletion {
    pub particle_id: usize,
    pub generation: u64,
    pub cycle: u64,
}

/// 投递完成通知的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// 已开始下一周期
    Rearmed,
    /// 通知被丢弃
    Discarded(DiscardReason),
}

/// 丢弃原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// 存活标记已撤销
    NotLive,
    /// 编排不在运行状态
    NotRunning,
    /// 通知来自已被取代的周期
    StaleGeneration,
}

/// 单个粒子的编排实例，独占其粒子状态
#[derive(Debug, Clone)]
pub struct Orchestration {
    pub(crate) particle: Particle,
    pub(crate) player: MotionPlayer,
    pub(crate) state: OrchestrationState,
    pub(crate) generation: u64,
    pub(crate) cycles_started: u64,
    pub(crate) spawn_offset: f32,
    pub(crate) token: LivenessToken,
}

impl Orchestration {
    pub fn new(particle: Particle, token: LivenessToken) -> Self {
        let spawn_offset = particle.vertical_position;
        Self {
            particle,
            player: MotionPlayer::new(),
            state: OrchestrationState::Created,
            generation: 0,
            cycles_started: 0,
            spawn_offset,
            token,
        }
    }

    pub fn particle(&self) -> &Particle {
        &self.particle
    }

    pub fn state(&self) -> OrchestrationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == OrchestrationState::Running
    }

    pub fn is_stopped(&self) -> bool {
        self.state == OrchestrationState::Stopped
    }

    /// 当前代号，每次开始周期或停止时递增
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 已开始的周期数
    pub fn cycles_started(&self) -> u64 {
        self.cycles_started
    }

    /// 当前周期开始时的垂直位置
    pub fn spawn_offset(&self) -> f32 {
        self.spawn_offset
    }

    pub fn is_live(&self) -> bool {
        self.token.is_live()
    }

    pub fn player(&self) -> &MotionPlayer {
        &self.player
    }
}
