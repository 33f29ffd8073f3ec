//! ECS 集成
//!
//! `SnowOverlay` 作为资源持有生命周期管理器，`snow_update_system` 每帧：
//! 同步视口 → 推进所有编排 → 把可视帧写入 `OverlayFrames` 供渲染端读取。

use super::lifecycle::{LifecycleManager, Population, TickReport};
use super::render::{OverlayLayer, VisualFrame};
use crate::config::{SnowConfig, Viewport};
use crate::core::LOG_TARGET;
use crate::ecs::{Time, ViewportSize};
use bevy_ecs::prelude::*;

/// 雪花覆盖层资源
#[derive(Resource)]
pub struct SnowOverlay {
    pub manager: LifecycleManager,
    /// 最近一帧的统计
    pub last_report: TickReport,
}

impl SnowOverlay {
    /// 创建并挂载
    pub fn mounted(config: SnowConfig, viewport: Viewport) -> Self {
        Self::from_manager(LifecycleManager::new(config, viewport))
    }

    pub fn from_manager(mut manager: LifecycleManager) -> Self {
        manager.mount();
        Self {
            manager,
            last_report: TickReport::default(),
        }
    }

    pub fn unmount(&mut self) -> Population {
        self.manager.unmount()
    }
}

/// 渲染端读取的帧数据
#[derive(Resource, Debug, Default)]
pub struct OverlayFrames {
    pub frames: Vec<VisualFrame>,
    pub layer: Option<OverlayLayer>,
}

/// 雪花更新系统
pub fn snow_update_system(
    time: Res<Time>,
    viewport: Option<Res<ViewportSize>>,
    mut overlay: ResMut<SnowOverlay>,
    mut output: ResMut<OverlayFrames>,
) {
    if let Some(viewport) = viewport {
        if viewport.0.normalized() != overlay.manager.viewport() {
            let retired = overlay.manager.resize(viewport.0);
            tracing::debug!(
                target: LOG_TARGET,
                retired = retired.len(),
                width = viewport.0.width,
                height = viewport.0.height,
                "Viewport changed"
            );
        }
    }

    let report = overlay.manager.tick(time.delta_millis());
    overlay.last_report = report;

    output.frames = overlay.manager.frames();
    output.layer = overlay.manager.is_mounted().then(|| overlay.manager.layer());
}
