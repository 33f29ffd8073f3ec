//! 无窗口演示程序
//!
//! 以固定帧步长驱动雪花覆盖层，并用日志输出运行情况。
//! `SNOWFX_DEMO_FRAMES` 控制运行的帧数（默认 600，即 60 FPS 下 10 秒）。

use bevy_ecs::prelude::*;
use snowfx::config::AppConfig;
use snowfx::core::{init_logging, LOG_TARGET};
use snowfx::ecs::{Time, ViewportSize};
use snowfx::snow::{snow_update_system, OverlayFrames, SnowOverlay};
use snowfx::SnowFxResult;

const DEFAULT_DEMO_FRAMES: u32 = 600;

fn main() {
    if let Err(e) = run() {
        eprintln!("snowfx demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> SnowFxResult<()> {
    let mut config = AppConfig::load_or_default();
    config.apply_env_overrides();
    init_logging(&config.logging);
    config.validate()?;

    let frames = std::env::var("SNOWFX_DEMO_FRAMES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_DEMO_FRAMES);

    let mut world = World::new();
    world.insert_resource(Time::default());
    world.insert_resource(ViewportSize(config.viewport));
    world.insert_resource(SnowOverlay::mounted(config.snow.clone(), config.viewport));
    world.insert_resource(OverlayFrames::default());

    let mut schedule = Schedule::default();
    schedule.add_systems(snow_update_system);

    tracing::info!(
        target: LOG_TARGET,
        count = config.snow.count,
        width = config.viewport.width,
        height = config.viewport.height,
        frames,
        "Snow demo starting"
    );

    let mut total_cycles = 0usize;
    for frame in 1..=frames {
        world.resource_mut::<Time>().step_fixed();
        schedule.run(&mut world);

        total_cycles += world.resource::<SnowOverlay>().last_report.rearmed;

        if frame % 60 == 0 {
            let output = world.resource::<OverlayFrames>();
            let visible = output
                .frames
                .iter()
                .filter(|f| f.position.y >= 0.0 && f.position.y <= config.viewport.height)
                .count();
            tracing::info!(
                target: LOG_TARGET,
                frame,
                visible,
                total = output.frames.len(),
                cycles = total_cycles,
                "Snow overlay status"
            );
        }
    }

    let retired = world.resource_mut::<SnowOverlay>().unmount();
    tracing::info!(
        target: LOG_TARGET,
        stopped = retired.len(),
        all_stopped = retired.all_stopped(),
        "Snow demo finished"
    );
    Ok(())
}
