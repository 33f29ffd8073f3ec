//! 雪花覆盖层性能基准测试
//!
//! 测试粒子生成、逐帧推进和帧投影的开销

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use snowfx::config::{SnowConfig, Viewport};
use snowfx::snow::{LifecycleManager, Palette, ParticleFactory, RenderBinding};

fn config(count: i32) -> SnowConfig {
    SnowConfig {
        count,
        ..Default::default()
    }
}

fn bench_factory(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_factory");

    for count in [50, 500, 5_000].iter() {
        let cfg = config(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| black_box(ParticleFactory::build(&cfg, Viewport::new(1920.0, 1080.0), &mut rng)));
        });
    }

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("lifecycle_tick");

    for count in [50, 1_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let mut manager =
                LifecycleManager::with_seed(config(count), Viewport::new(1920.0, 1080.0), 7);
            manager.mount();
            b.iter(|| black_box(manager.tick(1000.0 / 60.0)));
        });
    }

    group.finish();
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_binding");

    let cfg = config(1_000);
    let mut rng = StdRng::seed_from_u64(3);
    let particles = ParticleFactory::build(&cfg, Viewport::new(1920.0, 1080.0), &mut rng);
    let palette = Palette::from_config(&cfg);

    group.bench_function("project_1000", |b| {
        b.iter(|| {
            for particle in &particles {
                black_box(RenderBinding::project(particle, &palette));
            }
        });
    });

    let mut manager = LifecycleManager::with_seed(cfg.clone(), Viewport::new(1920.0, 1080.0), 11);
    manager.mount();
    manager.tick(500.0);
    group.bench_function("frames_1000", |b| {
        b.iter(|| black_box(manager.frames()));
    });

    group.finish();
}

criterion_group!(benches, bench_factory, bench_tick, bench_projection);
criterion_main!(benches);
