//! 控制回路性能基准测试
//!
//! 测试一个完整 tick（感知 → 规划 → 执行）在稠密危险物场景下的耗时，
//! 验证 tick 路径在实体数线性时间内完成且无额外分配。

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dashbot_core::{Aabb, Autopilot, ObjectKind, PlayerSnapshot, RunConfig, WorldObject, WorldSnapshot};

fn dense_course(count: usize) -> Vec<WorldObject> {
    (0..count)
        .map(|i| {
            let x = i as f32 * 45.0;
            WorldObject {
                x,
                bounds: Aabb::new(x, 0.0, x + 30.0, 30.0 + (i % 5) as f32 * 15.0),
                kind: if i % 3 == 0 {
                    ObjectKind::Spike
                } else {
                    ObjectKind::Solid
                },
            }
        })
        .collect()
}

fn bench_full_tick(c: &mut Criterion) {
    let objects = dense_course(500);
    let config = RunConfig {
        master_enabled: true,
        ..Default::default()
    };

    let mut group = c.benchmark_group("tick");

    group.bench_function("cube_dense_500", |b| {
        let mut pilot = Autopilot::new();
        pilot.on_run_start(0.0);
        let mut x = 0.0f32;

        b.iter(|| {
            let snapshot = WorldSnapshot {
                objects: &objects,
                player: Some(PlayerSnapshot {
                    x,
                    y: 15.0,
                    on_ground: true,
                    ship: false,
                    dart: false,
                    alive: true,
                }),
            };
            let signal = pilot.tick(Some(black_box(&snapshot)), &config);
            x = (x + 5.0) % 10_000.0;
            black_box(signal)
        })
    });

    group.bench_function("ship_dense_500", |b| {
        let mut pilot = Autopilot::new();
        pilot.on_run_start(0.0);
        let mut x = 0.0f32;

        b.iter(|| {
            let snapshot = WorldSnapshot {
                objects: &objects,
                player: Some(PlayerSnapshot {
                    x,
                    y: 60.0,
                    on_ground: false,
                    ship: true,
                    dart: false,
                    alive: true,
                }),
            };
            let signal = pilot.tick(Some(black_box(&snapshot)), &config);
            x = (x + 5.0) % 10_000.0;
            black_box(signal)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_full_tick);
criterion_main!(benches);
