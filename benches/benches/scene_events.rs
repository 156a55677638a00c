// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::Vec3;
use kurbo::Point;
use understory_scene_events::input::{InputAction, MouseButton};
use understory_scene_events::{Dispatcher, DispatcherConfig, EventKind, FocusPolicy, InputEvent, Intersection};

/// `depth` hits on object `leaf`, each with a `path_len` path whose only
/// registered node is the root. Faces alternate back and front.
fn hit_list(depth: usize, path_len: u32, leaf: u32) -> Vec<Intersection<u32>> {
    (0..depth)
        .map(|i| {
            let z = -(i as f32);
            let normal = if i % 2 == 0 { Vec3::NEG_Z } else { Vec3::Z };
            let path: Vec<u32> = (0..path_len).map(|p| leaf * 1_000 + p).collect();
            Intersection::new(path, Vec3::new(0.0, 0.0, z), Vec3::ZERO, normal)
        })
        .collect()
}

fn dispatcher(objects: u32, ignore_back_faces: bool) -> Dispatcher<u32> {
    let config = DispatcherConfig::default().with_ignore_back_faces(ignore_back_faces);
    let mut d = Dispatcher::with_config(FocusPolicy::PointerOver, FocusPolicy::ButtonDown, config);
    for o in 0..objects {
        // Register the group root of each object; picks land on deep leaves.
        d.register(o * 1_000);
        for kind in [EventKind::MouseEnter, EventKind::MouseLeave, EventKind::MouseMove] {
            d.subscribe(o * 1_000, kind, |args| {
                black_box(args.node);
            })
            .unwrap();
        }
    }
    d
}

fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_events/frame");

    for path_len in [2_u32, 8, 32] {
        let a = hit_list(4, path_len, 1);
        let b = hit_list(4, path_len, 2);
        group.throughput(Throughput::Elements(2));

        for ignore in [false, true] {
            let id = BenchmarkId::new(if ignore { "alternate_cull" } else { "alternate" }, path_len);
            group.bench_with_input(id, &(a.clone(), b.clone()), |bench, (a, b)| {
                let mut d = dispatcher(16, ignore);
                let mut t = 0.0;
                bench.iter(|| {
                    t += 0.016;
                    black_box(d.handle_with_hits(&InputEvent::frame(t, Point::ORIGIN), a));
                    black_box(d.handle_with_hits(&InputEvent::frame(t, Point::ORIGIN), b));
                });
            });
        }

        group.bench_with_input(BenchmarkId::new("steady", path_len), &a, |bench, a| {
            let mut d = dispatcher(16, false);
            let mut t = 0.0;
            bench.iter(|| {
                t += 0.016;
                black_box(d.handle_with_hits(&InputEvent::frame(t, Point::ORIGIN), a));
                black_box(d.handle_with_hits(&InputEvent::frame(t, Point::ORIGIN), a));
            });
        });
    }

    group.finish();
}

fn bench_clicks(c: &mut Criterion) {
    c.bench_function("scene_events/click_pair", |bench| {
        let mut d = dispatcher(1, false);
        d.handle_with_hits(&InputEvent::frame(0.0, Point::ORIGIN), &hit_list(1, 2, 0));
        let mut t = 0.0;
        bench.iter(|| {
            t += 0.1;
            for action in [
                InputAction::Press(MouseButton::Left),
                InputAction::Release(MouseButton::Left),
            ] {
                black_box(d.handle_with_hits(&InputEvent::new(t, Point::ORIGIN, action), &[]));
            }
        });
    });
}

criterion_group!(benches, bench_frames, bench_clicks);
criterion_main!(benches);
