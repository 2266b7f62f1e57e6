//! Benchmarks for marker projection

use chakra_overlay::{
    landmark::{FrameLandmarks, Landmark},
    projector::{chakra_points, ChakraProjector, ProjectorConfig},
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Synthetic detection with the jitter of a real webcam session
fn synthetic_frame() -> FrameLandmarks {
    let pose = (0..33)
        .map(|i| {
            let t = i as f32 / 32.0;
            Landmark::new(
                0.3 + 0.4 * t + 0.01 * rand::random::<f32>(),
                0.1 + 0.7 * t + 0.01 * rand::random::<f32>(),
                -0.2 * (1.0 - t),
            )
        })
        .collect();
    let face = (0..478)
        .map(|i| {
            let t = i as f32 / 477.0;
            Landmark::new(0.45 + 0.1 * t, 0.05 + 0.2 * t, -0.05)
        })
        .collect();
    FrameLandmarks { pose, face }
}

fn benchmark_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projector");
    let frame = synthetic_frame();

    let config = ProjectorConfig::default();
    group.bench_function("chakra_points", |b| {
        b.iter(|| black_box(chakra_points(&config, black_box(&frame.pose), black_box(&frame.face))));
    });

    let mut projector = ChakraProjector::new(config);
    group.bench_function("update", |b| {
        b.iter(|| black_box(projector.update(black_box(&frame))));
    });

    let mut no_crown = ChakraProjector::new(ProjectorConfig {
        crown_enabled: false,
        ..ProjectorConfig::default()
    });
    group.bench_function("update_no_crown", |b| {
        b.iter(|| black_box(no_crown.update(black_box(&frame))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_projection);
criterion_main!(benches);
