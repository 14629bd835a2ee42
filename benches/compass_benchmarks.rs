use compass_rose::{
    CompassApp, DialRenderer, HeadingSample, HeadingSmoother, RecordingSurface, normalize_degrees,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::prelude::*;
use rand_pcg::Pcg64;

const FRAME: f32 = 1.0 / 60.0;

// Pre-generated headings so the RNG stays out of the measured loop
fn generate_headings(count: usize, seed: u64) -> Vec<f32> {
    let mut rng = Pcg64::seed_from_u64(seed);
    (0..count).map(|_| rng.random_range(-720.0..720.0)).collect()
}

fn bench_normalize(c: &mut Criterion) {
    let headings = generate_headings(1024, 42);

    c.bench_function("normalize_degrees", |b| {
        let mut index = 0;
        b.iter(|| {
            let heading = headings[index % headings.len()];
            index += 1;
            black_box(normalize_degrees(black_box(heading)))
        })
    });
}

fn bench_smoother_advance(c: &mut Criterion) {
    let headings = generate_headings(1024, 7);

    c.bench_function("smoother_advance_frame", |b| {
        let mut smoother = HeadingSmoother::new();
        let mut index = 0;
        b.iter(|| {
            // Re-target periodically so the spring never rests
            if index % 16 == 0 {
                smoother.set_target(headings[index % headings.len()]);
            }
            index += 1;
            black_box(smoother.advance(FRAME))
        })
    });
}

fn bench_dial_render(c: &mut Criterion) {
    let renderer = DialRenderer::new();

    c.bench_function("dial_render_frame", |b| {
        let mut surface = RecordingSurface::new();
        let mut rotation = 0.0f32;
        b.iter(|| {
            surface.reset();
            rotation = normalize_degrees(rotation + 0.5);
            renderer.render(&mut surface, black_box(rotation));
            black_box(surface.ops().len())
        })
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let headings = generate_headings(1024, 99);

    c.bench_function("pipeline_sample_to_frame", |b| {
        let mut app = CompassApp::new();
        let mut surface = RecordingSurface::new();
        let mut index = 0;
        b.iter(|| {
            let sample = HeadingSample {
                true_heading: headings[index % headings.len()],
                magnetic_heading: 0.0,
                accuracy: 1.0,
            };
            index += 1;
            app.on_heading_sample(&sample);
            app.advance_frame(FRAME);
            surface.reset();
            app.draw(&mut surface);
            black_box(surface.ops().len())
        })
    });
}

criterion_group!(
    benches,
    bench_normalize,
    bench_smoother_advance,
    bench_dial_render,
    bench_full_pipeline
);
criterion_main!(benches);
