use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use formula_fractals::{
    EQUATION_PRESETS, FractalConfig, FractalRenderer, PaletteKinds, RenderSettings, Viewport,
    compile,
};
use std::hint::black_box;

const WIDTH: u32 = 320;
const HEIGHT: u32 = 240;
const MAX_ITERATIONS: u32 = 200;

fn bench_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_preset");
    group.sample_size(20);

    for preset in EQUATION_PRESETS {
        let config = FractalConfig::new(MAX_ITERATIONS, PaletteKinds::Magma, preset.real, preset.imag)
            .expect("preset config is valid");

        for (label, parallel) in [("serial", false), ("rayon", true)] {
            let mut renderer = FractalRenderer::new(RenderSettings { parallel });

            group.bench_with_input(
                BenchmarkId::new(label, preset.name),
                &config,
                |b, config| {
                    b.iter(|| {
                        renderer
                            .render(black_box(Viewport::INITIAL), config, WIDTH, HEIGHT)
                            .expect("preset renders")
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_compile(c: &mut Criterion) {
    c.bench_function("compile_burning_ship", |b| {
        b.iter(|| compile(black_box("x*x - y*y + x0"), black_box("abs(2*x*y) + y0")))
    });
}

criterion_group!(benches, bench_presets, bench_compile);
criterion_main!(benches);
