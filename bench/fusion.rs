use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cv_confidence::{prelude::*, fusion::{SignalFusion, Params}};
use image;

fn fusion_bench(c: &mut Criterion) {

    // Build synthetic VGA inputs
    let width = 640usize;
    let height = 480usize;

    let mut grayscale = image::GrayImage::new(width as u32, height as u32);
    let mut disparity = DisparityImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            *grayscale.get_pixel_mut(x as u32, y as u32) =
                image::Luma([((x * 7 + y * 3) % 256) as u8]);

            disparity.put(x, y, ((x + y) % 160) as i16);
        }
    }

    // Build fusion alg
    let mut fusion = SignalFusion::new(Params::default());

    // Benchmark compute function
    c.bench_function("fusion 640x480", |b| {
        b.iter(|| fusion.compute(black_box(&disparity), black_box(&grayscale)))
    });

    // Benchmark the colour ramp over a computed map
    let conf = fusion.compute(&disparity, &grayscale).unwrap();

    c.bench_function("colorize 640x480", |b| b.iter(|| colorize(black_box(&conf))));
}

criterion_group!(benches, fusion_bench);
criterion_main!(benches);
