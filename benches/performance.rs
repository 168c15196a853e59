use criterion::{black_box, criterion_group, criterion_main, Criterion};
use greyscale_histogram::image_loader::{compute_histogram, to_greyscale, ChannelOrder, Mask, SourceImage};
use image::{Rgb, RgbImage};

fn test_frame() -> SourceImage {
    let pixels = RgbImage::from_fn(1920, 1080, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8]));
    SourceImage::new(pixels, ChannelOrder::Rgb)
}

fn bench_greyscale(c: &mut Criterion) {
    let frame = test_frame();

    c.bench_function("greyscale_1920x1080", |b| {
        b.iter(|| {
            let _grey = to_greyscale(black_box(&frame)).unwrap();
        })
    });
}

fn bench_histogram(c: &mut Criterion) {
    let grey = to_greyscale(&test_frame()).unwrap();
    let mask = Mask::from_fn(grey.width(), grey.height(), |x, y| (x ^ y) & 1 == 0);

    c.bench_function("histogram_1920x1080", |b| {
        b.iter(|| {
            let _hist = compute_histogram(black_box(&grey), None).unwrap();
        })
    });

    c.bench_function("histogram_masked_1920x1080", |b| {
        b.iter(|| {
            let _hist = compute_histogram(black_box(&grey), Some(&mask)).unwrap();
        })
    });
}

criterion_group!(benches, bench_greyscale, bench_histogram);
criterion_main!(benches);
