#![allow(dead_code)]
use criterion::measurement::WallTime;
use criterion::{Bencher, BenchmarkGroup, BenchmarkId, Criterion};
use fast_sobel::{CpuExtensions, GrayscaleImage};

pub type BenchGroup<'a> = BenchmarkGroup<'a, WallTime>;

pub fn run_bench<F>(bench_fn: F, name: &str)
where
    F: FnOnce(&mut BenchGroup),
{
    let mut criterion = Criterion::default().configure_from_args();
    let mut group = criterion.benchmark_group(name);
    bench_fn(&mut group);
    group.finish();
    criterion.final_summary();
}

pub fn bench<F>(group: &mut BenchGroup, samples: usize, name: &str, parameter: &str, f: F)
where
    F: FnMut(&mut Bencher),
{
    group.sample_size(samples.max(10));
    group.bench_function(BenchmarkId::new(name, parameter), f);
}

/// Synthetic image with smooth gradients and sharp edges.
pub fn source_image(width: u32, height: u32) -> GrayscaleImage {
    GrayscaleImage::from_fn(width, height, |x, y| {
        let stripes = if (x / 64 + y / 48) % 2 == 0 { 0 } else { 128 };
        (stripes + (x ^ y) % 128) as u8
    })
}

pub fn cpu_extensions_with_names() -> Vec<(CpuExtensions, &'static str)> {
    let all = [
        (CpuExtensions::None, "native"),
        #[cfg(target_arch = "x86_64")]
        (CpuExtensions::Sse4_1, "sse4.1"),
        #[cfg(target_arch = "x86_64")]
        (CpuExtensions::Avx2, "avx2"),
        #[cfg(target_arch = "aarch64")]
        (CpuExtensions::Neon, "neon"),
    ];
    all.into_iter().filter(|(e, _)| e.is_supported()).collect()
}
