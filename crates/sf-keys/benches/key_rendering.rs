//! Benchmark key tag rendering and key list updates.
//!
//! Models a multi-DRM playlist carrying one key per keyformat, measuring:
//! - rendering the whole key block into a reused buffer
//! - rotating one key (copy-on-write update)
//! - diffing two revisions

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sf_keys::{Key, KeyList, KeyMethod};

fn make_list(count: usize) -> KeyList {
    (0..count)
        .map(|i| {
            Key::new(KeyMethod::SampleAes, format!("skd://key/{i}"))
                .with_iv(format!("0x{i:032x}"))
                .with_keyformat(format!("com.example.drm{i}"))
                .with_keyformat_versions("1")
        })
        .collect()
}

fn bench_key_rendering(c: &mut Criterion) {
    let list = make_list(8);
    let rotated = list
        .add_or_update(
            Key::new(KeyMethod::SampleAes, "skd://key/rotated").with_keyformat("com.example.drm3"),
        )
        .unwrap();

    let mut group = c.benchmark_group("key_rendering");

    group.bench_function("write_to", |b| {
        let mut buf = Vec::with_capacity(4096);
        b.iter(|| {
            buf.clear();
            black_box(&list).write_to(&mut buf).unwrap()
        });
    });

    group.bench_function("add_or_update", |b| {
        b.iter(|| {
            black_box(&list).add_or_update(black_box(
                Key::new(KeyMethod::SampleAes, "skd://key/next").with_keyformat("com.example.drm5"),
            ))
        });
    });

    group.bench_function("diff", |b| {
        b.iter(|| black_box(&rotated).diff(black_box(&list)));
    });

    group.finish();
}

criterion_group!(benches, bench_key_rendering);
criterion_main!(benches);
