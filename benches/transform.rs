//! Transform benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use chatmark::{strip_codes, translate_alternate_codes};

fn bench_strip_plain_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip");

    // Plain chat text with no codes
    let plain_text = "Hello, World! ".repeat(1000);
    group.throughput(Throughput::Bytes(plain_text.len() as u64));

    group.bench_function("plain_text", |b| {
        b.iter(|| black_box(strip_codes(black_box(Some(&plain_text)))))
    });

    group.finish();
}

fn bench_strip_code_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip");

    // Every word recolored (typical decorated server broadcast)
    let code_heavy = "\u{00A7}6[Server]\u{00A7}r \u{00A7}aPlayer\u{00A7}r joined \u{00A7}lthe game\u{00A7}r\n".repeat(500);
    group.throughput(Throughput::Bytes(code_heavy.len() as u64));

    group.bench_function("code_heavy", |b| {
        b.iter(|| black_box(strip_codes(black_box(Some(&code_heavy)))))
    });

    group.finish();
}

fn bench_translate_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate");

    // Authored content: alternate markers plus plain prose
    let mixed = "&6[Shop]&r Buy &a64x&r stone for &e5 coins&r - type &l/buy&r\n".repeat(500);
    group.throughput(Throughput::Bytes(mixed.len() as u64));

    group.bench_function("mixed_content", |b| {
        b.iter(|| black_box(translate_alternate_codes('&', black_box(&mixed))))
    });

    group.finish();
}

fn bench_translate_no_markers(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate");

    // No markers at all - pure scan cost
    let unmarked = "The quick brown fox jumps over the lazy dog. ".repeat(1000);
    group.throughput(Throughput::Bytes(unmarked.len() as u64));

    group.bench_function("no_markers", |b| {
        b.iter(|| black_box(translate_alternate_codes('&', black_box(&unmarked))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_strip_plain_text,
    bench_strip_code_heavy,
    bench_translate_mixed,
    bench_translate_no_markers
);
criterion_main!(benches);
