//! Column width oracle benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use colfmt::unicode::cluster_width;
use colfmt::{ColumnWidthOracle, UnicodeOracle, WidthMethod};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const ORACLE: UnicodeOracle = UnicodeOracle::new(WidthMethod::WcWidth);

fn fast_prefix(c: &mut Criterion) {
    let ascii = "x".repeat(1000);
    c.bench_function("fast_prefix_ascii_1000", |b| {
        b.iter(|| ORACLE.fast_prefix(black_box(ascii.as_bytes())))
    });

    let late = format!("{}漢", "x".repeat(999));
    c.bench_function("fast_prefix_late_wide", |b| {
        b.iter(|| ORACLE.fast_prefix(black_box(late.as_bytes())))
    });
}

fn bounded_width(c: &mut Criterion) {
    let cjk = "中文测试字符串这是一个很长的中文文本".repeat(10);
    c.bench_function("bounded_width_cjk_bytes", |b| {
        b.iter(|| ORACLE.bounded_width(black_box(cjk.as_bytes()), usize::MAX))
    });

    let cjk_chars: Vec<char> = cjk.chars().collect();
    c.bench_function("bounded_width_cjk_chars", |b| {
        b.iter(|| ORACLE.bounded_width(black_box(&cjk_chars[..]), usize::MAX))
    });

    let emoji = "🎉🎊🎁👨\u{200D}👩\u{200D}👧🇺🇸e\u{0301}".repeat(20);
    c.bench_function("bounded_width_emoji_budget_40", |b| {
        b.iter(|| ORACLE.bounded_width(black_box(emoji.as_bytes()), 40))
    });

    let invalid: Vec<u8> = (0u8..=255).cycle().take(1024).collect();
    c.bench_function("bounded_width_invalid_utf8", |b| {
        b.iter(|| ORACLE.bounded_width(black_box(&invalid[..]), usize::MAX))
    });
}

fn clusters(c: &mut Criterion) {
    c.bench_function("cluster_width_zwj_family", |b| {
        b.iter(|| cluster_width(black_box("👨\u{200D}👩\u{200D}👧"), WidthMethod::WcWidth))
    });
    c.bench_function("cluster_width_cjk_method", |b| {
        b.iter(|| cluster_width(black_box("①"), WidthMethod::Unicode))
    });
}

criterion_group!(benches, fast_prefix, bounded_width, clusters);
criterion_main!(benches);
