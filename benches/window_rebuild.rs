//! Window rebuild and layout benchmarks.
//!
//! A rebuild re-scans the source from the top, so its cost grows with the
//! target row. These benchmarks measure that growth and the layout pass that
//! follows every rebuild.
//!
//! Run with: cargo bench --bench window_rebuild

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use csvpeek::model::{Delimiter, NavCommand};
use csvpeek::source::MemorySource;
use csvpeek::state::{Navigator, PagerSettings};
use csvpeek::view_state::ColumnLayout;
use csvpeek::window::{build_window, NoProgress};

const ROWS: usize = 200_000;
const CAPACITY: usize = 10_000;

/// Position of the rebuild target in the file.
#[derive(Debug, Clone, Copy)]
enum Target {
    Start,
    Middle,
    End,
}

impl Target {
    fn name(&self) -> &'static str {
        match self {
            Target::Start => "start",
            Target::Middle => "middle",
            Target::End => "end",
        }
    }

    fn row(&self, rows: usize) -> usize {
        match self {
            Target::Start => 0,
            Target::Middle => rows / 2,
            Target::End => rows.saturating_sub(1),
        }
    }
}

fn fixture(rows: usize, delimiter: Delimiter) -> MemorySource {
    let sep = delimiter.as_byte() as char;
    let mut data = format!("id{sep}name{sep}city{sep}note\n");
    for i in 0..rows {
        data.push_str(&format!(
            "{i}{sep}user-{i}{sep}city-{}{sep}\"note with {sep} inside\"\n",
            i % 97
        ));
    }
    MemorySource::new(data, delimiter)
}

fn benchmark_build_window(c: &mut Criterion) {
    let source = fixture(ROWS, Delimiter::COMMA);
    let mut group = c.benchmark_group("build_window");
    group.sample_size(20);

    for target in [Target::Start, Target::Middle, Target::End] {
        group.bench_with_input(
            BenchmarkId::new("target", target.name()),
            &target,
            |b, target| {
                let row = target.row(ROWS);
                b.iter(|| {
                    black_box(build_window(&source, row, CAPACITY, &mut NoProgress).unwrap())
                });
            },
        );
    }

    group.finish();
}

fn benchmark_column_layout(c: &mut Criterion) {
    let source = fixture(CAPACITY, Delimiter::TAB);
    let window = build_window(&source, 0, CAPACITY, &mut NoProgress).unwrap();

    let mut group = c.benchmark_group("column_layout");
    for first_column in [0, 2] {
        group.bench_with_input(
            BenchmarkId::new("first_column", first_column),
            &first_column,
            |b, &first_column| {
                b.iter(|| black_box(ColumnLayout::compute(&window, first_column)));
            },
        );
    }
    group.finish();
}

/// Cost of a page move that misses the window and forces a rebuild.
fn benchmark_page_down_miss(c: &mut Criterion) {
    let settings = PagerSettings {
        buffer_size: 1_000,
        page_size: 1_000,
    };

    c.bench_function("page_down_miss", |b| {
        b.iter_batched(
            || Navigator::new(fixture(20_000, Delimiter::COMMA), 0, settings, &mut NoProgress).unwrap(),
            |mut nav| {
                black_box(nav.apply(NavCommand::PageDown, &mut NoProgress).unwrap());
                nav
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    benchmark_build_window,
    benchmark_column_layout,
    benchmark_page_down_miss
);
criterion_main!(benches);
