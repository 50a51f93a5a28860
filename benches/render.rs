// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lanegraph::render::GraphStyle;
use lanegraph::{render_ansi, render_plain, render_views_parallel, GraphTheme, RenderConfig};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `render.plain`, `render.detailed`, `render.ansi`,
//   `render.parallel`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `linear`, `dense_merges`, `wide_lanes`).
fn benches_render(c: &mut Criterion) {
    use fixtures::history::{fixture, Case};

    let plain = RenderConfig::default();
    let mut group = c.benchmark_group("render.plain");
    for case in Case::ALL {
        let commits = fixture(case);
        let config = plain.clone();
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let lines = render_plain(black_box(&commits), black_box(&config));
                black_box(fixtures::checksum_lines(&lines))
            })
        });
    }
    group.finish();

    let detailed = RenderConfig { style: GraphStyle::Detailed, ..RenderConfig::default() };
    let mut group = c.benchmark_group("render.detailed");
    for case in [Case::FewBranches, Case::DenseMerges] {
        let commits = fixture(case);
        let config = detailed.clone();
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let lines = render_plain(black_box(&commits), black_box(&config));
                black_box(fixtures::checksum_lines(&lines))
            })
        });
    }
    group.finish();

    let theme = GraphTheme::default();
    let mut group = c.benchmark_group("render.ansi");
    for case in [Case::FewBranches, Case::WideLanes] {
        let commits = fixture(case);
        let config = plain.clone();
        let theme = theme.clone();
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let lines = render_ansi(black_box(&commits), black_box(&config), &theme);
                black_box(fixtures::checksum_lines(&lines))
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("render.parallel");
    let views = Case::ALL.into_iter().map(fixture).collect::<Vec<_>>();
    group.bench_function("all_cases", move |b| {
        b.iter(|| {
            let rendered =
                render_views_parallel(black_box(&views), black_box(&plain)).expect("views");
            black_box(rendered.iter().map(|lines| fixtures::checksum_lines(lines)).sum::<u64>())
        })
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_render
}
criterion_main!(benches);
