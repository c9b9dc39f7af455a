use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use docpath::{normalize, resolve_absolute, resolve_relative};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("clean", |b| {
        b.iter(|| normalize(black_box("/absolute/path/to/file.md")));
    });

    group.bench_function("backslashes", |b| {
        b.iter(|| normalize(black_box(r"docs\guide\setup.md")));
    });

    group.bench_function("duplicate_slashes", |b| {
        b.iter(|| normalize(black_box("docs//guide///setup.md")));
    });

    group.finish();
}

fn bench_absolute(c: &mut Criterion) {
    let mut group = c.benchmark_group("absolute");

    for (name, source, destination) in [
        ("plain", "foo/bar/index.md", "baz/qux.md"),
        ("with_dots", "foo/bar/index.md", "../../qux.md"),
        ("deep_ascent", "a/b/c/d/e/index.md", "../../../../x/y.md"),
        ("anchored", "foo/bar/index", "../../qux/quux.foo#anchor"),
        ("unresolvable", "foo/bar/index.md", "../../../qux.md"),
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(source, destination),
            |b, &(source, destination)| {
                b.iter(|| resolve_absolute(black_box(source), black_box(destination)));
            },
        );
    }

    group.finish();
}

fn bench_relative(c: &mut Criterion) {
    let mut group = c.benchmark_group("relative");

    for (name, source, destination) in [
        ("same_directory", "/foo/bar/index.md", "/foo/bar/baz.md"),
        ("sibling", "/foo/bar/index.md", "/foo/qux/baz.md"),
        (
            "deep_divergence",
            "/foo/bar/baz/qux/index.md",
            "/foo/qux/bar/baz/baz.md",
        ),
        ("empty_destination", "/foo/bar/index.md", ""),
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(source, destination),
            |b, &(source, destination)| {
                b.iter(|| resolve_relative(black_box(source), black_box(destination)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_absolute, bench_relative);
criterion_main!(benches);
