use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use meshleaf::orchestrator::plan;
use meshleaf::{AssetContext, AssetResolver, FixedLocale, PluginRegistry};
use meshleaf_vfs::MemoryProvider;

fn filesystem() -> MemoryProvider {
    let fs = MemoryProvider::new();
    for i in 0..256 {
        fs.insert(format!("meshes/part_{i}.dae"), Vec::new());
    }
    fs.insert("meshes/cached.dae", Vec::new());
    fs.insert("meshes/cached.dae.osgb", Vec::new());
    fs.insert("meshes/legacy.dae", Vec::new());
    fs.insert("meshes/legacy.dae.osg", Vec::new());
    fs
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

fn bench_resolve_first_suffix(c: &mut Criterion) {
    let resolver = AssetResolver::with_default_extensions(Arc::new(filesystem()));
    c.bench_function("resolve_hit_osgb", |b| {
        b.iter(|| resolver.resolve(black_box("meshes/cached.dae")));
    });
}

fn bench_resolve_last_suffix(c: &mut Criterion) {
    let resolver = AssetResolver::with_default_extensions(Arc::new(filesystem()));
    c.bench_function("resolve_hit_osg", |b| {
        b.iter(|| resolver.resolve(black_box("meshes/legacy.dae")));
    });
}

fn bench_resolve_miss(c: &mut Criterion) {
    let resolver = AssetResolver::with_default_extensions(Arc::new(filesystem()));
    c.bench_function("resolve_miss", |b| {
        b.iter(|| resolver.resolve(black_box("meshes/part_42.dae")));
    });
}

// ---------------------------------------------------------------------------
// Planning
// ---------------------------------------------------------------------------

fn bench_plan_locale_sensitive(c: &mut Criterion) {
    let context = AssetContext::new(Arc::new(filesystem()), Arc::new(PluginRegistry::new()))
        .with_locale(Arc::new(FixedLocale::COMMA));
    c.bench_function("plan_dae_without_cache", |b| {
        b.iter(|| plan(&context, black_box("meshes/part_7.dae")));
    });
}

criterion_group!(
    benches,
    bench_resolve_first_suffix,
    bench_resolve_last_suffix,
    bench_resolve_miss,
    bench_plan_locale_sensitive,
);
criterion_main!(benches);
