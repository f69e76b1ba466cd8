//! 用户数据生成性能基准测试
//!
//! 测试覆盖：
//! - 纯生成（不写出）的吞吐
//! - 写入内存 TSV 的吞吐
//! - 不同租户数下的性能曲线

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fixture_shared::config::GeneratorSettings;
use std::hint::black_box;
use user_generator::generators::{CountPolicy, UserGenerator};
use user_generator::models::TenantDescriptor;
use user_generator::output::{CountingSink, TsvSink};

/// 创建指定数量的租户
fn create_tenants(count: usize) -> Vec<TenantDescriptor> {
    (0..count)
        .map(|i| TenantDescriptor::new(format!("tenant-{}", i)))
        .collect()
}

/// 关闭进度日志的生成器
fn create_generator() -> UserGenerator {
    UserGenerator::new(GeneratorSettings {
        progress_interval: 0,
        ..Default::default()
    })
}

fn bench_generate_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_only");
    let generator = create_generator();
    let tenants = create_tenants(1);

    for users in [1_000u64, 10_000] {
        group.throughput(Throughput::Elements(users));
        group.bench_with_input(BenchmarkId::from_parameter(users), &users, |b, &users| {
            b.iter(|| {
                let mut sink = CountingSink::default();
                let output = generator
                    .generate(&tenants, &CountPolicy::Uniform(users), &mut sink)
                    .unwrap();
                black_box(output)
            })
        });
    }

    group.finish();
}

fn bench_generate_tsv(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_tsv");
    let generator = create_generator();
    let users = 10_000u64;

    for tenant_count in [1usize, 10] {
        let tenants = create_tenants(tenant_count);
        group.throughput(Throughput::Elements(users * tenant_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(tenant_count),
            &tenants,
            |b, tenants| {
                b.iter(|| {
                    let mut sink = TsvSink::new(Vec::new(), Vec::new());
                    generator
                        .generate(tenants, &CountPolicy::Uniform(users), &mut sink)
                        .unwrap();
                    black_box(sink.into_inner().unwrap())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_generate_only, bench_generate_tsv);
criterion_main!(benches);
