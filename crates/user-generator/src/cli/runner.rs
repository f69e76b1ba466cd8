//! 命令执行器
//!
//! 把配置转化为一次完整的生成：解析租户、确定输出文件、逐行写出 TSV、写出测试用户清单。
//! 租户输入的错误在创建任何输出文件之前报告。

use std::fs;

use anyhow::{Context, Result};
use fixture_shared::config::AppConfig;
use tracing::info;

use crate::generators::{CountPolicy, GenerationStats, UserGenerator};
use crate::models::TenantDescriptor;
use crate::output::{OutputPaths, TsvSink, default_prefix, write_manifest};
use crate::tenant_source::TenantSource;

/// 一次生成的结果
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub paths: OutputPaths,
    pub stats: GenerationStats,
}

/// 命令执行器
pub struct CommandRunner {
    config: AppConfig,
}

impl CommandRunner {
    /// 创建命令执行器
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// 根据配置确定租户来源
    ///
    /// 配置了租户文件时为多租户模式，否则使用单租户默认值。
    pub fn tenant_source(&self) -> TenantSource {
        let tenant = &self.config.tenant;
        match &tenant.tenants_file {
            Some(path) => TenantSource::File(path.clone()),
            None => TenantSource::Single(TenantDescriptor::with_client(
                tenant.tenant_id.clone(),
                tenant.client_id.clone(),
                tenant.client_secret.clone(),
            )),
        }
    }

    /// 用户数分配策略
    pub fn count_policy(&self) -> CountPolicy {
        let generator = &self.config.generator;
        CountPolicy::from_options(generator.users_per_tenant, generator.first_tenant_users)
    }

    /// 执行生成
    pub fn run_generate(&self) -> Result<GenerationReport> {
        let source = self.tenant_source();
        let tenants = source.resolve().context("加载租户失败")?;
        let policy = self.count_policy();

        let prefix = match &self.config.output.prefix {
            Some(prefix) => prefix.clone(),
            None => default_prefix(source.is_multi_tenant(), tenants.len(), &policy),
        };

        let dir = &self.config.output.dir;
        fs::create_dir_all(dir)
            .with_context(|| format!("创建输出目录失败: {}", dir.display()))?;
        let paths = OutputPaths::new(dir, &prefix);

        info!(
            prefix = %paths.prefix,
            multi_tenant = source.is_multi_tenant(),
            tenants = tenants.len(),
            "输出文件已确定"
        );

        let mut sink = TsvSink::create(&paths.users, &paths.devices)
            .context("创建 TSV 输出文件失败")?;

        let generator = UserGenerator::new(self.config.generator.clone());
        let output = generator
            .generate(&tenants, &policy, &mut sink)
            .context("生成用户数据失败")?;
        sink.flush().context("写入 TSV 文件失败")?;

        info!(path = %paths.users.display(), "用户 TSV 已写出");
        info!(path = %paths.devices.display(), "设备 TSV 已写出");

        write_manifest(&paths.test_users, &output.manifest)
            .context("写入测试用户清单失败")?;
        info!(path = %paths.test_users.display(), "测试用户清单已写出");

        let report = GenerationReport {
            paths,
            stats: output.stats,
        };
        print_summary(&report);

        Ok(report)
    }
}

/// 打印生成结果
fn print_summary(report: &GenerationReport) {
    println!("\n数据生成完成:");
    println!("{}", "=".repeat(60));
    println!("用户总数: {}", report.stats.total_users);
    println!("设备总数: {}", report.stats.total_devices);
    println!("用户 TSV: {}", report.paths.users.display());
    println!("设备 TSV: {}", report.paths.devices.display());
    println!("测试用户 JSON: {}", report.paths.test_users.display());
    println!("{}", "=".repeat(60));
    println!("\n下一步:");
    println!(
        "   ./performance-test/data/import_users.sh {}",
        report.paths.prefix
    );
}

// ============================================================================
// 单元测试
// ============================================================================
