//! CLI 命令定义
//!
//! 使用 clap derive 宏定义命令行接口结构。

use std::path::PathBuf;

use clap::{Args, Parser};
use fixture_shared::config::AppConfig;

/// 压测用户数据生成工具
///
/// 生成用户表 TSV、认证设备表 TSV 以及供压测脚本使用的测试用户 JSON。
#[derive(Parser, Debug)]
#[command(name = "generate-users")]
#[command(version, about = "身份平台压测用户数据生成工具")]
pub struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)，未指定时使用配置
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// 生成参数
///
/// 所有参数均为可选，未指定时使用配置文件或内置默认值。
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// 每个租户的用户数（默认 100000）
    #[arg(long)]
    pub users: Option<u64>,

    /// 第一个租户的用户数（覆盖 --users）
    #[arg(long)]
    pub first_tenant_users: Option<u64>,

    /// 单租户模式的租户 ID
    #[arg(long)]
    pub tenant_id: Option<String>,

    /// 多租户配置文件路径（JSON/YAML）
    #[arg(long)]
    pub tenants_file: Option<PathBuf>,

    /// 单租户模式的客户端 ID
    #[arg(long)]
    pub client_id: Option<String>,

    /// 单租户模式的客户端密钥
    #[arg(long)]
    pub client_secret: Option<String>,

    /// 输出文件前缀（未指定时自动生成）
    #[arg(long)]
    pub output_prefix: Option<String>,

    /// 输出目录
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// 每个租户写入测试用户清单的最大人数
    #[arg(long)]
    pub sample_cap: Option<u64>,
}

impl GenerateArgs {
    /// 将命令行参数覆盖到配置上
    pub fn apply(self, config: &mut AppConfig) {
        if let Some(users) = self.users {
            config.generator.users_per_tenant = users;
        }
        if self.first_tenant_users.is_some() {
            config.generator.first_tenant_users = self.first_tenant_users;
        }
        if let Some(cap) = self.sample_cap {
            config.generator.sample_cap = cap;
        }
        if let Some(tenant_id) = self.tenant_id {
            config.tenant.tenant_id = tenant_id;
        }
        if self.tenants_file.is_some() {
            config.tenant.tenants_file = self.tenants_file;
        }
        if let Some(client_id) = self.client_id {
            config.tenant.client_id = client_id;
        }
        if let Some(client_secret) = self.client_secret {
            config.tenant.client_secret = client_secret;
        }
        if self.output_prefix.is_some() {
            config.output.prefix = self.output_prefix;
        }
        if let Some(dir) = self.output_dir {
            config.output.dir = dir;
        }
    }
}

// ============================================================================
// 单元测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["generate-users"]);

        assert!(cli.log_level.is_none());
        assert!(cli.generate.users.is_none());
        assert!(cli.generate.tenants_file.is_none());

        // 未指定参数时配置保持不变
        let mut config = AppConfig::default();
        cli.generate.apply(&mut config);
        assert_eq!(config.generator.users_per_tenant, 100_000);
        assert!(config.output.prefix.is_none());
    }

    #[test]
    fn test_cli_parse_multi_tenant() {
        let cli = Cli::parse_from([
            "generate-users",
            "--users",
            "100000",
            "--first-tenant-users",
            "1000000",
            "--tenants-file",
            "performance-test-tenant.json",
        ]);

        assert_eq!(cli.generate.users, Some(100_000));
        assert_eq!(cli.generate.first_tenant_users, Some(1_000_000));
        assert_eq!(
            cli.generate.tenants_file,
            Some(PathBuf::from("performance-test-tenant.json"))
        );
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "generate-users",
            "--log-level",
            "debug",
            "--users",
            "3",
            "--tenant-id",
            "T1",
            "--client-id",
            "c1",
            "--client-secret",
            "s1",
            "--output-prefix",
            "smoke",
            "--output-dir",
            "/tmp/fixtures",
            "--sample-cap",
            "2",
        ]);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));

        let mut config = AppConfig::default();
        cli.generate.apply(&mut config);

        assert_eq!(config.generator.users_per_tenant, 3);
        assert_eq!(config.generator.sample_cap, 2);
        assert_eq!(config.tenant.tenant_id, "T1");
        assert_eq!(config.tenant.client_id, "c1");
        assert_eq!(config.tenant.client_secret, "s1");
        assert_eq!(config.output.prefix.as_deref(), Some("smoke"));
        assert_eq!(config.output.dir, PathBuf::from("/tmp/fixtures"));
    }

    #[test]
    fn test_cli_rejects_negative_count() {
        let result = Cli::try_parse_from(["generate-users", "--users", "-5"]);
        assert!(result.is_err());
    }
}
