//! 配置管理模块
//!
//! 支持 TOML 配置文件加载、环境变量覆盖，以及类型安全的配置访问。
//! 命令行参数在此基础上再做最后一层覆盖，见 `user-generator` 的 CLI 模块。

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// 单租户模式下的默认租户 ID
pub const DEFAULT_TENANT_ID: &str = "67e7eae6-62b0-4500-9eff-87459f63fc66";

/// 默认客户端 ID
pub const DEFAULT_CLIENT_ID: &str = "clientSecretPost";

/// 默认客户端密钥
///
/// 仅是压测环境使用的占位字符串，不是真实凭据。
pub const DEFAULT_CLIENT_SECRET: &str = "clientSecretPostPassword1234567890123456789012345678901234567890123456789012345678901234567890";

/// 生成器配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// 每个租户生成的用户数
    pub users_per_tenant: u64,
    /// 第一个租户的用户数（覆盖 users_per_tenant）
    pub first_tenant_users: Option<u64>,
    /// 每个租户写入测试用户清单的最大人数
    pub sample_cap: u64,
    /// 进度日志间隔（按已生成用户数计），0 表示关闭
    pub progress_interval: u64,
    pub email_domain: String,
    pub provider_id: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            users_per_tenant: 100_000,
            first_tenant_users: None,
            sample_cap: 500,
            progress_interval: 100_000,
            email_domain: "example.com".to_string(),
            provider_id: "idp-server".to_string(),
        }
    }
}

/// 输出配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// 输出目录，不存在时自动创建
    pub dir: PathBuf,
    /// 输出文件名前缀，为空时根据租户数和用户数自动生成
    pub prefix: Option<String>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./performance-test/data"),
            prefix: None,
        }
    }
}

/// 单租户模式的默认租户信息
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TenantDefaults {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
    /// 多租户配置文件路径，设置后进入多租户模式
    pub tenants_file: Option<PathBuf>,
}

impl Default for TenantDefaults {
    fn default() -> Self {
        Self {
            tenant_id: DEFAULT_TENANT_ID.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            client_secret: DEFAULT_CLIENT_SECRET.to_string(),
            tenants_file: None,
        }
    }
}

/// 可观测性配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
    /// 是否输出 JSON 格式日志
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub generator: GeneratorSettings,
    pub output: OutputSettings,
    pub tenant: TenantDefaults,
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. 内置默认值
    /// 2. {CONFIG_DIR}/default.toml
    /// 3. {CONFIG_DIR}/{tool_name}.toml
    /// 4. 环境变量（FIXTURE_ 前缀，层级用双下划线分隔，
    ///    如 FIXTURE_GENERATOR__SAMPLE_CAP -> generator.sample_cap）
    pub fn load(tool_name: &str) -> Result<Self> {
        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
        Self::load_from(Path::new(&config_dir), tool_name)
    }

    /// 从指定目录加载配置
    pub fn load_from(config_dir: &Path, tool_name: &str) -> Result<Self> {
        let default_file = config_dir.join("default.toml");
        let tool_file = config_dir.join(format!("{}.toml", tool_name));

        let builder = Config::builder()
            .add_source(File::from(default_file).required(false))
            .add_source(File::from(tool_file).required(false))
            .add_source(
                Environment::with_prefix("FIXTURE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Ok(builder.build()?.try_deserialize()?)
    }
}
