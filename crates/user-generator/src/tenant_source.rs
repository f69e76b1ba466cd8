//! 租户来源
//!
//! 单租户模式直接使用命令行或配置给出的租户信息；
//! 多租户模式从 JSON/YAML 文件加载租户列表。
//! 文件不存在或列表为空都属于致命错误，必须在生成开始前报告。

use std::fs;
use std::path::{Path, PathBuf};

use fixture_shared::error::{FixtureError, Result};
use tracing::info;

use crate::models::TenantDescriptor;

/// 租户来源
#[derive(Debug, Clone)]
pub enum TenantSource {
    /// 单租户模式
    Single(TenantDescriptor),
    /// 多租户模式，从文件加载
    File(PathBuf),
}

impl TenantSource {
    /// 是否为多租户模式
    pub fn is_multi_tenant(&self) -> bool {
        matches!(self, Self::File(_))
    }

    /// 解析出租户列表
    ///
    /// 返回的列表保证非空。
    pub fn resolve(&self) -> Result<Vec<TenantDescriptor>> {
        let tenants = match self {
            Self::Single(tenant) => vec![tenant.clone()],
            Self::File(path) => load_tenants(path)?,
        };

        if tenants.is_empty() {
            return Err(FixtureError::missing_input("没有配置任何租户"));
        }

        Ok(tenants)
    }
}

/// 从文件加载租户列表
///
/// 根据扩展名选择解析方式：.yaml/.yml 按 YAML 解析，其余按 JSON 解析。
pub fn load_tenants(path: &Path) -> Result<Vec<TenantDescriptor>> {
    if !path.exists() {
        return Err(FixtureError::missing_input(format!(
            "租户文件不存在: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let parsed = if is_yaml {
        TenantDescriptor::list_from_yaml(&content).map_err(|e| e.to_string())
    } else {
        TenantDescriptor::list_from_json(&content).map_err(|e| e.to_string())
    };

    let tenants = parsed.map_err(|message| FixtureError::TenantFile {
        path: path.to_path_buf(),
        message,
    })?;

    info!(count = tenants.len(), path = %path.display(), "已从文件加载租户");
    Ok(tenants)
}
