//! 输出文件命名
//!
//! 未指定前缀时根据租户数和用户数自动生成，例如：
//! - `single_tenant_1m`
//! - `multi_tenant_10x100k`
//! - `multi_tenant_1m+9x100k`

use std::path::{Path, PathBuf};

use crate::generators::CountPolicy;

/// 用户数标签：不小于一百万时以 m 为单位，否则以 k 为单位（向下取整）
pub fn count_label(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{}m", count / 1_000_000)
    } else {
        format!("{}k", count / 1_000)
    }
}

/// 每租户用户数标签，固定以 k 为单位（向下取整）
fn thousands_label(count: u64) -> String {
    format!("{}k", count / 1_000)
}

/// 自动生成输出前缀
///
/// 只有单租户总数和第一个租户的覆盖值使用 [`count_label`]，
/// 多租户的每租户用户数始终以 k 为单位，与导入脚本约定的文件名一致。
pub fn default_prefix(multi_tenant: bool, tenant_count: usize, policy: &CountPolicy) -> String {
    if !multi_tenant {
        return format!("single_tenant_{}", count_label(policy.first_count()));
    }

    match policy {
        CountPolicy::Uniform(users) => {
            format!("multi_tenant_{}x{}", tenant_count, thousands_label(*users))
        }
        CountPolicy::FirstTenantOverride { first, rest } => format!(
            "multi_tenant_{}+{}x{}",
            count_label(*first),
            tenant_count.saturating_sub(1),
            thousands_label(*rest)
        ),
    }
}

/// 一次生成对应的三个输出文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub prefix: String,
    pub users: PathBuf,
    pub devices: PathBuf,
    pub test_users: PathBuf,
}

impl OutputPaths {
    pub fn new(dir: &Path, prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            users: dir.join(format!("{}_users.tsv", prefix)),
            devices: dir.join(format!("{}_devices.tsv", prefix)),
            test_users: dir.join(format!("{}_test_users.json", prefix)),
        }
    }
}
