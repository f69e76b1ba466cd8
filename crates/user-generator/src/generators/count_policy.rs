//! 租户用户数分配策略

/// 租户用户数分配策略
///
/// 第一个租户可以单独指定用户数，便于同一份数据同时覆盖
/// 大规模单租户和多租户两类压测场景。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountPolicy {
    /// 所有租户使用相同的用户数
    Uniform(u64),
    /// 第一个租户使用 `first`，其余租户使用 `rest`
    FirstTenantOverride { first: u64, rest: u64 },
}

impl CountPolicy {
    /// 根据命令行 / 配置参数构造策略
    ///
    /// 覆盖值为 0 时视为未指定。
    pub fn from_options(users_per_tenant: u64, first_tenant_users: Option<u64>) -> Self {
        match first_tenant_users {
            Some(first) if first > 0 => Self::FirstTenantOverride {
                first,
                rest: users_per_tenant,
            },
            _ => Self::Uniform(users_per_tenant),
        }
    }

    /// 第 `tenant_index` 个租户（从 0 开始）的用户数
    pub fn count_for(&self, tenant_index: usize) -> u64 {
        match *self {
            Self::Uniform(count) => count,
            Self::FirstTenantOverride { first, .. } if tenant_index == 0 => first,
            Self::FirstTenantOverride { rest, .. } => rest,
        }
    }

    /// 第一个租户的用户数
    pub fn first_count(&self) -> u64 {
        self.count_for(0)
    }

    /// 其余租户的用户数
    pub fn rest_count(&self) -> u64 {
        self.count_for(1)
    }

    /// 是否为第一个租户单独指定了用户数
    pub fn has_override(&self) -> bool {
        matches!(self, Self::FirstTenantOverride { .. })
    }

    /// 给定租户数时的用户总数
    pub fn total(&self, tenant_count: usize) -> u64 {
        (0..tenant_count).map(|t| self.count_for(t)).sum()
    }
}
