//! 测试用户清单
//!
//! 每个租户取前 N 个用户导出，供压测脚本作为真实登录凭据使用。

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::tenant::TenantDescriptor;
use super::user::UserRecord;

/// 清单中的单个测试用户
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestUserSample {
    pub device_id: Uuid,
    /// 用户 subject
    pub user_id: Uuid,
    pub email: String,
    pub phone: String,
    pub external_user_id: String,
    pub provider_id: String,
}

impl TestUserSample {
    pub fn from_user(user: &UserRecord, device_id: Uuid) -> Self {
        Self {
            device_id,
            user_id: user.sub,
            email: user.email.clone(),
            phone: user.phone_number.clone(),
            external_user_id: user.external_user_id.clone(),
            provider_id: user.provider_id.clone(),
        }
    }
}

/// 清单中的单个租户条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantManifestEntry {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
    pub users: Vec<TestUserSample>,
}

impl TenantManifestEntry {
    /// 创建空条目，客户端信息缺省时使用默认值
    pub fn for_tenant(tenant: &TenantDescriptor) -> Self {
        Self {
            tenant_id: tenant.tenant_id.clone(),
            client_id: tenant.client_id_or_default().to_string(),
            client_secret: tenant.client_secret_or_default().to_string(),
            users: Vec::new(),
        }
    }
}

/// 测试用户清单，按租户列表顺序排列
pub type TestUserManifest = Vec<TenantManifestEntry>;

#[cfg(test)]
mod tests {
    use super::*;
    use fixture_shared::config::DEFAULT_CLIENT_SECRET;

    #[test]
    fn test_entry_uses_default_secret() {
        let entry = TenantManifestEntry::for_tenant(&TenantDescriptor::new("T1"));
        assert_eq!(entry.client_secret, DEFAULT_CLIENT_SECRET);
        assert!(entry.users.is_empty());
    }

    #[test]
    fn test_entry_json_keys() {
        let tenant = TenantDescriptor::with_client("T1", "c", "s");
        let entry = TenantManifestEntry::for_tenant(&tenant);
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["tenantId"], "T1");
        assert_eq!(value["clientId"], "c");
        assert_eq!(value["clientSecret"], "s");
        assert!(value["users"].as_array().unwrap().is_empty());
    }
}
