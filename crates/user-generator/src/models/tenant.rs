//! 租户描述

use fixture_shared::config::{DEFAULT_CLIENT_ID, DEFAULT_CLIENT_SECRET};
use serde::{Deserialize, Serialize};

/// 租户描述
///
/// 来自租户配置文件或单租户默认值，加载后不再修改。
/// 配置文件中 clientId / clientSecret 可以缺省，写清单时回退到默认值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantDescriptor {
    pub tenant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

impl TenantDescriptor {
    /// 仅指定租户 ID 创建描述，客户端信息使用默认值
    pub fn new(tenant_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            client_id: None,
            client_secret: None,
        }
    }

    /// 创建带完整客户端信息的描述
    pub fn with_client(
        tenant_id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            client_id: Some(client_id.into()),
            client_secret: Some(client_secret.into()),
        }
    }

    pub fn client_id_or_default(&self) -> &str {
        self.client_id.as_deref().unwrap_or(DEFAULT_CLIENT_ID)
    }

    pub fn client_secret_or_default(&self) -> &str {
        self.client_secret.as_deref().unwrap_or(DEFAULT_CLIENT_SECRET)
    }

    /// 从 JSON 数组解析租户列表
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// 从 YAML 序列解析租户列表
    pub fn list_from_yaml(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}
