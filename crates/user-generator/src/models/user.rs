//! 用户模型
//!
//! 一个 `UserRecord` 对应用户表的一行。devices 列以 JSON 文本嵌入，
//! 写入 TSV 时由 csv 写入器做引号转义（引号加倍并整体加引号），保证仍是单个字段。

use serde::{Serialize, Serializer};
use uuid::Uuid;

use super::device::DeviceInfo;

/// 身份验证状态，生成的用户全部视为已完成身份验证
pub const VERIFICATION_STATUS: &str = "IDENTITY_VERIFIED";

/// 用户表的一行
///
/// 字段声明顺序即 TSV 列顺序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub sub: Uuid,
    pub tenant_id: String,
    pub provider_id: String,
    pub external_user_id: String,
    pub name: String,
    pub email: String,
    pub email_verified: bool,
    pub phone_number: String,
    pub phone_verified: bool,
    pub verified_claims_email: String,
    pub verification_status: String,
    #[serde(serialize_with = "serialize_devices")]
    pub devices: Vec<DeviceInfo>,
}

impl UserRecord {
    /// 构造一个已验证邮箱和手机号的用户
    ///
    /// name 与 external_user_id 相同，邮箱同时作为身份验证声明中的邮箱。
    pub fn verified(
        sub: Uuid,
        tenant_id: &str,
        provider_id: &str,
        external_user_id: String,
        email: String,
        phone_number: String,
        device: DeviceInfo,
    ) -> Self {
        Self {
            sub,
            tenant_id: tenant_id.to_string(),
            provider_id: provider_id.to_string(),
            name: external_user_id.clone(),
            external_user_id,
            verified_claims_email: email.clone(),
            email,
            email_verified: true,
            phone_number,
            phone_verified: true,
            verification_status: VERIFICATION_STATUS.to_string(),
            devices: vec![device],
        }
    }
}

/// 解析 devices 列的 JSON 文本
pub fn parse_devices(raw: &str) -> Result<Vec<DeviceInfo>, serde_json::Error> {
    serde_json::from_str(raw)
}

#[allow(clippy::ptr_arg)]
fn serialize_devices<S: Serializer>(devices: &Vec<DeviceInfo>, s: S) -> Result<S::Ok, S::Error> {
    let json = serde_json::to_string(devices).map_err(serde::ser::Error::custom)?;
    s.serialize_str(&json)
}
