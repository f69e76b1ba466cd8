//! 认证设备模型
//!
//! 同一台设备有两种表现形式：
//! - `DeviceInfo`：以 JSON 形式嵌入用户行的 devices 列
//! - `DeviceRecord`：认证设备表的一行扁平数据

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 模拟设备的固定属性
///
/// 压测只关心设备与用户的绑定关系，设备属性全部固定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedDevice {
    pub os: &'static str,
    pub model: &'static str,
    pub platform: &'static str,
    pub app_name: &'static str,
    pub priority: i32,
    pub notification_token: &'static str,
    pub notification_channel: &'static str,
}

impl SimulatedDevice {
    pub const IPHONE: Self = Self {
        os: "iOS 18.5",
        model: "iPhone15",
        platform: "iOS",
        app_name: "Test App",
        priority: 1,
        notification_token: "test token",
        notification_channel: "fcm",
    };
}

impl Default for SimulatedDevice {
    fn default() -> Self {
        Self::IPHONE
    }
}

/// 嵌入用户行的设备信息
///
/// 字段顺序与 JSON 键名与导入端约定一致。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub id: Uuid,
    pub os: String,
    pub model: String,
    pub platform: String,
    pub priority: i32,
    pub notification_token: String,
    pub notification_channel: String,
    pub preferred_for_notification: bool,
}

impl DeviceInfo {
    /// 使用模拟设备属性构造设备信息
    pub fn simulated(id: Uuid, device: &SimulatedDevice) -> Self {
        Self {
            id,
            os: device.os.to_string(),
            model: device.model.to_string(),
            platform: device.platform.to_string(),
            priority: device.priority,
            notification_token: device.notification_token.to_string(),
            notification_channel: device.notification_channel.to_string(),
            preferred_for_notification: true,
        }
    }
}

/// 认证设备表的一行
///
/// 字段声明顺序即 TSV 列顺序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub device_id: Uuid,
    pub tenant_id: String,
    pub user_sub: Uuid,
    pub os: String,
    pub model: String,
    pub platform: String,
    /// 应用版本，固定为空
    pub app_version: String,
    pub app_name: String,
    pub priority: i32,
    /// 附加信息，固定为空数组
    pub extra: String,
    pub notification_token: String,
    pub notification_channel: String,
}

impl DeviceRecord {
    /// 根据嵌入信息构造扁平设备行
    pub fn from_info(
        info: &DeviceInfo,
        tenant_id: &str,
        user_sub: Uuid,
        device: &SimulatedDevice,
    ) -> Self {
        Self {
            device_id: info.id,
            tenant_id: tenant_id.to_string(),
            user_sub,
            os: info.os.clone(),
            model: info.model.clone(),
            platform: info.platform.clone(),
            app_version: String::new(),
            app_name: device.app_name.to_string(),
            priority: info.priority,
            extra: "[]".to_string(),
            notification_token: info.notification_token.clone(),
            notification_channel: info.notification_channel.clone(),
        }
    }
}
