//! 数据模型
//!
//! 租户描述、用户行、设备行以及测试用户清单。
//! 行结构体的字段顺序即 TSV 列顺序，不可随意调整。

pub mod device;
pub mod sample;
pub mod tenant;
pub mod user;

pub use device::{DeviceInfo, DeviceRecord, SimulatedDevice};
pub use sample::{TenantManifestEntry, TestUserManifest, TestUserSample};
pub use tenant::TenantDescriptor;
pub use user::{UserRecord, VERIFICATION_STATUS, parse_devices};
