//! 输出模块
//!
//! 用户行和设备行通过 `FixtureSink` 逐条写出，生成器不持有任何行数据。
//! 测试用户清单在全部租户生成完成后一次性写出。

pub mod manifest;
pub mod naming;
pub mod tsv;

use fixture_shared::error::Result;

use crate::models::{DeviceRecord, UserRecord};

pub use manifest::write_manifest;
pub use naming::{OutputPaths, count_label, default_prefix};
pub use tsv::TsvSink;

/// 行输出目标
///
/// 任何写入错误都会立即返回，生成随之中止。
pub trait FixtureSink {
    /// 写出一行用户数据
    fn write_user(&mut self, user: &UserRecord) -> Result<()>;

    /// 写出一行设备数据
    fn write_device(&mut self, device: &DeviceRecord) -> Result<()>;
}

/// 内存输出目标
///
/// 将所有行保存在内存中，用于测试和基准测试。
#[derive(Debug, Default)]
pub struct MemorySink {
    pub users: Vec<UserRecord>,
    pub devices: Vec<DeviceRecord>,
}

impl FixtureSink for MemorySink {
    fn write_user(&mut self, user: &UserRecord) -> Result<()> {
        self.users.push(user.clone());
        Ok(())
    }

    fn write_device(&mut self, device: &DeviceRecord) -> Result<()> {
        self.devices.push(device.clone());
        Ok(())
    }
}

/// 只计数的输出目标
#[derive(Debug, Default)]
pub struct CountingSink {
    pub users: u64,
    pub devices: u64,
}

impl FixtureSink for CountingSink {
    fn write_user(&mut self, _user: &UserRecord) -> Result<()> {
        self.users += 1;
        Ok(())
    }

    fn write_device(&mut self, _device: &DeviceRecord) -> Result<()> {
        self.devices += 1;
        Ok(())
    }
}
