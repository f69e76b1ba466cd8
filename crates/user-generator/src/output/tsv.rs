//! TSV 行写入
//!
//! 使用 csv 写入器（制表符分隔、无表头、`\n` 行尾）。
//! 只有含引号、制表符或换行的字段会被加引号，字段内的引号加倍，
//! 因此嵌入 JSON 的 devices 列仍是单个字段，其余列原样输出。

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use fixture_shared::error::Result;

use super::FixtureSink;
use crate::models::{DeviceRecord, UserRecord};

/// 创建 TSV 写入器
fn tsv_writer<W: Write>(inner: W) -> Writer<W> {
    WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(inner)
}

/// 写出用户 TSV 与设备 TSV 的输出目标
pub struct TsvSink<W: Write> {
    users: Writer<W>,
    devices: Writer<W>,
}

impl<W: Write> TsvSink<W> {
    /// 基于任意写入目标创建
    pub fn new(users: W, devices: W) -> Self {
        Self {
            users: tsv_writer(users),
            devices: tsv_writer(devices),
        }
    }

    /// 刷新缓冲区
    pub fn flush(&mut self) -> Result<()> {
        self.users.flush()?;
        self.devices.flush()?;
        Ok(())
    }

    /// 刷新并取回底层写入目标
    pub fn into_inner(self) -> Result<(W, W)> {
        let users = self.users.into_inner().map_err(|e| e.into_error())?;
        let devices = self.devices.into_inner().map_err(|e| e.into_error())?;
        Ok((users, devices))
    }
}

impl TsvSink<File> {
    /// 创建（覆盖）两个输出文件
    pub fn create(users_path: &Path, devices_path: &Path) -> Result<Self> {
        let users = File::create(users_path)?;
        let devices = File::create(devices_path)?;
        Ok(Self::new(users, devices))
    }
}

impl<W: Write> FixtureSink for TsvSink<W> {
    fn write_user(&mut self, user: &UserRecord) -> Result<()> {
        self.users.serialize(user)?;
        Ok(())
    }

    fn write_device(&mut self, device: &DeviceRecord) -> Result<()> {
        self.devices.serialize(device)?;
        Ok(())
    }
}
