//! 测试用户清单写入

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use fixture_shared::error::Result;

use crate::models::TestUserManifest;

/// 以两空格缩进写出清单 JSON
pub fn write_manifest_to<W: Write>(writer: W, manifest: &TestUserManifest) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, manifest)?;
    writer.flush()?;
    Ok(())
}

/// 写出清单文件（覆盖已有文件）
pub fn write_manifest(path: &Path, manifest: &TestUserManifest) -> Result<()> {
    let file = File::create(path)?;
    write_manifest_to(file, manifest)
}
