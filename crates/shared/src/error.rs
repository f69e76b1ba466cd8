//! 统一错误处理模块
//!
//! 定义数据生成过程中所有共享的错误类型，使用 thiserror 提供良好的错误信息。
//! 生成任务是一次性的批量准备工作，不存在可重试的错误：任何错误都会中止整个运行。

use std::path::PathBuf;

use thiserror::Error;

/// 数据生成错误类型
#[derive(Debug, Error)]
pub enum FixtureError {
    // ==================== 输入错误 ====================
    #[error("租户输入缺失: {reason}")]
    MissingInput { reason: String },

    #[error("租户文件解析失败: {}: {message}", .path.display())]
    TenantFile { path: PathBuf, message: String },

    // ==================== 输出错误 ====================
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 序列化错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TSV 写入错误: {0}")]
    Csv(#[from] csv::Error),

    // ==================== 配置错误 ====================
    #[error("配置错误: {0}")]
    Config(#[from] config::ConfigError),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, FixtureError>;

impl FixtureError {
    /// 创建租户输入缺失错误
    pub fn missing_input(reason: impl Into<String>) -> Self {
        Self::MissingInput {
            reason: reason.into(),
        }
    }

    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingInput { .. } => "MISSING_INPUT",
            Self::TenantFile { .. } => "TENANT_FILE_INVALID",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::Csv(_) => "TSV_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// 是否为输入类错误
    ///
    /// 输入类错误在生成开始前就会被发现，此时不会写出任何行。
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingInput { .. } | Self::TenantFile { .. } | Self::Config(_)
        )
    }
}
