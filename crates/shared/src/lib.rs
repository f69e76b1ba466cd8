//! 共享库
//!
//! 包含数据生成工具共用的配置加载、错误类型与日志初始化代码。

pub mod config;
pub mod error;
pub mod observability;
