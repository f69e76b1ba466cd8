//! CLI 模块
//!
//! 提供命令行接口。命令行参数覆盖配置文件与环境变量中的同名配置。
//!
//! # 使用示例
//!
//! ```bash
//! # 单租户 100 万用户（默认租户 ID）
//! generate-users --users 1000000
//!
//! # 多租户，每个租户 10 万用户
//! generate-users --users 100000 --tenants-file performance-test-tenant.json
//!
//! # 第一个租户 100 万，其余租户各 10 万
//! generate-users --users 100000 --first-tenant-users 1000000 \
//!     --tenants-file performance-test-tenant.json
//! ```

pub mod commands;
pub mod runner;

pub use commands::{Cli, GenerateArgs};
pub use runner::{CommandRunner, GenerationReport};
