//! User Generator
//!
//! 为身份平台压测生成用户与认证设备的批量导入数据。
//!
//! # 主要模块
//!
//! - `models`: 租户、用户、设备与测试用户清单的数据结构
//! - `tenant_source`: 租户列表来源（单租户默认值或租户配置文件）
//! - `generators`: 用户数分配策略与逐条生成逻辑
//! - `output`: TSV 行写入、测试用户清单写入与输出文件命名
//! - `cli`: 命令行接口
//!
//! # 使用示例
//!
//! ```rust
//! use fixture_shared::config::GeneratorSettings;
//! use user_generator::generators::{CountPolicy, UserGenerator};
//! use user_generator::models::TenantDescriptor;
//! use user_generator::output::MemorySink;
//!
//! let tenants = vec![TenantDescriptor::new("T1")];
//! let generator = UserGenerator::new(GeneratorSettings::default());
//! let mut sink = MemorySink::default();
//!
//! let output = generator
//!     .generate(&tenants, &CountPolicy::Uniform(3), &mut sink)
//!     .unwrap();
//!
//! assert_eq!(sink.users.len(), 3);
//! assert_eq!(sink.devices.len(), 3);
//! assert_eq!(output.manifest[0].users.len(), 3);
//! ```

pub mod cli;
pub mod generators;
pub mod models;
pub mod output;
pub mod tenant_source;
