//! 生成器模块
//!
//! 提供用户数分配策略和逐租户、逐用户的数据生成。

pub mod count_policy;
pub mod user_generator;

pub use count_policy::CountPolicy;
pub use user_generator::{
    GenerationOutput, GenerationStats, TenantStats, UserGenerator, phone_number,
};
