//! 压测用户数据生成工具
//!
//! 命令行入口点。加载配置、初始化日志后执行一次完整的生成。

use anyhow::Context;
use clap::Parser;
use fixture_shared::config::AppConfig;
use fixture_shared::error::FixtureError;
use fixture_shared::observability;
use tracing::error;
use user_generator::cli::{Cli, CommandRunner};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load("user-generator").context("加载配置失败")?;
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }
    cli.generate.apply(&mut config);

    observability::init(&config.observability)?;

    let runner = CommandRunner::new(config);
    if let Err(err) = runner.run_generate() {
        match err.downcast_ref::<FixtureError>() {
            Some(cause) => error!(
                code = cause.code(),
                input_error = cause.is_input_error(),
                "数据生成失败: {:#}",
                err
            ),
            None => error!("数据生成失败: {:#}", err),
        }
        return Err(err);
    }

    Ok(())
}
