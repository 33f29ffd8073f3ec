//! 日志初始化
//!
//! 基于 `tracing` + `tracing-subscriber`。`RUST_LOG` 环境变量优先，
//! 否则使用配置中的日志级别。

use crate::config::{LogLevel, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// 日志目标名称，所有模块统一使用
pub const LOG_TARGET: &str = "snowfx";

impl LogLevel {
    /// 转换为 `EnvFilter` 指令字符串
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// 根据配置构造过滤器
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.as_directive()))
}

/// 初始化日志系统
///
/// 重复调用是安全的，第二次调用会被忽略。返回本次是否真正安装了订阅器。
pub fn init_logging(config: &LoggingConfig) -> bool {
    if !config.log_to_console {
        return false;
    }

    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(target: LOG_TARGET, level = config.level.as_directive(), "Logging initialized");
    }
    installed
}
