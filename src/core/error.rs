//! 统一错误处理模块
//!
//! 粒子层本身没有错误类型：越界参数会被归一化，过期的周期完成通知会被静默丢弃。
//! 错误只出现在外层表面（配置文件、颜色字符串）。
//!
//! `SnowFxError` 聚合这些外层错误，供演示程序和宿主统一处理。

use crate::config::style::ColorParseError;
use crate::config::ConfigError;
use thiserror::Error;

/// 顶层错误类型
#[derive(Error, Debug)]
pub enum SnowFxError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Color error: {0}")]
    Color(#[from] ColorParseError),
}

pub type SnowFxResult<T> = Result<T, SnowFxError>;
