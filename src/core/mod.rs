//! 核心模块
//!
//! 包含横切关注点：
//! - `error` - 错误类型定义
//! - `logging` - 日志初始化
//! - `macros` - 默认值宏

pub mod error;
pub mod logging;
pub mod macros;

pub use error::{SnowFxError, SnowFxResult};
pub use logging::{init_logging, LOG_TARGET};
