/// 统一配置系统
///
/// 提供TOML/JSON配置文件、环境变量覆盖
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::LOG_TARGET;
use crate::impl_default;

pub mod snow;
pub mod style;

pub use snow::{RebuildKey, SnowConfig, Viewport};
pub use style::{Color, ColorParseError, Insets, LayerStyle, TextShadow};

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 验证错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 应用主配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 雪花效果配置
    #[serde(default)]
    pub snow: SnowConfig,

    /// 视口尺寸
    #[serde(default)]
    pub viewport: Viewport,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            snow: SnowConfig::default(),
            viewport: Viewport::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 从JSON文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_json_str(&content)
    }

    /// 从JSON字符串解析配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 保存为TOML文件
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 保存为JSON文件
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 从环境变量覆盖配置
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// 用任意键值来源覆盖配置，无法解析的值被忽略
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        fn parse_into<T: std::str::FromStr>(raw: Option<String>, slot: &mut T) {
            if let Some(value) = raw.and_then(|v| v.trim().parse().ok()) {
                *slot = value;
            }
        }

        parse_into(lookup("SNOWFX_COUNT"), &mut self.snow.count);
        parse_into(lookup("SNOWFX_MIN_SIZE"), &mut self.snow.min_size);
        parse_into(lookup("SNOWFX_MAX_SIZE"), &mut self.snow.max_size);
        parse_into(lookup("SNOWFX_MIN_SPEED"), &mut self.snow.min_speed);
        parse_into(lookup("SNOWFX_MAX_SPEED"), &mut self.snow.max_speed);
        parse_into(lookup("SNOWFX_VIEWPORT_WIDTH"), &mut self.viewport.width);
        parse_into(lookup("SNOWFX_VIEWPORT_HEIGHT"), &mut self.viewport.height);

        if let Some(color) = lookup("SNOWFX_COLOR") {
            self.snow.color = color;
        }
        if let Some(glyph) = lookup("SNOWFX_GLYPH") {
            self.snow.glyph = glyph;
        }
        if let Some(level) = lookup("SNOWFX_LOG_LEVEL").and_then(|v| LogLevel::parse(&v)) {
            self.logging.level = level;
        }
    }

    /// 验证配置
    ///
    /// 数值上下界不会导致失败，只检查颜色和字符这类表层输入。
    pub fn validate(&self) -> ConfigResult<()> {
        Color::from_hex(&self.snow.color)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        if self.snow.glyph.is_empty() {
            return Err(ConfigError::ValidationError("glyph must not be empty".into()));
        }
        if let Some(opacity) = self.snow.layer_style.as_ref().and_then(|s| s.opacity) {
            if !opacity.is_finite() {
                return Err(ConfigError::ValidationError(
                    "layerStyle.opacity must be finite".into(),
                ));
            }
        }
        Ok(())
    }

    /// 自动查找并加载配置文件
    ///
    /// 按以下顺序查找：
    /// 1. ./snowfx.toml
    /// 2. ./snowfx.json
    /// 3. ~/.config/snowfx/config.toml
    /// 4. 使用默认配置
    pub fn load_or_default() -> Self {
        if let Ok(config) = Self::from_toml_file("snowfx.toml") {
            tracing::info!(target: LOG_TARGET, "Loaded config from snowfx.toml");
            return config;
        }

        if let Ok(config) = Self::from_json_file("snowfx.json") {
            tracing::info!(target: LOG_TARGET, "Loaded config from snowfx.json");
            return config;
        }

        if let Some(home) = env::var_os("HOME") {
            let config_path = PathBuf::from(home)
                .join(".config")
                .join("snowfx")
                .join("config.toml");

            if let Ok(config) = Self::from_toml_file(&config_path) {
                tracing::info!(target: LOG_TARGET, "Loaded config from {:?}", config_path);
                return config;
            }
        }

        tracing::info!(target: LOG_TARGET, "Using default configuration");
        Self::default()
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: LogLevel,

    /// 是否输出到控制台
    pub log_to_console: bool,
}

impl_default!(LoggingConfig {
    level: LogLevel::Info,
    log_to_console: true,
});

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// 跟踪
    Trace,
    /// 调试
    Debug,
    /// 信息
    Info,
    /// 警告
    Warn,
    /// 错误
    Error,
}

impl LogLevel {
    /// 不区分大小写地解析级别名称
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}
