//! 图层样式配置
//!
//! 颜色解析、文字阴影和覆盖层样式覆盖项。

use crate::impl_default;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 颜色解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color must start with '#': {0}")]
    MissingHash(String),
    #[error("color must have 3, 6 or 8 hex digits: {0}")]
    InvalidLength(String),
    #[error("invalid hex digit in color: {0}")]
    InvalidDigit(String),
}

/// RGBA 颜色，分量范围 0.0 - 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// 解析 `#RGB`、`#RRGGBB` 或 `#RRGGBBAA`
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(input.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(input.to_string()));
        }

        let channel = |s: &str| -> Result<f32, ColorParseError> {
            u8::from_str_radix(s, 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| ColorParseError::InvalidDigit(input.to_string()))
        };

        match digits.len() {
            3 => {
                // #RGB 每位扩展为两位
                let mut parts = [0.0f32; 3];
                for (i, c) in digits.chars().enumerate() {
                    let pair: String = [c, c].iter().collect();
                    parts[i] = channel(&pair)?;
                }
                Ok(Self::rgba(parts[0], parts[1], parts[2], 1.0))
            }
            6 => Ok(Self::rgba(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
                1.0,
            )),
            8 => Ok(Self::rgba(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
                channel(&digits[6..8])?,
            )),
            _ => Err(ColorParseError::InvalidLength(input.to_string())),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// 文字阴影
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextShadow {
    pub color: Color,
    pub offset: [f32; 2],
    pub radius: f32,
}

impl_default!(TextShadow {
    color: Color::rgba(0.0, 0.0, 0.0, 0.3),
    offset: [1.0, 1.0],
    radius: 2.0,
});

/// 覆盖层边距（相对视口四边）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub top: f32,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
}

impl_default!(Insets {
    top: 0.0,
    left: 0.0,
    right: 0.0,
    bottom: 0.0,
});

/// 覆盖层样式覆盖项
///
/// 在默认样式之后应用，未设置的字段保持默认。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayerStyle {
    /// 整体不透明度乘数 (0.0 - 1.0)
    pub opacity: Option<f32>,
    /// 覆盖 `zIndex`
    pub z_index: Option<i32>,
    /// 覆盖默认文字阴影
    pub text_shadow: Option<TextShadow>,
    /// 覆盖层边距
    pub inset: Option<Insets>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit() {
        let c = Color::from_hex("#87CEEB").unwrap();
        assert!((c.r - 0x87 as f32 / 255.0).abs() < 1e-6);
        assert!((c.g - 0xCE as f32 / 255.0).abs() < 1e-6);
        assert!((c.b - 0xEB as f32 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_parse_short_and_alpha() {
        assert_eq!(Color::from_hex("#FFF").unwrap(), Color::WHITE);
        let c = Color::from_hex("#00000080").unwrap();
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Color::from_hex("FFFFFF"),
            Err(ColorParseError::MissingHash(_))
        ));
        assert!(matches!(
            Color::from_hex("#FFFF"),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            Color::from_hex("#GGGGGG"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_default_shadow() {
        let shadow = TextShadow::default();
        assert_eq!(shadow.offset, [1.0, 1.0]);
        assert_eq!(shadow.radius, 2.0);
        assert!((shadow.color.a - 0.3).abs() < 1e-6);
    }
}
