//! 雪花效果配置
//!
//! 数值参数从不报错：颠倒的上下界会被交换，非法值回退到默认值。

use super::style::LayerStyle;
use crate::impl_default;
use serde::{Deserialize, Serialize};

/// 默认雪花数量
pub const DEFAULT_COUNT: i32 = 50;
/// 默认尺寸范围 (px)
pub const DEFAULT_MIN_SIZE: f32 = 5.0;
pub const DEFAULT_MAX_SIZE: f32 = 15.0;
/// 默认下落周期范围 (ms)
pub const DEFAULT_MIN_SPEED: f32 = 8000.0;
pub const DEFAULT_MAX_SPEED: f32 = 15000.0;
/// 默认颜色
pub const DEFAULT_COLOR: &str = "#FFFFFF";
/// 默认雪花字符
pub const DEFAULT_GLYPH: &str = "❄";
/// 默认层级
pub const DEFAULT_Z_INDEX: i32 = 1000;

/// 最短周期 (ms)，避免零时长周期在一帧内无限重启
pub const MIN_CYCLE_MS: f32 = 1.0;

/// 雪花效果配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnowConfig {
    /// 雪花数量，`<= 0` 表示空粒子群
    pub count: i32,
    /// 最小尺寸 (px)
    pub min_size: f32,
    /// 最大尺寸 (px)
    pub max_size: f32,
    /// 最短下落周期 (ms)
    pub min_speed: f32,
    /// 最长下落周期 (ms)
    pub max_speed: f32,
    /// 雪花颜色，`#RRGGBB`
    pub color: String,
    /// 雪花字符
    pub glyph: String,
    /// 覆盖层层级
    pub z_index: i32,
    /// 首个周期是否随机延迟启动
    pub stagger_start: bool,
    /// 额外的图层样式覆盖
    pub layer_style: Option<LayerStyle>,
}

impl_default!(SnowConfig {
    count: DEFAULT_COUNT,
    min_size: DEFAULT_MIN_SIZE,
    max_size: DEFAULT_MAX_SIZE,
    min_speed: DEFAULT_MIN_SPEED,
    max_speed: DEFAULT_MAX_SPEED,
    color: DEFAULT_COLOR.to_string(),
    glyph: DEFAULT_GLYPH.to_string(),
    layer_style: None,
    z_index: DEFAULT_Z_INDEX,
    stagger_start: true,
});

/// 决定是否需要重建粒子群的参数集合
///
/// 颜色、字符和样式只影响渲染，不在其中。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RebuildKey {
    pub count: i32,
    pub min_size: f32,
    pub max_size: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub stagger_start: bool,
}

impl SnowConfig {
    /// 实际生成的粒子数量
    pub fn particle_count(&self) -> usize {
        self.count.max(0) as usize
    }

    /// 归一化后的尺寸范围 `(min, max)`
    pub fn size_range(&self) -> (f32, f32) {
        let (lo, hi) = ordered(
            finite_or(self.min_size, DEFAULT_MIN_SIZE),
            finite_or(self.max_size, DEFAULT_MAX_SIZE),
        );
        (lo.max(0.0), hi.max(0.0))
    }

    /// 归一化后的周期范围 `(min, max)`，单位毫秒
    pub fn speed_range(&self) -> (f32, f32) {
        let (lo, hi) = ordered(
            finite_or(self.min_speed, DEFAULT_MIN_SPEED),
            finite_or(self.max_speed, DEFAULT_MAX_SPEED),
        );
        (lo.max(MIN_CYCLE_MS), hi.max(MIN_CYCLE_MS))
    }

    /// 返回数值参数已归一化的副本
    pub fn normalized(&self) -> Self {
        let (min_size, max_size) = self.size_range();
        let (min_speed, max_speed) = self.speed_range();
        Self {
            count: self.count.max(0),
            min_size,
            max_size,
            min_speed,
            max_speed,
            ..self.clone()
        }
    }

    pub fn rebuild_key(&self) -> RebuildKey {
        let normalized = self.normalized();
        RebuildKey {
            count: normalized.count,
            min_size: normalized.min_size,
            max_size: normalized.max_size,
            min_speed: normalized.min_speed,
            max_speed: normalized.max_speed,
            stagger_start: normalized.stagger_start,
        }
    }

    /// 实际生效的层级，`layer_style.z_index` 优先
    pub fn effective_z_index(&self) -> i32 {
        self.layer_style
            .as_ref()
            .and_then(|style| style.z_index)
            .unwrap_or(self.z_index)
    }
}

/// 视口尺寸（布局单位）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl_default!(Viewport {
    width: 400.0,
    height: 800.0,
});

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }.normalized()
    }

    /// 负值或非有限值归零，零尺寸视口是合法的退化情况
    pub fn normalized(self) -> Self {
        let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            width: clean(self.width),
            height: clean(self.height),
        }
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
