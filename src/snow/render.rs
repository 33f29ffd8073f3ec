//! 渲染绑定
//!
//! 把粒子当前的运动值投影为宿主可直接绘制的变换和不透明度。
//! 纯函数，每个渲染帧调用，从不修改粒子状态。

use super::particle::Particle;
use crate::config::{Color, Insets, SnowConfig, TextShadow, Viewport};
use crate::core::LOG_TARGET;
use glam::{Affine2, Vec2};
use std::sync::Arc;

/// 指针事件处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvents {
    /// 图层接收输入
    Auto,
    /// 输入穿透到下层内容
    None,
}

/// 覆盖层布局指令
///
/// 整个粒子层铺满视口、位于宿主内容之上，并且不拦截指针输入。
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayer {
    pub z_index: i32,
    /// 左上角
    pub origin: Vec2,
    /// 宽高
    pub size: Vec2,
    pub pointer_events: PointerEvents,
    /// 整层不透明度
    pub opacity: f32,
}

/// 调色板：所有粒子共享的外观
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub color: Color,
    pub glyph: Arc<str>,
    pub text_shadow: Option<TextShadow>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_config(&SnowConfig::default())
    }
}

impl Palette {
    /// 从配置构造；无法解析的颜色回退为白色
    pub fn from_config(config: &SnowConfig) -> Self {
        let color = Color::from_hex(&config.color).unwrap_or_else(|e| {
            tracing::warn!(target: LOG_TARGET, "Invalid snow color, using white: {}", e);
            Color::WHITE
        });
        let text_shadow = config
            .layer_style
            .as_ref()
            .and_then(|style| style.text_shadow)
            .or_else(|| Some(TextShadow::default()));

        Self {
            color,
            glyph: Arc::from(config.glyph.as_str()),
            text_shadow,
        }
    }
}

/// 单个粒子在某一帧的可视状态
#[derive(Debug, Clone, PartialEq)]
pub struct VisualFrame {
    pub id: usize,
    pub position: Vec2,
    pub rotation_deg: f32,
    pub opacity: f32,
    pub size: f32,
    pub color: Color,
    pub glyph: Arc<str>,
}

impl VisualFrame {
    /// 平移加旋转的二维变换
    pub fn transform(&self) -> Affine2 {
        Affine2::from_angle_translation(self.rotation_deg.to_radians(), self.position)
    }
}

/// 渲染绑定
pub struct RenderBinding;

impl RenderBinding {
    /// 投影单个粒子
    pub fn project(particle: &Particle, palette: &Palette) -> VisualFrame {
        VisualFrame {
            id: particle.id,
            position: Vec2::new(particle.horizontal_position, particle.vertical_position),
            rotation_deg: particle.rotation_degrees,
            opacity: particle.opacity,
            size: particle.size,
            color: palette.color,
            glyph: Arc::clone(&palette.glyph),
        }
    }

    /// 计算覆盖层布局，`layer_style` 中的覆盖项最后生效
    pub fn layer(config: &SnowConfig, viewport: Viewport) -> OverlayLayer {
        let viewport = viewport.normalized();
        let style = config.layer_style.as_ref();
        let inset = style.and_then(|s| s.inset).unwrap_or_default();
        let opacity = style
            .and_then(|s| s.opacity)
            .filter(|o| o.is_finite())
            .map(|o| o.clamp(0.0, 1.0))
            .unwrap_or(1.0);

        OverlayLayer {
            z_index: config.effective_z_index(),
            origin: Vec2::new(inset.left, inset.top),
            size: Self::inner_size(viewport, &inset),
            pointer_events: PointerEvents::None,
            opacity,
        }
    }

    fn inner_size(viewport: Viewport, inset: &Insets) -> Vec2 {
        Vec2::new(
            (viewport.width - inset.left - inset.right).max(0.0),
            (viewport.height - inset.top - inset.bottom).max(0.0),
        )
    }
}
