//! 核心宏定义
//!
//! 提供统一的宏来减少配置结构体的样板代码

/// 为结构体实现Default trait的宏
///
/// 使用示例:
/// ```ignore
/// struct Insets {
///     top: f32,
///     left: f32,
/// }
///
/// impl_default!(Insets {
///     top: 0.0,
///     left: 0.0,
/// });
/// ```
#[macro_export]
macro_rules! impl_default {
    ($struct_name:ident {
        $($field:ident: $value:expr),* $(,)?
    }) => {
        impl Default for $struct_name {
            fn default() -> Self {
                Self {
                    $($field: $value),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {

    struct SpawnBand {
        top: f32,
        bottom: f32,
    }

    impl_default!(SpawnBand {
        top: -150.0,
        bottom: -50.0,
    });

    #[test]
    fn test_impl_default() {
        let band = SpawnBand::default();
        assert_eq!(band.top, -150.0);
        assert_eq!(band.bottom, -50.0);
    }
}
