//! 存活标记
//!
//! `LivenessFlag` 只由生命周期管理器持有，是唯一能撤销存活状态的一端；
//! 编排只拿到只读的 `LivenessToken`，在重新排期时检查它。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 存活标记的持有端
#[derive(Debug)]
pub struct LivenessFlag {
    live: Arc<AtomicBool>,
}

/// 存活标记的只读端
#[derive(Debug, Clone)]
pub struct LivenessToken {
    live: Arc<AtomicBool>,
}

impl LivenessFlag {
    pub fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn token(&self) -> LivenessToken {
        LivenessToken {
            live: Arc::clone(&self.live),
        }
    }

    /// 撤销存活状态，返回撤销前是否存活
    pub fn revoke(&self) -> bool {
        self.live.swap(false, Ordering::AcqRel)
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}

impl Default for LivenessFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl LivenessToken {
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}
