//! 导航配置

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// 提示自动隐藏的默认延迟（毫秒）
pub const DEFAULT_HINT_HIDE_DELAY_MS: u64 = 5000;

/// 节可见面积超过该比例时视为进入视口
pub const DEFAULT_INTERSECTION_THRESHOLD: f32 = 0.4;

/// 导航控制器配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    /// 提示自动隐藏延迟（毫秒）
    pub hint_hide_delay_ms: u64,
    /// 激活阈值（可见面积比例，0.0 ~ 1.0）
    pub intersection_threshold: f32,
}

impl NavigationSettings {
    pub fn hint_hide_delay(&self) -> Duration {
        Duration::from_millis(self.hint_hide_delay_ms)
    }

    /// 将阈值限制在 [0, 1] 内
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if !self.intersection_threshold.is_finite() {
            self.intersection_threshold = DEFAULT_INTERSECTION_THRESHOLD;
        }
        self.intersection_threshold = self.intersection_threshold.clamp(0.0, 1.0);
        self
    }
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            hint_hide_delay_ms: DEFAULT_HINT_HIDE_DELAY_MS,
            intersection_threshold: DEFAULT_INTERSECTION_THRESHOLD,
        }
    }
}
