//! 与前端无关的输入事件

use crate::types::SectionId;

/// 导航相关按键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    PageDown,
    ArrowUp,
    PageUp,
    /// 其他按键（不处理）
    Other,
}

/// 按键处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// 已处理，前端应阻止默认滚动行为
    PreventDefault,
    /// 未处理，交给前端默认行为
    Ignored,
}

impl KeyOutcome {
    pub fn is_handled(self) -> bool {
        matches!(self, KeyOutcome::PreventDefault)
    }
}

/// 交叉观察事件：某节在视口中的可见比例
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub target: SectionId,
    /// 可见面积比例（0.0 ~ 1.0）
    pub ratio: f32,
}

impl IntersectionEntry {
    pub fn new(target: SectionId, ratio: f32) -> Self {
        Self { target, ratio }
    }

    /// 可见比例超过阈值
    pub fn is_intersecting(&self, threshold: f32) -> bool {
        self.ratio > threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersecting_requires_more_than_threshold() {
        let at = IntersectionEntry::new(SectionId::new("a"), 0.4);
        let above = IntersectionEntry::new(SectionId::new("a"), 0.41);
        assert!(!at.is_intersecting(0.4));
        assert!(above.is_intersecting(0.4));
    }
}
