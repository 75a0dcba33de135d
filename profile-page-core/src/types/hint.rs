//! 导航提示类型定义

use serde::Serialize;

use super::SectionId;

/// 提示方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HintDirection {
    /// 指向上一节
    Prev,
    /// 指向下一节
    Next,
}

impl HintDirection {
    /// CSS 类名
    pub fn class_name(self) -> &'static str {
        match self {
            HintDirection::Prev => "prev",
            HintDirection::Next => "next",
        }
    }
}

/// 导航提示：构建时创建，目标在构建时确定
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavHint {
    pub direction: HintDirection,
    /// 显示文本（目标节标题，以空格拼接）
    pub label: String,
    /// 点击后跳转的节
    pub target: SectionId,
    /// 是否在无操作后自动隐藏
    pub auto_hide: bool,
}

impl NavHint {
    pub fn prev(label: impl Into<String>, target: SectionId) -> Self {
        Self {
            direction: HintDirection::Prev,
            label: label.into(),
            target,
            auto_hide: true,
        }
    }

    pub fn next(label: impl Into<String>, target: SectionId) -> Self {
        Self {
            direction: HintDirection::Next,
            label: label.into(),
            target,
            auto_hide: true,
        }
    }

    /// 常驻提示（不自动隐藏）
    #[must_use]
    pub fn pinned(mut self) -> Self {
        self.auto_hide = false;
        self
    }
}
