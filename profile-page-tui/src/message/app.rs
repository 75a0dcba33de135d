use super::{NavigationMessage, PointerMessage};

/// 主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 键盘导航
    Navigation(NavigationMessage),

    /// 鼠标
    Pointer(PointerMessage),

    /// 时钟：推进平滑滚动、到期的提示隐藏
    Tick,

    /// 终端尺寸变化
    Resize { width: u16, height: u16 },

    /// 显示/隐藏快捷键帮助
    ToggleHelp,

    /// 关闭帮助（Esc）
    CloseHelp,

    /// 清除状态栏消息
    ClearStatus,

    /// 无操作
    Noop,
}
