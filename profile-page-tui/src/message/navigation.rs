use profile_page_core::NavKey;

/// 键盘导航消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    /// ↓ / PageDown / ↑ / PageUp
    Key(NavKey),
}
