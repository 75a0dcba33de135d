//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 节导航
    pub const NEXT: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const NEXT_PAGE: KeyBinding = KeyBinding::key(KeyCode::PageDown);
    pub const PREV: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const PREV_PAGE: KeyBinding = KeyBinding::key(KeyCode::PageUp);
    pub const VIM_NEXT: KeyBinding = KeyBinding::key(KeyCode::Char('j'));
    pub const VIM_PREV: KeyBinding = KeyBinding::key(KeyCode::Char('k'));
}
