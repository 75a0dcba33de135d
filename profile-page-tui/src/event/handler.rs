//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use profile_page_core::NavKey;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, NavigationMessage, PointerMessage};
use crate::model::App;

/// 每格滚轮对应的行数
const WHEEL_ROWS: i32 = 3;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event),
        Event::Resize(width, height) => AppMessage::Resize { width, height },
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if key.code == KeyCode::Char('?') {
        return AppMessage::ToggleHelp;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return if app.show_help {
            AppMessage::CloseHelp
        } else {
            AppMessage::ClearStatus
        };
    }

    let nav_key = if DefaultKeymap::NEXT.matches(&key) || DefaultKeymap::VIM_NEXT.matches(&key) {
        NavKey::ArrowDown
    } else if DefaultKeymap::NEXT_PAGE.matches(&key) {
        NavKey::PageDown
    } else if DefaultKeymap::PREV.matches(&key) || DefaultKeymap::VIM_PREV.matches(&key) {
        NavKey::ArrowUp
    } else if DefaultKeymap::PREV_PAGE.matches(&key) {
        NavKey::PageUp
    } else {
        return AppMessage::Noop;
    };

    AppMessage::Navigation(NavigationMessage::Key(nav_key))
}

/// 处理鼠标事件
fn handle_mouse_event(mouse: MouseEvent) -> AppMessage {
    let pointer = match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => PointerMessage::Moved,
        MouseEventKind::ScrollDown => PointerMessage::Wheel(WHEEL_ROWS),
        MouseEventKind::ScrollUp => PointerMessage::Wheel(-WHEEL_ROWS),
        MouseEventKind::Down(MouseButton::Left) => PointerMessage::Click {
            column: mouse.column,
            row: mouse.row,
        },
        _ => return AppMessage::Noop,
    };
    AppMessage::Pointer(pointer)
}
