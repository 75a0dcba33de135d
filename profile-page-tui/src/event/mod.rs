//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/鼠标等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     接收以下 Event 类型：
//!         Event::Key(KeyEvent)            // 只处理 Press
//!             q / Ctrl+C          → AppMessage::Quit
//!             ?                   → AppMessage::ToggleHelp
//!             Esc                 → CloseHelp / ClearStatus
//!             ↓ j / PageDown      → NavigationMessage::Key(ArrowDown / PageDown)
//!             ↑ k / PageUp        → NavigationMessage::Key(ArrowUp / PageUp)
//!
//!         Event::Mouse(MouseEvent)
//!             移动 / 拖动         → PointerMessage::Moved
//!             滚轮                → PointerMessage::Wheel(±3)
//!             左键按下            → PointerMessage::Click { column, row }
//!
//!         Event::Resize(w, h)     → AppMessage::Resize
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
