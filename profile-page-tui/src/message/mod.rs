//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event ──▶ Update 之间的桥梁，
//! 把形形色色的终端事件翻译成 Update 能够看懂的 Message。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod navigation;     // 键盘导航子消息
//!         mod pointer;        // 鼠标子消息
//!
//!
//!     主消息：
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用
//!             Navigation(NavigationMessage),      // ↓ / PageDown / ↑ / PageUp
//!             Pointer(PointerMessage),            // 移动、滚轮、点击
//!             Tick,                               // 时钟
//!             Resize { width, height },           // 终端尺寸变化
//!             ToggleHelp,                         // ? 帮助
//!             CloseHelp,                          // Esc
//!             ClearStatus,                        // 清除状态栏消息
//!             Noop,                               // 无操作，用于代替 Option::None
//!         }
//!
//!     消息本身不携带时间；Update 层在处理时读取当前时刻，
//!     测试则通过 update_at() 传入固定时刻。
//!

mod app;
mod navigation;
mod pointer;

pub use app::AppMessage;
pub use navigation::NavigationMessage;
pub use pointer::PointerMessage;
