//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         pub mod layout;         // 主布局：节内容 + 状态栏
//!         pub mod theme;          // 主题和样式
//!         mod components;         // 提示、状态栏、帮助弹窗
//!         mod pages;              // 个人资料节、内容节
//!
//!
//!     ┌──────────────────────────────────────────┐
//!     │                ▲ Profile                 │ ← 上一节提示（首行）
//!     │                                          │
//!     │                  About                   │ ← 标题行
//!     │                                          │
//!     │    正文（HTML 转成的纯文本行）            │
//!     │                                          │
//!     │                 Work ▼                   │ ← 下一节提示（末行）
//!     ├──────────────────────────────────────────┤
//!     │ ↑↓ Section │ Wheel Scroll │ ?  ● about 2/3│ ← 状态栏
//!     └──────────────────────────────────────────┘
//!

mod components;
pub mod layout;
mod pages;
pub mod theme;

pub use layout::render;
