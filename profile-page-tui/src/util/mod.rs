//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码：
//!
//!     src/util/mod.rs
//!         mod logging;        // 日志初始化（写入文件，不碰终端）
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     初始化终端（terminal.rs）：
//!         · enable_raw_mode()                     // 关闭行缓冲与回显
//!         · EnterAlternateScreen                  // 切换到备用屏幕
//!         · EnableMouseCapture                    // 接收滚轮、移动与点击
//!
//!     恢复终端时按相反顺序撤销，无论主循环成功与否都必须执行，
//!     否则终端会停留在原始模式。
//!
//!
//!     日志（logging.rs）：
//!         · 过滤规则来自 RUST_LOG，缺省为 info
//!         · 写入 <data_local_dir>/profile-page/profile-page.log
//!         · 打不开文件时直接丢弃日志
//!

mod logging;
mod terminal;

pub use logging::init_tracing;
pub use terminal::{init_terminal, restore_terminal, Term};
