//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的“唯一真相来源”，所有状态变更都通过 Update 层触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod viewport;       // 终端视口（滚动偏移、平滑滚动、交叉检测）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     App {
//!         should_quit: false,
//!         record: ProfileRecord,                          // 个人资料原文
//!         navigation: NavigationController<TerminalViewport> {
//!             graph,                                      // profile → 各内容节
//!             active: Some("profile"),                    // 启动即激活个人资料节
//!             hints,                                      // 每条提示一个隐藏截止时间
//!             viewport: TerminalViewport,
//!         },
//!         section_lines,                                  // 正文预先转成纯文本行
//!         show_help: false,
//!         status_message: None,
//!     }
//!
//!     激活节与提示可见性都由核心库的控制器持有，App 不再复制一份。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、终端视口（TerminalViewport）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     实现核心库的 Viewport trait，代替浏览器的滚动容器：
//!         · scroll_into_view()    设置平滑滚动目标（或立即跳转）
//!         · step()                每次 Tick 向目标推进一步
//!         · scroll_by()           滚轮，吸附到相邻节
//!         · take_crossings()      可见比例向上越过阈值的节，交给控制器激活
//!         · hint_at()             点击行 → 哪一节的哪条提示
//!

mod app;
mod viewport;

pub use app::App;
pub use viewport::TerminalViewport;
