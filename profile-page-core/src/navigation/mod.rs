//! 导航模块
//!
//! - `viewport`: 前端需要实现的滚动接口
//! - `input`: 与前端无关的输入事件（按键、交叉观察）
//! - `hints`: 提示可见性与自动隐藏计时
//! - `controller`: 当前激活节的唯一持有者，所有导航都经过它

mod controller;
mod hints;
mod input;
mod viewport;

pub use controller::{dispatch, NavigationController};
pub use hints::{HintKey, HintTimers};
pub use input::{IntersectionEntry, KeyOutcome, NavKey};
pub use viewport::{ScrollBehavior, Viewport};
