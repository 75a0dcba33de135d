//! 可复用的界面组件

pub mod help;
pub mod hint;
pub mod statusbar;
