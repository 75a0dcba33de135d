//! UI 树
//!
//! 把导航图物化为元素树，并提供 HTML 序列化与纯文本转换。

mod builder;
mod document;
mod element;
mod text;

pub use builder::{PageBuilder, ARROW_SVG, DEFAULT_AVATAR_SIZE};
pub use document::{render_document, DocumentOptions, ROBOTS_TXT};
pub use element::{Element, Node};
pub use text::markup_to_lines;
