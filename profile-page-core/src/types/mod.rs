//! 类型定义模块

mod hint;
mod profile;
mod section_id;

pub use hint::{HintDirection, NavHint};
pub use profile::{Account, ContentSection, ProfileRecord};
pub use section_id::SectionId;
