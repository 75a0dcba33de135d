//! 测试辅助模块
//!
//! 提供记录型视口和便捷的测试数据工厂方法。

use crate::navigation::{ScrollBehavior, Viewport};
use crate::types::{Account, ContentSection, ProfileRecord, SectionId};

// ===== RecordingViewport =====

/// 记录每次滚动请求的视口
#[derive(Debug, Default)]
pub struct RecordingViewport {
    pub calls: Vec<(SectionId, usize, ScrollBehavior)>,
}

impl Viewport for RecordingViewport {
    fn scroll_into_view(&mut self, id: &SectionId, position: usize, behavior: ScrollBehavior) {
        self.calls.push((id.clone(), position, behavior));
    }
}

// ===== 测试数据 =====

pub fn record_with_sections(sections: Vec<ContentSection>) -> ProfileRecord {
    ProfileRecord {
        hash: "0123abcd".to_string(),
        display_name: "Jane Doe".to_string(),
        description: "Builds things".to_string(),
        accounts: vec![
            Account {
                name: "GitHub".to_string(),
                url: "https://github.com/jane".to_string(),
                icon: Some("github.svg".to_string()),
                icon_url: None,
            },
            Account {
                name: "Mastodon".to_string(),
                url: "https://example.social/@jane".to_string(),
                icon: None,
                icon_url: Some("https://cdn.example/mastodon.png".to_string()),
            },
        ],
        sections,
    }
}

/// `[A, B]` 两节记录
pub fn two_section_record() -> ProfileRecord {
    record_with_sections(vec![
        ContentSection::new(&["A"], "x"),
        ContentSection::new(&["B"], "y"),
    ])
}
