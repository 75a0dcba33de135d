//! 节导航提示
//!
//! 上一节提示画在节的首行，下一节提示画在末行；隐藏的提示不绘制。

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Widget},
};

use profile_page_core::{HintDirection, NavHint, SectionNode};

use crate::model::App;
use crate::view::theme::Styles;

/// 渲染该节可见的提示
pub fn render(app: &App, node: &SectionNode, area: Rect, buf: &mut Buffer) {
    if area.height == 0 {
        return;
    }

    for hint in &node.hints {
        if !app.navigation.is_hint_visible(&node.id, hint.direction) {
            continue;
        }

        let row = match hint.direction {
            // 只有一行时让位给下一节提示
            HintDirection::Prev if area.height < 2 => continue,
            HintDirection::Prev => area.y,
            HintDirection::Next => area.y + area.height - 1,
        };

        Paragraph::new(label(hint))
            .style(Styles::nav_hint())
            .alignment(Alignment::Center)
            .render(Rect::new(area.x, row, area.width, 1), buf);
    }
}

/// 箭头在上一节提示的前面、下一节提示的后面
fn label(hint: &NavHint) -> String {
    match (hint.direction, hint.label.is_empty()) {
        (HintDirection::Prev, true) => "▲".to_string(),
        (HintDirection::Prev, false) => format!("▲ {}", hint.label),
        (HintDirection::Next, true) => "▼".to_string(),
        (HintDirection::Next, false) => format!("{} ▼", hint.label),
    }
}

#[cfg(test)]
mod tests {
    use profile_page_core::SectionId;

    use super::*;

    #[test]
    fn arrows_follow_direction() {
        let prev = NavHint::prev("Profile", SectionId::profile());
        let next = NavHint::next("Work", SectionId::new("work"));
        let pinned = NavHint::next("", SectionId::new("about")).pinned();

        assert_eq!(label(&prev), "▲ Profile");
        assert_eq!(label(&next), "Work ▼");
        assert_eq!(label(&pinned), "▼");
    }
}
