//! 个人资料节：头像地址、名字、简介和社交账号

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::model::App;
use crate::view::theme::Styles;

use super::body_area;

/// 渲染个人资料节
pub fn render(app: &App, area: Rect, buf: &mut Buffer) {
    let record = &app.record;

    let mut lines = vec![
        Line::styled(record.avatar_url(app.avatar_size), Styles::muted()),
        Line::from(""),
        Line::styled(record.display_name.as_str(), Styles::title()),
        Line::from(record.description.as_str()),
    ];

    if !record.accounts.is_empty() {
        lines.push(Line::from(""));
        for account in &record.accounts {
            lines.push(Line::from(vec![
                Span::styled(account.name.as_str(), Styles::title()),
                Span::raw("  "),
                Span::styled(account.url.as_str(), Styles::link()),
            ]));
        }
    }

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let [block] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(body_area(area));

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(block, buf);
}
