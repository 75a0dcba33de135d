//! 内容节：标题行加正文

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::model::App;
use crate::view::theme::Styles;

use super::body_area;

/// 渲染第 `index` 个内容节
pub fn render(app: &App, index: usize, area: Rect, buf: &mut Buffer) {
    let Some(section) = app.record.sections.get(index) else {
        return;
    };

    let title: Vec<Line> = section
        .title
        .iter()
        .map(|line| Line::styled(line.as_str(), Styles::title()))
        .collect();
    let title_height = u16::try_from(title.len()).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(title_height), // 标题
            Constraint::Length(1),            // 空行
            Constraint::Min(0),               // 正文
        ])
        .split(body_area(area));

    Paragraph::new(title)
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

    let body: Vec<Line> = app
        .section_lines
        .get(index)
        .map(|lines| lines.iter().map(|line| Line::from(line.as_str())).collect())
        .unwrap_or_default();

    Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .render(chunks[2], buf);
}
