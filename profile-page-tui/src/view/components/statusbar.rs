//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::view::theme::Styles;

/// 快捷键提示
const HINTS: &[(&str, &str)] = &[
    ("↑↓", "Section"),
    ("Wheel", "Scroll"),
    ("?", "Help"),
    ("q", "Quit"),
];

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    for (i, (key, desc)) in HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在快捷键之后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    // 激活节靠右显示
    let position = active_label(app);
    let used: usize = spans.iter().map(|span| span.content.width()).sum();
    let padding = usize::from(area.width).saturating_sub(used + position.width() + 1);
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(position, Styles::hint_key()));

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// `● id  n/total`
fn active_label(app: &App) -> String {
    let total = app.navigation.graph().len();
    match (
        app.navigation.active_section(),
        app.navigation.active_position(),
    ) {
        (Some(id), Some(position)) => format!("● {id}  {}/{total}", position + 1),
        _ => format!("○  -/{total}"),
    }
}
