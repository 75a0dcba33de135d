//! 快捷键帮助弹窗

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::view::theme::{colors, ThemeColors};

const KEYS: &[(&str, &str)] = &[
    ("↓ j PgDn", "Next section"),
    ("↑ k PgUp", "Previous section"),
    ("Wheel", "Scroll to neighbour"),
    ("Click ▲▼", "Follow hint"),
    ("Esc", "Close help"),
    ("q", "Quit"),
];

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn frame_block(c: &ThemeColors) -> Block<'static> {
    Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.highlight))
        .style(Style::default().bg(c.bg).fg(c.fg))
}

fn key_lines(c: &ThemeColors) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(
        "Navigation",
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
    )];
    for (key, desc) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {key:<10}"),
                Style::default().fg(c.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(*desc, Style::default().fg(c.fg)),
        ]));
    }
    lines
}

/// 渲染帮助弹窗
pub fn render(frame: &mut Frame) {
    let c = colors();
    let height = u16::try_from(KEYS.len()).unwrap_or(u16::MAX) + 4;
    let area = centered_rect(40, height, frame.area());
    frame.render_widget(Clear, area);

    let block = frame_block(&c);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(key_lines(&c)), inner);
}
