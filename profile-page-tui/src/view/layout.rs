//! 主布局渲染
//!
//! 每节先渲染到与一屏等高的离屏缓冲区，再按滚动偏移把可见的行
//! 拷贝到终端。平滑滚动途中，相邻两节会各露出一部分。

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use profile_page_core::SectionKind;

use crate::model::{App, TerminalViewport};

use super::components;
use super::pages;
use super::theme::Styles;

/// 状态栏高度
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// 终端高度 → 每节的高度
pub fn content_height(terminal_height: u16) -> u16 {
    terminal_height.saturating_sub(STATUS_BAR_HEIGHT).max(1)
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    // 两层布局：节内容 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),                    // 节内容
            Constraint::Length(STATUS_BAR_HEIGHT), // 状态栏
        ])
        .split(frame.area());

    let content_area = main_layout[0];
    let status_area = main_layout[1];

    render_sections(app, frame, content_area);
    components::statusbar::render(app, frame, status_area);

    // 帮助弹窗（在最上层）
    if app.show_help {
        components::help::render(frame);
    }
}

fn render_sections(app: &App, frame: &mut Frame, area: Rect) {
    let viewport: &TerminalViewport = app.viewport();
    let page = Rect::new(0, 0, area.width, viewport.page_height());

    for (position, top) in viewport.visible_sections() {
        let Some(node) = app.navigation.graph().at(position) else {
            continue;
        };

        let mut buffer = Buffer::empty(page);
        buffer.set_style(page, Styles::page());
        match node.kind {
            SectionKind::Profile => pages::profile::render(app, page, &mut buffer),
            SectionKind::Content { index } => pages::section::render(app, index, page, &mut buffer),
        }
        components::hint::render(app, node, page, &mut buffer);

        blit(&buffer, top, frame.buffer_mut(), area);
    }
}

/// 把离屏缓冲区拷贝到 `area`，`top` 为缓冲区首行相对 `area` 的行偏移
fn blit(source: &Buffer, top: i64, target: &mut Buffer, area: Rect) {
    let width = source.area.width.min(area.width);
    for row in 0..source.area.height {
        let Ok(screen_row) = u16::try_from(top + i64::from(row)) else {
            continue;
        };
        if screen_row >= area.height {
            break;
        }
        for column in 0..width {
            let cell = source.cell((column, row));
            let slot = target.cell_mut((area.x + column, area.y + screen_row));
            if let (Some(cell), Some(slot)) = (cell, slot) {
                *slot = cell.clone();
            }
        }
    }
}
