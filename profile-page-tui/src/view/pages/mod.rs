//! 节页面

pub mod profile;
pub mod section;

use ratatui::layout::Rect;

/// 去掉首尾的提示行和左右边距后的正文区域
fn body_area(area: Rect) -> Rect {
    let margin_x = (area.width / 10).min(8);
    let y = area.y.saturating_add(1);
    let height = area.height.saturating_sub(2);
    Rect::new(
        area.x + margin_x,
        y,
        area.width.saturating_sub(margin_x * 2),
        height,
    )
}
