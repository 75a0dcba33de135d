//! 鼠标消息处理

use std::time::Instant;

use profile_page_core::navigation::dispatch;

use crate::message::PointerMessage;
use crate::model::App;

/// 处理鼠标消息
pub fn update(app: &mut App, msg: PointerMessage, now: Instant) {
    match msg {
        PointerMessage::Moved => app.navigation.pointer_activity(now),
        PointerMessage::Wheel(rows) => {
            app.navigation.pointer_activity(now);
            app.navigation.viewport_mut().scroll_by(rows);
        }
        PointerMessage::Click { column, row } => {
            log::trace!("click at {column},{row}");
            click(app, row, now);
        }
    }
}

/// 点击提示行：跳转到该提示的目标节
fn click(app: &mut App, row: u16, now: Instant) {
    let Some((position, direction)) = app.viewport().hint_at(row) else {
        return;
    };
    let Some(node) = app.navigation.graph().at(position) else {
        return;
    };
    if node.hint(direction).is_none() {
        return;
    }

    let section = node.id.clone();
    if dispatch(app.navigation.click_hint(&section, direction, now)).is_none() {
        app.status_message = Some(format!("Cannot navigate from {section}"));
    }
}
