//! 键盘导航消息处理

use std::time::Instant;

use crate::message::NavigationMessage;
use crate::model::App;

/// 处理键盘导航消息
pub fn update(app: &mut App, msg: NavigationMessage, now: Instant) {
    match msg {
        NavigationMessage::Key(key) => {
            if !app.navigation.handle_key(key, now).is_handled() {
                log::trace!("key {key:?} not handled");
            }
        }
    }
}
