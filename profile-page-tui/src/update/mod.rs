//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 键盘导航子消息
//!         mod pointer;            // 鼠标子消息
//!
//!         pub fn update(app: &mut App, msg: AppMessage)
//!         pub fn update_at(app: &mut App, msg: AppMessage, now: Instant)
//!
//!
//!     所有与时间相关的操作都显式接收 now：
//!         update()        读取 Instant::now() 后转交 update_at()
//!         update_at()     测试中传入固定时刻，计时行为可重复
//!
//!
//!     Tick 的处理顺序：
//!         viewport.step()                 // 平滑滚动推进一步
//!             ↓
//!         viewport.take_crossings()       // 越过阈值的节
//!             ↓
//!         navigation.handle_intersection()// 等同于 scroll_to_section
//!             ↓
//!         navigation.tick(now)            // 隐藏到期的提示
//!
//!     运行期的导航错误经 dispatch() 记录日志后丢弃，界面只在状态栏提示。
//!

mod navigation;
mod pointer;

use std::time::Instant;

use profile_page_core::navigation::dispatch;
use profile_page_core::IntersectionEntry;

use crate::message::AppMessage;
use crate::model::App;
use crate::view::layout::content_height;

/// 主更新函数
pub fn update(app: &mut App, msg: AppMessage) {
    update_at(app, msg, Instant::now());
}

/// 以给定时刻处理消息
pub fn update_at(app: &mut App, msg: AppMessage, now: Instant) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }
        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg, now);
        }
        AppMessage::Pointer(pointer_msg) => {
            pointer::update(app, pointer_msg, now);
        }
        AppMessage::Tick => {
            tick(app, now);
        }
        AppMessage::Resize { width, height } => {
            log::debug!("terminal resized to {width}x{height}");
            app.navigation.viewport_mut().resize(content_height(height));
        }
        AppMessage::ToggleHelp => {
            app.show_help = !app.show_help;
        }
        AppMessage::CloseHelp => {
            app.show_help = false;
        }
        AppMessage::ClearStatus => {
            app.status_message = None;
        }
        AppMessage::Noop => {}
    }
}

fn tick(app: &mut App, now: Instant) {
    let viewport = app.navigation.viewport_mut();
    if viewport.step() {
        if !viewport.is_scrolling() {
            log::debug!("scroll settled at row {}", viewport.offset());
        }
        apply_crossings(app, now);
    }

    let hidden = app.navigation.tick(now);
    if !hidden.is_empty() {
        log::trace!("{} hint(s) hidden", hidden.len());
    }
}

/// 把视口报告的交叉交给控制器
fn apply_crossings(app: &mut App, now: Instant) {
    let crossings = app.navigation.viewport_mut().take_crossings();
    for (position, ratio) in crossings {
        let Some(id) = app.navigation.graph().at(position).map(|node| node.id.clone()) else {
            continue;
        };
        let entry = IntersectionEntry::new(id, ratio);
        if dispatch(app.navigation.handle_intersection(&entry, now)).is_none() {
            app.status_message = Some(format!("Cannot activate {}", entry.target));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use profile_page_core::{
        HintDirection, NavKey, NavigationGraph, NavigationSettings, ProfileRecord, SectionId,
    };

    use super::*;
    use crate::message::{NavigationMessage, PointerMessage};

    const PAGE: u16 = 20;

    fn app(t0: Instant) -> App {
        let record = ProfileRecord::from_json(
            r#"{ "hash": "h", "displayName": "Jane", "description": "d",
                 "sections": [ { "title": ["A"], "content": "x" },
                               { "title": ["B"], "content": "y" } ] }"#,
        )
        .unwrap();
        let graph = NavigationGraph::build(&record).unwrap();
        App::new(record, graph, NavigationSettings::default(), 200, PAGE, t0).unwrap()
    }

    fn active(app: &App) -> &str {
        app.navigation.active_section().map_or("", SectionId::as_str)
    }

    /// 连续 Tick 直到滚动结束，返回最后的时刻
    fn settle(app: &mut App, mut now: Instant) -> Instant {
        for _ in 0..100 {
            now += Duration::from_millis(50);
            update_at(app, AppMessage::Tick, now);
            if !app.viewport().is_scrolling() {
                break;
            }
        }
        now
    }

    #[test]
    fn arrow_down_scrolls_and_activates_next() {
        let t0 = Instant::now();
        let mut app = app(t0);
        assert_eq!(active(&app), "profile");

        update_at(
            &mut app,
            AppMessage::Navigation(NavigationMessage::Key(NavKey::ArrowDown)),
            t0,
        );
        assert_eq!(active(&app), "a");
        assert_eq!(app.viewport().target(), Some(u32::from(PAGE)));

        settle(&mut app, t0);
        assert_eq!(active(&app), "a");
        assert_eq!(app.viewport().offset(), u32::from(PAGE));
    }

    #[test]
    fn two_quick_presses_reach_the_second_section() {
        let t0 = Instant::now();
        let mut app = app(t0);
        let down = AppMessage::Navigation(NavigationMessage::Key(NavKey::ArrowDown));

        update_at(&mut app, down.clone(), t0);
        update_at(&mut app, AppMessage::Tick, t0 + Duration::from_millis(50));
        update_at(&mut app, down, t0 + Duration::from_millis(60));

        settle(&mut app, t0 + Duration::from_millis(60));
        assert_eq!(active(&app), "b");
        assert_eq!(app.viewport().offset(), 2 * u32::from(PAGE));
    }

    #[test]
    fn wheel_scroll_activates_through_intersection() {
        let t0 = Instant::now();
        let mut app = app(t0);

        update_at(&mut app, AppMessage::Pointer(PointerMessage::Wheel(3)), t0);
        // 滚轮本身不切换激活节
        assert_eq!(active(&app), "profile");

        settle(&mut app, t0);
        assert_eq!(active(&app), "a");
    }

    #[test]
    fn clicking_next_hint_row_navigates() {
        let t0 = Instant::now();
        let mut app = app(t0);

        let click = PointerMessage::Click {
            column: 10,
            row: PAGE - 1,
        };
        update_at(&mut app, AppMessage::Pointer(click), t0);
        assert_eq!(active(&app), "a");

        // 个人资料节没有“上一节”提示，点击首行无效果
        let mut app = self::app(t0);
        update_at(
            &mut app,
            AppMessage::Pointer(PointerMessage::Click { column: 0, row: 0 }),
            t0,
        );
        assert_eq!(active(&app), "profile");
        assert!(app.status_message.is_none());
    }

    #[test]
    fn hints_hide_when_idle_and_return_on_mouse_move() {
        let t0 = Instant::now();
        let mut app = app(t0);
        let a = SectionId::new("a");

        update_at(
            &mut app,
            AppMessage::Navigation(NavigationMessage::Key(NavKey::ArrowDown)),
            t0,
        );
        let settled = settle(&mut app, t0);

        let idle = settled + Duration::from_secs(6);
        update_at(&mut app, AppMessage::Tick, idle);
        assert!(!app.navigation.is_hint_visible(&a, HintDirection::Next));

        update_at(&mut app, AppMessage::Pointer(PointerMessage::Moved), idle);
        assert!(app.navigation.is_hint_visible(&a, HintDirection::Next));
        assert!(app.navigation.is_hint_visible(&a, HintDirection::Prev));
    }

    #[test]
    fn wheel_brings_hidden_hints_back() {
        let t0 = Instant::now();
        let mut app = app(t0);
        let a = SectionId::new("a");

        update_at(
            &mut app,
            AppMessage::Navigation(NavigationMessage::Key(NavKey::ArrowDown)),
            t0,
        );
        let settled = settle(&mut app, t0);

        let idle = settled + Duration::from_secs(6);
        update_at(&mut app, AppMessage::Tick, idle);
        assert!(!app.navigation.is_hint_visible(&a, HintDirection::Prev));

        update_at(&mut app, AppMessage::Pointer(PointerMessage::Wheel(-3)), idle);
        assert!(app.navigation.is_hint_visible(&a, HintDirection::Next));
        assert!(app.navigation.is_hint_visible(&a, HintDirection::Prev));
        assert!(app.viewport().is_scrolling());
    }

    #[test]
    fn resize_subtracts_status_bar() {
        let t0 = Instant::now();
        let mut app = app(t0);
        update_at(
            &mut app,
            AppMessage::Resize {
                width: 80,
                height: 31,
            },
            t0,
        );
        assert_eq!(app.viewport().page_height(), 30);
    }

    #[test]
    fn help_and_quit() {
        let t0 = Instant::now();
        let mut app = app(t0);

        update_at(&mut app, AppMessage::ToggleHelp, t0);
        assert!(app.show_help);
        update_at(&mut app, AppMessage::CloseHelp, t0);
        assert!(!app.show_help);

        update_at(&mut app, AppMessage::Quit, t0);
        assert!(app.should_quit);
    }
}
