//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环按 tick_rate（默认 50 ms）节拍运行：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event(剩余时间) {      // 最多等到下一个节拍
//!         let msg = handle_event(event, &app);            // 原始事件 → 消息
//!         update::update(&mut app, msg)                   // 更新状态
//!     }
//!     if 到达节拍 {
//!         update::update(&mut app, AppMessage::Tick)  // 平滑滚动一步、隐藏到期提示
//!     }
//! }
//!
//! 浏览器里由事件循环驱动的计时器和滚动动画，在这里都由 Tick 推进。

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, tick_rate: Duration) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件，最多等到下一个节拍
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if let Some(event) = event::poll_event(timeout)? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 5. 更新状态
            update::update(app, msg);
        }

        // 6. 时钟
        if last_tick.elapsed() >= tick_rate {
            update::update(app, AppMessage::Tick);
            last_tick = Instant::now();
        }
    }

    Ok(())
}
