//! 提示可见性与自动隐藏计时
//!
//! 每个提示只有一个隐藏截止时间。重新显示时直接覆盖旧的截止时间，
//! 相当于取消旧任务后重新调度，旧的隐藏不会在新的显示之后触发。

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::graph::NavigationGraph;
use crate::types::{HintDirection, SectionId};

/// 提示的唯一标识：所属节 + 方向
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HintKey {
    pub section: SectionId,
    pub direction: HintDirection,
}

impl HintKey {
    pub fn new(section: SectionId, direction: HintDirection) -> Self {
        Self { section, direction }
    }
}

#[derive(Debug, Clone)]
struct HintState {
    visible: bool,
    auto_hide: bool,
    hide_at: Option<Instant>,
}

/// 所有提示的可见性状态
#[derive(Debug, Clone)]
pub struct HintTimers {
    states: HashMap<HintKey, HintState>,
    delay: Duration,
}

impl HintTimers {
    /// 为导航图中的每个提示创建状态，初始全部可见
    pub fn new(graph: &NavigationGraph, delay: Duration) -> Self {
        let states = graph
            .sections()
            .iter()
            .flat_map(|node| {
                node.hints.iter().map(|hint| {
                    (
                        HintKey::new(node.id.clone(), hint.direction),
                        HintState {
                            visible: true,
                            auto_hide: hint.auto_hide,
                            hide_at: None,
                        },
                    )
                })
            })
            .collect();

        Self { states, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// 立即显示，并在 `now + delay` 后隐藏；覆盖之前的截止时间。
    /// 常驻提示与未知提示不受影响，返回 `false`。
    pub fn show(&mut self, key: &HintKey, now: Instant) -> bool {
        let delay = self.delay;
        match self.states.get_mut(key) {
            Some(state) if state.auto_hide => {
                state.visible = true;
                state.hide_at = Some(now + delay);
                true
            }
            _ => false,
        }
    }

    /// 隐藏所有到期的提示，返回被隐藏的提示
    pub fn tick(&mut self, now: Instant) -> Vec<HintKey> {
        let mut hidden = Vec::new();
        for (key, state) in &mut self.states {
            if state.hide_at.is_some_and(|due| due <= now) {
                state.visible = false;
                state.hide_at = None;
                hidden.push(key.clone());
            }
        }
        hidden
    }

    pub fn is_visible(&self, key: &HintKey) -> bool {
        self.states.get(key).is_some_and(|state| state.visible)
    }

    /// 提示当前的隐藏截止时间
    pub fn deadline(&self, key: &HintKey) -> Option<Instant> {
        self.states.get(key).and_then(|state| state.hide_at)
    }

    /// 最早的隐藏截止时间（供事件循环决定等待时长）
    pub fn next_deadline(&self) -> Option<Instant> {
        self.states.values().filter_map(|state| state.hide_at).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::two_section_record;

    fn timers() -> HintTimers {
        let graph = NavigationGraph::build(&two_section_record()).unwrap();
        HintTimers::new(&graph, Duration::from_millis(5000))
    }

    fn key(section: &str, direction: HintDirection) -> HintKey {
        HintKey::new(SectionId::new(section), direction)
    }

    #[test]
    fn hints_start_visible() {
        let timers = timers();
        assert!(timers.is_visible(&key("profile", HintDirection::Next)));
        assert!(timers.is_visible(&key("a", HintDirection::Prev)));
        assert!(!timers.is_visible(&key("b", HintDirection::Next)));
    }

    #[test]
    fn shown_hint_hides_after_delay() {
        let mut timers = timers();
        let t0 = Instant::now();
        let k = key("a", HintDirection::Next);

        assert!(timers.show(&k, t0));
        assert!(timers.tick(t0 + Duration::from_millis(4999)).is_empty());
        assert!(timers.is_visible(&k));

        let hidden = timers.tick(t0 + Duration::from_millis(5000));
        assert_eq!(hidden, vec![k.clone()]);
        assert!(!timers.is_visible(&k));
    }

    #[test]
    fn reshow_replaces_pending_deadline() {
        let mut timers = timers();
        let t0 = Instant::now();
        let k = key("a", HintDirection::Prev);

        timers.show(&k, t0);
        timers.show(&k, t0 + Duration::from_millis(4000));

        assert!(timers.tick(t0 + Duration::from_millis(5000)).is_empty());
        assert!(timers.is_visible(&k));
        assert_eq!(
            timers.deadline(&k),
            Some(t0 + Duration::from_millis(9000))
        );

        timers.tick(t0 + Duration::from_millis(9000));
        assert!(!timers.is_visible(&k));
    }

    #[test]
    fn pinned_hint_never_scheduled() {
        let mut timers = timers();
        let t0 = Instant::now();
        let k = key("profile", HintDirection::Next);

        assert!(!timers.show(&k, t0));
        timers.tick(t0 + Duration::from_secs(60));
        assert!(timers.is_visible(&k));
        assert!(timers.next_deadline().is_none());
    }

    #[test]
    fn next_deadline_is_earliest() {
        let mut timers = timers();
        let t0 = Instant::now();
        timers.show(&key("a", HintDirection::Prev), t0 + Duration::from_millis(10));
        timers.show(&key("b", HintDirection::Prev), t0);
        assert_eq!(timers.next_deadline(), Some(t0 + Duration::from_millis(5000)));
    }
}
