//! 视口接口

use crate::types::SectionId;

/// 滚动方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// 平滑滚动（异步完成，完成时间不可观测）
    #[default]
    Smooth,
    /// 立即跳转
    Instant,
}

/// 视口：由前端实现，负责把节滚动到可见区域
///
/// 控制器不会等待滚动完成，激活节与滚动动画互不依赖。
pub trait Viewport {
    /// 将 `position`（文档顺序下标）处的节 `id` 滚动到视口中
    fn scroll_into_view(&mut self, id: &SectionId, position: usize, behavior: ScrollBehavior);
}
