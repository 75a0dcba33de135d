/// 鼠标消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMessage {
    /// 鼠标移动（含拖动）
    Moved,

    /// 滚轮，正数向下
    Wheel(i32),

    /// 左键点击的屏幕坐标
    Click { column: u16, row: u16 },
}
