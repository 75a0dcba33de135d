//! 导航图
//!
//! 由个人资料记录推导出的纯数据结构：节 ID、前后关系、提示文本与目标。
//! 不依赖任何 UI 运行时，`dom` 与前端都从这里读取。
//!
//! 节顺序：`[profile, section_0, ..., section_{n-1}]`，与文档顺序一致。
//! 提示文本与 `next_of` / `previous_of` 都基于同一个顺序推导。

use std::collections::HashMap;

use crate::error::{ConfigurationError, PageError, PageResult};
use crate::types::{HintDirection, NavHint, ProfileRecord, SectionId};

/// 第一节的上一节提示文本
pub const PROFILE_LABEL: &str = "Profile";

/// 节类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// 个人资料节
    Profile,
    /// 内容节（`index` 为记录中 `sections` 的下标）
    Content { index: usize },
}

/// 导航图中的一个节
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionNode {
    pub id: SectionId,
    pub kind: SectionKind,
    /// 按 prev、next 顺序排列
    pub hints: Vec<NavHint>,
}

impl SectionNode {
    /// 获取指定方向的提示
    pub fn hint(&self, direction: HintDirection) -> Option<&NavHint> {
        self.hints.iter().find(|hint| hint.direction == direction)
    }

    /// 自动隐藏的提示
    pub fn auto_hide_hints(&self) -> impl Iterator<Item = &NavHint> {
        self.hints.iter().filter(|hint| hint.auto_hide)
    }
}

/// 导航图
#[derive(Debug, Clone)]
pub struct NavigationGraph {
    nodes: Vec<SectionNode>,
    positions: HashMap<SectionId, usize>,
}

impl NavigationGraph {
    /// 构建导航图并校验节 ID
    pub fn build(record: &ProfileRecord) -> PageResult<Self> {
        if record.sections.is_empty() {
            return Err(ConfigurationError::EmptySections.into());
        }

        let ids = derive_ids(record)?;

        let mut nodes = Vec::with_capacity(ids.len() + 1);
        nodes.push(SectionNode {
            id: SectionId::profile(),
            kind: SectionKind::Profile,
            hints: vec![NavHint::next("", ids[0].clone()).pinned()],
        });

        for (i, id) in ids.iter().enumerate() {
            let (prev_label, prev_target) = if i == 0 {
                (PROFILE_LABEL.to_string(), SectionId::profile())
            } else {
                (record.sections[i - 1].joined_title(), ids[i - 1].clone())
            };

            let mut hints = vec![NavHint::prev(prev_label, prev_target)];
            if let Some(next_id) = ids.get(i + 1) {
                hints.push(NavHint::next(
                    record.sections[i + 1].joined_title(),
                    next_id.clone(),
                ));
            }

            nodes.push(SectionNode {
                id: id.clone(),
                kind: SectionKind::Content { index: i },
                hints,
            });
        }

        let positions = nodes
            .iter()
            .enumerate()
            .map(|(pos, node)| (node.id.clone(), pos))
            .collect();

        log::debug!("Built navigation graph with {} sections", nodes.len());

        Ok(Self { nodes, positions })
    }

    /// 所有节（文档顺序）
    pub fn sections(&self) -> &[SectionNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// 导航图至少包含个人资料节和一个内容节，不会为空
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &SectionId) -> bool {
        self.positions.contains_key(id)
    }

    /// 节在文档中的位置
    pub fn position(&self, id: &SectionId) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn get(&self, id: &SectionId) -> Option<&SectionNode> {
        self.position(id).map(|pos| &self.nodes[pos])
    }

    /// 按位置获取
    pub fn at(&self, position: usize) -> Option<&SectionNode> {
        self.nodes.get(position)
    }

    /// 查找节，找不到时返回 `SectionNotFound`
    pub fn require(&self, id: &SectionId) -> PageResult<&SectionNode> {
        self.get(id)
            .ok_or_else(|| PageError::SectionNotFound(id.to_string()))
    }

    /// 文档顺序中的下一个节
    pub fn next_of(&self, id: &SectionId) -> Option<&SectionNode> {
        self.position(id).and_then(|pos| self.nodes.get(pos + 1))
    }

    /// 文档顺序中的上一个节
    pub fn previous_of(&self, id: &SectionId) -> Option<&SectionNode> {
        self.position(id)
            .and_then(|pos| pos.checked_sub(1))
            .map(|pos| &self.nodes[pos])
    }

    /// 第一个内容节的 ID
    pub fn first_content_id(&self) -> &SectionId {
        // build() 保证至少有一个内容节
        &self.nodes[1].id
    }
}

/// 推导所有内容节的 ID，并保证非空、不占用保留 ID、互不重复
fn derive_ids(record: &ProfileRecord) -> PageResult<Vec<SectionId>> {
    let mut seen: HashMap<SectionId, usize> = HashMap::new();
    let mut ids = Vec::with_capacity(record.sections.len());

    for (index, section) in record.sections.iter().enumerate() {
        let id = SectionId::from_title(&section.title);

        if id.is_empty() {
            return Err(ConfigurationError::EmptySectionId { index }.into());
        }
        if id.is_profile() {
            return Err(ConfigurationError::ReservedSectionId { index }.into());
        }
        if let Some(&first) = seen.get(&id) {
            return Err(ConfigurationError::DuplicateSectionId {
                id: id.to_string(),
                first,
                second: index,
            }
            .into());
        }

        seen.insert(id.clone(), index);
        ids.push(id);
    }

    Ok(ids)
}
