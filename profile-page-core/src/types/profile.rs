//! 个人资料记录类型定义

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::PageResult;

/// Gravatar 头像地址前缀
const AVATAR_BASE_URL: &str = "https://www.gravatar.com/avatar";

/// 个人资料记录（启动时加载一次，之后只读）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    /// Gravatar 邮箱哈希
    pub hash: String,
    /// 显示名称
    pub display_name: String,
    /// 个人简介
    pub description: String,
    /// 社交账号（按数组顺序渲染）
    #[serde(default)]
    pub accounts: Vec<Account>,
    /// 内容节（顺序决定前后导航关系）
    #[serde(default)]
    pub sections: Vec<ContentSection>,
}

impl ProfileRecord {
    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> PageResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 从文件加载
    pub fn load(path: impl AsRef<Path>) -> PageResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let record = Self::from_json(&json)?;
        log::debug!(
            "Loaded profile {} with {} section(s) from {}",
            record.display_name,
            record.sections.len(),
            path.display()
        );
        Ok(record)
    }

    /// 头像地址
    pub fn avatar_url(&self, size: u32) -> String {
        format!("{AVATAR_BASE_URL}/{}?s={size}", self.hash)
    }
}

/// 社交账号
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    /// 账号名称（同时作为图标的 alt 文本）
    pub name: String,
    /// 链接地址
    pub url: String,
    /// 图标资源键（在资源目录中查找）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// 图标直链（优先于资源键）
    #[serde(
        default,
        rename = "iconUrl",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon_url: Option<String>,
}

/// 内容节
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentSection {
    /// 多行标题（也接受单个字符串）
    #[serde(deserialize_with = "deserialize_title")]
    pub title: Vec<String>,
    /// 原始标记内容
    #[serde(default)]
    pub content: String,
}

impl ContentSection {
    pub fn new(title: &[&str], content: impl Into<String>) -> Self {
        Self {
            title: title.iter().map(|line| (*line).to_string()).collect(),
            content: content.into(),
        }
    }

    /// 用空格拼接的标题，用作导航提示文本
    pub fn joined_title(&self) -> String {
        self.title.join(" ")
    }
}

fn deserialize_title<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Title {
        Single(String),
        Lines(Vec<String>),
    }

    Ok(match Title::deserialize(deserializer)? {
        Title::Single(line) => vec![line],
        Title::Lines(lines) => lines,
    })
}
