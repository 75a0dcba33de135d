//! 图标资源解析
//!
//! 账号图标有两种来源：`iconUrl` 直链（优先），或者在资源目录中按
//! `icon` 键查找的图片文件。

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::PageResult;
use crate::types::Account;

/// 资源目录中认可的图片扩展名
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "svg"];

/// 图标解析器
pub trait IconResolver {
    /// 返回可直接用作 `src` 的地址；无法解析时返回 None
    fn resolve(&self, account: &Account) -> Option<String>;
}

/// 资源目录中的一个图片文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    /// 源文件路径
    pub source: PathBuf,
    /// 页面中引用的路径
    pub public_path: String,
}

/// 图标资源目录
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    entries: BTreeMap<String, AssetEntry>,
}

impl AssetCatalog {
    /// 空目录：只能解析 `iconUrl`
    pub fn empty() -> Self {
        Self::default()
    }

    /// 扫描目录（不递归），以文件名为键
    pub fn scan(dir: impl AsRef<Path>, public_prefix: &str) -> PageResult<Self> {
        let dir = dir.as_ref();
        let prefix = public_prefix.trim_end_matches('/');
        let mut catalog = Self::empty();

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() || !is_image(&path) {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let public_path = if prefix.is_empty() {
                name.to_string()
            } else {
                format!("{prefix}/{name}")
            };
            catalog.insert(name.to_string(), path.clone(), public_path);
        }

        log::debug!(
            "Scanned {} icon(s) from {}",
            catalog.entries.len(),
            dir.display()
        );
        Ok(catalog)
    }

    pub fn insert(&mut self, key: impl Into<String>, source: PathBuf, public_path: String) {
        self.entries.insert(
            key.into(),
            AssetEntry {
                source,
                public_path,
            },
        );
    }

    pub fn get(&self, key: &str) -> Option<&AssetEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &AssetEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }
}

impl IconResolver for AssetCatalog {
    fn resolve(&self, account: &Account) -> Option<String> {
        if let Some(url) = &account.icon_url {
            return Some(url.clone());
        }
        let key = account.icon.as_deref()?;
        self.get(key).map(|entry| entry.public_path.clone())
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
