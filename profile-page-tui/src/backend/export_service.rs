//! 静态导出
//!
//! 把页面渲染成 `index.html`，连同 `robots.txt` 和资源目录中的图标
//! 一起写入输出目录。导出的是初始状态：个人资料节激活，所有提示可见。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use profile_page_core::dom::{render_document, DocumentOptions, PageBuilder, ROBOTS_TXT};
use profile_page_core::{AssetCatalog, NavigationGraph, PageResult, ProfileRecord, SectionId};

/// 导出结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub index: PathBuf,
    pub robots: PathBuf,
    /// 复制的图标数量
    pub assets_copied: usize,
}

/// 导出服务
pub struct ExportService<'a> {
    record: &'a ProfileRecord,
    graph: &'a NavigationGraph,
    icons: &'a AssetCatalog,
    avatar_size: u32,
    favicon: Option<String>,
    stylesheet: Option<String>,
}

impl<'a> ExportService<'a> {
    pub fn new(
        record: &'a ProfileRecord,
        graph: &'a NavigationGraph,
        icons: &'a AssetCatalog,
        avatar_size: u32,
    ) -> Self {
        Self {
            record,
            graph,
            icons,
            avatar_size,
            favicon: None,
            stylesheet: None,
        }
    }

    /// 站点图标地址（原样写入 `<link rel="icon">`）
    #[must_use]
    pub fn favicon(mut self, href: Option<String>) -> Self {
        self.favicon = href;
        self
    }

    /// 样式表地址
    #[must_use]
    pub fn stylesheet(mut self, href: Option<String>) -> Self {
        self.stylesheet = href;
        self
    }

    /// 渲染完整 HTML 文档
    pub fn render(&self) -> PageResult<String> {
        let profile = SectionId::profile();
        let content = PageBuilder::new(self.record, self.graph, self.icons)
            .avatar_size(self.avatar_size)
            .active(Some(&profile))
            .build();

        render_document(
            &content,
            &DocumentOptions {
                title: self.record.display_name.clone(),
                favicon: self.favicon.clone(),
                stylesheet: self.stylesheet.clone(),
                lang: None,
            },
        )
    }

    /// 写入输出目录
    pub fn export(&self, out_dir: &Path) -> Result<ExportSummary> {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("failed to create {}", out_dir.display()))?;

        let index = out_dir.join("index.html");
        let html = self.render().context("failed to render index.html")?;
        fs::write(&index, html)
            .with_context(|| format!("failed to write {}", index.display()))?;

        let robots = out_dir.join("robots.txt");
        fs::write(&robots, ROBOTS_TXT)
            .with_context(|| format!("failed to write {}", robots.display()))?;

        let mut assets_copied = 0;
        for (key, entry) in self.icons.entries() {
            let dest = out_dir.join(&entry.public_path);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::copy(&entry.source, &dest)
                .with_context(|| format!("failed to copy icon {key}"))?;
            assets_copied += 1;
        }

        log::info!(
            "Exported {} sections and {assets_copied} icons to {}",
            self.graph.len(),
            out_dir.display()
        );

        Ok(ExportSummary {
            index,
            robots,
            assets_copied,
        })
    }
}
