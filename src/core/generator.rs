use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    core::{
        error::BlogResult,
        listing::{CategoryFilter, Listing},
    },
    models::{BlogData, Config},
    theme::ThemeRenderer,
};

/// HTML 生成器
pub struct HtmlGenerator {
    /// 输出目录
    pub output_dir: PathBuf,
    /// 站点配置
    pub config: Config,
    /// 主题渲染器
    renderer: ThemeRenderer,
}

impl HtmlGenerator {
    /// 创建新的 HTML 生成器
    pub fn new(output_dir: PathBuf, config: Config) -> BlogResult<Self> {
        let renderer = ThemeRenderer::new(config.clone())?;
        Ok(Self {
            output_dir,
            config,
            renderer,
        })
    }

    /// 博客页面所在目录
    pub fn blog_dir(&self) -> PathBuf {
        self.output_dir.join(self.config.blog_dir.trim_matches('/'))
    }

    /// 生成所有页面，返回写入的页面数
    pub fn generate(&self, data: &BlogData) -> BlogResult<usize> {
        info!("开始生成静态网站...");

        let blog_dir = self.blog_dir();
        fs::create_dir_all(&blog_dir)?;

        let mut pages = self.write_listing_pages(&blog_dir, data)?;

        for post in &data.posts {
            debug!("Generating post: {}", post.title);
            let html = self.renderer.render_post(post, &data.categories)?;
            write_page(&blog_dir.join(post.file_name()), &html)?;
            pages += 1;
        }

        write_page(&blog_dir.join("404.html"), &self.renderer.render_not_found()?)?;
        pages += 1;

        info!("Generated {} HTML files in {}", pages, blog_dir.display());
        Ok(pages)
    }

    /// 写出列表页：全部分类和每个分类各自的所有分页
    ///
    /// 筛选按钮和"加载更多"链接都指向这些页面，返回写入的页面数。
    fn write_listing_pages(&self, blog_dir: &Path, data: &BlogData) -> BlogResult<usize> {
        let mut filters = vec![CategoryFilter::ALL];
        filters.extend(data.categories.iter().map(|c| c.id.as_str()));

        let mut listing = Listing::new(data.clone());
        let mut pages = 0;
        for filter in filters {
            listing.filter_by_category(filter);
            let page_count = listing.page_count();
            loop {
                let file_name = listing.state().page_file_name();
                debug!("Generating listing page: {}", file_name);
                write_page(&blog_dir.join(file_name), &self.renderer.render_listing(&listing)?)?;
                pages += 1;

                if listing.state().current_page >= page_count {
                    break;
                }
                listing.load_more();
            }
        }
        Ok(pages)
    }

    /// 删除输出目录
    pub fn clean(&self) -> BlogResult<()> {
        if self.output_dir.exists() {
            info!("Removing {}", self.output_dir.display());
            fs::remove_dir_all(&self.output_dir)?;
        }
        Ok(())
    }
}

fn write_page(path: &Path, html: &str) -> BlogResult<()> {
    fs::write(path, html)?;
    Ok(())
}
