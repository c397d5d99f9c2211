use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

/// 本地预览服务器，只提供生成后的静态文件
pub struct Server {
    /// 站点目录
    public_dir: PathBuf,
    /// 找不到文件时返回的页面
    not_found_page: PathBuf,
    /// 端口
    port: u16,
}

impl Server {
    /// 创建新的服务器
    pub fn new(public_dir: PathBuf, not_found_page: PathBuf, port: u16) -> Self {
        Self {
            public_dir,
            not_found_page,
            port,
        }
    }

    /// 构建路由
    pub fn router(&self) -> Router {
        let serve_dir = ServeDir::new(&self.public_dir)
            .not_found_service(ServeFile::new(&self.not_found_page));

        Router::new()
            .fallback_service(serve_dir)
            .layer(TraceLayer::new_for_http())
    }

    /// 启动服务器
    pub async fn start(self) -> Result<()> {
        let app = self.router();

        let addr: SocketAddr = format!("0.0.0.0:{}", self.port).parse()?;
        info!("Server started at http://localhost:{}", self.port);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
