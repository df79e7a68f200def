use actix_web::{HttpRequest, HttpResponse, Result, web};
use rust_embed::Embed;
use std::sync::OnceLock;
use tracing::{debug, trace};

use crate::api::constants::API_VERSION_SCOPE;

// 使用 RustEmbed 自动嵌入页面资源
#[derive(Embed)]
#[folder = "assets/"]
struct FrontendAssets;

pub struct FrontendService;

static API_BASE: OnceLock<String> = OnceLock::new();

impl FrontendService {
    /// 处理首页，替换页面中的占位符
    pub async fn handle_index(_req: HttpRequest) -> Result<HttpResponse> {
        trace!("Serving index page");

        let api_base = API_BASE.get_or_init(|| {
            let config = crate::config::get_config();
            format!(
                "{}{}",
                config.routes.api_prefix.trim_end_matches('/'),
                API_VERSION_SCOPE
            )
        });

        match FrontendAssets::get("index.html") {
            Some(content) => {
                let html = String::from_utf8_lossy(&content.data)
                    .replace("%API_BASE%", api_base)
                    .replace("%BOOKMARKER_VERSION%", env!("CARGO_PKG_VERSION"));

                Ok(HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(html))
            }
            None => {
                debug!("index.html missing from embedded assets");
                Ok(HttpResponse::NotFound().body("Page not found"))
            }
        }
    }

    /// 处理静态资源文件
    pub async fn handle_static(req: HttpRequest) -> Result<HttpResponse> {
        let path = req.match_info().query("path");
        trace!("Serving static file: {}", path);

        match FrontendAssets::get(path) {
            Some(content) => Ok(HttpResponse::Ok()
                .content_type(Self::get_content_type(path))
                .body(content.data.into_owned())),
            None => {
                debug!("Static file not found: {}", path);
                Ok(HttpResponse::NotFound().body("File not found"))
            }
        }
    }

    /// 根据文件扩展名确定 Content-Type
    fn get_content_type(path: &str) -> &'static str {
        match crate::utils::file_extension(path).as_deref() {
            Some("html") => "text/html; charset=utf-8",
            Some("css") => "text/css; charset=utf-8",
            Some("js") => "application/javascript; charset=utf-8",
            Some("svg") => "image/svg+xml",
            Some("png") => "image/png",
            Some("ico") => "image/x-icon",
            _ => "application/octet-stream",
        }
    }
}

/// 页面路由配置
pub fn frontend_routes() -> actix_web::Scope {
    web::scope("")
        .route("/", web::get().to(FrontendService::handle_index))
        .route("/", web::head().to(FrontendService::handle_index))
        .route(
            "/assets/{path:.*}",
            web::get().to(FrontendService::handle_static),
        )
}
