//! Bookmark API 路由配置

use actix_web::web;

use crate::api::constants::API_VERSION_SCOPE;

use super::crud::{
    add_bookmark, begin_edit, cancel_edit, delete_bookmark, get_bookmark, list_bookmarks,
    update_bookmark,
};
use super::export::export_pdf;
use super::helpers::json_config;
use super::media::{clear_media, upload_media};

/// 书签路由 `/bookmarks`
///
/// 包含：
/// - GET /bookmarks - 当前会话视图
/// - POST /bookmarks - 添加书签
/// - GET/PUT/DELETE /bookmarks/{id} - 单条书签
/// - POST /bookmarks/{id}/edit - 进入编辑
pub fn bookmarks_routes() -> actix_web::Scope {
    web::scope("/bookmarks")
        .route("", web::get().to(list_bookmarks))
        .route("", web::head().to(list_bookmarks))
        .route("", web::post().to(add_bookmark))
        .route("/{id}/edit", web::post().to(begin_edit))
        .route("/{id}", web::get().to(get_bookmark))
        .route("/{id}", web::put().to(update_bookmark))
        .route("/{id}", web::delete().to(delete_bookmark))
}

/// 媒体路由 `/media`
pub fn media_routes() -> actix_web::Scope {
    web::scope("/media")
        .route("", web::post().to(upload_media))
        .route("", web::delete().to(clear_media))
}

/// `/v1` 下的全部路由
pub fn api_v1_routes() -> actix_web::Scope {
    web::scope(API_VERSION_SCOPE)
        .app_data(json_config())
        .service(bookmarks_routes())
        .service(media_routes())
        .route("/edit", web::delete().to(cancel_edit))
        .route("/export", web::get().to(export_pdf))
}
