//! Bookmark CRUD 与编辑状态

use actix_web::{Responder, Result as ActixResult, web};
use std::sync::Arc;
use tracing::{debug, info};

use crate::services::BookmarkService;
use crate::session::SessionHandle;

use super::helpers::{api_result, created_response, error_from_bookmark, parse_bookmark_id};
use super::types::BookmarkPayload;

/// 列出当前会话的书签
pub async fn list_bookmarks(
    session: SessionHandle,
    service: web::Data<Arc<BookmarkService>>,
) -> ActixResult<impl Responder> {
    debug!("API: list bookmarks");
    Ok(api_result(Ok(service.list(&session))))
}

/// 添加书签，成功返回 201 和新的视图
pub async fn add_bookmark(
    session: SessionHandle,
    service: web::Data<Arc<BookmarkService>>,
    payload: web::Json<BookmarkPayload>,
) -> ActixResult<impl Responder> {
    info!("API: add bookmark");
    match service.add(&session, payload.into_inner().into()) {
        Ok(view) => Ok(created_response(view)),
        Err(e) => Ok(error_from_bookmark(&e)),
    }
}

pub async fn get_bookmark(
    session: SessionHandle,
    service: web::Data<Arc<BookmarkService>>,
    path: web::Path<String>,
) -> ActixResult<impl Responder> {
    let result = parse_bookmark_id(&path).and_then(|id| service.get(&session, id));
    Ok(api_result(result))
}

/// 保存编辑；若当前编辑的正是这条书签，编辑状态随之清除
pub async fn update_bookmark(
    session: SessionHandle,
    service: web::Data<Arc<BookmarkService>>,
    path: web::Path<String>,
    payload: web::Json<BookmarkPayload>,
) -> ActixResult<impl Responder> {
    info!("API: update bookmark {}", path);
    let fields = payload.into_inner().into();
    let result = parse_bookmark_id(&path).and_then(|id| service.update(&session, id, fields));
    Ok(api_result(result))
}

pub async fn delete_bookmark(
    session: SessionHandle,
    service: web::Data<Arc<BookmarkService>>,
    path: web::Path<String>,
) -> ActixResult<impl Responder> {
    info!("API: delete bookmark {}", path);
    let result = parse_bookmark_id(&path).and_then(|id| service.delete(&session, id));
    Ok(api_result(result))
}

pub async fn begin_edit(
    session: SessionHandle,
    service: web::Data<Arc<BookmarkService>>,
    path: web::Path<String>,
) -> ActixResult<impl Responder> {
    debug!("API: begin edit {}", path);
    let result = parse_bookmark_id(&path).and_then(|id| service.begin_edit(&session, id));
    Ok(api_result(result))
}

pub async fn cancel_edit(
    session: SessionHandle,
    service: web::Data<Arc<BookmarkService>>,
) -> ActixResult<impl Responder> {
    debug!("API: cancel edit");
    Ok(api_result(Ok(service.cancel_edit(&session))))
}
