//! PDF 导出

use actix_web::{HttpResponse, Responder, Result as ActixResult, web};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::errors::BookmarkError;
use crate::services::BookmarkService;
use crate::session::SessionHandle;

use super::helpers::error_from_bookmark;

/// 导出当前书签列表为 PDF 附件
///
/// 渲染在阻塞线程池中进行；会话锁只在取快照时持有。
pub async fn export_pdf(
    session: SessionHandle,
    service: web::Data<Arc<BookmarkService>>,
) -> ActixResult<impl Responder> {
    let svc = service.get_ref().clone();
    let rendered = web::block(move || svc.export(&session)).await;

    let bytes = match rendered {
        Ok(Ok(bytes)) => bytes,
        Ok(Err(e)) => {
            warn!("Export rejected: {}", e);
            return Ok(error_from_bookmark(&e));
        }
        Err(e) => {
            error!("Export task failed: {}", e);
            return Ok(error_from_bookmark(&BookmarkError::export(format!(
                "Export task failed: {}",
                e
            ))));
        }
    };

    let filename = service.export_filename();
    info!("API: exported {} bytes as {}", bytes.len(), filename);

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", filename),
        ))
        .body(bytes))
}
