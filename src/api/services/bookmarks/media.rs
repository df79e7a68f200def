//! 媒体文件上传
//!
//! 文件内容只做计数后丢弃，会话里只记录文件名和大小。

use actix_multipart::Multipart;
use actix_web::{Responder, Result as ActixResult, web};
use futures_util::StreamExt;
use std::sync::Arc;
use tracing::{error, info};

use crate::api::constants::MEDIA_FIELD_NAME;
use crate::errors::BookmarkError;
use crate::services::BookmarkService;
use crate::session::{MediaInfo, SessionHandle};

use super::helpers::{api_result, error_from_bookmark};

/// 上传音频/视频文件
pub async fn upload_media(
    session: SessionHandle,
    service: web::Data<Arc<BookmarkService>>,
    mut payload: Multipart,
) -> ActixResult<impl Responder> {
    info!("API: media upload request");

    let max_bytes = service.max_upload_bytes();
    let mut media: Option<MediaInfo> = None;

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(f) => f,
            Err(e) => {
                error!("Failed to parse multipart field: {}", e);
                return Ok(error_from_bookmark(&BookmarkError::upload(format!(
                    "Invalid multipart data: {}",
                    e
                ))));
            }
        };

        if field.name() != Some(MEDIA_FIELD_NAME) {
            // 忽略未知字段
            continue;
        }

        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string)
            .unwrap_or_default();

        // 扩展名不对时不读取内容
        if let Err(e) = service.check_media_name(&name) {
            return Ok(error_from_bookmark(&e));
        }

        let mut size: u64 = 0;
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(bytes) => {
                    size += bytes.len() as u64;
                    if size > max_bytes {
                        return Ok(error_from_bookmark(&BookmarkError::file_too_large(
                            format!("File size exceeds maximum {} MB", max_bytes / 1024 / 1024),
                        )));
                    }
                }
                Err(e) => {
                    error!("Failed to read file chunk: {}", e);
                    return Ok(error_from_bookmark(&BookmarkError::upload(format!(
                        "Failed to read file: {}",
                        e
                    ))));
                }
            }
        }

        media = Some(MediaInfo { name, size });
    }

    let result = match media {
        Some(media) => service.attach_media(&session, media),
        None => Err(BookmarkError::upload("No media file provided")),
    };
    Ok(api_result(result))
}

/// 移除当前会话的媒体
pub async fn clear_media(
    session: SessionHandle,
    service: web::Data<Arc<BookmarkService>>,
) -> ActixResult<impl Responder> {
    info!("API: clear media");
    Ok(api_result(Ok(service.clear_media(&session))))
}
