//! Bookmark management service
//!
//! The form-handler boundary: every mutation runs against one session's
//! store and hands back the fresh view, so callers never re-render from
//! stale state.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{AppConfig, UploadConfig, ValidationConfig};
use crate::errors::{BookmarkError, Result};
use crate::export::{ExportOptions, ReportExporter};
use crate::session::{MediaInfo, SessionHandle};
use crate::store::{Bookmark, BookmarkFields, BookmarkId, BookmarkView, EditTargetView};
use crate::utils::{TimeCode, file_extension};

/// Everything the page needs to render one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SessionView {
    pub bookmarks: Vec<BookmarkView>,
    pub editing: Option<EditTargetView>,
    pub media: Option<MediaInfo>,
}

/// Service for bookmark operations on a session
pub struct BookmarkService {
    validation: ValidationConfig,
    upload: UploadConfig,
    exporter: ReportExporter,
    export_filename: String,
}

impl BookmarkService {
    pub fn new(
        validation: ValidationConfig,
        upload: UploadConfig,
        exporter: ReportExporter,
        export_filename: impl Into<String>,
    ) -> Self {
        Self {
            validation,
            upload,
            exporter,
            export_filename: export_filename.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.validation,
            config.upload.clone(),
            ReportExporter::new(ExportOptions::from(&config.export)),
            config.export.filename.clone(),
        )
    }

    pub fn export_filename(&self) -> &str {
        &self.export_filename
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.upload.max_size_bytes()
    }

    // ============ Queries ============

    pub fn list(&self, session: &SessionHandle) -> SessionView {
        let session = session.lock();
        let store = session.store.view();
        SessionView {
            bookmarks: store.bookmarks,
            editing: store.editing,
            media: session.media.clone(),
        }
    }

    pub fn get(&self, session: &SessionHandle, id: BookmarkId) -> Result<BookmarkView> {
        let session = session.lock();
        let index = session.store.index_of(id)?;
        let bookmark = session.store.get_at(index)?;
        Ok(BookmarkView::new(bookmark, index + 1))
    }

    /// Copy of the list as it is right now
    pub fn snapshot(&self, session: &SessionHandle) -> Vec<Bookmark> {
        session.lock().store.bookmarks().to_vec()
    }

    // ============ Mutations ============

    pub fn add(&self, session: &SessionHandle, fields: BookmarkFields) -> Result<SessionView> {
        self.validate(&fields)?;
        {
            let mut guard = session.lock();
            let bookmark = guard.store.add(fields);
            info!("Bookmark {} added: {}", bookmark.id, bookmark.title);
        }
        Ok(self.list(session))
    }

    /// Replace a bookmark's fields; clears the edit target if it pointed here
    pub fn update(
        &self,
        session: &SessionHandle,
        id: BookmarkId,
        fields: BookmarkFields,
    ) -> Result<SessionView> {
        self.validate(&fields)?;
        {
            let mut guard = session.lock();
            guard.store.update_by_id(id, fields)?;
            info!("Bookmark {} updated", id);
        }
        Ok(self.list(session))
    }

    pub fn delete(&self, session: &SessionHandle, id: BookmarkId) -> Result<SessionView> {
        {
            let mut guard = session.lock();
            let removed = guard.store.delete_by_id(id)?;
            info!("Bookmark {} deleted: {}", removed.id, removed.title);
        }
        Ok(self.list(session))
    }

    pub fn begin_edit(&self, session: &SessionHandle, id: BookmarkId) -> Result<SessionView> {
        session.lock().store.begin_edit_by_id(id)?;
        Ok(self.list(session))
    }

    pub fn cancel_edit(&self, session: &SessionHandle) -> SessionView {
        session.lock().store.cancel_edit();
        self.list(session)
    }

    // ============ Media ============

    /// Check the uploaded file name against the allowed extensions
    pub fn check_media_name(&self, name: &str) -> Result<()> {
        let allowed = file_extension(name).is_some_and(|ext| {
            self.upload
                .allowed_extensions
                .iter()
                .any(|a| a.eq_ignore_ascii_case(&ext))
        });
        if allowed {
            Ok(())
        } else {
            warn!("Rejected media upload: {}", name);
            Err(BookmarkError::unsupported_media(format!(
                "'{}' is not supported. Allowed extensions: {}",
                name,
                self.upload.allowed_extensions.join(", ")
            )))
        }
    }

    pub fn attach_media(&self, session: &SessionHandle, media: MediaInfo) -> Result<SessionView> {
        self.check_media_name(&media.name)?;
        info!("Media attached: {} ({} bytes)", media.name, media.size);
        session.lock().media = Some(media);
        Ok(self.list(session))
    }

    pub fn clear_media(&self, session: &SessionHandle) -> SessionView {
        session.lock().media = None;
        self.list(session)
    }

    // ============ Export ============

    /// Render the current list as PDF
    ///
    /// The session lock is released before rendering starts.
    pub fn export(&self, session: &SessionHandle) -> Result<Vec<u8>> {
        let bookmarks = self.snapshot(session);
        self.exporter.export(&bookmarks)
    }

    // ============ Validation ============

    fn validate(&self, fields: &BookmarkFields) -> Result<()> {
        let policy = &self.validation;

        if policy.non_empty_title && fields.title.trim().is_empty() {
            return Err(BookmarkError::validation("Title must not be empty"));
        }

        if !policy.time_format && !policy.ordered_range {
            return Ok(());
        }

        let start = self.check_time(&fields.start, "Start")?;
        let end = self.check_time(&fields.end, "End")?;

        if policy.ordered_range
            && let (Some(start), Some(end)) = (start, end)
            && end < start
        {
            return Err(BookmarkError::validation(format!(
                "End time {} is before start time {}",
                TimeCode::format(end),
                TimeCode::format(start)
            )));
        }
        Ok(())
    }

    /// Parsed seconds when the value is a valid time code
    fn check_time(&self, value: &str, label: &str) -> Result<Option<u64>> {
        match TimeCode::parse(value) {
            Ok(seconds) => Ok(Some(seconds)),
            Err(e) if self.validation.time_format => {
                Err(BookmarkError::validation(format!("{}: {}", label, e)))
            }
            Err(_) => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(validation: ValidationConfig) -> BookmarkService {
        BookmarkService::new(
            validation,
            UploadConfig::default(),
            ReportExporter::default(),
            "bookmarks.pdf",
        )
    }

    fn fields(s: &str, e: &str, t: &str) -> BookmarkFields {
        BookmarkFields::new(s, e, t)
    }

    #[test]
    fn test_mutations_return_fresh_view() {
        let svc = service(ValidationConfig::default());
        let session = SessionHandle::default();

        let view = svc.add(&session, fields("00:00:00", "00:01:00", "Intro")).unwrap();
        assert_eq!(view.bookmarks.len(), 1);

        let id = view.bookmarks[0].id;
        let view = svc.begin_edit(&session, id).unwrap();
        assert_eq!(view.editing.as_ref().unwrap().title, "Intro");

        let view = svc.update(&session, id, fields("00:00:00", "00:02:00", "Opening")).unwrap();
        assert!(view.editing.is_none());
        assert_eq!(view.bookmarks[0].title, "Opening");

        let view = svc.delete(&session, id).unwrap();
        assert!(view.bookmarks.is_empty());
    }

    #[test]
    fn test_no_validation_by_default() {
        let svc = service(ValidationConfig::default());
        let session = SessionHandle::default();
        assert!(svc.add(&session, fields("soon", "10:00:00", "")).is_ok());
        assert!(svc.add(&session, fields("00:05:00", "00:01:00", "backwards")).is_ok());
    }

    #[test]
    fn test_huge_hours_are_accepted_verbatim() {
        let session = SessionHandle::default();
        let huge = fields("5124095576030432:00:00", "00:00:10", "x");

        let view = service(ValidationConfig::default())
            .add(&session, huge.clone())
            .unwrap();
        assert_eq!(view.bookmarks[0].start, "5124095576030432:00:00");

        // with range checks on, the unparseable start is skipped
        let ordered = service(ValidationConfig {
            ordered_range: true,
            ..Default::default()
        });
        assert!(ordered.add(&session, huge.clone()).is_ok());

        let strict = service(ValidationConfig {
            time_format: true,
            ..Default::default()
        });
        let err = strict.add(&session, huge).unwrap_err();
        assert!(err.message().contains("number too large"));
    }

    #[test]
    fn test_time_format_validation() {
        let svc = service(ValidationConfig {
            time_format: true,
            ..Default::default()
        });
        let session = SessionHandle::default();
        let err = svc.add(&session, fields("1:2:3", "00:00:10", "x")).unwrap_err();
        assert!(matches!(err, BookmarkError::Validation(_)));
        assert!(err.message().starts_with("Start"));
        assert!(svc.list(&session).bookmarks.is_empty());
    }

    #[test]
    fn test_ordered_range_validation() {
        let svc = service(ValidationConfig {
            ordered_range: true,
            ..Default::default()
        });
        let session = SessionHandle::default();
        assert!(svc.add(&session, fields("00:05:00", "00:01:00", "x")).is_err());
        assert!(svc.add(&session, fields("00:01:00", "00:01:00", "x")).is_ok());
        // unparseable values are left alone unless time_format is on
        assert!(svc.add(&session, fields("end", "start", "x")).is_ok());
    }

    #[test]
    fn test_non_empty_title_validation() {
        let svc = service(ValidationConfig {
            non_empty_title: true,
            ..Default::default()
        });
        let session = SessionHandle::default();
        assert!(svc.add(&session, fields("0", "1", "   ")).is_err());
    }

    #[test]
    fn test_update_unknown_id() {
        let svc = service(ValidationConfig::default());
        let session = SessionHandle::default();
        let err = svc
            .update(&session, BookmarkId::new(42), fields("0", "1", "x"))
            .unwrap_err();
        assert!(matches!(err, BookmarkError::NotFound(_)));
    }

    #[test]
    fn test_media_extension_filter() {
        let svc = service(ValidationConfig::default());
        assert!(svc.check_media_name("talk.mp4").is_ok());
        assert!(svc.check_media_name("TALK.M4A").is_ok());
        assert!(svc.check_media_name("talk.mp3").is_err());
        assert!(svc.check_media_name("talk").is_err());
    }

    #[test]
    fn test_attach_and_clear_media() {
        let svc = service(ValidationConfig::default());
        let session = SessionHandle::default();
        let view = svc
            .attach_media(
                &session,
                MediaInfo {
                    name: "episode.m4a".to_string(),
                    size: 1024,
                },
            )
            .unwrap();
        assert_eq!(view.media.unwrap().name, "episode.m4a");
        assert!(svc.clear_media(&session).media.is_none());
    }

    #[test]
    fn test_export_uses_snapshot() {
        let svc = service(ValidationConfig::default());
        let session = SessionHandle::default();
        svc.add(&session, fields("00:00:00", "00:00:10", "Intro")).unwrap();
        let bytes = svc.export(&session).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
