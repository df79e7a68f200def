use actix_web::{HttpResponse, Responder, web};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace};

use crate::api::services::bookmarks::{HealthResponse, success_response};
use crate::session::SessionRegistry;

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            start_datetime: chrono::Utc::now(),
        }
    }
}

/// Health Service
///
/// 没有外部依赖，只报告运行时间和活跃会话数。
pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        registry: web::Data<Arc<SessionRegistry>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        let start_time = Instant::now();
        trace!("Received health check request");

        let now = chrono::Utc::now();
        let uptime = (now - app_start_time.start_datetime).num_seconds().max(0) as u64;
        let sessions = registry.len();
        // 会话已满时新访客可能拿不到持久会话
        let status = if registry.is_full() { "degraded" } else { "healthy" };

        let health = HealthResponse {
            status: status.to_string(),
            timestamp: now.to_rfc3339(),
            uptime,
            sessions,
            response_time_ms: start_time.elapsed().as_millis() as u32,
        };

        debug!("Health check: uptime {}s, {} session(s)", uptime, sessions);

        success_response(health)
    }

    // 简单的就绪检查，只返回 200 状态码
    pub async fn readiness_check() -> impl Responder {
        trace!("Received readiness check request");

        HttpResponse::Ok()
            .append_header(("Content-Type", "text/plain"))
            .body("OK")
    }

    // 活跃性检查
    pub async fn liveness_check() -> impl Responder {
        trace!("Received liveness check request");

        HttpResponse::NoContent().finish()
    }
}

/// Health 路由配置
pub fn health_routes() -> actix_web::Scope {
    web::scope("")
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
        .route("/ready", web::get().to(HealthService::readiness_check))
        .route("/ready", web::head().to(HealthService::readiness_check))
        .route("/live", web::get().to(HealthService::liveness_check))
        .route("/live", web::head().to(HealthService::liveness_check))
}
