//! Session middleware
//!
//! 根据 cookie 找到（或新建）当前会话，把 `SessionHandle` 放进 request
//! extensions。新会话会在响应里下发 cookie。

use std::rc::Rc;
use std::sync::Arc;

use actix_service::{Service, Transform};
use actix_web::{
    Error, FromRequest, HttpMessage, HttpRequest,
    cookie::{Cookie, SameSite},
    dev::{Payload, ServiceRequest, ServiceResponse},
    error::ErrorInternalServerError,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{debug, warn};

use crate::config::SessionConfig;
use crate::session::{SessionHandle, SessionId, SessionRegistry};

struct SessionSettings {
    registry: Arc<SessionRegistry>,
    cookie_name: String,
    cookie_secure: bool,
}

impl SessionSettings {
    fn cookie(&self, id: &SessionId) -> Cookie<'static> {
        let mut cookie = Cookie::new(self.cookie_name.clone(), id.as_str().to_string());
        cookie.set_path("/");
        cookie.set_http_only(true);
        cookie.set_same_site(SameSite::Lax);
        cookie.set_secure(self.cookie_secure);
        cookie
    }
}

/// Session 中间件工厂
#[derive(Clone)]
pub struct SessionMiddleware {
    settings: Arc<SessionSettings>,
}

impl SessionMiddleware {
    pub fn new(registry: Arc<SessionRegistry>, config: &SessionConfig) -> Self {
        Self {
            settings: Arc::new(SessionSettings {
                registry,
                cookie_name: config.cookie_name.clone(),
                cookie_secure: config.cookie_secure,
            }),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionService {
            service: Rc::new(service),
            settings: self.settings.clone(),
        }))
    }
}

pub struct SessionService<S> {
    service: Rc<S>,
    settings: Arc<SessionSettings>,
}

impl<S, B> Service<ServiceRequest> for SessionService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_service::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let settings = self.settings.clone();

        let presented = req
            .cookie(&settings.cookie_name)
            .map(|c| c.value().to_string());
        let (id, handle, created) = settings.registry.get_or_create(presented.as_deref());
        if created {
            debug!("New session {} for {}", id, req.path());
        }
        req.extensions_mut().insert(handle);

        Box::pin(async move {
            let mut response = srv.call(req).await?;

            if created
                && let Err(e) = response.response_mut().add_cookie(&settings.cookie(&id))
            {
                warn!("Failed to set session cookie: {}", e);
            }

            Ok(response)
        })
    }
}

/// Handlers take the current session as an argument
impl FromRequest for SessionHandle {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<SessionHandle>()
                .cloned()
                .ok_or_else(|| ErrorInternalServerError("session middleware not installed")),
        )
    }
}
