use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::LOCATION;
use actix_web::Error as ActixError;
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use super::request_trace::trace_id_of;
use crate::extractors::session::SESSION_COOKIE;

/// Emits one `request_completed` event per request; level follows the
/// status class (5xx error, 4xx warn, everything else info).
///
/// The quiz flow is redirect driven, so the event also records whether the
/// request carried a session cookie and where a 3xx response points.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let trace_id = trace_id_of(&req).unwrap_or_else(|| "unknown".to_string());
        let has_session = req.cookie(SESSION_COOKIE).is_some();

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, redirect_to) = match &result {
                Ok(res) => (res.status(), redirect_target(res)),
                Err(err) => (err.as_response_error().status_code(), None),
            };
            let status_code = status.as_u16();
            let duration_us = start.elapsed().as_micros() as u64;
            let redirect_to = redirect_to.unwrap_or_default();

            if status.is_server_error() {
                error!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, has_session, trace_id = %trace_id, "request_completed");
            } else if status.is_client_error() {
                warn!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, has_session, trace_id = %trace_id, "request_completed");
            } else if status.is_redirection() {
                info!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, has_session, redirect_to = %redirect_to, trace_id = %trace_id, "request_completed");
            } else {
                info!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, has_session, trace_id = %trace_id, "request_completed");
            }

            result
        })
    }
}

fn redirect_target<B>(res: &ServiceResponse<B>) -> Option<String> {
    res.headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}
